use rosterdb::config::StorageConfig;
use rosterdb::entities::{member, team};
use rosterdb::repositories::{MemberRepository, TeamRepository};
use rosterdb::storage::Storage;

#[tokio::test]
async fn test_in_memory_storage_creation() {
    // Schema creation runs at open, so a failing migration would surface here.
    let result = Storage::in_memory().await;
    assert!(result.is_ok(), "in-memory storage should open cleanly");
}

#[tokio::test]
async fn test_parallel_in_memory_storages_are_isolated() {
    let first = Storage::in_memory().await.unwrap();
    let second = Storage::in_memory().await.unwrap();

    MemberRepository::save(first.conn(), member::ActiveModel::new("only-here", 20))
        .await
        .unwrap();

    assert_eq!(MemberRepository::count(first.conn()).await.unwrap(), 1);
    assert_eq!(MemberRepository::count(second.conn()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_has_data_flips_after_the_first_member() {
    let storage = Storage::in_memory().await.unwrap();
    assert!(!storage.has_data().await.unwrap());

    MemberRepository::save(storage.conn(), member::ActiveModel::new("aaa", 20))
        .await
        .unwrap();
    assert!(storage.has_data().await.unwrap());
}

#[tokio::test]
async fn test_clear_all_wipes_members_and_teams() {
    let storage = Storage::in_memory().await.unwrap();
    let conn = storage.conn();

    let team = TeamRepository::save(conn, team::ActiveModel::new("teamA")).await.unwrap();
    MemberRepository::save(conn, member::ActiveModel::in_team("aaa", 20, team.id))
        .await
        .unwrap();

    storage.clear_all().await.unwrap();

    assert_eq!(MemberRepository::count(conn).await.unwrap(), 0);
    assert_eq!(TeamRepository::count(conn).await.unwrap(), 0);
}

#[tokio::test]
async fn test_reopening_the_same_database_is_idempotent() {
    // Two pools on one shared-cache database; the second open must tolerate
    // the existing schema and see the existing rows.
    let url = "sqlite:file:rosterdb_reopen_test?mode=memory&cache=shared";
    let first = Storage::connect(url).await.unwrap();
    MemberRepository::save(first.conn(), member::ActiveModel::new("aaa", 20))
        .await
        .unwrap();

    let second = Storage::connect(url).await.unwrap();
    assert_eq!(MemberRepository::count(second.conn()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_memory_database_survives_pool_shutdown() {
    // A shared-cache in-memory database dies with its last open handle, and
    // the pool may close every connection it owns (reaping, shutdown). The
    // anchor connection must keep the data alive as long as the Storage does.
    let url = "sqlite:file:rosterdb_anchor_test?mode=memory&cache=shared";
    let storage = Storage::connect(url).await.unwrap();
    MemberRepository::save(storage.conn(), member::ActiveModel::new("aaa", 20))
        .await
        .unwrap();

    storage.conn().clone().close().await.unwrap();

    let reopened = Storage::connect(url).await.unwrap();
    assert_eq!(MemberRepository::count(reopened.conn()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_from_config_without_url_uses_memory() {
    let config = StorageConfig::default();
    let storage = Storage::from_config(&config).await.unwrap();
    assert!(!storage.has_data().await.unwrap());
}

#[tokio::test]
async fn test_from_config_with_url_opens_the_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");
    let config = StorageConfig {
        url: Some(format!("sqlite://{}?mode=rwc", path.display())),
    };

    let storage = Storage::from_config(&config).await.unwrap();
    MemberRepository::save(storage.conn(), member::ActiveModel::new("aaa", 20))
        .await
        .unwrap();
    assert!(path.exists());
    drop(storage);

    // A second open on the same file sees the persisted row.
    let reopened = Storage::from_config(&config).await.unwrap();
    assert_eq!(MemberRepository::count(reopened.conn()).await.unwrap(), 1);
}
