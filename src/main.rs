use anyhow::Result;
use sea_orm::{ActiveValue, ConnectionTrait, Order, TransactionTrait};

use rosterdb::config::Config;
use rosterdb::entities::{member, team};
use rosterdb::logger;
use rosterdb::pagination::{PageRequest, Sort};
use rosterdb::repositories::{MemberRawQueries, MemberRepository, TeamRepository};
use rosterdb::storage::Storage;
use rosterdb::MemberQuery;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    let storage = Storage::from_config(&config.storage).await?;
    let conn = storage.conn();

    if !storage.has_data().await? {
        seed(conn).await?;
    }

    let usernames = MemberRepository::find_all_usernames(conn).await?;
    println!("members: {}", usernames.join(", "));

    let veterans = MemberQuery::new()
        .age_greater_than(30)
        .order_by(member::Column::Age, Order::Desc)
        .select()
        .all(conn)
        .await?;
    for row in &veterans {
        println!("over 30: {} ({})", row.username, row.age);
    }

    let page = MemberRepository::find_by_age_paged(
        conn,
        31,
        &PageRequest::of_sorted(0, 2, Sort::desc(member::Column::Username)),
    )
    .await?;
    println!(
        "age 31, page {} of {}: {} of {} row(s)",
        page.number() + 1,
        page.total_pages(),
        page.content().len(),
        page.total_elements()
    );

    // Locked read-modify-write in one transaction.
    let txn = conn.begin().await?;
    if let Some(row) = MemberRepository::find_by_username_for_update(&txn, "ariel").await? {
        let mut active: member::ActiveModel = row.into();
        active.age = ActiveValue::Set(24);
        MemberRepository::update(&txn, active).await?;
    }
    txn.commit().await?;

    let bumped = MemberRepository::bulk_increment_age(conn, 30).await?;
    println!("bulk age bump for 30+: {bumped} row(s)");

    let dtos = MemberRepository::find_member_dtos(conn).await?;
    println!("{}", serde_json::to_string_pretty(&dtos)?);

    let raw = MemberRepository::find_all_raw(conn).await?;
    println!("raw scan: {} row(s)", raw.len());

    Ok(())
}

/// Seed a small roster so every query below has something to chew on.
async fn seed<C: ConnectionTrait>(conn: &C) -> Result<()> {
    let red = TeamRepository::save(conn, team::ActiveModel::new("red")).await?;
    let blue = TeamRepository::save(conn, team::ActiveModel::new("blue")).await?;

    for (username, age, team_id) in [
        ("ariel", 23, Some(red.id)),
        ("badr", 31, Some(red.id)),
        ("chidi", 27, Some(blue.id)),
        ("dana", 31, Some(blue.id)),
        ("edda", 45, None),
    ] {
        let row = match team_id {
            Some(team_id) => member::ActiveModel::in_team(username, age, team_id),
            None => member::ActiveModel::new(username, age),
        };
        MemberRepository::save(conn, row).await?;
    }

    log::info!("seeded 2 teams and 5 members");
    Ok(())
}
