use rosterdb::entities::member;
use rosterdb::pagination::{fetch_page, Page, PageRequest, Slice, Sort};
use rosterdb::projections::MemberDto;
use rosterdb::query::MemberQuery;
use rosterdb::repositories::MemberRepository;
use rosterdb::storage::Storage;

async fn storage_with_members(ages: &[i32]) -> Storage {
    let storage = Storage::in_memory().await.unwrap();
    for (i, age) in ages.iter().enumerate() {
        MemberRepository::save(
            storage.conn(),
            member::ActiveModel::new(format!("member{i}"), *age),
        )
        .await
        .unwrap();
    }
    storage
}

#[test]
fn test_page_request_clamps_zero_size() {
    let request: PageRequest<member::Column> = PageRequest::of(0, 0);
    assert_eq!(request.size(), 1);
    assert!(!request.sort().is_sorted());
}

#[test]
fn test_page_metadata_math() {
    let page = Page::new(vec![1, 2, 3], 0, 3, 7);
    assert_eq!(page.total_pages(), 3);
    assert!(page.is_first());
    assert!(page.has_next());
    assert!(!page.is_last());
    assert!(!page.has_previous());

    let last = Page::new(vec![7], 2, 3, 7);
    assert!(last.is_last());
    assert!(!last.has_next());
    assert!(last.has_previous());

    let empty: Page<i32> = Page::new(Vec::new(), 0, 3, 0);
    assert_eq!(empty.total_pages(), 0);
    assert!(empty.is_empty());
    assert!(empty.is_first());
    assert!(empty.is_last());
}

#[test]
fn test_slice_metadata() {
    let slice = Slice::new(vec![1, 2, 3], 0, 3, true);
    assert!(slice.is_first());
    assert!(slice.has_next());
    assert!(!slice.is_last());

    let tail = Slice::new(vec![7], 2, 3, false);
    assert!(tail.is_last());
    assert!(!tail.is_empty());
}

#[tokio::test]
async fn test_page_walks_seven_rows_in_three_windows() {
    let storage = storage_with_members(&[10; 7]).await;
    let conn = storage.conn();

    let sort = || Sort::desc(member::Column::Username);

    let first = MemberRepository::find_by_age_paged(conn, 10, &PageRequest::of_sorted(0, 3, sort()))
        .await
        .unwrap();
    assert_eq!(first.content().len(), 3);
    assert_eq!(first.total_elements(), 7);
    assert_eq!(first.total_pages(), 3);
    assert_eq!(first.number(), 0);
    assert!(first.is_first());
    assert!(first.has_next());
    // Sort applies before windowing, so the highest username leads.
    assert_eq!(first.content()[0].username, "member6");

    let second = MemberRepository::find_by_age_paged(conn, 10, &PageRequest::of_sorted(1, 3, sort()))
        .await
        .unwrap();
    assert_eq!(second.content().len(), 3);
    assert!(second.has_previous());
    assert!(second.has_next());

    let third = MemberRepository::find_by_age_paged(conn, 10, &PageRequest::of_sorted(2, 3, sort()))
        .await
        .unwrap();
    assert_eq!(third.content().len(), 1);
    assert!(third.is_last());
    assert_eq!(third.content()[0].username, "member0");
}

#[tokio::test]
async fn test_page_filter_excludes_other_ages() {
    let storage = storage_with_members(&[10, 10, 20]).await;
    let conn = storage.conn();

    let page = MemberRepository::find_by_age_paged(conn, 10, &PageRequest::of(0, 5))
        .await
        .unwrap();
    assert_eq!(page.total_elements(), 2);
    assert!(page.content().iter().all(|m| m.age == 10));
}

#[tokio::test]
async fn test_page_beyond_the_end_is_empty() {
    let storage = storage_with_members(&[10; 7]).await;

    let page = MemberRepository::find_by_age_paged(storage.conn(), 10, &PageRequest::of(5, 3))
        .await
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.number(), 5);
    assert_eq!(page.total_elements(), 7);
    assert!(page.is_last());
}

#[tokio::test]
async fn test_slice_uses_a_lookahead_row() {
    let storage = storage_with_members(&[10; 7]).await;
    let conn = storage.conn();

    let first = MemberRepository::find_by_age_sliced(conn, 10, &PageRequest::of(0, 3))
        .await
        .unwrap();
    assert_eq!(first.content().len(), 3);
    assert!(first.is_first());
    assert!(first.has_next());

    let last = MemberRepository::find_by_age_sliced(conn, 10, &PageRequest::of(2, 3))
        .await
        .unwrap();
    assert_eq!(last.content().len(), 1);
    assert!(!last.has_next());
    assert!(last.is_last());
}

#[tokio::test]
async fn test_slice_on_an_exact_boundary() {
    let storage = storage_with_members(&[10; 6]).await;

    let slice = MemberRepository::find_by_age_sliced(storage.conn(), 10, &PageRequest::of(1, 3))
        .await
        .unwrap();
    assert_eq!(slice.content().len(), 3);
    assert!(!slice.has_next(), "no row beyond the window, so no next slice");
}

#[tokio::test]
async fn test_page_map_converts_content_and_keeps_metadata() {
    let storage = storage_with_members(&[10; 7]).await;

    let page = MemberRepository::find_by_age_paged(storage.conn(), 10, &PageRequest::of(0, 3))
        .await
        .unwrap();
    let dtos = page.map(MemberDto::from);

    assert_eq!(dtos.content().len(), 3);
    assert_eq!(dtos.total_elements(), 7);
    assert_eq!(dtos.number(), 0);
    assert!(dtos.content().iter().all(|d| d.team_name.is_none()));
}

#[tokio::test]
async fn test_slice_map_converts_content_and_keeps_metadata() {
    let storage = storage_with_members(&[10; 7]).await;

    let slice = MemberRepository::find_by_age_sliced(storage.conn(), 10, &PageRequest::of(0, 3))
        .await
        .unwrap();
    let dtos = slice.map(MemberDto::from);

    assert_eq!(dtos.content().len(), 3);
    assert_eq!(dtos.number(), 0);
    assert_eq!(dtos.size(), 3);
    assert!(dtos.has_next());
    assert!(dtos.content().iter().all(|d| d.team_name.is_none()));
}

#[tokio::test]
async fn test_fetch_page_over_an_arbitrary_query_with_multi_term_sort() {
    let storage = Storage::in_memory().await.unwrap();
    let conn = storage.conn();
    for (name, age) in [("bbb", 20), ("aaa", 20), ("aaa", 10)] {
        MemberRepository::save(conn, member::ActiveModel::new(name, age)).await.unwrap();
    }

    let sort = Sort::asc(member::Column::Username).then_desc(member::Column::Age);
    let page = fetch_page(conn, MemberQuery::new().select(), &PageRequest::of_sorted(0, 10, sort))
        .await
        .unwrap();

    let order: Vec<(String, i32)> = page
        .content()
        .iter()
        .map(|m| (m.username.clone(), m.age))
        .collect();
    assert_eq!(
        order,
        vec![
            ("aaa".to_string(), 20),
            ("aaa".to_string(), 10),
            ("bbb".to_string(), 20),
        ]
    );
}
