mod common;

use pretty_assertions::assert_eq;

use juriscontent_pipeline::sections;

#[tokio::test]
async fn test_replace_sections_inserts_rows() {
    let db = common::TestDb::new().await;

    let deleted = sections::replace_sections(&db.pool, "example-act-1998", &[1, 2, 3])
        .await
        .unwrap();
    assert_eq!(deleted, 0);

    let rows = sections::list_sections(&db.pool, "example-act-1998")
        .await
        .unwrap();
    let ids: Vec<i32> = rows.iter().map(|r| r.section_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_replace_sections_discards_previous_numbering() {
    let db = common::TestDb::new().await;

    sections::replace_sections(&db.pool, "example-act-1998", &[1, 2, 3, 4, 5])
        .await
        .unwrap();

    // The document shrank: the re-run must leave no rows beyond the new count
    let deleted = sections::replace_sections(&db.pool, "example-act-1998", &[1, 2])
        .await
        .unwrap();
    assert_eq!(deleted, 5);

    let rows = sections::list_sections(&db.pool, "example-act-1998")
        .await
        .unwrap();
    let ids: Vec<i32> = rows.iter().map(|r| r.section_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_replace_sections_is_scoped_to_one_document() {
    let db = common::TestDb::new().await;

    sections::replace_sections(&db.pool, "act-a", &[1, 2])
        .await
        .unwrap();
    sections::replace_sections(&db.pool, "act-b", &[1])
        .await
        .unwrap();

    sections::replace_sections(&db.pool, "act-a", &[1]).await.unwrap();

    let other = sections::list_sections(&db.pool, "act-b").await.unwrap();
    assert_eq!(other.len(), 1);
}

#[tokio::test]
async fn test_replace_sections_rolls_back_on_failure() {
    let db = common::TestDb::new().await;

    sections::replace_sections(&db.pool, "example-act-1998", &[1, 2, 3])
        .await
        .unwrap();

    // Duplicate section_id violates the unique constraint mid-transaction;
    // the previous rows must survive untouched.
    let result = sections::replace_sections(&db.pool, "example-act-1998", &[1, 1]).await;
    assert!(result.is_err());

    let rows = sections::list_sections(&db.pool, "example-act-1998")
        .await
        .unwrap();
    let ids: Vec<i32> = rows.iter().map(|r| r.section_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
