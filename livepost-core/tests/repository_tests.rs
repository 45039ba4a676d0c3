// tests/repository_tests.rs

use livepost_core::repositories::sqlite::{SqliteRunStateRepository, SqliteStreamHistoryRepository};
use livepost_core::repositories::{RunStateRepository, StreamHistoryRepository};
use livepost_core::{Database, Error};
use livepost_common::models::RunState;

async fn setup_test_db() -> Database {
    let db = Database::new(":memory:").await.unwrap();
    db.migrate().await.unwrap();
    db
}

#[tokio::test]
async fn test_run_state_starts_empty() -> Result<(), Error> {
    let db = setup_test_db().await;
    let repo = SqliteRunStateRepository::new(db.pool().clone());

    assert_eq!(repo.get_last_start().await?, None);
    assert_eq!(repo.get_last_post().await?, None);
    assert!(repo.load().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_run_state_set_replaces_single_row() -> Result<(), Error> {
    let db = setup_test_db().await;
    let repo = SqliteRunStateRepository::new(db.pool().clone());

    repo.set_last_start("2024-01-01T00:00:00Z").await?;
    repo.set_last_start("2024-01-02T00:00:00Z").await?;
    repo.set_last_post("abc123").await?;
    repo.set_last_post("def456").await?;

    assert_eq!(repo.get_last_start().await?.as_deref(), Some("2024-01-02T00:00:00Z"));
    assert_eq!(repo.get_last_post().await?.as_deref(), Some("def456"));

    let (rows,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM run_state")
        .fetch_one(db.pool())
        .await?;
    assert_eq!(rows, 2, "one row per fact");

    assert_eq!(
        repo.load().await?,
        RunState {
            last_start: Some("2024-01-02T00:00:00Z".into()),
            last_post: Some("def456".into()),
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_run_state_clear_drops_both_facts() -> Result<(), Error> {
    let db = setup_test_db().await;
    let repo = SqliteRunStateRepository::new(db.pool().clone());

    repo.set_last_start("2024-01-01T00:00:00Z").await?;
    repo.set_last_post("abc123").await?;
    repo.clear().await?;

    assert!(repo.load().await?.is_empty());
    // Clearing twice is harmless.
    repo.clear().await?;
    Ok(())
}

#[tokio::test]
async fn test_history_insert_is_idempotent() -> Result<(), Error> {
    let db = setup_test_db().await;
    let repo = SqliteStreamHistoryRepository::new(db.pool().clone());

    assert!(repo.record_history("Live Now: Chatting", "509658", "2024-01-01T00:00:00Z").await?);
    assert!(!repo.record_history("Live Now: Chatting", "509658", "2024-01-01T00:00:00Z").await?);
    // Same session, different title: still keyed by started_at.
    assert!(!repo.record_history("Live Now: Renamed", "509658", "2024-01-01T00:00:00Z").await?);

    let all = repo.list_recent(10).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Live Now: Chatting");
    assert_eq!(all[0].game_id, "509658");
    Ok(())
}

#[tokio::test]
async fn test_history_lookup_and_ordering() -> Result<(), Error> {
    let db = setup_test_db().await;
    let repo = SqliteStreamHistoryRepository::new(db.pool().clone());

    repo.record_history("Live Now: First", "1", "2024-01-01T00:00:00Z").await?;
    repo.record_history("Live Now: Second", "2", "2024-01-02T00:00:00Z").await?;
    repo.record_history("Live Now: Third", "3", "2024-01-03T00:00:00Z").await?;

    let found = repo
        .get_by_start("2024-01-02T00:00:00Z")
        .await?
        .expect("record should exist");
    assert_eq!(found.title, "Live Now: Second");
    assert!(repo.get_by_start("2023-12-31T00:00:00Z").await?.is_none());

    let recent = repo.list_recent(2).await?;
    let starts: Vec<&str> = recent.iter().map(|r| r.started_at.as_str()).collect();
    assert_eq!(starts, vec!["2024-01-03T00:00:00Z", "2024-01-02T00:00:00Z"]);
    Ok(())
}
