use livepost_core::Database;
use livepost_core::repositories::sqlite::SqliteRunStateRepository;
use livepost_core::repositories::RunStateRepository;

#[tokio::test]
async fn test_migration() -> anyhow::Result<()> {
    let db = Database::new(":memory:").await?;
    db.migrate().await?;
    // Re-applying is a no-op.
    db.migrate().await?;
    Ok(())
}

#[tokio::test]
async fn test_file_database_persists_between_opens() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("nested/dir/livepost.db");
    let db_path_str = db_path.to_str().expect("utf-8 temp path");

    {
        let db = Database::new(db_path_str).await?;
        db.migrate().await?;
        let repo = SqliteRunStateRepository::new(db.pool().clone());
        repo.set_last_start("2024-01-01T00:00:00Z").await?;
        repo.set_last_post("abc123").await?;
        db.pool().close().await;
    }
    assert!(db_path.exists(), "database file and parents are created");

    let db = Database::new(db_path_str).await?;
    db.migrate().await?;
    let repo = SqliteRunStateRepository::new(db.pool().clone());
    assert_eq!(repo.get_last_start().await?.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(repo.get_last_post().await?.as_deref(), Some("abc123"));
    Ok(())
}
