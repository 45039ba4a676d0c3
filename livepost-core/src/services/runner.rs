// File: livepost-core/src/services/runner.rs

use tracing::info;

use crate::Error;
use crate::config::AppConfig;
use crate::db::Database;
use crate::lock::RunLock;
use crate::platforms::reddit::RedditAnnouncementSink;
use crate::platforms::twitch::TwitchStreamSource;
use crate::repositories::sqlite::{SqliteRunStateRepository, SqliteStreamHistoryRepository};
use crate::services::reconciler::Reconciler;
use livepost_common::models::Outcome;

/// Opens the store and applies migrations.
pub async fn open_store(config: &AppConfig) -> Result<Database, Error> {
    let db = Database::new(&config.storage.db_path).await?;
    db.migrate().await?;
    Ok(db)
}

/// Runs a single invocation against the real platforms.
///
/// Config is validated before the lock, the store or the network is touched.
pub async fn run_once(config: &AppConfig) -> Result<Outcome, Error> {
    config.validate()?;

    let _lock = RunLock::acquire(config.storage.lock_path())?;
    let db = open_store(config).await?;

    let run_state = SqliteRunStateRepository::new(db.pool().clone());
    let history = SqliteStreamHistoryRepository::new(db.pool().clone());
    let source = TwitchStreamSource::new(&config.twitch);
    let sink = RedditAnnouncementSink::new(&config.reddit)?;

    let reconciler = Reconciler::new(config, &source, &sink, &run_state, &history);
    let outcome = reconciler.reconcile().await?;
    info!("Run finished: {}", outcome);

    db.pool().close().await;
    Ok(outcome)
}
