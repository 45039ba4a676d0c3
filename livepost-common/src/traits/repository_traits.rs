use async_trait::async_trait;

use crate::error::Error;
use crate::models::{HistoryRecord, RunState};

/// The single-valued facts carried from one run to the next.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait RunStateRepository: Send + Sync {
    async fn get_last_start(&self) -> Result<Option<String>, Error>;
    async fn set_last_start(&self, started_at: &str) -> Result<(), Error>;

    async fn get_last_post(&self) -> Result<Option<String>, Error>;
    async fn set_last_post(&self, post_id: &str) -> Result<(), Error>;

    /// Reads both facts at once.
    async fn load(&self) -> Result<RunState, Error>;

    /// Drops both facts.
    async fn clear(&self) -> Result<(), Error>;
}

/// Append-only log of announced sessions, keyed by `started_at`.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait StreamHistoryRepository: Send + Sync {
    /// Inserts unless a record with the same `started_at` exists.
    /// Returns `true` when a row was written.
    async fn record_history(&self, title: &str, game_id: &str, started_at: &str) -> Result<bool, Error>;

    async fn get_by_start(&self, started_at: &str) -> Result<Option<HistoryRecord>, Error>;

    async fn list_recent(&self, limit: i64) -> Result<Vec<HistoryRecord>, Error>;
}
