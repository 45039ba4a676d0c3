use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two facts persisted between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// `started_at` of the session last announced.
    pub last_start: Option<String>,
    /// Forum id of the announcement for that session.
    pub last_post: Option<String>,
}

impl RunState {
    pub fn is_empty(&self) -> bool {
        self.last_start.is_none() && self.last_post.is_none()
    }
}

/// Reflects one row in the `stream_history` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub title: String,
    pub game_id: String,
    pub started_at: String,
    pub recorded_at: DateTime<Utc>,
}
