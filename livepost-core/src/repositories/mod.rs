pub use livepost_common::traits::repository_traits::{RunStateRepository, StreamHistoryRepository};

pub mod sqlite;

pub use sqlite::{SqliteRunStateRepository, SqliteStreamHistoryRepository};
