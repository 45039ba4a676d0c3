// src/repositories/sqlite/mod.rs

pub mod run_state;
pub mod stream_history;

pub use self::run_state::SqliteRunStateRepository;
pub use self::stream_history::SqliteStreamHistoryRepository;
