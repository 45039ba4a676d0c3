// File: livepost-common/src/models/mod.rs
pub mod stream;
pub mod run_state;
pub mod outcome;

pub use stream::{LiveStream, StreamStatus};
pub use run_state::{HistoryRecord, RunState};
pub use outcome::{NoOpReason, Outcome};
