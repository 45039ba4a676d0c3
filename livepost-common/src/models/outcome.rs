use std::fmt;

/// Why a run finished without touching the forum or the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOpReason {
    /// Offline now and nothing announced previously.
    NothingToDo,
    /// Live, and this session was already announced.
    AlreadyAnnounced,
    /// A non-live broadcast (e.g. rerun) is running. Any existing post is left alone.
    NotLive { broadcast_type: String },
}

/// Result of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoOp(NoOpReason),
    Posted {
        post_id: String,
        started_at: String,
    },
    Deleted {
        post_id: String,
    },
    Restarted {
        deleted_post_id: Option<String>,
        post_id: String,
        started_at: String,
    },
}

impl Outcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, Outcome::NoOp(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoOp(NoOpReason::NothingToDo) => {
                write!(f, "stream is offline and was not online in the previous run")
            }
            Outcome::NoOp(NoOpReason::AlreadyAnnounced) => {
                write!(f, "stream is online and started_at matches the previous run")
            }
            Outcome::NoOp(NoOpReason::NotLive { broadcast_type }) => {
                write!(f, "active broadcast is of type '{}', not live", broadcast_type)
            }
            Outcome::Posted { post_id, started_at } => {
                write!(f, "posted {} for stream started at {}", post_id, started_at)
            }
            Outcome::Deleted { post_id } => write!(f, "deleted {}", post_id),
            Outcome::Restarted { deleted_post_id, post_id, started_at } => match deleted_post_id {
                Some(old) => write!(
                    f,
                    "stream restarted at {}; replaced {} with {}",
                    started_at, old, post_id
                ),
                None => write!(f, "stream restarted at {}; posted {}", started_at, post_id),
            },
        }
    }
}
