use serde::{Deserialize, Serialize};

/// Broadcast type Twitch reports for a regular live stream.
pub const LIVE_BROADCAST_TYPE: &str = "live";

/// One active live broadcast. `started_at` identifies the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStream {
    pub title: String,
    pub game_id: String,
    pub started_at: String,
}

impl LiveStream {
    pub fn new(title: &str, game_id: &str, started_at: &str) -> Self {
        Self {
            title: title.to_string(),
            game_id: game_id.to_string(),
            started_at: started_at.to_string(),
        }
    }

    /// Title used for the forum announcement of this stream.
    pub fn announcement_title(&self) -> String {
        format!("Live Now: {}", self.title)
    }
}

/// What the streaming platform currently reports for the watched channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamStatus {
    /// No active broadcast.
    Offline,
    /// Active broadcast of type "live".
    Live(LiveStream),
    /// Active broadcast of some other type (e.g. a rerun of old content).
    NotLive { broadcast_type: String },
}

impl StreamStatus {
    /// Classifies a broadcast by its reported type.
    pub fn from_broadcast(broadcast_type: &str, stream: LiveStream) -> Self {
        if broadcast_type == LIVE_BROADCAST_TYPE {
            StreamStatus::Live(stream)
        } else {
            StreamStatus::NotLive {
                broadcast_type: broadcast_type.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rerun_broadcast_is_not_live() {
        let stream = LiveStream::new("Old VOD", "509658", "2024-01-01T00:00:00Z");
        let status = StreamStatus::from_broadcast("rerun", stream);
        assert_eq!(
            status,
            StreamStatus::NotLive { broadcast_type: "rerun".to_string() }
        );
    }

    #[test]
    fn announcement_title_is_prefixed() {
        let stream = LiveStream::new("Chatting", "509658", "2024-01-01T00:00:00Z");
        assert_eq!(stream.announcement_title(), "Live Now: Chatting");
    }
}
