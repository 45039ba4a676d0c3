// File: livepost-core/src/services/reconciler.rs
//
// Compares what Twitch reports now against what the last run stored, and
// brings the forum announcement in line.

use tracing::{debug, info, warn};

use crate::Error;
use crate::config::AppConfig;
use livepost_common::models::{LiveStream, NoOpReason, Outcome, StreamStatus};
use livepost_common::traits::platform_traits::{AnnouncementSink, StreamStatusSource};
use livepost_common::traits::repository_traits::{RunStateRepository, StreamHistoryRepository};

/// What a run has to do, decided from the observed status and the stored start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Skip(NoOpReason),
    /// New session, nothing announced yet.
    Announce(LiveStream),
    /// Stream ended, take the announcement down.
    Retract,
    /// Live with a different start time than the one on record.
    Restart(LiveStream),
}

/// The transition table. Non-live broadcasts are filtered before any
/// comparison and never trigger a deletion.
pub fn plan(status: &StreamStatus, previous_start: Option<&str>) -> Plan {
    match (status, previous_start) {
        (StreamStatus::NotLive { broadcast_type }, _) => Plan::Skip(NoOpReason::NotLive {
            broadcast_type: broadcast_type.clone(),
        }),
        (StreamStatus::Offline, None) => Plan::Skip(NoOpReason::NothingToDo),
        (StreamStatus::Offline, Some(_)) => Plan::Retract,
        (StreamStatus::Live(stream), None) => Plan::Announce(stream.clone()),
        (StreamStatus::Live(stream), Some(prev)) if stream.started_at == prev => {
            Plan::Skip(NoOpReason::AlreadyAnnounced)
        }
        (StreamStatus::Live(stream), Some(_)) => Plan::Restart(stream.clone()),
    }
}

pub struct Reconciler<'a> {
    config: &'a AppConfig,
    source: &'a dyn StreamStatusSource,
    sink: &'a dyn AnnouncementSink,
    run_state: &'a dyn RunStateRepository,
    history: &'a dyn StreamHistoryRepository,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        config: &'a AppConfig,
        source: &'a dyn StreamStatusSource,
        sink: &'a dyn AnnouncementSink,
        run_state: &'a dyn RunStateRepository,
        history: &'a dyn StreamHistoryRepository,
    ) -> Self {
        Self { config, source, sink, run_state, history }
    }

    /// One full reconciliation: observe, decide, act.
    pub async fn reconcile(&self) -> Result<Outcome, Error> {
        let channel = &self.config.twitch.channel;
        let status = self.source.fetch_status(channel).await?;
        debug!("Twitch reports {:?} for {}", status, channel);

        let previous = self.run_state.get_last_start().await?;

        match plan(&status, previous.as_deref()) {
            Plan::Skip(reason) => {
                if let (NoOpReason::NotLive { broadcast_type }, Some(prev)) = (&reason, &previous) {
                    warn!(
                        "{} is running a '{}' broadcast; announcement for the stream started at {} is left as is",
                        channel, broadcast_type, prev
                    );
                }
                Ok(Outcome::NoOp(reason))
            }
            Plan::Announce(stream) => {
                info!("Stream has come online.");
                let post_id = self.announce(&stream).await?;
                Ok(Outcome::Posted { post_id, started_at: stream.started_at })
            }
            Plan::Retract => {
                info!("Stream has gone offline.");
                let post_id = self.retract().await?;
                Ok(Outcome::Deleted { post_id })
            }
            Plan::Restart(stream) => {
                info!("Stream appears to have restarted, deleting old post and re-posting.");
                let deleted_post_id = self.run_state.get_last_post().await?;
                if let Some(old) = &deleted_post_id {
                    self.sink.delete_post(old).await?;
                }
                self.run_state.clear().await?;

                let post_id = self.announce(&stream).await?;
                Ok(Outcome::Restarted { deleted_post_id, post_id, started_at: stream.started_at })
            }
        }
    }

    /// Post, then persist post id, history and start time, in that order.
    async fn announce(&self, stream: &LiveStream) -> Result<String, Error> {
        let title = stream.announcement_title();
        let link = self.config.twitch.channel_url();

        let post_id = self.sink.create_post(&title, &link).await?;
        self.run_state.set_last_post(&post_id).await?;
        self.history
            .record_history(&title, &stream.game_id, &stream.started_at)
            .await?;
        self.run_state.set_last_start(&stream.started_at).await?;
        Ok(post_id)
    }

    async fn retract(&self) -> Result<String, Error> {
        let post_id = self
            .run_state
            .get_last_post()
            .await?
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                Error::StateInvariant(
                    "stream ended but no post id is recorded; run `livepost reset` after checking the subreddit"
                        .into(),
                )
            })?;

        self.sink.delete_post(&post_id).await?;
        self.run_state.clear().await?;
        Ok(post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(ts: &str) -> StreamStatus {
        StreamStatus::Live(LiveStream::new("Chatting", "509658", ts))
    }

    #[test]
    fn offline_without_history_is_nothing_to_do() {
        assert_eq!(plan(&StreamStatus::Offline, None), Plan::Skip(NoOpReason::NothingToDo));
    }

    #[test]
    fn offline_after_live_retracts() {
        assert_eq!(plan(&StreamStatus::Offline, Some("2024-01-01T00:00:00Z")), Plan::Retract);
    }

    #[test]
    fn new_stream_is_announced() {
        let status = live("2024-01-01T00:00:00Z");
        assert!(matches!(plan(&status, None), Plan::Announce(s) if s.title == "Chatting"));
    }

    #[test]
    fn same_session_is_skipped() {
        let status = live("2024-01-01T00:00:00Z");
        assert_eq!(
            plan(&status, Some("2024-01-01T00:00:00Z")),
            Plan::Skip(NoOpReason::AlreadyAnnounced)
        );
    }

    #[test]
    fn different_start_is_a_restart() {
        let status = live("2024-01-02T00:00:00Z");
        assert!(matches!(
            plan(&status, Some("2024-01-01T00:00:00Z")),
            Plan::Restart(s) if s.started_at == "2024-01-02T00:00:00Z"
        ));
    }

    #[test]
    fn rerun_never_retracts() {
        let status = StreamStatus::NotLive { broadcast_type: "rerun".into() };
        for previous in [None, Some("2024-01-01T00:00:00Z")] {
            assert_eq!(
                plan(&status, previous),
                Plan::Skip(NoOpReason::NotLive { broadcast_type: "rerun".into() })
            );
        }
    }
}
