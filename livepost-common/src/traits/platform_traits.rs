use async_trait::async_trait;

use crate::error::Error;
use crate::models::StreamStatus;

/// Reports the current broadcast state of a channel.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait StreamStatusSource: Send + Sync {
    async fn fetch_status(&self, channel: &str) -> Result<StreamStatus, Error>;
}

/// Publishes and retracts the forum announcement.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait AnnouncementSink: Send + Sync {
    /// Submits a link post and returns its id.
    async fn create_post(&self, title: &str, link: &str) -> Result<String, Error>;

    /// Removes a previously created post. An empty id is an error.
    async fn delete_post(&self, post_id: &str) -> Result<(), Error>;
}
