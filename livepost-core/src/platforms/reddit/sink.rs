// File: livepost-core/src/platforms/reddit/sink.rs

use async_trait::async_trait;
use tracing::info;

use crate::Error;
use crate::config::RedditConfig;
use crate::platforms::reddit::client::{RedditClient, RedditEndpoints};
use livepost_common::traits::platform_traits::AnnouncementSink;

/// Announces streams as link posts on one subreddit.
pub struct RedditAnnouncementSink {
    client: RedditClient,
    subreddit: String,
}

impl RedditAnnouncementSink {
    pub fn new(config: &RedditConfig) -> Result<Self, Error> {
        Ok(Self {
            client: RedditClient::new(config)?,
            subreddit: config.subreddit.clone(),
        })
    }

    pub fn with_endpoints(config: &RedditConfig, endpoints: RedditEndpoints) -> Result<Self, Error> {
        Ok(Self {
            client: RedditClient::with_endpoints(config, endpoints)?,
            subreddit: config.subreddit.clone(),
        })
    }

    pub fn client(&self) -> &RedditClient {
        &self.client
    }
}

#[async_trait]
impl AnnouncementSink for RedditAnnouncementSink {
    async fn create_post(&self, title: &str, link: &str) -> Result<String, Error> {
        info!("Submitting to r/{}: title '{}'", self.subreddit, title);
        let post_id = self.client.submit_link(&self.subreddit, title, link).await?;
        info!("Submitted post {}", post_id);
        Ok(post_id)
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), Error> {
        if post_id.trim().is_empty() {
            return Err(Error::StateInvariant("delete_post called with an empty post id".into()));
        }
        info!("Deleting submission {}", post_id);
        self.client.delete_submission(post_id).await
    }
}
