// File: livepost-core/src/config.rs

use std::path::PathBuf;

use crate::Error;

pub const DEFAULT_DB_PATH: &str = "data/livepost.db";

/// Credentials and target channel on Twitch.
#[derive(Debug, Clone, Default)]
pub struct TwitchConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Login name of the channel being watched.
    pub channel: String,
}

impl TwitchConfig {
    /// Public URL of the channel, used as the link in announcements.
    pub fn channel_url(&self) -> String {
        format!("https://www.twitch.tv/{}", self.channel)
    }
}

/// Script-app credentials and the subreddit announcements go to.
#[derive(Debug, Clone, Default)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub subreddit: String,
    /// Falls back to [`RedditConfig::effective_user_agent`] when `None`.
    pub user_agent: Option<String>,
}

impl RedditConfig {
    pub fn effective_user_agent(&self) -> String {
        match &self.user_agent {
            Some(ua) if !ua.trim().is_empty() => ua.clone(),
            _ => format!(
                "livepost/{} (by /u/{})",
                env!("CARGO_PKG_VERSION"),
                self.username
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path to the SQLite file, or ":memory:".
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { db_path: DEFAULT_DB_PATH.to_string() }
    }
}

impl StorageConfig {
    /// Lock file guarding the database against overlapping runs.
    pub fn lock_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.lock", self.db_path))
    }
}

/// Everything one invocation needs. Built once at startup and handed out by reference.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub twitch: TwitchConfig,
    pub reddit: RedditConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Rejects empty required values before any state or network access.
    pub fn validate(&self) -> Result<(), Error> {
        let required = [
            ("Twitch client id", &self.twitch.client_id),
            ("Twitch client secret", &self.twitch.client_secret),
            ("Twitch channel", &self.twitch.channel),
            ("Reddit client id", &self.reddit.client_id),
            ("Reddit client secret", &self.reddit.client_secret),
            ("Reddit username", &self.reddit.username),
            ("Reddit password", &self.reddit.password),
            ("subreddit", &self.reddit.subreddit),
            ("database path", &self.storage.db_path),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("Missing value for {}", name)));
            }
        }
        Ok(())
    }
}
