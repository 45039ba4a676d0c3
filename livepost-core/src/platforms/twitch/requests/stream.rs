// ========================================================
// File: livepost-core/src/platforms/twitch/requests/stream.rs
// ========================================================
use serde::Deserialize;
use tracing::debug;

use crate::Error;
use crate::platforms::ensure_success;
use crate::platforms::twitch::client::TwitchHelixClient;

/// Response from "Get Streams" endpoint.
#[derive(Debug, Deserialize)]
pub struct StreamsResponse {
    pub data: Vec<StreamData>,
}

/// Single stream data record (only the fields we use).
#[derive(Debug, Clone, Deserialize)]
pub struct StreamData {
    #[serde(default)]
    pub game_id: String,
    #[serde(rename = "type")]
    pub type_field: String, // e.g., "live"
    pub title: String,
    pub started_at: String,
}

/// Response from "Get Users" endpoint.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub data: Vec<UserData>,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub id: String,
    pub login: String,
}

impl TwitchHelixClient {
    /// Resolve login → user id. An unknown login is an error.
    pub async fn fetch_user_id(&self, login: &str) -> Result<String, Error> {
        let resp = self
            .get("users")
            .query(&[("login", login.to_lowercase())])
            .send()
            .await
            .map_err(|e| Error::Platform(format!("fetch_user_id network error: {e}")))?;

        let resp = ensure_success(resp, "fetch_user_id").await?;
        let body = resp.text().await?;
        let parsed: UsersResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Platform(format!("fetch_user_id parse error: {e}")))?;

        let user = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| Error::Platform(format!("Twitch channel '{}' not found", login)))?;

        debug!("Resolved Twitch login {} to user id {}", user.login, user.id);
        Ok(user.id)
    }

    /// The channel's current broadcast, or `None` when nothing is running.
    pub async fn fetch_current_stream(&self, user_id: &str) -> Result<Option<StreamData>, Error> {
        let resp = self
            .get("streams")
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(|e| Error::Platform(format!("fetch_current_stream network error: {e}")))?;

        let resp = ensure_success(resp, "fetch_current_stream").await?;
        let body = resp.text().await?;
        let parsed: StreamsResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Platform(format!("fetch_current_stream parse error: {e}")))?;

        Ok(parsed.data.into_iter().next())
    }
}
