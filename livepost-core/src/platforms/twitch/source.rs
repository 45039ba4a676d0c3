// File: livepost-core/src/platforms/twitch/source.rs

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::info;

use crate::Error;
use crate::config::TwitchConfig;
use crate::platforms::twitch::client::{TwitchEndpoints, TwitchHelixClient};
use crate::platforms::twitch::requests::token::fetch_app_token;
use livepost_common::models::{LiveStream, StreamStatus};
use livepost_common::traits::platform_traits::StreamStatusSource;

/// Reads a channel's broadcast state from Helix using an app access token.
pub struct TwitchStreamSource {
    http: ReqwestClient,
    client_id: String,
    client_secret: String,
    endpoints: TwitchEndpoints,
}

impl TwitchStreamSource {
    pub fn new(config: &TwitchConfig) -> Self {
        Self::with_endpoints(config, TwitchEndpoints::default())
    }

    /// Points the source at other base URLs (used by the HTTP fixtures in tests).
    pub fn with_endpoints(config: &TwitchConfig, endpoints: TwitchEndpoints) -> Self {
        Self {
            http: ReqwestClient::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            endpoints,
        }
    }

    async fn helix_client(&self) -> Result<TwitchHelixClient, Error> {
        let token = fetch_app_token(
            &self.http,
            &self.endpoints.oauth,
            &self.client_id,
            &self.client_secret,
        )
        .await?;
        Ok(TwitchHelixClient::new(
            self.http.clone(),
            &token,
            &self.client_id,
            &self.endpoints.helix,
        ))
    }
}

#[async_trait]
impl StreamStatusSource for TwitchStreamSource {
    async fn fetch_status(&self, channel: &str) -> Result<StreamStatus, Error> {
        let client = self.helix_client().await?;

        info!("Requesting user id for {} from Twitch", channel);
        let user_id = client.fetch_user_id(channel).await?;

        info!("Requesting current streams for {} (id {})", channel, user_id);
        let status = match client.fetch_current_stream(&user_id).await? {
            None => StreamStatus::Offline,
            Some(stream) => StreamStatus::from_broadcast(
                &stream.type_field,
                LiveStream {
                    title: stream.title,
                    game_id: stream.game_id,
                    started_at: stream.started_at,
                },
            ),
        };
        Ok(status)
    }
}
