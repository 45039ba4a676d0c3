// File: livepost-core/src/platforms/twitch/client.rs

use reqwest::Client as ReqwestClient;

pub const DEFAULT_HELIX_URL: &str = "https://api.twitch.tv/helix";
pub const DEFAULT_OAUTH_URL: &str = "https://id.twitch.tv/oauth2";

/// Base URLs for the Helix API and the token endpoint.
#[derive(Debug, Clone)]
pub struct TwitchEndpoints {
    pub helix: String,
    pub oauth: String,
}

impl Default for TwitchEndpoints {
    fn default() -> Self {
        Self {
            helix: DEFAULT_HELIX_URL.to_string(),
            oauth: DEFAULT_OAUTH_URL.to_string(),
        }
    }
}

/// A small wrapper client for calling Helix endpoints with an app token.
///
/// The request helpers live in `requests::*` as `impl TwitchHelixClient` blocks.
pub struct TwitchHelixClient {
    http: ReqwestClient,
    bearer_token: String,
    client_id: String,
    helix_url: String,
}

impl TwitchHelixClient {
    pub fn new(http: ReqwestClient, bearer_token: &str, client_id: &str, helix_url: &str) -> Self {
        Self {
            http,
            bearer_token: bearer_token.to_string(),
            client_id: client_id.to_string(),
            helix_url: helix_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Full URL for a Helix resource, e.g. `url("streams")`.
    pub fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.helix_url, resource)
    }

    /// GET with the Client-Id and Authorization headers Helix requires.
    pub fn get(&self, resource: &str) -> reqwest::RequestBuilder {
        self.http
            .get(self.url(resource))
            .header("Client-Id", self.client_id())
            .header("Authorization", format!("Bearer {}", self.bearer_token()))
    }
}
