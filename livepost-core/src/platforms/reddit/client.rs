// File: livepost-core/src/platforms/reddit/client.rs

use reqwest::Client as ReqwestClient;
use tokio::sync::OnceCell;
use tracing::info;

use crate::Error;
use crate::config::RedditConfig;
use crate::platforms::reddit::requests::auth::fetch_password_token;

pub const DEFAULT_WWW_URL: &str = "https://www.reddit.com";
pub const DEFAULT_OAUTH_URL: &str = "https://oauth.reddit.com";

/// Base URLs for token exchange (`www`) and authenticated API calls (`oauth`).
#[derive(Debug, Clone)]
pub struct RedditEndpoints {
    pub www: String,
    pub oauth: String,
}

impl Default for RedditEndpoints {
    fn default() -> Self {
        Self {
            www: DEFAULT_WWW_URL.to_string(),
            oauth: DEFAULT_OAUTH_URL.to_string(),
        }
    }
}

/// Reddit API client for a script app.
///
/// Authenticates at most once, on first use, and reuses the bearer token for
/// the rest of the run.
pub struct RedditClient {
    http: ReqwestClient,
    config: RedditConfig,
    endpoints: RedditEndpoints,
    token: OnceCell<String>,
}

impl RedditClient {
    pub fn new(config: &RedditConfig) -> Result<Self, Error> {
        Self::with_endpoints(config, RedditEndpoints::default())
    }

    pub fn with_endpoints(config: &RedditConfig, endpoints: RedditEndpoints) -> Result<Self, Error> {
        let http = ReqwestClient::builder()
            .user_agent(config.effective_user_agent())
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
            endpoints,
            token: OnceCell::new(),
        })
    }

    /// Full URL for an authenticated API path, e.g. `api_url("api/submit")`.
    pub fn api_url(&self, api_path: &str) -> String {
        format!("{}/{}", self.endpoints.oauth.trim_end_matches('/'), api_path)
    }

    /// Bearer token for this run, fetched on first call.
    pub async fn bearer_token(&self) -> Result<&str, Error> {
        let token = self
            .token
            .get_or_try_init(|| async {
                info!("Authenticating with Reddit as /u/{}", self.config.username);
                fetch_password_token(&self.http, &self.endpoints.www, &self.config).await
            })
            .await?;
        Ok(token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.initialized()
    }

    /// POST a form to an authenticated API path.
    pub async fn post_form<T: serde::Serialize + ?Sized>(
        &self,
        api_path: &str,
        form: &T,
    ) -> Result<reqwest::Response, Error> {
        let token = self.bearer_token().await?;
        let resp = self
            .http
            .post(self.api_url(api_path))
            .bearer_auth(token)
            .form(form)
            .send()
            .await
            .map_err(|e| Error::Platform(format!("reddit {} network error: {e}", api_path)))?;
        Ok(resp)
    }
}
