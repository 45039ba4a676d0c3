//! Script-app password grant ⟶ `POST /api/v1/access_token`

use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use tracing::debug;

use crate::Error;
use crate::config::RedditConfig;
use crate::platforms::ensure_success;

/// Reddit answers bad credentials with HTTP 200 and an `error` field.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    #[serde(default)]
    scope: Option<String>,
}

pub async fn fetch_password_token(
    http: &ReqwestClient,
    www_url: &str,
    config: &RedditConfig,
) -> Result<String, Error> {
    let url = format!("{}/api/v1/access_token", www_url.trim_end_matches('/'));
    let resp = http
        .post(&url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "password"),
            ("username", config.username.as_str()),
            ("password", config.password.as_str()),
        ])
        .send()
        .await
        .map_err(|e| Error::Auth(format!("reddit token network error: {e}")))?;

    let resp = ensure_success(resp, "reddit token").await?;
    let body = resp.text().await?;
    let parsed: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| Error::Auth(format!("reddit token parse error: {e}")))?;

    match (parsed.access_token, parsed.error) {
        (Some(token), None) => {
            debug!("Reddit token granted (scope {:?})", parsed.scope);
            Ok(token)
        }
        (_, Some(err)) => Err(Error::Auth(format!("reddit rejected credentials: {}", err))),
        (None, None) => Err(Error::Auth("reddit token response had no access_token".into())),
    }
}
