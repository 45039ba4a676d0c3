//! OAuth client-credentials grant ⟶ app access token for Helix.

use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use tracing::debug;

use crate::Error;
use crate::platforms::ensure_success;

#[derive(Debug, Deserialize)]
struct AppTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Exchanges the app's client id/secret for an app access token.
pub async fn fetch_app_token(
    http: &ReqwestClient,
    oauth_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, Error> {
    let url = format!("{}/token", oauth_url.trim_end_matches('/'));
    let resp = http
        .post(&url)
        .form(&[
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "client_credentials"),
        ])
        .send()
        .await
        .map_err(|e| Error::Auth(format!("fetch_app_token network error: {e}")))?;

    let resp = ensure_success(resp, "fetch_app_token").await?;
    let body = resp.text().await?;
    let token: AppTokenResponse = serde_json::from_str(&body)
        .map_err(|e| Error::Auth(format!("fetch_app_token parse error: {e}")))?;

    debug!("Obtained Twitch app token (expires in {:?} s)", token.expires_in);
    Ok(token.access_token)
}
