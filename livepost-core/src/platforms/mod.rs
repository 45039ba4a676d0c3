// File: src/platforms/mod.rs

pub use livepost_common::traits::platform_traits::{AnnouncementSink, StreamStatusSource};

pub mod twitch;
pub mod reddit;

/// Turns a non-2xx response into `Error::Platform`, keeping the body for the log.
pub(crate) async fn ensure_success(
    resp: reqwest::Response,
    context: &str,
) -> Result<reqwest::Response, crate::Error> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body_text = resp.text().await.unwrap_or_default();
    Err(crate::Error::Platform(format!("{}: HTTP {} => {}", context, status, body_text)))
}
