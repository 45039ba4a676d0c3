//! Link submissions ⟶ `POST /api/submit`, `POST /api/del`

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::Error;
use crate::platforms::ensure_success;
use crate::platforms::reddit::client::RedditClient;

/// Kind prefix Reddit puts on submission fullnames.
pub const LINK_PREFIX: &str = "t3_";

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    json: SubmitJson,
}

#[derive(Debug, Deserialize)]
struct SubmitJson {
    #[serde(default)]
    errors: Vec<Value>,
    data: Option<SubmitData>,
}

#[derive(Debug, Deserialize)]
struct SubmitData {
    id: String,
    #[serde(default)]
    url: Option<String>,
}

/// `abc123` and `t3_abc123` both become `t3_abc123`.
pub fn fullname(post_id: &str) -> String {
    if post_id.starts_with(LINK_PREFIX) {
        post_id.to_string()
    } else {
        format!("{}{}", LINK_PREFIX, post_id)
    }
}

impl RedditClient {
    /// Submit a link post and return its bare id (no `t3_` prefix).
    ///
    /// Resubmitting a link Reddit has already seen is allowed, and reply
    /// notifications are turned off.
    pub async fn submit_link(&self, subreddit: &str, title: &str, link: &str) -> Result<String, Error> {
        let resp = self
            .post_form(
                "api/submit",
                &[
                    ("api_type", "json"),
                    ("kind", "link"),
                    ("sr", subreddit),
                    ("title", title),
                    ("url", link),
                    ("resubmit", "true"),
                    ("sendreplies", "false"),
                ],
            )
            .await?;

        let resp = ensure_success(resp, "submit_link").await?;
        let body = resp.text().await?;
        let parsed: SubmitResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Platform(format!("submit_link parse error: {e}")))?;

        if !parsed.json.errors.is_empty() {
            return Err(Error::Platform(format!(
                "submit_link rejected: {}",
                Value::Array(parsed.json.errors)
            )));
        }

        let data = parsed
            .json
            .data
            .ok_or_else(|| Error::Platform("submit_link: response carried no submission".into()))?;
        debug!("Submission {} created at {:?}", data.id, data.url);
        Ok(data.id.trim_start_matches(LINK_PREFIX).to_string())
    }

    /// Delete a submission by id.
    pub async fn delete_submission(&self, post_id: &str) -> Result<(), Error> {
        let name = fullname(post_id);
        let resp = self.post_form("api/del", &[("id", name.as_str())]).await?;
        ensure_success(resp, "delete_submission").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullname_adds_prefix_once() {
        assert_eq!(fullname("abc123"), "t3_abc123");
        assert_eq!(fullname("t3_abc123"), "t3_abc123");
    }
}
