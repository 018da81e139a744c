//! Affinda résumé-parser client.
//!
//! Single synchronous-style call: the `wait` flag asks the service to hold
//! the connection until parsing finishes, so the response body is always the
//! complete document.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

use super::{ResumeParseError, ResumeParser};

pub const DEFAULT_BASE_URL: &str = "https://api.affinda.com/v2/resumes";

// Parsing a dense PDF routinely takes tens of seconds in wait mode.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct AffindaParser {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AffindaParser {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ResumeParser for AffindaParser {
    async fn parse(
        &self,
        file: Vec<u8>,
        filename: &str,
        mime_type: &str,
    ) -> Result<Value, ResumeParseError> {
        let part = Part::bytes(file)
            .file_name(filename.to_string())
            .mime_str(mime_type)?;
        let form = Form::new().part("file", part).text("wait", "true");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResumeParseError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        debug!(filename, "resume parsed upstream");
        Ok(response.json().await?)
    }
}
