//! Remotive job-feed client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{FeedError, JobFeed};

pub const DEFAULT_BASE_URL: &str = "https://remotive.com/api/remote-jobs";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Deserialize)]
struct FeedEnvelope {
    #[serde(default)]
    jobs: Vec<Value>,
}

pub struct RemotiveFeed {
    client: reqwest::Client,
    base_url: String,
}

impl RemotiveFeed {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl JobFeed for RemotiveFeed {
    async fn fetch_jobs(
        &self,
        keyword: Option<&str>,
        location: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Value>, FeedError> {
        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[("limit", limit.to_string())]);
        if let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) {
            request = request.query(&[("search", keyword)]);
        }

        let response = request.timeout(REQUEST_TIMEOUT).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: FeedEnvelope = response.json().await?;
        let jobs = narrow_by_location(envelope.jobs, location);
        debug!(count = jobs.len(), "fetched job feed page");
        Ok(jobs)
    }
}

/// The feed API has no location parameter, so narrow the page locally with
/// the same case-insensitive substring rule the filter engine uses.
fn narrow_by_location(mut jobs: Vec<Value>, location: Option<&str>) -> Vec<Value> {
    let Some(needle) = location
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
    else {
        return jobs;
    };

    jobs.retain(|job| {
        job.get("candidate_required_location")
            .and_then(Value::as_str)
            .map(|loc| loc.to_lowercase().contains(&needle))
            .unwrap_or(false)
    });
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page() -> Vec<Value> {
        vec![
            json!({ "id": 1, "candidate_required_location": "Worldwide" }),
            json!({ "id": 2, "candidate_required_location": "Europe" }),
            json!({ "id": 3 }),
        ]
    }

    #[test]
    fn no_location_keeps_the_whole_page() {
        assert_eq!(narrow_by_location(page(), None).len(), 3);
        assert_eq!(narrow_by_location(page(), Some("  ")).len(), 3);
    }

    #[test]
    fn location_narrows_by_substring() {
        let kept = narrow_by_location(page(), Some("euro"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0]["id"], 2);
    }

    #[test]
    fn records_without_a_location_never_match_a_query() {
        let kept = narrow_by_location(page(), Some("worldwide"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0]["id"], 1);
    }

    #[test]
    fn envelope_tolerates_a_missing_jobs_key() {
        let envelope: FeedEnvelope = serde_json::from_value(json!({ "job-count": 0 })).unwrap();
        assert!(envelope.jobs.is_empty());
    }
}
