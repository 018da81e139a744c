//! External collaborators: the job feed and the résumé parser.
//!
//! Both traits hand back loosely-typed JSON. The normalizer and the résumé
//! adapter own all defensive interpretation; these clients only move bytes
//! and surface upstream failures verbatim. No retries here, callers decide
//! how a failure reaches the user.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod affinda;
pub mod remotive;

pub use affinda::AffindaParser;
pub use remotive::RemotiveFeed;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("job feed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("job feed returned {status}: {body}")]
    Upstream { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum ResumeParseError {
    #[error("resume parser request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("resume parser returned {status}: {body}")]
    Upstream { status: u16, body: String },
}

/// Upstream job feed returning raw posting records.
#[async_trait]
pub trait JobFeed: Send + Sync {
    async fn fetch_jobs(
        &self,
        keyword: Option<&str>,
        location: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Value>, FeedError>;
}

/// Upstream résumé parser in wait-for-completion mode: one call, one full
/// response body, no partial results.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    async fn parse(
        &self,
        file: Vec<u8>,
        filename: &str,
        mime_type: &str,
    ) -> Result<Value, ResumeParseError>;
}
