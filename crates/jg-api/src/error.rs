use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;
use tracing::error;

use jg_core::sources::{FeedError, ResumeParseError};

/// Upstream bodies and transport errors can contain anything; keep what the
/// client sees printable and short. Details stay in the log line.
fn sanitize_message(message: &str) -> String {
    const MAX_LEN: usize = 240;

    let mut cleaned = message
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.len() > MAX_LEN {
        let mut cut = MAX_LEN;
        while !cleaned.is_char_boundary(cut) {
            cut -= 1;
        }
        cleaned.truncate(cut);
        cleaned.push('…');
    }

    if cleaned.trim().is_empty() {
        "unexpected error".to_string()
    } else {
        cleaned
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unprocessable: {0}")]
    Unprocessable(String),
    #[error("job feed failure: {0}")]
    UpstreamFeed(String),
    #[error("resume parser failure: {0}")]
    UpstreamParser(String),
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let code = self.code();

        error!(code, status = %status, error = %self, "api_error");

        let body = Json(ErrorResponse {
            code,
            message: self.public_message().into_owned(),
        });

        (status, body).into_response()
    }
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unprocessable(_) => "unprocessable",
            ApiError::UpstreamFeed(_) => "upstream_feed",
            ApiError::UpstreamParser(_) => "upstream_parser",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn public_message(&self) -> Cow<'static, str> {
        match self {
            ApiError::BadRequest(msg) | ApiError::Unprocessable(msg) => {
                Cow::Owned(sanitize_message(msg))
            }
            ApiError::UpstreamFeed(_) => Cow::Borrowed("failed to load jobs"),
            ApiError::UpstreamParser(_) => Cow::Borrowed("failed to parse resume"),
            ApiError::ServiceUnavailable(_) => Cow::Borrowed("service unavailable"),
            ApiError::Internal(_) => Cow::Borrowed("internal server error"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UpstreamFeed(_) | ApiError::UpstreamParser(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FeedError> for ApiError {
    fn from(value: FeedError) -> Self {
        ApiError::UpstreamFeed(value.to_string())
    }
}

impl From<ResumeParseError> for ApiError {
    fn from(value: ResumeParseError) -> Self {
        ApiError::UpstreamParser(value.to_string())
    }
}
