use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use jg_core::matching::{build_advice, compute_match, MatchAdvice, MatchResult};
use jg_core::schema::{Job, ParsedResume};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job: Job,
    pub resume: ParsedResume,
}

/// Advisor report plus its guidance texts, flattened into one object the way
/// the board UI consumes it.
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    #[serde(flatten)]
    pub advice: MatchAdvice,
}

pub async fn score_match(
    State(state): State<SharedState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let result = compute_match(
        &request.job,
        Some(&request.resume),
        &state.normalizer.vocabulary,
    )
    .ok_or_else(|| {
        ApiError::Unprocessable("job carries no skills to match against".into())
    })?;

    info!(
        job_id = %request.job.id,
        score = result.score,
        level = result.level.as_str(),
        "match scored"
    );

    let advice = build_advice(&request.job, &result);
    Ok(Json(MatchResponse { result, advice }))
}
