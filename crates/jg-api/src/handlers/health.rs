use axum::{extract::State, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::state::SharedState;

pub async fn health(
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    Ok(Json(json!({
        "status": "ok",
        "application": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
