pub mod health;
pub mod jobs;
pub mod matches;
pub mod resume;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Parses one wire label (an enum variant's serde rename, e.g. "Full-time").
pub(crate) fn parse_wire_label<T: DeserializeOwned>(
    field: &str,
    token: &str,
) -> Result<T, ApiError> {
    serde_json::from_value(Value::String(token.to_string()))
        .map_err(|_| ApiError::BadRequest(format!("unknown {field} value: {token}")))
}

/// Parses a comma-separated list of wire labels. Absent input means an empty,
/// unconstrained selection.
pub(crate) fn parse_wire_labels<T: DeserializeOwned>(
    field: &str,
    raw: Option<&str>,
) -> Result<Vec<T>, ApiError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_wire_label(field, token))
        .collect()
}
