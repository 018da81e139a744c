use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use jg_core::resume::adapt_resume;
use jg_core::schema::ParsedResume;

use crate::error::ApiError;
use crate::state::SharedState;

const FALLBACK_FILENAME: &str = "resume.pdf";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Accepts a multipart upload (`file` part), forwards it to the résumé
/// parser in wait mode and returns the adapted result. A failed call leaves
/// whatever résumé the client already holds untouched; nothing is stored
/// server-side.
pub async fn parse_resume(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, ApiError> {
    let mut upload: Option<(Vec<u8>, String, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("invalid multipart body: {err}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or(FALLBACK_FILENAME).to_string();
        let mime = field.content_type().unwrap_or(FALLBACK_MIME).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| ApiError::BadRequest(format!("failed to read upload: {err}")))?;
        upload = Some((bytes.to_vec(), filename, mime));
    }

    let (bytes, filename, mime) =
        upload.ok_or_else(|| ApiError::BadRequest("missing file part".into()))?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("uploaded file is empty".into()));
    }

    let response = state.parser.parse(bytes, &filename, &mime).await?;
    let resume = adapt_resume(&response);

    info!(
        filename,
        skills = resume.skills.len(),
        "resume parsed and adapted"
    );
    Ok(Json(resume))
}
