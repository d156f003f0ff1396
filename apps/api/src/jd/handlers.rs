use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::intake::validation::validate_job_description;
use crate::jd::structurer::{extract_sections, StructuredJobDescription};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// POST /api/v1/jd/parse
/// Validation gate first; structuring itself cannot fail.
pub async fn handle_parse(
    State(_state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<StructuredJobDescription>, AppError> {
    let outcome = validate_job_description(&req.text);
    if !outcome.is_valid {
        return Err(AppError::Validation(outcome.message));
    }
    Ok(Json(extract_sections(&req.text)))
}
