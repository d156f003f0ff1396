use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::intake::validation::{
    validate_cv, validate_file_extension, validate_file_size, validate_job_description,
    ValidationOutcome,
};
use crate::jd::structurer::{extract_sections, StructuredJobDescription};
use crate::state::AppState;
use crate::text::{count_words, normalize};

#[derive(Debug, Deserialize)]
pub struct TextIntakeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CvIntakeResponse {
    pub text: String,
    pub word_count: usize,
    pub validation: ValidationOutcome,
}

#[derive(Debug, Serialize)]
pub struct JdIntakeResponse {
    pub text: String,
    pub word_count: usize,
    pub validation: ValidationOutcome,
    pub structured: StructuredJobDescription,
}

/// POST /api/v1/intake/cv/text
pub async fn handle_cv_text(
    State(_state): State<AppState>,
    Json(req): Json<TextIntakeRequest>,
) -> Result<Json<CvIntakeResponse>, AppError> {
    let validation = gate(validate_cv(&req.text))?;
    let cleaned = normalize(&req.text);
    Ok(Json(CvIntakeResponse {
        word_count: count_words(&cleaned),
        text: cleaned,
        validation,
    }))
}

/// POST /api/v1/intake/cv
pub async fn handle_cv_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CvIntakeResponse>, AppError> {
    let content = decode_upload(&state, multipart).await?;
    let validation = gate(validate_cv(&content))?;
    Ok(Json(CvIntakeResponse {
        word_count: count_words(&content),
        text: content,
        validation,
    }))
}

/// POST /api/v1/intake/jd/text
pub async fn handle_jd_text(
    State(_state): State<AppState>,
    Json(req): Json<TextIntakeRequest>,
) -> Result<Json<JdIntakeResponse>, AppError> {
    let validation = gate(validate_job_description(&req.text))?;
    let structured = extract_sections(&req.text);
    let cleaned = normalize(&req.text);
    Ok(Json(JdIntakeResponse {
        word_count: count_words(&cleaned),
        text: cleaned,
        validation,
        structured,
    }))
}

/// POST /api/v1/intake/jd
pub async fn handle_jd_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<JdIntakeResponse>, AppError> {
    let content = decode_upload(&state, multipart).await?;
    let validation = gate(validate_job_description(&content))?;
    let structured = extract_sections(&content);
    Ok(Json(JdIntakeResponse {
        word_count: count_words(&content),
        text: content,
        validation,
        structured,
    }))
}

/// A failed check becomes a 400 so the caller can fix the input and retry;
/// a passing one is carried into the response body.
fn gate(outcome: ValidationOutcome) -> Result<ValidationOutcome, AppError> {
    if outcome.is_valid {
        Ok(outcome)
    } else {
        Err(AppError::Validation(outcome.message))
    }
}

/// Upload checks in UI order: extension, size, then decode. The first
/// failure is what the user sees.
async fn decode_upload(state: &AppState, multipart: Multipart) -> Result<String, AppError> {
    let (filename, data) = read_file_field(multipart).await?;
    gate(validate_file_extension(&filename))?;
    gate(validate_file_size(
        data.len() as u64,
        state.config.max_file_size_mb,
    ))?;
    state.decoder.decode(&filename, &data)
}

async fn read_file_field(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::Validation("Uploaded file has no filename.".to_string()))?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
            return Ok((filename, data));
        }
    }
    Err(AppError::Validation(
        "Multipart request is missing a 'file' field.".to_string(),
    ))
}
