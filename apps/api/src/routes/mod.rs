pub mod health;
pub mod rules;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::intake::handlers as intake;
use crate::jd::handlers as jd;
use crate::state::AppState;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/rules", get(rules::rules_handler))
        // Intake API
        .route("/api/v1/intake/cv", post(intake::handle_cv_upload))
        .route("/api/v1/intake/cv/text", post(intake::handle_cv_text))
        .route("/api/v1/intake/jd", post(intake::handle_jd_upload))
        .route("/api/v1/intake/jd/text", post(intake::handle_jd_text))
        // JD analysis API
        .route("/api/v1/jd/parse", post(jd::handle_parse))
        // Scoring API (deferred phase)
        .route("/api/v1/score", post(not_implemented))
        .with_state(state)
}
