use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::constants::{ALLOWED_EXTENSIONS, APPROVED_ACTION_VERBS, BANNED_TERMS, STOPWORDS};
use crate::state::AppState;

/// GET /api/v1/rules
/// Read-only view of upload limits, enforcement flags, and the vocabularies
/// the scoring phase will consume. Clients use this to mirror server rules.
pub async fn rules_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "app_title": state.config.app_title,
        "allowed_extensions": ALLOWED_EXTENSIONS,
        "max_file_size_mb": state.config.max_file_size_mb,
        "enforcement": {
            "unique_words": state.config.enforce_unique_words,
            "stopword_ban": state.config.enforce_stopword_ban,
            "banned_terms": state.config.enforce_banned_terms,
            "min_word_count": state.config.enforce_min_word_count,
        },
        "approved_action_verbs": APPROVED_ACTION_VERBS,
        "banned_terms": BANNED_TERMS,
        "stopwords": STOPWORDS,
    }))
}
