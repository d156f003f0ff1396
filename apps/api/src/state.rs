use std::sync::Arc;

use crate::config::Config;
use crate::intake::decode::FileDecoder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable file decoder. Default: `StandardDecoder` (TXT/PDF/DOCX).
    pub decoder: Arc<dyn FileDecoder>,
}
