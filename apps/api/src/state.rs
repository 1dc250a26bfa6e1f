use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only career dataset, loaded once before the server starts.
    pub catalog: CareerCatalog,
    /// Generative-text backend. Default: `LlmClient` (Gemini).
    pub llm: Arc<dyn TextGenerator>,
}
