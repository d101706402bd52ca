use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::persistence::AnalysisStore;
use crate::roles::RoleCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only or internally synchronized; request data never
/// lives in it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable analysis store. Default: PgAnalysisStore.
    pub store: Arc<dyn AnalysisStore>,
    /// `None` when no API key is configured; the AI analyzer then answers 503.
    pub llm: Option<LlmClient>,
}
