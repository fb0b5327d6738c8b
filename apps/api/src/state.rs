use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Deliberately small: the service is stateless, so nothing here is mutable.
/// Per-session document, score, and report state lives with the client.
#[derive(Clone)]
pub struct AppState {
    /// Runtime settings, read once at startup.
    #[allow(dead_code)]
    pub config: Config,
    /// Injectable completion backend. Default: `LlmClient`; tests substitute
    /// a deterministic stand-in so no network call is ever made.
    pub generator: Arc<dyn TextGenerator>,
}
