use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: `AnthropicClient`;
    /// tests substitute a stub so no network is touched.
    pub llm: Arc<dyn CompletionClient>,
    /// Kept for handlers that need runtime settings; currently only `main`
    /// reads it (port, model) before the state is built.
    #[allow(dead_code)]
    pub config: Config,
}
