pub mod api;
pub mod config;
pub mod gemini;
pub mod prompts;

use std::sync::Arc;

use axum::Router;

use config::AppConfig;
use gemini::GeminiClient;
use prompts::PromptSet;

/// Shared, read-only request-handler state: the Gemini client built once at
/// startup and the active quick-prompt set.
pub struct AppState {
    pub gemini: GeminiClient,
    pub prompt_set: PromptSet,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            gemini: GeminiClient::new(config),
            prompt_set: config.prompt_set,
        }
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
