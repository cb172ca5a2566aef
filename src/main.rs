use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use buddybot::{build_app, config::AppConfig, run_server, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let state = Arc::new(AppState::new(&config));
    let app = build_app(state);

    run_server(app, config.port).await
}
