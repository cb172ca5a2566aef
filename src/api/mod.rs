mod handlers;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

pub use models::{ChatRequest, ChatResponse, ErrorResponse};

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/chat", post(handlers::chat))
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}
