use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::gemini::{Completion, GeminiError};
use crate::{prompts, AppState};

use super::models::{ChatRequest, ChatResponse, ErrorResponse};

const EMPTY_MESSAGE_REPLY: &str = "Please enter a valid message.";
const NO_TEXT_REPLY: &str = "I'm sorry, I couldn't process that.";
const UPSTREAM_ERROR_REPLY: &str = "Sorry, something went wrong while answering that.";

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Validation, trigger-table rewrite, one upstream call, reply. Every
/// outcome is a 200 with a `reply` string; the shipped chat page treats
/// non-2xx as "server unreachable".
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let message = payload.message.trim();

    if message.is_empty() {
        return Json(ChatResponse {
            reply: EMPTY_MESSAGE_REPLY.to_string(),
        });
    }

    tracing::info!(user_message = message, "received chat message");

    let subject = state.prompt_set.expand(message);
    let prompt = prompts::compose_prompt(subject);

    let reply = match state.gemini.generate_content(&prompt).await {
        Ok(Completion::Text(text)) => text,
        Ok(Completion::Empty) => {
            tracing::warn!("Gemini response contained no usable text");
            NO_TEXT_REPLY.to_string()
        }
        Err(err) => {
            log_gemini_error(&err);
            UPSTREAM_ERROR_REPLY.to_string()
        }
    };

    Json(ChatResponse { reply })
}

fn log_gemini_error(err: &GeminiError) {
    match err {
        GeminiError::Timeout => tracing::error!("Gemini request timed out"),
        _ => tracing::error!(error = %err, "Gemini request failed"),
    }
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
