//! Minimal client for the Gemini `generateContent` REST endpoint.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::{timeout, Duration};

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini request timed out")]
    Timeout,
    #[error("failed to reach Gemini: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gemini returned {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },
}

/// Outcome of a successful call: the model either produced text or it
/// did not. An empty candidate list is a valid response, not an error.
#[derive(Debug, PartialEq, Eq)]
pub enum Completion {
    Text(String),
    Empty,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn into_completion(self) -> Completion {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let trimmed = text.trim();
        if trimmed.is_empty() {
            Completion::Empty
        } else {
            Completion::Text(trimmed.to_string())
        }
    }
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    /// Submits a single text prompt and returns the candidate text, trimmed.
    pub async fn generate_content(&self, prompt: &str) -> Result<Completion, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let payload = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let fut = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send();

        let response = timeout(self.timeout, fut)
            .await
            .map_err(|_| GeminiError::Timeout)??;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(GeminiError::UpstreamStatus { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.into_completion())
    }
}

#[cfg(test)]
mod tests {
    use super::{Completion, GenerateContentResponse};

    fn parse(raw: &str) -> Completion {
        serde_json::from_str::<GenerateContentResponse>(raw)
            .unwrap()
            .into_completion()
    }

    #[test]
    fn candidate_text_is_extracted_and_trimmed() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"  **Paris**\n"}],"role":"model"}}]}"#;
        assert_eq!(parse(raw), Completion::Text("**Paris**".to_string()));
    }

    #[test]
    fn multiple_parts_are_concatenated() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello, "},{"text":"world"}]}}]}"#;
        assert_eq!(parse(raw), Completion::Text("Hello, world".to_string()));
    }

    #[test]
    fn missing_candidates_is_empty() {
        assert_eq!(parse(r#"{}"#), Completion::Empty);
        assert_eq!(parse(r#"{"candidates":[]}"#), Completion::Empty);
    }

    #[test]
    fn whitespace_only_text_is_empty() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"  \n "}]}}]}"#;
        assert_eq!(parse(raw), Completion::Empty);
    }

    #[test]
    fn candidate_without_content_is_empty() {
        let raw = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        assert_eq!(parse(raw), Completion::Empty);
    }
}
