use std::env;

use thiserror::Error;

use crate::prompts::PromptSet;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GENAI_API_KEY not found in environment variables")]
    MissingApiKey,
}

/// Runtime configuration, read once at startup. The API key is the only
/// required variable; everything else falls back to a default on absence
/// or parse failure.
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
    pub prompt_set: PromptSet,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GENAI_API_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = env::var("GENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url = env::var("GENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_ms = env::var("GENAI_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(20_000);

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let prompt_set = env::var("QUICK_PROMPT_SET")
            .ok()
            .and_then(|value| PromptSet::from_name(&value))
            .unwrap_or_default();

        Ok(Self {
            port,
            api_key,
            model,
            base_url,
            timeout_ms,
            prompt_set,
        })
    }
}
