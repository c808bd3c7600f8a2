//! Gemini API client implementation.

use crate::{
    Result,
    error::GeminiError,
    types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig},
};
use reqwest::Client;
use std::env;
use tracing::{debug, warn};

/// Base URL for the Generative Language API.
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Model and sampling settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    /// Model name, e.g. `gemini-2.0-flash`.
    pub model: String,
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
    /// Nucleus sampling mass.
    pub top_p: f64,
    /// Top-k sampling cutoff.
    pub top_k: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            temperature: 0.7,
            max_output_tokens: 2000,
            top_p: 0.8,
            top_k: 40,
        }
    }
}

impl GeminiConfig {
    /// Use a different model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sampling parameters for a request body.
    #[must_use]
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            top_p: self.top_p,
            top_k: self.top_k,
        }
    }
}

/// Google Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client with the given API key and default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, GeminiConfig::default())
    }

    /// Create a new client with explicit settings.
    #[must_use]
    pub fn with_config(api_key: impl Into<String>, config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            config,
        }
    }

    /// Create a new client from the `GEMINI_API_KEY` environment variable.
    ///
    /// `GEMINI_MODEL`, if set, overrides the model. This will also load from
    /// a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set or a `.env` file exists
    /// but cannot be read.
    pub fn from_env() -> Result<Self> {
        env_file(dotenvy::dotenv())?;

        let api_key = env::var("GEMINI_API_KEY").map_err(|_| GeminiError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let mut config = GeminiConfig::default();
        if let Some(model) = env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
        {
            config = config.with_model(model.trim());
        }

        Ok(Self::with_config(api_key, config))
    }

    /// Settings in use.
    #[must_use]
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Endpoint for `generateContent` on the configured model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send a one-shot prompt and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::RateLimitExceeded`] on HTTP 429,
    /// [`GeminiError::Api`] on any other non-success status, and
    /// [`GeminiError::EmptyResponse`] if the reply carries no text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest::user_prompt(prompt, self.config.generation_config());
        debug!(model = %self.config.model, prompt_len = prompt.len(), "calling Gemini");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeminiError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;

        parsed.text().ok_or_else(|| {
            let reason = parsed
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone())
                .or_else(|| parsed.candidates.first().and_then(|c| c.finish_reason.clone()));
            warn!(reason = reason.as_deref().unwrap_or("unknown"), "Gemini returned no text");
            GeminiError::EmptyResponse
        })
    }
}

/// Accept a missing `.env` file, reject an unreadable or malformed one.
fn env_file<T>(loaded: std::result::Result<T, dotenvy::Error>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
