//! Error types for the Gemini client.

use thiserror::Error;

/// Errors that can occur when generating a narrative.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Missing API key.
    #[error("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("Gemini API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Gemini rate limit exceeded")]
    RateLimitExceeded,

    /// The response carried no candidate text.
    #[error("Gemini returned no text")]
    EmptyResponse,

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),
}
