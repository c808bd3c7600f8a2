//! Narrative recommendations for smartbeta via the Gemini API.
//!
//! This crate sits outside the ranking core. It shortlists technical
//! indicator snapshots for an investor's risk profile, assembles a prompt
//! from the investor profile, the shortlist and the smart beta ranking, and
//! sends it to [Google Gemini](https://ai.google.dev/).
//!
//! # Usage
//!
//! ```rust,ignore
//! use smartbeta_gemini::{GeminiClient, NarrativeRequest, build_prompt, shortlist};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::from_env()?;
//!     let top = shortlist(&snapshots, investor.risk_profile, 5);
//!     let prompt = build_prompt(&NarrativeRequest { investor: &investor, technicals: &top, recommendations: &ranked, as_of });
//!     println!("{}", client.generate(&prompt).await?);
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `GEMINI_API_KEY` in your environment or `.env` file; `GEMINI_MODEL`
//! optionally overrides the model:
//!
//! ```bash
//! GEMINI_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod prompt;
mod technical;
mod types;

pub use client::{GeminiClient, GeminiConfig};
pub use error::GeminiError;
pub use prompt::{NarrativeRequest, build_prompt};
pub use technical::{
    DEFAULT_SHORTLIST, FALLBACK_TICKERS, TechnicalRating, TechnicalSnapshot, allowed_ratings,
    shortlist,
};
pub use types::*;

/// Result type for Gemini operations.
pub type Result<T> = std::result::Result<T, GeminiError>;
