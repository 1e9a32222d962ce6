//! Transport seam between the refiner and a text-generation service.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[cfg(feature = "gemini")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[cfg(feature = "gemini")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// A service that completes a single text prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Generate text for `prompt`.
    ///
    /// `Ok(None)` means the service answered but produced no text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError>;
}
