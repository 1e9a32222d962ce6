//! AI brief refinement: turns a rough project idea into a short technical
//! brief via a generative text service, degrading to fixed text when the
//! service is unavailable.

mod brief;
mod config;
mod generator;
pub mod prompt;

pub use brief::{BriefRefiner, FALLBACK_EMPTY, FALLBACK_ERROR, FALLBACK_OFFLINE};
pub use config::{AiConfig, DEFAULT_ENDPOINT};
pub use generator::{GenerationError, TextGenerator};

#[cfg(feature = "gemini")]
mod gemini;
#[cfg(feature = "gemini")]
pub use gemini::GeminiClient;
