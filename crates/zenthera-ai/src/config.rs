use std::time::Duration;

use crate::prompt::DEFAULT_MODEL;

/// Default base URL of the Generative Language API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the optional API credential.
pub const API_KEY_VAR: &str = "API_KEY";

/// Settings for the refinement client, resolved once at startup.
///
/// A missing credential is a valid configuration: the refiner then runs
/// offline and never touches the network.
#[derive(Debug, Clone)]
pub struct AiConfig {
    api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl AiConfig {
    /// Defaults plus the credential from `API_KEY`, if set.
    pub fn from_env() -> Self {
        Self::default().with_api_key(std::env::var(API_KEY_VAR).ok())
    }

    /// Set the credential. Empty or whitespace-only keys count as absent.
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
