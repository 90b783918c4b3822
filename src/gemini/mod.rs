// ABOUTME: Model client adapter wrapping the hosted Gemini generation API
// Exposes configure/generate behind a trait so the conversation controller can be tested offline

pub mod client;
pub mod error;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use error::{ConfigError, GenerationError};

use crate::models::ModelId;
use async_trait::async_trait;
use std::fmt;

/// A validated API key, ready to authorize generation requests
#[derive(Clone, PartialEq, Eq)]
pub struct ClientHandle {
    api_key: String,
}

impl ClientHandle {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Validates the key and produces a handle for subsequent calls
    fn configure(&self, api_key: &str) -> Result<ClientHandle, ConfigError>;

    /// Sends a single prompt and returns the generated text
    async fn generate(
        &self,
        handle: &ClientHandle,
        model: ModelId,
        prompt: &str,
    ) -> Result<String, GenerationError>;
}
