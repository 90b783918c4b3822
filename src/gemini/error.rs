// ABOUTME: Error types for configuring the Gemini client and generating content

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API key is empty")]
    EmptyKey,

    #[error("API key contains characters that cannot be sent in a request header")]
    MalformedKey,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Request to Gemini API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse Gemini response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Gemini API returned no text in the response candidates")]
    EmptyResponse,

    #[error("Prompt was blocked: {reason}")]
    Blocked { reason: String },
}
