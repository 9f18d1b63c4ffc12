//! Chat-completion client errors

use thiserror::Error;

/// Errors that can occur while talking to the chat-completion service
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Whether the provider rejected the credential
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, LlmError::ApiError { status: 401 | 403, .. })
    }

    /// Whether the provider refused for rate or quota reasons
    pub fn is_quota(&self) -> bool {
        matches!(self, LlmError::ApiError { status: 429, .. })
    }
}
