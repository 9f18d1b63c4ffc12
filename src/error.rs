//! Error types and handling for the `GreenPath` application

use thiserror::Error;

/// Main error type for the `GreenPath` application
#[derive(Error, Debug)]
pub enum GreenPathError {
    /// No API credential was available when an itinerary was requested
    #[error("No API key available. Set OPENAI_API_KEY or provide a key when prompted.")]
    MissingCredential,

    /// The chat-completion service failed; the message is kept verbatim
    #[error("{message}")]
    UpstreamFailure { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GreenPathError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new upstream failure
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamFailure {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GreenPathError::MissingCredential => {
                "Please provide a valid OpenAI API key to generate your itinerary.".to_string()
            }
            GreenPathError::UpstreamFailure { message } => {
                format!("Error generating itinerary: {message}")
            }
            GreenPathError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            GreenPathError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            GreenPathError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = GreenPathError::config("bad temperature");
        assert!(matches!(config_err, GreenPathError::Config { .. }));

        let upstream_err = GreenPathError::upstream("quota exceeded");
        assert!(matches!(upstream_err, GreenPathError::UpstreamFailure { .. }));

        let validation_err = GreenPathError::validation("no priorities");
        assert!(matches!(validation_err, GreenPathError::Validation { .. }));
    }

    #[test]
    fn test_upstream_message_is_verbatim() {
        let err = GreenPathError::upstream("API error 429: You exceeded your current quota");
        assert_eq!(err.to_string(), "API error 429: You exceeded your current quota");
        assert!(
            err.user_message()
                .ends_with("API error 429: You exceeded your current quota")
        );
    }

    #[test]
    fn test_user_messages() {
        let missing = GreenPathError::MissingCredential;
        assert!(missing.user_message().contains("API key"));

        let config_err = GreenPathError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = GreenPathError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: GreenPathError = io_err.into();
        assert!(matches!(err, GreenPathError::Io { .. }));
    }
}
