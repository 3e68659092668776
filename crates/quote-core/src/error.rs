//! Error types for quote assistant operations.

use thiserror::Error;

/// Errors that can occur while talking to the language-model provider
/// or running a quoting workflow.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request never reached the provider or the connection dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider error message, or the raw body when it could not be decoded.
        message: String,
    },

    /// The provider returned no content for the first choice.
    #[error("No content in completion response")]
    EmptyResponse,

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A model reply did not contain the expected JSON shape.
    #[error("Malformed model reply: {0}")]
    MalformedReply(String),

    /// No quote with this identifier is known.
    #[error("Unknown quote: {0}")]
    UnknownQuote(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = AssistantError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): Incorrect API key provided");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: AssistantError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "drawing.pdf").into();
        assert!(matches!(err, AssistantError::Io(_)));
        assert!(err.to_string().contains("drawing.pdf"));
    }
}
