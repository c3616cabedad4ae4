//! Reader error types

use thiserror::Error;

/// Headlines fetch and reader errors
#[derive(Error, Debug)]
pub enum KhabarError {
    /// Transport error while talking to the headlines endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success HTTP status
    #[error("HTTP status {code}: {message}")]
    Status {
        /// HTTP status code (e.g., 401, 429, 500)
        code: u16,
        /// Response body or canonical reason
        message: String,
    },

    /// Endpoint answered `"status": "error"` in the body
    #[error("API error {code}: {message}")]
    Api {
        /// Machine-readable error code (e.g., `apiKeyInvalid`, `rateLimited`)
        code: String,
        /// Human-readable message from the API
        message: String,
    },

    /// Response body could not be decoded as a headlines payload
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// No article with this id in the current feed
    #[error("No such article: {0}")]
    NoSuchArticle(String),

    /// No share capability is available on this platform
    #[error("Sharing is not supported on this platform")]
    ShareUnsupported,

    /// Share capability failed
    #[error("Share failed: {0}")]
    Share(String),

    /// Notification sound could not be played
    #[error("Playback failed: {0}")]
    Playback(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using KhabarError
pub type Result<T> = std::result::Result<T, KhabarError>;
