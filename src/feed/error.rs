//! Error handling for the feed module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The configured feed location is blank.
    #[error("Feed location must not be empty")]
    EmptyLocation,

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The feed body is not a JSON array of items.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a local feed file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    pub async fn from_response(response: reqwest::Response) -> FeedError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FeedError::Http { status, message }
    }

    /// Log level an occurrence of this error deserves.
    pub fn classify(&self) -> LogLevel {
        match self {
            // Server errors - temporary issues
            FeedError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            // Wrong URL, missing file, malformed feed - the operator must act
            FeedError::Http { .. } => LogLevel::Error,
            FeedError::Decode(_) | FeedError::EmptyLocation => LogLevel::Error,
            FeedError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => LogLevel::Error,
            // Network issues - usually temporary
            FeedError::Reqwest(_) | FeedError::Io(_) => LogLevel::Warn,
        }
    }
}
