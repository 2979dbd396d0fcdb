//! Error model shared by all YouTrack client operations.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Failure modes of a YouTrack API call. Every variant here is produced
/// by the client: HTTP errors carry the status and the server's error
/// payload, decode failures of a success body become `Serialization`,
/// and transport-level problems split into `Timeout`/`Network`.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("http {status}: {message}")]
    Http {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("response decode error: {0}")]
    Serialization(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl TrackerError {
    /// Constructs an HTTP error variant with the optional YouTrack error code.
    pub fn http(status: StatusCode, code: Option<String>, message: impl Into<String>) -> Self {
        TrackerError::Http {
            status,
            code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TrackerError::Timeout(err.to_string())
        } else if err.is_decode() {
            TrackerError::Serialization(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            TrackerError::Http {
                status,
                code: None,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TrackerError::Network(err.to_string())
        } else {
            TrackerError::Other(err.to_string())
        }
    }
}
