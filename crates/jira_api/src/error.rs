//! Error model used by JIRA API client operations.

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JiraError>;

/// Represents the error conditions that can occur during JIRA interactions:
/// HTTP errors with status and message, authentication failures, remote
/// application errors reported in the response body, timeouts, network
/// issues, serialization problems and malformed feed documents.
#[derive(Debug, Error)]
pub enum JiraError {
    #[error("http {status}: {message}")]
    Http {
        status: StatusCode,
        message: String,
    },
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Api(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("Network Error")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl JiraError {
    /// Constructs an HTTP error variant from a non-success response.
    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        JiraError::Http {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for JiraError {
    /// Converts reqwest errors into semantic JiraError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JiraError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            JiraError::Http {
                status,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            JiraError::Network(err.to_string())
        } else {
            JiraError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JiraError {
    /// Converts serde_json decode/encode failures into serialization errors.
    fn from(err: serde_json::Error) -> Self {
        JiraError::Serialization(err.to_string())
    }
}

impl From<quick_xml::Error> for JiraError {
    /// Converts XML parse failures into malformed-response errors.
    fn from(err: quick_xml::Error) -> Self {
        JiraError::Malformed(err.to_string())
    }
}
