//! Application-wide error type

use thiserror::Error;

/// Errors surfaced by the API client, the creation form and page loads.
///
/// All variants carry owned data so they can cross the worker channel and
/// be stored in view state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Connection refused, timeout, DNS failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status other than 404
    #[error("Server responded with HTTP {status}")]
    Http { status: u16 },

    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed response body
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Superseded by a newer request
    #[error("Request cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            AppError::Http {
                status: status.as_u16(),
            }
        } else {
            AppError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            AppError::Http { status: 500 }.to_string(),
            "Server responded with HTTP 500"
        );
        assert_eq!(
            AppError::NotFound("star 7".into()).to_string(),
            "Not found: star 7"
        );
        assert_eq!(AppError::Cancelled.to_string(), "Request cancelled");
    }
}
