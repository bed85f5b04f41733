//! Typed error enum for the fetch crate.

use thiserror::Error;

/// Errors from fetching a tracked page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("HTTP status {code}")]
    HttpStatus { code: u16 },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::HttpStatus { code: status.as_u16() }
        } else {
            Self::Network(err)
        }
    }
}

/// Coarse classification of a failed check, reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckFailure {
    NetworkError,
    HttpError,
    Timeout,
}

impl FetchError {
    #[must_use]
    pub fn kind(&self) -> CheckFailure {
        match self {
            Self::Timeout => CheckFailure::Timeout,
            Self::HttpStatus { .. } => CheckFailure::HttpError,
            Self::Network(_) | Self::ClientInit(_) => CheckFailure::NetworkError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(FetchError::Timeout.kind(), CheckFailure::Timeout);
        assert_eq!(FetchError::HttpStatus { code: 503 }.kind(), CheckFailure::HttpError);
        assert_eq!(FetchError::ClientInit("tls".to_owned()).kind(), CheckFailure::NetworkError);
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchError::HttpStatus { code: 404 }.to_string(), "HTTP status 404");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }
}
