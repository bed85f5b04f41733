use thiserror::Error;

use crate::MAX_URL_LENGTH;

/// Reasons a submitted address is rejected before it reaches storage.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL must not be empty")]
    EmptyInput,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL")]
    MalformedUrl,
}

/// Errors raised while assembling [`crate::AppConfig`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
}
