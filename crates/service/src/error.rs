//! Typed error enum for the service layer.
//!
//! One variant per outcome a caller has to tell apart: rejected input, missing
//! URL, failed remote check, and internal (storage) failure.

use page_analyzer_core::ValidationError;
use page_analyzer_fetch::{CheckFailure, FetchError};
use page_analyzer_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submitted address was rejected before reaching storage.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Requested entity does not exist.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The remote page could not be fetched; nothing was persisted.
    #[error("check failed: {0}")]
    CheckFailed(#[source] FetchError),

    /// Storage failed (connection or statement).
    #[error("internal: {0}")]
    Internal(#[source] StorageError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the underlying failure was a lost or unavailable DB connection.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Internal(e) if e.is_connection())
    }

    pub fn check_failure(&self) -> Option<CheckFailure> {
        match self {
            Self::CheckFailed(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Message safe to show to the user; never includes internal details.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::EmptyInput) => "URL must not be empty",
            Self::Validation(ValidationError::TooLong) => "URL exceeds 255 characters",
            Self::Validation(ValidationError::MalformedUrl) => "Invalid URL",
            Self::NotFound { .. } => "Page not found",
            Self::CheckFailed(_) => "An error occurred during the check",
            Self::Internal(_) => "Internal server error",
        }
    }
}

/// Storage errors surface as `NotFound` when they mean it, otherwise `Internal`.
impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Internal(other),
        }
    }
}

/// Log a storage failure at error level, flagging connection loss, and convert it.
pub(crate) fn storage_failure(operation: &'static str) -> impl FnOnce(StorageError) -> ServiceError {
    move |err| {
        if err.is_connection() {
            tracing::error!(operation, error = %err, "database connection error");
        } else if !err.is_not_found() {
            tracing::error!(operation, error = %err, "database error");
        }
        ServiceError::from(err)
    }
}
