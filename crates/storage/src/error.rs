//! Typed error enum for the storage layer.
//!
//! Callers match on the failure mode (missing row, duplicate, lost connection,
//! failed statement) instead of inspecting opaque driver errors.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique constraint violation.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// The pool could not provide or keep a working connection.
    #[error("database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement was rejected or failed while executing.
    #[error("database statement error: {0}")]
    Statement(#[source] sqlx::Error),

    /// Row data could not be mapped into a domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether the failure is at the connection level rather than a single statement.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Custom `From<sqlx::Error>`, not a blanket `#[from]`.
///
/// - `RowNotFound` → `NotFound` (generic; callers remap with entity context)
/// - SQLSTATE 23505 → `Duplicate`
/// - pool, I/O, TLS and protocol failures → `Connection`
/// - everything else → `Statement`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(err),
            _ => Self::Statement(err),
        }
    }
}
