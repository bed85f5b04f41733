//! Storage layer for page-analyzer
//!
//! PostgreSQL-backed repository for tracked URLs (`urls`) and the checks
//! recorded against them (`url_checks`).

pub mod error;
#[cfg(any(test, feature = "test-support"))]
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryStore;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::{CheckStore, PageStore, UrlStore};
