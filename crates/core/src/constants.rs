//! Shared constants for page-analyzer.
//!
//! Centralizes limits and defaults used by more than one crate.

/// Maximum length of a tracked address, in characters.
pub const MAX_URL_LENGTH: usize = 255;

/// Default timeout for fetching a page during a check.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Maximum number of redirects followed while fetching a page.
pub const MAX_FETCH_REDIRECTS: usize = 10;

/// PostgreSQL connection pool: default maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default HTTP bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP bind port.
pub const DEFAULT_PORT: u16 = 8000;
