//! Process configuration.
//!
//! Built once by the entry point and handed to each component at construction.

use std::time::Duration;

use crate::{
    ConfigError, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT, PG_POOL_MAX_CONNECTIONS,
    parse_with_default,
};

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const HOST_VAR: &str = "PAGE_ANALYZER_HOST";
pub const PORT_VAR: &str = "PAGE_ANALYZER_PORT";
pub const FETCH_TIMEOUT_VAR: &str = "PAGE_ANALYZER_FETCH_TIMEOUT_SECS";
pub const USER_AGENT_VAR: &str = "PAGE_ANALYZER_USER_AGENT";
pub const PG_MAX_CONNECTIONS_VAR: &str = "PAGE_ANALYZER_PG_MAX_CONNECTIONS";

/// Settings for the outbound page fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("page-analyzer/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pg_max_connections: u32,
    pub fetch: FetchConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("pg_max_connections", &self.pg_max_connections)
            .field("fetch", &self.fetch)
            .finish()
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] if `DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration from an arbitrary variable source.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] if `DATABASE_URL` is absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let host = lookup(HOST_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_with_default(PORT_VAR, lookup(PORT_VAR), DEFAULT_PORT);
        let pg_max_connections = parse_with_default(
            PG_MAX_CONNECTIONS_VAR,
            lookup(PG_MAX_CONNECTIONS_VAR),
            PG_POOL_MAX_CONNECTIONS,
        );
        let timeout_secs = parse_with_default(
            FETCH_TIMEOUT_VAR,
            lookup(FETCH_TIMEOUT_VAR),
            DEFAULT_FETCH_TIMEOUT_SECS,
        );
        let user_agent = lookup(USER_AGENT_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        Ok(Self {
            database_url,
            host,
            port,
            pg_max_connections,
            fetch: FetchConfig { timeout: Duration::from_secs(timeout_secs), user_agent },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
