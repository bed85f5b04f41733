//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by table.

mod checks;
mod urls;

use std::time::Duration;

use chrono::{DateTime, Utc};
use page_analyzer_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, TrackedUrl, UrlCheck, UrlListing,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect a pool to `database_url` and bring the schema up to date.
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let storage = Self::connect(database_url, max_connections).await?;
        storage.migrate().await?;
        tracing::info!(max_connections, "PgStorage initialized");
        Ok(storage)
    }

    /// Connect a pool to `database_url` without touching the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "database connection error");
                StorageError::Connection(e)
            })?;
        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool without running migrations.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `urls` and `url_checks` tables if they do not exist.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        run_pg_migrations(&self.pool).await.map_err(|e| match e {
            e @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)) => {
                StorageError::Connection(e)
            },
            other => StorageError::Migration(other.to_string()),
        })
    }
}

/// Status codes are stored as `INTEGER`; a value outside `u16` means the row was corrupted.
pub(crate) fn status_from_db(value: Option<i32>) -> Result<Option<u16>, StorageError> {
    value
        .map(|v| {
            u16::try_from(v).map_err(|_| {
                tracing::error!(status_code = v, "out-of-range status code in DB");
                StorageError::DataCorruption(format!("status_code {v} out of range"))
            })
        })
        .transpose()
}

pub(crate) fn row_to_url(row: &PgRow) -> Result<TrackedUrl, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(TrackedUrl { id: row.try_get("id")?, name: row.try_get("name")?, created_at })
}

pub(crate) fn row_to_check(row: &PgRow) -> Result<UrlCheck, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(UrlCheck {
        id: row.try_get("id")?,
        url_id: row.try_get("url_id")?,
        status_code: status_from_db(row.try_get("status_code")?)?,
        title: row.try_get("title")?,
        h1: row.try_get("h1")?,
        description: row.try_get("description")?,
        created_at,
    })
}

pub(crate) fn row_to_listing(row: &PgRow) -> Result<UrlListing, StorageError> {
    let last_checked_at: Option<DateTime<Utc>> = row.try_get("last_checked_at")?;
    Ok(UrlListing {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        last_status_code: status_from_db(row.try_get("last_status_code")?)?,
        last_checked_at,
    })
}

pub(crate) const URL_COLUMNS: &str = "id, name, created_at";

pub(crate) const CHECK_COLUMNS: &str =
    "id, url_id, status_code, h1, title, description, created_at";
