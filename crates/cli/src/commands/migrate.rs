//! Schema setup without starting the server.
//!
//! Idempotent: every statement uses `IF NOT EXISTS`.

use anyhow::Result;
use page_analyzer_storage::PgStorage;

use crate::load_config;

pub(crate) async fn run() -> Result<()> {
    let config = load_config()?;
    let storage = PgStorage::connect(&config.database_url, config.pg_max_connections).await?;
    storage.migrate().await?;
    println!("Migration complete!");
    Ok(())
}
