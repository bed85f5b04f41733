//! PostgreSQL schema migrations for page-analyzer storage.

use sqlx::PgPool;

/// Run all PostgreSQL migrations. Every statement is idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS urls (
            id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT urls_name_key UNIQUE (name)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS url_checks (
            id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
            url_id BIGINT NOT NULL REFERENCES urls (id) ON DELETE CASCADE,
            status_code INTEGER,
            h1 TEXT,
            title TEXT,
            description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_url_checks_url_created
         ON url_checks (url_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    tracing::debug!("PostgreSQL migrations applied");
    Ok(())
}
