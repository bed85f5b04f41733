//! UrlStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::Utc;
use page_analyzer_core::{AddedUrl, TrackedUrl, UrlDetail, UrlListing};

use super::{CHECK_COLUMNS, PgStorage, URL_COLUMNS, row_to_check, row_to_listing, row_to_url};
use crate::error::StorageError;
use crate::traits::UrlStore;

#[async_trait]
impl UrlStore for PgStorage {
    async fn add_or_get_existing(&self, name: &str) -> Result<AddedUrl, StorageError> {
        let select_sql = format!("SELECT {URL_COLUMNS} FROM urls WHERE name = $1");
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query(&select_sql).bind(name).fetch_optional(&mut *tx).await?;
        if let Some(row) = existing {
            let url = row_to_url(&row)?;
            tx.commit().await?;
            tracing::info!(url_id = url.id, "URL already exists");
            return Ok(AddedUrl { url, already_existed: true });
        }

        let inserted = sqlx::query(&format!(
            "INSERT INTO urls (name, created_at) VALUES ($1, $2)
             ON CONFLICT (name) DO NOTHING
             RETURNING {URL_COLUMNS}"
        ))
        .bind(name)
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await?;

        let added = match inserted {
            Some(row) => AddedUrl { url: row_to_url(&row)?, already_existed: false },
            None => {
                // A concurrent insert won the race; its row is committed and visible now.
                let row = sqlx::query(&select_sql).bind(name).fetch_one(&mut *tx).await?;
                AddedUrl { url: row_to_url(&row)?, already_existed: true }
            },
        };
        tx.commit().await?;

        if added.already_existed {
            tracing::info!(url_id = added.url.id, "URL already exists (concurrent insert)");
        } else {
            tracing::info!(url_id = added.url.id, "URL added");
        }
        Ok(added)
    }

    async fn find_url(&self, id: i64) -> Result<Option<TrackedUrl>, StorageError> {
        let row = sqlx::query(&format!("SELECT {URL_COLUMNS} FROM urls WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_url(&r)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<UrlListing>, StorageError> {
        let rows = sqlx::query(
            "SELECT u.id, u.name,
                    uc.status_code AS last_status_code,
                    uc.created_at AS last_checked_at
             FROM urls u
             LEFT JOIN LATERAL (
                 SELECT status_code, created_at
                 FROM url_checks
                 WHERE url_id = u.id
                 ORDER BY created_at DESC, status_code DESC NULLS LAST
                 LIMIT 1
             ) uc ON true
             ORDER BY u.id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_listing).collect()
    }

    async fn get_detail(&self, id: i64) -> Result<Option<UrlDetail>, StorageError> {
        let mut tx = self.pool.begin().await?;

        let Some(url_row) = sqlx::query(&format!("SELECT {URL_COLUMNS} FROM urls WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tracing::warn!(url_id = id, "URL not found");
            return Ok(None);
        };
        let url = row_to_url(&url_row)?;

        let check_rows = sqlx::query(&format!(
            "SELECT {CHECK_COLUMNS} FROM url_checks WHERE url_id = $1 ORDER BY id DESC"
        ))
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;
        let checks = check_rows.iter().map(row_to_check).collect::<Result<Vec<_>, _>>()?;

        tx.commit().await?;
        Ok(Some(UrlDetail { url, checks }))
    }
}
