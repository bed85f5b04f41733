//! CheckStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::Utc;
use page_analyzer_core::{PageMetadata, UrlCheck};

use super::{CHECK_COLUMNS, PgStorage, row_to_check};
use crate::error::StorageError;
use crate::traits::CheckStore;

#[async_trait]
impl CheckStore for PgStorage {
    async fn append_check(
        &self,
        url_id: i64,
        metadata: &PageMetadata,
    ) -> Result<UrlCheck, StorageError> {
        // Single statement: the existence check and the insert cannot be split.
        let row = sqlx::query(&format!(
            "INSERT INTO url_checks (url_id, status_code, h1, title, description, created_at)
             SELECT id, $2, $3, $4, $5, $6 FROM urls WHERE id = $1
             RETURNING {CHECK_COLUMNS}"
        ))
        .bind(url_id)
        .bind(metadata.status_code.map(i32::from))
        .bind(metadata.h1.as_deref())
        .bind(metadata.title.as_deref())
        .bind(metadata.description.as_deref())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => row_to_check(&r),
            None => Err(StorageError::NotFound { entity: "url", id: url_id.to_string() }),
        }
    }
}
