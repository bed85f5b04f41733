//! Repository traits.
//!
//! The service layer depends on these rather than on `PgStorage` directly, so
//! the check pipeline can run against any store.

use async_trait::async_trait;
use page_analyzer_core::{AddedUrl, PageMetadata, TrackedUrl, UrlCheck, UrlDetail, UrlListing};

use crate::error::StorageError;

/// Tracked URL operations.
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Get-or-create by canonical name.
    ///
    /// A unique constraint on the name is the authoritative guard; a caller
    /// that loses an insert race gets the existing row with `already_existed`.
    async fn add_or_get_existing(&self, name: &str) -> Result<AddedUrl, StorageError>;

    /// Look up a tracked URL by identity.
    async fn find_url(&self, id: i64) -> Result<Option<TrackedUrl>, StorageError>;

    /// Every tracked URL with its most recent check, newest URL first.
    async fn list_all(&self) -> Result<Vec<UrlListing>, StorageError>;

    /// A tracked URL and all of its checks, most recent first.
    async fn get_detail(&self, id: i64) -> Result<Option<UrlDetail>, StorageError>;
}

/// Check record operations.
#[async_trait]
pub trait CheckStore: Send + Sync {
    /// Append one check. Fails with `NotFound` if `url_id` is not tracked.
    async fn append_check(
        &self,
        url_id: i64,
        metadata: &PageMetadata,
    ) -> Result<UrlCheck, StorageError>;
}

/// Everything the services need from a store.
pub trait PageStore: UrlStore + CheckStore {}

impl<T: UrlStore + CheckStore + ?Sized> PageStore for T {}
