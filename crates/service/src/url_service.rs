use std::sync::Arc;

use page_analyzer_core::{AddedUrl, UrlDetail, UrlListing, prepare_url};
use page_analyzer_storage::{PageStore, UrlStore};

use crate::ServiceError;
use crate::error::storage_failure;

pub struct UrlService {
    storage: Arc<dyn PageStore>,
}

impl UrlService {
    #[must_use]
    pub fn new(storage: Arc<dyn PageStore>) -> Self {
        Self { storage }
    }

    /// Validate, normalize and register `raw`, or return the already tracked URL.
    pub async fn add_url(&self, raw: &str) -> Result<AddedUrl, ServiceError> {
        let name = prepare_url(raw)?;
        tracing::info!(url = %name, "attempt to add a URL");
        self.storage.add_or_get_existing(&name).await.map_err(storage_failure("add_url"))
    }

    pub async fn list_urls(&self) -> Result<Vec<UrlListing>, ServiceError> {
        self.storage.list_all().await.map_err(storage_failure("list_urls"))
    }

    pub async fn get_url_detail(&self, id: i64) -> Result<UrlDetail, ServiceError> {
        let detail = self.storage.get_detail(id).await.map_err(storage_failure("get_url_detail"))?;
        detail.ok_or_else(|| ServiceError::NotFound { entity: "url", id: id.to_string() })
    }
}
