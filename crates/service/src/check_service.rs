use std::sync::Arc;

use page_analyzer_core::UrlCheck;
use page_analyzer_fetch::{PageFetcher, extract_metadata};
use page_analyzer_storage::{CheckStore, PageStore, UrlStore};

use crate::ServiceError;
use crate::error::storage_failure;

/// Runs one check: resolve the URL, fetch it, extract metadata, persist.
///
/// A failed fetch never reaches storage, so a check either lands as exactly
/// one new row or leaves the URL's history untouched.
pub struct CheckService {
    storage: Arc<dyn PageStore>,
    fetcher: Arc<PageFetcher>,
}

impl CheckService {
    #[must_use]
    pub fn new(storage: Arc<dyn PageStore>, fetcher: Arc<PageFetcher>) -> Self {
        Self { storage, fetcher }
    }

    pub async fn run_check(&self, url_id: i64) -> Result<UrlCheck, ServiceError> {
        let Some(url) =
            self.storage.find_url(url_id).await.map_err(storage_failure("run_check"))?
        else {
            tracing::warn!(url_id, "URL not found");
            return Err(ServiceError::NotFound { entity: "url", id: url_id.to_string() });
        };

        let page = match self.fetcher.fetch(&url.name).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(url_id, url = %url.name, error = %e, "check request failed");
                return Err(ServiceError::CheckFailed(e));
            },
        };

        let metadata = extract_metadata(&page.body).with_status(page.status_code);
        let check = self
            .storage
            .append_check(url_id, &metadata)
            .await
            .map_err(storage_failure("append_check"))?;

        tracing::info!(url_id, check_id = check.id, status = page.status_code, "check saved");
        Ok(check)
    }
}
