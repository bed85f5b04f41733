//! In-memory store for exercising services and routes without PostgreSQL.
//!
//! Mirrors the PostgreSQL semantics callers rely on: names are unique, ids grow
//! with insertion, a check needs an existing URL, and the listing picks the
//! latest check by time with ties going to the higher status.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use page_analyzer_core::{AddedUrl, PageMetadata, TrackedUrl, UrlCheck, UrlDetail, UrlListing};

use crate::error::StorageError;
use crate::traits::{CheckStore, UrlStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    urls: Mutex<Vec<TrackedUrl>>,
    checks: Mutex<Vec<UrlCheck>>,
    fail_appends: AtomicBool,
    connection_down: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn next_id(len: usize) -> i64 {
    i64::try_from(len).map_or(i64::MAX, |n| n + 1)
}

impl MemoryStore {
    pub fn check_count(&self) -> usize {
        lock(&self.checks).len()
    }

    /// Every operation fails with a connection error while set.
    pub fn set_connection_down(&self, down: bool) {
        self.connection_down.store(down, Ordering::SeqCst);
    }

    /// `append_check` fails with a statement error while set.
    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    fn ensure_connected(&self) -> Result<(), StorageError> {
        if self.connection_down.load(Ordering::SeqCst) {
            return Err(StorageError::Connection(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn add_or_get_existing(&self, name: &str) -> Result<AddedUrl, StorageError> {
        self.ensure_connected()?;
        let mut urls = lock(&self.urls);
        if let Some(url) = urls.iter().find(|u| u.name == name) {
            return Ok(AddedUrl { url: url.clone(), already_existed: true });
        }
        let id = next_id(urls.len());
        let url = TrackedUrl { id, name: name.to_owned(), created_at: Utc::now() };
        urls.push(url.clone());
        Ok(AddedUrl { url, already_existed: false })
    }

    async fn find_url(&self, id: i64) -> Result<Option<TrackedUrl>, StorageError> {
        self.ensure_connected()?;
        Ok(lock(&self.urls).iter().find(|u| u.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UrlListing>, StorageError> {
        self.ensure_connected()?;
        let urls = lock(&self.urls);
        let checks = lock(&self.checks);
        Ok(urls
            .iter()
            .rev()
            .map(|u| {
                let latest = checks
                    .iter()
                    .filter(|c| c.url_id == u.id)
                    .max_by_key(|c| (c.created_at, c.status_code));
                UrlListing {
                    id: u.id,
                    name: u.name.clone(),
                    last_status_code: latest.and_then(|c| c.status_code),
                    last_checked_at: latest.map(|c| c.created_at),
                }
            })
            .collect())
    }

    async fn get_detail(&self, id: i64) -> Result<Option<UrlDetail>, StorageError> {
        let Some(url) = self.find_url(id).await? else {
            return Ok(None);
        };
        let checks = lock(&self.checks).iter().rev().filter(|c| c.url_id == id).cloned().collect();
        Ok(Some(UrlDetail { url, checks }))
    }
}

#[async_trait]
impl CheckStore for MemoryStore {
    async fn append_check(
        &self,
        url_id: i64,
        metadata: &PageMetadata,
    ) -> Result<UrlCheck, StorageError> {
        self.ensure_connected()?;
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(StorageError::Statement(sqlx::Error::Protocol("insert rejected".into())));
        }
        if !lock(&self.urls).iter().any(|u| u.id == url_id) {
            return Err(StorageError::NotFound { entity: "url", id: url_id.to_string() });
        }
        let mut checks = lock(&self.checks);
        let check = UrlCheck {
            id: next_id(checks.len()),
            url_id,
            status_code: metadata.status_code,
            title: metadata.title.clone(),
            h1: metadata.h1.clone(),
            description: metadata.description.clone(),
            created_at: Utc::now(),
        };
        checks.push(check.clone());
        Ok(check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_is_idempotent_by_name() {
        let store = MemoryStore::default();
        let first = store.add_or_get_existing("https://a.example").await.unwrap();
        let second = store.add_or_get_existing("https://a.example").await.unwrap();
        assert!(!first.already_existed);
        assert!(second.already_existed);
        assert_eq!(first.id(), second.id());
    }

    #[tokio::test]
    async fn test_append_to_unknown_url_is_not_found() {
        let store = MemoryStore::default();
        let err = store.append_check(9, &PageMetadata::default()).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.check_count(), 0);
    }

    #[tokio::test]
    async fn test_connection_down_fails_everything() {
        let store = MemoryStore::default();
        store.set_connection_down(true);
        assert!(store.list_all().await.unwrap_err().is_connection());
        assert!(store.find_url(1).await.unwrap_err().is_connection());
    }
}
