//! Tracked addresses and the checks recorded against them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored, deduplicated website address under monitoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedUrl {
    /// Store-assigned identity
    pub id: i64,
    /// Canonical (normalized) address, unique across all tracked URLs
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Metadata gathered by one check, before it is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// HTTP status of the fetch; supplied by the fetcher, never parsed from HTML
    pub status_code: Option<u16>,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
}

impl PageMetadata {
    #[must_use]
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

/// One immutable snapshot of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlCheck {
    pub id: i64,
    pub url_id: i64,
    pub status_code: Option<u16>,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Row of the listing view: a tracked URL with the outcome of its latest check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlListing {
    pub id: i64,
    pub name: String,
    pub last_status_code: Option<u16>,
    pub last_checked_at: Option<DateTime<Utc>>,
}

/// A tracked URL with all of its checks, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDetail {
    pub url: TrackedUrl,
    pub checks: Vec<UrlCheck>,
}

/// Result of the add-or-get operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedUrl {
    pub url: TrackedUrl,
    /// `true` when the address was already tracked and nothing was inserted
    pub already_existed: bool,
}

impl AddedUrl {
    pub fn id(&self) -> i64 {
        self.url.id
    }
}
