use std::sync::Arc;
use std::time::Duration;

use page_analyzer_core::{FetchConfig, ValidationError};
use page_analyzer_fetch::{CheckFailure, PageFetcher};
use page_analyzer_storage::{MemoryStore, StorageError};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{CheckService, ServiceError, UrlService};

struct Harness {
    store: Arc<MemoryStore>,
    urls: UrlService,
    checks: CheckService,
}

fn harness_with_timeout(timeout: Duration) -> Harness {
    let store = Arc::new(MemoryStore::default());
    let config = FetchConfig { timeout, user_agent: "page-analyzer-test".to_owned() };
    let fetcher = Arc::new(PageFetcher::new(&config).unwrap());
    Harness {
        urls: UrlService::new(store.clone()),
        checks: CheckService::new(store.clone(), fetcher),
        store,
    }
}

fn harness() -> Harness {
    harness_with_timeout(Duration::from_secs(5))
}

const PAGE: &str = r#"<html><head><title>A</title>
    <meta name="description" content="C"></head><body><h1>B</h1></body></html>"#;

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(template).mount(&server).await;
    server
}

// ── add_url ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_add_url_rejects_blank_input() {
    let h = harness();
    for raw in ["", "   ", "\n\t"] {
        let err = h.urls.add_url(raw).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::EmptyInput)), "{raw:?}");
        assert_eq!(err.user_message(), "URL must not be empty");
    }
    assert!(h.urls.list_urls().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_url_rejects_long_input() {
    let h = harness();
    let raw = format!("https://example.com/{}", "p".repeat(300));
    let err = h.urls.add_url(&raw).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ValidationError::TooLong)));
    assert_eq!(err.user_message(), "URL exceeds 255 characters");
}

#[tokio::test]
async fn test_add_url_rejects_malformed_input() {
    let h = harness();
    let err = h.urls.add_url("example com").await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ValidationError::MalformedUrl)));
    assert_eq!(err.user_message(), "Invalid URL");
}

#[tokio::test]
async fn test_add_url_deduplicates_canonical_form() {
    let h = harness();
    let first = h.urls.add_url("HTTP://Example.com/Path").await.unwrap();
    assert!(!first.already_existed);
    assert_eq!(first.url.name, "http://example.com/path");

    let second = h.urls.add_url("  http://example.com/path ").await.unwrap();
    assert!(second.already_existed);
    assert_eq!(second.id(), first.id());
    assert_eq!(h.urls.list_urls().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_url_connection_failure_is_internal() {
    let h = harness();
    h.store.set_connection_down(true);
    let err = h.urls.add_url("https://example.com").await.unwrap_err();
    assert!(matches!(err, ServiceError::Internal(_)));
    assert!(err.is_connection());
    assert_eq!(err.user_message(), "Internal server error");
}

// ── reads ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_url_detail_unknown_id() {
    let h = harness();
    let err = h.urls.get_url_detail(42).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Page not found");
}

#[tokio::test]
async fn test_list_urls_newest_first_with_latest_status() {
    let h = harness();
    let server = serve(ResponseTemplate::new(200).set_body_string(PAGE)).await;

    let checked = h.urls.add_url(&server.uri()).await.unwrap();
    let unchecked = h.urls.add_url("https://never-checked.example").await.unwrap();
    h.checks.run_check(checked.id()).await.unwrap();

    let listing = h.urls.list_urls().await.unwrap();
    let ids: Vec<i64> = listing.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![unchecked.id(), checked.id()]);
    assert!(listing[0].last_status_code.is_none());
    assert!(listing[0].last_checked_at.is_none());
    assert_eq!(listing[1].last_status_code, Some(200));
    assert!(listing[1].last_checked_at.is_some());
}

#[tokio::test]
async fn test_list_urls_connection_failure() {
    let h = harness();
    h.store.set_connection_down(true);
    let err = h.urls.list_urls().await.unwrap_err();
    assert!(err.is_connection());
}

// ── run_check ────────────────────────────────────────────────────

#[tokio::test]
async fn test_run_check_persists_extracted_metadata() {
    let h = harness();
    let server = serve(
        ResponseTemplate::new(200)
            .insert_header("content-type", "text/html; charset=utf-8")
            .set_body_string(PAGE),
    )
    .await;
    let added = h.urls.add_url(&server.uri()).await.unwrap();

    let check = h.checks.run_check(added.id()).await.unwrap();
    assert_eq!(check.url_id, added.id());
    assert_eq!(check.status_code, Some(200));
    assert_eq!(check.title.as_deref(), Some("A"));
    assert_eq!(check.h1.as_deref(), Some("B"));
    assert_eq!(check.description.as_deref(), Some("C"));

    let detail = h.urls.get_url_detail(added.id()).await.unwrap();
    assert_eq!(detail.checks, vec![check]);
}

#[tokio::test]
async fn test_run_check_history_is_most_recent_first() {
    let h = harness();
    let server = serve(ResponseTemplate::new(200).set_body_string("<p>bare</p>")).await;
    let added = h.urls.add_url(&server.uri()).await.unwrap();

    let first = h.checks.run_check(added.id()).await.unwrap();
    let second = h.checks.run_check(added.id()).await.unwrap();
    assert!(first.title.is_none() && first.h1.is_none() && first.description.is_none());

    let detail = h.urls.get_url_detail(added.id()).await.unwrap();
    let ids: Vec<i64> = detail.checks.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_run_check_unknown_url() {
    let h = harness();
    let err = h.checks.run_check(99).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(h.store.check_count(), 0);
}

#[tokio::test]
async fn test_run_check_timeout_writes_nothing() {
    let h = harness_with_timeout(Duration::from_millis(200));
    let server = serve(
        ResponseTemplate::new(200).set_body_string(PAGE).set_delay(Duration::from_secs(2)),
    )
    .await;
    let added = h.urls.add_url(&server.uri()).await.unwrap();

    let err = h.checks.run_check(added.id()).await.unwrap_err();
    assert_eq!(err.check_failure(), Some(CheckFailure::Timeout));
    assert_eq!(err.user_message(), "An error occurred during the check");

    let detail = h.urls.get_url_detail(added.id()).await.unwrap();
    assert!(detail.checks.is_empty());
}

#[tokio::test]
async fn test_run_check_http_error_writes_nothing() {
    let h = harness();
    let server = serve(ResponseTemplate::new(503).set_body_string(PAGE)).await;
    let added = h.urls.add_url(&server.uri()).await.unwrap();

    let err = h.checks.run_check(added.id()).await.unwrap_err();
    assert_eq!(err.check_failure(), Some(CheckFailure::HttpError));
    assert_eq!(h.store.check_count(), 0);
}

#[tokio::test]
async fn test_run_check_storage_failure_is_internal() {
    let h = harness();
    let server = serve(ResponseTemplate::new(200).set_body_string(PAGE)).await;
    let added = h.urls.add_url(&server.uri()).await.unwrap();
    h.store.set_fail_appends(true);

    let err = h.checks.run_check(added.id()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Internal(StorageError::Statement(_))), "got {err:?}");
    assert!(!err.is_connection());
    assert!(err.check_failure().is_none());
    assert_eq!(h.store.check_count(), 0);
}

#[test]
fn test_storage_not_found_maps_to_not_found() {
    let err = ServiceError::from(StorageError::NotFound { entity: "url", id: "5".to_owned() });
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "not found: url with id 5");
}
