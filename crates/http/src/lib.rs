//! HTTP API server for page-analyzer.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use page_analyzer_service::{CheckService, UrlService};
use tower_http::trace::TraceLayer;

pub use response_types::{
    AddUrlResponse, CheckResponse, ReadinessResponse, VersionResponse,
};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Registration, listing and detail reads
    pub url_service: Arc<UrlService>,
    /// Fetch → extract → persist pipeline
    pub check_service: Arc<CheckService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route("/urls", get(handlers::urls::list_urls).post(handlers::urls::add_url))
        .route("/urls/{id}", get(handlers::urls::get_url))
        .route("/urls/{id}/checks", post(handlers::checks::run_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness() -> Json<ReadinessResponse> {
    Json(ReadinessResponse { status: "ready" })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
