use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use page_analyzer_core::{UrlDetail, UrlListing};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::AddUrlInput;
use crate::response_types::AddUrlResponse;

pub async fn list_urls(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UrlListing>>, ApiError> {
    let listings = state.url_service.list_urls().await?;
    Ok(Json(listings))
}

pub async fn add_url(
    State(state): State<Arc<AppState>>,
    AddUrlInput(req): AddUrlInput,
) -> Result<(StatusCode, Json<AddUrlResponse>), ApiError> {
    let added = state.url_service.add_url(&req.url).await?;
    let (status, message) = if added.already_existed {
        (StatusCode::OK, "Page already exists")
    } else {
        (StatusCode::CREATED, "Page successfully added")
    };
    Ok((
        status,
        Json(AddUrlResponse {
            id: added.url.id,
            name: added.url.name,
            already_existed: added.already_existed,
            message,
        }),
    ))
}

pub async fn get_url(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UrlDetail>, ApiError> {
    let detail = state.url_service.get_url_detail(id).await?;
    Ok(Json(detail))
}
