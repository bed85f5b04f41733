use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::CheckResponse;

/// Runs one check against the tracked URL and returns the stored record.
///
/// Fetch failures surface as 502 and leave the history untouched.
pub async fn run_check(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<CheckResponse>), ApiError> {
    let check = state.check_service.run_check(id).await?;
    Ok((
        StatusCode::CREATED,
        Json(CheckResponse { check, message: "Page successfully checked" }),
    ))
}
