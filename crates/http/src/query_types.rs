//! Request types (Deserialize)

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddUrlRequest {
    #[serde(default)]
    pub url: String,
}

/// `POST /urls` body: a JSON object or an HTML form, both carrying `url`.
#[derive(Debug)]
pub struct AddUrlInput(pub AddUrlRequest);

impl<S> FromRequest<S> for AddUrlInput
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(body) = Json::<AddUrlRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(body))
        } else {
            let Form(body) = Form::<AddUrlRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(body))
        }
    }
}
