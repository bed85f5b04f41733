//! Response types (Serialize)

use page_analyzer_core::UrlCheck;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddUrlResponse {
    pub id: i64,
    pub name: String,
    pub already_existed: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub check: UrlCheck,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct ReadinessResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
