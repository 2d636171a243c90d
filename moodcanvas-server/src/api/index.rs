//! API index returned for unmatched paths

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const ENDPOINTS: [&str; 6] = [
    "GET /api/status",
    "POST /api/emotions",
    "GET /api/recommendations/:emotion",
    "GET /api/music/:trackId",
    "GET /api/session",
    "GET /api/emotions",
];

#[derive(Debug, Serialize)]
pub struct ApiIndex {
    pub message: &'static str,
    pub endpoints: [&'static str; 6],
}

/// Fallback for any path no route matches
pub async fn api_index() -> (StatusCode, Json<ApiIndex>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiIndex {
            message: "MoodCanvas Singer API",
            endpoints: ENDPOINTS,
        }),
    )
}
