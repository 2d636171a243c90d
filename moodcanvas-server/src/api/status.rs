//! Service status and catalog summary

use axum::{extract::State, Json};
use moodcanvas_common::time;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: String,
    pub emotion_types: Vec<&'static str>,
    pub total_tracks: usize,
    pub active_sessions: usize,
}

/// GET /api/status
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online".to_string(),
        timestamp: time::now_iso(),
        emotion_types: state.catalog.emotion_types(),
        total_tracks: state.catalog.total_tracks(),
        active_sessions: state.sessions.len().await,
    })
}
