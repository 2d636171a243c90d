//! Track metadata lookup
//!
//! There is no audio behind the catalog, so every track is returned in
//! demo form.

use axum::{
    extract::{Path, State},
    Json,
};
use moodcanvas_common::Track;
use serde::Serialize;
use tracing::debug;

use crate::{ApiError, ApiResult, AppState};

pub const DEMO_MESSAGE: &str = "Demo mode - no actual audio file";

#[derive(Debug, Serialize)]
pub struct DemoTrack {
    #[serde(flatten)]
    pub track: Track,
    pub demo: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub success: bool,
    pub track: DemoTrack,
}

/// GET /api/music/:track_id
pub async fn get_track(
    State(state): State<AppState>,
    Path(track_id): Path<String>,
) -> ApiResult<Json<TrackResponse>> {
    let track = state.catalog.find_track(&track_id).ok_or_else(|| {
        debug!("Track {} not in catalog", track_id);
        ApiError::NotFound("Track not found".to_string())
    })?;

    Ok(Json(TrackResponse {
        success: true,
        track: DemoTrack {
            track: *track,
            demo: true,
            message: DEMO_MESSAGE,
        },
    }))
}
