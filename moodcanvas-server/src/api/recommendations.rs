//! Emotion-based track recommendations
//!
//! Malformed query values are reported as internal errors, not validation
//! errors, to stay compatible with existing clients.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use moodcanvas_common::{time, Result, Track};
use serde::Serialize;
use tracing::debug;

use crate::catalog::RecommendOptions;
use crate::query::{
    parse_flag, parse_intensity, parse_limit, QueryParams, DEFAULT_RECOMMENDATION_LIMIT,
};
use crate::{ApiError, ApiResult, AppState};

const FAILURE: &str = "Failed to get recommendations";

/// Read `limit`, `intensity` and `shuffle`; the first of any repeated key wins
pub fn recommend_options(params: &QueryParams) -> Result<RecommendOptions> {
    Ok(RecommendOptions {
        limit: parse_limit(params.first("limit"), DEFAULT_RECOMMENDATION_LIMIT)?,
        intensity: parse_intensity(params.first("intensity"))?,
        shuffle: parse_flag(params.first("shuffle")),
    })
}

/// A catalog track annotated for one response; nothing is written back
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTrack {
    #[serde(flatten)]
    pub track: Track,
    pub url: String,
    pub recommended_at: String,
}

impl From<Track> for RecommendedTrack {
    fn from(track: Track) -> Self {
        Self {
            url: format!("/api/music/{}", track.id),
            recommended_at: time::now_iso(),
            track,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    /// Lowercased label as requested, even when the neutral list was used
    pub emotion: String,
    pub recommendations: Vec<RecommendedTrack>,
}

/// GET /api/recommendations/:emotion?limit=&intensity=&shuffle=
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(emotion): Path<String>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<RecommendationsResponse>> {
    let emotion_key = emotion.to_lowercase();
    let options = recommend_options(&params).map_err(|e| ApiError::internal(FAILURE, e))?;

    let recommendations: Vec<RecommendedTrack> = state
        .catalog
        .recommend(&emotion_key, &options)
        .into_iter()
        .map(RecommendedTrack::from)
        .collect();

    debug!(
        "Recommending {} tracks for {:?} ({:?})",
        recommendations.len(),
        emotion_key,
        options
    );

    Ok(Json(RecommendationsResponse {
        success: true,
        emotion: emotion_key,
        recommendations,
    }))
}
