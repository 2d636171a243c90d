//! Session get-or-create

use axum::{
    extract::{Query, State},
    Json,
};
use moodcanvas_common::{uuid_utils, Session};
use serde::Serialize;
use tracing::debug;

use crate::query::{non_empty, QueryParams};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session: Session,
}

/// GET /api/session?sessionId=...
///
/// A fresh id is generated when none is supplied. Repeated `sessionId`
/// parameters resolve to the first one.
pub async fn get_session(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<SessionResponse> {
    let id = non_empty(params.first("sessionId"))
        .map(str::to_string)
        .unwrap_or_else(uuid_utils::generate_string);
    let session = state.sessions.touch(id).await;
    debug!("Session {} active", session.id);

    Json(SessionResponse {
        success: true,
        session,
    })
}
