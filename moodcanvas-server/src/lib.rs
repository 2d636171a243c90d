//! MoodCanvas Singer backend
//!
//! Maps detected emotions to catalogued tracks, records emotion observations
//! per session, and serves the demo front end.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use moodcanvas_common::config::ServerConfig;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod api;
pub mod catalog;
pub mod error;
pub mod query;
pub mod store;

pub use crate::catalog::Catalog;
pub use crate::error::{ApiError, ApiResult};
pub use crate::store::{EmotionHistory, SessionStore};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    pub history: EmotionHistory,
    /// Landing page served at `/`
    pub index_file: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl AppState {
    /// Fresh state with the builtin catalog and empty stores
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            catalog: Arc::new(Catalog::builtin()),
            sessions: SessionStore::new(),
            history: EmotionHistory::new(),
            index_file: config.index_file.clone(),
            static_dir: config.static_dir.clone(),
        }
    }
}

/// Build application router
///
/// All origins are allowed; unmatched paths get the API index.
pub fn build_router(state: AppState) -> Router {
    let index = ServeFile::new(&state.index_file);
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/api/status", get(api::get_status))
        .route(
            "/api/emotions",
            get(api::list_emotions).post(api::store_emotion),
        )
        .route("/api/recommendations/:emotion", get(api::get_recommendations))
        .route("/api/music/:track_id", get(api::get_track))
        .route("/api/session", get(api::get_session))
        .route_service("/", index)
        .nest_service("/static", assets)
        .fallback(api::api_index)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
