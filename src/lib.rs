//! # lanshelf
//!
//! Single-user local media server. Indexes video/PDF files under a media
//! root, streams them to a browser client with byte-range support for
//! seeking, and persists per-file playback position in a JSON record.
//!
//! No transcoding, no authentication, no database: one process, one user.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod config;
pub mod error;
pub mod media;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<store::PlaybackStore>,
}

impl AppState {
    /// Create application state from validated configuration
    pub fn new(config: Config) -> Self {
        let store = Arc::new(store::PlaybackStore::new(config.record_path.clone()));
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

/// Build the application router
///
/// CORS is permissive: the browser client is typically served from another
/// origin on the same machine.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::handlers::health))
        .route("/videos", get(api::handlers::list_videos))
        .route("/video/*key", get(api::stream::stream_video))
        .route("/pdf/*key", get(api::stream::stream_pdf))
        .route("/save-playback", post(api::handlers::save_playback))
        .route("/playback-record", get(api::handlers::playback_record))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
