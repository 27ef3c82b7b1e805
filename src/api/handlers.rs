//! JSON request handlers
//!
//! Implements the listing, playback-record, and health endpoints. Streaming
//! endpoints live in `super::stream`.

use crate::error::Error;
use crate::media;
use crate::media::FileEntry;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosResponse {
    videos: Vec<FileEntry>,
    last_played_video: Option<String>,
}

/// Both fields are optional so a partial body reaches the handler and gets
/// a 400 with a JSON error instead of a bare rejection.
#[derive(Debug, Deserialize)]
pub struct SavePlaybackRequest {
    filename: Option<String>,
    time: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SavePlaybackResponse {
    success: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "module": "lanshelf",
        "version": env!("CARGO_PKG_VERSION"),
        "port": state.config.port,
        "root": state.config.root.display().to_string(),
    }))
}

/// GET /videos - Media tree plus the last played file
pub async fn list_videos(
    State(state): State<AppState>,
) -> Result<Json<VideosResponse>, (StatusCode, Json<ErrorResponse>)> {
    let videos = match media::list_tree(&state.config.root) {
        Ok(videos) => videos,
        Err(e) => {
            error!("Failed to index media root: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("failed to list media files: {}", e),
                }),
            ));
        }
    };

    // The listing itself is still useful when the record is unreadable
    let last_played_video = match state.store.load().await {
        Ok(record) => record.last_played_video,
        Err(e) => {
            warn!("Ignoring unreadable playback record: {}", e);
            None
        }
    };

    Ok(Json(VideosResponse {
        videos,
        last_played_video,
    }))
}

/// POST /save-playback - Persist a playback position
pub async fn save_playback(
    State(state): State<AppState>,
    Json(req): Json<SavePlaybackRequest>,
) -> Result<Json<SavePlaybackResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (filename, time) = match (req.filename, req.time) {
        (Some(filename), Some(time)) => (filename, time),
        _ => {
            let err = Error::BadRequest("filename and time are required".to_string());
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ));
        }
    };

    match state.store.save(&filename, time).await {
        Ok(_) => {
            info!("Saved playback position {} for {}", time, filename);
            Ok(Json(SavePlaybackResponse { success: true }))
        }
        Err(e) => {
            error!("Failed to save playback record: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("failed to save playback record: {}", e),
                }),
            ))
        }
    }
}

/// GET /playback-record - Full persisted playback record
pub async fn playback_record(
    State(state): State<AppState>,
) -> Result<Json<crate::store::PlaybackRecord>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.load().await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            error!("Failed to read playback record: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("failed to read playback record: {}", e),
                }),
            ))
        }
    }
}
