//! Range-capable file streaming
//!
//! Serves media bytes for the `/video/{key}` and `/pdf/{key}` endpoints.
//! Bytes are forwarded incrementally through a `ReaderStream`, so memory
//! use is independent of file size and every request owns its own file
//! handle (concurrent ranges over the same file do not interact). A client
//! abort drops the stream and closes the handle.

use crate::error::{Error, Result};
use crate::media::formats;
use crate::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::io::SeekFrom;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;
use tracing::{debug, error};

/// Read buffer size for streamed responses
const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// GET /video/{*key} - Stream a video file, honoring byte ranges
pub async fn stream_video(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Response {
    serve_media(&state, &key, headers.get(header::RANGE)).await
        .unwrap_or_else(error_response)
}

/// GET /pdf/{*key} - Stream a PDF file in full (no range support)
pub async fn stream_pdf(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Response {
    serve_media(&state, &key, None).await.unwrap_or_else(error_response)
}

/// Resolve `key` against the media root and stream the file.
///
/// The joined path is canonicalized and must stay inside the canonical
/// root; a path that escapes it (or does not exist - canonicalize fails
/// either way) reports the same not-found error, so probes cannot tell
/// "outside root" from "absent".
async fn serve_media(
    state: &AppState,
    key: &str,
    range_header: Option<&HeaderValue>,
) -> Result<Response> {
    let resolved = resolve_within_root(state, key).await?;

    let file = tokio::fs::File::open(&resolved).await?;
    let size = file.metadata().await?.len();

    let format = formats::lookup(&resolved);
    let content_type = format.map(|f| f.content_type).unwrap_or("application/octet-stream");
    let range_capable = format.map(|f| f.range_capable).unwrap_or(false);

    // A malformed Range header is ignored (full-file response), per the
    // lenient reading of RFC 9110; only a well-formed but unsatisfiable
    // window earns a 416.
    if let Some((start, end)) = range_header.and_then(parse_range).filter(|_| range_capable) {
        let end = end.unwrap_or(size.saturating_sub(1)).min(size.saturating_sub(1));
        if start >= size || end < start {
            return Err(Error::RangeNotSatisfiable { start, size });
        }
        return stream_window(file, start, end, size, content_type).await;
    }

    debug!("Serving {} in full ({} bytes)", resolved.display(), size);
    let stream = ReaderStream::with_capacity(file, STREAM_CHUNK_SIZE);
    let response = if range_capable {
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type.to_string()),
                (header::CONTENT_LENGTH, size.to_string()),
                (header::ACCEPT_RANGES, "bytes".to_string()),
            ],
            Body::from_stream(stream),
        )
            .into_response()
    } else {
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type.to_string()),
                (header::CONTENT_LENGTH, size.to_string()),
            ],
            Body::from_stream(stream),
        )
            .into_response()
    };
    Ok(response)
}

/// Stream exactly the `[start, end]` byte window of an open file.
async fn stream_window(
    mut file: tokio::fs::File,
    start: u64,
    end: u64,
    size: u64,
    content_type: &str,
) -> Result<Response> {
    let len = end - start + 1;
    file.seek(SeekFrom::Start(start)).await?;
    let stream = ReaderStream::with_capacity(file.take(len), STREAM_CHUNK_SIZE);

    debug!("Serving byte range {}-{}/{}", start, end, size);
    Ok((
        StatusCode::PARTIAL_CONTENT,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_RANGE, format!("bytes {}-{}/{}", start, end, size)),
            (header::ACCEPT_RANGES, "bytes".to_string()),
            (header::CONTENT_LENGTH, len.to_string()),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}

/// Join the decoded key onto the media root and verify containment.
async fn resolve_within_root(state: &AppState, key: &str) -> Result<PathBuf> {
    let joined = state.config.root.join(key);
    let resolved = tokio::fs::canonicalize(&joined)
        .await
        .map_err(|_| Error::NotFound(key.to_string()))?;

    if !resolved.starts_with(&state.config.root) {
        debug!("Rejected path escaping media root: {}", key);
        return Err(Error::NotFound(key.to_string()));
    }
    if !resolved.is_file() {
        return Err(Error::NotFound(key.to_string()));
    }
    Ok(resolved)
}

/// Parse a `Range: bytes=start-end` header value.
///
/// Returns the start offset and optional inclusive end. `None` for
/// anything that is not a single well-formed bytes range (including
/// suffix ranges and multipart ranges, which the player never sends).
fn parse_range(value: &HeaderValue) -> Option<(u64, Option<u64>)> {
    let rest = value.to_str().ok()?.strip_prefix("bytes=")?;
    let (start, end) = rest.split_once('-')?;
    let start = start.trim().parse().ok()?;
    let end = match end.trim() {
        "" => None,
        end => Some(end.parse().ok()?),
    };
    Some((start, end))
}

/// Map a streaming error to its HTTP response.
fn error_response(err: Error) -> Response {
    match err {
        Error::NotFound(_) => (StatusCode::NOT_FOUND, "file not found").into_response(),
        Error::RangeNotSatisfiable { start, size } => (
            StatusCode::RANGE_NOT_SATISFIABLE,
            format!("requested range not satisfiable\n{} >= {}", start, size),
        )
            .into_response(),
        other => {
            error!("Streaming failed: {}", other);
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
    }
}
