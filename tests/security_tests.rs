//! Security tests for lanshelf
//!
//! The streaming endpoints resolve request keys against the media root and
//! must reject any path that escapes it, including `..` traversal and
//! absolute paths, without revealing whether the target exists.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::fs;
use tempfile::TempDir;
use tower::util::ServiceExt;

use lanshelf::{build_router, AppState, Config};

/// Test helper: media root is a subdirectory, with a secret file next to it
/// that traversal must never reach.
fn setup_app() -> (axum::Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = dir.path().join("media");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.mp4"), b"media bytes").unwrap();
    fs::write(dir.path().join("secret.mp4"), b"outside the root").unwrap();

    let config = Config::new(root, None, 5000).expect("Config");
    (build_router(AppState::new(config)), dir)
}

async fn get_status(app: &axum::Router, path: &str) -> StatusCode {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_in_root_file_still_served() {
    let (app, _dir) = setup_app();
    assert_eq!(get_status(&app, "/video/a.mp4").await, StatusCode::OK);
}

#[tokio::test]
async fn test_dotdot_traversal_rejected() {
    let (app, _dir) = setup_app();

    // ..%2F decodes to ../ in the wildcard segment
    let status = get_status(&app, "/video/..%2Fsecret.mp4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deep_traversal_rejected() {
    let (app, _dir) = setup_app();

    let status = get_status(&app, "/video/..%2F..%2F..%2Fetc%2Fpasswd").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_absolute_path_key_rejected() {
    let (app, _dir) = setup_app();

    // An absolute key replaces the root when joined; containment must catch it
    let status = get_status(&app, "/video/%2Fetc%2Fpasswd").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pdf_endpoint_also_contained() {
    let (app, _dir) = setup_app();

    let status = get_status(&app, "/pdf/..%2Fsecret.mp4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_directory_key_not_streamable() {
    let (app, _dir) = setup_app();

    // The root itself resolves inside the root but is not a file
    let status = get_status(&app, "/video/.").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
