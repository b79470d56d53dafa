//! Shared helpers for router-level tests

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use common::database::DocumentStore;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use api::repositories::{PlaylistRepository, TrackRepository};
use api::routes;
use api::state::AppState;

/// Build the application router over an unconfigured store
///
/// Mirrors the router construction in `main.rs`, so tests exercise the same
/// middleware stack. Storage-dependent routes respond with their
/// unconfigured-store failure modes.
pub fn build_test_app() -> Router {
    let store = DocumentStore::Unavailable;

    let state = AppState {
        store: store.clone(),
        track_repository: TrackRepository::new(store.clone()),
        playlist_repository: PlaylistRepository::new(store),
    };

    routes::create_router(state)
}

/// Perform a GET request against the app
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Perform a POST request with a JSON body against the app
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
