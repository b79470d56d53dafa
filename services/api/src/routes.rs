//! API service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use std::env;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    error::ApiError,
    models::{AddTrackRequest, CreatePlaylistRequest, CreateTrackRequest, ListQuery},
    serialize::serialize_document,
    state::AppState,
    validation::validate_object_id,
};

/// Records returned by the list endpoints when no limit is given
const DEFAULT_LIST_LIMIT: i64 = 50;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/seed", post(seed))
        .route("/tracks", get(list_tracks).post(create_track))
        .route("/playlists", get(list_playlists).post(create_playlist))
        .route("/playlists/:playlist_id/tracks", post(add_track_to_playlist))
        .route("/test", get(test_database))
        .layer(cors)
        .with_state(state)
}

/// Static liveness message
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "melo API running"
    }))
}

/// Insert the fixed demo catalog if the track collection is empty
///
/// Idempotent: a non-empty collection is reported and left untouched.
pub async fn seed(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    if !state.store.is_connected() {
        return Err(ApiError::DatabaseUnavailable);
    }

    let existing = state.track_repository.count().await.map_err(|e| {
        tracing::error!("Failed to count tracks: {}", e);
        ApiError::InternalServerError
    })?;

    if existing > 0 {
        return Ok(Json(json!({
            "status": "ok",
            "seeded": false,
            "existing": existing,
        })));
    }

    let count = state.track_repository.seed_demo().await.map_err(|e| {
        tracing::error!("Failed to seed tracks: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(json!({
        "status": "ok",
        "seeded": true,
        "count": count,
    })))
}

/// Get stored tracks
pub async fn list_tracks(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let documents = state
        .track_repository
        .list(query.limit.unwrap_or(DEFAULT_LIST_LIMIT))
        .await
        .map_err(|e| {
            tracing::error!("Failed to list tracks: {}", e);
            ApiError::InternalServerError
        })?;

    let tracks: Vec<_> = documents
        .into_iter()
        .map(|document| serialize_document(Some(document)))
        .collect();

    Ok(Json(tracks))
}

/// Create a new track
pub async fn create_track(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateTrackRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let document = state.track_repository.create(payload).await.map_err(|e| {
        tracing::error!("Failed to create track: {}", e);
        ApiError::BadRequest(e.to_string())
    })?;

    Ok(Json(serialize_document(document)))
}

/// Get stored playlists
pub async fn list_playlists(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let documents = state
        .playlist_repository
        .list(query.limit.unwrap_or(DEFAULT_LIST_LIMIT))
        .await
        .map_err(|e| {
            tracing::error!("Failed to list playlists: {}", e);
            ApiError::InternalServerError
        })?;

    let playlists: Vec<_> = documents
        .into_iter()
        .map(|document| serialize_document(Some(document)))
        .collect();

    Ok(Json(playlists))
}

/// Create a new playlist
pub async fn create_playlist(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreatePlaylistRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let document = state
        .playlist_repository
        .create(payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create playlist: {}", e);
            ApiError::BadRequest(e.to_string())
        })?;

    Ok(Json(serialize_document(document)))
}

/// Add a track reference to a playlist
///
/// Both identifiers must be well-formed; the referenced track is not
/// required to exist. A missing playlist is reported as not found.
pub async fn add_track_to_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<AddTrackRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let playlist_id =
        validate_object_id(&playlist_id, "playlist id").map_err(ApiError::BadRequest)?;
    let track_id = validate_object_id(&payload.track_id, "track id").map_err(ApiError::BadRequest)?;

    let document = state
        .playlist_repository
        .add_track(playlist_id, track_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add track to playlist: {}", e);
            ApiError::BadRequest(e.to_string())
        })?
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;

    Ok(Json(serialize_document(Some(document))))
}

/// Diagnostic endpoint reporting liveness and storage status
///
/// Never fails; every internal error is downgraded to a status string.
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    let mut database = "unavailable".to_string();
    let mut connection_status = "Not Connected";
    let mut collections: Vec<String> = Vec::new();

    if state.store.is_connected() {
        connection_status = "Connected";
        match state.store.collection_names().await {
            Ok(names) => {
                collections = names.into_iter().take(10).collect();
                database = "connected".to_string();
            }
            Err(e) => {
                let message: String = e.to_string().chars().take(50).collect();
                database = format!("error: {}", message);
            }
        }
    }

    Json(json!({
        "backend": "running",
        "database": database,
        "connection_status": connection_status,
        "collections": collections,
        "database_url": if env::var("DATABASE_URL").is_ok() { "set" } else { "not set" },
        "database_name": if env::var("DATABASE_NAME").is_ok() { "set" } else { "not set" },
    }))
}
