//! Application state shared across handlers

use common::database::DocumentStore;

use crate::repositories::{PlaylistRepository, TrackRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
    pub track_repository: TrackRepository,
    pub playlist_repository: PlaylistRepository,
}
