//! Repositories for document-store operations

use anyhow::Result;
use common::database::DocumentStore;
use mongodb::bson::{self, Bson, Document, doc, oid::ObjectId};

use crate::models::{CreatePlaylistRequest, CreateTrackRequest, Playlist, Track, demo_tracks};

/// Track repository for document-store operations
#[derive(Clone)]
pub struct TrackRepository {
    store: DocumentStore,
}

impl TrackRepository {
    /// Create a new track repository
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Number of stored tracks
    pub async fn count(&self) -> Result<u64> {
        Ok(self.store.count_documents(Track::COLLECTION).await?)
    }

    /// Insert the fixed demo catalog; returns how many tracks were inserted
    pub async fn seed_demo(&self) -> Result<usize> {
        let tracks = demo_tracks();
        let count = tracks.len();

        for track in tracks {
            let document = bson::to_document(&track)?;
            self.store
                .create_document(Track::COLLECTION, document)
                .await?;
        }

        Ok(count)
    }

    /// Insert a new track and return it as stored
    ///
    /// The record is re-fetched by its new identifier rather than echoed
    /// from the payload.
    pub async fn create(&self, payload: CreateTrackRequest) -> Result<Option<Document>> {
        let track = Track::from(payload);
        let document = bson::to_document(&track)?;
        let id = self
            .store
            .create_document(Track::COLLECTION, document)
            .await?;

        let id = ObjectId::parse_str(&id)?;
        Ok(self.store.find_document_by_id(Track::COLLECTION, id).await?)
    }

    /// Fetch up to `limit` tracks in storage order
    pub async fn list(&self, limit: i64) -> Result<Vec<Document>> {
        Ok(self
            .store
            .get_documents(Track::COLLECTION, doc! {}, limit)
            .await?)
    }
}

/// Playlist repository for document-store operations
#[derive(Clone)]
pub struct PlaylistRepository {
    store: DocumentStore,
}

impl PlaylistRepository {
    /// Create a new playlist repository
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Insert a new playlist with an empty track list and return it as stored
    pub async fn create(&self, payload: CreatePlaylistRequest) -> Result<Option<Document>> {
        let playlist = Playlist::from(payload);
        let document = bson::to_document(&playlist)?;
        let id = self
            .store
            .create_document(Playlist::COLLECTION, document)
            .await?;

        let id = ObjectId::parse_str(&id)?;
        Ok(self
            .store
            .find_document_by_id(Playlist::COLLECTION, id)
            .await?)
    }

    /// Fetch up to `limit` playlists in storage order
    pub async fn list(&self, limit: i64) -> Result<Vec<Document>> {
        Ok(self
            .store
            .get_documents(Playlist::COLLECTION, doc! {}, limit)
            .await?)
    }

    /// Append a track reference to a playlist, skipping duplicates
    ///
    /// The append is a single atomic set-union update against the store.
    /// The referenced track is not required to exist. Returns the updated
    /// playlist, or `None` when no playlist matched.
    pub async fn add_track(
        &self,
        playlist_id: ObjectId,
        track_id: ObjectId,
    ) -> Result<Option<Document>> {
        let matched = self
            .store
            .add_to_set(
                Playlist::COLLECTION,
                playlist_id,
                "tracks",
                Bson::String(track_id.to_hex()),
            )
            .await?;

        if !matched {
            return Ok(None);
        }

        Ok(self
            .store
            .find_document_by_id(Playlist::COLLECTION, playlist_id)
            .await?)
    }
}
