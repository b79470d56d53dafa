//! Schema definitions for the stored collections and the API request payloads
//!
//! Each schema struct maps to one collection in the document store. The
//! internal identifier is assigned by the store on insert and is absent on
//! records built from a request payload.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Music tracks, stored in the `track` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Track title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Album name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Album art URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Publicly accessible audio URL
    pub audio_url: String,
    /// Duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,
}

impl Track {
    pub const COLLECTION: &'static str = "track";
}

/// User playlists, stored in the `playlist` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Track identifiers in hex form; weak references, insertion order kept
    #[serde(default)]
    pub tracks: Vec<String>,
}

impl Playlist {
    pub const COLLECTION: &'static str = "playlist";
}

/// Registered listeners, stored in the `user` collection
///
/// Declared for the collection the store provisions; no route exposes it yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Profile image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    pub const COLLECTION: &'static str = "user";
}

/// Store items, stored in the `product` collection
///
/// Declared for the collection the store provisions; no route exposes it yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in dollars, non-negative
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

impl Product {
    pub const COLLECTION: &'static str = "product";
}

fn default_in_stock() -> bool {
    true
}

/// Request for track creation
#[derive(Debug, Deserialize)]
pub struct CreateTrackRequest {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub audio_url: String,
    #[serde(default)]
    pub duration_ms: Option<i64>,
}

impl From<CreateTrackRequest> for Track {
    fn from(payload: CreateTrackRequest) -> Self {
        Self {
            id: None,
            title: payload.title,
            artist: payload.artist,
            album: payload.album,
            cover_url: payload.cover_url,
            audio_url: payload.audio_url,
            duration_ms: payload.duration_ms,
        }
    }
}

/// Request for playlist creation
#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl From<CreatePlaylistRequest> for Playlist {
    fn from(payload: CreatePlaylistRequest) -> Self {
        Self {
            id: None,
            name: payload.name,
            description: payload.description,
            cover_url: payload.cover_url,
            tracks: Vec::new(),
        }
    }
}

/// Request for adding a track reference to a playlist
#[derive(Debug, Deserialize)]
pub struct AddTrackRequest {
    pub track_id: String,
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Maximum number of records to return
    pub limit: Option<i64>,
}

/// The fixed demo catalog inserted by the seed route
pub fn demo_tracks() -> Vec<Track> {
    vec![
        Track {
            id: None,
            title: "Dreamscape".to_string(),
            artist: "Nocturne".to_string(),
            album: Some("Midnight City".to_string()),
            cover_url: Some(
                "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=800&q=80&auto=format&fit=crop"
                    .to_string(),
            ),
            audio_url: "https://cdn.pixabay.com/download/audio/2021/11/16/audio_7b2a3f9b9a.mp3?filename=lofi-study-112191.mp3"
                .to_string(),
            duration_ms: Some(152_000),
        },
        Track {
            id: None,
            title: "Sunset Drive".to_string(),
            artist: "Neon Waves".to_string(),
            album: Some("Coastal Roads".to_string()),
            cover_url: Some(
                "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=800&q=80&auto=format&fit=crop"
                    .to_string(),
            ),
            audio_url: "https://cdn.pixabay.com/download/audio/2021/12/07/audio_7b5b2f6d8b.mp3?filename=vibes-122242.mp3"
                .to_string(),
            duration_ms: Some(180_000),
        },
        Track {
            id: None,
            title: "Crystal Air".to_string(),
            artist: "Aurora".to_string(),
            album: Some("Skylight".to_string()),
            cover_url: Some(
                "https://images.unsplash.com/photo-1515263487990-61b07816b324?w=800&q=80&auto=format&fit=crop"
                    .to_string(),
            ),
            audio_url: "https://cdn.pixabay.com/download/audio/2022/03/15/audio_7e0b7b5d03.mp3?filename=chill-ambient-10962.mp3"
                .to_string(),
            duration_ms: Some(210_000),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_three_distinct_tracks() {
        let tracks = demo_tracks();
        assert_eq!(tracks.len(), 3);

        let mut titles: Vec<_> = tracks.iter().map(|t| t.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 3);

        for track in &tracks {
            assert!(track.id.is_none());
            assert!(track.duration_ms.is_some());
        }
    }

    #[test]
    fn create_track_request_requires_all_mandatory_fields() {
        let missing_audio = serde_json::json!({ "title": "X", "artist": "Y" });
        assert!(serde_json::from_value::<CreateTrackRequest>(missing_audio).is_err());

        let complete = serde_json::json!({
            "title": "X",
            "artist": "Y",
            "audio_url": "http://a/b.mp3"
        });
        let request: CreateTrackRequest =
            serde_json::from_value(complete).expect("minimal payload should deserialize");
        assert!(request.album.is_none());
        assert!(request.duration_ms.is_none());
    }

    #[test]
    fn playlist_from_request_starts_with_no_tracks() {
        let request = CreatePlaylistRequest {
            name: "Morning".to_string(),
            description: None,
            cover_url: None,
        };
        let playlist = Playlist::from(request);
        assert!(playlist.id.is_none());
        assert!(playlist.tracks.is_empty());
    }

    #[test]
    fn playlist_tracks_default_to_empty_on_deserialize() {
        let raw = serde_json::json!({ "name": "Morning" });
        let playlist: Playlist =
            serde_json::from_value(raw).expect("playlist without tracks should deserialize");
        assert!(playlist.tracks.is_empty());
    }

    #[test]
    fn product_defaults_to_in_stock() {
        let raw = serde_json::json!({
            "title": "Sticker pack",
            "price": 4.99,
            "category": "merch"
        });
        let product: Product =
            serde_json::from_value(raw).expect("product without in_stock should deserialize");
        assert!(product.in_stock);
    }
}
