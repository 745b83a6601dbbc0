//! Wire shapes of the listening-snapshot payload.
//!
//! These types match the JSON the caller sends, nothing more. Every field is
//! optional and `null` is treated like absence. Do not use these types
//! outside the input module - the adapter converts them to [`crate::model`].

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotPayload {
    /// Recently played tracks, oldest or newest first (order is not relied on)
    pub recent_tracks: Option<Vec<TrackRecord>>,
    /// Most-played tracks, in rank order
    pub top_tracks: Option<Vec<TrackRecord>>,
    /// Track id -> feature object, or a falsy value for "no features"
    ///
    /// Kept as raw values so falsy entries can be told apart before decoding.
    pub audio_features: Option<Map<String, Value>>,
}

/// A track as it appears in `recent_tracks` and `top_tracks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackRecord {
    pub track_id: Option<String>,
    pub name: Option<String>,
    pub artists: Option<Vec<ArtistRecord>>,
    /// ISO-8601 timestamp; only meaningful in `recent_tracks`
    pub played_at: Option<String>,
}

/// An artist credit on a track.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistRecord {
    pub name: Option<String>,
    pub genres: Option<Vec<String>>,
}

/// A truthy `audio_features` entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureRecord {
    pub energy: Option<f64>,
    pub valence: Option<f64>,
    pub danceability: Option<f64>,
    pub tempo: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub speechiness: Option<f64>,
    pub liveness: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_tolerates_missing_and_null_fields() {
        let payload: SnapshotPayload =
            serde_json::from_str(r#"{"recent_tracks": null, "extra": 1}"#).unwrap();
        assert!(payload.recent_tracks.is_none());
        assert!(payload.top_tracks.is_none());
        assert!(payload.audio_features.is_none());
    }

    #[test]
    fn test_track_record_contract() {
        let json = r#"{
            "track_id": "4uLU6hMCjMI75M1A2tKUQC",
            "name": "Never Gonna Give You Up",
            "artists": [{"name": "Rick Astley", "genres": ["dance pop"]}, {"genres": null}],
            "played_at": "2024-03-04T10:15:00.000Z"
        }"#;
        let track: TrackRecord = serde_json::from_str(json).unwrap();
        let artists = track.artists.unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0].name.as_deref(), Some("Rick Astley"));
        assert!(artists[1].name.is_none());
        assert!(artists[1].genres.is_none());
        assert_eq!(track.played_at.as_deref(), Some("2024-03-04T10:15:00.000Z"));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result: Result<TrackRecord, _> = serde_json::from_str(r#"{"artists": "Rick"}"#);
        assert!(result.is_err());
    }
}
