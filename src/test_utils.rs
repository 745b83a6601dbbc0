//! Test fixtures for listening-insights tests.
//!
//! Builders for canonical entities so calculator tests don't have to go
//! through JSON. Customize with struct update syntax:
//!
//! ```ignore
//! let p = PlayEvent {
//!     artists: Credits::from_vec(vec![artist("Björk", &["art pop"])]),
//!     ..play_at("t1", "2024-03-04T10:00:00Z")
//! };
//! ```

use chrono::{DateTime, FixedOffset};

use crate::model::{
    ArtistCredit, AudioFeatures, Credits, ListeningSnapshot, PlayEvent, PlayTime, TopTrack,
};

/// Parse an RFC 3339 timestamp.
pub fn ts(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).expect("Invalid test timestamp")
}

/// One artist credit.
pub fn artist(name: &str, genres: &[&str]) -> ArtistCredit {
    ArtistCredit::new(name, genres.iter().map(|g| g.to_string()).collect())
}

/// An untimed play with no artists.
pub fn play(track_id: &str, name: &str) -> PlayEvent {
    PlayEvent {
        track_id: Some(track_id.to_string()),
        name: Some(name.to_string()),
        artists: Credits::new(),
        played_at: PlayTime::Missing,
    }
}

/// A timed play named after its track id.
pub fn play_at(track_id: &str, at: &str) -> PlayEvent {
    PlayEvent {
        played_at: PlayTime::At(ts(at)),
        ..play(track_id, track_id)
    }
}

/// A timed play with credited artists.
pub fn play_by(track_id: &str, at: &str, artists: Vec<ArtistCredit>) -> PlayEvent {
    PlayEvent {
        artists: Credits::from_vec(artists),
        ..play_at(track_id, at)
    }
}

/// A top track with credited artists.
pub fn top(artists: Vec<ArtistCredit>) -> TopTrack {
    TopTrack {
        track_id: None,
        name: None,
        artists: Credits::from_vec(artists),
    }
}

/// A feature vector with the mood-relevant fields set.
pub fn features(track_id: &str, energy: f64, valence: f64, danceability: f64) -> AudioFeatures {
    AudioFeatures {
        track_id: track_id.to_string(),
        energy,
        valence,
        danceability,
        tempo: 120.0,
        ..Default::default()
    }
}

/// Snapshot with only recent plays.
pub fn with_plays(plays: Vec<PlayEvent>) -> ListeningSnapshot {
    ListeningSnapshot::new(plays, vec![], vec![])
}

/// Snapshot with only top tracks.
pub fn with_top_tracks(top_tracks: Vec<TopTrack>) -> ListeningSnapshot {
    ListeningSnapshot::new(vec![], top_tracks, vec![])
}

/// Snapshot with only feature vectors.
pub fn with_features(features: Vec<AudioFeatures>) -> ListeningSnapshot {
    ListeningSnapshot::new(vec![], vec![], features)
}
