//! Repeat listening: artist loyalty and track repetition over recent plays.
//!
//! Neither metric needs timestamps, so both use every recent play.

use std::collections::HashSet;

use crate::model::{ListeningSnapshot, UNKNOWN};

use super::report::{RepeatedTrack, TrackRepetition};
use super::tally::Tally;
use super::{rounded_percent, share, truncated_percent};

/// `round((1 - unique artists / artist mentions) × 100)`, 0 with no mentions.
///
/// A mention is one artist credit on one play.
pub fn artist_loyalty(snapshot: &ListeningSnapshot) -> u32 {
    let mentions: Vec<&str> = snapshot
        .plays()
        .iter()
        .flat_map(|p| p.artists.iter().map(|a| a.name.as_str()))
        .collect();
    if mentions.is_empty() {
        return 0;
    }

    let unique = mentions.iter().collect::<HashSet<_>>().len();
    rounded_percent(1.0 - share(unique, mentions.len()))
}

/// Distinct tracks, total plays, and the most replayed track.
///
/// Plays without a track id count toward `total_plays` only.
pub fn track_repetition(snapshot: &ListeningSnapshot) -> TrackRepetition {
    let plays = snapshot.plays();
    let ids: Tally<&str> = plays.iter().filter_map(|p| p.track_id.as_deref()).collect();
    if ids.is_empty() {
        return TrackRepetition::default();
    }

    let unique_tracks = ids.len();
    let total_plays = plays.len();

    let most_repeated_track = ids.top().map(|(&id, count)| {
        let name = plays
            .iter()
            .find(|p| p.track_id.as_deref() == Some(id))
            .and_then(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN.to_string());
        RepeatedTrack { name, plays: count }
    });

    TrackRepetition {
        unique_tracks,
        total_plays,
        most_repeated_track,
        repetition_rate: truncated_percent(1.0 - share(unique_tracks, total_plays)),
    }
}
