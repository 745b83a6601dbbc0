//! Report types.
//!
//! Field order is serialization order and matches the report's published
//! key order. Every group has a `Default` that is its "no data" shape.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::model::Feature;

/// The complete analysis result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub audio_stats: AudioStats,
    pub top_artists: Vec<NameCount>,
    pub top_genres: Vec<NameCount>,
    pub temporal_patterns: TemporalPatterns,
    pub mood_distribution: MoodDistribution,
    pub diversity_score: u32,
    pub total_tracks_analyzed: usize,
    pub collaboration_network: Vec<Collaboration>,
    pub listening_velocity: ListeningVelocity,
    pub genre_evolution: Vec<WeeklyGenre>,
    pub artist_loyalty: u32,
    pub track_repetition: TrackRepetition,
    pub time_distribution: TimeDistribution,
}

impl Report {
    /// Serialize the report, indented with two spaces when `pretty`.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Descriptive statistics for one audio feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSummary {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; `None` (null) with a single sample
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

/// Per-feature summaries, serialized as a map in [`Feature::SUMMARIZED`]
/// order. Empty (`{}`) when there are no feature vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioStats {
    summaries: Vec<(Feature, FeatureSummary)>,
}

impl AudioStats {
    pub fn new(summaries: Vec<(Feature, FeatureSummary)>) -> Self {
        Self { summaries }
    }

    pub fn get(&self, feature: Feature) -> Option<&FeatureSummary> {
        self.summaries
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, summary)| summary)
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl Serialize for AudioStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.summaries.len()))?;
        for (feature, summary) in &self.summaries {
            map.serialize_entry(feature.as_str(), summary)?;
        }
        map.end()
    }
}

/// A ranked artist or genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// Listening activity by clock and calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemporalPatterns {
    /// Play counts per hour of day, 0-23
    pub hourly: [u32; 24],
    /// Play counts per weekday, 0=Monday
    pub daily: [u32; 7],
    /// Mean energy per hour, only for hours with joined plays
    pub energy_by_hour: BTreeMap<u32, f64>,
}

/// Share of feature vectors per mood, in whole percent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoodDistribution {
    pub energetic: u32,
    pub calm: u32,
    pub happy: u32,
    pub sad: u32,
    pub danceable: u32,
}

/// Two artists credited together, and on how many top tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collaboration {
    /// Name-sorted pair
    pub artists: [String; 2],
    pub tracks: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListeningVelocity {
    /// Plays per day of the observed span, one decimal
    pub tracks_per_day: f64,
    pub most_active_hour: u32,
    /// 0=Monday
    pub most_active_day: u32,
    /// Longest run of consecutive days with at least one play
    pub listening_streak: u32,
}

/// The dominant genre of one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyGenre {
    pub week: u32,
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackRepetition {
    pub unique_tracks: usize,
    pub total_plays: usize,
    pub most_repeated_track: Option<RepeatedTrack>,
    pub repetition_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatedTrack {
    pub name: String,
    pub plays: usize,
}

/// Share of timed plays per part of the day, in whole percent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeDistribution {
    /// 06:00-11:59
    pub morning: u32,
    /// 12:00-16:59
    pub afternoon: u32,
    /// 17:00-21:59
    pub evening: u32,
    /// 22:00-05:59
    pub night: u32,
}
