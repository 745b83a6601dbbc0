//! Canonical data model for a listening snapshot.
//!
//! Defines the entities the metric calculators read: [`PlayEvent`],
//! [`TopTrack`], [`ArtistCredit`] and [`AudioFeatures`], gathered into one
//! immutable [`ListeningSnapshot`]. Raw input shapes never leak past
//! [`crate::input`]; everything here is already defaulted.
//!
//! # Joins
//!
//! Plays and feature vectors are joined by track id (inner join). The join
//! is computed once when the snapshot is built. Artists have no identity
//! beyond their name string.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};
use smallvec::SmallVec;

/// Name used for artist credits and tracks without one.
pub const UNKNOWN: &str = "Unknown";

/// One credited artist on a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistCredit {
    /// Artist name ("Unknown" when absent in the input)
    pub name: String,
    /// Genre tags attached to the artist
    pub genres: Vec<String>,
}

impl ArtistCredit {
    pub fn new(name: impl Into<String>, genres: Vec<String>) -> Self {
        Self {
            name: name.into(),
            genres,
        }
    }
}

/// Artist credits for a track.
///
/// SmallVec: almost every track has one or two credited artists
pub type Credits = SmallVec<[ArtistCredit; 2]>;

/// When a play happened, as far as the input lets us tell.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayTime {
    /// No timestamp was supplied
    Missing,
    /// A timestamp was supplied but could not be parsed
    Unparseable(String),
    /// Parsed timestamp, in the offset it was recorded with
    At(DateTime<FixedOffset>),
}

impl PlayTime {
    /// The parsed timestamp, if any.
    pub fn at(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            PlayTime::At(at) => Some(*at),
            _ => None,
        }
    }
}

/// One historical listen.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayEvent {
    pub track_id: Option<String>,
    pub name: Option<String>,
    pub artists: Credits,
    pub played_at: PlayTime,
}

/// One entry in a "most played" ranking. Insertion order is rank order.
#[derive(Debug, Clone, PartialEq)]
pub struct TopTrack {
    pub track_id: Option<String>,
    pub name: Option<String>,
    pub artists: Credits,
}

/// Continuous audio descriptors for one track.
///
/// All fields are nominally in [0, 1] except `tempo` (BPM). Missing input
/// fields are 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioFeatures {
    pub track_id: String,
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub tempo: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub speechiness: f64,
    pub liveness: f64,
}

/// Features that get a statistical summary, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Energy,
    Valence,
    Danceability,
    Tempo,
    Acousticness,
}

impl Feature {
    pub const SUMMARIZED: [Feature; 5] = [
        Feature::Energy,
        Feature::Valence,
        Feature::Danceability,
        Feature::Tempo,
        Feature::Acousticness,
    ];

    /// Key used in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Energy => "energy",
            Feature::Valence => "valence",
            Feature::Danceability => "danceability",
            Feature::Tempo => "tempo",
            Feature::Acousticness => "acousticness",
        }
    }

    /// Read this feature from a vector.
    pub fn of(&self, features: &AudioFeatures) -> f64 {
        match self {
            Feature::Energy => features.energy,
            Feature::Valence => features.valence,
            Feature::Danceability => features.danceability,
            Feature::Tempo => features.tempo,
            Feature::Acousticness => features.acousticness,
        }
    }
}

/// The recent-plays table carries timestamps, but none of them parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("none of the {unparseable} supplied play timestamps could be parsed (first: {first:?})")]
pub struct TimestampError {
    pub unparseable: usize,
    pub first: String,
}

/// A play with a valid timestamp.
#[derive(Debug, Clone, Copy)]
pub struct TimedPlay<'a> {
    pub play: &'a PlayEvent,
    pub at: DateTime<FixedOffset>,
}

impl TimedPlay<'_> {
    /// Hour of day, 0-23, in the timestamp's own offset.
    pub fn hour(&self) -> usize {
        self.at.hour() as usize
    }

    /// Day of week, 0=Monday .. 6=Sunday.
    pub fn weekday(&self) -> usize {
        self.at.weekday().num_days_from_monday() as usize
    }

    /// Calendar date of the play.
    pub fn date(&self) -> NaiveDate {
        self.at.date_naive()
    }

    /// ISO (year, week) of the play.
    pub fn iso_week(&self) -> (i32, u32) {
        let week = self.at.iso_week();
        (week.year(), week.week())
    }
}

/// An immutable, normalized listening snapshot.
///
/// Built once per analysis by [`crate::input::adapter`]; calculators only
/// ever borrow it.
#[derive(Debug, Clone, Default)]
pub struct ListeningSnapshot {
    plays: Vec<PlayEvent>,
    top_tracks: Vec<TopTrack>,
    features: Vec<AudioFeatures>,
    feature_index: HashMap<String, usize>,
    /// (play index, feature index) pairs of the plays⋈features join
    play_features: Vec<(usize, usize)>,
}

impl ListeningSnapshot {
    pub fn new(plays: Vec<PlayEvent>, top_tracks: Vec<TopTrack>, features: Vec<AudioFeatures>) -> Self {
        let feature_index: HashMap<String, usize> = features
            .iter()
            .enumerate()
            .map(|(idx, f)| (f.track_id.clone(), idx))
            .collect();

        let play_features = plays
            .iter()
            .enumerate()
            .filter_map(|(play_idx, play)| {
                let id = play.track_id.as_deref()?;
                feature_index.get(id).map(|&feat_idx| (play_idx, feat_idx))
            })
            .collect();

        Self {
            plays,
            top_tracks,
            features,
            feature_index,
            play_features,
        }
    }

    /// Recent plays, in input order.
    pub fn plays(&self) -> &[PlayEvent] {
        &self.plays
    }

    /// Top tracks, in rank order.
    pub fn top_tracks(&self) -> &[TopTrack] {
        &self.top_tracks
    }

    /// Retained feature vectors (falsy input records already skipped).
    pub fn features(&self) -> &[AudioFeatures] {
        &self.features
    }

    /// Feature vector for a track, if one was supplied.
    #[cfg(test)]
    pub(crate) fn features_for(&self, track_id: &str) -> Option<&AudioFeatures> {
        self.feature_index.get(track_id).map(|&idx| &self.features[idx])
    }

    /// Plays inner-joined with their feature vectors, in play order.
    pub fn plays_with_features(&self) -> impl Iterator<Item = (&PlayEvent, &AudioFeatures)> {
        self.play_features
            .iter()
            .map(|&(play_idx, feat_idx)| (&self.plays[play_idx], &self.features[feat_idx]))
    }

    /// Plays with a valid timestamp, in play order.
    ///
    /// Individually unparseable timestamps are skipped. If timestamps were
    /// supplied and not a single one parses, the whole table is unusable for
    /// temporal metrics and an error is returned instead.
    pub fn timeline(&self) -> Result<Vec<TimedPlay<'_>>, TimestampError> {
        let timed: Vec<TimedPlay<'_>> = self
            .plays
            .iter()
            .filter_map(|play| play.played_at.at().map(|at| TimedPlay { play, at }))
            .collect();

        if timed.is_empty() {
            let mut unparseable = self.plays.iter().filter_map(|p| match &p.played_at {
                PlayTime::Unparseable(raw) => Some(raw),
                _ => None,
            });
            if let Some(first) = unparseable.next() {
                return Err(TimestampError {
                    unparseable: 1 + unparseable.count(),
                    first: first.clone(),
                });
            }
        }

        Ok(timed)
    }
}
