//! Metric calculators and the report they produce.
//!
//! # Architecture
//!
//! Each calculator reads the immutable [`ListeningSnapshot`] and returns one
//! report group. Calculators never see each other's output, with one
//! exception: diversity is derived from the ranked top artists.
//!
//! - `audio` - feature statistics
//! - `artists` - artist/genre ranking and diversity
//! - `temporal` - hour/weekday buckets, energy by hour, velocity
//! - `mood` - mood classification and time-of-day split
//! - `collaboration` - co-credited artist pairs
//! - `evolution` - dominant genre per week
//! - `loyalty` - artist loyalty and track repetition
//!
//! # Failure isolation
//!
//! Timestamp-dependent calculators return `Result<_, MetricError>`. An error
//! resets only that group to its default and is logged; every other group
//! is still computed.

pub mod artists;
pub mod audio;
pub mod collaboration;
pub mod evolution;
pub mod loyalty;
pub mod mood;
pub mod report;
pub mod tally;
pub mod temporal;

pub use report::Report;

use crate::config::AnalysisSettings;
use crate::model::{ListeningSnapshot, TimestampError};

/// Why a metric group could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    #[error(transparent)]
    Timestamps(#[from] TimestampError),
}

/// Compute the full report for a snapshot.
pub fn analyze(snapshot: &ListeningSnapshot, settings: &AnalysisSettings) -> Report {
    let ranking = artists::rank_artists(snapshot, settings);
    let diversity_score = artists::diversity_score(&ranking.artists);

    let report = Report {
        audio_stats: audio::audio_stats(snapshot),
        top_artists: ranking.artists,
        top_genres: ranking.genres,
        temporal_patterns: or_default("temporal_patterns", temporal::temporal_patterns(snapshot)),
        mood_distribution: mood::mood_distribution(snapshot, &settings.mood),
        diversity_score,
        total_tracks_analyzed: snapshot.features().len(),
        collaboration_network: collaboration::collaboration_network(
            snapshot,
            settings.top_collaborations,
        ),
        listening_velocity: or_default("listening_velocity", temporal::listening_velocity(snapshot)),
        genre_evolution: or_default(
            "genre_evolution",
            evolution::genre_evolution(snapshot, settings.genre_weeks),
        ),
        artist_loyalty: loyalty::artist_loyalty(snapshot),
        track_repetition: loyalty::track_repetition(snapshot),
        time_distribution: or_default("time_distribution", mood::time_distribution(snapshot)),
    };

    tracing::debug!(
        plays = snapshot.plays().len(),
        top_tracks = snapshot.top_tracks().len(),
        features = report.total_tracks_analyzed,
        "Analysis complete"
    );
    report
}

/// Unwrap a group result, falling back to the group's default on error.
fn or_default<T: Default>(group: &'static str, result: Result<T, MetricError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(group, "Metric group skipped: {}", e);
        T::default()
    })
}

/// `count / total`, or 0 when `total` is 0.
pub(crate) fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Fraction as whole percent, fractional part dropped.
pub(crate) fn truncated_percent(fraction: f64) -> u32 {
    // `as` saturates: negatives clamp to 0
    (fraction * 100.0) as u32
}

/// Fraction as whole percent, rounded to nearest with ties to even.
pub(crate) fn rounded_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round_ties_even() as u32
}
