//! When listening happens: hour/weekday buckets, energy by hour, velocity.
//!
//! Only plays with a valid timestamp take part. Hours, weekdays and dates
//! are read in the offset each timestamp was recorded with.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{Feature, ListeningSnapshot, TimedPlay};

use super::MetricError;
use super::audio::mean_of;
use super::report::{ListeningVelocity, TemporalPatterns};

/// Hourly and daily play counts, plus mean energy per hour.
pub fn temporal_patterns(snapshot: &ListeningSnapshot) -> Result<TemporalPatterns, MetricError> {
    let timeline = snapshot.timeline()?;

    let mut patterns = TemporalPatterns::default();
    for timed in &timeline {
        patterns.hourly[timed.hour()] += 1;
        patterns.daily[timed.weekday()] += 1;
    }

    // Sparse: only hours with at least one play that has features
    let mut by_hour: BTreeMap<u32, Vec<_>> = BTreeMap::new();
    for (play, features) in snapshot.plays_with_features() {
        if let Some(at) = play.played_at.at() {
            let timed = TimedPlay { play, at };
            by_hour.entry(timed.hour() as u32).or_default().push(features);
        }
    }
    patterns.energy_by_hour = by_hour
        .into_iter()
        .filter_map(|(hour, vectors)| {
            mean_of(Feature::Energy, vectors.into_iter()).map(|mean| (hour, mean))
        })
        .collect();

    Ok(patterns)
}

/// Plays per day, modal hour and weekday, and the longest daily streak.
pub fn listening_velocity(snapshot: &ListeningSnapshot) -> Result<ListeningVelocity, MetricError> {
    let timeline = snapshot.timeline()?;
    let (Some(first), Some(last)) = (
        timeline.iter().map(|t| t.at).min(),
        timeline.iter().map(|t| t.at).max(),
    ) else {
        return Ok(ListeningVelocity::default());
    };

    // Whole days between the extremes, counted inclusively
    let span_days = (last - first).num_days() + 1;
    let tracks_per_day = round_to_tenth(timeline.len() as f64 / span_days.max(1) as f64);

    let mut hourly = [0u32; 24];
    let mut daily = [0u32; 7];
    for timed in &timeline {
        hourly[timed.hour()] += 1;
        daily[timed.weekday()] += 1;
    }

    let dates: Vec<NaiveDate> = timeline.iter().map(TimedPlay::date).collect();

    Ok(ListeningVelocity {
        tracks_per_day,
        most_active_hour: modal_bucket(&hourly),
        most_active_day: modal_bucket(&daily),
        listening_streak: longest_streak(dates),
    })
}

/// Index of the largest bucket; the smallest index wins ties.
fn modal_bucket(buckets: &[u32]) -> u32 {
    let mut best = 0;
    for (idx, &count) in buckets.iter().enumerate() {
        if count > buckets[best] {
            best = idx;
        }
    }
    best as u32
}

/// Longest run of consecutive calendar days. 0 with no dates.
fn longest_streak(mut dates: Vec<NaiveDate>) -> u32 {
    dates.sort_unstable();
    dates.dedup();

    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;
    for date in dates {
        current = match previous {
            Some(prev) if (date - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }
    longest
}

/// One decimal place, rounding the exact binary value with ties to even.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
