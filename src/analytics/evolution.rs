//! Dominant genre per ISO week of recent listening.

use std::collections::BTreeMap;

use crate::model::ListeningSnapshot;

use super::MetricError;
use super::report::WeeklyGenre;
use super::tally::Tally;

/// Top genre of each of the last `weeks` ISO weeks present, oldest first.
///
/// Weeks are ordered chronologically by (ISO year, week), not by the bare
/// week number, so a span crossing New Year lists week 52 before week 1.
/// Only the week number is reported.
///
/// Genre tags come from every credited artist on each timed play. Weeks
/// without any genre tag are skipped rather than zero-filled.
pub fn genre_evolution(snapshot: &ListeningSnapshot, weeks: usize) -> Result<Vec<WeeklyGenre>, MetricError> {
    let timeline = snapshot.timeline()?;

    // (ISO year, week) keeps weeks ordered across a year boundary
    let mut by_week: BTreeMap<(i32, u32), Tally<&str>> = BTreeMap::new();
    for timed in &timeline {
        for genre in timed.play.artists.iter().flat_map(|a| a.genres.iter()) {
            by_week.entry(timed.iso_week()).or_default().add(genre);
        }
    }

    let skip = by_week.len().saturating_sub(weeks);
    Ok(by_week
        .iter()
        .skip(skip)
        .filter_map(|(&(_, week), tally)| {
            tally.top().map(|(genre, count)| WeeklyGenre {
                week,
                genre: genre.to_string(),
                count,
            })
        })
        .collect())
}
