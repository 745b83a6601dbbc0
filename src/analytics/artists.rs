//! Artist and genre frequency over top tracks, and listening diversity.
//!
//! Every credit on a top track counts once for its artist, and each genre
//! tag on that credit counts once for the genre.
//!
//! # Diversity
//!
//! Diversity is the complement of the Herfindahl concentration index over
//! the ranked top artists: with shares `s_i = count_i / total`,
//! `H = Σ s_i²` and `diversity = round((1 - H) × 100)`. One artist with
//! every play gives `H = 1` and a score of 0.

use crate::config::AnalysisSettings;
use crate::model::ListeningSnapshot;

use super::report::NameCount;
use super::rounded_percent;
use super::tally::Tally;

/// Ranked artists and genres from the top-track list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistRanking {
    pub artists: Vec<NameCount>,
    pub genres: Vec<NameCount>,
}

/// Rank artists and genres by credit count, ties in first-seen order.
pub fn rank_artists(snapshot: &ListeningSnapshot, settings: &AnalysisSettings) -> ArtistRanking {
    let mut artists: Tally<&str> = Tally::new();
    let mut genres: Tally<&str> = Tally::new();

    for credit in snapshot.top_tracks().iter().flat_map(|t| t.artists.iter()) {
        artists.add(&credit.name);
        for genre in &credit.genres {
            genres.add(genre);
        }
    }

    ArtistRanking {
        artists: to_name_counts(artists.most_common(settings.top_artists)),
        genres: to_name_counts(genres.most_common(settings.top_genres)),
    }
}

fn to_name_counts(ranked: Vec<(&str, usize)>) -> Vec<NameCount> {
    ranked
        .into_iter()
        .map(|(name, count)| NameCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Diversity score (0-100) from ranked artist counts. 0 with no artists.
pub fn diversity_score(top_artists: &[NameCount]) -> u32 {
    let total: usize = top_artists.iter().map(|a| a.count).sum();
    if total == 0 {
        return 0;
    }

    let herfindahl: f64 = top_artists
        .iter()
        .map(|a| {
            let share = a.count as f64 / total as f64;
            share * share
        })
        .sum();

    rounded_percent(1.0 - herfindahl)
}
