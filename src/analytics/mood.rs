//! Mood profile of feature vectors and time-of-day split of plays.
//!
//! # Mood flags
//!
//! Each feature vector gets a [`MoodFlags`] set. Categories are independent:
//! a track can be energetic, happy and danceable at once, or none of them.
//! - `ENERGETIC` - energy above threshold
//! - `CALM` - energy below threshold
//! - `HAPPY` - valence above threshold
//! - `SAD` - valence below threshold
//! - `DANCEABLE` - danceability above threshold

use bitflags::bitflags;

use crate::config::MoodThresholds;
use crate::model::{AudioFeatures, ListeningSnapshot};

use super::MetricError;
use super::report::{MoodDistribution, TimeDistribution};
use super::{share, truncated_percent};

bitflags! {
    /// Mood categories a track falls into.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MoodFlags: u8 {
        const ENERGETIC = 1 << 0;
        const CALM = 1 << 1;
        const HAPPY = 1 << 2;
        const SAD = 1 << 3;
        const DANCEABLE = 1 << 4;
    }
}

/// Classify one feature vector. Bounds are strict.
pub fn classify(features: &AudioFeatures, thresholds: &MoodThresholds) -> MoodFlags {
    let mut flags = MoodFlags::empty();
    flags.set(MoodFlags::ENERGETIC, features.energy > thresholds.energetic_above);
    flags.set(MoodFlags::CALM, features.energy < thresholds.calm_below);
    flags.set(MoodFlags::HAPPY, features.valence > thresholds.happy_above);
    flags.set(MoodFlags::SAD, features.valence < thresholds.sad_below);
    flags.set(MoodFlags::DANCEABLE, features.danceability > thresholds.danceable_above);
    flags
}

/// Share of feature vectors in each mood, truncated to whole percent.
pub fn mood_distribution(snapshot: &ListeningSnapshot, thresholds: &MoodThresholds) -> MoodDistribution {
    let features = snapshot.features();
    let total = features.len();
    if total == 0 {
        return MoodDistribution::default();
    }

    let moods: Vec<MoodFlags> = features.iter().map(|f| classify(f, thresholds)).collect();
    let percent_of = |flag: MoodFlags| {
        let count = moods.iter().filter(|m| m.contains(flag)).count();
        truncated_percent(share(count, total))
    };

    MoodDistribution {
        energetic: percent_of(MoodFlags::ENERGETIC),
        calm: percent_of(MoodFlags::CALM),
        happy: percent_of(MoodFlags::HAPPY),
        sad: percent_of(MoodFlags::SAD),
        danceable: percent_of(MoodFlags::DANCEABLE),
    }
}

/// Part of the day an hour belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    /// [6, 12)
    Morning,
    /// [12, 17)
    Afternoon,
    /// [17, 22)
    Evening,
    /// [22, 24) and [0, 6)
    Night,
}

impl DayPart {
    pub fn of_hour(hour: usize) -> Self {
        match hour {
            6..=11 => DayPart::Morning,
            12..=16 => DayPart::Afternoon,
            17..=21 => DayPart::Evening,
            _ => DayPart::Night,
        }
    }
}

/// Share of timed plays in each part of the day, truncated to whole percent.
pub fn time_distribution(snapshot: &ListeningSnapshot) -> Result<TimeDistribution, MetricError> {
    let timeline = snapshot.timeline()?;
    let total = timeline.len();
    if total == 0 {
        return Ok(TimeDistribution::default());
    }

    let mut counts = [0usize; 4];
    for timed in &timeline {
        let slot = match DayPart::of_hour(timed.hour()) {
            DayPart::Morning => 0,
            DayPart::Afternoon => 1,
            DayPart::Evening => 2,
            DayPart::Night => 3,
        };
        counts[slot] += 1;
    }

    Ok(TimeDistribution {
        morning: truncated_percent(share(counts[0], total)),
        afternoon: truncated_percent(share(counts[1], total)),
        evening: truncated_percent(share(counts[2], total)),
        night: truncated_percent(share(counts[3], total)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlayTime;
    use crate::test_utils::{features, play, play_at, with_features, with_plays};

    #[test]
    fn test_classify_is_non_exclusive() {
        let thresholds = MoodThresholds::default();
        let party = classify(&features("a", 0.9, 0.8, 0.75), &thresholds);
        assert_eq!(
            party,
            MoodFlags::ENERGETIC | MoodFlags::HAPPY | MoodFlags::DANCEABLE
        );

        // exactly on a threshold is neither side
        let middling = classify(&features("b", 0.6, 0.4, 0.7), &thresholds);
        assert!(middling.is_empty());

        let gloomy = classify(&features("c", 0.1, 0.2, 0.0), &thresholds);
        assert_eq!(gloomy, MoodFlags::CALM | MoodFlags::SAD);
    }

    #[test]
    fn test_mood_distribution_truncates() {
        let snapshot = with_features(vec![
            features("a", 0.9, 0.5, 0.8),
            features("b", 0.2, 0.5, 0.1),
            features("c", 0.5, 0.9, 0.1),
        ]);
        let moods = mood_distribution(&snapshot, &MoodThresholds::default());

        assert_eq!(moods.energetic, 33);
        assert_eq!(moods.calm, 33);
        assert_eq!(moods.happy, 33);
        assert_eq!(moods.sad, 0);
        assert_eq!(moods.danceable, 33);
    }

    #[test]
    fn test_mood_distribution_empty() {
        let moods = mood_distribution(&ListeningSnapshot::default(), &MoodThresholds::default());
        assert_eq!(moods, MoodDistribution::default());
    }

    #[test]
    fn test_day_part_boundaries() {
        assert_eq!(DayPart::of_hour(5), DayPart::Night);
        assert_eq!(DayPart::of_hour(6), DayPart::Morning);
        assert_eq!(DayPart::of_hour(12), DayPart::Afternoon);
        assert_eq!(DayPart::of_hour(17), DayPart::Evening);
        assert_eq!(DayPart::of_hour(22), DayPart::Night);
        assert_eq!(DayPart::of_hour(0), DayPart::Night);
    }

    #[test]
    fn test_time_distribution() {
        let snapshot = with_plays(vec![
            play_at("a", "2024-03-04T07:00:00Z"),
            play_at("b", "2024-03-04T13:00:00Z"),
            play_at("c", "2024-03-04T23:00:00Z"),
            play("untimed", "U"),
        ]);
        let dist = time_distribution(&snapshot).unwrap();

        assert_eq!(dist.morning, 33);
        assert_eq!(dist.afternoon, 33);
        assert_eq!(dist.evening, 0);
        assert_eq!(dist.night, 33);
    }

    #[test]
    fn test_time_distribution_fails_on_unusable_table() {
        let mut bad = play("a", "A");
        bad.played_at = PlayTime::Unparseable("tomorrow".into());
        assert!(time_distribution(&with_plays(vec![bad])).is_err());
    }
}
