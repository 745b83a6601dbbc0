//! Descriptive statistics over audio-feature vectors.

use crate::model::{AudioFeatures, Feature, ListeningSnapshot};

use super::report::{AudioStats, FeatureSummary};

/// Summaries for every summarized feature, or an empty map with no vectors.
pub fn audio_stats(snapshot: &ListeningSnapshot) -> AudioStats {
    let features = snapshot.features();
    if features.is_empty() {
        return AudioStats::default();
    }

    let summaries = Feature::SUMMARIZED
        .iter()
        .filter_map(|&feature| {
            let values: Vec<f64> = features.iter().map(|f| feature.of(f)).collect();
            summarize(&values).map(|summary| (feature, summary))
        })
        .collect();

    AudioStats::new(summaries)
}

/// Mean, median, sample std, min and max. `None` for an empty slice.
pub fn summarize(values: &[f64]) -> Option<FeatureSummary> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    // Unbiased (n - 1) estimator; undefined for a single sample
    let std = (values.len() > 1).then(|| {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    });

    Some(FeatureSummary {
        mean,
        median,
        std,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

/// Mean of one feature across vectors. `None` for an empty slice.
pub fn mean_of<'a>(feature: Feature, vectors: impl IntoIterator<Item = &'a AudioFeatures>) -> Option<f64> {
    let (sum, count) = vectors
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), f| (sum + feature.of(f), count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{features, with_features};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_features_gives_empty_stats() {
        let stats = audio_stats(&ListeningSnapshot::default());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_summary_values() {
        let s = summarize(&[0.2, 0.8, 0.5, 0.9]).unwrap();
        assert!(approx(s.mean, 0.6));
        assert!(approx(s.median, 0.65));
        assert!(approx(s.min, 0.2));
        assert!(approx(s.max, 0.9));
        // sample variance: (0.16 + 0.04 + 0.01 + 0.09) / 3 = 0.1
        assert!(approx(s.std.unwrap(), 0.1f64.sqrt()));
    }

    #[test]
    fn test_single_sample_has_undefined_std() {
        let s = summarize(&[0.7]).unwrap();
        assert_eq!(s.std, None);
        assert_eq!(s.median, 0.7);
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_audio_stats_covers_five_features() {
        let snapshot = with_features(vec![
            features("a", 0.9, 0.1, 0.5),
            features("b", 0.3, 0.7, 0.5),
        ]);
        let stats = audio_stats(&snapshot);

        for feature in Feature::SUMMARIZED {
            assert!(stats.get(feature).is_some(), "missing {}", feature.as_str());
        }
        assert!(approx(stats.get(Feature::Energy).unwrap().mean, 0.6));
        assert_eq!(stats.get(Feature::Tempo).unwrap().std, Some(0.0));
    }

    #[test]
    fn test_mean_of() {
        let vectors = [features("a", 0.2, 0.0, 0.0), features("b", 0.6, 0.0, 0.0)];
        assert!(approx(mean_of(Feature::Energy, &vectors).unwrap(), 0.4));
        assert_eq!(mean_of(Feature::Energy, std::iter::empty()), None);
    }
}
