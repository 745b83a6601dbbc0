//! Artists credited together on top tracks.

use crate::model::ListeningSnapshot;

use super::report::Collaboration;
use super::tally::Tally;

/// Most frequent co-credited artist pairs, ties in first-seen order.
///
/// Every unordered pair of credits on a multi-artist track counts once;
/// pairs are name-sorted so direction doesn't matter.
pub fn collaboration_network(snapshot: &ListeningSnapshot, limit: usize) -> Vec<Collaboration> {
    let mut pairs: Tally<(&str, &str)> = Tally::new();

    for track in snapshot.top_tracks() {
        let names: Vec<&str> = track.artists.iter().map(|a| a.name.as_str()).collect();
        for (i, first) in names.iter().enumerate() {
            for second in &names[i + 1..] {
                pairs.add(if first <= second {
                    (*first, *second)
                } else {
                    (*second, *first)
                });
            }
        }
    }

    pairs
        .most_common(limit)
        .into_iter()
        .map(|((a, b), tracks)| Collaboration {
            artists: [a.to_string(), b.to_string()],
            tracks,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{artist, top, with_top_tracks};

    fn collab(a: &str, b: &str, tracks: usize) -> Collaboration {
        Collaboration {
            artists: [a.to_string(), b.to_string()],
            tracks,
        }
    }

    #[test]
    fn test_single_collaboration() {
        let snapshot = with_top_tracks(vec![
            top(vec![artist("A", &["pop"])]),
            top(vec![artist("A", &["pop"]), artist("B", &["rock"])]),
        ]);
        assert_eq!(collaboration_network(&snapshot, 5), vec![collab("A", "B", 1)]);
    }

    #[test]
    fn test_pairs_are_canonical_and_counted() {
        let snapshot = with_top_tracks(vec![
            top(vec![artist("Zedd", &[]), artist("Alessia Cara", &[])]),
            top(vec![artist("Alessia Cara", &[]), artist("Zedd", &[])]),
            top(vec![artist("Daft Punk", &[]), artist("Pharrell", &[]), artist("Nile Rodgers", &[])]),
        ]);
        let network = collaboration_network(&snapshot, 5);

        assert_eq!(
            network,
            vec![
                collab("Alessia Cara", "Zedd", 2),
                collab("Daft Punk", "Pharrell", 1),
                collab("Daft Punk", "Nile Rodgers", 1),
                collab("Nile Rodgers", "Pharrell", 1),
            ]
        );
    }

    #[test]
    fn test_limit_and_solo_tracks() {
        let solo = with_top_tracks(vec![top(vec![artist("Solo", &[])])]);
        assert!(collaboration_network(&solo, 5).is_empty());

        let crowded = with_top_tracks(vec![top(vec![
            artist("A", &[]),
            artist("B", &[]),
            artist("C", &[]),
            artist("D", &[]),
        ])]);
        assert_eq!(collaboration_network(&crowded, 5).len(), 5);
    }
}
