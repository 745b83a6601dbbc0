//! Frequency counter with first-seen tie-breaking.
//!
//! Rankings in the report must be deterministic: when two keys have the same
//! count, the one that was seen first ranks higher.

use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered counter.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` highest counts, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.counts.clone();
        // sort_by is stable, so equal counts keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// The highest count, earliest key on ties.
    pub fn top(&self) -> Option<(&K, usize)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&K, usize)>, (key, count)| match best {
                Some((_, best_count)) if best_count >= *count => best,
                _ => Some((key, *count)),
            })
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
