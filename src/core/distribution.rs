use crate::core::scoring::percentage;
use crate::models::DistributionEntry;

/// Frequency of a categorical field over a window of records
///
/// Only observed keys are present. Entries are ordered by descending count,
/// ties keeping the order in which keys were first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<K> {
    entries: Vec<(K, usize)>,
    total: usize,
}

impl<K: Copy + PartialEq> Distribution<K> {
    /// Count for a key, `None` if it never occurred
    pub fn get(&self, key: K) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, count)| *count)
    }

    /// `(key, count)` pairs in display order
    pub fn entries(&self) -> &[(K, usize)] {
        &self.entries
    }

    /// Number of records the distribution was computed over
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with their share of the window as a rounded percentage
    pub fn to_entries(&self) -> Vec<DistributionEntry<K>> {
        self.entries
            .iter()
            .map(|&(key, count)| DistributionEntry {
                key,
                count,
                percentage: percentage(count, self.total),
            })
            .collect()
    }
}

/// Count how many records carry each value of `key_fn`
pub fn distribution<T, K, F>(records: &[T], key_fn: F) -> Distribution<K>
where
    K: Copy + PartialEq,
    F: Fn(&T) -> K,
{
    let mut entries: Vec<(K, usize)> = Vec::new();

    for record in records {
        let key = key_fn(record);
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => entries.push((key, 1)),
        }
    }

    // Stable sort keeps first-seen order among equal counts
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    Distribution {
        entries,
        total: records.len(),
    }
}
