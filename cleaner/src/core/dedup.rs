//! First-seen-wins deduplication of raw records

use std::collections::HashMap;
use std::hash::Hash;

use shared::RawCompanyRecord;

use super::normalizer::NameNormalizer;

/// Insertion-ordered map that keeps the first value inserted for a key
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<V>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Insert unless the key is already present; returns whether it was inserted
    pub fn insert_first(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(value);
        true
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values in first-insertion order
    pub fn into_values(self) -> Vec<V> {
        self.entries
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse records whose names normalize to the same key.
///
/// Records with a blank name are dropped. The first record seen for a key
/// is kept whole; later duplicates contribute nothing.
pub fn dedupe_records(records: Vec<RawCompanyRecord>, normalizer: &NameNormalizer) -> Vec<RawCompanyRecord> {
    let mut unique = OrderedMap::new();

    for record in records {
        let name = record.name.trim();
        if name.is_empty() {
            continue;
        }
        let key = normalizer.normalize(name);
        unique.insert_first(key, record);
    }

    unique.into_values()
}
