use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Index from pangram key to the set of words playable under it.
///
/// Keys are canonical strings of exactly seven distinct letters. Buckets are
/// sets, so repeated insertion of the same word is harmless. Ordered
/// containers on both levels keep the serialized form identical across
/// builds, whatever the worker count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordMap {
    buckets: BTreeMap<String, BTreeSet<String>>,
}

impl WordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total word entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    /// Add `word` to the bucket for `key`, creating the bucket if needed.
    pub fn insert(&mut self, key: &str, word: &str) {
        self.buckets
            .entry(key.to_owned())
            .or_default()
            .insert(word.to_owned());
    }

    /// The bucket for `key`, if any key matches exactly.
    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.buckets.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.buckets.iter()
    }
}
