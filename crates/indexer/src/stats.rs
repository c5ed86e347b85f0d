use serde::{Deserialize, Serialize};

/// Statistics about one index build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildStats {
    /// Candidate words considered
    pub candidates: usize,

    /// Candidates whose own letters form a pangram key
    pub seed_words: usize,

    /// Buckets in the finished map
    pub buckets: usize,

    /// Word entries across all buckets
    pub entries: usize,

    /// Worker threads used for the subset pass
    pub workers: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }
}
