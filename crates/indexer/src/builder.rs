use crate::corpus;
use crate::error::{IndexerError, Result};
use crate::letters::LetterSet;
use crate::stats::BuildStats;
use crate::word_map::WordMap;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::Instant;

/// Builds the word map: seed one bucket per pangram-eligible word, then
/// attach every candidate to every bucket whose key contains its letters.
pub struct IndexBuilder {
    workers: usize,
}

impl IndexBuilder {
    /// Builder with one worker per available processing unit.
    pub fn new() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { workers }
    }

    /// Builder with a fixed worker count (clamped to at least one).
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Read `path` and build the complete map from its candidate words.
    pub fn build_from_corpus(&self, path: &Path) -> Result<(WordMap, BuildStats)> {
        let candidates = corpus::read_candidates(path)?;
        self.build(&candidates)
    }

    /// Build the map from an already-filtered candidate set.
    pub fn build(&self, candidates: &BTreeSet<String>) -> Result<(WordMap, BuildStats)> {
        let start = Instant::now();

        // Letter sets are computed once up front; the subset pass below
        // reads them candidate × bucket times.
        let words: Vec<(&str, LetterSet)> = candidates
            .iter()
            .filter_map(|w| LetterSet::from_word(w).map(|set| (w.as_str(), set)))
            .collect();

        // Seeding pass: one bucket per distinct pangram key.
        let mut map = WordMap::new();
        let mut key_sets: BTreeMap<String, LetterSet> = BTreeMap::new();
        let mut seed_words = 0usize;
        for &(word, set) in &words {
            if set.is_pangram_key() {
                let key = set.canonical();
                map.insert(&key, word);
                key_sets.insert(key, set);
                seed_words += 1;
            }
        }

        // Workers only ever see this frozen key list, never the
        // accumulating map.
        let keys: Vec<(String, LetterSet)> = key_sets.into_iter().collect();

        let partials = self.assign_subsets(&words, &keys)?;

        // Single-threaded merge. Buckets are sets and union is commutative
        // and associative, so the result is identical for any worker count
        // or chunk order. Seed words re-match their own key here; the set
        // absorbs the duplicate.
        for partial in partials {
            for (key_idx, chunk_words) in partial.into_iter().enumerate() {
                let (key, _) = &keys[key_idx];
                for word in chunk_words {
                    map.insert(key, word);
                }
            }
        }

        let stats = BuildStats {
            candidates: words.len(),
            seed_words,
            buckets: map.len(),
            entries: map.entry_count(),
            workers: self.workers,
            time_ms: start.elapsed().as_millis() as u64,
        };
        log::info!(
            "Indexed {} candidates into {} buckets ({} entries) in {}ms",
            stats.candidates,
            stats.buckets,
            stats.entries,
            stats.time_ms
        );

        Ok((map, stats))
    }

    /// Parallel map phase: contiguous candidate chunks of roughly
    /// `ceil(candidates / workers)`, one independent partial result per
    /// chunk, no shared mutable state between workers.
    fn assign_subsets<'a>(
        &self,
        words: &[(&'a str, LetterSet)],
        keys: &[(String, LetterSet)],
    ) -> Result<Vec<Vec<Vec<&'a str>>>> {
        if words.is_empty() || keys.is_empty() {
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| IndexerError::Worker(e.to_string()))?;

        let chunk_len = words.len().div_ceil(self.workers);

        let partials = pool.install(|| {
            words
                .par_chunks(chunk_len)
                .map(|chunk| {
                    let mut partial = vec![Vec::new(); keys.len()];
                    for &(word, set) in chunk {
                        for (key_idx, &(_, key_set)) in keys.iter().enumerate() {
                            if set.is_subset_of(key_set) {
                                partial[key_idx].push(word);
                            }
                        }
                    }
                    partial
                })
                .collect()
        });

        Ok(partials)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn seeds_and_attaches_subset_words() {
        let corpus = candidates(&["alright", "hail", "girl", "world"]);
        let (map, stats) = IndexBuilder::with_workers(2)
            .build(&corpus)
            .expect("build");

        let bucket = map.get("aghilrt").expect("seeded bucket");
        assert!(bucket.contains("alright"));
        assert!(bucket.contains("hail"));
        assert!(bucket.contains("girl"));
        assert!(!bucket.contains("world"));

        assert_eq!(stats.seed_words, 1);
        assert_eq!(stats.buckets, 1);
        assert_eq!(stats.candidates, 4);
    }

    #[test]
    fn words_without_a_superset_key_land_nowhere() {
        let corpus = candidates(&["alright", "hail", "spoon"]);
        let (map, _) = IndexBuilder::new().build(&corpus).expect("build");

        // "spoon" has no 7-distinct-letter superset here; that is valid.
        assert!(map.iter().all(|(_, bucket)| !bucket.contains("spoon")));
    }

    #[test]
    fn empty_candidate_set_builds_an_empty_map() {
        let (map, stats) = IndexBuilder::new()
            .build(&BTreeSet::new())
            .expect("build");
        assert!(map.is_empty());
        assert_eq!(stats.candidates, 0);
        assert_eq!(stats.entries, 0);
    }
}
