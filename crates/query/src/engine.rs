use crate::error::{QueryError, Result};
use bee_indexer::{IndexBuilder, LoadError, WordMap, PANGRAM_LEN};
use std::path::Path;

/// Validate puzzle letters and produce the canonical index key: lowercase,
/// sorted, deduplicated, exactly seven distinct letters.
pub fn canonical_key(letters: &str) -> Result<String> {
    if let Some(bad) = letters.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(QueryError::InvalidInput(format!(
            "letters must be alphabetic, found {bad:?}"
        )));
    }

    let mut distinct: Vec<char> = letters.chars().map(|c| c.to_ascii_lowercase()).collect();
    distinct.sort_unstable();
    distinct.dedup();

    if distinct.len() != PANGRAM_LEN {
        return Err(QueryError::InvalidInput(format!(
            "expected exactly {PANGRAM_LEN} distinct letters, got {}",
            distinct.len()
        )));
    }
    Ok(distinct.into_iter().collect())
}

/// Answers Spelling Bee lookups from a word map held in memory.
///
/// The engine owns its map explicitly: construct it with [`QueryEngine::new`]
/// from a map in hand, or [`QueryEngine::load_or_rebuild`] to read the
/// persisted index, regenerating it from the corpus when the file is missing
/// or corrupt.
#[derive(Debug)]
pub struct QueryEngine {
    map: WordMap,
}

impl QueryEngine {
    pub fn new(map: WordMap) -> Self {
        Self { map }
    }

    pub fn word_map(&self) -> &WordMap {
        &self.map
    }

    /// Load the persisted index at `index`, falling back to a full rebuild
    /// from `corpus` when the file is missing or malformed. Any other I/O
    /// failure propagates; a rebuild must not mask it.
    pub fn load_or_rebuild(index: &Path, corpus: &Path, workers: Option<usize>) -> Result<Self> {
        match bee_indexer::load(index) {
            Ok(map) => {
                log::debug!("Loaded {} buckets from {}", map.len(), index.display());
                Ok(Self::new(map))
            }
            Err(err @ (LoadError::Missing(_) | LoadError::Malformed(_))) => {
                log::warn!("{err}; rebuilding index");
                Self::rebuild(index, corpus, workers)
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Rebuild the index from `corpus` unconditionally and persist it at
    /// `index` before answering from the fresh map.
    pub fn rebuild(index: &Path, corpus: &Path, workers: Option<usize>) -> Result<Self> {
        let builder = match workers {
            Some(n) => IndexBuilder::with_workers(n),
            None => IndexBuilder::new(),
        };
        let (map, _stats) = builder.build_from_corpus(corpus)?;
        bee_indexer::save(&map, index)?;
        Ok(Self::new(map))
    }

    /// Every word playable with `letters` that contains `center`, sorted
    /// lexicographically. A well-formed key with no bucket yields an empty
    /// list, not an error.
    pub fn query(&self, letters: &str, center: char) -> Result<Vec<String>> {
        let key = canonical_key(letters)?;
        let center = center.to_ascii_lowercase();

        let words = match self.map.get(&key) {
            Some(bucket) => bucket
                .iter()
                .filter(|word| word.contains(center))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        Ok(words)
    }
}
