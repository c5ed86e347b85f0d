//! # Bee Indexer
//!
//! Builds the Spelling Bee word index: a mapping from seven-distinct-letter
//! keys to every dictionary word playable under them.
//!
//! ## Pipeline
//!
//! ```text
//! Word list
//!     │
//!     ├──> Candidate filter (lowercase, len >= 4, no possessives)
//!     │      └─> Deduplicated candidates
//!     │
//!     ├──> Key seeding (words with exactly 7 distinct letters)
//!     │      └─> One bucket per pangram key
//!     │
//!     └──> Subset assignment (parallel over candidate chunks)
//!            └─> Complete WordMap, persisted as JSON
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use bee_indexer::IndexBuilder;
//! use std::path::Path;
//!
//! fn main() -> Result<(), bee_indexer::IndexerError> {
//!     let (map, stats) = IndexBuilder::new()
//!         .build_from_corpus(Path::new("/usr/share/dict/american-english"))?;
//!     bee_indexer::save(&map, Path::new("spelling-bee-map.json"))?;
//!
//!     println!("{} buckets, {} entries", stats.buckets, stats.entries);
//!     Ok(())
//! }
//! ```

mod builder;
mod corpus;
mod error;
mod letters;
mod persist;
mod stats;
mod word_map;

pub use builder::IndexBuilder;
pub use corpus::{is_candidate, read_candidates, MIN_WORD_LEN};
pub use error::{IndexerError, Result};
pub use letters::{LetterSet, PANGRAM_LEN};
pub use persist::{load, save, LoadError};
pub use stats::BuildStats;
pub use word_map::WordMap;
