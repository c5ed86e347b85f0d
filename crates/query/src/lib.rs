//! # Bee Query
//!
//! Point lookups over the Spelling Bee index: validate seven puzzle letters,
//! canonicalize them to an index key, and list the bucket's words that
//! contain the center letter. Loading falls back to a full rebuild when the
//! persisted index is missing or corrupt.

mod engine;
mod error;

pub use engine::{canonical_key, QueryEngine};
pub use error::{QueryError, Result};
