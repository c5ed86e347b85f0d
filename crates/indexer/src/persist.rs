use crate::error::{IndexerError, Result};
use crate::word_map::WordMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure modes when opening a persisted index.
///
/// `Missing` and `Malformed` are the recoverable pair: callers regenerate
/// the index from the corpus. `Io` covers everything else and must be
/// propagated, never answered with a silent rebuild.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Index file not found: {0}")]
    Missing(PathBuf),

    #[error("Index file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Index read error: {0}")]
    Io(io::Error),
}

/// Write `map` to `path` atomically: serialize into a sibling `.tmp` file,
/// then rename it over the target. A concurrent reader sees either the old
/// index or the new one, never a partial write.
pub fn save(map: &WordMap, path: &Path) -> Result<()> {
    let persist_err = |source: io::Error| IndexerError::Persist {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(persist_err)?;
    }

    let bytes = serde_json::to_vec_pretty(map)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).map_err(persist_err)?;
    fs::rename(&tmp, path).map_err(persist_err)?;

    log::info!("Wrote {} buckets to {}", map.len(), path.display());
    Ok(())
}

/// Read a persisted index back into memory. Bucket arrays deserialize into
/// sets, so duplicate entries collapse on load.
pub fn load(path: &Path) -> std::result::Result<WordMap, LoadError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::Missing(path.to_path_buf()))
        }
        Err(e) => return Err(LoadError::Io(e)),
    };
    Ok(serde_json::from_slice(&bytes)?)
}
