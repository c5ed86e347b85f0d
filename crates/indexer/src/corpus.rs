use crate::error::{IndexerError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Minimum length of a playable word.
pub const MIN_WORD_LEN: usize = 4;

/// True for tokens that may enter the index: long enough, not a possessive
/// form, lowercase ASCII throughout.
///
/// Possessives are a literal `'s` suffix check; legitimate words ending that
/// way are dropped with them.
pub fn is_candidate(token: &str) -> bool {
    if token.chars().count() < MIN_WORD_LEN {
        return false;
    }
    if token.ends_with("'s") {
        return false;
    }
    token.bytes().all(|b| b.is_ascii_lowercase())
}

/// Read a whitespace-delimited word list, keeping the deduplicated set of
/// candidate words. A missing or unreadable corpus aborts the build.
pub fn read_candidates(path: &Path) -> Result<BTreeSet<String>> {
    let text = fs::read_to_string(path).map_err(|source| IndexerError::Corpus {
        path: path.to_path_buf(),
        source,
    })?;

    let candidates: BTreeSet<String> = text
        .split_whitespace()
        .filter(|token| is_candidate(token))
        .map(str::to_owned)
        .collect();

    log::info!(
        "Kept {} candidate words from {}",
        candidates.len(),
        path.display()
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_lowercase_words() {
        assert!(is_candidate("hail"));
        assert!(is_candidate("alright"));
    }

    #[test]
    fn rejects_short_tokens() {
        assert!(!is_candidate("cab"));
        assert!(!is_candidate(""));
    }

    #[test]
    fn rejects_possessives() {
        assert!(!is_candidate("cook's"));
        // Long enough and lowercase-initial, still excluded by the suffix rule.
        assert!(!is_candidate("menswear's"));
    }

    #[test]
    fn rejects_uppercase_and_non_ascii() {
        assert!(!is_candidate("Aaron"));
        assert!(!is_candidate("naïve"));
        assert!(!is_candidate("o'clock"));
    }

    #[test]
    fn reader_dedups_and_filters() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("words");
        fs::write(&path, "hail hail Aaron cab cook's alright\nalright\n").expect("write corpus");

        let candidates = read_candidates(&path).expect("read corpus");
        let expected: BTreeSet<String> =
            ["hail", "alright"].iter().map(|w| w.to_string()).collect();
        assert_eq!(candidates, expected);
    }

    #[test]
    fn missing_corpus_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_candidates(&dir.path().join("absent")).expect_err("must fail");
        assert!(matches!(err, IndexerError::Corpus { .. }));
    }
}
