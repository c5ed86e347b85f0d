use bee_indexer::IndexBuilder;
use std::fs;
use tempfile::TempDir;

fn build_corpus(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("words");
    fs::write(&path, text).expect("write corpus");
    path
}

#[test]
fn corpus_without_pangram_words_yields_an_empty_map() {
    let dir = TempDir::new().expect("tempdir");
    // "cabbage" has only 5 distinct letters; the rest are too short to be
    // candidates at all. No key ever reaches 7 letters.
    let path = build_corpus(&dir, "cabbage\nbag\ncab\ngab\n");

    let (map, stats) = IndexBuilder::with_workers(2)
        .build_from_corpus(&path)
        .expect("build");

    assert!(map.is_empty());
    assert_eq!(stats.candidates, 1);
    assert_eq!(stats.seed_words, 0);
}

#[test]
fn non_candidates_never_reach_the_index() {
    let dir = TempDir::new().expect("tempdir");
    let path = build_corpus(&dir, "alright hail Hailing cook's ha\n");

    let (map, stats) = IndexBuilder::with_workers(2)
        .build_from_corpus(&path)
        .expect("build");

    assert_eq!(stats.candidates, 2);
    let bucket = map.get("aghilrt").expect("bucket");
    assert!(bucket.contains("alright"));
    assert!(bucket.contains("hail"));
    assert_eq!(bucket.len(), 2);
}

#[test]
fn missing_corpus_aborts_the_build() {
    let dir = TempDir::new().expect("tempdir");
    let err = IndexBuilder::new()
        .build_from_corpus(&dir.path().join("no-such-file"))
        .expect_err("must fail");
    assert!(err.to_string().contains("Corpus read error"));
}
