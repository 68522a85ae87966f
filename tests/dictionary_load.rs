use angrams::dictionary::{DictionaryError, DictionaryIndex};

#[tokio::test]
async fn loads_a_corpus_file_and_normalizes_entries() {
    let tmpdir = tempfile::tempdir().expect("tempdir");
    let path = tmpdir.path().join("words.json");
    tokio::fs::write(
        &path,
        r#"{"a": ["Art", " artsy "], "R": ["rat"], "e": []}"#,
    )
    .await
    .expect("write corpus");

    let index = DictionaryIndex::load(&path).await.expect("load");
    assert_eq!(index.lookup('a'), &["art".to_string(), "artsy".to_string()]);
    assert_eq!(index.lookup('r'), &["rat".to_string()]);
    assert!(index.lookup('e').is_empty());
    assert_eq!(index.word_count(), 3);
}

#[tokio::test]
async fn missing_corpus_file_is_an_io_error() {
    let tmpdir = tempfile::tempdir().expect("tempdir");
    let missing = tmpdir.path().join("nope.json");
    let err = DictionaryIndex::load(&missing).await.expect_err("must fail");
    assert!(matches!(err, DictionaryError::Io { .. }), "{err}");
}

#[tokio::test]
async fn malformed_corpus_is_rejected() {
    let tmpdir = tempfile::tempdir().expect("tempdir");
    let path = tmpdir.path().join("words.json");
    tokio::fs::write(&path, r#"["not", "a", "map"]"#)
        .await
        .expect("write corpus");

    let err = DictionaryIndex::load(&path).await.expect_err("must fail");
    assert!(matches!(err, DictionaryError::Malformed { .. }), "{err}");
}
