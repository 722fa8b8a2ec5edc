// Chunk: docs/chunks/plain_text_io - Chunked load and line-feed joined save

//! Integration tests for loading and saving documents on disk.

use std::fs;

use plain_edit_buffer::{BufferConfig, Cursor, Document, DocumentView, FileError};
use tempfile::TempDir;

fn lines(doc: &Document) -> Vec<Vec<u8>> {
    (0..doc.line_count())
        .map(|row| doc.line_bytes(row).unwrap().to_vec())
        .collect()
}

fn load(path: &std::path::Path) -> Document {
    let mut doc = Document::new();
    doc.load_from_file(path).unwrap();
    doc
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round_trip.txt");

    let mut doc = Document::new();
    doc.insert_text_before_cursor("fn main() {");
    doc.return_();
    doc.tab();
    doc.insert_text_before_cursor("println!(\"hi\");");
    doc.return_();
    doc.backspace();
    doc.insert_text_before_cursor("}");
    doc.return_();
    doc.save_to_file(&path).unwrap();

    let reloaded = load(&path);
    assert_eq!(lines(&reloaded), lines(&doc));
    assert_eq!(reloaded.cursor(), Cursor::new(0, 0));
}

#[test]
fn test_round_trip_preserves_opaque_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.txt");

    let mut doc = Document::new();
    doc.insert_segment_before_cursor(&[0xff, 0xfe, b'\t', b'\r', 0x00]);
    doc.return_();
    doc.insert_segment_before_cursor("caf\u{e9}".as_bytes());
    doc.save_to_file(&path).unwrap();

    assert_eq!(
        fs::read(&path).unwrap(),
        b"\xff\xfe\t\r\x00\ncaf\xc3\xa9".to_vec()
    );
    assert_eq!(lines(&load(&path)), lines(&doc));
}

#[test]
fn test_save_writes_no_trailing_line_feed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    let doc = Document::from_bytes(b"one\ntwo");
    doc.save_to_file(&path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"one\ntwo");
}

#[test]
fn test_save_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "a much longer previous content\n\n\n").unwrap();

    Document::from_bytes(b"short").save_to_file(&path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"short");
}

#[test]
fn test_load_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let mut doc = load(&path);
    assert_eq!(doc.line_count(), 0);

    // Still behaves as one empty line
    doc.insert_text_before_cursor("x");
    assert_eq!(lines(&doc), vec![b"x".to_vec()]);
}

#[test]
fn test_load_without_trailing_line_feed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.txt");
    fs::write(&path, "alpha\nbeta").unwrap();

    assert_eq!(lines(&load(&path)), vec![b"alpha".to_vec(), b"beta".to_vec()]);
}

#[test]
fn test_load_only_line_feeds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feeds.txt");
    fs::write(&path, "\n\n").unwrap();

    let doc = load(&path);
    assert_eq!(doc.line_count(), 3);
    assert!(lines(&doc).iter().all(Vec::is_empty));
}

#[test]
fn test_load_is_independent_of_chunk_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chunks.txt");
    let content: String = (0..200)
        .map(|i| "x".repeat(i % 13))
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(&path, &content).unwrap();

    let expected = lines(&load(&path));
    assert_eq!(expected.len(), 200);

    for chunk_size in [1, 2, 3, 7, 13, 14, 64, 1 << 16] {
        let mut doc = Document::with_config(BufferConfig {
            read_chunk_size: chunk_size,
            ..BufferConfig::default()
        });
        doc.load_from_file(&path).unwrap();
        assert_eq!(lines(&doc), expected, "chunk size {chunk_size}");
    }
}

#[test]
fn test_line_feed_exactly_on_chunk_boundary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("boundary.txt");
    // Line feed is the 4th byte: the last byte of the first 4-byte chunk.
    fs::write(&path, "abc\ndefg\nh").unwrap();

    let mut doc = Document::with_config(BufferConfig {
        read_chunk_size: 4,
        ..BufferConfig::default()
    });
    doc.load_from_file(&path).unwrap();
    assert_eq!(
        lines(&doc),
        vec![b"abc".to_vec(), b"defg".to_vec(), b"h".to_vec()]
    );
}

#[test]
fn test_load_missing_file_reports_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.txt");

    let mut doc = Document::new();
    let err = doc.load_from_file(&path).unwrap_err();
    assert!(matches!(err, FileError::Open { .. }), "{err:?}");
    assert_eq!(err.path(), path.as_path());
    assert_eq!(doc.line_count(), 0);

    // The caller may carry on with an empty buffer
    doc.insert_text_before_cursor("new file");
    assert_eq!(doc.line_count(), 1);
}

#[test]
fn test_save_into_missing_directory_reports_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("out.txt");

    let err = Document::from_bytes(b"data").save_to_file(&path).unwrap_err();
    assert!(matches!(err, FileError::Open { .. }), "{err:?}");
}

#[test]
fn test_load_directory_reports_error() {
    let dir = TempDir::new().unwrap();

    let mut doc = Document::new();
    let err = doc.load_from_file(dir.path()).unwrap_err();
    // Opening a directory succeeds on some platforms and fails on read.
    assert!(
        matches!(err, FileError::Open { .. } | FileError::Read { .. }),
        "{err:?}"
    );
    assert_eq!(doc.line_count(), 0);
}
