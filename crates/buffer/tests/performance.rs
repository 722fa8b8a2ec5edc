// Chunk: docs/chunks/line_buffer - Line-array text buffer with cursor editing

//! Performance sanity checks for the document.
//!
//! These tests verify that basic operations complete within reasonable time bounds.
//! They are not formal benchmarks but guard against obvious performance regressions
//! such as growth that is not amortized.

use plain_edit_buffer::{Document, DocumentView};
use std::time::{Duration, Instant};

#[test]
fn insert_100k_bytes_under_500ms() {
    let mut doc = Document::new();
    let start = Instant::now();

    for _ in 0..100_000 {
        doc.insert_text_before_cursor("x");
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_millis(500),
        "Inserting 100K bytes took {:?}, expected < 500ms",
        elapsed
    );

    assert_eq!(doc.line_len(0), 100_000);
    assert_eq!(doc.line_count(), 1);
}

#[test]
fn insert_100k_bytes_with_returns_under_1s() {
    let mut doc = Document::new();
    let start = Instant::now();

    for i in 0..100_000 {
        if i % 80 == 79 {
            doc.return_();
        } else {
            doc.insert_text_before_cursor("x");
        }
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_millis(1000),
        "Inserting 100K bytes with returns took {:?}, expected < 1s",
        elapsed
    );

    assert_eq!(doc.line_count(), 1251);
}

#[test]
fn vertical_navigation_across_many_lines() {
    let content: String = (0..10_000)
        .map(|i| format!("Line number {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let mut doc = Document::from_bytes(content.as_bytes());
    let start = Instant::now();

    for _ in 0..10 {
        for _ in 0..doc.line_count() {
            doc.down_arrow();
        }
        for _ in 0..doc.line_count() {
            doc.up_arrow();
        }
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_millis(200),
        "Navigating 10K lines 10 times took {:?}, expected < 200ms",
        elapsed
    );
    assert_eq!(doc.cursor().row, 0);
}

#[test]
fn backspace_all_bytes_performance() {
    let mut doc = Document::new();
    for _ in 0..10_000 {
        doc.insert_text_before_cursor("x");
    }

    let start = Instant::now();
    while doc.line_len(0) > 0 {
        doc.backspace();
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_millis(200),
        "Deleting 10K bytes took {:?}, expected < 200ms",
        elapsed
    );
}

#[test]
fn mixed_operations_performance() {
    let mut doc = Document::new();
    let start = Instant::now();

    // Type, correct a typo, indent, split
    for iteration in 0..1000 {
        doc.insert_text_before_cursor(&format!("Line {}: ", iteration));
        doc.insert_text_before_cursor("x");
        doc.backspace();
        doc.tab();
        doc.insert_text_before_cursor("some content here");
        doc.return_();
        doc.move_to_line_start();
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_millis(500),
        "Mixed operations took {:?}, expected < 500ms",
        elapsed
    );

    assert_eq!(doc.line_count(), 1001);
}
