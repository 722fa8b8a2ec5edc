// Chunk: docs/chunks/document_view - Read-only view for renderers

//! Read-only access to a document for rendering and scrolling.
//!
//! A renderer draws each row's bytes and the cursor; a viewport computes
//! scroll offsets from the line count and cursor row. Neither needs to
//! mutate, so they depend on this trait rather than on [`Document`](crate::Document).
//!
//! Borrowed slices must not be held across a mutating call: a merge can
//! release or move the memory they point into. The borrow checker enforces
//! this for in-process callers.

use crate::types::Cursor;

/// Read-only view over an ordered sequence of lines plus a cursor.
pub trait DocumentView {
    /// Returns the number of materialized lines.
    ///
    /// May be 0 for a fresh document, which renders as one empty line.
    fn line_count(&self) -> usize;

    /// Returns the bytes of the given row.
    ///
    /// Returns `None` if the row is out of bounds.
    fn line_bytes(&self, row: usize) -> Option<&[u8]>;

    /// Returns the length of the given row in bytes, or 0 if out of bounds.
    fn line_len(&self, row: usize) -> usize {
        self.line_bytes(row).map_or(0, <[u8]>::len)
    }

    /// Returns the cursor position.
    fn cursor(&self) -> Cursor;
}
