// Chunk: docs/chunks/line_buffer - Line-array text buffer with cursor editing
// Chunk: docs/chunks/document_view - Read-only view for renderers

//! plain-edit-buffer: the text buffer behind the plain-edit editor.
//!
//! The buffer is an ordered array of lines, each an owned byte vector, plus a
//! single cursor. There is no rope or gap buffer; edits splice the cursor's
//! line and structural changes insert or remove whole lines by index.
//!
//! # Overview
//!
//! The main type is [`Document`], which provides:
//! - Text insertion, backspace and delete at the cursor
//! - Line splitting with indentation carry-over, and line merging at boundaries
//! - Arrow-key navigation with a sticky column for vertical moves
//! - Tab-stop-aware whitespace: `tab` pads to the next stop, and backspace
//!   through leading spaces collapses to the previous stop
//! - Plain-text load and save
//!
//! # Example
//!
//! ```
//! use plain_edit_buffer::{Cursor, DirtyLines, Document};
//!
//! let mut doc = Document::new();
//! assert_eq!(doc.line_count(), 0);
//!
//! doc.insert_text_before_cursor("abcdef");
//! doc.set_cursor(0, 3);
//!
//! // Split into two lines
//! let dirty = doc.return_();
//! assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
//! assert_eq!(doc.line_count(), 2);
//! assert_eq!(doc.cursor(), Cursor::new(1, 0));
//!
//! // And join them back
//! doc.backspace();
//! assert_eq!(doc.line(0).unwrap().as_bytes(), b"abcdef");
//! assert_eq!(doc.cursor(), Cursor::new(0, 3));
//! ```
//!
//! # Columns
//!
//! Columns are byte offsets. Bytes are never validated or decoded, so a file
//! round-trips through load and save unchanged.
//!
//! # Errors
//!
//! Load and save report [`FileError`]. Running out of memory while growing a
//! line or the line array aborts the process.

pub mod config;
pub mod document;
mod error;
pub mod line;
mod types;
mod view;

pub use config::{BufferConfig, READ_CHUNK_SIZE, TAB_STOP};
pub use document::{Document, DOCUMENT_INIT_CAPACITY};
pub use error::{ConfigError, FileError};
pub use line::{Line, LINE_INIT_CAPACITY};
pub use types::{Cursor, DirtyLines, InputKind};
pub use view::DocumentView;
