// Chunk: docs/chunks/line_buffer - Line-array text buffer with cursor editing
// Chunk: docs/chunks/plain_text_io - Chunked load and line-feed joined save

//! Document is the main public API for editing operations.
//!
//! It owns an ordered array of [`Line`]s and a single cursor. Within-line
//! edits delegate to the cursor's line; merges and splits move whole lines in
//! and out of the array by index.
//!
//! A fresh document holds no lines at all. The first operation materializes
//! the line under the cursor, so an empty document behaves as one empty line.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use crate::config::BufferConfig;
use crate::error::{abort_on_alloc_failure, FileError};
use crate::line::Line;
use crate::types::{Cursor, DirtyLines, InputKind};
use crate::view::DocumentView;

/// Line slots in the line array's first allocation. Later growth doubles.
pub const DOCUMENT_INIT_CAPACITY: usize = 128;

/// An ordered sequence of lines with a cursor and vertical-navigation memory.
///
/// Invariants, checked in debug builds after every operation:
/// - `cursor.row <= line_count()`; `cursor.row == line_count()` only before
///   the cursor line has been materialized
/// - when the cursor row exists, `cursor.col` is within that line
#[derive(Debug)]
pub struct Document {
    lines: Vec<Line>,
    cursor: Cursor,
    /// Kind of the previous operation, for sticky-column decisions.
    last_input: Option<InputKind>,
    /// Column remembered at the start of a run of vertical moves.
    sticky_column: usize,
    config: BufferConfig,
}

impl Document {
    /// Creates an empty document with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    /// Creates an empty document with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the config fails [`BufferConfig::validate`]. A zero tab stop
    /// or read chunk size has no meaningful behaviour.
    pub fn with_config(config: BufferConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("{err}: {config:?}");
        }
        Self {
            lines: Vec::new(),
            cursor: Cursor::default(),
            last_input: None,
            sticky_column: 0,
            config,
        }
    }

    /// Creates a document by splitting `bytes` on line feeds.
    ///
    /// The cursor starts at the origin.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut splitter = LineSplitter::default();
        splitter.feed(bytes);
        let mut doc = Self::new();
        doc.commit_lines(splitter.finish());
        doc
    }

    // ==================== Accessors ====================

    /// Returns the current cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the number of materialized lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no line has been materialized yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of allocated line slots. Always `>= line_count()`.
    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    /// Returns the line at `row`, if it exists.
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Returns all lines in row order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the kind of the most recent operation, if any.
    pub fn last_input_kind(&self) -> Option<InputKind> {
        self.last_input
    }

    /// Returns the column remembered for vertical navigation.
    pub fn sticky_column(&self) -> usize {
        self.sticky_column
    }

    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Returns the document as it would be saved: lines joined by line feeds,
    /// with no trailing line feed.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.lines.iter().map(Line::len).sum::<usize>()
            + self.lines.len().saturating_sub(1);
        let mut bytes = Vec::with_capacity(total);
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                bytes.push(b'\n');
            }
            bytes.extend_from_slice(line.as_bytes());
        }
        bytes
    }

    // ==================== Validation ====================

    /// Debug assertion: verifies the cursor invariants.
    ///
    /// Compiled out in release builds.
    #[cfg(debug_assertions)]
    fn assert_cursor_consistent(&self) {
        let Cursor { row, col } = self.cursor;
        assert!(
            row <= self.lines.len(),
            "cursor row {} past line count {}",
            row,
            self.lines.len()
        );
        if let Some(line) = self.lines.get(row) {
            assert!(
                col <= line.len(),
                "cursor col {} past end of row {} (len {})",
                col,
                row,
                line.len()
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn assert_cursor_consistent(&self) {}

    // ==================== Line Array ====================

    /// Ensures room for `n` more lines, doubling from [`DOCUMENT_INIT_CAPACITY`].
    fn expand(&mut self, n: usize) {
        let size = self.lines.len();
        let old_capacity = self.lines.capacity();
        let mut new_capacity = old_capacity;

        while new_capacity - size < n {
            new_capacity = if new_capacity == 0 {
                DOCUMENT_INIT_CAPACITY
            } else {
                match new_capacity.checked_mul(2) {
                    Some(c) => c,
                    None => abort_on_alloc_failure("line array", n, "capacity overflow"),
                }
            };
        }

        if new_capacity != old_capacity {
            if let Err(err) = self.lines.try_reserve_exact(new_capacity - size) {
                abort_on_alloc_failure("line array", n, err);
            }
            tracing::trace!(old_capacity, new_capacity, "grew line array");
        }
    }

    /// Inserts `line` at `row`, shifting later lines down by one.
    fn insert_line(&mut self, row: usize, line: Line) {
        self.expand(1);
        self.lines.insert(row, line);
    }

    /// Appends staged lines to the end of the array.
    fn commit_lines(&mut self, mut staged: Vec<Line>) {
        self.expand(staged.len());
        self.lines.append(&mut staged);
    }

    /// Materializes the cursor line if the cursor sits one past the last line.
    fn ensure_cursor_line(&mut self) {
        if self.cursor.row == self.lines.len() {
            let row = self.lines.len();
            self.insert_line(row, Line::new());
        }
    }

    // ==================== Mutations ====================

    /// Inserts `text` before the cursor, advancing the cursor past it.
    ///
    /// The text is inserted verbatim; it should not contain line feeds.
    pub fn insert_text_before_cursor(&mut self, text: &str) -> DirtyLines {
        self.insert_segment_before_cursor(text.as_bytes())
    }

    /// Byte form of [`insert_text_before_cursor`](Self::insert_text_before_cursor).
    pub fn insert_segment_before_cursor(&mut self, text: &[u8]) -> DirtyLines {
        self.insert_bytes(text, InputKind::Text)
    }

    fn insert_bytes(&mut self, text: &[u8], kind: InputKind) -> DirtyLines {
        self.ensure_cursor_line();
        self.last_input = Some(kind);

        let row = self.cursor.row;
        self.lines[row].insert_segment_before_cursor(text, &mut self.cursor.col);

        self.assert_cursor_consistent();
        if text.is_empty() {
            DirtyLines::None
        } else {
            DirtyLines::Single(row)
        }
    }

    /// Deletes backward from the cursor.
    ///
    /// At column 0 of any row but the first, the row is merged onto the end of
    /// the previous row and the cursor lands on the join point. Otherwise the
    /// line's tab-stop-aware backspace applies.
    pub fn backspace(&mut self) -> DirtyLines {
        self.ensure_cursor_line();
        self.last_input = Some(InputKind::Backspace);

        let Cursor { row, col } = self.cursor;
        let dirty = if col == 0 && row > 0 {
            let current = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            let join = prev.len();
            prev.append_line(current);
            self.cursor = Cursor::new(row - 1, join);
            DirtyLines::FromLineToEnd(row - 1)
        } else {
            let removed = self.lines[row].backspace(&mut self.cursor.col, self.config.tab_stop);
            if removed == 0 {
                DirtyLines::None
            } else {
                DirtyLines::Single(row)
            }
        };

        self.assert_cursor_consistent();
        dirty
    }

    /// Deletes forward from the cursor.
    ///
    /// At the end of any row but the last, the next row is merged onto this
    /// one. The cursor never moves.
    pub fn delete(&mut self) -> DirtyLines {
        self.ensure_cursor_line();
        self.last_input = Some(InputKind::Delete);

        let Cursor { row, col } = self.cursor;
        let dirty = if col == self.lines[row].len() && row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].append_line(next);
            DirtyLines::FromLineToEnd(row)
        } else if self.lines[row].delete(col) {
            DirtyLines::Single(row)
        } else {
            DirtyLines::None
        };

        self.assert_cursor_consistent();
        dirty
    }

    /// Splits the current line at the cursor.
    ///
    /// The new line is prefixed with the current line's indentation (measured
    /// up to the cursor, tabs counting a full tab stop) as spaces, followed by
    /// the bytes that were after the cursor. The cursor moves to the new line,
    /// just past the indentation.
    pub fn return_(&mut self) -> DirtyLines {
        self.ensure_cursor_line();
        self.last_input = Some(InputKind::Return);

        let Cursor { row, col } = self.cursor;
        let current = &mut self.lines[row];
        let indentation = current.leading_indentation(col, self.config.tab_stop);
        let carried = current.split_off(col);

        let mut new_line = Line::new();
        new_line.expand(indentation + carried.len());
        new_line.append_text_segment(&vec![b' '; indentation]);
        new_line.append_text_segment(&carried);

        self.insert_line(row + 1, new_line);
        self.cursor = Cursor::new(row + 1, indentation);

        self.assert_cursor_consistent();
        DirtyLines::FromLineToEnd(row)
    }

    /// Inserts spaces up to the next tab stop.
    ///
    /// Inserts a full tab stop of spaces when the cursor is already aligned.
    pub fn tab(&mut self) -> DirtyLines {
        self.ensure_cursor_line();
        let tab_stop = self.config.tab_stop;
        let spaces = tab_stop - self.cursor.col % tab_stop;
        self.insert_bytes(&vec![b' '; spaces], InputKind::Tab)
    }

    // ==================== Cursor Movement ====================

    /// Moves the cursor left one byte, wrapping to the end of the previous line.
    pub fn left_arrow(&mut self) {
        self.ensure_cursor_line();
        self.last_input = Some(InputKind::Left);

        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.lines[self.cursor.row].len();
        }

        self.assert_cursor_consistent();
    }

    /// Moves the cursor right one byte, wrapping to the start of the next line.
    pub fn right_arrow(&mut self) {
        self.ensure_cursor_line();
        self.last_input = Some(InputKind::Right);

        if self.cursor.col < self.lines[self.cursor.row].len() {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.lines.len() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }

        self.assert_cursor_consistent();
    }

    /// Moves the cursor up one line, keeping the column of the first move in a
    /// run of up-moves. On the first line, moves to column 0.
    pub fn up_arrow(&mut self) {
        self.ensure_cursor_line();
        self.capture_sticky_column(InputKind::Up);

        if self.cursor.row == 0 {
            self.cursor.col = 0;
        } else {
            self.cursor.row -= 1;
            self.cursor.col = self.sticky_column.min(self.lines[self.cursor.row].len());
        }

        self.last_input = Some(InputKind::Up);
        self.assert_cursor_consistent();
    }

    /// Moves the cursor down one line, keeping the column of the first move in
    /// a run of down-moves. On the last line, moves to the end of the line.
    pub fn down_arrow(&mut self) {
        self.ensure_cursor_line();
        self.capture_sticky_column(InputKind::Down);

        let last_row = self.lines.len() - 1;
        if self.cursor.row == last_row {
            self.cursor.col = self.lines[last_row].len();
        } else {
            self.cursor.row += 1;
            self.cursor.col = self.sticky_column.min(self.lines[self.cursor.row].len());
        }

        self.last_input = Some(InputKind::Down);
        self.assert_cursor_consistent();
    }

    /// Remembers the current column unless this move continues a run of
    /// `kind` moves.
    fn capture_sticky_column(&mut self, kind: InputKind) {
        if self.last_input != Some(kind) {
            self.sticky_column = self.cursor.col;
        }
    }

    /// Moves the cursor to column 0 of the current line.
    pub fn move_to_line_start(&mut self) {
        self.ensure_cursor_line();
        self.last_input = Some(InputKind::Home);
        self.cursor.col = 0;
    }

    /// Moves the cursor to the end of the current line.
    pub fn move_to_line_end(&mut self) {
        self.ensure_cursor_line();
        self.last_input = Some(InputKind::End);
        self.cursor.col = self.lines[self.cursor.row].len();
    }

    /// Places the cursor at an arbitrary position, clamped to valid bounds.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.last_input = Some(InputKind::Place);
        self.cursor = match self.lines.len() {
            0 => Cursor::default(),
            count => {
                let row = row.min(count - 1);
                Cursor::new(row, col.min(self.lines[row].len()))
            }
        };
        self.assert_cursor_consistent();
    }

    // ==================== File I/O ====================

    /// Loads lines from `reader`, splitting on line feeds.
    ///
    /// Reads in chunks of `config.read_chunk_size` bytes. `n` line feeds yield
    /// `n + 1` lines; empty input yields no lines. On a read error the
    /// document is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the document already has lines.
    pub fn load_from_reader<R: Read>(&mut self, mut reader: R) -> io::Result<()> {
        assert!(
            self.lines.is_empty(),
            "load requires an empty document, found {} lines",
            self.lines.len()
        );

        let mut splitter = LineSplitter::default();
        let mut chunk = vec![0u8; self.config.read_chunk_size];
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            splitter.feed(&chunk[..n]);
        }

        self.commit_lines(splitter.finish());
        self.assert_cursor_consistent();
        Ok(())
    }

    /// Loads the file at `path` into this empty document.
    ///
    /// The file is split on every line feed, so `n` line feeds yield `n + 1`
    /// lines and an empty file yields no lines. A file saved by
    /// [`save_to_file`](Self::save_to_file) therefore reloads line for line,
    /// including a trailing empty line. If the file cannot be opened or read,
    /// the document is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the document already has lines.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        assert!(
            self.lines.is_empty(),
            "load requires an empty document, found {} lines",
            self.lines.len()
        );

        let file = File::open(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "failed to open file for load");
            FileError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        self.load_from_reader(file).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "failed to read file");
            FileError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        tracing::debug!(path = %path.display(), lines = self.lines.len(), "loaded document");
        Ok(())
    }

    /// Writes every line verbatim, separated by line feeds, with no trailing
    /// line feed.
    pub fn save_to_writer<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()
    }

    /// Saves the document to `path`, creating or truncating the file.
    ///
    /// A write failure may leave the file truncated; it is not rolled back.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "failed to open file for save");
            FileError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        self.save_to_writer(BufWriter::new(file)).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "failed to write file");
            FileError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;

        tracing::debug!(path = %path.display(), lines = self.lines.len(), "saved document");
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentView for Document {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_bytes(&self, row: usize) -> Option<&[u8]> {
        self.lines.get(row).map(Line::as_bytes)
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }
}

/// Accumulates lines from a byte stream delivered in arbitrary chunks.
///
/// A segment cut off by a chunk boundary is carried into the next chunk.
#[derive(Debug, Default)]
struct LineSplitter {
    staged: Vec<Line>,
    current: Line,
    seen_bytes: bool,
}

impl LineSplitter {
    fn feed(&mut self, chunk: &[u8]) {
        if chunk.is_empty() {
            return;
        }
        self.seen_bytes = true;

        let mut segments = chunk.split(|&b| b == b'\n');
        if let Some(first) = segments.next() {
            self.current.append_text_segment(first);
        }
        // Every further segment was preceded by a line feed.
        for segment in segments {
            self.staged.push(std::mem::take(&mut self.current));
            self.current.append_text_segment(segment);
        }
    }

    fn finish(mut self) -> Vec<Line> {
        if self.seen_bytes {
            self.staged.push(self.current);
        }
        self.staged
    }
}
