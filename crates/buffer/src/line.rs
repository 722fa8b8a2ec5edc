// Chunk: docs/chunks/line_buffer - Line-array text buffer with cursor editing

//! A single line of text stored as an owned, growable byte sequence.
//!
//! Columns are byte offsets. The caller owns the cursor column and passes it
//! by reference; insert and backspace update it in place, delete leaves it
//! where it is.

use crate::error::abort_on_alloc_failure;

/// Capacity of a line's first allocation. Later growth doubles.
pub const LINE_INIT_CAPACITY: usize = 1024;

/// One row of text.
///
/// The bytes are opaque: no encoding is assumed and no terminator is stored.
/// Capacity is managed explicitly with a doubling policy so a line that is
/// typed into one byte at a time reallocates O(log n) times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    chars: Vec<u8>,
}

impl Line {
    /// Creates an empty line with no allocation.
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Creates a line holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut line = Self::new();
        line.append_text_segment(bytes);
        line
    }

    // ==================== Accessors ====================

    /// Returns the line's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Returns the number of logically valid bytes.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the number of allocated bytes. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.chars.capacity()
    }

    /// Returns true if every byte before `col` is a space.
    ///
    /// An empty prefix (`col == 0`) counts as leading whitespace.
    pub fn is_leading_whitespace(&self, col: usize) -> bool {
        self.chars[..col].iter().all(|&b| b == b' ')
    }

    /// Measures the indentation at the start of the line, up to `limit` bytes.
    ///
    /// A space counts one column and a tab counts `tab_stop` columns. The scan
    /// stops at the first byte that is neither.
    pub fn leading_indentation(&self, limit: usize, tab_stop: usize) -> usize {
        let mut indentation = 0;
        for &b in self.chars.iter().take(limit) {
            match b {
                b' ' => indentation += 1,
                b'\t' => indentation += tab_stop,
                _ => break,
            }
        }
        indentation
    }

    // ==================== Growth ====================

    /// Ensures at least `n` bytes of free space.
    ///
    /// Capacity starts at [`LINE_INIT_CAPACITY`] and doubles until the free
    /// space suffices. Allocation failure aborts the process.
    pub fn expand(&mut self, n: usize) {
        let size = self.chars.len();
        let old_capacity = self.chars.capacity();
        let mut new_capacity = old_capacity;

        while new_capacity - size < n {
            new_capacity = if new_capacity == 0 {
                LINE_INIT_CAPACITY
            } else {
                match new_capacity.checked_mul(2) {
                    Some(c) => c,
                    None => abort_on_alloc_failure("line", n, "capacity overflow"),
                }
            };
        }

        if new_capacity != old_capacity {
            if let Err(err) = self.chars.try_reserve_exact(new_capacity - size) {
                abort_on_alloc_failure("line", n, err);
            }
            tracing::trace!(old_capacity, new_capacity, "grew line");
        }
    }

    // ==================== Mutations ====================

    /// Inserts `text` before `col` and advances `col` past it.
    pub fn insert_segment_before_cursor(&mut self, text: &[u8], col: &mut usize) {
        debug_assert!(
            *col <= self.len(),
            "insert column {} past end of line of size {}",
            *col,
            self.len()
        );
        if text.is_empty() {
            return;
        }
        self.expand(text.len());
        self.chars.splice(*col..*col, text.iter().copied());
        *col += text.len();
    }

    /// String form of [`insert_segment_before_cursor`](Self::insert_segment_before_cursor).
    pub fn insert_text_before_cursor(&mut self, text: &str, col: &mut usize) {
        self.insert_segment_before_cursor(text.as_bytes(), col);
    }

    /// Deletes backward from `col`, returning the number of bytes removed.
    ///
    /// When only spaces precede the cursor, the deletion collapses to the
    /// previous tab stop (a full `tab_stop` when already aligned). Otherwise
    /// exactly one byte is removed. No-op at column 0.
    pub fn backspace(&mut self, col: &mut usize, tab_stop: usize) -> usize {
        debug_assert!(
            *col <= self.len(),
            "backspace column {} past end of line of size {}",
            *col,
            self.len()
        );
        debug_assert!(tab_stop > 0, "tab stop must be positive");
        if *col == 0 {
            return 0;
        }

        let removed = if self.is_leading_whitespace(*col) {
            match *col % tab_stop {
                0 => tab_stop,
                rem => rem,
            }
        } else {
            1
        };

        self.chars.drain(*col - removed..*col);
        *col -= removed;
        removed
    }

    /// Deletes the byte at `col`. Returns false (and does nothing) at or past
    /// the end of the line.
    pub fn delete(&mut self, col: usize) -> bool {
        if col >= self.len() {
            return false;
        }
        self.chars.remove(col);
        true
    }

    /// Appends `text` to the end of the line.
    pub fn append_text_segment(&mut self, text: &[u8]) {
        let mut end = self.len();
        self.insert_segment_before_cursor(text, &mut end);
    }

    pub fn append_text(&mut self, text: &str) {
        self.append_text_segment(text.as_bytes());
    }

    /// Moves every byte of `other` onto the end of this line.
    ///
    /// `other`'s buffer is released when it goes out of scope here.
    pub fn append_line(&mut self, other: Line) {
        self.append_text_segment(&other.chars);
    }

    /// Splits the line at `col`, keeping `[0, col)` and returning `[col, len)`.
    pub fn split_off(&mut self, col: usize) -> Vec<u8> {
        debug_assert!(
            col <= self.len(),
            "split column {} past end of line of size {}",
            col,
            self.len()
        );
        self.chars.split_off(col)
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
