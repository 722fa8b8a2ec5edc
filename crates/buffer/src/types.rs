// Chunk: docs/chunks/line_buffer - Line-array text buffer with cursor editing

/// Cursor position as (row, column), both 0-indexed. The column is a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

/// Which rows a document operation changed.
///
/// Returned by every mutating [`Document`](crate::Document) operation so a
/// renderer can skip rows that are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyLines {
    /// Nothing changed (cursor movement, or an edit that was a no-op).
    None,
    /// Only this row's bytes changed.
    Single(usize),
    /// This row and every row after it may have changed or moved.
    /// Used when lines are split or merged.
    FromLineToEnd(usize),
}

impl DirtyLines {
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the first dirty row, if any.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(row) | DirtyLines::FromLineToEnd(row) => Some(*row),
        }
    }
}

/// Classification of the most recent document operation.
///
/// Vertical navigation compares against this to decide whether to reuse the
/// remembered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Return,
    Tab,
    Home,
    End,
    /// Direct cursor placement (e.g. a mouse click).
    Place,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_orders_by_row_then_col() {
        assert!(Cursor::new(0, 9) < Cursor::new(1, 0));
        assert!(Cursor::new(2, 1) < Cursor::new(2, 3));
        assert_eq!(Cursor::new(1, 1).cmp(&Cursor::new(1, 1)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn cursor_default_is_origin() {
        assert_eq!(Cursor::default(), Cursor::new(0, 0));
    }

    #[test]
    fn dirty_lines_start_line() {
        assert_eq!(DirtyLines::None.start_line(), None);
        assert_eq!(DirtyLines::Single(3).start_line(), Some(3));
        assert_eq!(DirtyLines::FromLineToEnd(7).start_line(), Some(7));
        assert!(DirtyLines::None.is_none());
        assert!(!DirtyLines::Single(0).is_none());
    }
}
