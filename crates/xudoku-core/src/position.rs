//! Cell coordinates.

use derive_more::Display;

/// A cell coordinate on the board, 0-indexed, row-major.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index (0-based).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-based).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Position::new(0, 8) < Position::new(1, 0));
    }
}
