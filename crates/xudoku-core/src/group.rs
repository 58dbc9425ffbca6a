//! Constraint groups: rows, columns, boxes, and diagonals.

use std::iter::FusedIterator;

use derive_more::Display;

use crate::{Geometry, Position};

/// One constraint group: an ordered collection of `size` cells that must
/// collectively hold every value exactly once.
///
/// A `Group` is just a name; [`positions`](Self::positions) resolves it to
/// cell coordinates for a concrete [`Geometry`]. The elimination and
/// verification logic in the solver crate is written once against groups
/// rather than against array axes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// A row, identified by its 0-based index.
    #[display("row {index}")]
    Row {
        /// Row index.
        index: u8,
    },
    /// A column, identified by its 0-based index.
    #[display("column {index}")]
    Column {
        /// Column index.
        index: u8,
    },
    /// An N×N box, counted left to right, top to bottom.
    #[display("box {index}")]
    Box {
        /// Box index.
        index: u8,
    },
    /// The top-left-to-bottom-right diagonal (Sudoku-X only).
    #[display("main diagonal")]
    MainDiagonal,
    /// The bottom-left-to-top-right diagonal (Sudoku-X only).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Group {
    /// The position of the `i`-th cell of this group on the given board.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below the board size.
    #[must_use]
    pub fn position_at(self, geometry: Geometry, i: u8) -> Position {
        let size = geometry.size();
        assert!(i < size);
        match self {
            Self::Row { index } => Position::new(index, i),
            Self::Column { index } => Position::new(i, index),
            Self::Box { index } => {
                let origin = geometry.box_origin(index);
                let box_size = geometry.box_size();
                Position::new(origin.row() + i / box_size, origin.col() + i % box_size)
            }
            Self::MainDiagonal => Position::new(i, i),
            Self::AntiDiagonal => Position::new(size - 1 - i, i),
        }
    }

    /// Iterates over the `size` member cells of this group.
    #[must_use]
    pub fn positions(self, geometry: Geometry) -> Positions {
        Positions {
            group: self,
            geometry,
            next: 0,
        }
    }

    /// Returns `true` if `pos` is a member of this group.
    #[must_use]
    pub fn contains(self, geometry: Geometry, pos: Position) -> bool {
        match self {
            Self::Row { index } => pos.row() == index,
            Self::Column { index } => pos.col() == index,
            Self::Box { index } => geometry.box_index_of(pos) == index,
            Self::MainDiagonal => geometry.on_main_diagonal(pos),
            Self::AntiDiagonal => geometry.on_anti_diagonal(pos),
        }
    }
}

/// Iterator over the member cells of a [`Group`].
#[derive(Debug, Clone)]
pub struct Positions {
    group: Group,
    geometry: Geometry,
    next: u8,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.geometry.size() {
            return None;
        }
        let pos = self.group.position_at(self.geometry, self.next);
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.geometry.size() - self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}
impl FusedIterator for Positions {}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic9() -> Geometry {
        Geometry::classic(3).unwrap()
    }

    #[test]
    fn test_row_and_column_positions() {
        let geometry = classic9();
        let row: Vec<_> = Group::Row { index: 2 }.positions(geometry).collect();
        assert_eq!(row.len(), 9);
        assert_eq!(row[0], Position::new(2, 0));
        assert_eq!(row[8], Position::new(2, 8));

        let col: Vec<_> = Group::Column { index: 5 }.positions(geometry).collect();
        assert_eq!(col[0], Position::new(0, 5));
        assert_eq!(col[8], Position::new(8, 5));
    }

    #[test]
    fn test_box_positions() {
        let geometry = classic9();
        let cells: Vec<_> = Group::Box { index: 4 }.positions(geometry).collect();
        assert_eq!(cells[0], Position::new(3, 3));
        assert_eq!(cells[2], Position::new(3, 5));
        assert_eq!(cells[3], Position::new(4, 3));
        assert_eq!(cells[8], Position::new(5, 5));
    }

    #[test]
    fn test_diagonal_positions() {
        let geometry = Geometry::diagonal(3).unwrap();
        let main: Vec<_> = Group::MainDiagonal.positions(geometry).collect();
        assert_eq!(main[0], Position::new(0, 0));
        assert_eq!(main[8], Position::new(8, 8));

        let anti: Vec<_> = Group::AntiDiagonal.positions(geometry).collect();
        assert_eq!(anti[0], Position::new(8, 0));
        assert_eq!(anti[8], Position::new(0, 8));
    }

    #[test]
    fn test_contains_matches_positions() {
        let geometry = Geometry::diagonal(3).unwrap();
        for group in geometry.all_groups() {
            for pos in geometry.positions() {
                let member = group.positions(geometry).any(|p| p == pos);
                assert_eq!(group.contains(geometry, pos), member, "{group} at {pos}");
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Group::Row { index: 0 }.to_string(), "row 0");
        assert_eq!(Group::Box { index: 7 }.to_string(), "box 7");
        assert_eq!(Group::AntiDiagonal.to_string(), "anti-diagonal");
    }
}
