//! Board dimensions and constraint variants.

use crate::{CandidateSet, Group, Position};

/// The constraint family a board is solved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Rows, columns, and boxes must each hold every value once.
    #[default]
    Classic,
    /// Classic constraints plus both full-length diagonals ("Sudoku-X").
    Diagonal,
}

/// Error building a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeometryError {
    /// The box size is outside the supported range.
    #[display("box size {box_size} is outside {min}..={max}", min = Geometry::MIN_BOX_SIZE, max = Geometry::MAX_BOX_SIZE)]
    BoxSizeOutOfRange {
        /// The rejected box size.
        box_size: u8,
    },
}

/// Dimensions and variant of an N²×N² board.
///
/// The board edge is `box_size²` cells long, so a classic 9×9 puzzle has
/// `box_size == 3`. The size is carried here as explicit configuration and
/// threaded through grid and group construction; nothing in this workspace
/// hardcodes 9.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Geometry, Variant};
///
/// let geometry = Geometry::new(3, Variant::Classic)?;
/// assert_eq!(geometry.size(), 9);
/// assert_eq!(geometry.cell_count(), 81);
/// # Ok::<(), xudoku_core::GeometryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    box_size: u8,
    variant: Variant,
}

impl Geometry {
    /// Smallest supported box size (a 4×4 board).
    pub const MIN_BOX_SIZE: u8 = 2;
    /// Largest supported box size (a 64×64 board, the candidate-mask limit).
    pub const MAX_BOX_SIZE: u8 = 8;

    /// Creates a geometry with the given box size and variant.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::BoxSizeOutOfRange`] if `box_size` is not in
    /// `MIN_BOX_SIZE..=MAX_BOX_SIZE`.
    pub fn new(box_size: u8, variant: Variant) -> Result<Self, GeometryError> {
        if !(Self::MIN_BOX_SIZE..=Self::MAX_BOX_SIZE).contains(&box_size) {
            return Err(GeometryError::BoxSizeOutOfRange { box_size });
        }
        debug_assert!(u32::from(box_size) * u32::from(box_size) <= u32::from(CandidateSet::MAX_SIZE));
        Ok(Self { box_size, variant })
    }

    /// Creates a classic geometry (rows, columns, boxes).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::BoxSizeOutOfRange`] for an unsupported size.
    pub fn classic(box_size: u8) -> Result<Self, GeometryError> {
        Self::new(box_size, Variant::Classic)
    }

    /// Creates a diagonal ("Sudoku-X") geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::BoxSizeOutOfRange`] for an unsupported size.
    pub fn diagonal(box_size: u8) -> Result<Self, GeometryError> {
        Self::new(box_size, Variant::Diagonal)
    }

    /// Edge length of a box.
    #[must_use]
    pub const fn box_size(self) -> u8 {
        self.box_size
    }

    /// The constraint variant.
    #[must_use]
    pub const fn variant(self) -> Variant {
        self.variant
    }

    /// Edge length of the board (`box_size²`), which is also the number of
    /// values.
    #[must_use]
    pub const fn size(self) -> u8 {
        self.box_size * self.box_size
    }

    /// Total number of cells (`size²`).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        let size = self.size() as usize;
        size * size
    }

    /// Index of the box containing `pos`, counted left to right, top to
    /// bottom.
    #[must_use]
    pub fn box_index_of(self, pos: Position) -> u8 {
        (pos.row() / self.box_size) * self.box_size + pos.col() / self.box_size
    }

    /// Top-left cell of the box with the given index.
    #[must_use]
    pub fn box_origin(self, box_index: u8) -> Position {
        Position::new(
            (box_index / self.box_size) * self.box_size,
            (box_index % self.box_size) * self.box_size,
        )
    }

    /// Returns `true` if `pos` lies on the top-left-to-bottom-right diagonal.
    #[must_use]
    pub fn on_main_diagonal(self, pos: Position) -> bool {
        pos.row() == pos.col()
    }

    /// Returns `true` if `pos` lies on the bottom-left-to-top-right diagonal.
    #[must_use]
    pub fn on_anti_diagonal(self, pos: Position) -> bool {
        pos.row() + pos.col() == self.size() - 1
    }

    /// Iterates over every cell in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Every group of the board: rows, columns, boxes, and (for the
    /// [`Diagonal`](Variant::Diagonal) variant) both diagonals.
    #[must_use]
    pub fn all_groups(self) -> Vec<Group> {
        let size = self.size();
        let mut groups = Vec::with_capacity(usize::from(size) * 3 + 2);
        groups.extend((0..size).map(|index| Group::Row { index }));
        groups.extend((0..size).map(|index| Group::Column { index }));
        groups.extend((0..size).map(|index| Group::Box { index }));
        if self.variant == Variant::Diagonal {
            groups.push(Group::MainDiagonal);
            groups.push(Group::AntiDiagonal);
        }
        groups
    }

    /// The groups constraining `pos`: its row, column, and box, plus any
    /// diagonal it lies on in the [`Diagonal`](Variant::Diagonal) variant.
    ///
    /// Corner cells of a diagonal board belong to both diagonals.
    #[must_use]
    pub fn peer_groups_of(self, pos: Position) -> Vec<Group> {
        let mut groups = vec![
            Group::Row { index: pos.row() },
            Group::Column { index: pos.col() },
            Group::Box {
                index: self.box_index_of(pos),
            },
        ];
        if self.variant == Variant::Diagonal {
            if self.on_main_diagonal(pos) {
                groups.push(Group::MainDiagonal);
            }
            if self.on_anti_diagonal(pos) {
                groups.push(Group::AntiDiagonal);
            }
        }
        groups
    }
}
