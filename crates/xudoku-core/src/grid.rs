//! The candidate grid and its preset mask.

use crate::{CandidateSet, Geometry, Position};

/// An N²×N² board of candidate sets.
///
/// All mutation is a monotonic shrink: no method ever re-introduces a
/// candidate that has been removed. Speculative search branches take an
/// independent deep copy via [`Clone`] before mutating.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Geometry, Grid, Position};
///
/// let geometry = Geometry::classic(3)?;
/// let mut grid = Grid::new(geometry);
/// assert_eq!(grid.cell(Position::new(0, 0)).len(), 9);
///
/// grid.assign(Position::new(0, 0), 5);
/// assert_eq!(grid.value(Position::new(0, 0)), Some(5));
/// # Ok::<(), xudoku_core::GeometryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    geometry: Geometry,
    cells: Vec<CandidateSet>,
}

impl Grid {
    /// Creates a grid with every cell unconstrained (full candidate set).
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: vec![CandidateSet::full(geometry.size()); geometry.cell_count()],
        }
    }

    /// The board geometry.
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn index(&self, pos: Position) -> usize {
        usize::from(pos.row()) * usize::from(self.geometry.size()) + usize::from(pos.col())
    }

    /// The candidate set of one cell.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CandidateSet {
        self.cells[self.index(pos)]
    }

    /// The solved value of a cell, or `None` if it is undetermined or
    /// contradictory.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<u8> {
        self.cell(pos).sole_value()
    }

    /// Removes one candidate from a cell. Returns `true` if the cell
    /// changed.
    pub fn remove_candidate(&mut self, pos: Position, value: u8) -> bool {
        let index = self.index(pos);
        let before = self.cells[index];
        self.cells[index].remove(value);
        self.cells[index] != before
    }

    /// Removes every candidate in `values` from a cell. Returns `true` if
    /// the cell changed.
    pub fn remove_candidates(&mut self, pos: Position, values: CandidateSet) -> bool {
        let index = self.index(pos);
        let before = self.cells[index];
        let after = before.difference(values);
        self.cells[index] = after;
        after != before
    }

    /// Narrows a cell to a single forced value.
    ///
    /// If the value was already eliminated from the cell, the cell becomes
    /// empty (a contradiction) rather than regaining the value; removals are
    /// never undone. Returns `true` if the cell changed.
    pub fn narrow_to(&mut self, pos: Position, value: u8) -> bool {
        let index = self.index(pos);
        let before = self.cells[index];
        let after = if before.contains(value) {
            CandidateSet::solved(value)
        } else {
            CandidateSet::EMPTY
        };
        self.cells[index] = after;
        after != before
    }

    /// Forces a cell to `value` when creating a search branch.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `value` is not currently a candidate of the
    /// cell; branches may only pick from the remaining candidates.
    pub fn assign(&mut self, pos: Position, value: u8) {
        debug_assert!(self.cell(pos).contains(value), "assigning eliminated value");
        let index = self.index(pos);
        self.cells[index] = CandidateSet::solved(value);
    }

    /// Iterates over every cell position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.geometry.positions()
    }

    /// Number of cells resolved to a single value.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_solved()).count()
    }

    /// Returns `true` if every cell is resolved to a single value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_solved())
    }

    /// The first cell with no remaining candidate, if any.
    #[must_use]
    pub fn first_empty_cell(&self) -> Option<Position> {
        self.positions().find(|&pos| self.cell(pos).is_empty())
    }

    /// Returns `true` if some cell has no remaining candidate.
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }
}

/// The fixed givens of a puzzle, derived once from its initial grid.
///
/// Records, for every cell, whether it started as a single preset value.
/// Used only by the verifier to check that no preset was overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presets {
    geometry: Geometry,
    values: Vec<Option<u8>>,
}

impl Presets {
    /// Captures the single-valued cells of `grid`.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            geometry: grid.geometry(),
            values: grid
                .positions()
                .map(|pos| grid.cell(pos).sole_value())
                .collect(),
        }
    }

    /// The board geometry the presets were captured from.
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The preset value of a cell, if it had one.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<u8> {
        let index =
            usize::from(pos.row()) * usize::from(self.geometry.size()) + usize::from(pos.col());
        self.values[index]
    }

    /// Iterates over all `(position, value)` presets.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u8)> {
        self.geometry
            .positions()
            .zip(self.values.iter().copied())
            .filter_map(|(pos, value)| value.map(|v| (pos, v)))
    }
}
