//! Independent verification of a finished grid.

use xudoku_core::{Grid, Group, Position, Presets};

/// A single rule violation found in a grid.
///
/// Verification reports every violation it finds rather than stopping at
/// the first, so a caller can show the full damage of a bad board at once.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Violation {
    /// A cell is still blank or holds more than one candidate.
    #[display("cell {pos} is not resolved to a single value")]
    Unresolved {
        /// The offending cell.
        pos: Position,
    },
    /// A group holds a value zero times or more than once.
    #[display("{group} holds value {value} {count} times")]
    GroupConflict {
        /// The offending group.
        group: Group,
        /// The value with the wrong multiplicity.
        value: u8,
        /// How many cells of the group hold the value.
        count: u8,
    },
    /// A cell given in the puzzle no longer holds its given value.
    #[display("preset {value} at {pos} was overwritten")]
    PresetOverwritten {
        /// The offending cell.
        pos: Position,
        /// The value the puzzle gave for it.
        value: u8,
    },
}

/// Checks a grid against the rules of its own geometry and against the
/// puzzle's given cells, from scratch.
///
/// The check trusts nothing the solver did: every cell must be resolved,
/// every group (rows, columns, boxes, and on a diagonal-variant board the
/// two main diagonals) must hold each value exactly once, and every preset
/// must survive unchanged. All violations are collected; an empty result
/// means the grid is a valid solution of the puzzle.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Variant, Presets, codec};
/// use xudoku_solver::verify;
///
/// let grid = codec::parse(
///     "534678912672195348198342567859761423426853791\
///      713924856961537284287419635345286179",
///     Variant::Classic,
/// )?;
/// let presets = Presets::from_grid(&grid);
/// assert!(verify(&presets, &grid).is_empty());
/// # Ok::<(), xudoku_core::ParseError>(())
/// ```
#[must_use]
pub fn verify(presets: &Presets, grid: &Grid) -> Vec<Violation> {
    let geometry = grid.geometry();
    let mut violations = Vec::new();

    for pos in grid.positions() {
        if grid.value(pos).is_none() {
            violations.push(Violation::Unresolved { pos });
        }
    }

    for group in geometry.all_groups() {
        for value in 1..=geometry.size() {
            let count = group
                .positions(geometry)
                .filter(|&pos| grid.value(pos) == Some(value))
                .count();
            if count != 1 {
                #[expect(clippy::cast_possible_truncation)]
                let count = count as u8;
                violations.push(Violation::GroupConflict {
                    group,
                    value,
                    count,
                });
            }
        }
    }

    for (pos, value) in presets.iter() {
        if grid.value(pos) != Some(value) {
            violations.push(Violation::PresetOverwritten { pos, value });
        }
    }

    violations
}
