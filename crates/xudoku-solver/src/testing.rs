//! Shared fixtures for solver tests.

use xudoku_core::{Geometry, Grid, Variant, codec};

/// A standard 9×9 puzzle with a unique solution, `0` meaning blank.
pub(crate) const SCENARIO_A: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

/// The unique completion of [`SCENARIO_A`].
pub(crate) const SCENARIO_A_SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

/// A Sudoku-X puzzle; its solution is unique only under diagonal rules.
pub(crate) const DIAGONAL_PUZZLE: &str =
    "24.3..7.5....71.2....54..3.....8.49....19.2.38......7.9..6...5.675.3.1...3....968";

/// The unique Sudoku-X completion of [`DIAGONAL_PUZZLE`].
pub(crate) const DIAGONAL_PUZZLE_SOLUTION: &str =
    "249368715356971824781542639512783496467195283893426571928614357675839142134257968";

pub(crate) fn empty_grid() -> Grid {
    Grid::new(Geometry::classic(3).unwrap())
}

pub(crate) fn diagonal_grid() -> Grid {
    Grid::new(Geometry::diagonal(3).unwrap())
}

pub(crate) fn parse_classic(text: &str) -> Grid {
    codec::parse(text, Variant::Classic).unwrap()
}

pub(crate) fn parse_diagonal(text: &str) -> Grid {
    codec::parse(text, Variant::Diagonal).unwrap()
}

/// Renders a solved grid back to its single-line record form.
pub(crate) fn solved_record(grid: &Grid) -> String {
    codec::render(grid).lines().collect()
}
