//! The search controller: propagation to a fixpoint plus backtracking.

use tinyvec::ArrayVec;
use xudoku_core::{Grid, Position};

use crate::FilterPass;

/// The terminal state of one solving attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell was resolved to a single value.
    Solved(Grid),
    /// A contradiction was reached, or every branch was exhausted. The
    /// carried grid is the state at the point of failure, for diagnostics
    /// only.
    Failed(Grid),
}

impl Outcome {
    /// Returns `true` for [`Outcome::Solved`].
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The terminal grid, solved or not.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        match self {
            Self::Solved(grid) | Self::Failed(grid) => grid,
        }
    }

    /// Consumes the outcome and returns the terminal grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        match self {
            Self::Solved(grid) | Self::Failed(grid) => grid,
        }
    }
}

/// Solves a puzzle grid with the default searcher.
///
/// Shorthand for `Searcher::new().solve(grid)`.
#[must_use]
pub fn solve(grid: Grid) -> Outcome {
    Searcher::new().solve(grid)
}

/// Depth-first backtracking search with constraint propagation as its
/// pruning oracle.
///
/// The searcher runs [`FilterPass`]es until the solved-cell count stops
/// growing, then guesses: it picks an undetermined cell (minimum remaining
/// candidates, preferring the row or column axis holding the most cells
/// tied at that minimum), forces each of its candidates in ascending order
/// on an independent grid copy, and recurses. The first branch to resolve
/// every cell wins; a contradiction makes the parent frame try its next
/// candidate. There is no memoization and no reordering beyond the pivot
/// heuristic, so the result is deterministic.
///
/// An optional node budget caps the number of branching decisions; when it
/// is exhausted the attempt fails instead of running to completion, which
/// is the hook for callers that need a timeout.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Variant, codec};
/// use xudoku_solver::{Outcome, Searcher};
///
/// let grid = codec::parse(
///     "530070000600195000098000060800060003400803001\
///      700020006060000280000419005000080079",
///     Variant::Classic,
/// )?;
/// let outcome = Searcher::new().solve(grid);
/// assert!(outcome.is_solved());
/// # Ok::<(), xudoku_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    pass: FilterPass,
    node_budget: Option<usize>,
}

impl Searcher {
    /// Creates a searcher with the full filter rule set and no budget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pass: FilterPass::new(),
            node_budget: None,
        }
    }

    /// Caps the number of branching decisions the search may make.
    #[must_use]
    pub fn with_node_budget(mut self, nodes: usize) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    /// Solves the given grid, consuming it.
    #[must_use]
    pub fn solve(&self, grid: Grid) -> Outcome {
        let mut nodes = 0;
        let outcome = self.run(grid, &mut nodes);
        log::debug!(
            "search finished after {nodes} branch nodes: {}",
            if outcome.is_solved() { "solved" } else { "failed" },
        );
        outcome
    }

    /// Propagates to a fixpoint, then branches if the grid is not resolved.
    fn run(&self, mut grid: Grid, nodes: &mut usize) -> Outcome {
        let cell_count = grid.geometry().cell_count();
        let mut previous = None;
        loop {
            self.pass.apply(&mut grid);
            if grid.is_contradictory() {
                return Outcome::Failed(grid);
            }
            let solved = grid.solved_count();
            log::trace!("propagation pass solved {solved}/{cell_count} cells");
            if solved == cell_count {
                return Outcome::Solved(grid);
            }
            if previous == Some(solved) {
                return self.branch(grid, nodes);
            }
            previous = Some(solved);
        }
    }

    /// Guesses each candidate of the pivot cell on its own grid copy.
    fn branch(&self, grid: Grid, nodes: &mut usize) -> Outcome {
        if self.node_budget.is_some_and(|budget| *nodes >= budget) {
            log::debug!("node budget exhausted");
            return Outcome::Failed(grid);
        }
        *nodes += 1;

        let Some(pivot) = pick_branch_cell(&grid) else {
            return Outcome::Failed(grid);
        };
        let candidates: ArrayVec<[u8; 64]> = grid.cell(pivot).iter().collect();
        log::debug!("branching on {pivot} over {} candidates", candidates.len());
        for value in candidates {
            let mut child = grid.clone();
            child.assign(pivot, value);
            if let Outcome::Solved(solution) = self.run(child, nodes) {
                return Outcome::Solved(solution);
            }
        }
        Outcome::Failed(grid)
    }
}

/// Picks the cell to guess on, or `None` if no undetermined cell remains.
///
/// Among the cells with the fewest remaining candidates, the choice prefers
/// whichever row or column holds the most such cells: a densely constrained
/// line prunes more of the search space per guess. Ties fall to the first
/// cell in row-major order, keeping the search deterministic.
fn pick_branch_cell(grid: &Grid) -> Option<Position> {
    let mut min_count = u8::MAX;
    let mut tied: Vec<Position> = Vec::new();
    for pos in grid.positions() {
        let count = grid.cell(pos).len();
        if count <= 1 || count > min_count {
            continue;
        }
        if count < min_count {
            min_count = count;
            tied.clear();
        }
        tied.push(pos);
    }
    if tied.is_empty() {
        return None;
    }

    let size = usize::from(grid.geometry().size());
    let mut row_freq = vec![0_usize; size];
    let mut col_freq = vec![0_usize; size];
    for pos in &tied {
        row_freq[usize::from(pos.row())] += 1;
        col_freq[usize::from(pos.col())] += 1;
    }
    let (best_row, top_row) = arg_max(&row_freq);
    let (best_col, top_col) = arg_max(&col_freq);

    let pick = if top_row > top_col {
        tied.iter().find(|pos| usize::from(pos.row()) == best_row)
    } else {
        tied.iter().find(|pos| usize::from(pos.col()) == best_col)
    };
    pick.copied()
}

/// Index and value of the first maximum in a non-empty slice.
fn arg_max(counts: &[usize]) -> (usize, usize) {
    let mut best = (0, counts[0]);
    for (index, &count) in counts.iter().enumerate().skip(1) {
        if count > best.1 {
            best = (index, count);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use xudoku_core::{Position, Presets};

    use super::*;
    use crate::testing::{
        DIAGONAL_PUZZLE, DIAGONAL_PUZZLE_SOLUTION, SCENARIO_A, SCENARIO_A_SOLUTION, diagonal_grid,
        empty_grid, parse_classic, parse_diagonal, solved_record,
    };
    use crate::verify;

    #[test]
    fn test_scenario_a_solves_to_known_completion() {
        let outcome = solve(parse_classic(SCENARIO_A));
        let Outcome::Solved(grid) = outcome else {
            panic!("expected a solution");
        };
        assert_eq!(solved_record(&grid), SCENARIO_A_SOLUTION);
    }

    #[test]
    fn test_presets_survive_solving() {
        let initial = parse_classic(SCENARIO_A);
        let presets = Presets::from_grid(&initial);
        let Outcome::Solved(grid) = solve(initial) else {
            panic!("expected a solution");
        };
        for (pos, value) in presets.iter() {
            assert_eq!(grid.value(pos), Some(value), "preset at {pos}");
        }
    }

    #[test]
    fn test_duplicate_preset_fails() {
        // Scenario B: two 5s preset in row 0 can never solve.
        let mut record = String::from("5");
        record.push_str(&"0".repeat(5));
        record.push('5');
        record.push_str(&"0".repeat(74));
        let outcome = solve(parse_classic(&record));
        assert!(!outcome.is_solved());
        assert!(outcome.grid().is_contradictory());
    }

    #[test]
    fn test_all_blank_grid_reaches_a_valid_solution() {
        // Scenario C: any completion of an empty board will do, but it must
        // satisfy every group.
        let initial = empty_grid();
        let presets = Presets::from_grid(&initial);
        let Outcome::Solved(grid) = solve(initial) else {
            panic!("expected a solution");
        };
        assert!(verify(&presets, &grid).is_empty());
    }

    #[test]
    fn test_diagonal_puzzle_solves_from_text() {
        let initial = parse_diagonal(DIAGONAL_PUZZLE);
        let presets = Presets::from_grid(&initial);
        let Outcome::Solved(grid) = solve(initial) else {
            panic!("expected a solution");
        };
        // The puzzle has several completions under classic rules; only the
        // diagonal constraints pin this one down.
        assert_eq!(solved_record(&grid), DIAGONAL_PUZZLE_SOLUTION);
        assert!(verify(&presets, &grid).is_empty());
    }

    #[test]
    fn test_empty_diagonal_board_solves_and_verifies() {
        let initial = diagonal_grid();
        let presets = Presets::from_grid(&initial);
        let Outcome::Solved(grid) = solve(initial) else {
            panic!("expected a solution");
        };
        assert!(verify(&presets, &grid).is_empty());
    }

    #[test]
    fn test_unsolvable_puzzle_exhausts_to_failed() {
        let record =
            "1....6....59.....82....8....45...3....3...7....6..3.54...325..6........17389.....";
        let outcome = solve(parse_classic(record));
        assert!(!outcome.is_solved());
    }

    #[test]
    fn test_node_budget_zero_fails_on_stall() {
        let outcome = Searcher::new().with_node_budget(0).solve(empty_grid());
        assert!(!outcome.is_solved());
        // The budget only gates branching: a propagation-only solve still
        // succeeds.
        let outcome = Searcher::new()
            .with_node_budget(0)
            .solve(parse_classic(SCENARIO_A));
        assert!(outcome.is_solved());
    }

    #[test]
    fn test_solve_4x4_board() {
        let text = "1...\n..3.\n.1..\n...2\n";
        let outcome = solve(parse_classic(text));
        assert!(outcome.is_solved());
    }

    #[test]
    fn test_pick_branch_cell_prefers_dense_line() {
        let mut grid = empty_grid();
        // Three two-candidate cells in row 4, one in column 0.
        for (pos, keep) in [
            (Position::new(4, 2), [1, 2]),
            (Position::new(4, 5), [3, 4]),
            (Position::new(4, 7), [5, 6]),
            (Position::new(7, 0), [7, 8]),
        ] {
            for value in 1..=9 {
                if !keep.contains(&value) {
                    grid.remove_candidate(pos, value);
                }
            }
        }
        // Row 4 holds three of the four minimum-candidate cells, so the
        // first of them is the pivot.
        assert_eq!(pick_branch_cell(&grid), Some(Position::new(4, 2)));
    }

    #[test]
    fn test_pick_branch_cell_none_when_complete() {
        let grid = parse_classic(SCENARIO_A_SOLUTION);
        assert_eq!(pick_branch_cell(&grid), None);
    }
}
