//! Constraint-propagation and backtracking solver for N²×N² Sudoku and
//! Sudoku-X grids.
//!
//! The solver operates on the candidate grids of `xudoku-core`:
//!
//! - [`technique`] holds the individual elimination rules
//! - [`FilterPass`] bundles them into one constraint-filter pass
//! - [`Searcher`] drives passes to a fixpoint and backtracks on stall
//! - [`verify`] checks a terminal grid and collects every violation
//!
//! Contradictions are not errors here: a grid that runs out of candidates
//! yields the [`Outcome::Failed`] terminal state, and the search tries the
//! next guess. Only malformed puzzle text is rejected, at the codec boundary
//! in `xudoku-core`.

pub use self::{
    filter::FilterPass,
    search::{Outcome, Searcher, solve},
    verify::{Violation, verify},
};

mod filter;
mod search;
pub mod technique;
mod verify;

#[cfg(test)]
mod testing;
