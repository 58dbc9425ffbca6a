use xudoku_core::{CandidateSet, Grid};

use super::{BoxedTechnique, Technique};

const NAME: &str = "peer elimination";

/// Removes candidates that are the sole value of a solved peer.
///
/// For every cell, the values held by solved cells in its row, column, box,
/// and (on Sudoku-X boards) diagonals cannot appear in this cell again, so
/// they are removed. Undetermined peers contribute nothing. This is the
/// outward propagation of a naked single, and it is also what turns two
/// identical presets in one group into a contradiction: each empties the
/// other.
#[derive(Debug, Default, Clone, Copy)]
pub struct PeerElimination;

impl PeerElimination {
    /// Creates a new `PeerElimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        PeerElimination
    }
}

impl Technique for PeerElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let geometry = grid.geometry();
        let mut changed = false;
        for pos in geometry.positions() {
            let mut eliminated = CandidateSet::EMPTY;
            for group in geometry.peer_groups_of(pos) {
                for peer in group.positions(geometry).filter(|&peer| peer != pos) {
                    if let Some(value) = grid.cell(peer).sole_value() {
                        eliminated.insert(value);
                    }
                }
            }
            changed |= grid.remove_candidates(pos, eliminated);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use xudoku_core::Position;

    use super::*;
    use crate::testing::{diagonal_grid, empty_grid};

    #[test]
    fn test_solved_peer_values_are_removed() {
        let mut grid = empty_grid();
        grid.assign(Position::new(0, 0), 5);
        grid.assign(Position::new(4, 4), 3);

        assert!(PeerElimination::new().apply(&mut grid));

        // Same row, column, and box as the placed 5.
        assert!(!grid.cell(Position::new(0, 8)).contains(5));
        assert!(!grid.cell(Position::new(8, 0)).contains(5));
        assert!(!grid.cell(Position::new(2, 2)).contains(5));
        // Unrelated cell keeps it.
        assert!(grid.cell(Position::new(4, 5)).contains(5));
        assert!(!grid.cell(Position::new(4, 5)).contains(3));
    }

    #[test]
    fn test_undetermined_peers_contribute_nothing() {
        let mut grid = empty_grid();
        // Two candidates are not a solved peer.
        grid.remove_candidates(
            Position::new(0, 0),
            CandidateSet::from_iter([1, 2, 3, 4, 5, 6, 7]),
        );

        assert!(!PeerElimination::new().apply(&mut grid));
        assert!(grid.cell(Position::new(0, 1)).contains(8));
        assert!(grid.cell(Position::new(0, 1)).contains(9));
    }

    #[test]
    fn test_duplicate_presets_empty_each_other() {
        let mut grid = empty_grid();
        grid.assign(Position::new(0, 0), 5);
        grid.assign(Position::new(0, 6), 5);

        assert!(PeerElimination::new().apply(&mut grid));
        assert!(grid.cell(Position::new(0, 0)).is_empty());
        assert!(grid.cell(Position::new(0, 6)).is_empty());
        assert!(grid.is_contradictory());
    }

    #[test]
    fn test_diagonal_peers_participate() {
        let mut grid = diagonal_grid();
        grid.assign(Position::new(0, 0), 7);

        assert!(PeerElimination::new().apply(&mut grid));
        // (8, 8) shares only the main diagonal with (0, 0).
        assert!(!grid.cell(Position::new(8, 8)).contains(7));

        let mut classic = empty_grid();
        classic.assign(Position::new(0, 0), 7);
        PeerElimination::new().apply(&mut classic);
        assert!(classic.cell(Position::new(8, 8)).contains(7));
    }
}
