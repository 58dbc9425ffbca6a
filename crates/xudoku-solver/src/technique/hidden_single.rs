use xudoku_core::{CandidateSet, Grid};

use super::{BoxedTechnique, Technique};

const NAME: &str = "hidden single";

/// Narrows a cell to a value no other cell in one of its groups can hold.
///
/// For each undetermined cell and each of its peer groups, the union of the
/// other members' candidates is computed; if exactly one value of the full
/// set is missing, this cell is the only place left for it and is narrowed
/// to that value. When the value was already eliminated from the cell the
/// narrowing empties it instead - the group demands a value the cell cannot
/// take, and removals are never undone.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let geometry = grid.geometry();
        let full = CandidateSet::full(geometry.size());
        let mut changed = false;
        for pos in geometry.positions() {
            if grid.cell(pos).len() <= 1 {
                continue;
            }
            for group in geometry.peer_groups_of(pos) {
                let mut used = CandidateSet::EMPTY;
                for peer in group.positions(geometry).filter(|&peer| peer != pos) {
                    used |= grid.cell(peer);
                }
                if let Some(value) = full.difference(used).sole_value() {
                    changed |= grid.narrow_to(pos, value);
                    break;
                }
            }
        }
        changed
    }
}
