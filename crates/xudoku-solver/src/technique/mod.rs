//! Candidate-elimination techniques.
//!
//! Each technique sweeps the whole grid once and only ever removes
//! candidates; removals are monotonic and commutative across this rule set,
//! so the sweep order does not affect the fixpoint. A technique never
//! reports a contradiction itself - an emptied cell is left in place for the
//! search controller to detect.

use std::fmt::Debug;

use xudoku_core::Grid;

pub use self::{
    hidden_single::HiddenSingle, locked_candidates::LockedCandidates,
    peer_elimination::PeerElimination,
};

mod hidden_single;
mod locked_candidates;
mod peer_elimination;

/// A single elimination rule applied across a whole grid.
pub trait Technique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Sweeps the grid once, removing candidates this rule proves
    /// impossible. Returns `true` if any cell changed.
    fn apply(&self, grid: &mut Grid) -> bool;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns every technique of the constraint filter, in pass order: the
/// box-line rule first, then the per-cell rules.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(LockedCandidates::new()),
        Box::new(PeerElimination::new()),
        Box::new(HiddenSingle::new()),
    ]
}
