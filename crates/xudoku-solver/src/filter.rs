//! The constraint filter: one full elimination pass over a grid.

use xudoku_core::Grid;

use crate::technique::{self, BoxedTechnique};

/// One constraint-filter pass.
///
/// A pass applies the box-line rule once per box and then the per-cell rules
/// once per cell, in the order fixed by
/// [`technique::all_techniques`]. Every application only removes candidates,
/// so a pass never increases any cell's candidate count. A contradiction
/// (some cell left with zero candidates) is reported through
/// [`Grid::is_contradictory`] rather than an error - it is a normal search
/// outcome.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Variant, codec};
/// use xudoku_solver::FilterPass;
///
/// let mut grid = codec::parse(
///     "530070000600195000098000060800060003400803001\
///      700020006060000280000419005000080079",
///     Variant::Classic,
/// )?;
/// let pass = FilterPass::new();
/// while pass.apply(&mut grid) {}
/// assert!(!grid.is_contradictory());
/// # Ok::<(), xudoku_core::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FilterPass {
    techniques: Vec<BoxedTechnique>,
}

impl Default for FilterPass {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPass {
    /// Creates a pass over the full rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            techniques: technique::all_techniques(),
        }
    }

    /// Creates a pass over a custom rule set, applied in order.
    #[must_use]
    pub fn with_techniques(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// The configured techniques in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Runs one pass over the grid. Returns `true` if any cell changed.
    pub fn apply(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        for technique in &self.techniques {
            let applied = technique.apply(grid);
            if applied {
                log::trace!("{} removed candidates", technique.name());
            }
            changed |= applied;
        }
        changed
    }
}
