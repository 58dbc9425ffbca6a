use xudoku_core::{Grid, Position};

use super::{BoxedTechnique, Technique};

const NAME: &str = "locked candidates";

/// The box-line rule: a candidate confined to one line within a box is
/// removed from that line outside the box.
///
/// If, within a box, every cell still holding some value lies in a single
/// box-row, the value must be placed in that box-row and can be removed from
/// the rest of that row; likewise for box-columns. Applied once per box at
/// the start of a filter pass, before the per-cell rules. Diagonals take no
/// part in this rule - it is defined by the box-line intersection.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidates;

impl LockedCandidates {
    /// Creates a new `LockedCandidates` technique.
    #[must_use]
    pub const fn new() -> Self {
        LockedCandidates
    }
}

impl Technique for LockedCandidates {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let geometry = grid.geometry();
        let size = geometry.size();
        let box_size = geometry.box_size();
        let mut changed = false;

        for box_index in 0..size {
            let origin = geometry.box_origin(box_index);
            for value in 1..=size {
                // Which lines of this box still hold the value.
                let mut rows_with = [false; 8];
                let mut cols_with = [false; 8];
                for row_offset in 0..box_size {
                    for col_offset in 0..box_size {
                        let pos =
                            Position::new(origin.row() + row_offset, origin.col() + col_offset);
                        if grid.cell(pos).contains(value) {
                            rows_with[usize::from(row_offset)] = true;
                            cols_with[usize::from(col_offset)] = true;
                        }
                    }
                }

                if let Some(row_offset) = sole_line(&rows_with[..usize::from(box_size)]) {
                    let row = origin.row() + row_offset;
                    for col in (0..size).filter(|col| !in_span(*col, origin.col(), box_size)) {
                        changed |= grid.remove_candidate(Position::new(row, col), value);
                    }
                }
                if let Some(col_offset) = sole_line(&cols_with[..usize::from(box_size)]) {
                    let col = origin.col() + col_offset;
                    for row in (0..size).filter(|row| !in_span(*row, origin.row(), box_size)) {
                        changed |= grid.remove_candidate(Position::new(row, col), value);
                    }
                }
            }
        }
        changed
    }
}

/// Returns the single marked line offset, or `None` when zero or several
/// lines are marked.
fn sole_line(lines: &[bool]) -> Option<u8> {
    let mut found = None;
    for (offset, &marked) in lines.iter().enumerate() {
        if marked {
            if found.is_some() {
                return None;
            }
            #[expect(clippy::cast_possible_truncation)]
            {
                found = Some(offset as u8);
            }
        }
    }
    found
}

fn in_span(index: u8, start: u8, len: u8) -> bool {
    (start..start + len).contains(&index)
}
