//! Conversion between puzzle text and candidate grids.
//!
//! Two encodings are accepted, matching common puzzle collections:
//!
//! - **Character-per-cell**: `1`-`9` are presets, `A`-`G` stand for values
//!   10-16 on big boards, and anything else (`0`, `.`, `_`, ...) is a blank.
//! - **Comma-delimited**: each token is a decimal preset or a blank;
//!   trailing commas are tolerated.
//!
//! A record is either one line holding the whole board (a 9×9 puzzle in its
//! usual 81-character form) or one line per row. Unrecognized and
//! out-of-range tokens map to unconstrained cells, so only structural
//! problems are errors.

use crate::{CandidateSet, Geometry, GeometryError, Grid, Position, Variant};

/// Malformed puzzle text, rejected before any solving is attempted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The text contained no cells at all.
    #[display("puzzle text contains no cells")]
    Empty,
    /// A single-line record whose cell count is not a perfect square.
    #[display("cell count {count} is not a square board")]
    CellCountNotSquare {
        /// Number of cells found.
        count: usize,
    },
    /// The board edge is not a perfect square, so no box layout exists.
    #[display("board size {size} is not a perfect square")]
    SizeNotSquare {
        /// The rejected edge length.
        size: usize,
    },
    /// The board size falls outside what [`Geometry`] supports.
    #[display("board size {size} is not supported")]
    UnsupportedSize {
        /// The rejected edge length.
        size: usize,
    },
    /// A row holds fewer cells than the board edge requires.
    #[display("row {row} has {found} cells, expected {expected}")]
    RowTooShort {
        /// 0-based row index.
        row: usize,
        /// Cells found in the row.
        found: usize,
        /// Cells required.
        expected: usize,
    },
}

/// Parses one puzzle record into an initial [`Grid`].
///
/// The board size is inferred from the text: a single line is split into
/// `size²` cells, while multiple lines are read one row each (lines past the
/// inferred size are treated as trailing comments). Preset cells become
/// singleton candidate sets; everything else stays unconstrained.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text has no cells, does not form a square
/// board with square boxes, or a row is too short.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Position, Variant, codec};
///
/// let grid = codec::parse(
///     "530070000600195000098000060800060003400803001\
///      700020006060000280000419005000080079",
///     Variant::Classic,
/// )?;
/// assert_eq!(grid.value(Position::new(0, 0)), Some(5));
/// assert_eq!(grid.cell(Position::new(0, 2)).len(), 9);
/// # Ok::<(), codec::ParseError>(())
/// ```
pub fn parse(text: &str, variant: Variant) -> Result<Grid, ParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(ParseError::Empty);
    }

    let (size, rows) = if lines.len() == 1 {
        split_single_record(lines[0])?
    } else {
        let rows: Vec<Vec<u8>> = lines.iter().map(|line| record_cells(line)).collect();
        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        // Lines past the inferred board, and cells past the widest square,
        // are treated as trailing comments.
        let box_size = rows.len().min(widest).isqrt();
        (box_size * box_size, rows)
    };
    if size == 0 {
        return Err(ParseError::Empty);
    }

    let box_size = u8::try_from(size.isqrt()).map_err(|_| ParseError::UnsupportedSize { size })?;
    let geometry = Geometry::new(box_size, variant).map_err(|err| match err {
        GeometryError::BoxSizeOutOfRange { .. } => ParseError::UnsupportedSize { size },
    })?;

    let mut grid = Grid::new(geometry);
    for (row, cells) in rows.iter().take(size).enumerate() {
        if cells.len() < size {
            return Err(ParseError::RowTooShort {
                row,
                found: cells.len(),
                expected: size,
            });
        }
        for (col, &value) in cells.iter().take(size).enumerate() {
            if (1..=geometry.size()).contains(&value) {
                #[expect(clippy::cast_possible_truncation)]
                grid.assign(Position::new(row as u8, col as u8), value);
            }
        }
    }
    Ok(grid)
}

/// Renders a grid to its canonical text, one row per line.
///
/// Solved cells become their digit character (`A`-`G` for values 10-16);
/// blank and undetermined cells render as `.`. Boards wider than 16 values
/// fall back to comma-delimited decimal tokens. The output of a freshly
/// parsed grid re-parses to an equivalent grid.
#[must_use]
pub fn render(grid: &Grid) -> String {
    let size = grid.geometry().size();
    let mut out = String::new();
    for row in 0..size {
        if size <= 16 {
            for col in 0..size {
                match grid.value(Position::new(row, col)) {
                    Some(value) => out.push(value_to_char(value)),
                    None => out.push('.'),
                }
            }
        } else {
            let tokens: Vec<String> = (0..size)
                .map(|col| {
                    grid.value(Position::new(row, col))
                        .map_or_else(|| ".".to_owned(), |value| value.to_string())
                })
                .collect();
            out.push_str(&tokens.join(","));
        }
        out.push('\n');
    }
    out
}

/// Renders every cell's full candidate set, for diagnostics.
///
/// Cells in a row are separated by `|`; a cell lists its remaining
/// candidates comma-separated, with a fully unconstrained cell left blank.
#[must_use]
pub fn render_candidates(grid: &Grid) -> String {
    let size = grid.geometry().size();
    let full = CandidateSet::full(size);
    let mut out = String::new();
    for row in 0..size {
        let cells: Vec<String> = (0..size)
            .map(|col| {
                let cell = grid.cell(Position::new(row, col));
                if cell == full {
                    String::new()
                } else {
                    let values: Vec<String> = cell.iter().map(|v| v.to_string()).collect();
                    values.join(",")
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}

/// Splits a whole-board single-line record into rows of cell values.
fn split_single_record(line: &str) -> Result<(usize, Vec<Vec<u8>>), ParseError> {
    let cells = record_cells(line);
    if cells.is_empty() {
        return Err(ParseError::Empty);
    }
    let size = cells.len().isqrt();
    if size * size != cells.len() {
        return Err(ParseError::CellCountNotSquare { count: cells.len() });
    }
    let box_size = size.isqrt();
    if box_size * box_size != size {
        return Err(ParseError::SizeNotSquare { size });
    }
    Ok((size, cells.chunks(size).map(<[u8]>::to_vec).collect()))
}

/// Parses one record into cell values, 0 standing for a blank.
fn record_cells(line: &str) -> Vec<u8> {
    if line.contains(',') {
        let mut tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        // Redundant trailing commas are permitted.
        while tokens.last() == Some(&"") {
            tokens.pop();
        }
        tokens.iter().map(|token| token_value(token)).collect()
    } else {
        line.chars().map(char_value).collect()
    }
}

fn token_value(token: &str) -> u8 {
    match token.parse::<u8>() {
        Ok(value) if value >= 1 => value,
        // Non-numbers and 0 mean blank cells to be filled.
        _ => 0,
    }
}

fn char_value(ch: char) -> u8 {
    match ch {
        '1'..='9' => ch as u8 - b'0',
        // Extended alphabet for boards wider than nine values.
        'A'..='G' => ch as u8 - b'A' + 10,
        _ => 0,
    }
}

fn value_to_char(value: u8) -> char {
    debug_assert!((1..=16).contains(&value));
    if value <= 9 {
        char::from(b'0' + value)
    } else {
        char::from(b'A' + value - 10)
    }
}
