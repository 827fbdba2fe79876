use thiserror::Error;

use crate::maze::Position;

/// Invalid input handed to the engine.
///
/// A query whose goal cannot be reached is *not* an error; solvers report it
/// through [`crate::solvers::SearchResult::found`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("grid dimensions {rows}x{cols} exceed the maximum of {max}x{max}", max = u16::MAX)]
    TooLarge { rows: usize, cols: usize },

    #[error("position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Position, rows: u16, cols: u16 },

    #[error("position {0} is a wall")]
    Blocked(Position),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown cell symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("diagram marks {symbol:?} more than once")]
    DuplicateMarker { symbol: char },

    #[error("unknown {kind} {name:?}, expected one of: {expected}")]
    UnknownName {
        kind: &'static str,
        name: String,
        expected: String,
    },
}
