pub mod cell;
pub mod grid;
pub mod text;

use std::fmt;

pub use cell::{CellState, Tile};
pub use grid::Grid;

/// A `(row, col)` coordinate on a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    pub const fn new(row: u16, col: u16) -> Self {
        Position { row, col }
    }

    /// Returns `true` if `other` is one king-move away, or one rook-move away when
    /// `diagonal` is `false`.
    pub fn is_adjacent(self, other: Position, diagonal: bool) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        match (dr, dc) {
            (0, 1) | (1, 0) => true,
            (1, 1) => diagonal,
            _ => false,
        }
    }
}

impl From<(u16, u16)> for Position {
    fn from((row, col): (u16, u16)) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unit step offsets as `(d_row, d_col)`, in neighbor iteration order:
/// up, right, down, left.
pub const CARDINAL_STEPS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Diagonal step offsets, iterated after [`CARDINAL_STEPS`]:
/// up-right, down-right, down-left, up-left.
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency() {
        let p = Position::new(3, 3);
        assert!(p.is_adjacent(Position::new(2, 3), false));
        assert!(p.is_adjacent(Position::new(3, 4), false));
        assert!(!p.is_adjacent(Position::new(4, 4), false));
        assert!(p.is_adjacent(Position::new(4, 4), true));
        assert!(!p.is_adjacent(p, true));
        assert!(!p.is_adjacent(Position::new(5, 3), true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Position::from((4, 0)), Position::new(4, 0));
    }
}
