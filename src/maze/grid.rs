use std::collections::{HashSet, VecDeque};

use crate::error::MazeError;

use super::{CARDINAL_STEPS, CellState, DIAGONAL_STEPS, Position};

/// A fixed-size rectangular maze of open and wall cells.
///
/// Dimensions never change after construction. Solvers only ever borrow a
/// grid immutably, so one grid can be shared by concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[CellState]>,
    rows: u16,
    cols: u16,
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: CellState) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let (Ok(r), Ok(c)) = (u16::try_from(rows), u16::try_from(cols)) else {
            return Err(MazeError::TooLarge { rows, cols });
        };
        // u16 dimensions keep every index representable; the largest index is
        // u16::MAX - 1, which leaves u16::MAX as a sentinel in `step`.
        if r == u16::MAX || c == u16::MAX {
            return Err(MazeError::TooLarge { rows, cols });
        }
        Ok(Grid {
            data: vec![fill; rows * cols].into_boxed_slice(),
            rows: r,
            cols: c,
        })
    }

    /// Builds a grid from a 0/1 matrix, where `0` is open and anything else is a wall.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MazeError> {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = Grid::new(rows.len(), expected, CellState::Open)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(MazeError::RaggedRow {
                    row: r,
                    found: row.len(),
                    expected,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value != 0 {
                    grid.set(Position::new(r as u16, c as u16), CellState::Wall);
                }
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn ravel_index(&self, pos: Position) -> usize {
        // Overflow-safe since rows and cols are u16 (assuming usize is at least 32 bits)
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// Returns the state of the cell at `pos`.
    pub fn cell_state(&self, pos: Position) -> Result<CellState, MazeError> {
        if !self.contains(pos) {
            return Err(MazeError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[self.ravel_index(pos)])
    }

    /// `true` iff `pos` is inside the grid and open.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.contains(pos) && self.data[self.ravel_index(pos)].is_open()
    }

    /// Strict endpoint validation for callers that want a fault rather than a
    /// `found: false` search result.
    pub fn check_endpoint(&self, pos: Position) -> Result<(), MazeError> {
        match self.cell_state(pos)? {
            CellState::Open => Ok(()),
            CellState::Wall => Err(MazeError::Blocked(pos)),
        }
    }

    /// Sets the cell at `pos`.
    ///
    /// # Panics
    /// If `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, state: CellState) {
        if !self.contains(pos) {
            panic!("The given position {pos} is out of bounds");
        }
        let idx = self.ravel_index(pos);
        self.data[idx] = state;
    }

    /// Fills every cell with `state`.
    pub fn fill(&mut self, state: CellState) {
        self.data.fill(state);
    }

    /// Offsets `pos` by one step, returning `None` if the result leaves the grid.
    fn step(&self, pos: Position, (dr, dc): (i8, i8)) -> Option<Position> {
        // NOTE: wrapping a 0 index below zero lands on u16::MAX, and saturating the
        // largest index lands on u16::MAX too. Neither can be a valid index because
        // dimensions are capped below u16::MAX, so `contains` filters both out.
        let row = match dr {
            -1 => pos.row.wrapping_sub(1),
            1 => pos.row.saturating_add(1),
            _ => pos.row,
        };
        let col = match dc {
            -1 => pos.col.wrapping_sub(1),
            1 => pos.col.saturating_add(1),
            _ => pos.col,
        };
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Passable neighbors of `pos` in a fixed order: up, right, down, left, then
    /// (with `diagonal`) up-right, down-right, down-left, up-left.
    ///
    /// Returns nothing for an out-of-bounds `pos`.
    pub fn neighbors(&self, pos: Position, diagonal: bool) -> Vec<Position> {
        if !self.contains(pos) {
            return Vec::new();
        }
        let diagonals: &[(i8, i8)] = if diagonal { &DIAGONAL_STEPS } else { &[] };
        CARDINAL_STEPS
            .iter()
            .chain(diagonals)
            .filter_map(|&d| self.step(pos, d))
            .filter(|&n| self.is_passable(n))
            .collect()
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Iterates over all open positions in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.is_passable(p))
    }

    pub fn count_open(&self) -> usize {
        self.data.iter().filter(|c| c.is_open()).count()
    }

    /// Flood-fills from `from` over cardinal adjacency and reports whether `to` is reached.
    pub fn is_reachable(&self, from: Position, to: Position) -> bool {
        if !self.is_passable(from) || !self.is_passable(to) {
            return false;
        }
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);
        while let Some(current) = queue.pop_front() {
            if current == to {
                return true;
            }
            for n in self.neighbors(current, false) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        false
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = CellState;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.data[self.ravel_index(pos)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&[[0u8, 1, 0], [0, 0, 0], [1, 0, 1]]).unwrap()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 4, CellState::Open),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 4 })
        );
        assert!(Grid::new(3, 0, CellState::Wall).is_err());
        assert!(matches!(
            Grid::new(70_000, 2, CellState::Wall),
            Err(MazeError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![0, 0], vec![0]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(MazeError::RaggedRow {
                row: 1,
                found: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_cell_state_bounds() {
        let grid = sample();
        assert_eq!(grid.cell_state(Position::new(0, 1)), Ok(CellState::Wall));
        assert_eq!(grid.cell_state(Position::new(1, 1)), Ok(CellState::Open));
        assert!(matches!(
            grid.cell_state(Position::new(3, 0)),
            Err(MazeError::OutOfBounds { .. })
        ));
        assert!(!grid.is_passable(Position::new(0, 3)));
        assert!(!grid.is_passable(Position::new(0, 1)));
        assert!(grid.is_passable(Position::new(0, 0)));
    }

    #[test]
    fn test_check_endpoint() {
        let grid = sample();
        assert_eq!(grid.check_endpoint(Position::new(0, 0)), Ok(()));
        assert_eq!(
            grid.check_endpoint(Position::new(2, 0)),
            Err(MazeError::Blocked(Position::new(2, 0)))
        );
        assert!(grid.check_endpoint(Position::new(9, 9)).is_err());
    }

    #[test]
    fn test_neighbor_order() {
        let grid = Grid::new(3, 3, CellState::Open).unwrap();
        let center = Position::new(1, 1);
        assert_eq!(
            grid.neighbors(center, false),
            vec![
                Position::new(0, 1),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(1, 0),
            ]
        );
        assert_eq!(
            grid.neighbors(center, true)[4..],
            [
                Position::new(0, 2),
                Position::new(2, 2),
                Position::new(2, 0),
                Position::new(0, 0),
            ]
        );
    }

    #[test]
    fn test_neighbors_filtered() {
        let grid = sample();
        // Corner: up and left leave the grid, right is a wall.
        assert_eq!(
            grid.neighbors(Position::new(0, 0), false),
            vec![Position::new(1, 0)]
        );
        assert_eq!(
            grid.neighbors(Position::new(0, 0), true),
            vec![Position::new(1, 0), Position::new(1, 1)]
        );
        assert!(grid.neighbors(Position::new(5, 5), true).is_empty());
    }

    #[test]
    fn test_reachability() {
        let grid = sample();
        assert!(grid.is_reachable(Position::new(0, 0), Position::new(0, 2)));
        assert!(grid.is_reachable(Position::new(0, 0), Position::new(2, 1)));
        assert!(!grid.is_reachable(Position::new(0, 0), Position::new(2, 2)));
        assert_eq!(grid.count_open(), 6);
        assert_eq!(grid.open_cells().count(), 6);
    }
}
