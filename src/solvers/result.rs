use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use crate::maze::{Grid, Position};

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The goal was reached.
    Found,
    /// The frontier ran dry; the goal is unreachable from the start.
    Exhausted,
    /// The caller's expansion budget ran out before the goal was reached.
    BudgetExhausted,
    /// The start or the end is outside the grid or on a wall.
    InvalidEndpoint,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Found => write!(f, "found"),
            Termination::Exhausted => write!(f, "unreachable"),
            Termination::BudgetExhausted => write!(f, "budget exhausted"),
            Termination::InvalidEndpoint => write!(f, "invalid endpoint"),
        }
    }
}

/// The outcome of one search: the path, every cell the search touched, and
/// performance counters. Owned by the caller; nothing is shared between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Start-to-end route, empty unless `found`.
    pub path: Vec<Position>,
    /// Every cell the search discovered, on either side for bidirectional search.
    pub visited: HashSet<Position>,
    /// Number of frontier nodes that were expanded.
    pub nodes_explored: usize,
    pub elapsed: Duration,
    pub found: bool,
    pub termination: Termination,
}

/// Broken [`SearchResult`] invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDefect {
    FoundWithoutPath,
    PathWithoutFound,
    WrongStart(Position),
    WrongEnd(Position),
    NotPassable(Position),
    NotAdjacent(Position, Position),
    Repeated(Position),
}

impl SearchResult {
    pub(crate) fn not_found(termination: Termination) -> Self {
        SearchResult {
            path: Vec::new(),
            visited: HashSet::new(),
            nodes_explored: 0,
            elapsed: Duration::ZERO,
            found: false,
            termination,
        }
    }

    /// Number of moves along the path; zero when nothing was found.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Checks the path invariants: a found path runs from `start` to `end`
    /// through passable, pairwise adjacent, non-repeating cells; a failed
    /// search carries no path.
    pub fn validate(
        &self,
        grid: &Grid,
        start: Position,
        end: Position,
        diagonal: bool,
    ) -> Result<(), PathDefect> {
        if !self.found {
            return match self.path.is_empty() {
                true => Ok(()),
                false => Err(PathDefect::PathWithoutFound),
            };
        }
        let (Some(&first), Some(&last)) = (self.path.first(), self.path.last()) else {
            return Err(PathDefect::FoundWithoutPath);
        };
        if first != start {
            return Err(PathDefect::WrongStart(first));
        }
        if last != end {
            return Err(PathDefect::WrongEnd(last));
        }
        let mut seen = HashSet::with_capacity(self.path.len());
        for &pos in &self.path {
            if !grid.is_passable(pos) {
                return Err(PathDefect::NotPassable(pos));
            }
            if !seen.insert(pos) {
                return Err(PathDefect::Repeated(pos));
            }
        }
        if let Some(pair) = self
            .path
            .windows(2)
            .find(|pair| !pair[0].is_adjacent(pair[1], diagonal))
        {
            return Err(PathDefect::NotAdjacent(pair[0], pair[1]));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::CellState;

    fn found(path: Vec<(u16, u16)>) -> SearchResult {
        let path: Vec<Position> = path.into_iter().map(Position::from).collect();
        SearchResult {
            visited: path.iter().copied().collect(),
            nodes_explored: path.len(),
            path,
            elapsed: Duration::ZERO,
            found: true,
            termination: Termination::Found,
        }
    }

    #[test]
    fn test_validate_accepts_good_path() {
        let grid = Grid::new(2, 2, CellState::Open).unwrap();
        let result = found(vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(
            result.validate(&grid, Position::new(0, 0), Position::new(1, 1), false),
            Ok(())
        );
        assert_eq!(result.steps(), 2);
    }

    #[test]
    fn test_validate_rejects_defects() {
        let mut grid = Grid::new(2, 2, CellState::Open).unwrap();
        let (start, end) = (Position::new(0, 0), Position::new(1, 1));

        let diagonal = found(vec![(0, 0), (1, 1)]);
        assert_eq!(
            diagonal.validate(&grid, start, end, false),
            Err(PathDefect::NotAdjacent(start, end))
        );
        assert_eq!(diagonal.validate(&grid, start, end, true), Ok(()));

        let looped = found(vec![(0, 0), (0, 1), (0, 0), (1, 0), (1, 1)]);
        assert_eq!(
            looped.validate(&grid, start, end, false),
            Err(PathDefect::Repeated(start))
        );

        let wrong_end = found(vec![(0, 0), (0, 1)]);
        assert_eq!(
            wrong_end.validate(&grid, start, end, false),
            Err(PathDefect::WrongEnd(Position::new(0, 1)))
        );

        grid.set(Position::new(0, 1), CellState::Wall);
        let through_wall = found(vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(
            through_wall.validate(&grid, start, end, false),
            Err(PathDefect::NotPassable(Position::new(0, 1)))
        );

        let mut empty = found(vec![]);
        assert_eq!(
            empty.validate(&grid, start, end, false),
            Err(PathDefect::FoundWithoutPath)
        );
        empty.found = false;
        assert_eq!(empty.validate(&grid, start, end, false), Ok(()));
    }
}
