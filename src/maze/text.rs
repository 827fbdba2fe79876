//! Plain-text maze diagrams for fixtures and debugging output.
//!
//! One character per cell, one line per row: `#` wall, `.` open, `S` start,
//! `E` end, `*` path. This is a diagnostic format, not a stable file format.

use std::collections::HashSet;

use crate::error::MazeError;
use crate::solvers::SearchResult;

use super::{CellState, Grid, Position, Tile};

/// A parsed diagram: the grid plus any endpoints it marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub grid: Grid,
    pub start: Option<Position>,
    pub end: Option<Position>,
}

/// Parses a diagram. Blank lines and surrounding whitespace on each line are ignored.
pub fn parse(text: &str) -> Result<Diagram, MazeError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let expected = lines.first().map(|l| l.chars().count()).unwrap_or(0);
    let mut grid = Grid::new(lines.len(), expected, CellState::Open)?;
    let mut start = None;
    let mut end = None;

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != expected {
            return Err(MazeError::RaggedRow {
                row,
                found,
                expected,
            });
        }
        for (col, symbol) in line.chars().enumerate() {
            let pos = Position::new(row as u16, col as u16);
            let marker = match symbol {
                '#' => {
                    grid.set(pos, CellState::Wall);
                    continue;
                }
                '.' | '*' => continue,
                'S' => &mut start,
                'E' => &mut end,
                _ => return Err(MazeError::UnknownSymbol { symbol, row, col }),
            };
            if marker.replace(pos).is_some() {
                return Err(MazeError::DuplicateMarker { symbol });
            }
        }
    }

    Ok(Diagram { grid, start, end })
}

impl std::str::FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|d| d.grid)
    }
}

/// What to draw on top of the bare maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    pub start: Option<Position>,
    pub end: Option<Position>,
    pub result: Option<&'a SearchResult>,
}

impl<'a> Overlay<'a> {
    pub fn endpoints(start: Position, end: Position) -> Self {
        Overlay {
            start: Some(start),
            end: Some(end),
            result: None,
        }
    }

    pub fn with_result(mut self, result: &'a SearchResult) -> Self {
        self.result = Some(result);
        self
    }
}

/// Resolves every cell of `grid` to the tile drawn for it, row by row.
pub fn tiles(grid: &Grid, overlay: &Overlay<'_>) -> Vec<Vec<Tile>> {
    let on_path: HashSet<Position> = overlay
        .result
        .map(|r| r.path.iter().copied().collect())
        .unwrap_or_default();
    let visited = overlay.result.map(|r| &r.visited);

    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let pos = Position::new(row, col);
                    if overlay.start == Some(pos) {
                        Tile::Start
                    } else if overlay.end == Some(pos) {
                        Tile::End
                    } else if on_path.contains(&pos) {
                        Tile::Path
                    } else if visited.is_some_and(|v| v.contains(&pos)) {
                        Tile::Visited
                    } else {
                        Tile::from(grid[pos])
                    }
                })
                .collect()
        })
        .collect()
}

/// Renders the plain diagram, one line per row with a trailing newline.
pub fn render(grid: &Grid, overlay: &Overlay<'_>) -> String {
    let mut out = String::with_capacity((grid.cols() as usize + 1) * grid.rows() as usize);
    for row in tiles(grid, overlay) {
        out.extend(row.iter().map(|t| t.symbol()));
        out.push('\n');
    }
    out
}

/// Renders the diagram with terminal colours; visited cells are highlighted.
pub fn render_styled(grid: &Grid, overlay: &Overlay<'_>) -> String {
    let mut out = String::new();
    for row in tiles(grid, overlay) {
        out.extend(row.iter().map(Tile::to_string));
        out.push('\n');
    }
    out
}
