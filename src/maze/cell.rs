use crossterm::style::{Color, Stylize};

use std::fmt;

/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Open,
    Wall,
}

impl CellState {
    pub fn is_open(self) -> bool {
        self == CellState::Open
    }
}

/// What a cell looks like in a diagram once a search result is laid over the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    /// Open cell touched by the search but not on the final path.
    Visited,
    Path,
    Start,
    End,
}

impl Tile {
    /// Plain diagram symbol. Visited cells print as open cells, so diagrams
    /// stay readable by [`crate::maze::text::parse`].
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open | Tile::Visited => '.',
            Tile::Path => '*',
            Tile::Start => 'S',
            Tile::End => 'E',
        }
    }
}

impl From<CellState> for Tile {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Open => Tile::Open,
            CellState::Wall => Tile::Wall,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol().to_string();
        let styled_symbol = match self {
            Tile::Wall => symbol.with(Color::DarkGrey),
            Tile::Open => symbol.with(Color::Reset),
            Tile::Visited => symbol.with(Color::Blue),
            Tile::Path => symbol.with(Color::Yellow),
            Tile::Start => symbol.with(Color::Green),
            Tile::End => symbol.with(Color::Red),
        };
        write!(f, "{}", styled_symbol)
    }
}
