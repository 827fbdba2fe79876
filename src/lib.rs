//! Perfect-maze generation and interchangeable pathfinding strategies on a 2D grid.
//!
//! [`generators`] carves a [`maze::Grid`], [`solvers::solve`] runs one of the
//! [`solvers::Strategy`] variants between two cells and hands back a
//! [`solvers::SearchResult`]. [`app`] and [`maze::text`] hold the reporting
//! helpers used by the binaries.

pub mod app;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;

pub use error::MazeError;
pub use generators::{Generator, generate, generate_maze};
pub use maze::{CellState, Grid, Position};
pub use solvers::{Heuristic, SearchResult, SolveOptions, Strategy, Termination, solve};
