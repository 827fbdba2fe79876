use rand::{SeedableRng, rngs::StdRng};

mod kruskal;
mod recur_backtrack;

use kruskal::randomized_kruskal;
use recur_backtrack::recursive_backtrack;

use crate::error::MazeError;
use crate::maze::{CellState, Grid, Position};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Maze carving algorithms. Both produce perfect mazes over the cells with
/// even coordinates; odd cells between two of them are the walls or passages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    #[default]
    RecurBacktrack,
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::RecurBacktrack, Generator::Kruskal];

    pub fn short_name(self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "backtrack",
            Generator::Kruskal => "kruskal",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Generator::ALL
            .into_iter()
            .find(|g| g.short_name() == needle)
            .ok_or_else(|| MazeError::UnknownName {
                kind: "generator",
                name: s.to_string(),
                expected: Generator::ALL.map(Generator::short_name).join(", "),
            })
    }
}

/// Generates a `rows` x `cols` maze by recursive backtracking.
pub fn generate(rows: usize, cols: usize, seed: Option<u64>) -> Result<Grid, MazeError> {
    generate_maze(rows, cols, Generator::RecurBacktrack, seed)
}

/// Generates a `rows` x `cols` maze with the chosen algorithm.
///
/// The top-left and bottom-right corners are always open afterwards. With one
/// even dimension the bottom-right corner is a passage cell next to a lattice
/// cell and stays reachable. With both dimensions even it sits at odd
/// coordinates whose only neighbors are passages leading off the grid, so it
/// is always cut off; that is logged and the maze is returned unchanged, and
/// solvers report the goal as unreachable.
pub fn generate_maze(
    rows: usize,
    cols: usize,
    generator: Generator,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(rows, cols, CellState::Wall)?;
    let mut rng = get_rng(seed);

    match generator {
        Generator::RecurBacktrack => recursive_backtrack(&mut grid, &mut rng),
        Generator::Kruskal => randomized_kruskal(&mut grid, &mut rng),
    }

    let start = Position::new(0, 0);
    let goal = Position::new(grid.rows() - 1, grid.cols() - 1);
    grid.set(start, CellState::Open);
    grid.set(goal, CellState::Open);

    if !grid.is_reachable(start, goal) {
        tracing::warn!(
            "[generate] {}x{} maze from {:?} (seed {:?}) leaves {} unreachable from {}",
            rows,
            cols,
            generator,
            seed,
            goal,
            start
        );
    }
    tracing::debug!(
        "[generate] {:?} carved {} open cells in a {}x{} grid",
        generator,
        grid.count_open(),
        rows,
        cols
    );
    Ok(grid)
}

/// Cell halfway between two lattice cells two steps apart.
fn between(a: Position, b: Position) -> Position {
    Position::new(
        a.row.min(b.row) + a.row.abs_diff(b.row) / 2,
        a.col.min(b.col) + a.col.abs_diff(b.col) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{SolveOptions, Strategy, Termination, solve};

    /// Lattice cells with even coordinates must form a tree through the odd
    /// passage cells: connected, and exactly one passage fewer than cells.
    /// Only meaningful for odd dimensions, where both corners lie on the lattice.
    fn assert_perfect(grid: &Grid) {
        let lattice: Vec<Position> = grid
            .positions()
            .filter(|p| p.row % 2 == 0 && p.col % 2 == 0)
            .collect();
        assert!(lattice.iter().all(|&p| grid.is_passable(p)));
        let passages = grid
            .open_cells()
            .filter(|p| (p.row % 2 == 1) != (p.col % 2 == 1))
            .count();
        assert_eq!(passages, lattice.len() - 1);
        assert!(grid.open_cells().all(|p| p.row % 2 == 0 || p.col % 2 == 0));
        let origin = lattice[0];
        assert!(lattice.iter().all(|&p| grid.is_reachable(origin, p)));
    }

    #[test]
    fn test_corners_always_open() {
        for generator in Generator::ALL {
            for seed in 0..25 {
                for (rows, cols) in [(1, 1), (2, 2), (5, 5), (6, 9), (10, 10), (15, 4)] {
                    let grid = generate_maze(rows, cols, generator, Some(seed)).unwrap();
                    assert!(grid.is_passable(Position::new(0, 0)));
                    assert!(grid.is_passable(Position::new(rows as u16 - 1, cols as u16 - 1)));
                }
            }
        }
    }

    #[test]
    fn test_goal_reachability_by_parity() {
        for generator in Generator::ALL {
            for seed in 0..10 {
                for (rows, cols, reachable) in [
                    (9, 11, true),
                    (10, 11, true),
                    (9, 12, true),
                    (10, 12, false),
                    (2, 2, false),
                ] {
                    let grid = generate_maze(rows, cols, generator, Some(seed)).unwrap();
                    let goal = Position::new(rows as u16 - 1, cols as u16 - 1);
                    assert_eq!(
                        grid.is_reachable(Position::new(0, 0), goal),
                        reachable,
                        "{rows}x{cols}, {generator}, seed {seed}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_even_by_even_maze_is_not_found() {
        let start = Position::new(0, 0);
        let goal = Position::new(9, 11);
        for generator in Generator::ALL {
            for seed in 0..5 {
                let grid = generate_maze(10, 12, generator, Some(seed)).unwrap();
                for strategy in Strategy::ALL {
                    let result = solve(&grid, start, goal, strategy, &SolveOptions::default());
                    assert!(!result.found, "{strategy}, {generator}, seed {seed}");
                    assert!(result.path.is_empty());
                    assert_eq!(result.termination, Termination::Exhausted);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        for generator in Generator::ALL {
            let a = generate_maze(31, 41, generator, Some(7)).unwrap();
            let b = generate_maze(31, 41, generator, Some(7)).unwrap();
            assert_eq!(a, b);
        }
        let c = generate(31, 41, Some(7)).unwrap();
        let d = generate(31, 41, Some(8)).unwrap();
        assert_ne!(c, d);
    }

    #[test]
    fn test_generated_mazes_are_perfect() {
        for generator in Generator::ALL {
            for seed in 0..20 {
                let grid = generate_maze(21, 17, generator, Some(seed)).unwrap();
                assert_perfect(&grid);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            generate(0, 5, Some(1)),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(generate_maze(5, 0, Generator::Kruskal, None).is_err());
    }

    #[test]
    fn test_unseeded_generation() {
        let grid = generate(9, 9, None).unwrap();
        assert!(grid.is_reachable(Position::new(0, 0), Position::new(8, 8)));
    }

    #[test]
    fn test_generator_names() {
        for generator in Generator::ALL {
            assert_eq!(generator.short_name().parse::<Generator>(), Ok(generator));
        }
        assert!("prim".parse::<Generator>().is_err());
    }

    #[test]
    fn test_between() {
        assert_eq!(
            between(Position::new(2, 4), Position::new(2, 2)),
            Position::new(2, 3)
        );
        assert_eq!(
            between(Position::new(0, 0), Position::new(2, 0)),
            Position::new(1, 0)
        );
    }
}
