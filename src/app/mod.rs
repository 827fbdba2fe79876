pub mod report;

use std::time::Duration;

use crate::{
    error::MazeError,
    generators::{Generator, generate_maze},
    maze::{Grid, Position},
    solvers::{SearchResult, SolveOptions, Strategy, solve},
};

/// Runs every strategy on the same query. Each result is independent and owned
/// by the caller.
pub fn compare(
    grid: &Grid,
    start: Position,
    end: Position,
    options: &SolveOptions,
) -> Vec<(Strategy, SearchResult)> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| (strategy, solve(grid, start, end, strategy, options)))
        .collect()
}

/// Settings for a batch of generate-then-solve runs.
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub rows: usize,
    pub cols: usize,
    pub generator: Generator,
    /// Number of mazes to generate.
    pub iterations: usize,
    /// Seed of the first maze; later mazes use consecutive seeds. `None` draws
    /// every maze from the OS RNG.
    pub seed: Option<u64>,
    pub options: SolveOptions,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            rows: 101,
            cols: 101,
            generator: Generator::RecurBacktrack,
            iterations: 20,
            seed: Some(0),
            options: SolveOptions::default(),
        }
    }
}

/// Totals for one strategy across a profiling batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyTotals {
    pub strategy: Strategy,
    pub runs: usize,
    pub found: usize,
    pub steps: usize,
    pub nodes_explored: usize,
    pub visited: usize,
    pub elapsed: Duration,
}

impl StrategyTotals {
    fn new(strategy: Strategy) -> Self {
        StrategyTotals {
            strategy,
            runs: 0,
            found: 0,
            steps: 0,
            nodes_explored: 0,
            visited: 0,
            elapsed: Duration::ZERO,
        }
    }

    fn record(&mut self, result: &SearchResult) {
        self.runs += 1;
        self.found += usize::from(result.found);
        self.steps += result.steps();
        self.nodes_explored += result.nodes_explored;
        self.visited += result.visited.len();
        self.elapsed += result.elapsed;
    }

    /// Mean expansions per run.
    pub fn mean_explored(&self) -> f64 {
        match self.runs {
            0 => 0.0,
            n => self.nodes_explored as f64 / n as f64,
        }
    }
}

/// Generates `config.iterations` mazes and solves each corner-to-corner with
/// every strategy.
pub fn profile(config: &ProfileConfig) -> Result<Vec<StrategyTotals>, MazeError> {
    let mut totals: Vec<StrategyTotals> =
        Strategy::ALL.into_iter().map(StrategyTotals::new).collect();

    tracing::info!(
        "[profile] {} mazes of {}x{} with {}",
        config.iterations,
        config.rows,
        config.cols,
        config.generator
    );

    for i in 0..config.iterations {
        let seed = config.seed.map(|s| s.wrapping_add(i as u64));
        let grid = generate_maze(config.rows, config.cols, config.generator, seed)?;
        let start = Position::new(0, 0);
        let end = Position::new(grid.rows() - 1, grid.cols() - 1);

        for (total, (_, result)) in totals
            .iter_mut()
            .zip(compare(&grid, start, end, &config.options))
        {
            total.record(&result);
        }
        tracing::debug!("[profile] finished maze {} (seed {:?})", i + 1, seed);
    }

    Ok(totals)
}
