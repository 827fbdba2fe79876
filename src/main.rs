use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use crossterm::style::{Attribute, Color, Stylize};

use mazeseek::{
    app::{self, report},
    generators::{Generator, generate_maze},
    logging,
    maze::{
        Grid, Position,
        text::{self, Overlay},
    },
    solvers::{Heuristic, SolveOptions, Strategy, solve},
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(version, about = "Generate perfect mazes and race pathfinding strategies through them")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Colour diagrams and tables
    #[arg(long, global = true)]
    color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a maze and print its diagram
    Generate(MazeArgs),
    /// Solve one query with a single strategy
    Solve {
        #[command(flatten)]
        maze: MazeArgs,
        #[command(flatten)]
        query: QueryArgs,
        /// Search strategy: bfs, dfs, bibfs, astar, gbfs
        #[arg(short, long, default_value = "astar")]
        strategy: Strategy,
    },
    /// Solve one query with every strategy and tabulate the results
    Compare {
        #[command(flatten)]
        maze: MazeArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args)]
struct MazeArgs {
    /// Read the maze from a diagram file (#, ., S, E) instead of generating one
    #[arg(long, conflicts_with_all = ["rows", "cols", "seed", "generator"])]
    maze: Option<PathBuf>,

    /// Grid rows; odd sizes keep both corners on the carved lattice
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 41)]
    cols: usize,

    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Generation algorithm: backtrack, kruskal
    #[arg(short, long, default_value = "backtrack")]
    generator: Generator,
}

#[derive(Args)]
struct QueryArgs {
    /// Start cell as ROW,COL (default: the diagram's S, else the top-left corner)
    #[arg(long, value_parser = parse_position)]
    from: Option<Position>,

    /// End cell as ROW,COL (default: the diagram's E, else the bottom-right corner)
    #[arg(long, value_parser = parse_position)]
    to: Option<Position>,

    /// Allow diagonal moves
    #[arg(long)]
    diagonal: bool,

    /// Heuristic for A* and GBFS: manhattan, euclidean, chebyshev, octile
    /// (default: manhattan, or chebyshev with --diagonal)
    #[arg(long)]
    heuristic: Option<Heuristic>,

    /// Stop after expanding this many nodes
    #[arg(long)]
    max_expansions: Option<usize>,
}

impl QueryArgs {
    fn options(&self) -> SolveOptions {
        let fallback = match self.diagonal {
            true => Heuristic::Chebyshev,
            false => Heuristic::Manhattan,
        };
        SolveOptions {
            allow_diagonal: self.diagonal,
            heuristic: self.heuristic.unwrap_or(fallback),
            max_expansions: self.max_expansions,
        }
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u16>()
            .map_err(|e| format!("invalid coordinate {v:?}: {e}"))
    };
    Ok(Position::new(parse(row)?, parse(col)?))
}

/// A maze plus the endpoints it suggests.
struct Loaded {
    grid: Grid,
    start: Position,
    end: Position,
}

fn load_maze(args: &MazeArgs) -> Result<Loaded, BoxError> {
    let (grid, start, end) = match &args.maze {
        Some(path) => {
            let diagram = text::parse(&std::fs::read_to_string(path)?)?;
            tracing::info!(
                "[cli] loaded {}x{} maze from {}",
                diagram.grid.rows(),
                diagram.grid.cols(),
                path.display()
            );
            (diagram.grid, diagram.start, diagram.end)
        }
        None => {
            let grid = generate_maze(args.rows, args.cols, args.generator, args.seed)?;
            (grid, None, None)
        }
    };
    let start = start.unwrap_or(Position::new(0, 0));
    let end = end.unwrap_or(Position::new(grid.rows() - 1, grid.cols() - 1));
    Ok(Loaded { grid, start, end })
}

/// Resolves the query's endpoints and rejects walls and out-of-bounds cells up front.
fn endpoints(
    loaded: &Loaded,
    query: &QueryArgs,
) -> Result<(Position, Position), mazeseek::MazeError> {
    let start = query.from.unwrap_or(loaded.start);
    let end = query.to.unwrap_or(loaded.end);
    loaded.grid.check_endpoint(start)?;
    loaded.grid.check_endpoint(end)?;
    Ok((start, end))
}

fn draw(grid: &Grid, overlay: &Overlay<'_>, color: bool) -> String {
    match color {
        true => text::render_styled(grid, overlay),
        false => text::render(grid, overlay),
    }
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    match &cli.command {
        Command::Generate(args) => {
            let loaded = load_maze(args)?;
            let overlay = Overlay::endpoints(loaded.start, loaded.end);
            print!("{}", draw(&loaded.grid, &overlay, cli.color));
        }
        Command::Solve {
            maze,
            query,
            strategy,
        } => {
            let loaded = load_maze(maze)?;
            let (start, end) = endpoints(&loaded, query)?;
            let result = solve(&loaded.grid, start, end, *strategy, &query.options());

            let overlay = Overlay::endpoints(start, end).with_result(&result);
            print!("{}", draw(&loaded.grid, &overlay, cli.color));

            let summary = match result.found {
                true => format!(
                    "{strategy}: {} steps, {} nodes explored, {} cells visited in {:?}",
                    result.steps(),
                    result.nodes_explored,
                    result.visited.len(),
                    result.elapsed
                ),
                false => format!(
                    "{strategy}: no path ({}) after {} nodes explored",
                    result.termination, result.nodes_explored
                ),
            };
            match (cli.color, result.found) {
                (true, true) => println!("{}", summary.with(Color::Green).attribute(Attribute::Bold)),
                (true, false) => println!("{}", summary.with(Color::Red).attribute(Attribute::Bold)),
                (false, _) => println!("{summary}"),
            }
        }
        Command::Compare { maze, query } => {
            let loaded = load_maze(maze)?;
            let (start, end) = endpoints(&loaded, query)?;
            let results = app::compare(&loaded.grid, start, end, &query.options());
            print!("{}", draw(&loaded.grid, &Overlay::endpoints(start, end), cli.color));
            println!();
            print!("{}", report::comparison_table(&results, cli.color));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3,4"), Ok(Position::new(3, 4)));
        assert_eq!(parse_position(" 0 , 12 "), Ok(Position::new(0, 12)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("-1,2").is_err());
    }

    #[test]
    fn test_diagonal_picks_chebyshev() {
        let cli = Cli::parse_from(["mazeseek", "compare", "--diagonal", "--seed", "5"]);
        let Command::Compare { query, maze } = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(query.options().heuristic, Heuristic::Chebyshev);
        assert!(query.options().allow_diagonal);
        assert_eq!(maze.seed, Some(5));
    }

    #[test]
    fn test_strategy_argument() {
        let cli = Cli::parse_from(["mazeseek", "solve", "-s", "bibfs", "--from", "0,0"]);
        let Command::Solve {
            strategy, query, ..
        } = cli.command
        else {
            panic!("expected solve");
        };
        assert_eq!(strategy, Strategy::BidirectionalBfs);
        assert_eq!(query.from, Some(Position::new(0, 0)));
        assert_eq!(query.options().heuristic, Heuristic::Manhattan);
    }

    #[test]
    fn test_endpoints_rejects_walls() {
        let diagram = text::parse("S#\n.E").unwrap();
        let loaded = Loaded {
            grid: diagram.grid,
            start: Position::new(0, 0),
            end: Position::new(1, 1),
        };
        let query = QueryArgs {
            from: Some(Position::new(0, 1)),
            to: None,
            diagonal: false,
            heuristic: None,
            max_expansions: None,
        };
        assert_eq!(
            endpoints(&loaded, &query),
            Err(mazeseek::MazeError::Blocked(Position::new(0, 1)))
        );
    }
}
