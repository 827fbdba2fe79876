mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod gbfs;
mod heuristic;
mod queue;
mod result;

use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::time::Instant;

use crate::error::MazeError;
use crate::maze::{Grid, Position};
use astar::solve_astar;
use bfs::solve_bfs;
use bidirectional::solve_bidirectional_bfs;
use dfs::solve_dfs;
use gbfs::solve_gbfs;

pub use heuristic::Heuristic;
pub use result::{PathDefect, SearchResult, Termination};

/// The closed set of search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    BidirectionalBfs,
    AStar,
    Gbfs,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::BidirectionalBfs,
        Strategy::AStar,
        Strategy::Gbfs,
    ];

    /// Short name accepted by [`FromStr`].
    pub fn short_name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::BidirectionalBfs => "bibfs",
            Strategy::AStar => "astar",
            Strategy::Gbfs => "gbfs",
        }
    }

    /// Whether the strategy always returns a path with the fewest steps.
    ///
    /// For A* this needs a heuristic admissible for the movement rule, see
    /// [`Heuristic::is_admissible`].
    pub fn is_optimal(self) -> bool {
        matches!(
            self,
            Strategy::Bfs | Strategy::BidirectionalBfs | Strategy::AStar
        )
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Strategy::Dfs => write!(f, "Depth-First Search (DFS)"),
            Strategy::BidirectionalBfs => write!(f, "Bidirectional BFS"),
            Strategy::AStar => write!(f, "A* Search"),
            Strategy::Gbfs => write!(f, "Greedy Best-First Search (GBFS)"),
        }
    }
}

impl FromStr for Strategy {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "bibfs" | "bidirectional" => Ok(Strategy::BidirectionalBfs),
            "astar" | "a*" => Ok(Strategy::AStar),
            "gbfs" | "greedy" => Ok(Strategy::Gbfs),
            _ => Err(MazeError::UnknownName {
                kind: "strategy",
                name: s.to_string(),
                expected: Strategy::ALL.map(Strategy::short_name).join(", "),
            }),
        }
    }
}

/// Per-query knobs shared by every strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Also step to the four diagonal neighbors.
    pub allow_diagonal: bool,
    /// Estimate used by A* and GBFS; ignored by the others.
    pub heuristic: Heuristic,
    /// Give up after expanding this many nodes.
    pub max_expansions: Option<usize>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            allow_diagonal: false,
            heuristic: Heuristic::Manhattan,
            max_expansions: None,
        }
    }
}

/// Finds a route from `start` to `end` with the chosen strategy.
///
/// Never fails: an invalid endpoint or an unreachable goal comes back as a
/// result with `found == false` and the matching [`Termination`]. Use
/// [`Grid::check_endpoint`] first to turn bad endpoints into an error.
pub fn solve(
    grid: &Grid,
    start: Position,
    end: Position,
    strategy: Strategy,
    options: &SolveOptions,
) -> SearchResult {
    if !grid.is_passable(start) || !grid.is_passable(end) {
        tracing::debug!(
            "[solve] {} rejected endpoints {} -> {}",
            strategy.short_name(),
            start,
            end
        );
        return SearchResult::not_found(Termination::InvalidEndpoint);
    }

    if start == end {
        let mut tally = Tally::new(options);
        tally.nodes_explored = 1;
        return tally.found(Some(vec![start]), HashSet::from([start]));
    }

    let result = match strategy {
        Strategy::Bfs => solve_bfs(grid, start, end, options),
        Strategy::Dfs => solve_dfs(grid, start, end, options),
        Strategy::BidirectionalBfs => solve_bidirectional_bfs(grid, start, end, options),
        Strategy::AStar => solve_astar(grid, start, end, options),
        Strategy::Gbfs => solve_gbfs(grid, start, end, options),
    };

    debug_assert_eq!(
        result.validate(grid, start, end, options.allow_diagonal),
        Ok(()),
        "{strategy} produced a malformed result"
    );
    tracing::debug!(
        "[solve] {} {} -> {}: {} after {} expansions, {} steps, {:?}",
        strategy.short_name(),
        start,
        end,
        result.termination,
        result.nodes_explored,
        result.steps(),
        result.elapsed
    );
    result
}

/// Timer, expansion counter and budget for one search call.
pub(crate) struct Tally {
    started: Instant,
    nodes_explored: usize,
    max_expansions: Option<usize>,
}

impl Tally {
    pub(crate) fn new(options: &SolveOptions) -> Self {
        Tally {
            started: Instant::now(),
            nodes_explored: 0,
            max_expansions: options.max_expansions,
        }
    }

    /// Counts one expansion. Returns `false` once the budget is spent.
    pub(crate) fn try_expand(&mut self) -> bool {
        if self
            .max_expansions
            .is_some_and(|max| self.nodes_explored >= max)
        {
            return false;
        }
        self.nodes_explored += 1;
        true
    }

    pub(crate) fn finish(self, termination: Termination, visited: HashSet<Position>) -> SearchResult {
        SearchResult {
            path: Vec::new(),
            visited,
            nodes_explored: self.nodes_explored,
            elapsed: self.started.elapsed(),
            found: false,
            termination,
        }
    }

    /// Wraps a reconstructed path. A missing path here means the parent links
    /// are broken, which is a bug in the strategy.
    pub(crate) fn found(self, path: Option<Vec<Position>>, visited: HashSet<Position>) -> SearchResult {
        let Some(path) = path else {
            debug_assert!(false, "goal reached but its parent chain is broken");
            tracing::error!("[solve] goal reached but its parent chain is broken");
            return self.finish(Termination::Exhausted, visited);
        };
        SearchResult {
            path,
            visited,
            nodes_explored: self.nodes_explored,
            elapsed: self.started.elapsed(),
            found: true,
            termination: Termination::Found,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Link {
    parent: Option<Position>,
    depth: usize,
}

/// Parent links rooted at one endpoint, used for path reconstruction.
/// Every discovered cell has an entry; the root has no parent.
pub(crate) struct Tree {
    links: HashMap<Position, Link>,
}

impl Tree {
    pub(crate) fn new(root: Position) -> Self {
        Tree {
            links: HashMap::from([(
                root,
                Link {
                    parent: None,
                    depth: 0,
                },
            )]),
        }
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.links.contains_key(&pos)
    }

    /// Steps from the root to `pos` along parent links.
    pub(crate) fn depth(&self, pos: Position) -> Option<usize> {
        self.links.get(&pos).map(|l| l.depth)
    }

    /// Records `child` as reached from `parent` unless it was already known.
    /// Returns `true` if the child is new.
    pub(crate) fn insert(&mut self, child: Position, parent: Position) -> bool {
        if self.contains(child) {
            return false;
        }
        self.set_parent(child, parent);
        true
    }

    /// Points `child` at `parent`, replacing any existing link.
    pub(crate) fn set_parent(&mut self, child: Position, parent: Position) {
        debug_assert!(self.contains(parent), "parent {parent} is not in the tree");
        let depth = self.depth(parent).map_or(0, |d| d + 1);
        self.links.insert(
            child,
            Link {
                parent: Some(parent),
                depth,
            },
        );
    }

    /// The path from the root to `pos`, or `None` if `pos` is unknown or the
    /// chain does not lead back to the root.
    pub(crate) fn path_to(&self, pos: Position) -> Option<Vec<Position>> {
        let mut path = vec![pos];
        let mut link = *self.links.get(&pos)?;
        while let Some(parent) = link.parent {
            // A chain longer than the tree means a cycle.
            if path.len() > self.links.len() {
                return None;
            }
            path.push(parent);
            link = *self.links.get(&parent)?;
        }
        path.reverse();
        Some(path)
    }

    pub(crate) fn visited(&self) -> HashSet<Position> {
        self.links.keys().copied().collect()
    }
}
