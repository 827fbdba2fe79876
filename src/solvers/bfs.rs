use std::collections::VecDeque;

use super::{SearchResult, SolveOptions, Tally, Termination, Tree};
use crate::maze::{Grid, Position};

/// Breadth-first search. Cells are marked when enqueued, so each is queued at
/// most once, and the first path to reach `goal` has the fewest steps.
pub fn solve_bfs(
    grid: &Grid,
    start: Position,
    goal: Position,
    options: &SolveOptions,
) -> SearchResult {
    let mut tally = Tally::new(options);
    let mut tree = Tree::new(start);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if !tally.try_expand() {
            return tally.finish(Termination::BudgetExhausted, tree.visited());
        }
        if current == goal {
            return tally.found(tree.path_to(goal), tree.visited());
        }
        for neighbor in grid.neighbors(current, options.allow_diagonal) {
            if tree.insert(neighbor, current) {
                queue.push_back(neighbor);
            }
        }
    }

    tally.finish(Termination::Exhausted, tree.visited())
}
