use std::collections::{HashMap, HashSet};

use super::queue::OpenList;
use super::{SearchResult, SolveOptions, Tally, Termination, Tree};
use crate::maze::{Grid, Position};

/// A* search ordered by `f = g + h`, ties broken towards lower `h`, then FIFO.
///
/// Every move costs one step, diagonal or not, so `g` is the step count and
/// the path has the fewest steps as long as the heuristic is admissible for
/// the movement rule. Stale heap entries (superseded by a shorter route, or
/// already closed) are skipped on pop instead of being updated in place.
pub fn solve_astar(
    grid: &Grid,
    start: Position,
    goal: Position,
    options: &SolveOptions,
) -> SearchResult {
    let heuristic = options.heuristic;
    if !heuristic.is_admissible(options.allow_diagonal) {
        tracing::warn!(
            "[astar] {} heuristic overestimates with diagonal moves, path may not have the fewest steps",
            heuristic
        );
    }

    let mut tally = Tally::new(options);
    let mut tree = Tree::new(start);
    let mut g_score: HashMap<Position, f64> = HashMap::from([(start, 0.0)]);
    let mut closed: HashSet<Position> = HashSet::new();
    let mut open = OpenList::default();

    let h = heuristic.estimate(start, goal);
    open.push(start, h, h, 0.0);

    while let Some(entry) = open.pop() {
        let current = entry.pos;
        let is_stale = closed.contains(&current)
            || g_score.get(&current).is_some_and(|&best| entry.g > best);
        if is_stale {
            continue;
        }
        if !tally.try_expand() {
            return tally.finish(Termination::BudgetExhausted, tree.visited());
        }
        if current == goal {
            return tally.found(tree.path_to(goal), tree.visited());
        }
        closed.insert(current);

        for neighbor in grid.neighbors(current, options.allow_diagonal) {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative = entry.g + 1.0;
            if g_score.get(&neighbor).is_some_and(|&g| tentative >= g) {
                continue;
            }
            g_score.insert(neighbor, tentative);
            tree.set_parent(neighbor, current);
            let h = heuristic.estimate(neighbor, goal);
            open.push(neighbor, tentative + h, h, tentative);
        }
    }

    tally.finish(Termination::Exhausted, tree.visited())
}
