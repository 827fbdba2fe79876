use std::collections::HashSet;

use super::queue::OpenList;
use super::{SearchResult, SolveOptions, Tally, Termination, Tree};
use crate::maze::{Grid, Position};

/// Greedy best-first search: always expands the cell that looks closest to the
/// goal, ignoring the distance already travelled.
///
/// Usually quick, but gives no shortest-path guarantee and is easily drawn into
/// dead ends that point towards the goal. Each cell is discovered and expanded
/// at most once.
pub fn solve_gbfs(
    grid: &Grid,
    start: Position,
    goal: Position,
    options: &SolveOptions,
) -> SearchResult {
    let heuristic = options.heuristic;
    let mut tally = Tally::new(options);
    let mut tree = Tree::new(start);
    let mut closed: HashSet<Position> = HashSet::new();
    let mut open = OpenList::default();
    open.push(start, heuristic.estimate(start, goal), 0.0, 0.0);

    while let Some(entry) = open.pop() {
        let current = entry.pos;
        if !closed.insert(current) {
            continue;
        }
        if !tally.try_expand() {
            return tally.finish(Termination::BudgetExhausted, tree.visited());
        }
        if current == goal {
            return tally.found(tree.path_to(goal), tree.visited());
        }
        for neighbor in grid.neighbors(current, options.allow_diagonal) {
            if tree.insert(neighbor, current) {
                open.push(neighbor, heuristic.estimate(neighbor, goal), 0.0, 0.0);
            }
        }
    }

    tally.finish(Termination::Exhausted, tree.visited())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::astar::solve_astar;

    #[test]
    fn test_never_shorter_than_astar() {
        // A wall separates the endpoints; both searches have to go around it.
        let grid: Grid = "
            ...........
            .#########.
            .#.......#.
            .#.#####.#.
            ...#...#...
            ####.#.####
            ....S#E....
        "
        .parse()
        .unwrap();
        let (start, goal) = (Position::new(6, 4), Position::new(6, 6));
        let options = SolveOptions::default();
        let gbfs = solve_gbfs(&grid, start, goal, &options);
        let astar = solve_astar(&grid, start, goal, &options);
        assert!(gbfs.found);
        assert!(astar.found);
        assert!(gbfs.steps() >= astar.steps());
        assert_eq!(gbfs.validate(&grid, start, goal, false), Ok(()));
    }

    #[test]
    fn test_direct_line_explores_only_the_line() {
        let grid: Grid = "
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        let (start, goal) = (Position::new(1, 0), Position::new(1, 7));
        let result = solve_gbfs(&grid, start, goal, &SolveOptions::default());
        assert_eq!(result.steps(), 7);
        assert_eq!(result.nodes_explored, 8);
    }
}
