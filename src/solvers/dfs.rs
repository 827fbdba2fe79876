use super::{SearchResult, SolveOptions, Tally, Termination, Tree};
use crate::maze::{Grid, Position};

/// Depth-first search over an explicit stack.
///
/// Returns *a* path, not necessarily the shortest one. Cells are marked when
/// pushed, so grids with cycles still terminate.
pub fn solve_dfs(
    grid: &Grid,
    start: Position,
    goal: Position,
    options: &SolveOptions,
) -> SearchResult {
    let mut tally = Tally::new(options);
    let mut tree = Tree::new(start);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !tally.try_expand() {
            return tally.finish(Termination::BudgetExhausted, tree.visited());
        }
        if current == goal {
            return tally.found(tree.path_to(goal), tree.visited());
        }
        for neighbor in grid.neighbors(current, options.allow_diagonal) {
            if tree.insert(neighbor, current) {
                stack.push(neighbor);
            }
        }
    }

    tally.finish(Termination::Exhausted, tree.visited())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::bfs::solve_bfs;

    #[test]
    fn test_may_return_longer_path_than_bfs() {
        // The last neighbor pushed (left) is explored first, so DFS wanders
        // around the long way while BFS goes straight up.
        let grid: Grid = "
            .....
            .###.
            .....
        "
        .parse()
        .unwrap();
        let (start, goal) = (Position::new(2, 4), Position::new(0, 4));
        let options = SolveOptions::default();
        let dfs = solve_dfs(&grid, start, goal, &options);
        let bfs = solve_bfs(&grid, start, goal, &options);
        assert!(dfs.found);
        assert_eq!(bfs.steps(), 2);
        assert_eq!(dfs.steps(), 10);
    }
}
