use std::collections::VecDeque;

use super::{SearchResult, SolveOptions, Tally, Termination, Tree};
use crate::maze::{Grid, Position};

/// One half of the search: its parent links and the layer waiting to be expanded.
struct Side {
    tree: Tree,
    frontier: VecDeque<Position>,
}

impl Side {
    fn new(root: Position) -> Self {
        Side {
            tree: Tree::new(root),
            frontier: VecDeque::from([root]),
        }
    }
}

/// An edge joining the two trees: `near` belongs to the side being expanded,
/// `far` (the meeting point) was already reached by the other side.
#[derive(Debug, Clone, Copy)]
struct Meeting {
    length: usize,
    near: Position,
    far: Position,
}

enum Layer {
    Met(Meeting),
    Continue,
    OutOfBudget,
}

/// Bidirectional breadth-first search, one tree rooted at each endpoint.
///
/// Each round expands one whole layer of whichever frontier is smaller. Once a
/// generated cell is already known to the other tree the layer is still
/// finished, and the shortest of the joins found in it wins. Layers are
/// complete when a join is first seen, so the result is a shortest path,
/// exactly as long as the one plain BFS returns.
pub fn solve_bidirectional_bfs(
    grid: &Grid,
    start: Position,
    goal: Position,
    options: &SolveOptions,
) -> SearchResult {
    let mut tally = Tally::new(options);
    let mut forward = Side::new(start);
    let mut backward = Side::new(goal);

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        let forward_turn = forward.frontier.len() <= backward.frontier.len();
        let (this, other) = if forward_turn {
            (&mut forward, &backward)
        } else {
            (&mut backward, &forward)
        };

        match expand_layer(grid, this, other, options.allow_diagonal, &mut tally) {
            Layer::Continue => {}
            Layer::OutOfBudget => {
                return tally.finish(
                    Termination::BudgetExhausted,
                    visited(&forward, &backward),
                );
            }
            Layer::Met(meeting) => {
                tracing::trace!(
                    "[bibfs] frontiers met at {} with length {}",
                    meeting.far,
                    meeting.length
                );
                // Order the join as (cell reached from start, cell reached from goal).
                let (head, tail) = match forward_turn {
                    true => (meeting.near, meeting.far),
                    false => (meeting.far, meeting.near),
                };
                let path = join(&forward.tree, head, &backward.tree, tail);
                return tally.found(path, visited(&forward, &backward));
            }
        }
    }

    tally.finish(Termination::Exhausted, visited(&forward, &backward))
}

fn expand_layer(
    grid: &Grid,
    this: &mut Side,
    other: &Side,
    diagonal: bool,
    tally: &mut Tally,
) -> Layer {
    let mut best: Option<Meeting> = None;
    let layer = std::mem::take(&mut this.frontier);

    for current in layer {
        if !tally.try_expand() {
            return Layer::OutOfBudget;
        }
        let depth = this.tree.depth(current).unwrap_or(0);
        for neighbor in grid.neighbors(current, diagonal) {
            if let Some(far_depth) = other.tree.depth(neighbor) {
                let length = depth + 1 + far_depth;
                if best.is_none_or(|b| length < b.length) {
                    best = Some(Meeting {
                        length,
                        near: current,
                        far: neighbor,
                    });
                }
                continue;
            }
            if this.tree.insert(neighbor, current) {
                this.frontier.push_back(neighbor);
            }
        }
    }

    match best {
        Some(meeting) => Layer::Met(meeting),
        None => Layer::Continue,
    }
}

/// Start-to-goal path through the edge `head -> tail`.
fn join(forward: &Tree, head: Position, backward: &Tree, tail: Position) -> Option<Vec<Position>> {
    let mut path = forward.path_to(head)?;
    let mut rest = backward.path_to(tail)?;
    rest.reverse();
    path.extend(rest);
    Some(path)
}

fn visited(forward: &Side, backward: &Side) -> std::collections::HashSet<Position> {
    let mut visited = forward.tree.visited();
    visited.extend(backward.tree.visited());
    visited
}
