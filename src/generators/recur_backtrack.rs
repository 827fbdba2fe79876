use rand::{Rng, rngs::StdRng, seq::SliceRandom};

use super::between;
use crate::maze::{CellState, Grid, Position};

/// Two-step moves between lattice cells, as `(d_row, d_col)`.
const LATTICE_STEPS: [(i8, i8); 4] = [(2, 0), (0, 2), (-2, 0), (0, -2)];

/// A lattice cell being carved from, with its shuffled directions and how many
/// of them have been tried. Plays the role of one recursive call.
struct Frame {
    cell: Position,
    directions: [(i8, i8); 4],
    next: usize,
}

impl Frame {
    /// Enters `cell`: opens it and shuffles the order its neighbors will be tried in.
    fn enter(grid: &mut Grid, cell: Position, rng: &mut StdRng) -> Self {
        grid.set(cell, CellState::Open);
        let mut directions = LATTICE_STEPS;
        directions.shuffle(rng);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Lattice cell two steps from `from`, if it lies inside the grid.
fn two_steps(grid: &Grid, from: Position, (dr, dc): (i8, i8)) -> Option<Position> {
    let row = u16::try_from(i32::from(from.row) + i32::from(dr)).ok()?;
    let col = u16::try_from(i32::from(from.col) + i32::from(dc)).ok()?;
    let to = Position::new(row, col);
    grid.contains(to).then_some(to)
}

/// Randomized depth-first carving.
///
/// Each entered cell shuffles its four directions once, then tries them in that
/// order, descending into a neighbor as soon as one is still a wall and only
/// returning to try the next direction once that neighbor is exhausted. Frames
/// live on a heap-allocated stack, so large grids cannot overflow the call stack,
/// and the carve order is the same as the recursive formulation.
pub fn recursive_backtrack(grid: &mut Grid, rng: &mut StdRng) {
    grid.fill(CellState::Wall);

    // Initialize the starting point on a random lattice cell
    let start = Position::new(
        2 * rng.random_range(0..grid.rows().div_ceil(2)),
        2 * rng.random_range(0..grid.cols().div_ceil(2)),
    );

    let mut stack = vec![Frame::enter(grid, start, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = frame.directions.get(frame.next) else {
            // All four directions tried, backtrack
            stack.pop();
            continue;
        };
        frame.next += 1;
        let cell = frame.cell;

        let Some(neighbor) = two_steps(grid, cell, direction) else {
            continue;
        };
        if grid[neighbor] != CellState::Wall {
            continue;
        }
        // Carve the passage, then descend into the neighbor
        grid.set(between(cell, neighbor), CellState::Open);
        let child = Frame::enter(grid, neighbor, rng);
        stack.push(child);
    }
}
