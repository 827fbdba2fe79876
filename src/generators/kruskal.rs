use rand::{rngs::StdRng, seq::SliceRandom};

use super::between;
use crate::maze::{CellState, Grid, Position};

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        // Iterative with path halving; lattices can hold millions of cells.
        let mut x = x;
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Wall edge between two adjacent lattice cells
#[derive(Clone, Copy)]
struct Edge {
    cell1: Position,
    cell2: Position,
}

/// Randomized Kruskal: knock down lattice walls in random order whenever they
/// separate two cells that are not yet connected.
pub fn randomized_kruskal(grid: &mut Grid, rng: &mut StdRng) {
    grid.fill(CellState::Wall);

    // Lattice cells sit on even coordinates
    let lattice_rows = grid.rows().div_ceil(2);
    let lattice_cols = grid.cols().div_ceil(2);
    let lattice = |r: u16, c: u16| Position::new(r * 2, c * 2);
    let index = |p: Position| (p.row / 2) as usize * lattice_cols as usize + (p.col / 2) as usize;

    (0..lattice_rows).for_each(|r| {
        (0..lattice_cols).for_each(|c| grid.set(lattice(r, c), CellState::Open));
    });

    // Initialize Union-Find for all lattice cells
    let mut uf = UnionFind::new(lattice_rows as usize * lattice_cols as usize);

    // Collect all possible edges (walls between adjacent lattice cells)
    let mut edges: Vec<Edge> = (0..lattice_rows)
        .flat_map(|r| (0..lattice_cols).map(move |c| (r, c)))
        .flat_map(|(r, c)| {
            [
                (c + 1 < lattice_cols).then(|| Edge {
                    cell1: lattice(r, c),
                    cell2: lattice(r, c + 1),
                }),
                (r + 1 < lattice_rows).then(|| Edge {
                    cell1: lattice(r, c),
                    cell2: lattice(r + 1, c),
                }),
            ]
        })
        .flatten()
        .collect();

    edges.shuffle(rng);

    // If cells are not yet connected, remove the wall between them
    for edge in edges {
        if uf.unite(index(edge.cell1), index(edge.cell2)) {
            grid.set(between(edge.cell1, edge.cell2), CellState::Open);
        }
    }
}
