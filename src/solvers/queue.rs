use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::maze::Position;

/// An entry in the best-first open list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scored {
    pub pos: Position,
    /// Primary key, lowest first.
    pub priority: f64,
    /// Secondary key, lowest first.
    pub tie: f64,
    /// Cost from the start at the time of insertion, for stale-entry checks.
    pub g: f64,
    /// Insertion order, so equal keys pop first-in first-out.
    seq: u64,
}

impl PartialEq for Scored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scored {}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored {
    // Reversed so the max-heap pops the smallest keys.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.tie.total_cmp(&self.tie))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority frontier with deterministic tie-breaking. Entries are never
/// updated in place; superseded ones are skipped by the caller on pop.
#[derive(Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<Scored>,
    next_seq: u64,
}

impl OpenList {
    pub(crate) fn push(&mut self, pos: Position, priority: f64, tie: f64, g: f64) {
        self.heap.push(Scored {
            pos,
            priority,
            tie,
            g,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Scored> {
        self.heap.pop()
    }
}
