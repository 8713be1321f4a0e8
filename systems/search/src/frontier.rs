//! Min-priority frontier with first-in-first-out tie-breaking.

use std::{cmp::Ordering, collections::BinaryHeap};

use tower_route_core::CellCoord;

/// Priority queue of discovered cells awaiting expansion.
///
/// Entries are ordered by priority ascending. Entries sharing a priority pop
/// in the order they were pushed, tracked by a monotonically increasing
/// sequence number. Stale entries for cells that were later relaxed are kept.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_sequence: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, priority: u64, cell: CellCoord) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Entry {
            priority,
            sequence,
            cell,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<CellCoord> {
        self.heap.pop().map(|entry| entry.cell)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    priority: u64,
    sequence: u64,
    cell: CellCoord,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap surfaces the lowest priority, then the oldest entry.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
