//! Min-priority queue shared by Dijkstra and A*.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Entry in the priority queue.
///
/// `seq` is the push counter. Equal priorities pop in push order, which
/// keeps search results reproducible.
struct Entry<N> {
    priority: f64,
    seq: u64,
    node: N,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Entry<N> {}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-queue keyed by `f64` priority, FIFO among ties.
pub(crate) struct MinQueue<N> {
    heap: BinaryHeap<Entry<N>>,
    next_seq: u64,
}

impl<N> MinQueue<N> {
    pub(crate) fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }

    pub(crate) fn push(&mut self, node: N, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, node });
    }

    /// Pops the entry with the lowest priority.
    pub(crate) fn pop(&mut self) -> Option<(N, f64)> {
        self.heap.pop().map(|e| (e.node, e.priority))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
