use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-priority queue of node indices keyed by tentative distance.
///
/// Decrease-key is done lazily: a node may be pushed several times and only the
/// first pop (the smallest key) is reported, later stale entries are skipped. Ties are
/// broken by node index, so the extraction order is deterministic.
#[derive(Debug)]
pub struct DistanceQueue {
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>>,

    /// Nodes whose distance is final
    settled: Vec<bool>,
}

impl DistanceQueue {
    /// Creates an empty queue for nodes `0..node_count`
    pub fn new(node_count: usize) -> Self {
        DistanceQueue {
            heap: BinaryHeap::with_capacity(node_count),
            settled: vec![false; node_count],
        }
    }

    /// Returns true if no entries are left, stale ones included
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `node` with a tentative distance; ignored once the node is settled.
    pub fn push(&mut self, node: usize, distance: f64) {
        if !self.settled[node] {
            self.heap.push(Reverse((OrderedFloat(distance), node)));
        }
    }

    /// Removes the unsettled node with the smallest distance and marks it settled.
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        while let Some(Reverse((distance, node))) = self.heap.pop() {
            if !self.settled[node] {
                self.settled[node] = true;
                return Some((node, distance.into_inner()));
            }
        }
        None
    }

    pub fn is_settled(&self, node: usize) -> bool {
        self.settled[node]
    }
}
