use std::{cmp::Ordering, collections::BinaryHeap};


/// Pending entry - ordered by priority, then by insertion sequence
#[derive(Debug)]
struct Entry<P> {
    priority: P,
    seq: u64,
    index: usize, // index of the node in the search's node map
}

// BinaryHeap is a max-heap, flip the ordering so the smallest priority pops first.
// Equal priorities pop in insertion order.
impl<P: Ord> Ord for Entry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<P: Ord> PartialOrd for Entry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<P: PartialEq> PartialEq for Entry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}
impl<P: PartialEq> Eq for Entry<P> {}


/// Min-priority frontier with FIFO tie-breaking
/// Stale entries are not removed on update - callers discard them on pop
#[derive(Debug)]
pub(crate) struct PriorityFrontier<P> {
    heap: BinaryHeap<Entry<P>>,
    next_seq: u64,
}

impl<P: Ord> PriorityFrontier<P> {

    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, priority: P, index: usize) {
        self.heap.push(Entry { priority, seq: self.next_seq, index });
        self.next_seq += 1;
    }

    /// Remove the entry with the lowest priority
    pub(crate) fn pop(&mut self) -> Option<(P, usize)> {
        self.heap.pop().map(|Entry { priority, index, .. }| (priority, index))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
