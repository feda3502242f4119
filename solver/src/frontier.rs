//! C4: the frontier. A min-priority queue of candidate nodes for one
//! search direction, dequeued in non-decreasing priority order, ties
//! broken deterministically by insertion order (FIFO). Access is
//! single-threaded between concurrent phases: the scheduler drains
//! and refills it only at round boundaries, so no internal locking is
//! needed here.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wikipath_base::Node;

struct Entry {
    node: Node,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.node.priority == other.node.priority && self.seq == other.seq
    }
}
impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse priority so the lowest
        // priority value sorts "greatest" and pops first. Ties broken by
        // earlier insertion (smaller seq) popping first.
        other.node.priority.cmp(&self.node.priority).then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Frontier { heap: BinaryHeap::new(), next_seq: 0 }
    }

    /// Priority is frozen at enqueue time (invariant 3); re-scoring on
    /// re-enqueue is not required and must not happen here.
    pub fn push(&mut self, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { node, seq });
    }

    pub fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|e| e.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drains up to `n` highest-priority (lowest-value) nodes, in
    /// non-decreasing priority order (C5 step 1).
    pub fn drain_top(&mut self, n: usize) -> Vec<Node> {
        let mut out = Vec::with_capacity(n.min(self.len()));
        for _ in 0..n {
            match self.pop() {
                Some(node) => out.push(node),
                None => break,
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikipath_base::SupportedLang;

    #[test]
    fn pops_in_non_decreasing_priority_order() {
        let mut f = Frontier::new();
        f.push(Node::with_priority(SupportedLang::En, "C", 30));
        f.push(Node::with_priority(SupportedLang::En, "A", 10));
        f.push(Node::with_priority(SupportedLang::En, "B", 20));

        assert_eq!(f.pop().unwrap().title, "A");
        assert_eq!(f.pop().unwrap().title, "B");
        assert_eq!(f.pop().unwrap().title, "C");
        assert!(f.pop().is_none());
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut f = Frontier::new();
        f.push(Node::with_priority(SupportedLang::En, "First", 10));
        f.push(Node::with_priority(SupportedLang::En, "Second", 10));
        assert_eq!(f.pop().unwrap().title, "First");
        assert_eq!(f.pop().unwrap().title, "Second");
    }

    #[test]
    fn drain_top_respects_cap() {
        let mut f = Frontier::new();
        for i in 0..5i32 {
            f.push(Node::with_priority(SupportedLang::En, format!("n{i}"), i));
        }
        let drained = f.drain_top(3);
        assert_eq!(drained.len(), 3);
        assert_eq!(f.len(), 2);
    }
}
