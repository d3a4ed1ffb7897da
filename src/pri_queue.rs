//! Binary min-heap keyed by a floating-point priority.
//!
//! Used by the Held-Karp search to keep pending subproblems ordered by
//! lower bound. Ties are broken arbitrarily: insertion order is not
//! preserved.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    priority: f64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap yields the smallest priority first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
    }
}

/// A min-priority queue.
///
/// # Examples
///
/// ```
/// use u_tsp::pri_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new(4);
/// queue.push("b", 2.0);
/// queue.push("a", 1.0);
/// assert_eq!(queue.pop_min(), Some("a"));
/// assert_eq!(queue.pop_min(), Some("b"));
/// assert_eq!(queue.pop_min(), None);
/// ```
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T> PriorityQueue<T> {
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(initial_capacity),
        }
    }

    pub fn push(&mut self, item: T, priority: f64) {
        self.heap.push(Entry { priority, item });
    }

    /// Removes and returns the item with the smallest priority.
    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Like [`pop_min`](Self::pop_min), also returning the priority.
    pub fn pop_min_with_priority(&mut self) -> Option<(T, f64)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }

    /// The item with the smallest priority and that priority.
    pub fn peek_min(&self) -> Option<(&T, f64)> {
        self.heap.peek().map(|e| (&e.item, e.priority))
    }

    /// Moves every item of `other` into `self`, leaving `other` empty.
    pub fn merge(&mut self, other: &mut PriorityQueue<T>) {
        self.heap.append(&mut other.heap);
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new(0)
    }
}
