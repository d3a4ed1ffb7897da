//! Exact search over tour permutations.
//!
//! Every variant pins the start city at positions `0` and `n` and searches
//! the orderings of the remaining `n - 1` cities:
//!
//! - [`recursive`]: swap-based backtracking, no pruning.
//! - [`iterative`]: Heap's counter-driven enumeration, no recursion.
//! - [`threaded`]: one worker per choice of the second city, then a
//!   linear reduction.
//! - [`branch_bound`]: backtracking that prunes on the length of the fixed
//!   prefix, optionally seeded with the greedy tours.
//!
//! All of them are O(n!) in the worst case.

pub mod branch_bound;
pub mod iterative;
pub mod recursive;
pub mod threaded;

mod best;

pub(crate) use best::BestPath;
