//! Branch-and-bound with Held-Karp relaxation.
//!
//! Each subproblem forbids a set of edges and is bounded by the cheapest
//! one-tree avoiding them, tightened by a Lagrangian subgradient ascent on
//! per-vertex multipliers. Subproblems are expanded best-first from a
//! priority queue ordered by bound. A subproblem whose one-tree is already
//! a tour becomes the incumbent. Otherwise the search branches on the
//! vertex with the smallest degree above two, with one child per incident
//! one-tree edge, each forbidding that edge.
//!
//! # References
//!
//! - Held & Karp (1970), "The Traveling-Salesman Problem and Minimum
//!   Spanning Trees"
//! - Held & Karp (1971), "The Traveling-Salesman Problem and Minimum
//!   Spanning Trees: Part II"

mod config;
mod exclusion;
mod relaxation;
mod search;

pub use config::HeldKarpConfig;
pub use search::{root_lower_bound, solve, solve_with, NAME};
