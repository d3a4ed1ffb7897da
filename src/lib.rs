//! Traveling Salesman Problem solver engine.
//!
//! Finds a short closed tour through every city of an [`Instance`],
//! starting and ending at a chosen city. Instances come from 2D points
//! (Euclidean or Manhattan distance) or from a raw distance matrix.
//!
//! - **Greedy constructors**: Nearest Neighbour and Minimum Spanning Tree
//!   pre-order walk. O(n²), not exact.
//! - **Exhaustive search**: recursive backtracking, iterative Heap's
//!   enumeration and a multi-threaded variant partitioned on the second
//!   city. O(n!), exact.
//! - **Branch-and-bound**: depth-first search pruned on the fixed prefix,
//!   optionally seeded with the greedy tours.
//! - **Held-Karp branch-and-bound**: best-first search bounded by
//!   Lagrangian one-tree relaxations.
//!
//! [`Algorithm`] enumerates every solver; [`Map`] caches one run per
//! algorithm for a start city.
//!
//! # Examples
//!
//! ```
//! use u_tsp::{Algorithm, SolverConfig};
//! use u_tsp::model::{Instance, Metric, Point};
//!
//! let instance = Instance::from_points(
//!     &[
//!         Point::new(0.0, 0.0),
//!         Point::new(1.0, 0.0),
//!         Point::new(1.0, 1.0),
//!         Point::new(0.0, 1.0),
//!     ],
//!     Metric::Euclidean,
//! );
//! let config = SolverConfig::default();
//! for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_exact()) {
//!     let solution = algorithm.solve(&instance, 0, &config).unwrap();
//!     assert!((solution.length - 4.0).abs() < 1e-9);
//! }
//! ```

pub mod algorithm;
pub mod error;
pub mod exhaustive;
pub mod greedy;
pub mod held_karp;
pub mod map;
pub mod model;
pub mod pri_queue;
pub mod solution;
pub mod tour;
pub mod tree;
pub mod trial;

#[cfg(test)]
mod test_support;

pub use algorithm::{Algorithm, SolverConfig};
pub use error::{Result, TspError};
pub use map::{Map, Run};
pub use model::{Instance, Metric, Point};
pub use solution::Solution;
pub use tour::{tour_length, tour_length_from_indices, Tour};
