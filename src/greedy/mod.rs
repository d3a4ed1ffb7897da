//! Greedy tour constructors.
//!
//! - **Nearest Neighbour**: always move to the closest unvisited city.
//! - **Minimum Spanning Tree**: pre-order walk of a Prim tree rooted at
//!   the start city. At most twice the optimum on metric instances.
//!
//! Both run in O(n²) and are deterministic for a given instance and start
//! city. They also seed the bound of
//! [`exhaustive::branch_bound::solve_seeded`](crate::exhaustive::branch_bound::solve_seeded).

pub mod nearest_neighbour;
pub mod spanning_tree;
