//! Depth-first branch-and-bound over tour permutations.
//!
//! The search skeleton is the recursive brute force; a branch is cut as
//! soon as the length of its fixed prefix exceeds the incumbent. The
//! prefix ignores the unvisited suffix, so the bound is admissible on any
//! instance with non-negative distances.
//!
//! # Seeding
//!
//! [`solve`] starts from the identity permutation as incumbent.
//! [`solve_seeded`] starts from the shorter of the Nearest Neighbour and
//! Minimum Spanning Tree tours, which can only prune more.

use log::trace;

use super::BestPath;
use crate::error::Result;
use crate::greedy::{nearest_neighbour, spanning_tree};
use crate::model::Instance;
use crate::solution::{measure, Solution};
use crate::tour::{identity_path, path_length};

pub const NAME: &str = "Branch and Bound";
pub const SEEDED_NAME: &str = "Branch and Bound with NN-MST relaxation";

/// Pruning rule of the depth-first search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PruneBound {
    /// Cut a node when the length of its fixed prefix exceeds the
    /// incumbent.
    #[default]
    Weak,
    /// Also add the edge to each candidate and skip that candidate alone.
    Tight,
}

/// Branch-and-bound seeded with the identity permutation, weak bound.
pub fn solve(instance: &Instance, start: usize) -> Result<Solution> {
    solve_with(instance, start, PruneBound::Weak)
}

pub fn solve_with(instance: &Instance, start: usize, bound: PruneBound) -> Result<Solution> {
    measure(instance, start, NAME, || {
        let path = identity_path(instance.size(), start);
        let best = BestPath::from_path(instance, path.clone());
        Ok(search(instance, path, best, bound))
    })
}

/// Branch-and-bound seeded with the better greedy tour, weak bound.
pub fn solve_seeded(instance: &Instance, start: usize) -> Result<Solution> {
    solve_seeded_with(instance, start, PruneBound::Weak)
}

pub fn solve_seeded_with(instance: &Instance, start: usize, bound: PruneBound) -> Result<Solution> {
    measure(instance, start, SEEDED_NAME, || {
        let path = identity_path(instance.size(), start);
        let best = seed(instance, start, &path)?;
        Ok(search(instance, path, best, bound))
    })
}

/// Shorter of the two greedy tours. The identity permutation stays the
/// incumbent when it is strictly shorter than both.
fn seed(instance: &Instance, start: usize, identity: &[usize]) -> Result<BestPath> {
    let nn = BestPath::from_path(instance, nearest_neighbour::path(instance, start)?);
    let mst = BestPath::from_path(instance, spanning_tree::path(instance, start)?);
    let mut best = if mst.length < nn.length { mst } else { nn };
    let identity_length = path_length(instance, identity);
    if identity_length < best.length {
        best = BestPath {
            length: identity_length,
            path: identity.to_vec(),
        };
    }
    trace!("seed incumbent {:.3}", best.length);
    Ok(best)
}

fn search(instance: &Instance, mut path: Vec<usize>, mut best: BestPath, bound: PruneBound) -> (Vec<usize>, u64) {
    let mut explored = 0;
    let mut walk = Search {
        instance,
        bound,
        best: &mut best,
        explored: &mut explored,
    };
    walk.permute(&mut path, 1, 0.0);
    (best.path, explored)
}

struct Search<'a> {
    instance: &'a Instance,
    bound: PruneBound,
    best: &'a mut BestPath,
    explored: &'a mut u64,
}

impl Search<'_> {
    /// `prefix` is the length of `path[0..begin]`.
    fn permute(&mut self, path: &mut [usize], begin: usize, prefix: f64) {
        *self.explored += 1;
        let last = path.len() - 2;
        if begin == last {
            self.best.offer(self.instance, path);
            return;
        }
        if self.bound == PruneBound::Weak && prefix > self.best.length {
            return;
        }

        let from = path[begin - 1];
        for i in begin..=last {
            let step = self.instance.dist(from, path[i]);
            if self.bound == PruneBound::Tight && prefix + step > self.best.length {
                continue;
            }
            path.swap(begin, i);
            self.permute(path, begin + 1, prefix + step);
            path.swap(begin, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::recursive;
    use crate::test_support::{approx_eq, assert_valid_tour, random_instance, unit_square};
    use proptest::prelude::*;

    #[test]
    fn test_square_perimeter() {
        for bound in [PruneBound::Weak, PruneBound::Tight] {
            let plain = solve_with(&unit_square(), 0, bound).unwrap();
            let seeded = solve_seeded_with(&unit_square(), 0, bound).unwrap();
            assert!((plain.length - 4.0).abs() < 1e-12);
            assert!((seeded.length - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_matches_brute_force() {
        for seed in 0..6 {
            let instance = random_instance(8, seed);
            let start = (seed as usize) % 8;
            let exact = recursive::solve(&instance, start).unwrap();
            for bound in [PruneBound::Weak, PruneBound::Tight] {
                let plain = solve_with(&instance, start, bound).unwrap();
                let seeded = solve_seeded_with(&instance, start, bound).unwrap();
                assert_valid_tour(&instance, &plain.tour, start);
                assert_valid_tour(&instance, &seeded.tour, start);
                assert!(approx_eq(plain.length, exact.length), "seed {seed} {bound:?}");
                assert!(approx_eq(seeded.length, exact.length), "seed {seed} {bound:?}");
            }
        }
    }

    #[test]
    fn test_asymmetric_optimum() {
        let instance = Instance::from_matrix(vec![
            vec![0.0, 2.0, 9.0, 10.0],
            vec![1.0, 0.0, 6.0, 4.0],
            vec![15.0, 7.0, 0.0, 8.0],
            vec![6.0, 3.0, 12.0, 0.0],
        ])
        .unwrap();
        let solution = solve(&instance, 0).unwrap();
        assert_eq!(solution.tour.as_slice(), &[0, 2, 3, 1, 0]);
        assert!((solution.length - 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_pruning_cuts_the_tree() {
        // Fewer nodes than the brute force has leaves.
        let instance = random_instance(9, 11);
        let brute = recursive::solve(&instance, 0).unwrap();
        let bb = solve_seeded(&instance, 0).unwrap();
        assert!(bb.explored < brute.explored);
        assert!(approx_eq(bb.length, brute.length));
    }

    #[test]
    fn test_seed_never_worse_than_greedy() {
        let instance = random_instance(9, 5);
        let identity = identity_path(9, 4);
        let best = seed(&instance, 4, &identity).unwrap();
        let nn = nearest_neighbour::solve(&instance, 4).unwrap();
        let mst = spanning_tree::solve(&instance, 4).unwrap();
        assert!(best.length <= nn.length.min(mst.length));
        assert_eq!(best.path[0], 4);
        assert_eq!(best.path[9], 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_seeded_explores_no_more(seed in any::<u64>(), n in 3usize..9, start in 0usize..8) {
            let instance = random_instance(n, seed);
            let start = start % n;
            for bound in [PruneBound::Weak, PruneBound::Tight] {
                let plain = solve_with(&instance, start, bound).unwrap();
                let seeded = solve_seeded_with(&instance, start, bound).unwrap();
                prop_assert!(seeded.explored <= plain.explored);
                prop_assert!(approx_eq(seeded.length, plain.length));
            }
        }

        #[test]
        fn prop_tight_explores_no_more(seed in any::<u64>(), n in 3usize..9) {
            let instance = random_instance(n, seed);
            let weak = solve_with(&instance, 0, PruneBound::Weak).unwrap();
            let tight = solve_with(&instance, 0, PruneBound::Tight).unwrap();
            prop_assert!(tight.explored <= weak.explored);
            prop_assert!(approx_eq(tight.length, weak.length));
        }
    }
}
