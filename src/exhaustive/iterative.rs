//! Iterative brute force.
//!
//! Heap's enumeration driven by a counter array: each successive
//! permutation differs from the previous one by a single transposition,
//! and no recursion stack is needed.

use super::BestPath;
use crate::error::Result;
use crate::model::Instance;
use crate::solution::{measure, Solution};
use crate::tour::identity_path;

pub const NAME: &str = "Iterative Brute Force";

/// Exact tour by enumerating every ordering of the non-start cities.
pub fn solve(instance: &Instance, start: usize) -> Result<Solution> {
    measure(instance, start, NAME, || {
        let mut path = identity_path(instance.size(), start);
        let (best, explored) = enumerate(instance, &mut path, 1);
        Ok((best.path, explored))
    })
}

/// Enumerates every ordering of `path[offset..n]`, keeping the rest of the
/// closed path fixed. Returns the shortest path and the number of
/// permutations evaluated.
pub(crate) fn enumerate(instance: &Instance, path: &mut [usize], offset: usize) -> (BestPath, u64) {
    let mut best = BestPath::from_path(instance, path.to_vec());
    let mut explored = 1;
    heap_walk(path, offset, |permutation| {
        explored += 1;
        best.offer(instance, permutation);
    });
    (best, explored)
}

/// Heap's counter walk over `path[offset..n]`. `visit` sees every
/// permutation except the initial one, which the caller already holds.
fn heap_walk(path: &mut [usize], offset: usize, mut visit: impl FnMut(&[usize])) {
    let n = path.len() - 1;
    let len = n.saturating_sub(offset);
    let mut counter = vec![0usize; len];
    let mut i = 1;
    while i < len {
        if counter[i] < i {
            let j = if i % 2 == 1 { counter[i] } else { 0 };
            path.swap(offset + j, offset + i);
            visit(path);
            counter[i] += 1;
            i = 1;
        } else {
            counter[i] = 0;
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::recursive;
    use crate::test_support::{approx_eq, assert_valid_tour, random_instance, unit_square};
    use std::collections::HashSet;

    #[test]
    fn test_square_perimeter() {
        let solution = solve(&unit_square(), 1).unwrap();
        assert!((solution.length - 4.0).abs() < 1e-12);
        assert_valid_tour(&unit_square(), &solution.tour, 1);
    }

    #[test]
    fn test_visits_each_permutation_once() {
        let mut path = identity_path(6, 0);
        let mut seen = HashSet::new();
        seen.insert(path.clone());
        heap_walk(&mut path, 1, |permutation| {
            assert!(seen.insert(permutation.to_vec()), "repeated permutation {permutation:?}");
        });
        assert_eq!(seen.len(), 120);
        for permutation in &seen {
            assert_eq!((permutation[0], permutation[6]), (0, 0));
        }

        let (_, explored) = enumerate(&random_instance(6, 4), &mut identity_path(6, 0), 1);
        assert_eq!(explored, 120);
    }

    #[test]
    fn test_matches_recursive() {
        for seed in 0..5 {
            let instance = random_instance(7, seed);
            let a = solve(&instance, 3).unwrap();
            let b = recursive::solve(&instance, 3).unwrap();
            assert!(approx_eq(a.length, b.length), "seed {seed}: {} vs {}", a.length, b.length);
        }
    }

    #[test]
    fn test_offset_keeps_prefix_fixed() {
        let instance = random_instance(6, 8);
        let mut path = vec![0, 4, 1, 2, 3, 5, 0];
        let (best, explored) = enumerate(&instance, &mut path, 2);
        assert_eq!(explored, 24);
        assert_eq!(&best.path[..2], &[0, 4]);
        assert_eq!(best.path[6], 0);
    }
}
