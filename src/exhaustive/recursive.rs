//! Recursive brute force.

use super::BestPath;
use crate::error::Result;
use crate::model::Instance;
use crate::solution::{measure, Solution};
use crate::tour::identity_path;

pub const NAME: &str = "Recursive Brute Force";

/// Exact tour by swap-based backtracking over positions `1..n`.
pub fn solve(instance: &Instance, start: usize) -> Result<Solution> {
    measure(instance, start, NAME, || {
        let n = instance.size();
        let mut path = identity_path(n, start);
        let mut best = BestPath::from_path(instance, path.clone());
        let mut explored = 0;
        permute(instance, &mut path, 1, &mut best, &mut explored);
        Ok((best.path, explored))
    })
}

fn permute(
    instance: &Instance,
    path: &mut [usize],
    begin: usize,
    best: &mut BestPath,
    explored: &mut u64,
) {
    let last = path.len() - 2;
    if begin == last {
        *explored += 1;
        best.offer(instance, path);
        return;
    }
    for i in begin..=last {
        path.swap(begin, i);
        permute(instance, path, begin + 1, best, explored);
        path.swap(begin, i);
    }
}
