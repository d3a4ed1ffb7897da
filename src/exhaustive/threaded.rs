//! Multi-threaded brute force.
//!
//! The permutation space is split by the city placed right after the
//! start: one partition per non-start city, one worker thread per
//! partition. Workers own their buffers and run the iterative enumeration
//! on positions `2..n`; the caller joins them all and keeps the shortest.

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::trace;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::iterative::enumerate;
use super::BestPath;
use crate::error::{Result, TspError};
use crate::model::Instance;
use crate::solution::{measure, Solution};
use crate::tour::identity_path;

pub const NAME: &str = "Multi-threaded Brute Force";

/// Exact tour using `n - 1` worker threads.
pub fn solve(instance: &Instance, start: usize) -> Result<Solution> {
    measure(instance, start, NAME, || {
        let n = instance.size();
        let base = identity_path(n, start);
        let partials = run_partitions(n - 1, |k| {
            let mut path = base.clone();
            path.swap(1, k);
            let partial = enumerate(instance, &mut path, 2);
            trace!("partition second={} best={:.3}", path[1], partial.0.length);
            partial
        })?;
        reduce(partials)
    })
}

/// Runs `task(k)` for every partition `k` in `1..=partitions`, one pool
/// thread each, and collects the results in partition order. A panicking
/// task fails the whole run.
fn run_partitions<T, F>(partitions: usize, task: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(partitions)
        .thread_name(|i| format!("tsp-brute-force-{i}"))
        .build()
        .map_err(|e| TspError::WorkerPool(e.to_string()))?;

    catch_unwind(AssertUnwindSafe(|| {
        pool.install(|| (1..=partitions).into_par_iter().map(&task).collect::<Vec<T>>())
    }))
    .map_err(|_| TspError::WorkerPool("a brute-force worker panicked".into()))
}

/// Linear reduction to the global minimum; the lowest partition wins ties.
fn reduce(partials: Vec<(BestPath, u64)>) -> Result<(Vec<usize>, u64)> {
    let mut explored = 0;
    let mut best: Option<BestPath> = None;
    for (partial, count) in partials {
        explored += count;
        if best.as_ref().is_none_or(|b| partial.length < b.length) {
            best = Some(partial);
        }
    }
    let best = best.ok_or_else(|| TspError::WorkerPool("no partition was searched".into()))?;
    Ok((best.path, explored))
}
