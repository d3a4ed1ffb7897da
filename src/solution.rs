//! Solver output and the shared timing wrapper.

use std::time::{Duration, Instant};

use log::debug;

use crate::error::Result;
use crate::model::Instance;
use crate::tour::{tour_length, Tour};

/// Result of one solver call.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The tour, starting and ending at the requested start city.
    pub tour: Tour,

    /// Length of `tour`.
    pub length: f64,

    /// Wall-clock time spent in the solver.
    pub elapsed: Duration,

    /// Search nodes visited: permutations for brute force, recursion
    /// nodes for branch-and-bound, relaxed subproblems for Held-Karp,
    /// zero for the greedy constructors.
    pub explored: u64,
}

/// Validates `start`, short-circuits instances of one or two cities and
/// times `search`, which returns the closed path and the explored count.
pub(crate) fn measure<F>(instance: &Instance, start: usize, name: &str, search: F) -> Result<Solution>
where
    F: FnOnce() -> Result<(Vec<usize>, u64)>,
{
    instance.check_start(start)?;
    debug!("{name}: start n={} start={start}", instance.size());
    let started = Instant::now();
    let (tour, explored) = match Tour::trivial(instance, start) {
        Some(tour) => (tour, 0),
        None => {
            let (path, explored) = search()?;
            (Tour::from_path(path), explored)
        }
    };
    let elapsed = started.elapsed();
    let length = tour_length(instance, &tour);
    debug!(
        "{name}: n={} start={start} length={length:.3} explored={explored} elapsed={elapsed:?}",
        instance.size()
    );
    Ok(Solution {
        tour,
        length,
        elapsed,
        explored,
    })
}
