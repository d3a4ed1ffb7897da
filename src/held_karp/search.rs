//! Best-first branch-and-bound over one-tree relaxations.

use log::{trace, warn};

use super::config::HeldKarpConfig;
use super::relaxation::{Relaxation, SearchNode};
use crate::error::{Result, TspError};
use crate::model::Instance;
use crate::pri_queue::PriorityQueue;
use crate::solution::{measure, Solution};
use crate::tour::{path_length, rotate_cycle};

pub const NAME: &str = "Branch and Bound with Held-Karp relaxation";

/// Exact tour with the default relaxation parameters.
pub fn solve(instance: &Instance, start: usize) -> Result<Solution> {
    solve_with(instance, start, &HeldKarpConfig::default())
}

/// Exact tour on symmetric instances.
///
/// The one-tree relaxation assumes `d(i, j) == d(j, i)`. On asymmetric
/// instances the result is still a valid tour, but not necessarily the
/// shortest.
///
/// # Examples
///
/// ```
/// use u_tsp::held_karp::{self, HeldKarpConfig};
/// use u_tsp::model::{Instance, Metric, Point};
///
/// let square = Instance::from_points(
///     &[
///         Point::new(0.0, 0.0),
///         Point::new(1.0, 0.0),
///         Point::new(1.0, 1.0),
///         Point::new(0.0, 1.0),
///     ],
///     Metric::Euclidean,
/// );
/// let solution = held_karp::solve_with(&square, 0, &HeldKarpConfig::default()).unwrap();
/// assert!((solution.length - 4.0).abs() < 1e-9);
/// ```
pub fn solve_with(instance: &Instance, start: usize, config: &HeldKarpConfig) -> Result<Solution> {
    config.validate()?;
    measure(instance, start, NAME, || {
        if !instance.is_symmetric() {
            warn!("{NAME}: asymmetric instance, the tour may not be optimal");
        }
        let (cycle, explored) = search(instance, config)?;
        let offset = cycle
            .iter()
            .position(|&c| c == start)
            .ok_or(TspError::NoTour)?;
        Ok((rotate_cycle(&cycle, offset), explored))
    })
}

/// Bound of the relaxed root subproblem. Never exceeds the optimal tour
/// length on symmetric instances.
pub fn root_lower_bound(instance: &Instance, config: &HeldKarpConfig) -> Result<f64> {
    config.validate()?;
    instance.check_start(0)?;
    if instance.size() <= 2 {
        let path: Vec<usize> = (0..instance.size()).chain([0]).collect();
        return Ok(path_length(instance, &path));
    }
    let mut relaxation = Relaxation::new(instance, config)?;
    let mut root = SearchNode::root(instance.size());
    relaxation.relax(&mut root, f64::INFINITY);
    Ok(root.lower_bound)
}

/// Returns the optimal cycle ending at city 0 and the number of relaxed
/// nodes.
fn search(instance: &Instance, config: &HeldKarpConfig) -> Result<(Vec<usize>, u64)> {
    let n = instance.size();
    let mut relaxation = Relaxation::new(instance, config)?;

    let mut root = SearchNode::root(n);
    relaxation.relax(&mut root, f64::INFINITY);
    let mut explored: u64 = 1;

    let mut best: Option<SearchNode> = None;
    let mut best_bound = f64::INFINITY;
    let mut queue: PriorityQueue<SearchNode> = PriorityQueue::new(config.queue_capacity);

    let mut current = Some(root);
    while let Some(mut node) = current.take() {
        while node.lower_bound < best_bound {
            let Some(i) = node.branching_vertex() else {
                trace!("incumbent {:.6} after {explored} nodes", node.lower_bound);
                best_bound = node.lower_bound;
                best = Some(node);
                break;
            };

            let mut children = PriorityQueue::new(config.queue_capacity);
            let mut branch = |j: usize| {
                let mut child = node.exclude(i, j);
                relaxation.relax(&mut child, best_bound);
                let bound = child.lower_bound;
                children.push(child, bound);
            };
            branch(node.parent[i]);
            for j in 0..n {
                if node.parent[j] == i {
                    branch(j);
                }
            }
            explored += children.len() as u64;
            trace!("branched on vertex {i} into {} children", children.len());

            node = match children.pop_min() {
                Some(child) => child,
                None => break,
            };
            queue.merge(&mut children);
        }

        current = match queue.pop_min() {
            Some(next) if next.lower_bound < best_bound => Some(next),
            _ => None,
        };
    }

    let best = best.ok_or(TspError::NoTour)?;
    let cycle = best.cycle().ok_or(TspError::NoTour)?;
    Ok((cycle, explored))
}
