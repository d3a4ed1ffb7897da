//! Nearest Neighbour construction.

use crate::error::{Result, TspError};
use crate::model::Instance;
use crate::solution::{measure, Solution};

pub const NAME: &str = "Nearest Neighbour";

/// Builds a tour by repeatedly moving to the nearest unvisited city.
///
/// Ties go to the lowest city index.
///
/// # Examples
///
/// ```
/// use u_tsp::greedy::nearest_neighbour;
/// use u_tsp::model::{Instance, Metric, Point};
///
/// let instance = Instance::from_points(
///     &[Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(1.0, 0.0)],
///     Metric::Euclidean,
/// );
/// let solution = nearest_neighbour::solve(&instance, 0).unwrap();
/// assert_eq!(solution.tour.as_slice(), &[0, 2, 1, 0]);
/// ```
pub fn solve(instance: &Instance, start: usize) -> Result<Solution> {
    measure(instance, start, NAME, || Ok((path(instance, start)?, 0)))
}

/// Closed nearest-neighbour path from `start`.
pub(crate) fn path(instance: &Instance, start: usize) -> Result<Vec<usize>> {
    let n = instance.size();
    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n + 1);
    visited[start] = true;
    path.push(start);

    let mut current = start;
    for _ in 1..n {
        let row = instance.cities()[current].row();
        let mut nearest: Option<(usize, f64)> = None;
        for (j, &d) in row.iter().enumerate() {
            if visited[j] {
                continue;
            }
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((j, d));
            }
        }
        let (next, _) = nearest.ok_or(TspError::Unreachable { from: current })?;
        visited[next] = true;
        path.push(next);
        current = next;
    }
    path.push(start);
    Ok(path)
}
