//! One-tree lower bound with Lagrangian subgradient refinement.
//!
//! A one-tree is a spanning tree over vertices `1..n` plus the two
//! cheapest edges from vertex `0`. Every tour is a one-tree in which each
//! vertex has degree 2, so the cheapest one-tree under any multipliers
//! `π` bounds every tour from below once `2·Σπ` is subtracted:
//!
//! ```text
//! cost'(i, j) = d(i, j) + π[i] + π[j]
//! bound       = Σ cost'(one-tree edges) - 2·Σπ
//! ```
//!
//! The ascent moves `π` along the degree violations `deg(v) - 2`.

use log::trace;

use super::config::HeldKarpConfig;
use super::exclusion::ExclusionSet;
use crate::error::{Result, TspError};
use crate::model::Instance;

/// A relaxed subproblem.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub excluded: ExclusionSet,
    pub adjusted: Vec<f64>,
    pub degree: Vec<usize>,
    pub parent: Vec<usize>,
    pub lower_bound: f64,
}

impl SearchNode {
    /// Unrelaxed root: nothing excluded, zero multipliers.
    pub fn root(n: usize) -> Self {
        Self::with_exclusions(ExclusionSet::new(n))
    }

    fn with_exclusions(excluded: ExclusionSet) -> Self {
        let n = excluded.row_count();
        Self {
            excluded,
            adjusted: vec![0.0; n],
            degree: vec![0; n],
            parent: vec![0; n],
            lower_bound: f64::NEG_INFINITY,
        }
    }

    /// Unrelaxed child forbidding the edge `(i, j)`. Multipliers restart
    /// from zero.
    pub fn exclude(&self, i: usize, j: usize) -> Self {
        Self::with_exclusions(self.excluded.fork(i, j))
    }

    /// Vertex with the smallest degree above 2; the first one wins ties.
    /// `None` means the one-tree is a tour.
    pub fn branching_vertex(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (v, &d) in self.degree.iter().enumerate() {
            if d > 2 && best.is_none_or(|b| d < self.degree[b]) {
                best = Some(v);
            }
        }
        best
    }

    /// The Hamiltonian cycle of a tour-shaped one-tree, ending at `0`.
    pub fn cycle(&self) -> Option<Vec<usize>> {
        let n = self.parent.len();
        let mut cycle = Vec::with_capacity(n);
        let mut seen = vec![false; n];
        let mut v = 0;
        loop {
            v = self.parent[v];
            if seen[v] {
                return None;
            }
            seen[v] = true;
            cycle.push(v);
            if v == 0 {
                break;
            }
        }
        (cycle.len() == n).then_some(cycle)
    }
}

/// Relaxation engine with a reusable n×n adjusted-cost matrix.
pub(crate) struct Relaxation<'a> {
    instance: &'a Instance,
    config: &'a HeldKarpConfig,
    n: usize,
    cost: Vec<f64>,
}

impl<'a> Relaxation<'a> {
    /// Allocates the scratch matrix. Fails with
    /// [`TspError::ResourceExhausted`] if it cannot be reserved.
    pub fn new(instance: &'a Instance, config: &'a HeldKarpConfig) -> Result<Self> {
        let n = instance.size();
        Ok(Self {
            instance,
            config,
            n,
            cost: cost_matrix(n)?,
        })
    }

    /// Runs the subgradient ascent on `node`, stopping early once its
    /// bound reaches `incumbent`. Returns the number of one-trees built.
    pub fn relax(&mut self, node: &mut SearchNode, incumbent: f64) -> usize {
        let mut lambda = self.config.initial_lambda;
        let mut previous = f64::NEG_INFINITY;
        let mut iterations = 0;

        loop {
            self.one_tree(node);
            iterations += 1;
            let bound = node.lower_bound;

            if !(bound < incumbent) {
                break;
            }
            if bound <= previous {
                lambda *= self.config.lambda_decay;
            }
            previous = bound;

            let denom: usize = node.degree[1..]
                .iter()
                .map(|&d| {
                    let dev = d.abs_diff(2);
                    dev * dev
                })
                .sum();
            if denom == 0 {
                break;
            }
            if lambda <= self.config.min_lambda
                || (self.config.max_iterations > 0 && iterations >= self.config.max_iterations)
            {
                break;
            }

            let step = lambda * bound / denom as f64;
            for v in 1..self.n {
                node.adjusted[v] += step * (node.degree[v] as f64 - 2.0);
            }
        }
        trace!(
            "relaxed node: bound={:.6} iterations={iterations} excluded={}",
            node.lower_bound,
            node.excluded.len()
        );
        iterations
    }

    /// Builds the cheapest one-tree under the node's multipliers and
    /// exclusions, recording degrees, parents and the bound.
    pub fn one_tree(&mut self, node: &mut SearchNode) {
        let n = self.n;
        self.fill_costs(node);
        let cost = |i: usize, j: usize| self.cost[i * n + j];

        node.degree.fill(0);
        let mut total = 0.0;

        let (mut first, mut second) = if cost(0, 2) < cost(0, 1) { (2, 1) } else { (1, 2) };
        for j in 3..n {
            if cost(0, j) < cost(0, second) {
                if cost(0, j) < cost(0, first) {
                    second = first;
                    first = j;
                } else {
                    second = j;
                }
            }
        }

        total += cost(0, first);
        node.degree[0] += 1;
        node.degree[first] += 1;
        node.parent.fill(first);
        node.parent[first] = 0;

        let mut min_dist: Vec<f64> = self.cost[first * n..(first + 1) * n].to_vec();
        for _ in 2..n {
            let Some(mut i) = (1..n).find(|&v| node.degree[v] == 0) else {
                break;
            };
            for j in i + 1..n {
                if node.degree[j] == 0 && min_dist[j] < min_dist[i] {
                    i = j;
                }
            }
            let p = node.parent[i];
            total += cost(p, i);
            node.degree[p] += 1;
            node.degree[i] += 1;

            for j in 1..n {
                if node.degree[j] == 0 && cost(i, j) < min_dist[j] {
                    min_dist[j] = cost(i, j);
                    node.parent[j] = i;
                }
            }
        }

        total += cost(0, second);
        node.degree[0] += 1;
        node.degree[second] += 1;
        node.parent[0] = second;

        let penalty: f64 = node.adjusted.iter().sum();
        node.lower_bound = total - 2.0 * penalty;
    }

    fn fill_costs(&mut self, node: &SearchNode) {
        let n = self.n;
        for (i, city) in self.instance.cities().iter().enumerate() {
            let row = city.row();
            let excluded = node.excluded.row(i);
            let out = &mut self.cost[i * n..(i + 1) * n];
            for j in 0..n {
                out[j] = if excluded[j] || i == j {
                    f64::INFINITY
                } else {
                    row[j] + node.adjusted[i] + node.adjusted[j]
                };
            }
        }
    }
}

/// Zeroed n×n matrix, reserved fallibly.
fn cost_matrix(n: usize) -> Result<Vec<f64>> {
    let cells = n
        .checked_mul(n)
        .ok_or_else(|| TspError::ResourceExhausted(format!("{n}×{n} cost matrix")))?;
    let mut cost = Vec::new();
    cost.try_reserve_exact(cells)?;
    cost.resize(cells, 0.0);
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::recursive;
    use crate::test_support::{random_instance, unit_square};

    #[test]
    fn test_one_tree_of_square_is_the_perimeter() {
        let instance = unit_square();
        let config = HeldKarpConfig::default();
        let mut relaxation = Relaxation::new(&instance, &config).unwrap();
        let mut node = SearchNode::root(4);
        relaxation.one_tree(&mut node);

        assert!((node.lower_bound - 4.0).abs() < 1e-12);
        assert_eq!(node.degree, vec![2, 2, 2, 2]);
        assert_eq!(node.branching_vertex(), None);

        let cycle = node.cycle().unwrap();
        assert_eq!(cycle.len(), 4);
        assert_eq!(cycle[3], 0);
    }

    #[test]
    fn test_one_tree_bounds_the_optimum() {
        for seed in 0..5 {
            let instance = random_instance(8, seed);
            let optimum = recursive::solve(&instance, 0).unwrap().length;
            let config = HeldKarpConfig::default();
            let mut relaxation = Relaxation::new(&instance, &config).unwrap();

            let mut node = SearchNode::root(8);
            relaxation.one_tree(&mut node);
            let plain = node.lower_bound;
            assert!(plain <= optimum + 1e-9);

            relaxation.relax(&mut node, f64::INFINITY);
            assert!(node.lower_bound <= optimum + 1e-9, "seed {seed}");
        }
    }

    #[test]
    fn test_one_tree_has_n_edges() {
        let instance = random_instance(9, 3);
        let config = HeldKarpConfig::default();
        let mut relaxation = Relaxation::new(&instance, &config).unwrap();
        let mut node = SearchNode::root(9);
        relaxation.one_tree(&mut node);
        let degree_sum: usize = node.degree.iter().sum();
        assert_eq!(degree_sum, 18);
        assert_eq!(node.degree[0], 2);
    }

    #[test]
    fn test_excluded_edge_is_avoided() {
        let instance = unit_square();
        let config = HeldKarpConfig::default();
        let mut relaxation = Relaxation::new(&instance, &config).unwrap();
        let mut node = SearchNode::root(4).exclude(0, 1);
        relaxation.one_tree(&mut node);
        assert_ne!(node.parent[1], 0);
        assert_ne!(node.parent[0], 1);
        // Forced onto a diagonal.
        assert!(node.lower_bound > 4.0);
    }

    #[test]
    fn test_relax_stops_at_incumbent() {
        let instance = random_instance(8, 9);
        let config = HeldKarpConfig::default();
        let mut relaxation = Relaxation::new(&instance, &config).unwrap();
        let mut node = SearchNode::root(8);
        let iterations = relaxation.relax(&mut node, 0.0);
        assert_eq!(iterations, 1);
    }

    #[test]
    fn test_iteration_cap() {
        let instance = random_instance(10, 4);
        let config = HeldKarpConfig::default().with_max_iterations(3);
        let mut relaxation = Relaxation::new(&instance, &config).unwrap();
        let mut node = SearchNode::root(10);
        assert!(relaxation.relax(&mut node, f64::INFINITY) <= 3);
    }

    #[test]
    fn test_branching_vertex_picks_smallest_violation() {
        let mut node = SearchNode::root(5);
        node.degree = vec![2, 4, 3, 1, 3];
        assert_eq!(node.branching_vertex(), Some(2));
    }

    #[test]
    fn test_cost_matrix_reports_exhaustion() {
        assert_eq!(cost_matrix(3).unwrap(), vec![0.0; 9]);

        // n² overflows usize.
        let err = cost_matrix(usize::MAX).unwrap_err();
        assert!(matches!(err, TspError::ResourceExhausted(_)));

        // n² fits in usize but the byte size exceeds isize::MAX.
        let err = cost_matrix(1usize << (usize::BITS / 2 - 1)).unwrap_err();
        assert!(matches!(err, TspError::ResourceExhausted(_)));
    }
}
