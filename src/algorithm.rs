//! Algorithm registry and solver configuration.
//!
//! [`Algorithm`] is a fixed enum of every solver in the crate. Its
//! declaration order is the slot order of the result table kept by
//! [`Map`](crate::map::Map).

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TspError};
use crate::exhaustive::branch_bound::{self, PruneBound};
use crate::exhaustive::{iterative, recursive, threaded};
use crate::greedy::{nearest_neighbour, spanning_tree};
use crate::held_karp::{self, HeldKarpConfig};
use crate::model::Instance;
use crate::solution::Solution;

/// Every solver, in result-slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    NearestNeighbour,
    MinimumSpanningTree,
    IterativeBruteForce,
    BranchAndBound,
    RecursiveBruteForce,
    ThreadedBruteForce,
    SeededBranchAndBound,
    HeldKarp,
}

impl Algorithm {
    pub const COUNT: usize = 8;

    pub const ALL: [Algorithm; Self::COUNT] = [
        Algorithm::NearestNeighbour,
        Algorithm::MinimumSpanningTree,
        Algorithm::IterativeBruteForce,
        Algorithm::BranchAndBound,
        Algorithm::RecursiveBruteForce,
        Algorithm::ThreadedBruteForce,
        Algorithm::SeededBranchAndBound,
        Algorithm::HeldKarp,
    ];

    /// Index of this algorithm in [`ALL`](Self::ALL).
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::NearestNeighbour => nearest_neighbour::NAME,
            Algorithm::MinimumSpanningTree => spanning_tree::NAME,
            Algorithm::IterativeBruteForce => iterative::NAME,
            Algorithm::BranchAndBound => branch_bound::NAME,
            Algorithm::RecursiveBruteForce => recursive::NAME,
            Algorithm::ThreadedBruteForce => threaded::NAME,
            Algorithm::SeededBranchAndBound => branch_bound::SEEDED_NAME,
            Algorithm::HeldKarp => held_karp::NAME,
        }
    }

    /// Short identifier accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::NearestNeighbour => "nn",
            Algorithm::MinimumSpanningTree => "mst",
            Algorithm::IterativeBruteForce => "bf",
            Algorithm::BranchAndBound => "bb",
            Algorithm::RecursiveBruteForce => "bfr",
            Algorithm::ThreadedBruteForce => "bfmt",
            Algorithm::SeededBranchAndBound => "bbnnmst",
            Algorithm::HeldKarp => "bbhk",
        }
    }

    /// Whether the algorithm always returns a shortest tour.
    pub fn is_exact(self) -> bool {
        !matches!(self, Algorithm::NearestNeighbour | Algorithm::MinimumSpanningTree)
    }

    /// Runs the algorithm from `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::{Algorithm, SolverConfig};
    /// use u_tsp::model::{Instance, Metric, Point};
    ///
    /// let instance = Instance::from_points(
    ///     &[Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)],
    ///     Metric::Euclidean,
    /// );
    /// let solution = Algorithm::BranchAndBound
    ///     .solve(&instance, 0, &SolverConfig::default())
    ///     .unwrap();
    /// assert!((solution.length - 12.0).abs() < 1e-9);
    /// ```
    pub fn solve(self, instance: &Instance, start: usize, config: &SolverConfig) -> Result<Solution> {
        match self {
            Algorithm::NearestNeighbour => nearest_neighbour::solve(instance, start),
            Algorithm::MinimumSpanningTree => spanning_tree::solve(instance, start),
            Algorithm::IterativeBruteForce => iterative::solve(instance, start),
            Algorithm::BranchAndBound => branch_bound::solve_with(instance, start, config.prune),
            Algorithm::RecursiveBruteForce => recursive::solve(instance, start),
            Algorithm::ThreadedBruteForce => threaded::solve(instance, start),
            Algorithm::SeededBranchAndBound => {
                branch_bound::solve_seeded_with(instance, start, config.prune)
            }
            Algorithm::HeldKarp => held_karp::solve_with(instance, start, &config.held_karp),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().to_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| TspError::invalid_config(format!("unknown algorithm: {s}")))
    }
}

/// Knobs shared by every solver call.
///
/// # Examples
///
/// ```
/// use u_tsp::SolverConfig;
/// use u_tsp::exhaustive::branch_bound::PruneBound;
/// use u_tsp::held_karp::HeldKarpConfig;
///
/// let config = SolverConfig::default()
///     .with_prune(PruneBound::Tight)
///     .with_held_karp(HeldKarpConfig::default().with_max_iterations(1000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Pruning rule of both depth-first branch-and-bound variants.
    pub prune: PruneBound,

    /// Parameters of the Held-Karp search.
    pub held_karp: HeldKarpConfig,
}

impl SolverConfig {
    pub fn with_prune(mut self, prune: PruneBound) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_held_karp(mut self, held_karp: HeldKarpConfig) -> Self {
        self.held_karp = held_karp;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.held_karp.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metric, Point};
    use crate::test_support::{approx_eq, assert_valid_tour, random_instance, unit_square};
    use crate::tour::{tour_length, tour_length_from_indices};
    use proptest::prelude::*;

    #[test]
    fn test_slots_follow_all() {
        for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
            assert_eq!(algorithm.slot(), i);
        }
    }

    #[test]
    fn test_ids_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(" BBHK ".parse::<Algorithm>().unwrap(), Algorithm::HeldKarp);
        assert!("dijkstra".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Algorithm::ThreadedBruteForce.to_string(), "Multi-threaded Brute Force");
        assert_eq!(
            Algorithm::SeededBranchAndBound.to_string(),
            "Branch and Bound with NN-MST relaxation"
        );
    }

    #[test]
    fn test_exact_flags() {
        let exact: Vec<_> = Algorithm::ALL.into_iter().filter(|a| a.is_exact()).collect();
        assert_eq!(exact.len(), 6);
        assert!(!Algorithm::MinimumSpanningTree.is_exact());
    }

    #[test]
    fn test_square_scenario() {
        let config = SolverConfig::default();
        for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_exact()) {
            let solution = algorithm.solve(&unit_square(), 0, &config).unwrap();
            assert!((solution.length - 4.0).abs() < 1e-9, "{algorithm}");
        }
    }

    #[test]
    fn test_single_city_scenario() {
        let instance = Instance::from_points(&[Point::new(1.0, 1.0)], Metric::Euclidean);
        for algorithm in Algorithm::ALL {
            let solution = algorithm.solve(&instance, 0, &SolverConfig::default()).unwrap();
            assert_eq!(solution.tour.as_slice(), &[0, 0], "{algorithm}");
            assert_eq!(solution.length, 0.0);
        }
    }

    #[test]
    fn test_two_city_scenario() {
        let instance = Instance::from_matrix(vec![vec![0.0, 2.5], vec![2.5, 0.0]]).unwrap();
        for algorithm in Algorithm::ALL {
            let solution = algorithm.solve(&instance, 1, &SolverConfig::default()).unwrap();
            assert_eq!(solution.tour.as_slice(), &[1, 0, 1], "{algorithm}");
            assert!((solution.length - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_start_out_of_range() {
        for algorithm in Algorithm::ALL {
            let err = algorithm
                .solve(&unit_square(), 4, &SolverConfig::default())
                .unwrap_err();
            assert_eq!(err, TspError::StartCityOutOfRange { start: 4, cities: 4 });
        }
    }

    #[test]
    fn test_tight_prune_config_is_used() {
        let instance = random_instance(8, 17);
        let weak = Algorithm::BranchAndBound
            .solve(&instance, 0, &SolverConfig::default())
            .unwrap();
        let tight = Algorithm::BranchAndBound
            .solve(&instance, 0, &SolverConfig::default().with_prune(PruneBound::Tight))
            .unwrap();
        assert!(tight.explored <= weak.explored);
        assert!(approx_eq(tight.length, weak.length));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(12))]

        #[test]
        fn prop_every_algorithm_returns_a_valid_tour(seed in any::<u64>(), n in 1usize..8, start in 0usize..8) {
            let instance = random_instance(n, seed);
            let start = start % n;
            let config = SolverConfig::default();
            let mut optimum: Option<f64> = None;
            for algorithm in Algorithm::ALL {
                let solution = algorithm.solve(&instance, start, &config).unwrap();
                assert_valid_tour(&instance, &solution.tour, start);

                let by_edges = tour_length(&instance, &solution.tour);
                let by_index = tour_length_from_indices(&instance, solution.tour.as_slice()).unwrap();
                prop_assert_eq!(by_edges, by_index);

                if algorithm.is_exact() {
                    match optimum {
                        Some(best) => prop_assert!(approx_eq(best, solution.length), "{}", algorithm),
                        None => optimum = Some(solution.length),
                    }
                }
            }
            let optimum = optimum.unwrap_or_default();
            for algorithm in [Algorithm::NearestNeighbour, Algorithm::MinimumSpanningTree] {
                let solution = algorithm.solve(&instance, start, &config).unwrap();
                prop_assert!(solution.length + 1e-9 >= optimum);
            }
        }

        #[test]
        fn prop_rotation_preserves_length(seed in any::<u64>(), n in 3usize..8, to in 0usize..8) {
            let instance = random_instance(n, seed);
            let solution = Algorithm::NearestNeighbour
                .solve(&instance, 0, &SolverConfig::default())
                .unwrap();
            let rotated = solution.tour.rotated_to(to % n).unwrap();
            prop_assert_eq!(rotated.start(), to % n);
            prop_assert!(approx_eq(rotated.length(&instance), solution.length));
        }
    }
}
