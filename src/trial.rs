//! Averaged runs over random instances.

use std::time::Duration;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::algorithm::{Algorithm, SolverConfig};
use crate::error::{Result, TspError};
use crate::model::{Instance, Metric};

/// Size and count of the random instances of a trial.
///
/// # Examples
///
/// ```
/// use u_tsp::trial::{run_trials, TrialConfig};
/// use u_tsp::{Algorithm, SolverConfig};
///
/// let config = TrialConfig::default().with_cities(6).with_trials(3).with_seed(42);
/// let summaries = run_trials(
///     &[Algorithm::NearestNeighbour, Algorithm::HeldKarp],
///     &config,
///     &SolverConfig::default(),
/// )
/// .unwrap();
/// assert!(summaries[1].mean_length <= summaries[0].mean_length + 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct TrialConfig {
    /// Cities per instance.
    pub cities: usize,

    /// Number of instances.
    pub trials: usize,

    /// Distance between generated points.
    pub metric: Metric,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            cities: 8,
            trials: 10,
            metric: Metric::Euclidean,
            seed: None,
        }
    }
}

impl TrialConfig {
    pub fn with_cities(mut self, n: usize) -> Self {
        self.cities = n;
        self
    }

    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.cities < 2 {
            return Err(TspError::TooFewCities {
                cities: self.cities,
                required: 2,
            });
        }
        if self.trials == 0 {
            return Err(TspError::invalid_config("trials must be at least 1"));
        }
        Ok(())
    }
}

/// Means of one algorithm over every trial.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    pub algorithm: Algorithm,
    pub trials: usize,
    pub mean_length: f64,
    pub mean_elapsed: Duration,
}

/// Solves `config.trials` random instances from city 0 with every
/// algorithm of `algorithms`. Summaries come back in slot order.
pub fn run_trials(
    algorithms: &[Algorithm],
    config: &TrialConfig,
    solver: &SolverConfig,
) -> Result<Vec<TrialSummary>> {
    config.validate()?;
    solver.validate()?;

    let selected: Vec<Algorithm> = Algorithm::ALL
        .into_iter()
        .filter(|a| algorithms.contains(a))
        .collect();
    let mut length_sums = vec![0.0; selected.len()];
    let mut elapsed_sums = vec![Duration::ZERO; selected.len()];

    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
    for _ in 0..config.trials {
        let instance = Instance::random(config.cities, config.metric, &mut rng);
        for (k, algorithm) in selected.iter().enumerate() {
            let solution = algorithm.solve(&instance, 0, solver)?;
            length_sums[k] += solution.length;
            elapsed_sums[k] += solution.elapsed;
        }
    }

    let trials = config.trials as f64;
    let summaries: Vec<TrialSummary> = selected
        .into_iter()
        .zip(length_sums.into_iter().zip(elapsed_sums))
        .map(|(algorithm, (length, elapsed))| TrialSummary {
            algorithm,
            trials: config.trials,
            mean_length: length / trials,
            mean_elapsed: elapsed.div_f64(trials),
        })
        .collect();

    info!(
        "trials: {} instances of {} cities",
        config.trials, config.cities
    );
    for summary in &summaries {
        info!(
            "{}: {:.2} ({:?})",
            summary.algorithm, summary.mean_length, summary.mean_elapsed
        );
    }
    Ok(summaries)
}
