//! An instance with a start city and a per-algorithm result cache.

use std::time::Duration;

use log::debug;

use crate::algorithm::{Algorithm, SolverConfig};
use crate::error::{Result, TspError};
use crate::model::Instance;
use crate::tour::Tour;

/// One cached algorithm result, in the shape reporting layers consume.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    pub algorithm: Algorithm,
    pub tour: Tour,
    pub length: f64,
    pub elapsed: Duration,
}

/// A named instance, its start city and the tours computed from it.
///
/// Every cached tour is anchored at the current start city; changing the
/// start city clears the cache.
///
/// # Examples
///
/// ```
/// use u_tsp::{Algorithm, Map};
/// use u_tsp::model::{Instance, Metric, Point};
///
/// let instance = Instance::from_points(
///     &[Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 3.0), Point::new(0.0, 3.0)],
///     Metric::Euclidean,
/// );
/// let mut map = Map::new(instance).with_name("rectangle");
/// let runs = map
///     .execute(&[Algorithm::NearestNeighbour, Algorithm::HeldKarp], 0)
///     .unwrap();
/// assert_eq!(runs.len(), 2);
/// assert!((map.best_run().unwrap().length - 14.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Map {
    instance: Instance,
    name: Option<String>,
    start_city: usize,
    config: SolverConfig,
    runs: [Option<Run>; Algorithm::COUNT],
}

impl Map {
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            name: None,
            start_city: 0,
            config: SolverConfig::default(),
            runs: Default::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the solver configuration. Cached runs are kept.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn start_city(&self) -> usize {
        self.start_city
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Moves the start city, dropping every cached run if it changed.
    pub fn set_start_city(&mut self, start: usize) -> Result<()> {
        self.instance.check_start(start)?;
        if start != self.start_city {
            debug!("start city {} -> {start}, clearing cached runs", self.start_city);
            self.clear();
            self.start_city = start;
        }
        Ok(())
    }

    /// Runs every algorithm of `algorithms` without a cached result from
    /// `start`, then returns the runs in the requested order.
    ///
    /// Maps with fewer than two cities are rejected.
    pub fn execute(&mut self, algorithms: &[Algorithm], start: usize) -> Result<Vec<&Run>> {
        if self.instance.size() < 2 {
            return Err(TspError::TooFewCities {
                cities: self.instance.size(),
                required: 2,
            });
        }
        self.config.validate()?;
        self.set_start_city(start)?;

        for algorithm in Algorithm::ALL {
            if !algorithms.contains(&algorithm) || self.runs[algorithm.slot()].is_some() {
                continue;
            }
            let solution = algorithm.solve(&self.instance, start, &self.config)?;
            self.runs[algorithm.slot()] = Some(Run {
                algorithm,
                tour: solution.tour,
                length: solution.length,
                elapsed: solution.elapsed,
            });
        }

        algorithms
            .iter()
            .map(|a| self.runs[a.slot()].as_ref().ok_or(TspError::NoTour))
            .collect()
    }

    /// The cached run of `algorithm`, if any.
    pub fn run(&self, algorithm: Algorithm) -> Option<&Run> {
        self.runs[algorithm.slot()].as_ref()
    }

    /// Cached runs in slot order.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter().flatten()
    }

    /// The shortest cached run; the lowest slot wins ties.
    pub fn best_run(&self) -> Option<&Run> {
        let mut best: Option<&Run> = None;
        for run in self.runs() {
            if best.is_none_or(|b| run.length < b.length) {
                best = Some(run);
            }
        }
        best
    }

    pub fn clear(&mut self) {
        self.runs = Default::default();
    }
}
