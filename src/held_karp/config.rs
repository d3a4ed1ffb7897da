//! Held-Karp relaxation parameters.

use crate::error::{Result, TspError};

/// Configuration of the Lagrangian subgradient ascent and the best-first
/// queue.
///
/// # Examples
///
/// ```
/// use u_tsp::held_karp::HeldKarpConfig;
///
/// let config = HeldKarpConfig::default()
///     .with_initial_lambda(0.2)
///     .with_lambda_decay(0.8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HeldKarpConfig {
    /// Starting step multiplier.
    pub initial_lambda: f64,

    /// Factor applied to the step multiplier when the bound stops
    /// improving. In (0, 1).
    pub lambda_decay: f64,

    /// The ascent stops once the step multiplier drops to this value.
    pub min_lambda: f64,

    /// Hard cap on one-tree evaluations per node. 0 = no limit.
    ///
    /// Any intermediate bound is valid, so hitting the cap only loosens
    /// the bound of that node.
    pub max_iterations: usize,

    /// Initial capacity of the node queues.
    pub queue_capacity: usize,
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self {
            initial_lambda: 0.1,
            lambda_decay: 0.9,
            min_lambda: 1e-6,
            max_iterations: 5000,
            queue_capacity: 11,
        }
    }
}

impl HeldKarpConfig {
    pub fn with_initial_lambda(mut self, lambda: f64) -> Self {
        self.initial_lambda = lambda;
        self
    }

    pub fn with_lambda_decay(mut self, decay: f64) -> Self {
        self.lambda_decay = decay;
        self
    }

    pub fn with_min_lambda(mut self, lambda: f64) -> Self {
        self.min_lambda = lambda;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_lambda > 0.0) {
            return Err(TspError::invalid_config("min_lambda must be positive"));
        }
        if !(self.initial_lambda > self.min_lambda) || !self.initial_lambda.is_finite() {
            return Err(TspError::invalid_config(
                "initial_lambda must be finite and greater than min_lambda",
            ));
        }
        if !(self.lambda_decay > 0.0 && self.lambda_decay < 1.0) {
            return Err(TspError::invalid_config(format!(
                "lambda_decay must be in (0, 1), got {}",
                self.lambda_decay
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = HeldKarpConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.queue_capacity, 11);
        assert!((config.initial_lambda - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_bad_lambdas() {
        assert!(HeldKarpConfig::default().with_min_lambda(0.0).validate().is_err());
        assert!(HeldKarpConfig::default().with_initial_lambda(1e-7).validate().is_err());
        assert!(HeldKarpConfig::default().with_initial_lambda(f64::NAN).validate().is_err());
        assert!(HeldKarpConfig::default().with_lambda_decay(1.0).validate().is_err());
        assert!(HeldKarpConfig::default().with_lambda_decay(0.0).validate().is_err());
    }

    #[test]
    fn test_error_is_configuration() {
        let err = HeldKarpConfig::default()
            .with_lambda_decay(1.5)
            .validate()
            .unwrap_err();
        assert!(err.is_configuration());
    }
}
