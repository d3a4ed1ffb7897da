//! Error type shared by every solver.

use std::collections::TryReserveError;

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum TspError {
    #[error("instance has {cities} cities, at least {required} required")]
    TooFewCities { cities: usize, required: usize },
    #[error("start city {start} out of range for {cities} cities")]
    StartCityOutOfRange { start: usize, cities: usize },
    #[error("city index {index} out of range for {cities} cities")]
    IndexOutOfRange { index: usize, cities: usize },
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
    #[error("worker pool failed: {0}")]
    WorkerPool(String),
    #[error("no unvisited city reachable from city {from}")]
    Unreachable { from: usize },
    #[error("search exhausted without a complete tour")]
    NoTour,
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Whether the error rejects the input before any algorithm ran.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::TooFewCities { .. }
                | Self::StartCityOutOfRange { .. }
                | Self::InvalidMatrix(_)
                | Self::InvalidConfig(_)
        )
    }
}

impl From<TryReserveError> for TspError {
    fn from(err: TryReserveError) -> Self {
        Self::ResourceExhausted(err.to_string())
    }
}
