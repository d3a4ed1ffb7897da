//! A single city and its distance row.

use super::point::Point;
use crate::error::{Result, TspError};

/// A city of an [`Instance`](super::Instance).
///
/// The index is assigned when the instance is built and never changes.
/// The distance row holds one entry per city of the instance; the entry at
/// the city's own index is unused.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    index: usize,
    position: Option<Point>,
    dists: Vec<f64>,
}

impl City {
    pub(crate) fn new(index: usize, position: Option<Point>, dists: Vec<f64>) -> Self {
        Self {
            index,
            position,
            dists,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Position of the city, if the instance was built from points.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Distance from this city to the city at `other`.
    pub fn distance(&self, other: usize) -> Result<f64> {
        self.dists
            .get(other)
            .copied()
            .ok_or(TspError::IndexOutOfRange {
                index: other,
                cities: self.dists.len(),
            })
    }

    /// Unchecked-by-contract lookup for the solvers' inner loops, which
    /// only ever iterate over `0..n`.
    #[inline]
    pub(crate) fn dist(&self, other: usize) -> f64 {
        self.dists[other]
    }

    pub(crate) fn row(&self) -> &[f64] {
        &self.dists
    }
}
