//! Read-only TSP instance.

use rand::Rng;

use super::city::City;
use super::point::{Metric, Point};
use crate::error::{Result, TspError};

/// Upper bound (inclusive) of the coordinates drawn by [`Instance::random`].
const RANDOM_COORD_MAX: i32 = 1000;

/// An indexed set of cities with a complete distance table.
///
/// # Examples
///
/// ```
/// use u_tsp::model::{Instance, Metric, Point};
///
/// let instance = Instance::from_points(
///     &[Point::new(0.0, 0.0), Point::new(3.0, 4.0)],
///     Metric::Euclidean,
/// );
/// assert_eq!(instance.size(), 2);
/// assert_eq!(instance.distance(0, 1).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    cities: Vec<City>,
    positioned: bool,
}

impl Instance {
    /// Builds a positioned instance, deriving every row from `metric`.
    pub fn from_points(points: &[Point], metric: Metric) -> Self {
        let cities = points
            .iter()
            .enumerate()
            .map(|(index, &p)| {
                let row = points.iter().map(|&q| metric.distance(p, q)).collect();
                City::new(index, Some(p), row)
            })
            .collect();
        Self {
            cities,
            positioned: true,
        }
    }

    /// Builds an instance from a raw distance matrix.
    ///
    /// The matrix may be asymmetric. Diagonal entries are ignored and
    /// stored as zero; every other entry must be finite and non-negative.
    pub fn from_matrix(matrix: Vec<Vec<f64>>) -> Result<Self> {
        let n = matrix.len();
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(TspError::invalid_matrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &d) in row.iter().enumerate() {
                if i != j && !(d.is_finite() && d >= 0.0) {
                    return Err(TspError::invalid_matrix(format!(
                        "entry ({i}, {j}) = {d} is not a finite non-negative distance"
                    )));
                }
            }
        }
        let cities = matrix
            .into_iter()
            .enumerate()
            .map(|(index, mut row)| {
                row[index] = 0.0;
                City::new(index, None, row)
            })
            .collect();
        Ok(Self {
            cities,
            positioned: false,
        })
    }

    /// Random positioned instance with integer coordinates in `[0, 1000]`.
    pub fn random<R: Rng>(n: usize, metric: Metric, rng: &mut R) -> Self {
        let points: Vec<Point> = (0..n)
            .map(|_| {
                Point::new(
                    rng.random_range(0..=RANDOM_COORD_MAX) as f64,
                    rng.random_range(0..=RANDOM_COORD_MAX) as f64,
                )
            })
            .collect();
        Self::from_points(&points, metric)
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Whether every city has a position.
    pub fn is_positioned(&self) -> bool {
        self.positioned
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, index: usize) -> Result<&City> {
        self.cities.get(index).ok_or(TspError::IndexOutOfRange {
            index,
            cities: self.size(),
        })
    }

    /// Checked distance from city `from` to city `to`.
    pub fn distance(&self, from: usize, to: usize) -> Result<f64> {
        self.city(from)?.distance(to)
    }

    /// Whether `distance(i, j) == distance(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.dist(i, j) == self.dist(j, i)))
    }

    #[inline]
    pub(crate) fn dist(&self, from: usize, to: usize) -> f64 {
        self.cities[from].dist(to)
    }

    /// Rejects empty instances and out-of-range start cities.
    pub(crate) fn check_start(&self, start: usize) -> Result<()> {
        if self.is_empty() {
            return Err(TspError::TooFewCities {
                cities: 0,
                required: 1,
            });
        }
        if start >= self.size() {
            return Err(TspError::StartCityOutOfRange {
                start,
                cities: self.size(),
            });
        }
        Ok(())
    }
}
