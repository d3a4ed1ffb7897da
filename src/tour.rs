//! Closed tours and tour-length utilities.

use crate::error::{Result, TspError};
use crate::model::{City, Instance};

/// A closed tour over every city of an instance.
///
/// Holds exactly `n + 1` indices: each city appears once, except the
/// start city, which is both the first and the last element.
///
/// Deserialization goes through [`TryFrom<Vec<usize>>`], so a decoded tour
/// is checked the same way as one built with [`Tour::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>"))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Validates `path` against `instance` and wraps it.
    pub fn new(path: Vec<usize>, instance: &Instance) -> Result<Self> {
        validate(&path, instance.size())?;
        Ok(Self(path))
    }

    /// Wraps a path produced by a solver. Solvers only emit permutations,
    /// so validation is left to debug builds.
    pub(crate) fn from_path(path: Vec<usize>) -> Self {
        debug_assert!(
            validate(&path, path.len().saturating_sub(1)).is_ok(),
            "solver produced an invalid tour: {path:?}"
        );
        Self(path)
    }

    /// The only possible tour on instances of one or two cities.
    pub(crate) fn trivial(instance: &Instance, start: usize) -> Option<Self> {
        match instance.size() {
            1 => Some(Self(vec![start, start])),
            2 => Some(Self(vec![start, 1 - start, start])),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// The start (and end) city.
    pub fn start(&self) -> usize {
        self.0[0]
    }

    /// Number of entries, `n + 1`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cities of the tour in visiting order, start city repeated at the end.
    ///
    /// # Panics
    /// Panics if the tour holds a city index outside `instance`.
    pub fn cities<'a>(&'a self, instance: &'a Instance) -> impl Iterator<Item = &'a City> + 'a {
        self.0.iter().map(move |&i| &instance.cities()[i])
    }

    /// Total length of the tour on `instance`.
    ///
    /// # Panics
    /// Panics if the tour was not built for an instance of this size.
    pub fn length(&self, instance: &Instance) -> f64 {
        tour_length(instance, self)
    }

    /// The same cycle, traversed in the same direction, starting at `start`.
    pub fn rotated_to(&self, start: usize) -> Result<Self> {
        let n = self.0.len() - 1;
        let offset = self.0[..n]
            .iter()
            .position(|&c| c == start)
            .ok_or(TspError::IndexOutOfRange { index: start, cities: n })?;
        Ok(Self(rotate_cycle(&self.0[..n], offset)))
    }
}

/// Validates a path against its own length: `n + 1` entries covering
/// cities `0..n`.
impl TryFrom<Vec<usize>> for Tour {
    type Error = TspError;

    fn try_from(path: Vec<usize>) -> Result<Self> {
        validate(&path, path.len().saturating_sub(1))?;
        Ok(Self(path))
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Sum of the consecutive edges of `tour`, read from the cities' rows.
///
/// # Panics
/// Panics if `tour` does not hold `instance.size() + 1` entries. Use
/// [`tour_length_from_indices`] for paths of unknown origin.
pub fn tour_length(instance: &Instance, tour: &Tour) -> f64 {
    assert_eq!(
        tour.len(),
        instance.size() + 1,
        "tour does not match an instance of {} cities",
        instance.size()
    );
    let mut total = 0.0;
    let mut cities = tour.cities(instance);
    if let Some(mut prev) = cities.next() {
        for city in cities {
            total += prev.dist(city.index());
            prev = city;
        }
    }
    total
}

/// Length of a path given as raw indices, with checked lookups.
pub fn tour_length_from_indices(instance: &Instance, indices: &[usize]) -> Result<f64> {
    let mut total = 0.0;
    for w in indices.windows(2) {
        total += instance.distance(w[0], w[1])?;
    }
    Ok(total)
}

/// Unchecked variant for the search loops.
#[inline]
pub(crate) fn path_length(instance: &Instance, path: &[usize]) -> f64 {
    let mut total = 0.0;
    for w in path.windows(2) {
        total += instance.dist(w[0], w[1]);
    }
    total
}

/// Closes `cycle` after rotating it left by `offset`.
pub(crate) fn rotate_cycle(cycle: &[usize], offset: usize) -> Vec<usize> {
    let mut path = Vec::with_capacity(cycle.len() + 1);
    path.extend_from_slice(&cycle[offset..]);
    path.extend_from_slice(&cycle[..offset]);
    path.push(cycle[offset]);
    path
}

/// Identity permutation with `start` swapped to the front and appended.
pub(crate) fn identity_path(n: usize, start: usize) -> Vec<usize> {
    let mut path: Vec<usize> = (0..=n).collect();
    path.swap(0, start);
    path[n] = start;
    path
}

fn validate(path: &[usize], n: usize) -> Result<()> {
    if n == 0 || path.len() != n + 1 {
        return Err(TspError::invalid_config(format!(
            "tour has {} entries, expected {}",
            path.len(),
            n + 1
        )));
    }
    if path[0] != path[n] {
        return Err(TspError::invalid_config(format!(
            "tour starts at {} but ends at {}",
            path[0], path[n]
        )));
    }
    let mut seen = vec![false; n];
    for &city in &path[..n] {
        if city >= n {
            return Err(TspError::IndexOutOfRange { index: city, cities: n });
        }
        if seen[city] {
            return Err(TspError::invalid_config(format!("city {city} visited twice")));
        }
        seen[city] = true;
    }
    Ok(())
}
