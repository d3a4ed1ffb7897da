//! Copy-on-fork excluded-edge mask.
//!
//! Each search node holds one row per vertex. Rows are reference counted:
//! a child shares every row with its parent except the two rows touched
//! by the edge it additionally excludes, which are copied before the
//! write. A row is dropped once the last node holding it is dropped.

use std::rc::Rc;

/// Symmetric n×n mask of edges forbidden in a subproblem.
#[derive(Debug, Clone)]
pub(crate) struct ExclusionSet {
    rows: Vec<Rc<Vec<bool>>>,
}

impl ExclusionSet {
    /// Mask with nothing excluded. Every row is a distinct allocation.
    pub fn new(n: usize) -> Self {
        Self {
            rows: (0..n).map(|_| Rc::new(vec![false; n])).collect(),
        }
    }

    /// A child mask with the edge `(i, j)` excluded in both directions.
    pub fn fork(&self, i: usize, j: usize) -> Self {
        let mut rows = self.rows.clone();
        Rc::make_mut(&mut rows[i])[j] = true;
        Rc::make_mut(&mut rows[j])[i] = true;
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn is_excluded(&self, i: usize, j: usize) -> bool {
        self.rows[i][j]
    }

    pub fn row(&self, i: usize) -> &[bool] {
        &self.rows[i]
    }

    /// Number of excluded undirected edges.
    pub fn len(&self) -> usize {
        let n = self.rows.len();
        (0..n)
            .map(|i| self.rows[i][i + 1..].iter().filter(|&&x| x).count())
            .sum()
    }

    /// Whether row `k` is the same allocation in both masks.
    #[cfg(test)]
    pub fn shares_row(&self, other: &Self, k: usize) -> bool {
        Rc::ptr_eq(&self.rows[k], &other.rows[k])
    }

    /// Live masks holding row `k`.
    #[cfg(test)]
    pub fn row_owners(&self, k: usize) -> usize {
        Rc::strong_count(&self.rows[k])
    }
}
