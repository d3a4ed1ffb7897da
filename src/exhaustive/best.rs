//! Incumbent bookkeeping shared by the exhaustive searches.

use crate::model::Instance;
use crate::tour::path_length;

/// Shortest complete path seen so far.
#[derive(Debug, Clone)]
pub(crate) struct BestPath {
    pub length: f64,
    pub path: Vec<usize>,
}

impl BestPath {
    /// Starts from `path` as the incumbent.
    pub fn from_path(instance: &Instance, path: Vec<usize>) -> Self {
        Self {
            length: path_length(instance, &path),
            path,
        }
    }

    /// Records `path` if it is strictly shorter than the incumbent.
    #[inline]
    pub fn offer(&mut self, instance: &Instance, path: &[usize]) {
        let length = path_length(instance, path);
        if length < self.length {
            self.length = length;
            self.path.copy_from_slice(path);
        }
    }
}
