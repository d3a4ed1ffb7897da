//! Minimum Spanning Tree tour.
//!
//! Grows a Prim tree from the start city without a heap: every step scans
//! the cheapest connection key of each city outside the tree, so the whole
//! construction is O(n²). The tour is the pre-order walk of the tree,
//! closed back at the start city.

use crate::error::Result;
use crate::model::Instance;
use crate::solution::{measure, Solution};
use crate::tree::Tree;

pub const NAME: &str = "Minimum Spanning Tree";

/// Builds the pre-order MST tour from `start`.
pub fn solve(instance: &Instance, start: usize) -> Result<Solution> {
    measure(instance, start, NAME, || Ok((path(instance, start)?, 0)))
}

/// Prim tree rooted at `start`.
pub fn spanning_tree(instance: &Instance, start: usize) -> Result<Tree> {
    instance.check_start(start)?;
    let n = instance.size();
    let mut tree = Tree::new(n);
    tree.insert(None, start)?;

    let mut key: Vec<f64> = instance.cities()[start].row().to_vec();
    let mut attach = vec![start; n];

    for _ in 1..n {
        let mut next: Option<usize> = None;
        for v in 0..n {
            if tree.contains(v) {
                continue;
            }
            if next.is_none_or(|u| key[v] < key[u]) {
                next = Some(v);
            }
        }
        let Some(v) = next else { break };
        tree.insert(Some(attach[v]), v)?;

        let row = instance.cities()[v].row();
        for u in 0..n {
            if !tree.contains(u) && row[u] < key[u] {
                key[u] = row[u];
                attach[u] = v;
            }
        }
    }
    Ok(tree)
}

pub(crate) fn path(instance: &Instance, start: usize) -> Result<Vec<usize>> {
    let mut path = spanning_tree(instance, start)?.preorder();
    path.push(start);
    Ok(path)
}
