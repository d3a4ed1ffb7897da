//! Index-based arena tree over city indices.
//!
//! Vertices are inserted under an already-present parent; children keep
//! their insertion order, which fixes the pre-order traversal.

use crate::error::{Result, TspError};

#[derive(Debug, Clone)]
struct Node {
    vertex: usize,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// A rooted tree whose vertices are city indices in `0..capacity`.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    slot: Vec<Option<usize>>,
}

impl Tree {
    /// Creates an empty tree able to hold vertices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            slot: vec![None; capacity],
        }
    }

    /// Inserts `vertex` as the root (`parent == None`, tree must be empty)
    /// or as the last child of `parent`.
    pub fn insert(&mut self, parent: Option<usize>, vertex: usize) -> Result<()> {
        let capacity = self.slot.len();
        match self.slot.get(vertex) {
            None => return Err(TspError::IndexOutOfRange { index: vertex, cities: capacity }),
            Some(Some(_)) => {
                return Err(TspError::invalid_config(format!(
                    "vertex {vertex} already in tree"
                )))
            }
            Some(None) => {}
        }

        let parent_slot = match parent {
            None if self.nodes.is_empty() => None,
            None => return Err(TspError::invalid_config("tree already has a root")),
            Some(p) => Some(
                self.slot
                    .get(p)
                    .copied()
                    .flatten()
                    .ok_or(TspError::IndexOutOfRange { index: p, cities: capacity })?,
            ),
        };

        let id = self.nodes.len();
        self.nodes.push(Node {
            vertex,
            parent: parent_slot,
            children: Vec::new(),
        });
        self.slot[vertex] = Some(id);
        if let Some(p) = parent_slot {
            self.nodes[p].children.push(id);
        }
        Ok(())
    }

    pub fn root(&self) -> Option<usize> {
        self.nodes.first().map(|n| n.vertex)
    }

    pub fn contains(&self, vertex: usize) -> bool {
        matches!(self.slot.get(vertex), Some(Some(_)))
    }

    /// Parent vertex of `vertex`, `None` for the root or absent vertices.
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        let id = self.slot.get(vertex).copied().flatten()?;
        self.nodes[id].parent.map(|p| self.nodes[p].vertex)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Vertices in pre-order from the root.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        if self.nodes.is_empty() {
            return order;
        }
        let mut stack = vec![0usize];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            order.push(node.vertex);
            stack.extend(node.children.iter().rev());
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preorder_follows_insertion() {
        //     2
        //    / \
        //   0   4
        //  / \
        // 1   3
        let mut tree = Tree::new(5);
        tree.insert(None, 2).unwrap();
        tree.insert(Some(2), 0).unwrap();
        tree.insert(Some(2), 4).unwrap();
        tree.insert(Some(0), 1).unwrap();
        tree.insert(Some(0), 3).unwrap();
        assert_eq!(tree.preorder(), vec![2, 0, 1, 3, 4]);
        assert_eq!(tree.root(), Some(2));
        assert_eq!(tree.parent(3), Some(0));
        assert_eq!(tree.parent(2), None);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_chain() {
        let mut tree = Tree::new(4);
        tree.insert(None, 3).unwrap();
        for (p, v) in [(3, 1), (1, 0), (0, 2)] {
            tree.insert(Some(p), v).unwrap();
        }
        assert_eq!(tree.preorder(), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_insert_errors() {
        let mut tree = Tree::new(3);
        assert!(tree.insert(Some(0), 1).is_err());
        tree.insert(None, 0).unwrap();
        assert!(tree.insert(None, 1).is_err());
        assert!(tree.insert(Some(0), 0).is_err());
        assert!(tree.insert(Some(2), 1).is_err());
        assert!(tree.insert(Some(0), 5).is_err());
        assert!(tree.contains(0));
        assert!(!tree.contains(1));
    }

    #[test]
    fn test_empty_preorder() {
        assert!(Tree::new(3).preorder().is_empty());
    }
}
