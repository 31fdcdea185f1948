//! Result structures for both conversion directions.

use crate::func::SelfMap;
use crate::tree::{Tree, TreeError};

/// Output of the tree -> function direction.
///
/// `vertebra` runs from start to end; `vertebra_sorted` holds the same
/// vertices ascending and `vertebra_reversed` the reverse traversal, so
/// `function[vertebra_sorted[i]] == vertebra_reversed[i]` for all `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeToFunction {
    pub function: SelfMap,
    pub vertebra: Vec<usize>,
    pub vertebra_sorted: Vec<usize>,
    pub vertebra_reversed: Vec<usize>,
    pub vertebra_edges: Vec<(usize, usize)>,
    pub oriented_edges: Vec<(usize, usize)>,
}

/// Output of the function -> tree direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionToTree {
    pub vertebra: Vec<usize>,
    pub vertebra_sorted: Vec<usize>,
    pub vertebra_reversed: Vec<usize>,
    pub vertebra_edges: Vec<(usize, usize)>,
    pub oriented_edges: Vec<(usize, usize)>,
}

impl FunctionToTree {
    /// Start and end markers recovered from the vertebra, when non-empty.
    pub fn marks(&self) -> Option<(usize, usize)> {
        match (self.vertebra.first(), self.vertebra.last()) {
            (Some(&start), Some(&end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Vertebra and oriented edges merged into one undirected edge set.
    ///
    /// Always `n - 1` edges for a total function on `n` vertices, but only
    /// guaranteed to be a tree when the function came out of the
    /// tree -> function direction; use [`FunctionToTree::to_tree`] to check.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges =
            Vec::with_capacity(self.vertebra_edges.len() + self.oriented_edges.len());
        edges.extend_from_slice(&self.vertebra_edges);
        edges.extend_from_slice(&self.oriented_edges);
        edges
    }

    /// Validate the merged edge set as a free tree on `n` vertices.
    pub fn to_tree(&self, n: usize) -> Result<Tree, TreeError> {
        Tree::from_edges(n, &self.edges())
    }
}
