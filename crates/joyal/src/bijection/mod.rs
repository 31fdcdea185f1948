//! Both directions of the Joyal bijection.
//!
//! Purpose
//! - Convert a completed free tree with a distinguished (start, end) pair
//!   into a total self-map, and recover the tree (plus the pair) from the
//!   self-map alone.
//!
//! Model
//! - The simple path start..end is the vertebra. Writing the vertebra in
//!   reverse traversal order against its ascending order defines the
//!   function on vertebra vertices; every remaining tree edge is oriented
//!   toward `end` and contributes one function value. Going back, the
//!   vertices on functional cycles recover the sorted vertebra, and the
//!   function values over them recover its traversal order.
//!
//! Note on module split
//! - `path.rs` (DFS simple path), `orient.rs` (BFS layering + edge
//!   orientation), `cycles.rs` (functional-cycle detection) are the three
//!   traversal passes; this file composes them.

mod cycles;
mod orient;
mod path;
mod types;

pub use cycles::cycle_vertices;
pub use orient::{distances_from, orient_edges};
pub use path::simple_path;
pub use types::{FunctionToTree, TreeToFunction};

use std::fmt;

use crate::func::{FunctionError, FunctionTable, SelfMap};
use crate::tree::Tree;

/// Errors surfaced by the tree -> function direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BijectionError {
    /// `start` or `end` is outside the tree's vertex range.
    VertexOutOfRange { vertex: usize, n: usize },
    /// No simple path between the marked vertices (the tree invariant was
    /// broken by the caller).
    Disconnected { start: usize, end: usize },
    /// A function slot was left unset or written out of range; reaching
    /// this means an internal invariant was violated.
    Assignment(FunctionError),
}

impl fmt::Display for BijectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BijectionError::VertexOutOfRange { vertex, n } => {
                write!(f, "marked vertex {vertex} out of range for {n} vertices")
            }
            BijectionError::Disconnected { start, end } => {
                write!(f, "no path between marked vertices {start} and {end}")
            }
            BijectionError::Assignment(e) => write!(f, "function assignment failed: {e}"),
        }
    }
}

impl std::error::Error for BijectionError {}

impl From<FunctionError> for BijectionError {
    fn from(e: FunctionError) -> Self {
        BijectionError::Assignment(e)
    }
}

/// Tree plus (start, end) to total self-map.
///
/// Vertebra vertices take their function values from the reversed path
/// written against the sorted path; every other vertex points along its
/// unique tree edge toward `end`. Each slot is written exactly once.
pub fn tree_to_function(
    tree: &Tree,
    start: usize,
    end: usize,
) -> Result<TreeToFunction, BijectionError> {
    let n = tree.n();
    for vertex in [start, end] {
        if vertex >= n {
            return Err(BijectionError::VertexOutOfRange { vertex, n });
        }
    }

    let mut table = FunctionTable::new(n);
    let (vertebra, vertebra_edges) = if start == end {
        (vec![end], Vec::new())
    } else {
        let vertebra = simple_path(tree.adjacency(), start, end)
            .ok_or(BijectionError::Disconnected { start, end })?;
        let vertebra_edges: Vec<(usize, usize)> = vertebra
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        (vertebra, vertebra_edges)
    };

    let mut vertebra_sorted = vertebra.clone();
    vertebra_sorted.sort_unstable();
    let vertebra_reversed: Vec<usize> = vertebra.iter().rev().copied().collect();
    for (&slot, &value) in vertebra_sorted.iter().zip(&vertebra_reversed) {
        table.set(slot, value)?;
    }

    let oriented_edges = orient_edges(tree.edges(), &vertebra_edges, tree.adjacency(), end);
    for &(a, b) in &oriented_edges {
        table.set(a, b)?;
    }

    let function = table.freeze()?;
    Ok(TreeToFunction {
        function,
        vertebra,
        vertebra_sorted,
        vertebra_reversed,
        vertebra_edges,
        oriented_edges,
    })
}

/// Total self-map back to the marked tree's edge structure.
///
/// The sorted cycle vertices are the sorted vertebra; reading the function
/// over them gives the reversed vertebra, and every off-vertebra vertex
/// contributes the directed edge to its image. The union of vertebra and
/// oriented edges, read undirected, is the candidate edge set; call
/// [`FunctionToTree::to_tree`] to check it is an actual tree when the
/// function did not come from [`tree_to_function`].
pub fn function_to_tree(f: &SelfMap) -> FunctionToTree {
    let vertebra_sorted = cycle_vertices(f);
    let vertebra_reversed: Vec<usize> = vertebra_sorted.iter().map(|&v| f[v]).collect();
    let vertebra: Vec<usize> = vertebra_reversed.iter().rev().copied().collect();
    let vertebra_edges: Vec<(usize, usize)> = vertebra
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    let oriented_edges: Vec<(usize, usize)> = (0..f.n())
        .filter(|v| vertebra_sorted.binary_search(v).is_err())
        .map(|v| (v, f[v]))
        .collect();

    FunctionToTree {
        vertebra,
        vertebra_sorted,
        vertebra_reversed,
        vertebra_edges,
        oriented_edges,
    }
}

#[cfg(test)]
mod tests;
