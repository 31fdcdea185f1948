//! Edge-at-a-time tree builder and the completed-tree snapshot.

use std::fmt;

use super::dsf::DisjointSetForest;

/// Errors surfaced while building or finishing a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An endpoint is outside `[0, n)`.
    VertexOutOfRange { vertex: usize, n: usize },
    /// Adding the edge would close a cycle (self-loops included).
    WouldCycle { u: usize, v: usize },
    /// The builder does not yet hold a spanning tree.
    Incomplete { edges: usize, n: usize },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::VertexOutOfRange { vertex, n } => {
                write!(f, "vertex {vertex} out of range for {n} vertices")
            }
            TreeError::WouldCycle { u, v } => {
                write!(f, "edge ({u}, {v}) would close a cycle")
            }
            TreeError::Incomplete { edges, n } => {
                write!(f, "tree incomplete: {edges} edges over {n} vertices")
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// Incremental builder for a free tree on `n` labeled vertices.
///
/// A rejected `add_edge` call leaves the edge list, adjacency lists and
/// union-find state exactly as they were.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    n: usize,
    dsf: DisjointSetForest,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl TreeBuilder {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            dsf: DisjointSetForest::new(n),
            adjacency: vec![Vec::new(); n],
            edges: Vec::new(),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Add the undirected edge `(u, v)`.
    ///
    /// Rejects out-of-range endpoints and edges whose endpoints already
    /// live in the same component; rejection performs no mutation.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), TreeError> {
        for vertex in [u, v] {
            if vertex >= self.n {
                return Err(TreeError::VertexOutOfRange { vertex, n: self.n });
            }
        }
        if self.dsf.find(u) == self.dsf.find(v) {
            return Err(TreeError::WouldCycle { u, v });
        }
        self.edges.push((u, v));
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.dsf.union(u, v);
        Ok(())
    }

    /// True iff all vertices share one component.
    pub fn is_spanning(&mut self) -> bool {
        self.dsf.all_joined()
    }

    /// Spanning with exactly `n - 1` edges.
    pub fn is_complete(&mut self) -> bool {
        self.n > 0 && self.edges.len() == self.n - 1 && self.is_spanning()
    }

    /// Discard all edges and start over from `n` isolated vertices.
    pub fn reset(&mut self) {
        self.dsf.reset();
        for adj in &mut self.adjacency {
            adj.clear();
        }
        self.edges.clear();
    }

    /// Snapshot the completed tree, or report how far construction got.
    pub fn finish(&mut self) -> Result<Tree, TreeError> {
        if !self.is_complete() {
            return Err(TreeError::Incomplete {
                edges: self.edges.len(),
                n: self.n,
            });
        }
        Ok(Tree {
            n: self.n,
            edges: self.edges.clone(),
            adjacency: self.adjacency.clone(),
        })
    }
}

/// A completed free tree: `n - 1` undirected edges, connected, acyclic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    n: usize,
    edges: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
}

impl Tree {
    /// Build and validate in one call; rejects cycle-closing edges and
    /// edge sets that do not span all `n` vertices.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Tree, TreeError> {
        let mut builder = TreeBuilder::new(n);
        for &(u, v) in edges {
            builder.add_edge(u, v)?;
        }
        builder.finish()
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }
}
