//! Disjoint-set forest (union-find) over a fixed element range.

/// Union-find with iterative two-pass path compression.
///
/// `find` walks parent links to the representative, then rewrites every
/// link on the walked path to point at it directly. Recursion depth is
/// never an issue because both passes are plain loops.
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
}

impl DisjointSetForest {
    /// `n` singleton sets, element `i` in set `i`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Number of elements (not sets).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s set, compressing the traversed path.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`.
    ///
    /// Returns `false` and performs no mutation when they already share a
    /// representative, `true` after a successful merge.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        true
    }

    /// True iff every element shares one representative.
    pub fn all_joined(&mut self) -> bool {
        if self.parent.is_empty() {
            return true;
        }
        let root = self.find(0);
        (1..self.parent.len()).all(|i| self.find(i) == root)
    }

    /// Back to `n` singleton sets.
    pub fn reset(&mut self) {
        for (i, p) in self.parent.iter_mut().enumerate() {
            *p = i;
        }
    }
}
