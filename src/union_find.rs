//! Disjoint sets over node positions `0..n`.
//!
//! Kruskal keeps one of these per run: every node starts as its own root, and
//! accepting an edge merges the two trees its endpoints live in.

#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Root of the set containing `x`.
    ///
    /// Walks parent pointers up to the self-mapped root, then points every node on
    /// the walked path straight at the root.
    pub fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already one set.
    ///
    /// The lower-rank root goes under the higher-rank one. On a tie `a`'s root
    /// stays root and its rank grows by one.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let a = self.find(a);
        let b = self.find(b);
        if a == b {
            return false;
        }

        if self.rank[a] < self.rank[b] {
            self.parent[a] = b;
        } else if self.rank[a] > self.rank[b] {
            self.parent[b] = a;
        } else {
            self.parent[b] = a;
            self.rank[a] += 1;
        }
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets left.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
        assert_eq!(uf.set_count(), 4);
        assert!(!uf.same_set(0, 1));
    }

    #[test]
    fn test_union_tie_keeps_first_root() {
        let mut uf = UnionFind::new(2);
        assert!(uf.union(0, 1));
        assert_eq!(uf.find(1), 0);
        assert_eq!(uf.rank[0], 1);
        assert!(!uf.union(1, 0));
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_union_by_rank() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1); // root 0, rank 1
        uf.union(2, 0); // 2 has rank 0 and goes under 0
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.rank[0], 1);
        assert_eq!(uf.rank[2], 0);
    }

    #[test]
    fn test_find_compresses_path() {
        let mut uf = UnionFind::new(4);
        // hand-built chain 3 -> 2 -> 1 -> 0
        uf.parent = vec![0, 0, 1, 2];
        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_merging_everything() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(4, 5);
        assert_eq!(uf.set_count(), 3);
        uf.union(1, 3);
        uf.union(5, 2);
        assert_eq!(uf.set_count(), 1);
        let root = uf.find(0);
        assert!((0..6).all(|i| uf.find(i) == root));
    }
}
