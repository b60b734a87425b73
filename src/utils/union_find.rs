/*!
# Union-Find

A disjoint-set forest over the nodes `0..n` with union by rank and path
halving. The Kruskal spanning-tree algorithm uses it to test whether an
edge would close a cycle in the tree built so far.
*/

use std::cmp::Ordering;

use crate::node::*;

/// A disjoint-set forest over dense node ids
#[derive(Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
    count: NumNodes,
}

impl UnionFind {
    /// Creates a forest of `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            count: n,
        }
    }

    /// Returns the number of disjoint sets
    pub fn count(&self) -> NumNodes {
        self.count
    }

    /// Returns the representative of the set containing `u`, applying path
    /// halving along the way.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, mut u: Node) -> Node {
        while self.parent[u as usize] != u {
            // Path halving: point u to its grandparent before moving up
            self.parent[u as usize] = self.parent[self.parent[u as usize] as usize];
            u = self.parent[u as usize];
        }
        u
    }

    /// Returns *true* if both nodes are in the same set.
    /// ** Panics if `u >= n || v >= n` **
    pub fn connected(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Merges the sets containing `u` and `v`.
    /// Returns *true* exactly if the two sets were disjoint before.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }

        // Union by rank: attach the shallower tree below the deeper one
        match self.rank[ru as usize].cmp(&self.rank[rv as usize]) {
            Ordering::Less => self.parent[ru as usize] = rv,
            Ordering::Greater => self.parent[rv as usize] = ru,
            Ordering::Equal => {
                self.parent[rv as usize] = ru;
                self.rank[ru as usize] += 1;
            }
        }

        self.count -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_singletons() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.count(), 5);
        for u in 0..5 {
            assert_eq!(uf.find(u), u);
        }
        assert!(!uf.connected(0, 4));
    }

    #[test]
    fn union_merges_sets() {
        let mut uf = UnionFind::new(6);

        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert_eq!(uf.count(), 4);

        assert!(uf.connected(0, 1));
        assert!(!uf.connected(1, 2));

        assert!(uf.union(1, 2));
        assert!(uf.connected(0, 3));
        assert_eq!(uf.count(), 3);

        // Merging the same set again is a no-op
        assert!(!uf.union(0, 3));
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn long_chains_are_compressed() {
        let n = 10_000;
        let mut uf = UnionFind::new(n);
        for u in 1..n {
            assert!(uf.union(u - 1, u));
        }

        assert_eq!(uf.count(), 1);
        let root = uf.find(0);
        for u in 0..n {
            assert_eq!(uf.find(u), root);
        }
    }
}
