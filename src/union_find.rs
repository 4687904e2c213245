//! Disjoint-set union with path compression and union by rank.
//!
//! Together the two heuristics keep `find` and `union` at amortised
//! inverse-Ackermann cost, effectively constant.

use crate::error::Result;
use crate::graph::check_node;

/// A partition of `0..len` into disjoint sets.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set holding `x`.
    ///
    /// Every node on the walk is re-pointed straight at the root.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets holding `a` and `b`. Returns `false` if they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        // Shallower tree goes under the deeper one; equal ranks grow by one.
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Number of connected components in an undirected graph on `0..n`.
pub fn count_components(n: usize, edges: &[(usize, usize)]) -> Result<usize> {
    let mut sets = DisjointSet::new(n);
    for &(a, b) in edges {
        check_node(a, n)?;
        check_node(b, n)?;
        sets.union(a, b);
    }
    Ok(sets.set_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use proptest::prelude::*;

    #[test]
    fn component_counts() {
        assert_eq!(count_components(5, &[(0, 1), (1, 2), (3, 4)]), Ok(2));
        assert_eq!(count_components(4, &[(0, 1), (1, 2), (2, 3)]), Ok(1));
        assert_eq!(count_components(4, &[]), Ok(4));
        assert_eq!(count_components(1, &[]), Ok(1));
        assert_eq!(count_components(3, &[(0, 1), (1, 2), (0, 2)]), Ok(1));
        assert_eq!(count_components(0, &[]), Ok(0));
    }

    #[test]
    fn rejects_unknown_node() {
        assert_eq!(
            count_components(3, &[(0, 3)]),
            Err(Error::InvalidNode { node: 3, node_count: 3 })
        );
    }

    #[test]
    fn union_reports_merges() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert!(sets.union(1, 3));
        assert!(sets.connected(0, 2));
        assert_eq!(sets.set_count(), 1);
        assert_eq!(sets.len(), 4);
    }

    #[test]
    fn roots_are_self_parented() {
        let mut sets = DisjointSet::new(6);
        for (a, b) in [(0, 1), (1, 2), (2, 3), (4, 5)] {
            sets.union(a, b);
        }
        for x in 0..6 {
            let root = sets.find(x);
            assert_eq!(sets.find(root), root);
            // Compressed: x now points at its root directly.
            assert_eq!(sets.parent[x], root);
        }
    }

    proptest! {
        #[test]
        fn set_count_matches_distinct_roots(
            n in 1usize..32,
            raw in prop::collection::vec((0usize..32, 0usize..32), 0..48),
        ) {
            let edges: Vec<_> = raw.into_iter().map(|(a, b)| (a % n, b % n)).collect();
            let mut sets = DisjointSet::new(n);
            for &(a, b) in &edges {
                sets.union(a, b);
            }

            let mut roots: Vec<usize> = (0..n).map(|x| sets.find(x)).collect();
            roots.sort_unstable();
            roots.dedup();
            prop_assert_eq!(roots.len(), sets.set_count());
            prop_assert_eq!(count_components(n, &edges).unwrap(), roots.len());

            for &(a, b) in &edges {
                prop_assert!(sets.connected(a, b));
            }
        }
    }
}
