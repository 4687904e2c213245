//! Adjacency lists built from edge lists, with endpoint validation.
//!
//! Nodes are `0..node_count`. Every edge endpoint is checked once here so the
//! traversals can index without further bounds concerns.

use crate::error::{Error, Result};

/// Directed adjacency list; `targets(u)` yields `(v, weight)` for each edge `u -> v`.
#[derive(Clone, Debug)]
pub struct Adjacency<W> {
    out: Vec<Vec<(usize, W)>>,
}

impl<W: Copy> Adjacency<W> {
    /// Builds a directed adjacency list from `(from, to, weight)` triples.
    pub fn directed<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut out = vec![Vec::new(); node_count];
        for (from, to, weight) in edges {
            check_node(from, node_count)?;
            check_node(to, node_count)?;
            out[from].push((to, weight));
        }
        Ok(Self { out })
    }

    pub fn node_count(&self) -> usize {
        self.out.len()
    }

    /// Outgoing edges of `node`.
    pub fn targets(&self, node: usize) -> &[(usize, W)] {
        &self.out[node]
    }
}

impl Adjacency<()> {
    /// Number of incoming edges per node.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.out.len()];
        for edges in &self.out {
            for &(to, ()) in edges {
                degrees[to] += 1;
            }
        }
        degrees
    }
}

/// Returns `Error::InvalidNode` unless `node < node_count`.
pub fn check_node(node: usize, node_count: usize) -> Result<()> {
    if node < node_count {
        Ok(())
    } else {
        Err(Error::InvalidNode { node, node_count })
    }
}
