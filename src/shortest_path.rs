//! Single-source shortest paths with non-negative weights (Dijkstra).
//!
//! The frontier is a min-heap of `(tentative distance, node)`. A node is
//! finalised the first time it is popped; later, longer entries for it are
//! stale and skipped. Edges are only pushed when they improve on the best
//! distance seen so far.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Adjacency, check_node};

/// Shortest distance from `source` to every node, `None` where unreachable.
///
/// Nodes are `0..node_count`; edges are `(from, to, weight)`.
pub fn shortest_distances(
    node_count: usize,
    edges: &[(usize, usize, u32)],
    source: usize,
) -> Result<Vec<Option<u64>>> {
    check_node(source, node_count)?;
    let graph = Adjacency::directed(node_count, edges.iter().copied())?;

    let mut best: Vec<Option<u64>> = vec![None; node_count];
    let mut done = vec![false; node_count];
    let mut frontier = BinaryHeap::new();

    best[source] = Some(0);
    frontier.push(Reverse((0u64, source)));

    while let Some(Reverse((dist, node))) = frontier.pop() {
        if done[node] {
            continue;
        }
        done[node] = true;
        trace!("finalised node {node} at distance {dist}");

        for &(next, weight) in graph.targets(node) {
            if done[next] {
                continue;
            }
            let candidate = dist + weight as u64;
            if best[next].is_none_or(|known| candidate < known) {
                best[next] = Some(candidate);
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    Ok(best)
}

/// Time for a signal sent from `source` to reach every node (Network Delay Time).
///
/// Nodes are labelled `1..=node_count` and `times` holds `(from, to, delay)`
/// triples. Returns the largest shortest-path distance, or `None` if some node
/// never receives the signal.
pub fn network_delay_time(
    times: &[(usize, usize, u32)],
    node_count: usize,
    source: usize,
) -> Result<Option<u64>> {
    let to_index = |label: usize| {
        label
            .checked_sub(1)
            .filter(|&idx| idx < node_count)
            .ok_or(Error::InvalidNode {
                node: label,
                node_count,
            })
    };

    let mut edges = Vec::with_capacity(times.len());
    for &(from, to, delay) in times {
        edges.push((to_index(from)?, to_index(to)?, delay));
    }
    let distances = shortest_distances(node_count, &edges, to_index(source)?)?;

    let mut slowest = 0u64;
    for (idx, dist) in distances.iter().enumerate() {
        match dist {
            Some(d) => slowest = slowest.max(*d),
            None => {
                debug!("node {} is unreachable from {source}", idx + 1);
                return Ok(None);
            }
        }
    }
    Ok(Some(slowest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn delay_reaches_all() {
        let times = [(2, 1, 1), (2, 3, 1), (3, 4, 1)];
        assert_eq!(network_delay_time(&times, 4, 2), Ok(Some(2)));
    }

    #[test]
    fn delay_unreachable() {
        assert_eq!(network_delay_time(&[(1, 2, 1)], 2, 2), Ok(None));
    }

    #[test]
    fn delay_single_node() {
        assert_eq!(network_delay_time(&[], 1, 1), Ok(Some(0)));
    }

    #[test]
    fn delay_prefers_shorter_detour() {
        let times = [(1, 2, 5), (1, 3, 1), (3, 2, 1)];
        assert_eq!(network_delay_time(&times, 3, 1), Ok(Some(2)));
    }

    #[test]
    fn delay_rejects_bad_labels() {
        assert_eq!(
            network_delay_time(&[(1, 3, 1)], 2, 1),
            Err(Error::InvalidNode { node: 3, node_count: 2 })
        );
        assert_eq!(
            network_delay_time(&[], 2, 0),
            Err(Error::InvalidNode { node: 0, node_count: 2 })
        );
    }

    #[test]
    fn distances_zero_indexed() {
        let edges = [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)];
        assert_eq!(
            shortest_distances(5, &edges, 0),
            Ok(vec![Some(0), Some(3), Some(1), Some(4), None])
        );
    }

    /// Bellman-Ford relaxation, the quadratic reference for small graphs.
    fn reference_distances(n: usize, edges: &[(usize, usize, u32)], source: usize) -> Vec<Option<u64>> {
        let mut dist = vec![None; n];
        dist[source] = Some(0u64);
        for _ in 0..n {
            for &(u, v, w) in edges {
                if let Some(du) = dist[u] {
                    let candidate = du + w as u64;
                    if dist[v].is_none_or(|dv| candidate < dv) {
                        dist[v] = Some(candidate);
                    }
                }
            }
        }
        dist
    }

    proptest! {
        #[test]
        fn matches_bellman_ford(
            n in 1usize..8,
            raw in prop::collection::vec((0usize..8, 0usize..8, 0u32..20), 0..24),
        ) {
            let edges: Vec<_> = raw.into_iter().map(|(u, v, w)| (u % n, v % n, w)).collect();
            let expected = reference_distances(n, &edges, 0);
            prop_assert_eq!(shortest_distances(n, &edges, 0).unwrap(), expected);
        }
    }
}
