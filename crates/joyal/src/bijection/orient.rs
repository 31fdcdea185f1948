//! BFS distance layering and edge orientation toward the end vertex.

use std::collections::VecDeque;

/// Breadth-first distance from `source` for every vertex; `None` for
/// vertices `source` cannot reach.
pub fn distances_from(adjacency: &[Vec<usize>], source: usize) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; adjacency.len()];
    if source >= adjacency.len() {
        return dist;
    }
    dist[source] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        // Invariant: dist[v] is set before v enters the queue.
        let next = match dist[v] {
            Some(d) => d + 1,
            None => continue,
        };
        for &adj in &adjacency[v] {
            if dist[adj].is_none() {
                dist[adj] = Some(next);
                queue.push_back(adj);
            }
        }
    }
    dist
}

/// Direct every tree edge not on the vertebra toward `end`.
///
/// In a tree the endpoints of an edge sit at distances from `end` that
/// differ by exactly 1, so the farther endpoint is unambiguous; the edge
/// is emitted as (farther, nearer).
pub fn orient_edges(
    edges: &[(usize, usize)],
    vertebra_edges: &[(usize, usize)],
    adjacency: &[Vec<usize>],
    end: usize,
) -> Vec<(usize, usize)> {
    let dist = distances_from(adjacency, end);
    let mut oriented = Vec::with_capacity(edges.len().saturating_sub(vertebra_edges.len()));
    for &(u, v) in edges {
        if on_vertebra(vertebra_edges, u, v) {
            continue;
        }
        match (dist[u], dist[v]) {
            (Some(du), Some(dv)) if du > dv => oriented.push((u, v)),
            _ => oriented.push((v, u)),
        }
    }
    oriented
}

fn on_vertebra(vertebra_edges: &[(usize, usize)], u: usize, v: usize) -> bool {
    vertebra_edges
        .iter()
        .any(|&(a, b)| (u == a && v == b) || (u == b && v == a))
}
