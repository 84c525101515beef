//! Similarity graph and connected components
//!
//! Edges live within one session; components are found with an iterative
//! walk over an explicit visited arena, so the engine stays re-entrant
//! across concurrent invocations.

use std::collections::HashMap;

use orbit_core::TabDescriptor;

use crate::similarity::{self, TabSignals, RAW_PRUNE};

/// Undirected edge between two arena indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityEdge {
    pub a: usize,
    pub b: usize,
    pub weight: f32,
}

/// Build the surviving edge list for one session.
///
/// Pairs below the raw prune are skipped before adjustment; the adjusted
/// score must clear `min_similarity` for the edge to survive.
pub fn build_edges(
    session: &[usize],
    tabs: &[TabDescriptor],
    embeddings: &[Vec<f32>],
    signals: &[TabSignals],
    min_similarity: f32,
) -> Vec<SimilarityEdge> {
    let mut edges = Vec::new();

    for (pos, &i) in session.iter().enumerate() {
        for &j in &session[pos + 1..] {
            let raw = similarity::cosine_similarity(&embeddings[i], &embeddings[j]);
            if raw < RAW_PRUNE {
                continue;
            }
            let weight =
                similarity::adjusted_score(raw, &tabs[i], &tabs[j], &signals[i], &signals[j]);
            if weight >= min_similarity {
                edges.push(SimilarityEdge { a: i, b: j, weight });
            }
        }
    }

    edges
}

/// Connected components over one node set.
///
/// `visited` is an arena indexed by tab position, threaded through by the
/// caller; nodes already marked are skipped. Seeds follow `nodes` order, so
/// identical input yields identical components. Nodes with no edges come
/// out as singletons. Component members are returned in `nodes` order.
pub fn connected_components(
    nodes: &[usize],
    edges: &[SimilarityEdge],
    visited: &mut [bool],
) -> Vec<Vec<usize>> {
    let mut adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
    for e in edges {
        adjacency.entry(e.a).or_default().push(e.b);
        adjacency.entry(e.b).or_default().push(e.a);
    }

    let rank: HashMap<usize, usize> = nodes.iter().enumerate().map(|(r, &i)| (i, r)).collect();

    let mut components = Vec::new();
    for &seed in nodes {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        let mut component = vec![seed];
        let mut stack = vec![seed];
        while let Some(node) = stack.pop() {
            if let Some(neighbors) = adjacency.get(&node) {
                for &next in neighbors {
                    if !visited[next] {
                        visited[next] = true;
                        component.push(next);
                        stack.push(next);
                    }
                }
            }
        }

        component.sort_by_key(|i| rank.get(i).copied().unwrap_or(usize::MAX));
        components.push(component);
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::collect_signals;

    fn tab(id: u64, title: &str) -> TabDescriptor {
        TabDescriptor::new(id, title, format!("https://site{id}.com"), 0)
    }

    #[test]
    fn test_raw_prune_skips_adjustment() {
        // raw 0.2 clears the (deliberately low) edge threshold, so only
        // the prune can drop this pair
        let tabs = vec![tab(1, "rust search"), tab(2, "rust docs")];
        let signals = collect_signals(&tabs);
        let embeddings = vec![vec![1.0, 0.0], vec![0.2, 0.9798]];
        let edges = build_edges(&[0, 1], &tabs, &embeddings, &signals, 0.1);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_edge_survives_threshold() {
        let tabs = vec![tab(1, "alpha"), tab(2, "beta")];
        let signals = collect_signals(&tabs);
        let embeddings = vec![vec![1.0, 0.0], vec![1.0, 0.0]];
        let edges = build_edges(&[0, 1], &tabs, &embeddings, &signals, 0.65);
        assert_eq!(edges.len(), 1);
        assert_eq!((edges[0].a, edges[0].b), (0, 1));
    }

    #[test]
    fn test_transitive_component() {
        // a-b and b-c connected, d isolated
        let edges = vec![
            SimilarityEdge { a: 0, b: 1, weight: 0.9 },
            SimilarityEdge { a: 1, b: 2, weight: 0.9 },
        ];
        let mut visited = vec![false; 4];
        let components = connected_components(&[0, 1, 2, 3], &edges, &mut visited);
        assert_eq!(components, vec![vec![0, 1, 2], vec![3]]);
    }

    #[test]
    fn test_members_follow_node_order() {
        // traversal discovers 2 before 1; output order is still node order
        let edges = vec![
            SimilarityEdge { a: 0, b: 2, weight: 0.9 },
            SimilarityEdge { a: 2, b: 1, weight: 0.9 },
        ];
        let mut visited = vec![false; 3];
        let components = connected_components(&[0, 1, 2], &edges, &mut visited);
        assert_eq!(components, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_visited_arena_spans_calls() {
        let mut visited = vec![false; 3];
        let first = connected_components(&[0, 1], &[], &mut visited);
        let second = connected_components(&[2], &[], &mut visited);
        assert_eq!(first.len(), 2);
        assert_eq!(second, vec![vec![2]]);
    }
}
