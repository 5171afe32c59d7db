//! Edit graph — the (N+1)×(M+1) lattice as a petgraph DiGraph, plus the
//! k-diagonal band geometry used for annotation.
//!
//! The graph is render-agnostic: one instance serves every projection.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

// ─── Edge classification ──────────────────────────────────────────────────────

/// The three edge kinds of the edit graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// x → x+1: delete A[x]. Unit cost.
    Horizontal,
    /// y → y+1: insert B[y]. Unit cost.
    Vertical,
    /// (x, y) → (x+1, y+1) where A[x] == B[y]. Free.
    Match,
}

// ─── EditGraph ────────────────────────────────────────────────────────────────

/// The edit-graph lattice over two sequences.
pub struct EditGraph {
    n: usize,
    m: usize,
    graph: DiGraph<(usize, usize), EdgeKind>,
    index: HashMap<(usize, usize), NodeIndex>,
}

impl EditGraph {
    /// Build the full lattice: every grid coordinate becomes a node; every
    /// horizontal, vertical, and matching-diagonal move becomes an edge.
    pub fn build(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let (n, m) = (a.len(), b.len());

        let mut graph = DiGraph::new();
        let mut index = HashMap::new();
        for x in 0..=n {
            for y in 0..=m {
                index.insert((x, y), graph.add_node((x, y)));
            }
        }
        for x in 0..=n {
            for y in 0..=m {
                let from = index[&(x, y)];
                if x < n {
                    graph.add_edge(from, index[&(x + 1, y)], EdgeKind::Horizontal);
                }
                if y < m {
                    graph.add_edge(from, index[&(x, y + 1)], EdgeKind::Vertical);
                }
                if x < n && y < m && a[x] == b[y] {
                    graph.add_edge(from, index[&(x + 1, y + 1)], EdgeKind::Match);
                }
            }
        }
        Self { n, m, graph, index }
    }

    /// (N, M) — the sequence lengths, hence the lattice extent.
    pub fn dims(&self) -> (usize, usize) {
        (self.n, self.m)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// All grid coordinates, in insertion order (x-major).
    pub fn nodes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph.node_weights().copied()
    }

    /// All edges as (from, to, kind) coordinate triples.
    pub fn edges(&self) -> impl Iterator<Item = ((usize, usize), (usize, usize), EdgeKind)> + '_ {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()],
                self.graph[e.target()],
                *e.weight(),
            )
        })
    }

    /// Outgoing edge kinds from one grid coordinate.
    pub fn moves_from(&self, coord: (usize, usize)) -> Vec<EdgeKind> {
        let Some(&idx) = self.index.get(&coord) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| *e.weight())
            .collect()
    }
}

// ─── K-diagonal bands ─────────────────────────────────────────────────────────

/// Boundary intersections of the k-th anti-diagonal with the grid rectangle
/// [0,N]×[0,M], deduplicated preserving encounter order.
///
/// Candidates, in order: (0,k) if k≤M; (k,0) if k≤N; (N,k−N) if k≥N;
/// (k−M,M) if k≥M. Bands with fewer than two distinct points (always the
/// case for k=0 and k=N+M) carry no drawable segment and are skipped by
/// the renderer.
pub fn band_endpoints(k: usize, n: usize, m: usize) -> Vec<(usize, usize)> {
    let mut points: Vec<(usize, usize)> = Vec::with_capacity(4);
    if k <= m {
        points.push((0, k));
    }
    if k <= n {
        points.push((k, 0));
    }
    if k >= n {
        points.push((n, k - n));
    }
    if k >= m {
        points.push((k - m, m));
    }
    let mut unique: Vec<(usize, usize)> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.contains(&p) {
            unique.push(p);
        }
    }
    unique
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_shape() {
        let g = EditGraph::build("ABCABBA", "CBABAC");
        let (n, m) = g.dims();
        assert_eq!((n, m), (7, 6));
        assert_eq!(g.node_count(), (n + 1) * (m + 1));

        let mut horizontal = 0;
        let mut vertical = 0;
        let mut matches = 0;
        for (_, _, kind) in g.edges() {
            match kind {
                EdgeKind::Horizontal => horizontal += 1,
                EdgeKind::Vertical => vertical += 1,
                EdgeKind::Match => matches += 1,
            }
        }
        assert_eq!(horizontal, n * (m + 1));
        assert_eq!(vertical, m * (n + 1));

        let a: Vec<char> = "ABCABBA".chars().collect();
        let b: Vec<char> = "CBABAC".chars().collect();
        let expected: usize = (0..n)
            .map(|x| (0..m).filter(|&y| a[x] == b[y]).count())
            .sum();
        assert_eq!(matches, expected);
    }

    #[test]
    fn test_match_edges_follow_symbols() {
        let g = EditGraph::build("AB", "BA");
        // A[0]=='A' matches B[1]; A[1]=='B' matches B[0].
        let matches: Vec<_> = g
            .edges()
            .filter(|(_, _, k)| *k == EdgeKind::Match)
            .map(|(from, to, _)| (from, to))
            .collect();
        assert!(matches.contains(&((0, 1), (1, 2))));
        assert!(matches.contains(&((1, 0), (2, 1))));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_corner_moves() {
        let g = EditGraph::build("AB", "BA");
        // The sink has no outgoing edges; the origin has all three kinds
        // absent a match (A[0] != B[0] here, so two).
        assert!(g.moves_from((2, 2)).is_empty());
        let origin = g.moves_from((0, 0));
        assert!(origin.contains(&EdgeKind::Horizontal));
        assert!(origin.contains(&EdgeKind::Vertical));
        assert!(!origin.contains(&EdgeKind::Match));
    }

    #[test]
    fn test_band_endpoints_interior() {
        assert_eq!(band_endpoints(3, 7, 6), vec![(0, 3), (3, 0)]);
        assert_eq!(band_endpoints(7, 7, 6), vec![(7, 0), (1, 6)]);
        // k between N and N+M clips on both far edges.
        assert_eq!(band_endpoints(10, 7, 6), vec![(7, 3), (4, 6)]);
    }

    #[test]
    fn test_band_endpoints_degenerate_corners() {
        // Both candidates collapse to one point at the corners.
        assert_eq!(band_endpoints(0, 7, 6), vec![(0, 0)]);
        assert_eq!(band_endpoints(13, 7, 6), vec![(7, 6)]);
    }

    #[test]
    fn test_band_endpoints_degenerate_empty_sequence() {
        // N=0: k=0 yields the single point (0,0) from every candidate.
        assert_eq!(band_endpoints(0, 0, 4), vec![(0, 0)]);
        assert_eq!(band_endpoints(0, 0, 0), vec![(0, 0)]);
    }
}
