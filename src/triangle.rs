//! Triangle enumeration (3-cliques) over a [`SimpleGraph`].
//!
//! A triangle is keyed by its sorted vertex triple, so two traversals that meet
//! the same three vertices in different orders produce the same [`Triangle`].
//! Enumeration is adjacency-aware: for every edge `u < v` only the common
//! neighbours above `v` are scanned, which lists each triangle exactly once.

use crate::graph::{all_bits, bit, bits, Edge, SimpleGraph};
use std::collections::BTreeSet;
use std::fmt;

/// A set of triangles in canonical order, free of duplicates.
pub type TriangleSet = BTreeSet<Triangle>;

// ============================================================================
// Triangle
// ============================================================================

/// An unordered vertex triple `{a, b, c}` stored with `a < b < c`.
///
/// The type only fixes the key; whether the three pairs are adjacent is a
/// property of a particular graph, see [`Triangle::is_triangle_of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triangle {
    a: usize,
    b: usize,
    c: usize,
}

impl Triangle {
    /// Creates the triple `{x, y, z}` in canonical order.
    ///
    /// # Panics
    /// Panics in debug builds if the vertices are not pairwise distinct.
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        let mut v = [x, y, z];
        v.sort_unstable();
        debug_assert!(v[0] < v[1] && v[1] < v[2], "triangle vertices must be distinct");
        Self {
            a: v[0],
            b: v[1],
            c: v[2],
        }
    }

    /// Returns the vertices in ascending order.
    #[inline(always)]
    pub fn vertices(self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the vertex set as a bitset.
    #[inline(always)]
    pub fn mask(self) -> u64 {
        bit(self.a) | bit(self.b) | bit(self.c)
    }

    /// Returns the three edges in the fixed order `ab, ac, bc`.
    #[inline]
    pub fn edges(self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.a, self.c),
            Edge::new(self.b, self.c),
        ]
    }

    /// Returns whether `e` is one of the three edges.
    #[inline]
    pub fn contains_edge(self, e: Edge) -> bool {
        self.mask() & e.mask() == e.mask()
    }

    /// Returns `|self ∩ other|`.
    #[inline(always)]
    pub fn shared_vertices(self, other: Triangle) -> u32 {
        (self.mask() & other.mask()).count_ones()
    }

    /// Returns whether the three vertices are pairwise adjacent in `g`.
    pub fn is_triangle_of(self, g: &SimpleGraph) -> bool {
        let n = g.order();
        self.c < n
            && self.a != self.b
            && self.b != self.c
            && g.has_edge(self.a, self.b)
            && g.has_edge(self.a, self.c)
            && g.has_edge(self.b, self.c)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.a, self.b, self.c)
    }
}

// ============================================================================
// Enumeration
// ============================================================================

/// Calls `visit` on every triangle of `g` in canonical order until it returns `false`.
///
/// Returns `false` iff the visitor stopped the scan.
fn for_each_triangle<F>(g: &SimpleGraph, mut visit: F) -> bool
where
    F: FnMut(Triangle) -> bool,
{
    for u in g.vertices() {
        let above_u = g.neighbors(u) & !all_bits(u + 1);
        for v in bits(above_u) {
            let common = g.neighbors(u) & g.neighbors(v) & !all_bits(v + 1);
            for w in bits(common) {
                if !visit(Triangle { a: u, b: v, c: w }) {
                    return false;
                }
            }
        }
    }
    true
}

/// Returns every triangle of `g`.
pub fn triangles(g: &SimpleGraph) -> TriangleSet {
    let mut out = TriangleSet::new();
    for_each_triangle(g, |t| {
        out.insert(t);
        true
    });
    tracing::debug!(order = g.order(), triangles = out.len(), "enumerated triangles");
    out
}

/// Returns the number of triangles of `g` without materializing them.
pub fn count_triangles(g: &SimpleGraph) -> usize {
    let mut count = 0usize;
    for_each_triangle(g, |_| {
        count += 1;
        true
    });
    count
}

/// Returns the first triangle of `g` in canonical order, if any.
pub fn find_triangle(g: &SimpleGraph) -> Option<Triangle> {
    let mut found = None;
    for_each_triangle(g, |t| {
        found = Some(t);
        false
    });
    found
}

/// Returns `true` iff `g` contains no triangle.
#[inline]
pub fn is_triangle_free(g: &SimpleGraph) -> bool {
    find_triangle(g).is_none()
}

/// Returns the triangles of `g` that contain `e` as an edge.
///
/// Empty when `e` is not an edge of `g`.
pub fn triangles_on_edge(g: &SimpleGraph, e: Edge) -> TriangleSet {
    let (u, v) = e.endpoints();
    if v >= g.order() || !g.has_edge(u, v) {
        return TriangleSet::new();
    }
    bits(g.neighbors(u) & g.neighbors(v))
        .map(|w| Triangle::new(u, v, w))
        .collect()
}

/// Returns the number of triangles of `g` containing `e` as an edge.
#[inline]
pub fn edge_multiplicity(g: &SimpleGraph, e: Edge) -> usize {
    let (u, v) = e.endpoints();
    if v >= g.order() || !g.has_edge(u, v) {
        return 0;
    }
    (g.neighbors(u) & g.neighbors(v)).count_ones() as usize
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn brute_triangles(g: &SimpleGraph) -> TriangleSet {
        let n = g.order();
        let mut out = TriangleSet::new();
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    if a != b
                        && b != c
                        && a != c
                        && g.has_edge(a, b)
                        && g.has_edge(b, c)
                        && g.has_edge(a, c)
                    {
                        out.insert(Triangle::new(a, b, c));
                    }
                }
            }
        }
        out
    }

    #[test]
    fn triangle_identity_ignores_vertex_order() {
        let t = Triangle::new(3, 1, 2);
        assert_eq!(t, Triangle::new(2, 3, 1));
        assert_eq!(t.vertices(), [1, 2, 3]);
        assert_eq!(t.to_string(), "{1, 2, 3}");
        let set: TriangleSet = [Triangle::new(1, 2, 3), Triangle::new(3, 2, 1)].into();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn triangle_edges_in_fixed_order() {
        let t = Triangle::new(7, 2, 4);
        assert_eq!(t.edges(), [Edge::new(2, 4), Edge::new(2, 7), Edge::new(4, 7)]);
        assert!(t.contains_edge(Edge::new(7, 4)));
        assert!(!t.contains_edge(Edge::new(2, 5)));
    }

    #[test]
    fn shared_vertices_counts_intersection() {
        let t = Triangle::new(0, 1, 2);
        assert_eq!(t.shared_vertices(Triangle::new(0, 1, 3)), 2);
        assert_eq!(t.shared_vertices(Triangle::new(2, 3, 4)), 1);
        assert_eq!(t.shared_vertices(Triangle::new(3, 4, 5)), 0);
        assert_eq!(t.shared_vertices(t), 3);
    }

    #[test]
    fn is_triangle_of_checks_adjacency_and_range() {
        let g = SimpleGraph::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
        assert!(Triangle::new(0, 1, 2).is_triangle_of(&g));
        assert!(!Triangle::new(1, 2, 3).is_triangle_of(&g));
        assert!(!Triangle::new(0, 1, 9).is_triangle_of(&g));
    }

    #[test]
    fn complete_graph_has_n_choose_3_triangles() {
        for n in 0..=12 {
            let g = SimpleGraph::complete(n);
            let expected = n * n.saturating_sub(1) * n.saturating_sub(2) / 6;
            assert_eq!(count_triangles(&g), expected, "K{n}");
            assert_eq!(triangles(&g).len(), expected, "K{n}");
        }
    }

    #[test]
    fn empty_graph_is_triangle_free() {
        let g = SimpleGraph::empty(8);
        assert!(triangles(&g).is_empty());
        assert!(is_triangle_free(&g));
        assert_eq!(find_triangle(&g), None);
    }

    #[test]
    fn bipartite_graph_is_triangle_free() {
        let edges = (0..4).flat_map(|u| (4..8).map(move |v| (u, v)));
        let g = SimpleGraph::from_edges(8, edges).unwrap();
        assert_eq!(g.edge_count(), 16);
        assert!(is_triangle_free(&g));
    }

    #[test]
    fn enumeration_matches_brute_force() {
        let mut rng = XorShiftRng::seed_from_u64(0x7A1);
        for _ in 0..200 {
            let g = SimpleGraph::new_random(14, &mut rng, 0.4);
            let fast = triangles(&g);
            assert_eq!(fast, brute_triangles(&g));
            assert_eq!(count_triangles(&g), fast.len());
            assert_eq!(find_triangle(&g), fast.iter().next().copied());
            assert_eq!(is_triangle_free(&g), fast.is_empty());
        }
    }

    #[test]
    fn enumerated_triangles_are_triangles() {
        let mut rng = XorShiftRng::seed_from_u64(0x7A2);
        let g = SimpleGraph::new_random(64, &mut rng, 0.2);
        for t in triangles(&g) {
            assert!(t.is_triangle_of(&g), "{t} is not a triangle");
        }
    }

    #[test]
    fn triangles_on_edge_agree_with_multiplicity() {
        let mut rng = XorShiftRng::seed_from_u64(0x7A3);
        for _ in 0..50 {
            let g = SimpleGraph::new_random(12, &mut rng, 0.5);
            let all = triangles(&g);
            for e in g.edges() {
                let on_edge = triangles_on_edge(&g, e);
                assert_eq!(on_edge.len(), edge_multiplicity(&g, e));
                let expected: TriangleSet =
                    all.iter().copied().filter(|t| t.contains_edge(e)).collect();
                assert_eq!(on_edge, expected);
            }
        }
    }

    #[test]
    fn non_edge_has_no_triangles() {
        let g = SimpleGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        assert!(triangles_on_edge(&g, Edge::new(0, 2)).is_empty());
        assert_eq!(edge_multiplicity(&g, Edge::new(0, 2)), 0);
        assert_eq!(edge_multiplicity(&g, Edge::new(0, 9)), 0);
    }
}
