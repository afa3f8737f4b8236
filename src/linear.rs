//! Edge-disjointness and local linearity of the triangle set.
//!
//! Two characterizations of "the triangles of `G` are pairwise edge-disjoint"
//! are provided and must agree on every graph:
//! - pairwise: any two distinct triangles share at most one vertex
//!   ([`is_edge_disjoint_triangles`]);
//! - per edge: every vertex pair lies in at most one triangle
//!   ([`is_edge_disjoint_by_multiplicity`]).
//!
//! Double counting the edge–triangle incidences gives `3·|T| = Σ_e mult(e)`.
//! Under edge-disjointness every multiplicity is at most 1, so `3·|T| <= |E|`;
//! under local linearity every multiplicity is exactly 1, so `|E| = 3·|T|`.

use crate::error::AnalysisError;
use crate::graph::{Edge, SimpleGraph};
use crate::triangle::{edge_multiplicity, triangles, Triangle};

// ============================================================================
// Edge-disjointness
// ============================================================================

/// Returns the first pair of distinct triangles (canonical order) sharing two vertices.
pub fn edge_disjoint_violation(g: &SimpleGraph) -> Option<(Triangle, Triangle)> {
    let all: Vec<Triangle> = triangles(g).into_iter().collect();
    for (i, &x) in all.iter().enumerate() {
        for &y in &all[i + 1..] {
            if x.shared_vertices(y) >= 2 {
                return Some((x, y));
            }
        }
    }
    None
}

/// Returns `true` iff any two distinct triangles of `g` share at most one vertex.
pub fn is_edge_disjoint_triangles(g: &SimpleGraph) -> bool {
    let violation = edge_disjoint_violation(g);
    if let Some((x, y)) = violation {
        tracing::debug!(%x, %y, "triangles share an edge");
    }
    violation.is_none()
}

/// Returns the largest number of triangles on a single vertex pair (0 for an edgeless graph).
pub fn max_edge_multiplicity(g: &SimpleGraph) -> usize {
    g.edges()
        .map(|e| edge_multiplicity(g, e))
        .max()
        .unwrap_or(0)
}

/// Returns `true` iff every vertex pair lies in at most one triangle of `g`.
///
/// Equivalent to [`is_edge_disjoint_triangles`].
pub fn is_edge_disjoint_by_multiplicity(g: &SimpleGraph) -> bool {
    max_edge_multiplicity(g) <= 1
}

// ============================================================================
// Local linearity
// ============================================================================

/// Returns the first edge (canonical order) that lies in no triangle.
pub fn uncovered_edge(g: &SimpleGraph) -> Option<Edge> {
    g.edges().find(|&e| edge_multiplicity(g, e) == 0)
}

/// Returns `true` iff every edge of `g` lies in exactly one triangle.
pub fn is_locally_linear(g: &SimpleGraph) -> bool {
    is_edge_disjoint_triangles(g) && uncovered_edge(g).is_none()
}

// ============================================================================
// Double counting
// ============================================================================

/// Edge and triangle counts of a graph whose triangles are edge-disjoint.
///
/// Only [`triangle_edge_bound`] builds one, so `3·|T| <= |E|` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncidenceCount {
    triangles: usize,
    edges: usize,
}

impl IncidenceCount {
    /// Returns `|T|`.
    #[inline]
    pub fn triangles(&self) -> usize {
        self.triangles
    }

    /// Returns `|E|`.
    #[inline]
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Returns `3·|T|`, the number of edges covered by some triangle.
    #[inline]
    pub fn covered_edges(&self) -> usize {
        3 * self.triangles
    }

    /// Returns the number of edges in no triangle, `|E| − 3·|T|`.
    #[inline]
    pub fn uncovered_edges(&self) -> usize {
        self.edges - self.covered_edges()
    }
}

fn require_edge_disjoint(g: &SimpleGraph) -> Result<(), AnalysisError> {
    match edge_disjoint_violation(g) {
        Some((first, second)) => Err(AnalysisError::NotEdgeDisjoint { first, second }),
        None => Ok(()),
    }
}

/// Establishes `3·|T| <= |E|` for a graph whose triangles are edge-disjoint.
///
/// # Errors
/// Returns [`AnalysisError::NotEdgeDisjoint`] with a witness pair if two
/// triangles share an edge; the inequality can fail for such graphs (e.g. K4).
pub fn triangle_edge_bound(g: &SimpleGraph) -> Result<IncidenceCount, AnalysisError> {
    require_edge_disjoint(g)?;
    let count = IncidenceCount {
        triangles: triangles(g).len(),
        edges: g.edge_count(),
    };
    let incidences: usize = g.edges().map(|e| edge_multiplicity(g, e)).sum();
    debug_assert_eq!(incidences, count.covered_edges());
    debug_assert!(count.covered_edges() <= count.edges);
    Ok(count)
}

/// Returns `|E|` for a locally linear graph, computed as `3·|T|`.
///
/// # Errors
/// Returns [`AnalysisError::NotEdgeDisjoint`] or [`AnalysisError::UncoveredEdge`]
/// with a witness when `g` is not locally linear.
pub fn locally_linear_edge_count(g: &SimpleGraph) -> Result<usize, AnalysisError> {
    require_edge_disjoint(g)?;
    if let Some(edge) = uncovered_edge(g) {
        return Err(AnalysisError::UncoveredEdge { edge });
    }
    let covered = 3 * triangles(g).len();
    debug_assert_eq!(covered, g.edge_count());
    Ok(covered)
}

// ============================================================================
// Tests
// ============================================================================
