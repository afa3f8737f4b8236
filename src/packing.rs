//! Edge-disjoint triangle packings and the deletion lower bound they certify.
//!
//! If `tris` is a set of pairwise edge-disjoint triangles of `G` and `H ≤ G` is
//! triangle-free, every triangle of `tris` must lose at least one edge on the way
//! from `G` to `H`. Charging each triangle to one such deleted edge is injective
//! (two triangles charged to the same edge would share both its endpoints), so
//!
//! ```text
//! |tris| <= |E(G)| − |E(H)|
//! ```
//!
//! [`TrianglePacking::charge`] builds that map explicitly and checks it.

use crate::error::AnalysisError;
use crate::graph::{Edge, SimpleGraph};
use crate::triangle::{find_triangle, triangles, Triangle, TriangleSet};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

// ============================================================================
// TrianglePacking
// ============================================================================

/// A validated set of pairwise edge-disjoint triangles of one graph.
///
/// Construction checks every member against the graph, so holding a
/// `TrianglePacking` means the disjointness hypothesis of the deletion bound
/// has already been discharged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrianglePacking {
    triangles: TriangleSet,
}

impl TrianglePacking {
    /// Returns the empty packing, valid for every graph.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validates `candidates` as an edge-disjoint packing of `g`.
    ///
    /// Repeated triangles collapse by vertex-set identity.
    ///
    /// # Errors
    /// - [`AnalysisError::NotATriangle`] if a member is not a triangle of `g`.
    /// - [`AnalysisError::NotEdgeDisjoint`] if two members share an edge.
    pub fn new<I>(g: &SimpleGraph, candidates: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = Triangle>,
    {
        let triangles: TriangleSet = candidates.into_iter().collect();
        let mut owner: HashMap<Edge, Triangle> = HashMap::with_capacity(3 * triangles.len());
        for &t in &triangles {
            if !t.is_triangle_of(g) {
                return Err(AnalysisError::NotATriangle { triangle: t });
            }
            for e in t.edges() {
                match owner.entry(e) {
                    Entry::Occupied(prev) => {
                        return Err(AnalysisError::NotEdgeDisjoint {
                            first: *prev.get(),
                            second: t,
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(t);
                    }
                }
            }
        }
        Ok(Self { triangles })
    }

    /// Builds a maximal packing by first-fit over the triangles in canonical order.
    pub fn greedy(g: &SimpleGraph) -> Self {
        let order: Vec<Triangle> = triangles(g).into_iter().collect();
        let packing = first_fit(g, &order);
        tracing::debug!(size = packing.len(), "greedy triangle packing");
        packing
    }

    /// Runs first-fit over `rounds` random triangle orders and keeps the largest packing.
    ///
    /// The canonical-order greedy packing is always one of the candidates.
    pub fn randomized<R: Rng>(g: &SimpleGraph, rng: &mut R, rounds: usize) -> Self {
        let mut order: Vec<Triangle> = triangles(g).into_iter().collect();
        let mut best = first_fit(g, &order);
        for _ in 0..rounds {
            order.shuffle(rng);
            let candidate = first_fit(g, &order);
            if candidate.len() > best.len() {
                best = candidate;
            }
        }
        tracing::debug!(size = best.len(), rounds, "randomized triangle packing");
        best
    }

    /// Returns the number of triangles in the packing.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` iff the packing has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterates the packed triangles in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.triangles.iter().copied()
    }

    /// Charges each packed triangle to an edge of `g` that `h` deleted.
    ///
    /// The witness for a triangle is the first of its edges, in the fixed
    /// order `ab, ac, bc`, that is missing from `h`.
    ///
    /// # Errors
    /// - [`AnalysisError::OrderMismatch`] if `h` lives on a different vertex set.
    /// - [`AnalysisError::NotSubgraph`] if `h` has an edge that `g` lacks.
    /// - [`AnalysisError::NotTriangleFree`] if `h` contains a triangle.
    /// - [`AnalysisError::NotATriangle`] if the packing was built for another graph.
    /// - [`AnalysisError::ChargingCollision`] if two triangles land on one edge.
    pub fn charge(&self, g: &SimpleGraph, h: &SimpleGraph) -> Result<DeletionBound, AnalysisError> {
        if h.order() != g.order() {
            return Err(AnalysisError::OrderMismatch {
                expected: g.order(),
                got: h.order(),
            });
        }
        if let Err(Some(edge)) = h.is_subgraph_of(g) {
            return Err(AnalysisError::NotSubgraph { edge });
        }
        if let Some(triangle) = find_triangle(h) {
            return Err(AnalysisError::NotTriangleFree { triangle });
        }

        let mut charged: HashMap<Edge, Triangle> = HashMap::with_capacity(self.len());
        let mut witnesses = Vec::with_capacity(self.len());
        for t in self.iter() {
            if !t.is_triangle_of(g) {
                return Err(AnalysisError::NotATriangle { triangle: t });
            }
            let Some(edge) = t.edges().into_iter().find(|e| {
                let (u, v) = e.endpoints();
                !h.has_edge(u, v)
            }) else {
                // All three edges survived, so h contains t.
                return Err(AnalysisError::NotTriangleFree { triangle: t });
            };
            match charged.entry(edge) {
                Entry::Occupied(prev) => {
                    return Err(AnalysisError::ChargingCollision {
                        edge,
                        first: *prev.get(),
                        second: t,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(t);
                }
            }
            witnesses.push((t, edge));
        }

        let bound = DeletionBound {
            packing_size: self.len(),
            deleted_edges: g.edge_count() - h.edge_count(),
            witnesses,
        };
        debug_assert!(bound.holds());
        tracing::debug!(
            packing = bound.packing_size,
            deleted = bound.deleted_edges,
            "charged packing to deleted edges"
        );
        Ok(bound)
    }
}

/// First-fit: keeps each triangle whose three edges are still unused.
fn first_fit(g: &SimpleGraph, order: &[Triangle]) -> TrianglePacking {
    let mut used = vec![0u64; g.order()];
    let mut triangles = TriangleSet::new();
    for &t in order {
        let free = t.edges().iter().all(|e| {
            let (u, v) = e.endpoints();
            used[u] & (1u64 << v) == 0
        });
        if free {
            for e in t.edges() {
                let (u, v) = e.endpoints();
                used[u] |= 1u64 << v;
            }
            triangles.insert(t);
        }
    }
    TrianglePacking { triangles }
}

// ============================================================================
// DeletionBound
// ============================================================================

/// The injective charging of a packing into the edges deleted from `G` to reach `H`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletionBound {
    /// `|tris|`.
    pub packing_size: usize,
    /// `|E(G)| − |E(H)|`.
    pub deleted_edges: usize,
    /// Each packed triangle with the deleted edge it was charged to.
    pub witnesses: Vec<(Triangle, Edge)>,
}

impl DeletionBound {
    /// Returns whether `packing_size <= deleted_edges`.
    #[inline]
    pub fn holds(&self) -> bool {
        self.packing_size <= self.deleted_edges
    }
}

// ============================================================================
// Triangle-free subgraphs
// ============================================================================

/// Returns a maximal triangle-free spanning subgraph of `g`.
///
/// Edges are scanned in canonical order and kept unless their endpoints
/// already have a common kept neighbour.
pub fn greedy_triangle_free_subgraph(g: &SimpleGraph) -> SimpleGraph {
    let mut h = SimpleGraph::empty(g.order());
    for e in g.edges() {
        let (u, v) = e.endpoints();
        if h.neighbors(u) & h.neighbors(v) == 0 {
            h.add_edge(u, v);
        }
    }
    h
}

// ============================================================================
// Tests
// ============================================================================
