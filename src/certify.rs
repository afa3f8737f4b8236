//! Far-from-triangle-free certificates.
//!
//! `G` is `epsilon`-far from triangle-free when every triangle-free subgraph
//! `H ≤ G` satisfies `|E(G)| − |E(H)| >= epsilon·|V|²`. The quantifier ranges
//! over all subgraphs, so the property is never decided by search. Instead:
//!
//! - [`certify_far_from_triangle_free`] is the sufficient direction: an
//!   edge-disjoint packing with at least `epsilon·|V|²` triangles proves it,
//!   because [`TrianglePacking::charge`] bounds every `H`.
//! - [`check_necessary_conditions`] is the necessary direction: numeric
//!   consequences that any `epsilon`-far graph must satisfy.
//!
//! A [`FarFromTriangleFree`] value can only come from the sufficient direction,
//! and carries the derived facts (monotonicity, range, non-emptiness) as methods.

use crate::config::PackingStrategy;
use crate::error::{AnalysisError, NecessaryConditionViolation};
use crate::graph::SimpleGraph;
use crate::packing::{greedy_triangle_free_subgraph, DeletionBound, TrianglePacking};
use crate::triangle::{find_triangle, Triangle};

/// Returns `epsilon·n²`, the number of deletions an `epsilon`-far graph on `n` vertices needs.
#[inline]
pub fn required_deletions(order: usize, epsilon: f64) -> f64 {
    let n = order as f64;
    epsilon * n * n
}

fn require_finite(epsilon: f64) -> Result<(), AnalysisError> {
    if epsilon.is_finite() {
        Ok(())
    } else {
        Err(AnalysisError::InvalidEpsilon(epsilon))
    }
}

// ============================================================================
// Certificate
// ============================================================================

/// Proof that a graph is `epsilon`-far from triangle-free.
#[derive(Clone, Debug, PartialEq)]
pub struct FarFromTriangleFree {
    epsilon: f64,
    order: usize,
    edge_count: usize,
    packing: TrianglePacking,
}

impl FarFromTriangleFree {
    /// Returns the certified fraction.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the order of the certified graph.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the edge count of the certified graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the packing backing the certificate.
    #[inline]
    pub fn packing(&self) -> &TrianglePacking {
        &self.packing
    }

    /// Returns a certificate for any smaller fraction `delta <= epsilon`.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidEpsilon`] for a non-finite `delta` and
    /// [`AnalysisError::EpsilonAboveCertified`] if `delta > epsilon`.
    pub fn weaken(&self, delta: f64) -> Result<Self, AnalysisError> {
        require_finite(delta)?;
        if delta > self.epsilon {
            return Err(AnalysisError::EpsilonAboveCertified {
                requested: delta,
                certified: self.epsilon,
            });
        }
        Ok(Self {
            epsilon: delta,
            ..self.clone()
        })
    }

    /// Returns `|E| / n²`, an upper bound on every certifiable fraction for this graph.
    ///
    /// Taking `H` edgeless gives `epsilon·n² <= |E| <= n(n−1)/2 < n²/2`, so the
    /// returned value is at least [`Self::epsilon`] and strictly below `1/2`.
    /// `None` for the graph without vertices, where every fraction holds vacuously.
    pub fn epsilon_upper_bound(&self) -> Option<f64> {
        if self.order == 0 {
            return None;
        }
        let n = self.order as f64;
        let bound = self.edge_count as f64 / (n * n);
        debug_assert!(self.epsilon <= bound && bound < 0.5);
        Some(bound)
    }

    /// Returns a triangle of the graph when `epsilon > 0`.
    ///
    /// A positive fraction on a non-empty vertex set forces a non-empty
    /// packing, otherwise `G` itself would be a triangle-free witness.
    pub fn guaranteed_triangle(&self) -> Option<Triangle> {
        if self.epsilon > 0.0 && self.order > 0 {
            let t = self.packing.iter().next();
            debug_assert!(t.is_some());
            t
        } else {
            None
        }
    }

    /// Applies the certificate to a concrete triangle-free subgraph `h` of `g`.
    ///
    /// The returned bound satisfies `deleted_edges >= epsilon·n²`.
    ///
    /// # Errors
    /// Returns [`AnalysisError::GraphMismatch`] if `g` is not the certified
    /// graph's shape, or any precondition error of [`TrianglePacking::charge`].
    pub fn apply(&self, g: &SimpleGraph, h: &SimpleGraph) -> Result<DeletionBound, AnalysisError> {
        if g.order() != self.order || g.edge_count() != self.edge_count {
            return Err(AnalysisError::GraphMismatch {
                expected_order: self.order,
                expected_edges: self.edge_count,
            });
        }
        let bound = self.packing.charge(g, h)?;
        debug_assert!(bound.deleted_edges as f64 >= required_deletions(self.order, self.epsilon));
        Ok(bound)
    }
}

/// Certifies that `g` is `epsilon`-far from triangle-free using `packing`.
///
/// # Errors
/// - [`AnalysisError::InvalidEpsilon`] for a non-finite `epsilon`.
/// - [`AnalysisError::NotATriangle`] if the packing was built for another graph.
/// - [`AnalysisError::PackingTooSmall`] if `|packing| < epsilon·n²`.
pub fn certify_far_from_triangle_free(
    g: &SimpleGraph,
    packing: &TrianglePacking,
    epsilon: f64,
) -> Result<FarFromTriangleFree, AnalysisError> {
    require_finite(epsilon)?;
    if let Some(triangle) = packing.iter().find(|t| !t.is_triangle_of(g)) {
        return Err(AnalysisError::NotATriangle { triangle });
    }
    let required = required_deletions(g.order(), epsilon);
    if (packing.len() as f64) < required {
        return Err(AnalysisError::PackingTooSmall {
            size: packing.len(),
            required,
        });
    }
    tracing::debug!(
        epsilon,
        packing = packing.len(),
        required,
        "certified far from triangle-free"
    );
    Ok(FarFromTriangleFree {
        epsilon,
        order: g.order(),
        edge_count: g.edge_count(),
        packing: packing.clone(),
    })
}

// ============================================================================
// Necessary conditions
// ============================================================================

/// Checks numeric consequences of `g` being `epsilon`-far from triangle-free.
///
/// Checked in order:
/// 1. `epsilon < 1/2` on a non-empty vertex set;
/// 2. a triangle-free `g` only admits `epsilon <= 0`;
/// 3. `epsilon·n² <= |E|` (take `H` edgeless);
/// 4. `epsilon·n² <= |E(G)| − |E(H)|` for the greedy maximal triangle-free subgraph `H`.
///
/// `Ok(())` does not prove the property.
///
/// # Errors
/// Returns the first violated condition.
pub fn check_necessary_conditions(
    g: &SimpleGraph,
    epsilon: f64,
) -> Result<(), NecessaryConditionViolation> {
    if !epsilon.is_finite() {
        return Err(NecessaryConditionViolation::InvalidEpsilon(epsilon));
    }
    let order = g.order();
    if epsilon <= 0.0 || order == 0 {
        return Ok(());
    }
    if epsilon >= 0.5 {
        return Err(NecessaryConditionViolation::EpsilonTooLarge { epsilon, order });
    }
    if find_triangle(g).is_none() {
        return Err(NecessaryConditionViolation::TriangleFreeWithPositiveEpsilon { epsilon });
    }
    let required = required_deletions(order, epsilon);
    let edges = g.edge_count();
    if (edges as f64) < required {
        return Err(NecessaryConditionViolation::TooFewEdges { edges, required });
    }
    let deleted = distance_upper_bound(g);
    if (deleted as f64) < required {
        return Err(NecessaryConditionViolation::DistanceTooSmall { deleted, required });
    }
    Ok(())
}

/// Returns an upper bound on the number of deletions needed to make `g` triangle-free.
pub fn distance_upper_bound(g: &SimpleGraph) -> usize {
    g.edge_count() - greedy_triangle_free_subgraph(g).edge_count()
}

// ============================================================================
// Decision
// ============================================================================

/// Outcome of [`decide_far_from_triangle_free`].
#[derive(Clone, Debug, PartialEq)]
pub enum FarVerdict {
    /// A packing meets the threshold.
    Certified(FarFromTriangleFree),
    /// A necessary condition fails, so the graph is not `epsilon`-far.
    Refuted(NecessaryConditionViolation),
    /// Neither direction settles the question.
    Undetermined {
        /// Size of the best packing found.
        packing_size: usize,
        /// `epsilon·n²`.
        required: f64,
        /// Deletions that provably suffice.
        distance_upper_bound: usize,
    },
}

impl FarVerdict {
    /// Returns `true` for [`FarVerdict::Certified`].
    #[inline]
    pub fn is_certified(&self) -> bool {
        matches!(self, FarVerdict::Certified(_))
    }

    /// Returns `true` for [`FarVerdict::Refuted`].
    #[inline]
    pub fn is_refuted(&self) -> bool {
        matches!(self, FarVerdict::Refuted(_))
    }
}

/// Tries both directions for `epsilon`: necessary conditions first, then a packing.
///
/// `epsilon <= 0` is always certified by the empty packing.
///
/// # Errors
/// Returns [`AnalysisError::InvalidEpsilon`] for a non-finite `epsilon`.
pub fn decide_far_from_triangle_free(
    g: &SimpleGraph,
    epsilon: f64,
    strategy: PackingStrategy,
) -> Result<FarVerdict, AnalysisError> {
    require_finite(epsilon)?;
    if epsilon <= 0.0 || g.order() == 0 {
        let cert = certify_far_from_triangle_free(g, &TrianglePacking::empty(), epsilon)?;
        return Ok(FarVerdict::Certified(cert));
    }
    if let Err(violation) = check_necessary_conditions(g, epsilon) {
        tracing::debug!(%violation, "far-from-triangle-free refuted");
        return Ok(FarVerdict::Refuted(violation));
    }
    let packing = strategy.build(g);
    match certify_far_from_triangle_free(g, &packing, epsilon) {
        Ok(cert) => Ok(FarVerdict::Certified(cert)),
        Err(AnalysisError::PackingTooSmall { size, required }) => Ok(FarVerdict::Undetermined {
            packing_size: size,
            required,
            distance_upper_bound: distance_upper_bound(g),
        }),
        Err(e) => Err(e),
    }
}

/// Returns `true` iff `g` is certified `epsilon`-far from triangle-free by a greedy packing.
///
/// Never `true` without a certificate; undetermined cases and invalid
/// `epsilon` report `false`.
pub fn is_far_from_triangle_free(g: &SimpleGraph, epsilon: f64) -> bool {
    matches!(
        decide_far_from_triangle_free(g, epsilon, PackingStrategy::Greedy),
        Ok(FarVerdict::Certified(_))
    )
}

// ============================================================================
// Tests
// ============================================================================
