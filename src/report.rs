//! One-shot analysis of a graph, plus a parallel driver for batches of independent graphs.

use crate::certify::{decide_far_from_triangle_free, distance_upper_bound, FarVerdict};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::graph::{Edge, SimpleGraph};
use crate::linear::{edge_disjoint_violation, uncovered_edge};
use crate::triangle::{triangles, Triangle};
use rayon::prelude::*;
use std::fmt;

/// Everything the analysis modules report about one graph.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    /// `|V|`.
    pub order: usize,
    /// `|E|`.
    pub edge_count: usize,
    /// `|T|`.
    pub triangle_count: usize,
    /// Triangles pairwise share at most one vertex.
    pub edge_disjoint: bool,
    /// Edge-disjoint and every edge lies in a triangle.
    pub locally_linear: bool,
    /// Two triangles sharing an edge, when collected.
    pub overlapping_pair: Option<(Triangle, Triangle)>,
    /// An edge in no triangle, when collected.
    pub uncovered_edge: Option<Edge>,
    /// Size of the packing built by the configured strategy.
    pub packing_size: usize,
    /// Deletions that provably suffice to reach a triangle-free subgraph.
    pub distance_upper_bound: usize,
    /// Fraction the verdict refers to.
    pub epsilon: f64,
    /// Far-from-triangle-free verdict for `epsilon`.
    pub verdict: FarVerdict,
}

impl AnalysisReport {
    /// Analyses `g` under `cfg`.
    ///
    /// # Errors
    /// Returns an error if `cfg` does not validate.
    pub fn analyze(g: &SimpleGraph, cfg: &AnalysisConfig) -> Result<Self, AnalysisError> {
        cfg.validate()?;
        let triangle_count = triangles(g).len();
        let overlapping_pair = edge_disjoint_violation(g);
        let uncovered = uncovered_edge(g);
        let edge_disjoint = overlapping_pair.is_none();
        let locally_linear = edge_disjoint && uncovered.is_none();
        let packing_size = cfg.packing.build(g).len();
        let verdict = decide_far_from_triangle_free(g, cfg.epsilon, cfg.packing)?;

        tracing::info!(
            order = g.order(),
            edges = g.edge_count(),
            triangles = triangle_count,
            edge_disjoint,
            locally_linear,
            packing = packing_size,
            "analysed graph"
        );
        if let FarVerdict::Refuted(violation) = &verdict {
            tracing::warn!(epsilon = cfg.epsilon, %violation, "not far from triangle-free");
        }

        Ok(Self {
            order: g.order(),
            edge_count: g.edge_count(),
            triangle_count,
            edge_disjoint,
            locally_linear,
            overlapping_pair: overlapping_pair.filter(|_| cfg.collect_witnesses),
            uncovered_edge: uncovered.filter(|_| cfg.collect_witnesses),
            packing_size,
            distance_upper_bound: distance_upper_bound(g),
            epsilon: cfg.epsilon,
            verdict,
        })
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "vertices: {}  edges: {}  triangles: {}",
            self.order, self.edge_count, self.triangle_count
        )?;
        write!(f, "edge-disjoint triangles: {}", self.edge_disjoint)?;
        if let Some((x, y)) = self.overlapping_pair {
            write!(f, " ({x} and {y} share an edge)")?;
        }
        writeln!(f)?;
        write!(f, "locally linear: {}", self.locally_linear)?;
        if let Some(e) = self.uncovered_edge {
            write!(f, " (edge {e} lies in no triangle)")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "disjoint packing: {}  deletions to triangle-free: between {} and {}",
            self.packing_size, self.packing_size, self.distance_upper_bound
        )?;
        match &self.verdict {
            FarVerdict::Certified(_) => {
                write!(f, "{}-far from triangle-free: certified", self.epsilon)
            }
            FarVerdict::Refuted(violation) => {
                write!(f, "{}-far from triangle-free: refuted ({violation})", self.epsilon)
            }
            FarVerdict::Undetermined {
                packing_size,
                required,
                ..
            } => write!(
                f,
                "{}-far from triangle-free: undetermined (packing {packing_size} < {required})",
                self.epsilon
            ),
        }
    }
}

/// Analyses independent graphs in parallel; results keep input order.
///
/// # Errors
/// Returns an error if `cfg` does not validate.
pub fn analyze_batch(
    graphs: &[SimpleGraph],
    cfg: &AnalysisConfig,
) -> Result<Vec<AnalysisReport>, AnalysisError> {
    cfg.validate()?;
    graphs
        .par_iter()
        .map(|g| AnalysisReport::analyze(g, cfg))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
