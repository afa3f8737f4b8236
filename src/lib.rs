//! # Triangle analysis for small simple graphs
//!
//! Decides structural properties of the triangles (3-cliques) of an undirected
//! simple graph on at most 64 vertices, and bounds how far the graph is from
//! being triangle-free.
//!
//! This crate provides:
//! - Triangle enumeration with vertex-set identity (no duplicates, canonical order).
//! - Edge-disjointness and local-linearity checks, with witnesses on failure and
//!   the double-counting facts `3·|T| <= |E|` and `|E| = 3·|T|`.
//! - Edge-disjoint triangle packings and the injective charging argument that turns
//!   a packing into a lower bound on deletions to reach any triangle-free subgraph.
//! - Far-from-triangle-free certificates (sufficient direction) and necessary-condition
//!   checks (refutation direction).
//!
//! ## Quick Start
//!
//! ```
//! use trianglefree::prelude::*;
//!
//! // Two vertex-disjoint triangles.
//! let g = SimpleGraph::from_edges(6, [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
//!
//! assert_eq!(triangles(&g).len(), 2);
//! assert!(is_edge_disjoint_triangles(&g));
//! assert!(is_locally_linear(&g));
//! assert_eq!(locally_linear_edge_count(&g), Ok(6));
//! ```
//!
//! ## Certificates
//!
//! ```
//! use trianglefree::prelude::*;
//!
//! let g = SimpleGraph::from_edges(6, [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
//! let packing = TrianglePacking::greedy(&g);
//!
//! // 2 disjoint triangles >= 0.05 * 6^2 deletions.
//! let cert = certify_far_from_triangle_free(&g, &packing, 0.05).unwrap();
//! assert!(cert.weaken(0.01).is_ok());
//!
//! // Any triangle-free subgraph lies at least that far away.
//! let h = greedy_triangle_free_subgraph(&g);
//! assert!(cert.apply(&g, &h).unwrap().holds());
//!
//! // The empty graph is never far for a positive fraction.
//! assert!(!is_far_from_triangle_free(&SimpleGraph::empty(6), 0.01));
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: `SimpleGraph`, `Edge`, the `AdjacencyOracle` trait and adjacency-matrix I/O.
//! - [`triangle`]: triangle enumeration and counting.
//! - [`linear`]: edge-disjointness, local linearity and double counting.
//! - [`packing`]: edge-disjoint packings and the deletion bound.
//! - [`certify`]: far-from-triangle-free certificates and verdicts.
//! - [`report`]: one-shot and batch analysis.
//! - [`validate`]: bundled reference graphs.
//!
//! ## Performance Notes
//!
//! - Graphs are stored as `u64` neighbour bitsets, limiting them to 64 vertices.
//! - Enumeration scans `N(u) ∩ N(v)` per edge, so it runs in `O(|E|·n/64 + |T|)` word operations.
//! - The pairwise edge-disjointness check is quadratic in `|T|`; the per-edge
//!   formulation is linear in `|E|`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::inline_always)] // Intentional for bitset helpers
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::doc_markdown)] // Mathematical notation in docs

pub mod certify;
pub mod config;
pub mod error;
pub mod graph;
pub mod linear;
pub mod packing;
pub mod report;
pub mod triangle;
pub mod validate;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::certify::{
        certify_far_from_triangle_free, check_necessary_conditions, decide_far_from_triangle_free,
        is_far_from_triangle_free, FarFromTriangleFree, FarVerdict,
    };
    pub use crate::config::{AnalysisConfig, PackingStrategy};
    pub use crate::error::{AnalysisError, GraphParseError, NecessaryConditionViolation};
    pub use crate::graph::{parse_adjacency_matrix, AdjacencyOracle, Edge, SimpleGraph};
    pub use crate::linear::{
        is_edge_disjoint_by_multiplicity, is_edge_disjoint_triangles, is_locally_linear,
        locally_linear_edge_count, triangle_edge_bound,
    };
    pub use crate::packing::{greedy_triangle_free_subgraph, DeletionBound, TrianglePacking};
    pub use crate::report::{analyze_batch, AnalysisReport};
    pub use crate::triangle::{is_triangle_free, triangles, Triangle, TriangleSet};
    pub use crate::validate::validate_known_graphs;
}
