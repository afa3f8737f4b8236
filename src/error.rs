//! Error types shared by the analysis modules.

use crate::graph::Edge;
use crate::triangle::Triangle;
use thiserror::Error;

/// Errors encountered while parsing an adjacency matrix or snapshotting an adjacency oracle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphParseError {
    /// No non-empty rows were found.
    #[error("adjacency matrix is empty")]
    Empty,
    /// Matrix is not square.
    #[error("adjacency matrix is not square: row {row} has length {got}, expected {expected}")]
    NonSquare {
        /// The row index with wrong length.
        row: usize,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
    /// Encountered a non `0/1` character.
    #[error("invalid character at ({row}, {col}): {ch:?} (expected '0' or '1')")]
    InvalidChar {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The invalid character.
        ch: char,
    },
    /// The graph has more than 64 vertices, which doesn't fit in a `u64` bitset.
    #[error("graph has {n} vertices; this implementation supports n <= 64")]
    TooManyVertices {
        /// Number of vertices.
        n: usize,
    },
    /// A vertex is adjacent to itself.
    #[error("self-loop detected at vertex {vertex}")]
    SelfLoop {
        /// The vertex with a self-loop.
        vertex: usize,
    },
    /// `A[i][j] != A[j][i]`.
    #[error("adjacency is not symmetric at ({i},{j}): A[i][j]={a_ij}, A[j][i]={a_ji}")]
    NotSymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// Value at A[i][j].
        a_ij: u8,
        /// Value at A[j][i].
        a_ji: u8,
    },
    /// An edge refers to a vertex outside `0..n`.
    #[error("edge ({u}, {v}) is out of range for a graph of order {n}")]
    VertexOutOfRange {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
        /// Graph order.
        n: usize,
    },
    /// An adjacency oracle listed a vertex outside `0..order()`.
    #[error("oracle lists vertex {vertex}, outside 0..{n}")]
    OracleVertexOutOfRange {
        /// The listed vertex.
        vertex: usize,
        /// Order reported by the oracle.
        n: usize,
    },
    /// I/O error (file not found, etc.).
    #[error("I/O error: {0}")]
    Io(String),
}

/// A violated precondition of a counting bound or certificate.
///
/// Every bound in this crate checks its hypotheses first and reports the first
/// counterexample it finds instead of returning a number.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AnalysisError {
    /// A packing member is not a triangle of the graph.
    #[error("{triangle} is not a triangle of the graph")]
    NotATriangle {
        /// The offending vertex triple.
        triangle: Triangle,
    },
    /// Two triangles share an edge.
    #[error("triangles {first} and {second} share an edge")]
    NotEdgeDisjoint {
        /// First triangle (smaller in canonical order).
        first: Triangle,
        /// Second triangle.
        second: Triangle,
    },
    /// Two graphs that must live on the same vertex set do not.
    #[error("vertex set mismatch: expected order {expected}, got {got}")]
    OrderMismatch {
        /// Order of the host graph.
        expected: usize,
        /// Order of the other graph.
        got: usize,
    },
    /// The candidate subgraph has an edge the host graph lacks.
    #[error("edge {edge} is not an edge of the host graph")]
    NotSubgraph {
        /// The offending edge.
        edge: Edge,
    },
    /// The candidate subgraph still contains a triangle.
    #[error("subgraph is not triangle-free: it contains {triangle}")]
    NotTriangleFree {
        /// A triangle of the subgraph.
        triangle: Triangle,
    },
    /// An edge lies in no triangle, so the graph is not locally linear.
    #[error("edge {edge} lies in no triangle")]
    UncoveredEdge {
        /// The uncovered edge.
        edge: Edge,
    },
    /// Two packing triangles were charged to the same deleted edge.
    #[error("triangles {first} and {second} were both charged to edge {edge}")]
    ChargingCollision {
        /// The shared witness edge.
        edge: Edge,
        /// First triangle charged to `edge`.
        first: Triangle,
        /// Second triangle charged to `edge`.
        second: Triangle,
    },
    /// The threshold fraction is NaN or infinite.
    #[error("epsilon must be finite, got {0}")]
    InvalidEpsilon(f64),
    /// The packing has fewer than `epsilon * n^2` triangles.
    #[error("packing has {size} triangles, needs at least {required}")]
    PackingTooSmall {
        /// Packing size.
        size: usize,
        /// `epsilon * n^2`.
        required: f64,
    },
    /// A certificate cannot be strengthened to a larger fraction.
    #[error("cannot weaken a certificate for epsilon {certified} to {requested}")]
    EpsilonAboveCertified {
        /// Requested fraction.
        requested: f64,
        /// Certified fraction.
        certified: f64,
    },
    /// A certificate was applied to a graph it was not issued for.
    #[error("certificate was issued for a graph with {expected_order} vertices and {expected_edges} edges")]
    GraphMismatch {
        /// Order recorded in the certificate.
        expected_order: usize,
        /// Edge count recorded in the certificate.
        expected_edges: usize,
    },
}

/// A necessary condition of far-from-triangle-freeness that the graph fails.
///
/// Any of these proves that the graph is *not* `epsilon`-far from triangle-free.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum NecessaryConditionViolation {
    /// `epsilon >= 1/2` on a non-empty vertex set.
    #[error("epsilon {epsilon} is not below 1/2 on {order} vertices")]
    EpsilonTooLarge {
        /// Requested fraction.
        epsilon: f64,
        /// Number of vertices.
        order: usize,
    },
    /// The graph is already triangle-free but `epsilon > 0`.
    #[error("graph is triangle-free, so epsilon {epsilon} must be <= 0")]
    TriangleFreeWithPositiveEpsilon {
        /// Requested fraction.
        epsilon: f64,
    },
    /// Deleting every edge costs less than `epsilon * n^2`.
    #[error("graph has {edges} edges but epsilon * n^2 = {required}")]
    TooFewEdges {
        /// Edge count of the graph.
        edges: usize,
        /// `epsilon * n^2`.
        required: f64,
    },
    /// A known triangle-free subgraph is closer than `epsilon * n^2` deletions.
    #[error("a triangle-free subgraph is reachable with {deleted} deletions, below {required}")]
    DistanceTooSmall {
        /// Deletions needed to reach the known triangle-free subgraph.
        deleted: usize,
        /// `epsilon * n^2`.
        required: f64,
    },
    /// The threshold fraction is NaN or infinite.
    #[error("epsilon must be finite, got {0}")]
    InvalidEpsilon(f64),
}

/// Failure while validating bundled reference graphs.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    /// The bundled file did not parse.
    #[error("{name}: {source}")]
    Parse {
        /// Bundled file name.
        name: &'static str,
        /// Underlying parse error.
        #[source]
        source: GraphParseError,
    },
    /// A computed property differs from the expected one.
    #[error("{name}: expected {property} = {expected}, got {got}")]
    Mismatch {
        /// Bundled file name.
        name: &'static str,
        /// Property being checked.
        property: &'static str,
        /// Expected value.
        expected: String,
        /// Computed value.
        got: String,
    },
    /// A double-counting identity failed with a precondition error.
    #[error("{name}: {source}")]
    Analysis {
        /// Bundled file name.
        name: &'static str,
        /// Underlying analysis error.
        #[source]
        source: AnalysisError,
    },
}
