//! Simple undirected graphs on at most 64 vertices, stored as neighbour bitsets.

use crate::error::GraphParseError;
use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Largest supported order; each neighbourhood is one `u64`.
pub const MAX_ORDER: usize = 64;

/// Returns a mask with the lowest `n` bits set.
#[inline(always)]
pub const fn all_bits(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

#[inline(always)]
pub(crate) const fn bit(v: usize) -> u64 {
    1u64 << v
}

/// Iterates the set bits of `mask` from lowest to highest.
#[inline]
pub(crate) fn bits(mut mask: u64) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let v = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(v)
    })
}

// ============================================================================
// Adjacency oracle
// ============================================================================

/// Read-only view of a caller-owned simple graph.
///
/// Vertices are `0..order()`. `adjacent` must be symmetric and irreflexive;
/// [`SimpleGraph::from_oracle`] checks both when taking a snapshot.
pub trait AdjacencyOracle {
    /// Number of vertices.
    fn order(&self) -> usize;

    /// Returns whether `u` and `v` are adjacent.
    fn adjacent(&self, u: usize, v: usize) -> bool;

    /// Returns the vertex set in ascending order.
    fn vertices(&self) -> std::ops::Range<usize> {
        0..self.order()
    }
}

// ============================================================================
// Edge
// ============================================================================

/// An unordered vertex pair, stored as `(lo, hi)` with `lo < hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    lo: usize,
    hi: usize,
}

impl Edge {
    /// Creates the edge `{u, v}` in canonical form.
    ///
    /// # Panics
    /// Panics in debug builds if `u == v`.
    #[inline]
    pub fn new(u: usize, v: usize) -> Self {
        debug_assert_ne!(u, v, "an edge needs two distinct endpoints");
        if u < v {
            Self { lo: u, hi: v }
        } else {
            Self { lo: v, hi: u }
        }
    }

    /// Returns the endpoints as `(lo, hi)`.
    #[inline(always)]
    pub fn endpoints(self) -> (usize, usize) {
        (self.lo, self.hi)
    }

    /// Returns the endpoints as a bitset.
    #[inline(always)]
    pub fn mask(self) -> u64 {
        bit(self.lo) | bit(self.hi)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((u, v): (usize, usize)) -> Self {
        Self::new(u, v)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.lo, self.hi)
    }
}

// ============================================================================
// SimpleGraph
// ============================================================================

/// An undirected simple graph on vertices `0..n` with `n <= 64`.
///
/// Representation: `adj[v]` is the neighbour bitset of vertex `v`. The bitsets
/// are kept symmetric with a zero diagonal; every constructor establishes this.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SimpleGraph {
    adj: Vec<u64>,
}

impl SimpleGraph {
    /// Creates a graph from neighbour bitsets.
    ///
    /// # Errors
    /// Returns an error if there are more than 64 rows, a row has bits outside
    /// `0..n`, a self-loop, or the rows are not symmetric.
    pub fn from_adj(adj: Vec<u64>) -> Result<Self, GraphParseError> {
        let n = adj.len();
        if n > MAX_ORDER {
            return Err(GraphParseError::TooManyVertices { n });
        }
        let mask = all_bits(n);
        for (i, &row) in adj.iter().enumerate() {
            if row & !mask != 0 {
                let j = (row & !mask).trailing_zeros() as usize;
                return Err(GraphParseError::VertexOutOfRange { u: i, v: j, n });
            }
            if (row >> i) & 1 != 0 {
                return Err(GraphParseError::SelfLoop { vertex: i });
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let a_ij = ((adj[i] >> j) & 1) as u8;
                let a_ji = ((adj[j] >> i) & 1) as u8;
                if a_ij != a_ji {
                    return Err(GraphParseError::NotSymmetric { i, j, a_ij, a_ji });
                }
            }
        }
        Ok(Self { adj })
    }

    /// Creates the edgeless graph on `n` vertices.
    ///
    /// # Panics
    /// Panics if `n > 64`.
    pub fn empty(n: usize) -> Self {
        assert!(n <= MAX_ORDER, "order {n} exceeds {MAX_ORDER}");
        Self { adj: vec![0u64; n] }
    }

    /// Creates the complete graph on `n` vertices.
    ///
    /// # Panics
    /// Panics if `n > 64`.
    pub fn complete(n: usize) -> Self {
        assert!(n <= MAX_ORDER, "order {n} exceeds {MAX_ORDER}");
        let mask = all_bits(n);
        Self {
            adj: (0..n).map(|i| mask & !bit(i)).collect(),
        }
    }

    /// Creates a graph on `n` vertices from an edge list. Repeated edges are ignored.
    ///
    /// # Errors
    /// Returns an error if `n > 64`, an endpoint is out of range, or an edge is a loop.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphParseError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        if n > MAX_ORDER {
            return Err(GraphParseError::TooManyVertices { n });
        }
        let mut g = Self::empty(n);
        for (u, v) in edges {
            if u >= n || v >= n {
                return Err(GraphParseError::VertexOutOfRange { u, v, n });
            }
            if u == v {
                return Err(GraphParseError::SelfLoop { vertex: u });
            }
            g.add_edge(u, v);
        }
        Ok(g)
    }

    /// Takes a snapshot of any adjacency oracle.
    ///
    /// # Errors
    /// Returns an error if the oracle has more than 64 vertices, lists a vertex
    /// outside `0..order()`, reports a self-loop, or is not symmetric.
    pub fn from_oracle<G: AdjacencyOracle + ?Sized>(oracle: &G) -> Result<Self, GraphParseError> {
        let n = oracle.order();
        if n > MAX_ORDER {
            return Err(GraphParseError::TooManyVertices { n });
        }
        let listed: Vec<usize> = oracle.vertices().collect();
        if let Some(&vertex) = listed.iter().find(|&&v| v >= n) {
            return Err(GraphParseError::OracleVertexOutOfRange { vertex, n });
        }
        let mut adj = vec![0u64; n];
        for &u in &listed {
            for &v in &listed {
                if oracle.adjacent(u, v) {
                    adj[u] |= bit(v);
                }
            }
        }
        Self::from_adj(adj)
    }

    /// Creates an Erdős–Rényi random graph `G(n, p)`.
    ///
    /// # Panics
    /// Panics if `n > 64`; panics in debug builds if `p` is outside `[0, 1]`.
    pub fn new_random<R: Rng>(n: usize, rng: &mut R, p: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
        let mut g = Self::empty(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(p) {
                    g.add_edge(i, j);
                }
            }
        }
        g
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.adj.len()
    }

    /// Returns the vertex set `0..n`.
    #[inline]
    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.order()
    }

    /// Returns the neighbour bitset of `v`.
    #[inline(always)]
    pub fn neighbors(&self, v: usize) -> u64 {
        self.adj[v]
    }

    /// Returns whether the edge `(u, v)` exists.
    #[inline(always)]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        debug_assert!(u < self.order() && v < self.order());
        (self.adj[u] & bit(v)) != 0
    }

    /// Returns the degree of vertex `v`.
    #[inline(always)]
    pub fn degree(&self, v: usize) -> u32 {
        self.adj[v].count_ones()
    }

    /// Returns the total number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        let sum: u32 = self.adj.iter().map(|row| row.count_ones()).sum();
        (sum as usize) / 2
    }

    /// Returns all edges in canonical (lexicographic) order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            let above = !all_bits(u + 1);
            bits(self.adj[u] & above).map(move |v| Edge { lo: u, hi: v })
        })
    }

    /// Adds the edge `(u, v)`; a no-op if it already exists.
    ///
    /// # Panics
    /// Panics in debug builds if `u == v` or indices are out of range.
    #[inline]
    pub fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.order() && v < self.order());
        debug_assert!(u != v);
        self.adj[u] |= bit(v);
        self.adj[v] |= bit(u);
    }

    /// Removes the edge `(u, v)`; a no-op if it is absent.
    #[inline]
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.order() && v < self.order());
        self.adj[u] &= !bit(v);
        self.adj[v] &= !bit(u);
    }

    /// Returns a copy of this graph with the given edges deleted.
    pub fn without_edges<I: IntoIterator<Item = Edge>>(&self, edges: I) -> Self {
        let mut g = self.clone();
        for e in edges {
            let (u, v) = e.endpoints();
            g.remove_edge(u, v);
        }
        g
    }

    /// Checks `self ≤ host`: same vertex set and every edge of `self` is an edge of `host`.
    ///
    /// Returns `Ok(())` or the first offending edge in canonical order; a
    /// differing order is reported as `Err(None)`.
    pub fn is_subgraph_of(&self, host: &SimpleGraph) -> Result<(), Option<Edge>> {
        if self.order() != host.order() {
            return Err(None);
        }
        for u in self.vertices() {
            let extra = self.adj[u] & !host.adj[u] & !all_bits(u + 1);
            if extra != 0 {
                return Err(Some(Edge::new(u, extra.trailing_zeros() as usize)));
            }
        }
        Ok(())
    }

    /// Saves the adjacency matrix to a file as an `n x n` matrix of `0/1` characters.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_file(&self, filename: impl AsRef<Path>) -> io::Result<()> {
        let mut f = File::create(filename)?;
        self.write_to(&mut f)
    }

    /// Writes the adjacency matrix as an `n x n` matrix of `0/1` characters.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        let n = self.order();
        for i in 0..n {
            for j in 0..n {
                let edge = (self.adj[i] >> j) & 1;
                write!(w, "{edge}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// Loads a graph from a file containing an adjacency matrix.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the matrix is malformed.
    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Self, GraphParseError> {
        let file = File::open(filename).map_err(|e| GraphParseError::Io(e.to_string()))?;
        let reader = BufReader::new(file);
        let mut text = String::new();
        for line in reader.lines() {
            let line = line.map_err(|e| GraphParseError::Io(e.to_string()))?;
            text.push_str(&line);
            text.push('\n');
        }
        parse_adjacency_matrix(&text)
    }
}

impl AdjacencyOracle for SimpleGraph {
    fn order(&self) -> usize {
        SimpleGraph::order(self)
    }

    fn adjacent(&self, u: usize, v: usize) -> bool {
        self.has_edge(u, v)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a `0/1` adjacency matrix from text.
///
/// Rules:
/// - Surrounding whitespace and blank lines are ignored.
/// - The matrix must be square, symmetric, and have a zero diagonal.
/// - `n` must be `<= 64`.
///
/// # Errors
/// Returns an error if the input is empty, non-square, contains invalid characters,
/// has self-loops, or is not symmetric.
pub fn parse_adjacency_matrix(text: &str) -> Result<SimpleGraph, GraphParseError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let n = rows.len();
    if n == 0 {
        return Err(GraphParseError::Empty);
    }
    if n > MAX_ORDER {
        return Err(GraphParseError::TooManyVertices { n });
    }
    let adj = rows
        .iter()
        .enumerate()
        .map(|(row, line)| parse_row(row, line, n))
        .collect::<Result<Vec<u64>, _>>()?;
    SimpleGraph::from_adj(adj)
}

/// Reads one matrix row of width `n` as a neighbour bitset.
fn parse_row(row: usize, line: &str, n: usize) -> Result<u64, GraphParseError> {
    let got = line.chars().count();
    if got != n {
        return Err(GraphParseError::NonSquare { row, expected: n, got });
    }
    line.chars()
        .enumerate()
        .try_fold(0u64, |mask, (col, ch)| match ch {
            '0' => Ok(mask),
            '1' => Ok(mask | bit(col)),
            _ => Err(GraphParseError::InvalidChar { row, col, ch }),
        })
}

// ============================================================================
// Tests
// ============================================================================
