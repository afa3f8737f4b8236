//! Fast deterministic validation of bundled reference graphs.

use crate::error::ValidationError;
use crate::graph::parse_adjacency_matrix;
use crate::linear::{
    is_edge_disjoint_by_multiplicity, is_edge_disjoint_triangles, is_locally_linear,
    locally_linear_edge_count, triangle_edge_bound,
};
use crate::triangle::triangles;

/// Expected properties of one bundled graph.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceGraph {
    /// File name under `graphs/`.
    pub name: &'static str,
    /// Adjacency matrix text.
    pub text: &'static str,
    /// Expected `|E|`.
    pub edges: usize,
    /// Expected `|T|`.
    pub triangles: usize,
    /// Expected edge-disjointness.
    pub edge_disjoint: bool,
    /// Expected local linearity.
    pub locally_linear: bool,
}

/// The bundled reference graphs.
pub const REFERENCE_GRAPHS: &[ReferenceGraph] = &[
    ReferenceGraph {
        name: "two_triangles.txt",
        text: include_str!("../graphs/two_triangles.txt"),
        edges: 6,
        triangles: 2,
        edge_disjoint: true,
        locally_linear: true,
    },
    ReferenceGraph {
        name: "diamond.txt",
        text: include_str!("../graphs/diamond.txt"),
        edges: 5,
        triangles: 2,
        edge_disjoint: false,
        locally_linear: false,
    },
    ReferenceGraph {
        name: "pendant_triangle.txt",
        text: include_str!("../graphs/pendant_triangle.txt"),
        edges: 4,
        triangles: 1,
        edge_disjoint: true,
        locally_linear: false,
    },
    ReferenceGraph {
        name: "k4.txt",
        text: include_str!("../graphs/k4.txt"),
        edges: 6,
        triangles: 4,
        edge_disjoint: false,
        locally_linear: false,
    },
    ReferenceGraph {
        name: "empty6.txt",
        text: include_str!("../graphs/empty6.txt"),
        edges: 0,
        triangles: 0,
        edge_disjoint: true,
        locally_linear: true,
    },
    ReferenceGraph {
        name: "rook3x3.txt",
        text: include_str!("../graphs/rook3x3.txt"),
        edges: 18,
        triangles: 6,
        edge_disjoint: true,
        locally_linear: true,
    },
];

// ============================================================================
// Public API
// ============================================================================

/// Validates every bundled reference graph.
///
/// # Errors
/// Returns the first mismatch found.
pub fn validate_known_graphs() -> Result<(), ValidationError> {
    for reference in REFERENCE_GRAPHS {
        validate_reference(reference)?;
    }
    Ok(())
}

/// Validates one reference graph: counts, both edge-disjointness
/// characterizations, local linearity and the matching double-counting fact.
///
/// # Errors
/// Returns an error if the text does not parse or a property differs.
pub fn validate_reference(reference: &ReferenceGraph) -> Result<(), ValidationError> {
    let name = reference.name;
    let g = parse_adjacency_matrix(reference.text)
        .map_err(|source| ValidationError::Parse { name, source })?;

    check(name, "edges", reference.edges, g.edge_count())?;
    check(name, "triangles", reference.triangles, triangles(&g).len())?;
    check(name, "edge_disjoint", reference.edge_disjoint, is_edge_disjoint_triangles(&g))?;
    check(
        name,
        "edge_disjoint_by_multiplicity",
        reference.edge_disjoint,
        is_edge_disjoint_by_multiplicity(&g),
    )?;
    check(name, "locally_linear", reference.locally_linear, is_locally_linear(&g))?;

    let analysis = |source| ValidationError::Analysis { name, source };
    if reference.locally_linear {
        let count = locally_linear_edge_count(&g).map_err(analysis)?;
        check(name, "3 * triangles", reference.edges, count)?;
    } else if reference.edge_disjoint {
        let bound = triangle_edge_bound(&g).map_err(analysis)?;
        check(name, "3 * triangles <= edges", true, bound.covered_edges() <= bound.edges())?;
    }
    Ok(())
}

// ============================================================================
// Internal
// ============================================================================

fn check<T: PartialEq + ToString>(
    name: &'static str,
    property: &'static str,
    expected: T,
    got: T,
) -> Result<(), ValidationError> {
    if expected == got {
        Ok(())
    } else {
        Err(ValidationError::Mismatch {
            name,
            property,
            expected: expected.to_string(),
            got: got.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_graphs_are_valid() {
        validate_known_graphs().unwrap();
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let reference = ReferenceGraph {
            triangles: 3,
            ..REFERENCE_GRAPHS[0]
        };
        let err = validate_reference(&reference).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Mismatch {
                name: "two_triangles.txt",
                property: "triangles",
                expected: "3".to_string(),
                got: "2".to_string(),
            }
        );
    }

    #[test]
    fn malformed_text_is_reported() {
        let reference = ReferenceGraph {
            name: "broken.txt",
            text: "010\n10\n",
            edges: 0,
            triangles: 0,
            edge_disjoint: true,
            locally_linear: true,
        };
        assert!(matches!(
            validate_reference(&reference),
            Err(ValidationError::Parse { name: "broken.txt", .. })
        ));
    }

    #[test]
    fn bundled_graphs_have_expected_orders() {
        let orders: Vec<usize> = REFERENCE_GRAPHS
            .iter()
            .map(|r| parse_adjacency_matrix(r.text).unwrap().order())
            .collect();
        assert_eq!(orders, vec![6, 4, 4, 4, 6, 9]);
    }
}
