//! Property-based tests using proptest
//!
//! Random graphs on at most 10 vertices, with each pair present independently.

use proptest::prelude::*;
use trianglefree::graph::Edge;
use trianglefree::linear::max_edge_multiplicity;
use trianglefree::prelude::*;
use trianglefree::triangle::count_triangles;

// ============================================================================
// Strategies
// ============================================================================

fn graph_from_bits(n: usize, bits: &[bool]) -> SimpleGraph {
    let pairs = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)));
    let edges: Vec<(usize, usize)> = pairs
        .zip(bits)
        .filter(|(_, &keep)| keep)
        .map(|(e, _)| e)
        .collect();
    SimpleGraph::from_edges(n, edges).unwrap()
}

fn graph_strategy(max_n: usize) -> impl Strategy<Value = SimpleGraph> {
    (0..=max_n).prop_flat_map(|n| {
        prop::collection::vec(any::<bool>(), n * n.saturating_sub(1) / 2)
            .prop_map(move |bits| graph_from_bits(n, &bits))
    })
}

// A graph with a random triangle-free spanning subgraph of it.
fn graph_with_triangle_free_subgraph() -> impl Strategy<Value = (SimpleGraph, SimpleGraph)> {
    (graph_strategy(10), prop::collection::vec(any::<bool>(), 45)).prop_map(|(g, drop)| {
        let dropped: Vec<Edge> = g
            .edges()
            .zip(&drop)
            .filter(|(_, &d)| d)
            .map(|(e, _)| e)
            .collect();
        let h = greedy_triangle_free_subgraph(&g.without_edges(dropped));
        (g, h)
    })
}

fn brute_force_triangles(g: &SimpleGraph) -> TriangleSet {
    let n = g.order();
    let mut out = TriangleSet::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                if g.has_edge(a, b) && g.has_edge(a, c) && g.has_edge(b, c) {
                    out.insert(Triangle::new(a, b, c));
                }
            }
        }
    }
    out
}

// ============================================================================
// Enumeration
// ============================================================================

proptest! {
    // Property: enumeration finds exactly the pairwise-adjacent triples
    #[test]
    fn enumeration_matches_brute_force(g in graph_strategy(10)) {
        let found = triangles(&g);
        prop_assert_eq!(&found, &brute_force_triangles(&g));
        prop_assert_eq!(count_triangles(&g), found.len());
        prop_assert_eq!(is_triangle_free(&g), found.is_empty());
        for t in &found {
            prop_assert!(t.is_triangle_of(&g));
        }
    }
}

// ============================================================================
// Edge-disjointness and local linearity
// ============================================================================

proptest! {
    // Property: the pairwise and per-edge characterizations agree
    #[test]
    fn edge_disjoint_characterizations_agree(g in graph_strategy(10)) {
        prop_assert_eq!(is_edge_disjoint_triangles(&g), is_edge_disjoint_by_multiplicity(&g));
        prop_assert_eq!(is_edge_disjoint_triangles(&g), max_edge_multiplicity(&g) <= 1);
    }

    // Property: edge-disjoint triangles cover at most |E| edges, three each
    #[test]
    fn edge_disjoint_implies_triangle_edge_bound(g in graph_strategy(10)) {
        let count = triangles(&g).len();
        match triangle_edge_bound(&g) {
            Ok(bound) => {
                prop_assert!(is_edge_disjoint_triangles(&g));
                prop_assert_eq!(bound.triangles(), count);
                prop_assert_eq!(bound.uncovered_edges(), g.edge_count() - 3 * count);
                prop_assert!(3 * count <= g.edge_count());
            }
            Err(AnalysisError::NotEdgeDisjoint { first, second }) => {
                prop_assert!(!is_edge_disjoint_triangles(&g));
                prop_assert!(first < second);
                prop_assert!(first.shared_vertices(second) >= 2);
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    // Property: locally linear graphs have exactly three edges per triangle
    #[test]
    fn locally_linear_implies_edge_count(g in graph_strategy(10)) {
        if is_locally_linear(&g) {
            prop_assert!(is_edge_disjoint_triangles(&g));
            prop_assert_eq!(g.edge_count(), 3 * triangles(&g).len());
            prop_assert_eq!(locally_linear_edge_count(&g), Ok(g.edge_count()));
        } else {
            prop_assert!(locally_linear_edge_count(&g).is_err());
        }
    }
}

// ============================================================================
// Packing bound
// ============================================================================

proptest! {
    // Property: a packing never exceeds the deletions to any triangle-free subgraph
    #[test]
    fn packing_bounds_every_triangle_free_subgraph((g, h) in graph_with_triangle_free_subgraph()) {
        prop_assert!(is_triangle_free(&h));
        let packing = TrianglePacking::greedy(&g);
        let bound = packing.charge(&g, &h).unwrap();
        prop_assert!(bound.holds());
        prop_assert_eq!(bound.packing_size, packing.len());
        prop_assert_eq!(bound.deleted_edges, g.edge_count() - h.edge_count());

        // The charging map is injective into deleted edges of its own triangle.
        let mut charged: Vec<Edge> = Vec::new();
        for (t, e) in &bound.witnesses {
            let (u, v) = e.endpoints();
            prop_assert!(t.contains_edge(*e));
            prop_assert!(g.has_edge(u, v));
            prop_assert!(!h.has_edge(u, v));
            prop_assert!(!charged.contains(e));
            charged.push(*e);
        }
    }

    // Property: the bound also holds for any sub-packing of a valid packing
    #[test]
    fn partial_packings_bound_every_triangle_free_subgraph(
        (g, h) in graph_with_triangle_free_subgraph(),
        keep in prop::collection::vec(any::<bool>(), 15)
    ) {
        let greedy = TrianglePacking::greedy(&g);
        let chosen: Vec<Triangle> = greedy
            .iter()
            .zip(&keep)
            .filter(|(_, &k)| k)
            .map(|(t, _)| t)
            .collect();
        let partial = TrianglePacking::new(&g, chosen.iter().copied()).unwrap();
        prop_assert_eq!(partial.len(), chosen.len());

        let bound = partial.charge(&g, &h).unwrap();
        prop_assert!(bound.holds());
        prop_assert!(bound.packing_size <= greedy.charge(&g, &h).unwrap().packing_size);
        let charged: Vec<Triangle> = bound.witnesses.iter().map(|(t, _)| *t).collect();
        prop_assert_eq!(charged, chosen);
    }

    // Property: shuffled packings are valid and no smaller than the greedy one
    #[test]
    fn randomized_packing_is_valid(g in graph_strategy(10), seed in any::<u64>()) {
        let greedy = PackingStrategy::Greedy.build(&g);
        let randomized = PackingStrategy::Randomized { seed, rounds: 4 }.build(&g);
        prop_assert!(randomized.len() >= greedy.len());
        let rebuilt = TrianglePacking::new(&g, randomized.iter()).unwrap();
        prop_assert_eq!(rebuilt, randomized);
    }
}

// ============================================================================
// Far from triangle-free
// ============================================================================

proptest! {
    // Property: being far is preserved when epsilon shrinks
    #[test]
    fn far_is_monotone_in_epsilon(
        g in graph_strategy(10),
        epsilon in 0.0f64..0.1,
        shrink in 0.0f64..=1.0
    ) {
        let delta = epsilon * shrink;
        if is_far_from_triangle_free(&g, epsilon) {
            prop_assert!(is_far_from_triangle_free(&g, delta));
        }
        let packing = TrianglePacking::greedy(&g);
        if let Ok(cert) = certify_far_from_triangle_free(&g, &packing, epsilon) {
            let weaker = cert.weaken(delta).unwrap();
            prop_assert_eq!(weaker.epsilon(), delta);
        }
    }

    // Property: every certified fraction lies below 1/2
    #[test]
    fn certified_epsilon_is_below_half(g in graph_strategy(10)) {
        prop_assume!(g.order() > 0);
        let packing = TrianglePacking::greedy(&g);
        let n = g.order() as f64;
        let epsilon = packing.len() as f64 / (2.0 * n * n);
        let cert = certify_far_from_triangle_free(&g, &packing, epsilon).unwrap();
        let bound = cert.epsilon_upper_bound().unwrap();
        prop_assert!(cert.epsilon() <= bound);
        prop_assert!(bound < 0.5);
        prop_assert!(check_necessary_conditions(&g, 0.5).is_err());
    }

    // Property: a triangle-free graph is never far for a positive fraction
    #[test]
    fn triangle_free_is_never_far(g in graph_strategy(10), epsilon in 1e-6f64..1.0) {
        prop_assume!(g.order() > 0);
        let h = greedy_triangle_free_subgraph(&g);
        prop_assert!(!is_far_from_triangle_free(&h, epsilon));
        prop_assert!(check_necessary_conditions(&h, epsilon).is_err());
    }

    // Property: a certificate for a positive fraction exhibits a triangle
    #[test]
    fn positive_certificate_has_a_triangle(g in graph_strategy(10), epsilon in 1e-6f64..0.1) {
        if let Ok(FarVerdict::Certified(cert)) =
            decide_far_from_triangle_free(&g, epsilon, PackingStrategy::Greedy)
        {
            if g.order() > 0 {
                let t = cert.guaranteed_triangle().unwrap();
                prop_assert!(t.is_triangle_of(&g));
            }
        }
    }
}
