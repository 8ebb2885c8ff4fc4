//! Random generators and invariant checks shared by unit and integration tests.

use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;
use crate::tracing_support::{info_span, init_tracing};
use crate::util::approx_eq;

impl Arbitrary for Group {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) { Group::Top } else { Group::Bottom }
    }
}

impl Arbitrary for EdgeMultiplicity {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            EdgeMultiplicity::SingleEdge
        } else {
            EdgeMultiplicity::MultipleEdges
        }
    }
}

/// A static graph built from a random sequence of vertex and edge insertions.
#[derive(Clone, Debug)]
pub struct ArbGraph<D: Directedness> {
    pub graph: AdjacencyGraph<D>,
}

impl<D: Directedness> Arbitrary for ArbGraph<D> {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;

        let mut graph = AdjacencyGraph::<D>::new().with_multiplicity(EdgeMultiplicity::arbitrary(g));
        for i in 0..num_vertices {
            if bool::arbitrary(g) {
                graph.add_vertex();
            } else {
                let _ = graph.add_labeled_vertex(&format!("v{i}"));
            }
        }

        for _ in 0..num_edges {
            if num_vertices == 0 {
                break;
            }
            let u = VertexId::new(usize::arbitrary(g) % num_vertices);
            let v = VertexId::new(usize::arbitrary(g) % num_vertices);
            let _ = graph.add_edge(u, v);
        }

        ArbGraph { graph }
    }
}

/// A link stream over `[0, 100)` built from random timed insertions,
/// including repeated and overlapping intervals on the same edge.
#[derive(Clone, Debug)]
pub struct ArbStream<D: Directedness> {
    pub stream: StreamGraph<D>,
}

impl<D: Directedness> Arbitrary for ArbStream<D> {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 12;
        let num_insertions = usize::arbitrary(g) % 40;

        let mut stream = StreamGraph::<D>::with_vertices(num_vertices);
        // [0, 100) is a valid non-empty range.
        let _ = stream.set_definition(0, 100);
        for _ in 0..num_insertions {
            if num_vertices == 0 {
                break;
            }
            let u = VertexId::new(usize::arbitrary(g) % num_vertices);
            let v = VertexId::new(usize::arbitrary(g) % num_vertices);
            let lower = (u8::arbitrary(g) % 95) as Time;
            let upper = lower + (u8::arbitrary(g) % 5) as Time + 1;
            let _ = stream.add_edge_w_time(u, v, lower, upper);
        }

        ArbStream { stream }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a network: vertex and edge
/// enumeration, the handshaking identity, and agreement between degrees,
/// the adjacency matrix and density.
pub fn check_network_consistency<N: Network>(network: &N) {
    init_tracing();
    let _span = info_span!("check_network_consistency").entered();
    let n = network.num_vertices();
    let directed = network.is_directed();

    assert_eq!(network.vertices().count(), n);
    assert!(network.vertices().all(|v| network.has_vertex(v)));
    assert!(!network.has_vertex(VertexId::new(n)));

    assert!(!has_duplicates(network.edges()));
    for edge in network.edges() {
        let (u, v) = (*edge.first(), *edge.second());
        assert!(network.has_edge(u, v));
        if !directed {
            assert!(network.has_edge(v, u));
        }
        assert!(network.neighbors(u).unwrap().contains(&v));
    }

    let m = network.num_edges().to_f64();
    let degree_sum: f64 = network
        .vertices()
        .map(|v| network.degree(v).unwrap().to_f64())
        .sum();
    assert!(approx_eq(degree_sum, 2.0 * m), "handshake: {degree_sum} != 2 * {m}");

    if directed {
        let out_sum: f64 = network
            .vertices()
            .map(|v| network.out_degree(v).unwrap().to_f64())
            .sum();
        let in_sum: f64 = network
            .vertices()
            .map(|v| network.in_degree(v).unwrap().to_f64())
            .sum();
        assert!(approx_eq(out_sum, m));
        assert!(approx_eq(in_sum, m));
    }

    let matrix = network.adjacency();
    assert_eq!((matrix.rows(), matrix.cols()), (n, n));
    if !directed {
        assert!(matrix.is_symmetric());
    }
    let mut matrix_total = 0.0;
    for i in 0..n {
        for j in 0..n {
            if directed || i <= j {
                matrix_total += matrix[(i, j)].to_f64();
            }
        }
    }
    assert!(approx_eq(matrix_total, m));

    if n >= 2 {
        let pairs = (n * (n - 1)) as f64;
        let expected = if directed { m / pairs } else { 2.0 * m / pairs };
        assert!(approx_eq(network.density(), expected));
    } else {
        assert_eq!(network.density(), 0.0);
    }
    assert!(approx_eq(network.avg_degree() * n as f64, degree_sum));
}
