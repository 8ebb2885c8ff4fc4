//! The read-only query surface shared by every graph family.

use std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::Add,
};

use crate::{
    adjacency_graph::AdjacencyGraph,
    directedness::Directedness,
    error::Result,
    matrix::Matrix,
    pairs::Pair,
    tracing_support::info_span,
    vertex::VertexId,
};

/// Identity of an edge in a graph with directedness `D`.
pub type EdgeId<D> = <D as Directedness>::Pair<VertexId>;

/// Numeric type of edge weights, degrees and edge counts.  Static graphs
/// count edges with `usize`; link streams use `f64` time fractions.
pub trait Weight:
    Copy + Default + PartialEq + PartialOrd + Debug + Display + Add<Output = Self> + Sum<Self>
{
    fn to_f64(self) -> f64;
}

impl Weight for usize {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Weight for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// A graph whose structure lives in an [`AdjacencyGraph`] and whose edges
/// carry a [`Weight`].
///
/// Implementors supply the structure and the weight of each stored edge;
/// every other query is derived from those two.  For undirected networks a
/// self-loop contributes its weight twice to the degree of its vertex, so
/// the sum of degrees is always twice [`Network::num_edges`].
pub trait Network {
    type Directedness: Directedness;
    type Weight: Weight;

    fn structure(&self) -> &AdjacencyGraph<Self::Directedness>;

    /// Weight of an edge returned by [`Network::edges`].
    fn edge_weight(&self, edge: &EdgeId<Self::Directedness>) -> Self::Weight;

    fn is_directed(&self) -> bool {
        Self::Directedness::is_directed()
    }

    fn num_vertices(&self) -> usize {
        self.structure().num_vertices()
    }

    /// All vertices in creation order.
    fn vertices(&self) -> impl Iterator<Item = VertexId> {
        self.structure().vertices()
    }

    fn has_vertex(&self, v: VertexId) -> bool {
        self.structure().has_vertex(v)
    }

    fn vertex(&self, label: &str) -> Result<VertexId> {
        self.structure().vertex(label)
    }

    fn label(&self, v: VertexId) -> Result<&str> {
        self.structure().label(v)
    }

    fn has_label(&self, label: &str) -> bool {
        self.structure().has_label(label)
    }

    fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.structure().has_edge(u, v)
    }

    fn has_edge_by_label(&self, u: &str, v: &str) -> Result<bool> {
        Ok(self.has_edge(self.vertex(u)?, self.vertex(v)?))
    }

    /// Distinct vertices adjacent to `v` in either direction, ascending.
    fn neighbors(&self, v: VertexId) -> Result<Vec<VertexId>> {
        self.structure().neighbors(v)
    }

    /// Distinct edges in order of first insertion.
    fn edges(&self) -> impl Iterator<Item = EdgeId<Self::Directedness>> {
        self.structure().edges()
    }

    /// Sum of all edge weights.
    fn num_edges(&self) -> Self::Weight {
        self.edges().map(|edge| self.edge_weight(&edge)).sum()
    }

    fn out_degree(&self, v: VertexId) -> Result<Self::Weight> {
        let directed = self.is_directed();
        let mut total = Self::Weight::default();
        for w in self.structure().successors(v)? {
            let weight = self.edge_weight(&<EdgeId<Self::Directedness>>::from((v, w)));
            total = total + weight;
            if w == v && !directed {
                total = total + weight;
            }
        }
        Ok(total)
    }

    fn in_degree(&self, v: VertexId) -> Result<Self::Weight> {
        if !self.is_directed() {
            return self.out_degree(v);
        }
        let mut total = Self::Weight::default();
        for u in self.structure().predecessors(v)? {
            total = total + self.edge_weight(&<EdgeId<Self::Directedness>>::from((u, v)));
        }
        Ok(total)
    }

    /// Out plus in degree for directed networks; the incident weight
    /// (loops counted twice) for undirected ones.
    fn degree(&self, v: VertexId) -> Result<Self::Weight> {
        if self.is_directed() {
            Ok(self.out_degree(v)? + self.in_degree(v)?)
        } else {
            self.out_degree(v)
        }
    }

    fn degree_by_label(&self, label: &str) -> Result<Self::Weight> {
        self.degree(self.vertex(label)?)
    }

    /// Mean of [`Network::degree`] over all vertices; 0 for an empty network.
    fn avg_degree(&self) -> f64 {
        let n = self.num_vertices();
        if n == 0 {
            return 0.0;
        }
        2.0 * self.num_edges().to_f64() / n as f64
    }

    /// `2m / n(n-1)` for undirected and `m / n(n-1)` for directed networks,
    /// where `m` is [`Network::num_edges`].  0 when there are fewer than two
    /// vertices.
    fn density(&self) -> f64 {
        let n = self.num_vertices();
        if n < 2 {
            return 0.0;
        }
        let m = self.num_edges().to_f64();
        let pairs = (n * (n - 1)) as f64;
        if self.is_directed() { m / pairs } else { 2.0 * m / pairs }
    }

    /// `n x n` matrix of edge weights, symmetric for undirected networks.
    fn adjacency(&self) -> Matrix<Self::Weight> {
        let n = self.num_vertices();
        let _span = info_span!("adjacency", n).entered();
        let directed = self.is_directed();
        let mut matrix = Matrix::zeros(n, n);
        for edge in self.edges() {
            let (u, v) = (edge.first().index(), edge.second().index());
            let weight = self.edge_weight(&edge);
            matrix.set(u, v, weight);
            if !directed {
                matrix.set(v, u, weight);
            }
        }
        matrix
    }
}

/// Implements label and vertex indexing for a [`Network`] type.  Indexing
/// panics on unknown labels, out-of-range vertices and unlabeled vertices;
/// use [`Network::vertex`] and [`Network::label`] for fallible lookups.
macro_rules! impl_label_index {
    ($type:ident) => {
        impl<D: $crate::directedness::Directedness> std::ops::Index<&str> for $type<D> {
            type Output = $crate::vertex::VertexId;

            fn index(&self, label: &str) -> &Self::Output {
                $crate::network::Network::structure(self).vertex_ref(label)
            }
        }

        impl<D: $crate::directedness::Directedness> std::ops::Index<$crate::vertex::VertexId>
            for $type<D>
        {
            type Output = str;

            fn index(&self, v: $crate::vertex::VertexId) -> &Self::Output {
                match $crate::network::Network::label(self, v) {
                    Ok(label) => label,
                    Err(err) => panic!("{err}"),
                }
            }
        }
    };
}

pub(crate) use impl_label_index;
