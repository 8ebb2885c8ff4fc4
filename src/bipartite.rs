//! Static graphs whose vertices are tagged top or bottom.

use std::fmt;

use derivative::Derivative;

use crate::{
    adjacency_graph::AdjacencyGraph,
    directedness::{Directed, Directedness, Undirected},
    edge_multiplicity::EdgeMultiplicity,
    error::Result,
    group::{Bipartition, Group, GroupTags},
    matrix::Matrix,
    network::{EdgeId, Network, impl_label_index},
    pairs::Pair,
    tracing_support::info_span,
    vertex::VertexId,
};

/// A static graph plus a group tag per vertex.
///
/// [`BipartiteGraph::add_edge`] does not look at groups, so a bipartite
/// graph may hold same-group edges; use [`BipartiteGraph::add_edge_checked`]
/// to enforce the top/bottom constraint.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct BipartiteGraph<D: Directedness> {
    graph: AdjacencyGraph<D>,
    groups: GroupTags,
}

pub type Bipartite = BipartiteGraph<Undirected>;
pub type DiBipartite = BipartiteGraph<Directed>;

impl<D: Directedness> BipartiteGraph<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_multiplicity(mut self, multiplicity: EdgeMultiplicity) -> Self {
        self.graph = self.graph.with_multiplicity(multiplicity);
        self
    }

    pub fn graph(&self) -> &AdjacencyGraph<D> {
        &self.graph
    }

    /// Adds a vertex that belongs to neither group.
    pub fn add_vertex(&mut self) -> VertexId {
        self.groups.push(None);
        self.graph.add_vertex()
    }

    pub fn add_labeled_vertex(&mut self, label: &str) -> Result<VertexId> {
        let v = self.graph.add_labeled_vertex(label)?;
        self.groups.push(None);
        Ok(v)
    }

    pub fn add_vertex_w_group(&mut self, group: Group) -> VertexId {
        self.groups.push(Some(group));
        self.graph.add_vertex()
    }

    pub fn add_labeled_vertex_w_group(&mut self, group: Group, label: &str) -> Result<VertexId> {
        let v = self.graph.add_labeled_vertex(label)?;
        self.groups.push(Some(group));
        Ok(v)
    }

    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<EdgeId<D>> {
        self.graph.add_edge(u, v)
    }

    /// Like [`BipartiteGraph::add_edge`], but fails unless `u` and `v` are
    /// in different groups.
    pub fn add_edge_checked(&mut self, u: VertexId, v: VertexId) -> Result<EdgeId<D>> {
        self.check_cross_group(u, v)?;
        self.graph.add_edge(u, v)
    }

    /// Adds an edge between labeled vertices.  An unseen `u` is created in
    /// the top group and an unseen `v` in the bottom group.
    pub fn add_edge_by_label(&mut self, u: &str, v: &str) -> Result<EdgeId<D>> {
        let u = self.vertex_or_insert(u, Group::Top);
        let v = self.vertex_or_insert(v, Group::Bottom);
        Ok(self.graph.insert_edge(u, v))
    }

    fn vertex_or_insert(&mut self, label: &str, group: Group) -> VertexId {
        let before = self.graph.num_vertices();
        let v = self.graph.vertex_or_insert(label);
        if self.graph.num_vertices() > before {
            self.groups.push(Some(group));
        }
        v
    }

    /// `num_top_vertices x num_bottom_vertices` matrix of edge
    /// multiplicities, rows and columns in creation order.  An edge counts
    /// in either direction.
    pub fn biadjacency(&self) -> Matrix<usize> {
        let _span = info_span!("biadjacency").entered();
        let row_of = positions(self, Group::Top);
        let col_of = positions(self, Group::Bottom);
        let mut matrix = Matrix::zeros(self.num_top_vertices(), self.num_bottom_vertices());
        for edge in self.graph.edges() {
            let (u, v) = (*edge.first(), *edge.second());
            let weight = self.edge_weight(&edge);
            for (a, b) in [(u, v), (v, u)] {
                if let (Some(row), Some(col)) = (row_of[a.index()], col_of[b.index()]) {
                    let total = matrix[(row, col)] + weight;
                    matrix.set(row, col, total);
                }
            }
        }
        matrix
    }
}

/// For each vertex, its position among the vertices of `group`.
pub(crate) fn positions<B: Bipartition>(network: &B, group: Group) -> Vec<Option<usize>> {
    let mut positions = vec![None; network.num_vertices()];
    for (i, v) in network.vertices_in(group).enumerate() {
        positions[v.index()] = Some(i);
    }
    positions
}

impl<D: Directedness> Network for BipartiteGraph<D> {
    type Directedness = D;
    type Weight = usize;

    fn structure(&self) -> &AdjacencyGraph<D> {
        &self.graph
    }

    fn edge_weight(&self, edge: &EdgeId<D>) -> usize {
        self.graph.edge_weight(edge)
    }
}

impl<D: Directedness> Bipartition for BipartiteGraph<D> {
    fn group(&self, v: VertexId) -> Result<Option<Group>> {
        self.graph.check_vertex(v)?;
        Ok(self.groups.get(v))
    }

    fn num_vertices_in(&self, group: Group) -> usize {
        self.groups.count(group)
    }
}

impl_label_index!(BipartiteGraph);

impl<D: Directedness> fmt::Display for BipartiteGraph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Bipartite(|V|={}, |E|={})",
            D::prefix(),
            self.num_vertices(),
            self.num_edges()
        )
    }
}

#[cfg(test)]
mod tests;
