//! Static graphs stored as per-vertex adjacency maps.

use std::{collections::BTreeMap, fmt, marker::PhantomData};

use derivative::Derivative;

use crate::{
    directedness::{Directed, Directedness, Undirected},
    edge_multiplicity::EdgeMultiplicity,
    error::{GraphError, Result},
    network::{EdgeId, Network, impl_label_index},
    pairs::Pair,
    tracing_support::debug,
    vertex::{LabelMap, VertexId},
};

/// A static graph with dense vertex ids, optional vertex labels and edge
/// multiplicities.
///
/// Each vertex keeps an ordered map from neighbor to multiplicity.  An
/// undirected edge `{u, v}` is recorded in both `u`'s and `v`'s map (a loop
/// once); a directed edge `(u, v)` is recorded in `u`'s successor map and
/// `v`'s predecessor map.  This is also the structural store underneath the
/// bipartite and link-stream families.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct AdjacencyGraph<D: Directedness> {
    labels: LabelMap,
    successors: Vec<BTreeMap<VertexId, usize>>,
    predecessors: Vec<BTreeMap<VertexId, usize>>,
    edges: Vec<EdgeId<D>>,
    multiplicity: EdgeMultiplicity,
    directedness: PhantomData<D>,
}

pub type Graph = AdjacencyGraph<Undirected>;
pub type DiGraph = AdjacencyGraph<Directed>;

impl<D: Directedness> AdjacencyGraph<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph with `n` unlabeled vertices `0..n`.
    pub fn with_vertices(n: usize) -> Self {
        let mut graph = Self::new();
        graph.add_vertices(n);
        graph
    }

    pub fn with_multiplicity(mut self, multiplicity: EdgeMultiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    pub fn multiplicity(&self) -> EdgeMultiplicity {
        self.multiplicity
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.successors.push(BTreeMap::new());
        self.predecessors.push(BTreeMap::new());
        self.labels.push_unlabeled()
    }

    pub fn add_vertices(&mut self, n: usize) {
        for _ in 0..n {
            self.add_vertex();
        }
    }

    /// Fails with [`GraphError::DuplicateLabel`] if `label` is taken.
    pub fn add_labeled_vertex(&mut self, label: &str) -> Result<VertexId> {
        let id = self.labels.push_labeled(label)?;
        self.successors.push(BTreeMap::new());
        self.predecessors.push(BTreeMap::new());
        Ok(id)
    }

    /// Adds an edge between existing vertices.  With
    /// [`EdgeMultiplicity::SingleEdge`] re-adding an edge is a no-op that
    /// returns the existing edge.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<EdgeId<D>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.insert_edge(u, v))
    }

    /// Adds an edge between labeled vertices, creating either vertex if its
    /// label is new.
    pub fn add_edge_by_label(&mut self, u: &str, v: &str) -> Result<EdgeId<D>> {
        let u = self.vertex_or_insert(u);
        let v = self.vertex_or_insert(v);
        Ok(self.insert_edge(u, v))
    }

    pub(crate) fn vertex_or_insert(&mut self, label: &str) -> VertexId {
        match self.labels.get(label) {
            Some(v) => v,
            None => {
                self.successors.push(BTreeMap::new());
                self.predecessors.push(BTreeMap::new());
                self.labels.push_unchecked(label)
            }
        }
    }

    /// Records one more `(u, v)` edge.  Both vertices must exist.
    pub(crate) fn insert_edge(&mut self, u: VertexId, v: VertexId) -> EdgeId<D> {
        let edge = <EdgeId<D>>::from((u, v));
        let (a, b) = (*edge.first(), *edge.second());
        let count = self.successors[a.index()].entry(b).or_insert(0);
        if *count == 0 {
            self.edges.push(edge);
        } else if !self.multiplicity.allows_parallel_edges() {
            debug!(%u, %v, "edge already present");
            return edge;
        }
        *count += 1;
        if D::is_directed() {
            *self.predecessors[b.index()].entry(a).or_insert(0) += 1;
        } else if a != b {
            *self.successors[b.index()].entry(a).or_insert(0) += 1;
        }
        edge
    }

    pub fn check_vertex(&self, v: VertexId) -> Result<()> {
        self.labels.check_vertex(v)
    }

    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.num_vertices()).map(VertexId::new)
    }

    pub fn has_vertex(&self, v: VertexId) -> bool {
        v.index() < self.num_vertices()
    }

    pub fn vertex(&self, label: &str) -> Result<VertexId> {
        self.labels.vertex(label)
    }

    pub(crate) fn vertex_ref(&self, label: &str) -> &VertexId {
        match self.labels.get_ref(label) {
            Some(v) => v,
            None => panic!("{}", GraphError::UnknownLabel(label.to_owned())),
        }
    }

    pub fn label(&self, v: VertexId) -> Result<&str> {
        self.labels.label(v)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.get(label).is_some()
    }

    /// Number of parallel `(u, v)` edges; 0 when absent or when either
    /// vertex does not exist.
    pub fn edge_multiplicity(&self, u: VertexId, v: VertexId) -> usize {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            return 0;
        }
        self.successors[u.index()].get(&v).copied().unwrap_or(0)
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edge_multiplicity(u, v) > 0
    }

    /// Vertices `w` with an edge `(v, w)`.  For undirected graphs these are
    /// all neighbors of `v`.
    pub fn successors(&self, v: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.check_vertex(v)?;
        Ok(self.successors[v.index()].keys().copied())
    }

    /// Vertices `u` with an edge `(u, v)`.  Same as
    /// [`AdjacencyGraph::successors`] for undirected graphs.
    pub fn predecessors(&self, v: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.check_vertex(v)?;
        let map = if D::is_directed() {
            &self.predecessors[v.index()]
        } else {
            &self.successors[v.index()]
        };
        Ok(map.keys().copied())
    }

    pub fn neighbors(&self, v: VertexId) -> Result<Vec<VertexId>> {
        let mut neighbors: Vec<_> = self.successors(v)?.collect();
        if D::is_directed() {
            neighbors.extend(self.predecessors(v)?);
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Ok(neighbors)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId<D>> + '_ {
        self.edges.iter().copied()
    }

    /// Number of distinct vertex pairs joined by at least one edge.
    pub fn num_distinct_edges(&self) -> usize {
        self.edges.len()
    }
}

impl<D: Directedness> Network for AdjacencyGraph<D> {
    type Directedness = D;
    type Weight = usize;

    fn structure(&self) -> &AdjacencyGraph<D> {
        self
    }

    fn edge_weight(&self, edge: &EdgeId<D>) -> usize {
        self.edge_multiplicity(*edge.first(), *edge.second())
    }
}

impl_label_index!(AdjacencyGraph);

impl<D: Directedness> fmt::Display for AdjacencyGraph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Graph(|V|={}, |E|={})",
            D::prefix(),
            self.num_vertices(),
            self.num_edges()
        )
    }
}
