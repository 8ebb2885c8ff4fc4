//! Link streams: graphs whose edges are present only during sub-intervals
//! of a shared definition range.
//!
//! Each edge owns a [`TimeIntervalSet`].  Its weight is the fraction of the
//! definition range it covers, so [`Network::num_edges`] is a time-weighted
//! (generally fractional) count and degrees, density and adjacency are
//! computed over those fractions.

use std::{collections::HashMap, fmt};

use derivative::Derivative;

use crate::{
    adjacency_graph::AdjacencyGraph,
    directedness::{Directed, Directedness, Undirected},
    error::{GraphError, Result},
    interval_set::{RangePolicy, Time, TimeInterval, TimeIntervalSet},
    network::{EdgeId, Network, impl_label_index},
    vertex::VertexId,
};

#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct StreamGraph<D: Directedness> {
    graph: AdjacencyGraph<D>,
    definition: TimeInterval,
    policy: RangePolicy,
    activity: HashMap<EdgeId<D>, TimeIntervalSet>,
}

pub type LinkStream = StreamGraph<Undirected>;
pub type DiLinkStream = StreamGraph<Directed>;

impl<D: Directedness> StreamGraph<D> {
    /// An empty stream defined over `[0, Time::MAX)`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertices(n: usize) -> Self {
        Self {
            graph: AdjacencyGraph::with_vertices(n),
            ..Self::default()
        }
    }

    pub fn with_definition(lower: Time, upper: Time) -> Result<Self> {
        Ok(Self {
            definition: TimeInterval::new(lower, upper)?,
            ..Self::default()
        })
    }

    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn range_policy(&self) -> RangePolicy {
        self.policy
    }

    pub fn definition(&self) -> TimeInterval {
        self.definition
    }

    pub fn definition_length(&self) -> Time {
        self.definition.length()
    }

    /// Changes the definition range.  Only allowed while the stream has no
    /// edges.
    pub fn set_definition(&mut self, lower: Time, upper: Time) -> Result<()> {
        if !self.activity.is_empty() {
            return Err(GraphError::DefinitionLocked);
        }
        self.definition = TimeInterval::new(lower, upper)?;
        Ok(())
    }

    pub fn graph(&self) -> &AdjacencyGraph<D> {
        &self.graph
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.graph.add_vertex()
    }

    pub fn add_vertices(&mut self, n: usize) {
        self.graph.add_vertices(n);
    }

    pub fn add_labeled_vertex(&mut self, label: &str) -> Result<VertexId> {
        self.graph.add_labeled_vertex(label)
    }

    /// Adds an edge present over the whole definition range.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<EdgeId<D>> {
        self.add_edge_w_time(u, v, self.definition.lower(), self.definition.upper())
    }

    /// Creates the edge if needed and marks it present during
    /// `[lower, upper)`.  Nothing changes on error.
    pub fn add_edge_w_time(
        &mut self,
        u: VertexId,
        v: VertexId,
        lower: Time,
        upper: Time,
    ) -> Result<EdgeId<D>> {
        self.graph.check_vertex(u)?;
        self.graph.check_vertex(v)?;
        let interval = self.admit(lower, upper)?;
        Ok(self.record(u, v, interval))
    }

    pub fn add_edge_by_label(&mut self, u: &str, v: &str) -> Result<EdgeId<D>> {
        self.add_edge_w_time_by_label(u, v, self.definition.lower(), self.definition.upper())
    }

    /// Like [`StreamGraph::add_edge_w_time`], creating vertices for unseen
    /// labels.  The interval is validated before any vertex is created.
    pub fn add_edge_w_time_by_label(
        &mut self,
        u: &str,
        v: &str,
        lower: Time,
        upper: Time,
    ) -> Result<EdgeId<D>> {
        let interval = self.admit(lower, upper)?;
        let u = self.vertex_or_insert(u);
        let v = self.vertex_or_insert(v);
        Ok(self.record(u, v, interval))
    }

    pub(crate) fn vertex_or_insert(&mut self, label: &str) -> VertexId {
        self.graph.vertex_or_insert(label)
    }

    /// Validates `[lower, upper)` against the definition and range policy.
    pub(crate) fn admit(&self, lower: Time, upper: Time) -> Result<TimeInterval> {
        self.policy.admit(&self.definition, lower, upper)
    }

    /// Stores an admitted interval for edge `(u, v)`; both vertices exist.
    pub(crate) fn record(&mut self, u: VertexId, v: VertexId, interval: TimeInterval) -> EdgeId<D> {
        let edge = self.graph.insert_edge(u, v);
        let (definition, policy) = (self.definition, self.policy);
        self.activity
            .entry(edge)
            .or_insert_with(|| TimeIntervalSet::bounded_by(definition, policy))
            .insert(interval);
        edge
    }

    /// Presence intervals of edge `(u, v)`, or `None` if there is no such edge.
    pub fn edge_intervals(&self, u: VertexId, v: VertexId) -> Option<&TimeIntervalSet> {
        self.activity.get(&<EdgeId<D>>::from((u, v)))
    }

    pub fn is_edge_active(&self, u: VertexId, v: VertexId, t: Time) -> bool {
        self.edge_intervals(u, v)
            .is_some_and(|intervals| intervals.contains_time(t))
    }

    /// Number of edges incident to `v` that are present at instant `t`,
    /// counting undirected loops twice and directed edges in both
    /// directions.
    pub fn instantaneous_degree(&self, v: VertexId, t: Time) -> Result<usize> {
        let mut degree = 0;
        for w in self.graph.successors(v)? {
            if self.is_edge_active(v, w, t) {
                degree += if w == v && !D::is_directed() { 2 } else { 1 };
            }
        }
        if D::is_directed() {
            for u in self.graph.predecessors(v)? {
                if self.is_edge_active(u, v, t) {
                    degree += 1;
                }
            }
        }
        Ok(degree)
    }

    /// Empties the presence intervals of edge `(u, v)`.  The edge itself
    /// stays, with weight 0.
    pub fn clear_edge_activity(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.graph.check_vertex(u)?;
        self.graph.check_vertex(v)?;
        match self.activity.get_mut(&<EdgeId<D>>::from((u, v))) {
            Some(intervals) => {
                intervals.erase();
                Ok(())
            }
            None => Err(GraphError::UnknownEdge { from: u, to: v }),
        }
    }

    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        write!(
            f,
            "{}{}(|V|={}, |E|={}, T={})",
            D::prefix(),
            name,
            self.num_vertices(),
            self.num_edges(),
            self.definition
        )
    }
}

impl<D: Directedness> Network for StreamGraph<D> {
    type Directedness = D;
    type Weight = f64;

    fn structure(&self) -> &AdjacencyGraph<D> {
        &self.graph
    }

    /// Covered duration of the edge divided by the definition length.
    fn edge_weight(&self, edge: &EdgeId<D>) -> f64 {
        self.activity.get(edge).map_or(0.0, |intervals| {
            intervals.length() as f64 / self.definition_length() as f64
        })
    }
}

impl_label_index!(StreamGraph);

impl<D: Directedness> fmt::Display for StreamGraph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_summary(f, "LinkStream")
    }
}
