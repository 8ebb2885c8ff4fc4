//! Link streams over bipartite vertex sets.

use std::fmt;

use derivative::Derivative;

use crate::{
    adjacency_graph::AdjacencyGraph,
    directedness::{Directed, Directedness, Undirected},
    error::{GraphError, Result},
    group::{Bipartition, Group, GroupTags},
    interval_set::{RangePolicy, Time, TimeInterval, TimeIntervalSet},
    network::{EdgeId, Network, impl_label_index},
    stream_graph::StreamGraph,
    tracing_support::debug,
    vertex::VertexId,
};

/// A [`StreamGraph`] whose vertices carry group tags.  Unlike
/// [`crate::bipartite::BipartiteGraph`], every insertion requires its
/// endpoints to be in different groups; ungrouped endpoints are rejected as
/// well.  A rejected insertion leaves the stream untouched.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct BipartiteStreamGraph<D: Directedness> {
    stream: StreamGraph<D>,
    groups: GroupTags,
}

pub type BiLinkStream = BipartiteStreamGraph<Undirected>;
pub type DiBiLinkStream = BipartiteStreamGraph<Directed>;

impl<D: Directedness> BipartiteStreamGraph<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(lower: Time, upper: Time) -> Result<Self> {
        Ok(Self {
            stream: StreamGraph::with_definition(lower, upper)?,
            groups: GroupTags::default(),
        })
    }

    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.stream = self.stream.with_range_policy(policy);
        self
    }

    pub fn stream(&self) -> &StreamGraph<D> {
        &self.stream
    }

    pub fn definition(&self) -> TimeInterval {
        self.stream.definition()
    }

    pub fn definition_length(&self) -> Time {
        self.stream.definition_length()
    }

    pub fn set_definition(&mut self, lower: Time, upper: Time) -> Result<()> {
        self.stream.set_definition(lower, upper)
    }

    /// Adds a vertex outside both groups.  It cannot take part in edges.
    pub fn add_vertex(&mut self) -> VertexId {
        self.groups.push(None);
        self.stream.add_vertex()
    }

    pub fn add_vertex_w_group(&mut self, group: Group) -> VertexId {
        self.groups.push(Some(group));
        self.stream.add_vertex()
    }

    pub fn add_labeled_vertex_w_group(&mut self, group: Group, label: &str) -> Result<VertexId> {
        let v = self.stream.add_labeled_vertex(label)?;
        self.groups.push(Some(group));
        Ok(v)
    }

    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<EdgeId<D>> {
        let definition = self.definition();
        self.add_edge_w_time(u, v, definition.lower(), definition.upper())
    }

    pub fn add_edge_w_time(
        &mut self,
        u: VertexId,
        v: VertexId,
        lower: Time,
        upper: Time,
    ) -> Result<EdgeId<D>> {
        self.check_cross_group(u, v).inspect_err(|err| {
            debug!(%u, %v, %err, "edge rejected by group check");
        })?;
        self.stream.add_edge_w_time(u, v, lower, upper)
    }

    pub fn add_edge_by_label(&mut self, u: &str, v: &str) -> Result<EdgeId<D>> {
        let definition = self.definition();
        self.add_edge_w_time_by_label(u, v, definition.lower(), definition.upper())
    }

    /// Adds a timed edge between labeled vertices.  An unseen `u` is
    /// created in the top group and an unseen `v` in the bottom group.
    /// The interval and the group constraint are both checked before any
    /// vertex is created.
    pub fn add_edge_w_time_by_label(
        &mut self,
        u: &str,
        v: &str,
        lower: Time,
        upper: Time,
    ) -> Result<EdgeId<D>> {
        let interval = self.stream.admit(lower, upper)?;
        let u_group = self.group_or(u, Group::Top)?;
        let v_group = self.group_or(v, Group::Bottom)?;
        if u == v || u_group == v_group {
            return Err(GraphError::SameGroupLabels(u.to_owned(), v.to_owned()));
        }
        let u = self.vertex_or_insert(u, u_group);
        let v = self.vertex_or_insert(v, v_group);
        Ok(self.stream.record(u, v, interval))
    }

    /// Group `label` belongs to, or `default` if the label is new.  Fails
    /// for an existing ungrouped vertex.
    fn group_or(&self, label: &str, default: Group) -> Result<Group> {
        match self.stream.vertex(label) {
            Ok(v) => self.groups.get(v).ok_or(GraphError::Ungrouped(v)),
            Err(_) => Ok(default),
        }
    }

    fn vertex_or_insert(&mut self, label: &str, group: Group) -> VertexId {
        match self.stream.vertex(label) {
            Ok(v) => v,
            Err(_) => {
                self.groups.push(Some(group));
                self.stream.vertex_or_insert(label)
            }
        }
    }

    pub fn edge_intervals(&self, u: VertexId, v: VertexId) -> Option<&TimeIntervalSet> {
        self.stream.edge_intervals(u, v)
    }

    pub fn is_edge_active(&self, u: VertexId, v: VertexId, t: Time) -> bool {
        self.stream.is_edge_active(u, v, t)
    }

    pub fn instantaneous_degree(&self, v: VertexId, t: Time) -> Result<usize> {
        self.stream.instantaneous_degree(v, t)
    }
}

impl<D: Directedness> Network for BipartiteStreamGraph<D> {
    type Directedness = D;
    type Weight = f64;

    fn structure(&self) -> &AdjacencyGraph<D> {
        self.stream.graph()
    }

    fn edge_weight(&self, edge: &EdgeId<D>) -> f64 {
        self.stream.edge_weight(edge)
    }
}

impl<D: Directedness> Bipartition for BipartiteStreamGraph<D> {
    fn group(&self, v: VertexId) -> Result<Option<Group>> {
        self.stream.graph().check_vertex(v)?;
        Ok(self.groups.get(v))
    }

    fn num_vertices_in(&self, group: Group) -> usize {
        self.groups.count(group)
    }
}

impl_label_index!(BipartiteStreamGraph);

impl<D: Directedness> fmt::Display for BipartiteStreamGraph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stream.fmt_summary(f, "BiLinkStream")
    }
}
