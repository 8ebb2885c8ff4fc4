//! One-mode projection of bipartite networks.

use crate::{
    adjacency_graph::Graph,
    bipartite::positions,
    error::Result,
    group::{Bipartition, Group},
    tracing_support::info_span,
    vertex::VertexId,
};

/// Projects `network` onto the vertices of `group`.
///
/// The result is a simple undirected graph whose vertices are the members
/// of `group`, renumbered densely in creation order and keeping their
/// labels.  Two members are joined iff they share at least one neighbor in
/// the opposite group, whatever the direction of the original edges.
/// Untagged vertices never connect anything.
///
/// Costs `O(sum of d^2)` over the opposite group's degrees `d`.
pub fn projected_graph<B: Bipartition>(group: Group, network: &B) -> Result<Graph> {
    let _span = info_span!("projected_graph", %group, n = network.num_vertices()).entered();
    // New id of each member: its position among the members of `group`.
    let rank = positions(network, group);

    let mut projection = Graph::new();
    for v in network.vertices_in(group) {
        match network.label(v) {
            Ok(label) => projection.add_labeled_vertex(label)?,
            Err(_) => projection.add_vertex(),
        };
    }

    for hub in network.vertices_in(group.opposite()) {
        let shared: Vec<VertexId> = network
            .neighbors(hub)?
            .into_iter()
            .filter_map(|w| rank[w.index()].map(VertexId::new))
            .collect();
        for (i, &a) in shared.iter().enumerate() {
            for &b in &shared[i + 1..] {
                projection.insert_edge(a, b);
            }
        }
    }
    Ok(projection)
}
