//! Group tags for the two sides of a bipartite structure.

use std::fmt;

use bitvec::vec::BitVec;

use crate::{
    error::{GraphError, Result},
    network::Network,
    pairs::Pair,
    vertex::VertexId,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    Top,
    Bottom,
}

impl Group {
    pub fn opposite(self) -> Group {
        match self {
            Group::Top => Group::Bottom,
            Group::Bottom => Group::Top,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Group::Top => "top",
            Group::Bottom => "bottom",
        })
    }
}

/// Per-vertex group tags, indexed like the vertex table they accompany.
#[derive(Clone, Debug, Default)]
pub(crate) struct GroupTags {
    tags: Vec<Option<Group>>,
    num_top: usize,
    num_bottom: usize,
}

impl GroupTags {
    pub fn push(&mut self, group: Option<Group>) {
        match group {
            Some(Group::Top) => self.num_top += 1,
            Some(Group::Bottom) => self.num_bottom += 1,
            None => {}
        }
        self.tags.push(group);
    }

    pub fn get(&self, v: VertexId) -> Option<Group> {
        self.tags.get(v.index()).copied().flatten()
    }

    pub fn count(&self, group: Group) -> usize {
        match group {
            Group::Top => self.num_top,
            Group::Bottom => self.num_bottom,
        }
    }
}

/// A network whose vertices may be tagged [`Group::Top`] or
/// [`Group::Bottom`].  Untagged vertices belong to neither side.
pub trait Bipartition: Network {
    /// Group of `v`, or `None` if it was added without one.  Fails only for
    /// a vertex that does not exist.
    fn group(&self, v: VertexId) -> Result<Option<Group>>;

    fn num_vertices_in(&self, group: Group) -> usize;

    fn num_top_vertices(&self) -> usize {
        self.num_vertices_in(Group::Top)
    }

    fn num_bottom_vertices(&self) -> usize {
        self.num_vertices_in(Group::Bottom)
    }

    fn group_by_label(&self, label: &str) -> Result<Option<Group>> {
        self.group(self.vertex(label)?)
    }

    /// Vertices tagged `group`, in creation order.
    fn vertices_in(&self, group: Group) -> impl Iterator<Item = VertexId> {
        self.vertices()
            .filter(move |&v| matches!(self.group(v), Ok(Some(g)) if g == group))
    }

    /// Membership mask of `group`, indexed by vertex.
    fn group_mask(&self, group: Group) -> BitVec {
        let mut mask = BitVec::repeat(false, self.num_vertices());
        for v in self.vertices_in(group) {
            mask.set(v.index(), true);
        }
        mask
    }

    /// Succeeds when `u` and `v` are both tagged and in different groups.
    fn check_cross_group(&self, u: VertexId, v: VertexId) -> Result<()> {
        match (self.group(u)?, self.group(v)?) {
            (None, _) => Err(GraphError::Ungrouped(u)),
            (_, None) => Err(GraphError::Ungrouped(v)),
            (Some(a), Some(b)) if a == b => Err(GraphError::SameGroup { from: u, to: v }),
            _ => Ok(()),
        }
    }

    /// Whether every edge joins a top vertex to a bottom vertex.
    fn is_properly_bipartite(&self) -> bool {
        self.edges()
            .all(|edge| self.check_cross_group(*edge.first(), *edge.second()).is_ok())
    }
}
