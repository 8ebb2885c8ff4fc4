use thiserror::Error;

use crate::{
    interval_set::{Time, TimeInterval},
    vertex::VertexId,
};

/// Broad classification of a [`GraphError`], for callers that only care
/// about what kind of mistake was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A vertex, label or edge that does not exist.
    Lookup,
    /// A malformed argument, such as an empty interval or a reused label.
    InvalidArgument,
    /// A time interval outside the definition range.
    RangeViolation,
    /// An edge that would break the bipartite group constraint.
    ConstraintViolation,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("unknown vertex label {0:?}")]
    UnknownLabel(String),
    #[error("vertex {index} out of range for a graph with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },
    #[error("vertex {0} has no label")]
    Unlabeled(VertexId),
    #[error("no edge between vertices {from} and {to}")]
    UnknownEdge { from: VertexId, to: VertexId },
    #[error("vertex label {0:?} is already in use")]
    DuplicateLabel(String),
    #[error("invalid interval [{lower}, {upper}): lower bound must be below upper bound")]
    InvalidInterval { lower: Time, upper: Time },
    #[error("definition range cannot change once edges exist")]
    DefinitionLocked,
    #[error("interval [{lower}, {upper}) is outside the definition range {definition}")]
    OutOfDefinition {
        lower: Time,
        upper: Time,
        definition: TimeInterval,
    },
    #[error("vertices {from} and {to} belong to the same group")]
    SameGroup { from: VertexId, to: VertexId },
    #[error("labels {0:?} and {1:?} name vertices in the same group")]
    SameGroupLabels(String, String),
    #[error("vertex {0} has not been assigned to a group")]
    Ungrouped(VertexId),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        use GraphError::*;
        match self {
            UnknownLabel(_) | VertexOutOfRange { .. } | Unlabeled(_) | UnknownEdge { .. } => {
                ErrorKind::Lookup
            }
            DuplicateLabel(_) | InvalidInterval { .. } | DefinitionLocked => {
                ErrorKind::InvalidArgument
            }
            OutOfDefinition { .. } => ErrorKind::RangeViolation,
            SameGroup { .. } | SameGroupLabels(..) | Ungrouped(_) => {
                ErrorKind::ConstraintViolation
            }
        }
    }
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
