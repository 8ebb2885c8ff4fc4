use std::{collections::HashMap, fmt};

use crate::error::{GraphError, Result};

/// Dense vertex identifier.  Vertices are numbered `0..n` in creation order
/// and are never removed, so an id stays valid for the life of its graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The vertex table shared by every graph family: one slot per vertex plus
/// an index from label to vertex.
#[derive(Clone, Debug, Default)]
pub(crate) struct LabelMap {
    by_label: HashMap<String, VertexId>,
    by_index: Vec<Option<String>>,
}

impl LabelMap {
    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn push_unlabeled(&mut self) -> VertexId {
        let id = VertexId(self.by_index.len());
        self.by_index.push(None);
        id
    }

    pub fn push_labeled(&mut self, label: &str) -> Result<VertexId> {
        self.check_available(label)?;
        Ok(self.push_unchecked(label))
    }

    /// Adds a labeled slot without checking for duplicates; callers look the
    /// label up first.
    pub fn push_unchecked(&mut self, label: &str) -> VertexId {
        let id = VertexId(self.by_index.len());
        self.by_label.insert(label.to_owned(), id);
        self.by_index.push(Some(label.to_owned()));
        id
    }

    pub fn check_available(&self, label: &str) -> Result<()> {
        if self.by_label.contains_key(label) {
            Err(GraphError::DuplicateLabel(label.to_owned()))
        } else {
            Ok(())
        }
    }

    pub fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v.0 < self.by_index.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                index: v.0,
                len: self.by_index.len(),
            })
        }
    }

    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.by_label.get(label).copied()
    }

    pub fn get_ref(&self, label: &str) -> Option<&VertexId> {
        self.by_label.get(label)
    }

    pub fn vertex(&self, label: &str) -> Result<VertexId> {
        self.get(label)
            .ok_or_else(|| GraphError::UnknownLabel(label.to_owned()))
    }

    pub fn label(&self, v: VertexId) -> Result<&str> {
        self.check_vertex(v)?;
        self.by_index[v.0]
            .as_deref()
            .ok_or(GraphError::Unlabeled(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_labels_resolve_both_ways() {
        let mut labels = LabelMap::default();
        let a = labels.push_labeled("a").unwrap();
        let b = labels.push_unlabeled();
        assert_eq!(labels.vertex("a"), Ok(a));
        assert_eq!(labels.label(a), Ok("a"));
        assert_eq!(labels.label(b), Err(GraphError::Unlabeled(b)));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_duplicate_label_leaves_table_unchanged() {
        let mut labels = LabelMap::default();
        labels.push_labeled("a").unwrap();
        let err = labels.push_labeled("a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn test_out_of_range_vertex() {
        let labels = LabelMap::default();
        let err = labels.label(VertexId::new(3)).unwrap_err();
        assert_eq!(err, GraphError::VertexOutOfRange { index: 3, len: 0 });
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }
}
