use std::{fmt::Debug, hash::Hash};

use crate::pairs::{OrderedPair, Pair, SortedPair};

/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented only by [`Directed`] and [`Undirected`]; every
/// graph family is generic over it and branches on [`Self::is_directed`]
/// where the two variants differ (`degree`, `has_edge`, `adjacency`,
/// `density`).
pub trait Directedness: Copy + Debug + Default + Send + Sync + 'static {
    /// Identity of an edge between two vertices.  Ordered for directed
    /// graphs, sorted for undirected ones so `(u, v)` and `(v, u)` coincide.
    type Pair<T: Eq + Hash + Copy + Debug + Ord>: Pair<T> + Eq + Hash + Copy + Debug + Ord;

    fn is_directed() -> bool;

    /// Prefix used by the summary formatters ("Di" for directed graphs).
    fn prefix() -> &'static str {
        if Self::is_directed() { "Di" } else { "" }
    }
}

impl Directedness for Directed {
    type Pair<T: Eq + Hash + Copy + Debug + Ord> = OrderedPair<T>;

    fn is_directed() -> bool {
        true
    }
}

impl Directedness for Undirected {
    type Pair<T: Eq + Hash + Copy + Debug + Ord> = SortedPair<T>;

    fn is_directed() -> bool {
        false
    }
}
