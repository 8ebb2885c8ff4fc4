use std::fmt::Debug;

use crate::util::sort_pair;

/// Trait for pair types that may be ordered or unordered.  Used as the
/// identity of an edge: [`OrderedPair`] for directed graphs and
/// [`SortedPair`] for undirected ones.
pub trait Pair<T>
where
    Self: Eq + From<(T, T)> + Into<(T, T)>,
{
    fn first(&self) -> &T;
    fn second(&self) -> &T;

    /// Both ends, in storage order.
    fn ends(&self) -> (&T, &T) {
        (self.first(), self.second())
    }

    fn is_loop(&self) -> bool
    where
        T: Eq,
    {
        self.first() == self.second()
    }

    fn has_both(&self, a: &T, b: &T) -> bool
    where
        T: Eq;
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct OrderedPair<T>(T, T);

impl<T> Pair<T> for OrderedPair<T>
where
    T: Eq + Ord,
{
    fn first(&self) -> &T {
        &self.0
    }

    fn second(&self) -> &T {
        &self.1
    }

    fn has_both(&self, a: &T, b: &T) -> bool
    where
        T: Eq,
    {
        self.0 == *a && self.1 == *b
    }
}

impl<T> From<(T, T)> for OrderedPair<T>
where
    T: Ord,
{
    fn from(pair: (T, T)) -> Self {
        Self(pair.0, pair.1)
    }
}

impl<T> From<OrderedPair<T>> for (T, T) {
    fn from(pair: OrderedPair<T>) -> Self {
        (pair.0, pair.1)
    }
}

/// An unordered pair of values that compares and hashes equal regardless of element order.
///
/// This is useful for representing edges in undirected graphs, where (a, b) and (b, a)
/// should be considered identical.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct SortedPair<T>(T, T);

impl<T: Ord + Eq> Pair<T> for SortedPair<T> {
    fn first(&self) -> &T {
        &self.0
    }

    fn second(&self) -> &T {
        &self.1
    }

    fn has_both(&self, a: &T, b: &T) -> bool
    where
        T: Eq,
    {
        (self.0 == *a && self.1 == *b) || (self.0 == *b && self.1 == *a)
    }
}

impl<T> From<(T, T)> for SortedPair<T>
where
    T: Ord,
{
    fn from(pair: (T, T)) -> Self {
        let (first, second) = sort_pair(pair.0, pair.1);
        Self(first, second)
    }
}

impl<T> From<SortedPair<T>> for (T, T) {
    fn from(pair: SortedPair<T>) -> Self {
        (pair.0, pair.1)
    }
}
