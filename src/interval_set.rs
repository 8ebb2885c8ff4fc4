//! Half-open time intervals and merged interval sets.
//!
//! A [`TimeIntervalSet`] keeps a sorted list of pairwise disjoint,
//! non-adjacent intervals: appending an interval that overlaps or touches
//! stored ones replaces them with their union.  Every set carries a
//! *definition* interval, and appended intervals must fall inside it
//! (or are clipped to it, depending on the [`RangePolicy`]).

use std::fmt;

use crate::{
    error::{GraphError, Result},
    tracing_support::{debug, info_span},
};

/// Instants are signed 64-bit integers.
pub type Time = i64;

/// A non-empty half-open interval `[lower, upper)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeInterval {
    lower: Time,
    upper: Time,
}

impl TimeInterval {
    pub fn new(lower: Time, upper: Time) -> Result<Self> {
        if lower < upper {
            Ok(Self { lower, upper })
        } else {
            Err(GraphError::InvalidInterval { lower, upper })
        }
    }

    pub const fn lower(&self) -> Time {
        self.lower
    }

    pub const fn upper(&self) -> Time {
        self.upper
    }

    /// `upper - lower`, saturating at `Time::MAX` for very wide intervals
    /// with a negative lower bound.
    pub const fn length(&self) -> Time {
        self.upper.saturating_sub(self.lower)
    }

    pub const fn contains_time(&self, t: Time) -> bool {
        self.lower <= t && t < self.upper
    }

    pub const fn contains(&self, other: &TimeInterval) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    pub const fn intersects(&self, other: &TimeInterval) -> bool {
        self.lower < other.upper && other.lower < self.upper
    }

    pub fn intersection(&self, other: &TimeInterval) -> Option<TimeInterval> {
        let lower = self.lower.max(other.lower);
        let upper = self.upper.min(other.upper);
        (lower < upper).then_some(TimeInterval { lower, upper })
    }
}

impl Default for TimeInterval {
    /// `[0, Time::MAX)`
    fn default() -> Self {
        Self {
            lower: 0,
            upper: Time::MAX,
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

/// What to do with an interval that is not contained in the definition range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RangePolicy {
    /// Fail with [`GraphError::OutOfDefinition`].
    #[default]
    Reject,
    /// Keep only the part inside the definition.  Still fails when nothing
    /// is left.
    Clip,
}

impl RangePolicy {
    /// Validates `[lower, upper)` against `definition`, returning the interval
    /// that should actually be stored.
    pub fn admit(
        self,
        definition: &TimeInterval,
        lower: Time,
        upper: Time,
    ) -> Result<TimeInterval> {
        let interval = TimeInterval::new(lower, upper)?;
        let admitted = match self {
            RangePolicy::Reject => definition.contains(&interval).then_some(interval),
            RangePolicy::Clip => definition.intersection(&interval),
        };
        admitted.ok_or_else(|| {
            debug!(lower, upper, %definition, "interval outside definition");
            GraphError::OutOfDefinition {
                lower,
                upper,
                definition: *definition,
            }
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeIntervalSet {
    definition: TimeInterval,
    policy: RangePolicy,
    intervals: Vec<TimeInterval>,
}

impl TimeIntervalSet {
    /// An empty set with the default definition `[0, Time::MAX)`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(lower: Time, upper: Time) -> Result<Self> {
        Ok(Self {
            definition: TimeInterval::new(lower, upper)?,
            ..Self::default()
        })
    }

    pub(crate) fn bounded_by(definition: TimeInterval, policy: RangePolicy) -> Self {
        Self {
            definition,
            policy,
            intervals: Vec::new(),
        }
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

    /// Replaces the definition range.  Fails if any stored interval would
    /// fall outside the new range.
    pub fn set_definition(&mut self, lower: Time, upper: Time) -> Result<()> {
        let definition = TimeInterval::new(lower, upper)?;
        if let Some(outside) = self.intervals.iter().find(|iv| !definition.contains(iv)) {
            return Err(GraphError::OutOfDefinition {
                lower: outside.lower,
                upper: outside.upper,
                definition,
            });
        }
        self.definition = definition;
        Ok(())
    }

    /// Adds `[lower, upper)` to the set, merging it with every stored
    /// interval it overlaps or touches.  On error the set is unchanged.
    pub fn append(&mut self, lower: Time, upper: Time) -> Result<()> {
        let interval = self.policy.admit(&self.definition, lower, upper)?;
        self.insert(interval);
        Ok(())
    }

    /// Inserts an interval that has already been admitted.
    pub(crate) fn insert(&mut self, interval: TimeInterval) {
        let _span =
            info_span!("interval_merge", lower = interval.lower, upper = interval.upper).entered();
        // Stored intervals are sorted and separated by gaps, so those that
        // overlap or touch `interval` form one contiguous run.
        let start = self
            .intervals
            .partition_point(|iv| iv.upper < interval.lower);
        let end = self
            .intervals
            .partition_point(|iv| iv.lower <= interval.upper);
        let merged = if start < end {
            TimeInterval {
                lower: interval.lower.min(self.intervals[start].lower),
                upper: interval.upper.max(self.intervals[end - 1].upper),
            }
        } else {
            interval
        };
        self.intervals.splice(start..end, std::iter::once(merged));
    }

    /// Removes every interval, keeping the definition and policy.
    pub fn erase(&mut self) {
        self.intervals.clear();
    }

    /// Number of disjoint intervals stored.
    pub fn size(&self) -> usize {
        self.intervals.len()
    }

    /// Total covered time.
    pub fn length(&self) -> Time {
        self.intervals
            .iter()
            .fold(0, |total: Time, iv| total.saturating_add(iv.length()))
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeInterval> {
        self.intervals.iter()
    }

    /// Whether `[lower, upper)` is entirely covered.  An empty or inverted
    /// range is never contained.
    pub fn contains(&self, lower: Time, upper: Time) -> bool {
        let Ok(query) = TimeInterval::new(lower, upper) else {
            return false;
        };
        self.covering(query.lower)
            .is_some_and(|iv| iv.contains(&query))
    }

    pub fn contains_time(&self, t: Time) -> bool {
        self.covering(t).is_some()
    }

    fn covering(&self, t: Time) -> Option<&TimeInterval> {
        let index = self.intervals.partition_point(|iv| iv.upper <= t);
        self.intervals.get(index).filter(|iv| iv.contains_time(t))
    }

    pub fn intersects(&self, other: &TimeIntervalSet) -> bool {
        let (mut i, mut j) = (0, 0);
        while let (Some(a), Some(b)) = (self.intervals.get(i), other.intervals.get(j)) {
            if a.intersects(b) {
                return true;
            }
            if a.upper <= b.upper {
                i += 1;
            } else {
                j += 1;
            }
        }
        false
    }

    /// Points covered by both sets.  The result has this set's definition
    /// and policy, and is empty when the sets are disjoint.
    pub fn intersection(&self, other: &TimeIntervalSet) -> TimeIntervalSet {
        let mut result = TimeIntervalSet::bounded_by(self.definition, self.policy);
        let (mut i, mut j) = (0, 0);
        while let (Some(a), Some(b)) = (self.intervals.get(i), other.intervals.get(j)) {
            if let Some(common) = a.intersection(b) {
                result.insert(common);
            }
            if a.upper <= b.upper {
                i += 1;
            } else {
                j += 1;
            }
        }
        result
    }
}

impl<'a> IntoIterator for &'a TimeIntervalSet {
    type Item = &'a TimeInterval;
    type IntoIter = std::slice::Iter<'a, TimeInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TimeIntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{interval}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests;
