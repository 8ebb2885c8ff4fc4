use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use super::*;
use crate::error::ErrorKind;

/// Random intervals inside `[0, 60)`, small enough to check pointwise.
#[derive(Clone, Debug)]
struct ArbIntervals(Vec<(Time, Time)>);

impl Arbitrary for ArbIntervals {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 12;
        ArbIntervals(
            (0..count)
                .map(|_| {
                    let lower = (u8::arbitrary(g) % 50) as Time;
                    let width = (u8::arbitrary(g) % 10) as Time + 1;
                    (lower, lower + width)
                })
                .collect(),
        )
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(ArbIntervals))
    }
}

fn build(intervals: &[(Time, Time)]) -> TimeIntervalSet {
    let mut set = TimeIntervalSet::new();
    for &(lower, upper) in intervals {
        set.append(lower, upper).unwrap();
    }
    set
}

fn covered(intervals: &[(Time, Time)], t: Time) -> bool {
    intervals.iter().any(|&(lower, upper)| lower <= t && t < upper)
}

#[test]
fn test_append_merges_overlapping_intervals() {
    let mut set = TimeIntervalSet::with_definition(0, 10).unwrap();
    set.append(1, 2).unwrap();
    set.append(6, 8).unwrap();
    assert_eq!(set.size(), 2);
    assert_eq!(set.length(), 3);

    set.append(3, 7).unwrap();
    let stored: Vec<_> = set.iter().map(|iv| (iv.lower(), iv.upper())).collect();
    assert_eq!(stored, vec![(1, 2), (3, 8)]);
    assert_eq!(set.length(), 6);
    assert_eq!(set.to_string(), "{[1, 2), [3, 8)}");
}

#[test]
fn test_adjacent_intervals_coalesce() {
    let set = build(&[(0, 2), (2, 5)]);
    assert_eq!(set.size(), 1);
    assert_eq!(set.length(), 5);
}

#[test]
fn test_empty_interval_is_rejected() {
    let mut set = TimeIntervalSet::new();
    let err = set.append(5, 5).unwrap_err();
    assert_eq!(err, GraphError::InvalidInterval { lower: 5, upper: 5 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(set.is_empty());
}

#[test]
fn test_append_outside_definition() {
    let mut set = TimeIntervalSet::with_definition(0, 10).unwrap();
    let err = set.append(5, 12).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RangeViolation);
    assert!(set.is_empty());

    let mut clipping = TimeIntervalSet::with_definition(0, 10)
        .unwrap()
        .with_range_policy(RangePolicy::Clip);
    clipping.append(5, 12).unwrap();
    assert_eq!(clipping.length(), 5);
    assert!(clipping.append(10, 20).is_err());
}

#[test]
fn test_default_definition() {
    let set = TimeIntervalSet::new();
    assert_eq!(set.definition(), TimeInterval::new(0, Time::MAX).unwrap());
    assert_eq!(set.definition_length(), Time::MAX);
    assert!(TimeIntervalSet::new().append(-1, 3).is_err());
}

#[test]
fn test_set_definition_keeps_stored_intervals_inside() {
    let mut set = build(&[(2, 4)]);
    assert!(set.set_definition(3, 10).is_err());
    assert_eq!(set.definition(), TimeInterval::default());
    set.set_definition(0, 10).unwrap();
    assert_eq!(set.definition_length(), 10);
    assert!(set.set_definition(4, 4).is_err());
}

#[test]
fn test_erase() {
    let mut set = TimeIntervalSet::with_definition(0, 10).unwrap();
    set.append(1, 3).unwrap();
    set.erase();
    assert_eq!(set.size(), 0);
    assert_eq!(set.length(), 0);
    assert_eq!(set.definition_length(), 10);
}

#[test]
fn test_contains() {
    let set = build(&[(1, 4), (6, 9)]);
    assert!(set.contains(1, 4));
    assert!(set.contains(2, 3));
    assert!(!set.contains(3, 7));
    assert!(!set.contains(3, 3));
    assert!(set.contains_time(8));
    assert!(!set.contains_time(9));
    assert!(!set.contains_time(5));
}

#[test]
fn test_intersection_of_disjoint_sets_is_empty() {
    let a = build(&[(0, 2)]);
    let b = build(&[(2, 4)]);
    assert!(!a.intersects(&b));
    assert!(a.intersection(&b).is_empty());

    let c = build(&[(1, 3), (5, 9)]);
    let d = build(&[(2, 6), (8, 12)]);
    assert_eq!(c.intersection(&d).to_string(), "{[2, 3), [5, 6), [8, 9)}");
}

#[test]
fn test_interval_value_type() {
    let a = TimeInterval::new(0, 10).unwrap();
    let b = TimeInterval::new(5, 15).unwrap();
    assert_eq!(a.length(), 10);
    assert!(a.intersects(&b));
    assert_eq!(a.intersection(&b), Some(TimeInterval::new(5, 10).unwrap()));
    assert!(!a.contains(&b));
    assert_eq!(b.to_string(), "[5, 15)");
    assert!(TimeInterval::new(3, 1).is_err());
}

#[quickcheck]
fn prop_intervals_stay_sorted_and_separated(ArbIntervals(intervals): ArbIntervals) -> bool {
    let set = build(&intervals);
    set.intervals
        .windows(2)
        .all(|pair| pair[0].upper() < pair[1].lower())
        && set.iter().all(|iv| iv.lower() < iv.upper())
}

#[quickcheck]
fn prop_coverage_matches_appended(ArbIntervals(intervals): ArbIntervals) -> bool {
    let set = build(&intervals);
    let covered_points = (0..60).filter(|&t| covered(&intervals, t)).count() as Time;
    (0..60).all(|t| set.contains_time(t) == covered(&intervals, t)) && set.length() == covered_points
}

#[quickcheck]
fn prop_append_order_is_irrelevant(ArbIntervals(intervals): ArbIntervals) -> bool {
    let mut reversed = intervals.clone();
    reversed.reverse();
    build(&intervals) == build(&reversed)
}

#[quickcheck]
fn prop_intersection_is_pointwise_and(a: ArbIntervals, b: ArbIntervals) -> bool {
    let (sa, sb) = (build(&a.0), build(&b.0));
    let both = sa.intersection(&sb);
    (0..60).all(|t| both.contains_time(t) == (covered(&a.0, t) && covered(&b.0, t)))
        && sa.intersects(&sb) == !both.is_empty()
}
