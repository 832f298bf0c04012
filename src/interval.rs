//! Closed one-dimensional ranges.
//!
//! An [`Interval`] is the basic building block of the crate: a single closed
//! range `[upper:lower]` over a scalar domain, written the way a bit select
//! is written in a netlist (`[12:-5]` spans both bounds inclusively, with the
//! upper bound on the left). [`Region`](crate::Region) composes intervals into
//! hyper-rectangles and [`RangeMap`](crate::RangeMap) composes those into
//! disjoint unions.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::BitAnd;

use crate::{RangeError, Step};

/// A closed interval `[upper:lower]` over a scalar domain `T`.
///
/// An interval is *valid* when it was given explicit bounds and
/// `upper >= lower`. A default-constructed interval is invalid and behaves as
/// the empty set in every operation; so does an interval whose bounds were
/// set the wrong way round. The only observable difference between the two is
/// [`is_valid`](Interval::is_valid).
///
/// # Ordering
///
/// Intervals carry a weak order with the empty interval as the bottom
/// element: non-empty intervals compare by ascending `upper`, with ties
/// broken by *descending* `lower`, so `[5:0] < [5:3]`. Sorted sibling lists
/// in a [`RangeMap`](crate::RangeMap) rely on this order.
///
/// ```
/// use netrange::Interval;
///
/// assert!(Interval::new(5, 0) < Interval::new(5, 3));
/// assert!(Interval::new(5, 3) < Interval::new(6, 6));
/// assert!(Interval::<i32>::empty() < Interval::singleton(0));
/// ```
///
/// # Set operations
///
/// [`hull`](Interval::hull), [`intersection`](Interval::intersection) and the
/// three-way [`partition`](Interval::partition) are total.
/// [`combine`](Interval::combine) and [`complement`](Interval::complement)
/// can fail when the exact result is not a single interval; the total surface
/// returns the empty interval for that condition and the `try_` surface
/// reports [`RangeError::NonOperable`].
#[derive(Debug, Clone, Copy)]
pub struct Interval<T> {
    upper: T,
    lower: T,
    init: bool,
}

impl<T: Step> Interval<T> {
    /// Creates the interval `[upper:lower]`.
    ///
    /// Passing `upper < lower` yields an invalid interval that behaves as
    /// empty.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let r = Interval::new(12, -5);
    /// assert!(r.is_valid());
    /// assert_eq!(r.size(), 18);
    ///
    /// let backwards = Interval::new(-5, 12);
    /// assert!(!backwards.is_valid());
    /// assert!(backwards.is_empty());
    /// ```
    pub fn new(upper: T, lower: T) -> Self {
        Interval {
            upper,
            lower,
            init: true,
        }
    }

    /// Creates the one-value interval `[v:v]`, printed as `[v]`.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let bit = Interval::singleton(-3);
    /// assert!(bit.is_singleton());
    /// assert_eq!(bit.to_string(), "[-3]");
    /// ```
    pub fn singleton(v: T) -> Self {
        Interval {
            upper: v,
            lower: v,
            init: true,
        }
    }

    /// Creates the empty (and invalid) interval, printed as `[]`.
    pub fn empty() -> Self {
        Interval {
            upper: T::zero(),
            lower: T::zero(),
            init: false,
        }
    }

    /// The upper bound, unchecked: for an empty or invalid interval this is
    /// whatever was stored, not a meaningful bound.
    pub fn upper(&self) -> T {
        self.upper
    }

    /// The lower bound, unchecked like [`upper`](Interval::upper).
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Replaces the upper bound. The interval counts as explicitly bounded
    /// afterwards, even if it was default-constructed.
    pub fn set_upper(&mut self, v: T) {
        self.upper = v;
        self.init = true;
    }

    /// Replaces the lower bound; see [`set_upper`](Interval::set_upper).
    pub fn set_lower(&mut self, v: T) {
        self.lower = v;
        self.init = true;
    }

    /// An interval is valid when it was given explicit bounds and
    /// `upper >= lower`.
    pub fn is_valid(&self) -> bool {
        self.init && self.lower <= self.upper
    }

    /// The number of values in the interval: `upper - lower + unit` when
    /// valid, zero otherwise.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// assert_eq!(Interval::new(12, -5).size(), 18);
    /// assert_eq!(Interval::singleton(7).size(), 1);
    /// assert_eq!(Interval::<i32>::empty().size(), 0);
    /// ```
    pub fn size(&self) -> T {
        if self.is_valid() {
            self.upper - self.lower + T::unit()
        } else {
            T::zero()
        }
    }

    /// An interval is empty when it contains no value. Invalid intervals are
    /// empty; valid intervals of size zero exist only in domains with a zero
    /// unit.
    pub fn is_empty(&self) -> bool {
        self.size() == T::zero()
    }

    /// An interval is a singleton when it contains exactly one value.
    pub fn is_singleton(&self) -> bool {
        self.is_valid() && self.size() == T::unit()
    }

    /// Checks whether a value lies within the interval.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let r = Interval::new(12, -5);
    /// assert!(r.contains(0));
    /// assert!(r.contains(12));
    /// assert!(r.contains(-5));
    /// assert!(!r.contains(13));
    /// assert!(!Interval::empty().contains(0));
    /// ```
    pub fn contains(&self, v: T) -> bool {
        !self.is_empty() && self.lower <= v && v <= self.upper
    }

    /// Checks whether this interval is contained in `other`. The empty
    /// interval is a subset of everything.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// assert!(Interval::new(0, -5).subset(&Interval::new(12, -5)));
    /// assert!(Interval::<i32>::empty().subset(&Interval::empty()));
    /// assert!(!Interval::new(12, -5).subset(&Interval::new(0, -5)));
    /// ```
    pub fn subset(&self, other: &Self) -> bool {
        self.is_empty()
            || (!other.is_empty() && self.upper <= other.upper && other.lower <= self.lower)
    }

    /// Checks whether this interval is contained in `other` without being
    /// equal to it.
    pub fn proper_subset(&self, other: &Self) -> bool {
        self.subset(other) && self != other
    }

    /// Checks whether this interval contains `other`.
    pub fn superset(&self, other: &Self) -> bool {
        other.subset(self)
    }

    /// Checks whether this interval contains `other` without being equal to
    /// it.
    pub fn proper_superset(&self, other: &Self) -> bool {
        other.proper_subset(self)
    }

    /// Checks whether the two intervals share at least one value.
    pub fn overlap(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.upper >= other.lower
            && other.upper >= self.lower
    }

    /// Checks whether the two intervals share no value. Empty intervals are
    /// disjoint from everything.
    pub fn disjoint(&self, other: &Self) -> bool {
        !self.overlap(other)
    }

    /// Checks whether the two intervals overlap *or* abut, i.e. whether their
    /// union is a single interval.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let low = Interval::new(4, 0);
    /// assert!(Interval::new(10, 5).connected(&low));  // abuts
    /// assert!(Interval::new(10, 3).connected(&low));  // overlaps
    /// assert!(!Interval::new(10, 6).connected(&low)); // gap at 5
    /// ```
    pub fn connected(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.upper.succ() >= other.lower
            && other.upper.succ() >= self.lower
    }

    /// The minimal interval enclosing both operands. Hull with the empty
    /// interval is the identity.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let hull = Interval::new(12, -5).hull(&Interval::new(0, -10));
    /// assert_eq!(hull, Interval::new(12, -10));
    /// ```
    pub fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            *other
        } else if other.is_empty() {
            *self
        } else {
            Interval::new(self.upper.max(other.upper), self.lower.min(other.lower))
        }
    }

    /// The values common to both operands; empty if they do not overlap.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let x = Interval::new(12, -5).intersection(&Interval::new(0, -10));
    /// assert_eq!(x, Interval::new(0, -5));
    /// assert!(Interval::new(1, 0).intersection(&Interval::new(9, 8)).is_empty());
    /// ```
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        let upper = self.upper.min(other.upper);
        let lower = self.lower.max(other.lower);
        if lower <= upper {
            Interval::new(upper, lower)
        } else {
            Interval::empty()
        }
    }

    /// The exact union of the two intervals, which exists only when they are
    /// [`connected`](Interval::connected). Combining with the empty interval
    /// returns the other operand; a disconnected pair yields the empty
    /// neutral value (the checked variant reports
    /// [`RangeError::NonOperable`] instead).
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let u = Interval::new(12, -5).combine(&Interval::new(0, -10));
    /// assert_eq!(u, Interval::new(12, -10));
    /// assert!(Interval::new(10, 6).combine(&Interval::new(4, 0)).is_empty());
    /// ```
    pub fn combine(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        if self.connected(other) {
            self.hull(other)
        } else {
            Interval::empty()
        }
    }

    /// The values of this interval not in `other`.
    ///
    /// When the remainder falls apart into two pieces (subtracting a proper
    /// inner part), a single interval cannot express it: the total surface
    /// returns the empty neutral value and
    /// [`try_complement`](Interval::try_complement) reports
    /// [`RangeError::NonOperable`]. [`RangeMap`](crate::RangeMap) expresses
    /// the two-piece result exactly.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let d = Interval::new(12, -5).complement(&Interval::new(0, -10));
    /// assert_eq!(d, Interval::new(12, 1));
    /// // Subtracting a strict inner part needs two pieces:
    /// assert!(Interval::new(10, 0).complement(&Interval::new(3, 2)).is_empty());
    /// ```
    pub fn complement(&self, other: &Self) -> Self {
        match self.complement_impl(other) {
            Ok(r) => r,
            Err(_) => Interval::empty(),
        }
    }

    fn complement_impl(&self, other: &Self) -> Result<Self, RangeError> {
        let x = self.intersection(other);
        if x.is_empty() {
            return Ok(*self);
        }
        if x == *self {
            return Ok(Interval::empty());
        }
        let high_remains = self.upper > x.upper;
        let low_remains = self.lower < x.lower;
        if high_remains && low_remains {
            return Err(RangeError::NonOperable);
        }
        if high_remains {
            Ok(Interval::new(self.upper, x.upper.succ()))
        } else {
            Ok(Interval::new(x.lower.pred(), self.lower))
        }
    }

    /// The standard three-way division of two intervals into
    /// `(high, middle, low)`.
    ///
    /// The three parts are pairwise disjoint and their union is the hull of
    /// the operands:
    ///
    /// - both operands empty: three empty parts;
    /// - one operand empty: the other becomes `middle`;
    /// - disjoint operands: the greater one (under the weak order) becomes
    ///   `high`, the smaller `low`, and `middle` is empty;
    /// - overlapping operands: `middle` is the intersection and `high`/`low`
    ///   are the remainders of the hull above and below it.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let (h, m, l) = Interval::new(12, -5).partition(&Interval::new(0, -10));
    /// assert_eq!(h, Interval::new(12, 1));
    /// assert_eq!(m, Interval::new(0, -5));
    /// assert_eq!(l, Interval::new(-6, -10));
    /// ```
    pub fn partition(&self, other: &Self) -> (Self, Self, Self) {
        if self.is_empty() && other.is_empty() {
            return (Interval::empty(), Interval::empty(), Interval::empty());
        }
        if self.is_empty() || other.is_empty() {
            return (Interval::empty(), self.hull(other), Interval::empty());
        }
        if self.disjoint(other) {
            return if self < other {
                (*other, Interval::empty(), *self)
            } else {
                (*self, Interval::empty(), *other)
            };
        }
        let mid = self.intersection(other);
        let hull = self.hull(other);
        let high = if hull.upper == mid.upper {
            Interval::empty()
        } else {
            Interval::new(hull.upper, mid.upper.succ())
        };
        let low = if mid.lower == hull.lower {
            Interval::empty()
        } else {
            Interval::new(mid.lower.pred(), hull.lower)
        };
        (high, mid, low)
    }

    /// Returns an arbitrary member of the interval, or `None` if it is empty.
    pub fn choose(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.lower)
        }
    }

    /// Iterates over the members of the interval from `lower` to `upper`.
    ///
    /// Only meaningful for discrete domains; with a zero unit the iterator is
    /// empty.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let values: Vec<i32> = Interval::new(2, -1).iter().collect();
    /// assert_eq!(values, vec![-1, 0, 1, 2]);
    /// assert_eq!(Interval::<i32>::empty().iter().count(), 0);
    /// ```
    pub fn iter(&self) -> PointIter<T> {
        if self.is_empty() || T::unit() == T::zero() {
            PointIter {
                next: None,
                upper: self.upper,
            }
        } else {
            PointIter {
                next: Some(self.lower),
                upper: self.upper,
            }
        }
    }

    fn check_valid(&self, other: &Self) -> Result<(), RangeError> {
        if self.is_valid() && other.is_valid() {
            Ok(())
        } else {
            Err(RangeError::InvalidRange)
        }
    }

    /// Checked [`contains`](Interval::contains); fails with
    /// [`RangeError::InvalidRange`] on an invalid receiver.
    pub fn try_contains(&self, v: T) -> Result<bool, RangeError> {
        if !self.is_valid() {
            return Err(RangeError::InvalidRange);
        }
        Ok(self.contains(v))
    }

    /// Checked [`subset`](Interval::subset); fails with
    /// [`RangeError::InvalidRange`] if either operand is invalid.
    pub fn try_subset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_valid(other)?;
        Ok(self.subset(other))
    }

    /// Checked [`proper_subset`](Interval::proper_subset).
    pub fn try_proper_subset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_valid(other)?;
        Ok(self.proper_subset(other))
    }

    /// Checked [`superset`](Interval::superset).
    pub fn try_superset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_valid(other)?;
        Ok(self.superset(other))
    }

    /// Checked [`proper_superset`](Interval::proper_superset).
    pub fn try_proper_superset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_valid(other)?;
        Ok(self.proper_superset(other))
    }

    /// Checked equality test.
    pub fn try_equal(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_valid(other)?;
        Ok(self == other)
    }

    /// Checked comparison under the weak order.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, RangeError> {
        self.check_valid(other)?;
        Ok(self.cmp(other))
    }

    /// Checked [`overlap`](Interval::overlap).
    pub fn try_overlap(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_valid(other)?;
        Ok(self.overlap(other))
    }

    /// Checked [`disjoint`](Interval::disjoint).
    pub fn try_disjoint(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_valid(other)?;
        Ok(self.disjoint(other))
    }

    /// Checked [`connected`](Interval::connected).
    pub fn try_connected(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_valid(other)?;
        Ok(self.connected(other))
    }

    /// Checked [`hull`](Interval::hull).
    pub fn try_hull(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_valid(other)?;
        Ok(self.hull(other))
    }

    /// Checked [`intersection`](Interval::intersection).
    pub fn try_intersection(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_valid(other)?;
        Ok(self.intersection(other))
    }

    /// Checked [`combine`](Interval::combine); fails with
    /// [`RangeError::NonOperable`] when the operands are not connected.
    pub fn try_combine(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_valid(other)?;
        if self.connected(other) {
            Ok(self.hull(other))
        } else {
            Err(RangeError::NonOperable)
        }
    }

    /// Checked [`complement`](Interval::complement); fails with
    /// [`RangeError::NonOperable`] when the remainder needs two pieces.
    ///
    /// # Example
    /// ```
    /// use netrange::{Interval, RangeError};
    ///
    /// let r = Interval::new(10, 0).try_complement(&Interval::new(3, 2));
    /// assert_eq!(r, Err(RangeError::NonOperable));
    /// ```
    pub fn try_complement(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_valid(other)?;
        self.complement_impl(other)
    }

    /// Checked [`partition`](Interval::partition).
    pub fn try_partition(&self, other: &Self) -> Result<(Self, Self, Self), RangeError> {
        self.check_valid(other)?;
        Ok(self.partition(other))
    }
}

impl<T: Step> Default for Interval<T> {
    fn default() -> Self {
        Interval::empty()
    }
}

impl<T: Step> PartialEq for Interval<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            self.is_empty() && other.is_empty()
        } else {
            self.upper == other.upper && self.lower == other.lower
        }
    }
}

impl<T: Step> Eq for Interval<T> {}

impl<T: Step> Ord for Interval<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self
                .upper
                .cmp(&other.upper)
                .then_with(|| other.lower.cmp(&self.lower)),
        }
    }
}

impl<T: Step> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Step> BitAnd for &Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: Self) -> Interval<T> {
        self.intersection(rhs)
    }
}

impl<T: Step + Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[]")
        } else if self.is_singleton() {
            write!(f, "[{}]", self.upper)
        } else {
            write!(f, "[{}:{}]", self.upper, self.lower)
        }
    }
}

/// Iterator over the members of a discrete [`Interval`], lowest first.
#[derive(Debug, Clone)]
pub struct PointIter<T> {
    next: Option<T>,
    upper: T,
}

impl<T: Step> Iterator for PointIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let cur = self.next?;
        self.next = if cur < self.upper {
            Some(cur.succ())
        } else {
            None
        };
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use super::Interval;
    use crate::RangeError;

    impl Arbitrary for Interval<i32> {
        fn arbitrary(g: &mut Gen) -> Self {
            let a = i32::arbitrary(g) % 16;
            let b = i32::arbitrary(g) % 16;
            match u8::arbitrary(g) % 8 {
                0 => Interval::empty(),
                1 => Interval::singleton(a),
                2 => Interval::new(a.min(b), a.max(b).saturating_add(1)), // reversed bounds
                _ => Interval::new(a.max(b), a.min(b)),
            }
        }
    }

    #[test]
    fn construction_and_printing() {
        assert_eq!(Interval::new(12, -5).to_string(), "[12:-5]");
        assert_eq!(Interval::singleton(-3).to_string(), "[-3]");
        assert_eq!(Interval::<i32>::empty().to_string(), "[]");
        // reversed bounds print as empty
        assert_eq!(Interval::new(-2, 0).to_string(), "[]");
    }

    #[test]
    fn validity_and_size() {
        assert!(Interval::new(3, 3).is_valid());
        assert!(!Interval::<i32>::empty().is_valid());
        assert!(!Interval::new(0, 3).is_valid());
        assert_eq!(Interval::new(0, 3).size(), 0);
        assert_eq!(Interval::new(3, 0).size(), 4);
        assert!(Interval::singleton(9).is_singleton());
        assert!(!Interval::new(3, 0).is_singleton());
        assert!(!Interval::<i32>::empty().is_singleton());
    }

    #[test]
    fn setters_mark_the_interval_bounded() {
        let mut r = Interval::<i32>::empty();
        assert!(!r.is_valid());
        r.set_upper(5);
        r.set_lower(2);
        assert!(r.is_valid());
        assert_eq!(r, Interval::new(5, 2));
    }

    #[test]
    fn basic_interval_arithmetic() {
        let a = Interval::new(12, -5);
        let b = Interval::new(0, -10);
        assert_eq!(a.intersection(&b), Interval::new(0, -5));
        assert_eq!(a.combine(&b), Interval::new(12, -10));
        assert_eq!(a.complement(&b), Interval::new(12, 1));
        assert_eq!(b.complement(&a), Interval::new(-6, -10));
        let (h, m, l) = a.partition(&b);
        assert_eq!(h, Interval::new(12, 1));
        assert_eq!(m, Interval::new(0, -5));
        assert_eq!(l, Interval::new(-6, -10));
    }

    #[test]
    fn complement_of_an_inner_part_is_not_a_single_interval() {
        let a = Interval::new(10, 0);
        let b = Interval::new(3, 2);
        assert!(a.complement(&b).is_empty());
        assert_eq!(a.try_complement(&b), Err(RangeError::NonOperable));
        // but the one-sided cases are fine
        assert_eq!(a.complement(&Interval::new(3, 0)), Interval::new(10, 4));
        assert_eq!(a.complement(&Interval::new(10, 7)), Interval::new(6, 0));
        assert_eq!(a.complement(&a), Interval::empty());
        assert_eq!(a.complement(&Interval::new(20, 15)), a);
    }

    #[test]
    fn combine_requires_connected_operands() {
        assert_eq!(
            Interval::new(10, 5).combine(&Interval::new(4, 0)),
            Interval::new(10, 0)
        );
        assert_eq!(
            Interval::new(10, 6).try_combine(&Interval::new(4, 0)),
            Err(RangeError::NonOperable)
        );
        // empty operand is the union identity
        assert_eq!(
            Interval::new(10, 6).combine(&Interval::empty()),
            Interval::new(10, 6)
        );
    }

    #[test]
    fn partition_of_disjoint_operands_orients_by_the_weak_order() {
        let hi = Interval::new(9, 7);
        let lo = Interval::new(3, 1);
        let (h, m, l) = lo.partition(&hi);
        assert_eq!(h, hi);
        assert!(m.is_empty());
        assert_eq!(l, lo);
        let (h2, m2, l2) = hi.partition(&lo);
        assert_eq!((h2, m2, l2), (h, m, l));
    }

    #[test]
    fn partition_with_an_empty_operand_hulls_the_other() {
        let r = Interval::new(4, 2);
        let (h, m, l) = r.partition(&Interval::empty());
        assert!(h.is_empty());
        assert_eq!(m, r);
        assert!(l.is_empty());
    }

    #[test]
    fn invalid_operands_behave_as_empty_but_fail_the_checked_surface() {
        let bad = Interval::new(0, 3);
        let good = Interval::new(5, 0);
        assert!(bad.subset(&good));
        assert!(bad.disjoint(&good));
        assert!(!bad.overlap(&good));
        assert_eq!(bad.try_subset(&good), Err(RangeError::InvalidRange));
        assert_eq!(good.try_overlap(&bad), Err(RangeError::InvalidRange));
        assert_eq!(good.try_subset(&good), Ok(true));
    }

    #[test]
    fn weak_order_breaks_upper_ties_by_descending_lower() {
        assert!(Interval::new(5, 0) < Interval::new(5, 3));
        assert!(Interval::new(5, 3) < Interval::new(6, 0));
        assert_eq!(Interval::new(5, 0).cmp(&Interval::new(5, 0)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn member_iteration() {
        let values: Vec<i32> = Interval::new(2, -2).iter().collect();
        assert_eq!(values, vec![-2, -1, 0, 1, 2]);
        assert_eq!(Interval::singleton(7).iter().collect::<Vec<_>>(), vec![7]);
        assert_eq!(Interval::<i32>::empty().iter().count(), 0);
        assert_eq!(Interval::new(2, -2).choose(), Some(-2));
        assert_eq!(Interval::<i32>::empty().choose(), None);
    }

    #[quickcheck]
    fn intersection_keeps_exactly_the_shared_members(a: Interval<i32>, b: Interval<i32>) {
        let x = a.intersection(&b);
        for v in a.hull(&b).iter() {
            assert_eq!(x.contains(v), a.contains(v) && b.contains(v));
        }
    }

    #[quickcheck]
    fn hull_covers_both_operands(a: Interval<i32>, b: Interval<i32>) -> bool {
        let h = a.hull(&b);
        a.subset(&h) && b.subset(&h)
    }

    #[quickcheck]
    fn partition_parts_are_disjoint_and_cover_the_operands(a: Interval<i32>, b: Interval<i32>) {
        let (h, m, l) = a.partition(&b);
        assert!(h.disjoint(&m));
        assert!(h.disjoint(&l));
        assert!(m.disjoint(&l));
        // the parts cover a ∪ b exactly; only a gap between disjoint
        // operands separates that from the hull
        let hull = a.hull(&b);
        for v in hull.iter() {
            let in_parts = h.contains(v) || m.contains(v) || l.contains(v);
            assert_eq!(in_parts, a.contains(v) || b.contains(v));
        }
        for part in [h, m, l] {
            assert!(part.subset(&hull));
        }
    }

    #[quickcheck]
    fn subset_agrees_with_membership(a: Interval<i32>, b: Interval<i32>) -> bool {
        a.subset(&b) == a.iter().all(|v| b.contains(v))
    }

    #[quickcheck]
    fn complement_removes_exactly_the_other_operand(a: Interval<i32>, b: Interval<i32>) {
        if let Ok(d) = a.try_complement(&b) {
            for v in a.iter() {
                assert_eq!(d.contains(v), !b.contains(v));
            }
            assert!(d.subset(&a));
        }
    }

    #[quickcheck]
    fn weak_order_is_total_within_the_domain(a: Interval<i32>, b: Interval<i32>) -> bool {
        let lt = a < b;
        let gt = b < a;
        let eq = a == b;
        // exactly one of the three relations holds
        (lt as u8) + (gt as u8) + (eq as u8) == 1
    }

    #[quickcheck]
    fn combine_matches_the_hull_when_connected(a: Interval<i32>, b: Interval<i32>) -> bool {
        match a.try_combine(&b) {
            Ok(u) => u == a.hull(&b),
            Err(RangeError::NonOperable) => !a.connected(&b),
            Err(RangeError::InvalidRange) => !a.is_valid() || !b.is_valid(),
            Err(_) => false,
        }
    }
}
