//! Axis-aligned hyper-rectangles.
//!
//! A [`Region`] is an ordered tuple of [`Interval`]s describing a
//! multi-dimensional select such as `[3:0][12:-5]`. Axis 0 is the outermost
//! (leftmost) dimension; the textual form concatenates the axes left to
//! right.
//!
//! Most operations are pointwise over the axes and require the operands to be
//! *comparable* (equal dimension). The single-piece operations
//! [`combine`](Region::combine), [`complement`](Region::complement) and
//! [`partition`](Region::partition) additionally require the operands to be
//! *operable*: equal in all axes but at most one, so that the interval
//! operation on the differing axis describes the whole result. Anything that
//! falls outside these preconditions belongs in a
//! [`RangeMap`](crate::RangeMap).

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::BitAnd;

use smallvec::SmallVec;

use crate::{Interval, RangeError, Step};

// Netlist selects rarely go beyond a handful of dimensions; keep the axis
// list inline for those.
type Axes<T> = SmallVec<[Interval<T>; 4]>;

/// An axis-aligned hyper-rectangle: an ordered sequence of closed intervals.
///
/// # Example
/// ```
/// use netrange::{Interval, Region};
///
/// let r = Region::from_pairs([(3, 0), (12, -5)]);
/// assert_eq!(r.dimension(), 2);
/// assert_eq!(r.size(), 4 * 18);
/// assert_eq!(r.to_string(), "[3:0][12:-5]");
/// assert!(r.contains(&[2, 11]));
/// ```
///
/// A region is empty when it has no axes or any axis is empty; empty regions
/// print as `[]`.
#[derive(Debug, Clone)]
pub struct Region<T> {
    axes: Axes<T>,
}

impl<T: Step> Region<T> {
    /// Creates the zero-dimensional (empty) region.
    pub fn new() -> Self {
        Region { axes: Axes::new() }
    }

    /// Creates a region from its axis intervals, outermost first.
    pub fn from_intervals<I>(axes: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        Region {
            axes: axes.into_iter().collect(),
        }
    }

    /// Creates a region from `(upper, lower)` bound pairs, outermost first.
    ///
    /// # Example
    /// ```
    /// use netrange::Region;
    ///
    /// let r = Region::from_pairs([(3, 0), (2, 2)]);
    /// assert_eq!(r.to_string(), "[3:0][2]");
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Region {
            axes: pairs
                .into_iter()
                .map(|(upper, lower)| Interval::new(upper, lower))
                .collect(),
        }
    }

    /// The number of axes.
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }

    /// The interval of axis `i`, or `None` when out of range.
    pub fn axis(&self, i: usize) -> Option<&Interval<T>> {
        self.axes.get(i)
    }

    /// Iterates over the axis intervals, outermost first.
    pub fn iter_axes(&self) -> impl DoubleEndedIterator<Item = &Interval<T>> + '_ {
        self.axes.iter()
    }

    /// Prepends a new outermost axis. O(dimension).
    pub fn add_upper(&mut self, axis: Interval<T>) {
        self.axes.insert(0, axis);
    }

    /// Appends a new innermost axis.
    pub fn add_lower(&mut self, axis: Interval<T>) {
        self.axes.push(axis);
    }

    /// Inserts an axis at position `pos`. O(dimension).
    ///
    /// # Panics
    /// Panics if `pos > dimension()`.
    pub fn add_dimension(&mut self, axis: Interval<T>, pos: usize) {
        self.axes.insert(pos, axis);
    }

    /// Removes and returns the outermost axis.
    pub fn remove_upper(&mut self) -> Option<Interval<T>> {
        if self.axes.is_empty() {
            None
        } else {
            Some(self.axes.remove(0))
        }
    }

    /// Removes and returns the innermost axis.
    pub fn remove_lower(&mut self) -> Option<Interval<T>> {
        self.axes.pop()
    }

    /// Removes and returns the axis at position `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= dimension()`.
    pub fn remove_dimension(&mut self, pos: usize) -> Interval<T> {
        self.axes.remove(pos)
    }

    /// A region is valid when every axis interval is valid; vacuously true
    /// for the zero-dimensional region.
    pub fn is_valid(&self) -> bool {
        self.axes.iter().all(Interval::is_valid)
    }

    /// A region is empty when it has no axes or any axis is empty.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty() || self.axes.iter().any(Interval::is_empty)
    }

    /// The number of points in the region: the product of the axis sizes,
    /// zero when empty.
    pub fn size(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }
        self.axes
            .iter()
            .skip(1)
            .fold(self.axes[0].size(), |acc, axis| acc * axis.size())
    }

    /// A region is a singleton when it contains exactly one point.
    pub fn is_singleton(&self) -> bool {
        !self.is_empty() && self.size() == T::unit()
    }

    /// Checks whether a coordinate lies within the region. The coordinate
    /// must have one value per axis, outermost first.
    pub fn contains(&self, point: &[T]) -> bool {
        !self.is_empty()
            && point.len() == self.dimension()
            && self
                .axes
                .iter()
                .zip(point)
                .all(|(axis, v)| axis.contains(*v))
    }

    /// Two regions are comparable when they have the same dimension.
    pub fn comparable(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
    }

    /// Two regions are operable when they are comparable and differ in at
    /// most one axis; only then can a single-axis interval operation express
    /// their combination.
    ///
    /// # Example
    /// ```
    /// use netrange::Region;
    ///
    /// let a = Region::from_pairs([(3, 0), (12, -5)]);
    /// let b = Region::from_pairs([(3, 0), (12, -3)]);
    /// let c = Region::from_pairs([(2, 2), (-4, -4)]);
    /// assert!(a.operable(&b));
    /// assert!(!a.operable(&c)); // differs on both axes
    /// ```
    pub fn operable(&self, other: &Self) -> bool {
        self.comparable(other) && self.count_differing(other) <= 1
    }

    fn count_differing(&self, other: &Self) -> usize {
        self.axes
            .iter()
            .zip(&other.axes)
            .filter(|(a, b)| a != b)
            .count()
    }

    fn first_differing(&self, other: &Self) -> Option<usize> {
        self.axes
            .iter()
            .zip(&other.axes)
            .position(|(a, b)| a != b)
    }

    /// Checks whether this region is contained in `other`. The empty region
    /// is a subset of everything; regions of different dimension never
    /// contain each other.
    pub fn subset(&self, other: &Self) -> bool {
        if self.is_empty() {
            return true;
        }
        if other.is_empty() || !self.comparable(other) {
            return false;
        }
        self.axes
            .iter()
            .zip(&other.axes)
            .all(|(a, b)| a.subset(b))
    }

    /// Checks whether this region is contained in `other` without being equal
    /// to it.
    pub fn proper_subset(&self, other: &Self) -> bool {
        self.subset(other) && self != other
    }

    /// Checks whether this region contains `other`.
    pub fn superset(&self, other: &Self) -> bool {
        other.subset(self)
    }

    /// Checks whether this region contains `other` without being equal to it.
    pub fn proper_superset(&self, other: &Self) -> bool {
        other.proper_subset(self)
    }

    /// Checks whether the two regions share at least one point, which
    /// requires every axis pair to overlap.
    pub fn overlap(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.comparable(other)
            && self
                .axes
                .iter()
                .zip(&other.axes)
                .all(|(a, b)| a.overlap(b))
    }

    /// Checks whether the two regions share no point.
    pub fn disjoint(&self, other: &Self) -> bool {
        !self.overlap(other)
    }

    /// Checks whether the union of the two regions is a single region: they
    /// must be operable and overlap or abut on the differing axis.
    ///
    /// # Example
    /// ```
    /// use netrange::Region;
    ///
    /// let a = Region::from_pairs([(3, 0), (12, 6)]);
    /// assert!(a.connected(&Region::from_pairs([(3, 0), (5, -5)])));
    /// assert!(!a.connected(&Region::from_pairs([(3, 0), (3, -5)])));
    /// assert!(!a.connected(&Region::from_pairs([(2, 0), (5, -5)])));
    /// ```
    pub fn connected(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() || !self.operable(other) {
            return false;
        }
        match self.first_differing(other) {
            None => true,
            Some(i) => self.axes[i].connected(&other.axes[i]),
        }
    }

    /// The minimal region enclosing both operands: the pointwise hull. Hull
    /// with the empty region is the identity; incomparable operands yield the
    /// empty neutral value.
    pub fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        if !self.comparable(other) {
            return Region::new();
        }
        Region {
            axes: self
                .axes
                .iter()
                .zip(&other.axes)
                .map(|(a, b)| a.hull(b))
                .collect(),
        }
    }

    /// The points common to both operands: the pointwise intersection.
    ///
    /// # Example
    /// ```
    /// use netrange::Region;
    ///
    /// let a = Region::from_pairs([(3, 0), (12, -5)]);
    /// let b = Region::from_pairs([(5, 2), (0, -10)]);
    /// assert_eq!(a.intersection(&b).to_string(), "[3:2][0:-5]");
    /// ```
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() || !self.comparable(other) {
            return Region::new();
        }
        Region {
            axes: self
                .axes
                .iter()
                .zip(&other.axes)
                .map(|(a, b)| a.intersection(b))
                .collect(),
        }
    }

    /// The exact union of the two regions, which exists only when they are
    /// operable and connected on the differing axis. Combining with the empty
    /// region returns the other operand; every other failure yields the empty
    /// neutral value (see [`try_combine`](Region::try_combine)).
    pub fn combine(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        self.combine_impl(other).unwrap_or_else(|_| Region::new())
    }

    fn combine_impl(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_operable(other)?;
        match self.first_differing(other) {
            None => Ok(self.clone()),
            Some(i) => {
                let joined = self.axes[i].try_combine(&other.axes[i])?;
                let mut out = self.clone();
                out.axes[i] = joined;
                Ok(out)
            }
        }
    }

    /// The points of this region not in `other`.
    ///
    /// Defined when the operands are operable and the differing axis keeps a
    /// one-sided remainder; then the result is this region with that axis
    /// reduced. Failures yield the empty neutral value (see
    /// [`try_complement`](Region::try_complement)); the exact multi-piece
    /// result lives in a [`RangeMap`](crate::RangeMap).
    ///
    /// # Example
    /// ```
    /// use netrange::Region;
    ///
    /// let a = Region::from_pairs([(3, 0), (12, -5)]);
    /// let b = Region::from_pairs([(3, 0), (12, -3)]);
    /// assert_eq!(a.complement(&b).to_string(), "[3:0][-4:-5]");
    /// ```
    pub fn complement(&self, other: &Self) -> Self {
        if self.is_empty() {
            return Region::new();
        }
        if other.is_empty() {
            return self.clone();
        }
        self.complement_impl(other)
            .unwrap_or_else(|_| Region::new())
    }

    fn complement_impl(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_operable(other)?;
        match self.first_differing(other) {
            None => Ok(Region::new()),
            Some(i) => {
                let reduced = self.axes[i].try_complement(&other.axes[i])?;
                let mut out = self.clone();
                out.axes[i] = reduced;
                Ok(out)
            }
        }
    }

    /// The standard three-way division `(high, middle, low)` of two operable
    /// regions: the differing axis is partitioned, all other axes are copied.
    /// Disjoint operands come back whole, the greater one as `high` with an
    /// empty `middle`. Failures yield three empty regions (see
    /// [`try_partition`](Region::try_partition)).
    pub fn partition(&self, other: &Self) -> (Self, Self, Self) {
        if self.is_empty() && other.is_empty() {
            return (Region::new(), Region::new(), Region::new());
        }
        if self.is_empty() || other.is_empty() {
            return (Region::new(), self.hull(other), Region::new());
        }
        self.partition_impl(other)
            .unwrap_or_else(|_| (Region::new(), Region::new(), Region::new()))
    }

    fn partition_impl(&self, other: &Self) -> Result<(Self, Self, Self), RangeError> {
        self.check_operable(other)?;
        match self.first_differing(other) {
            None => Ok((Region::new(), self.clone(), Region::new())),
            Some(i) => {
                let (h, m, l) = self.axes[i].partition(&other.axes[i]);
                let with_axis = |axis: Interval<T>| {
                    let mut out = self.clone();
                    out.axes[i] = axis;
                    out
                };
                Ok((with_axis(h), with_axis(m), with_axis(l)))
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

    fn check_comparable(&self, other: &Self) -> Result<(), RangeError> {
        self.check_valid(other)?;
        if self.comparable(other) {
            Ok(())
        } else {
            Err(RangeError::NonComparable {
                lhs: self.dimension(),
                rhs: other.dimension(),
            })
        }
    }

    fn check_operable(&self, other: &Self) -> Result<(), RangeError> {
        self.check_comparable(other)?;
        if self.count_differing(other) <= 1 {
            Ok(())
        } else {
            Err(RangeError::NonOperable)
        }
    }

    /// Checked [`subset`](Region::subset); fails with
    /// [`RangeError::InvalidRange`] on an invalid operand and
    /// [`RangeError::NonComparable`] on a dimension mismatch.
    ///
    /// # Example
    /// ```
    /// use netrange::{Region, RangeError};
    ///
    /// let a = Region::from_pairs([(3, 0), (12, -5)]);
    /// let b = Region::from_pairs([(3, 0), (12, -5), (0, 0)]);
    /// assert_eq!(
    ///     a.try_subset(&b),
    ///     Err(RangeError::NonComparable { lhs: 2, rhs: 3 })
    /// );
    /// ```
    pub fn try_subset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.subset(other))
    }

    /// Checked [`proper_subset`](Region::proper_subset).
    pub fn try_proper_subset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.proper_subset(other))
    }

    /// Checked [`superset`](Region::superset).
    pub fn try_superset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.superset(other))
    }

    /// Checked [`proper_superset`](Region::proper_superset).
    pub fn try_proper_superset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.proper_superset(other))
    }

    /// Checked equality test.
    pub fn try_equal(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self == other)
    }

    /// Checked [`overlap`](Region::overlap).
    pub fn try_overlap(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.overlap(other))
    }

    /// Checked [`disjoint`](Region::disjoint).
    pub fn try_disjoint(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.disjoint(other))
    }

    /// Checked [`connected`](Region::connected).
    pub fn try_connected(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.connected(other))
    }

    /// Checked [`hull`](Region::hull).
    pub fn try_hull(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_comparable(other)?;
        Ok(self.hull(other))
    }

    /// Checked [`intersection`](Region::intersection).
    pub fn try_intersection(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_comparable(other)?;
        Ok(self.intersection(other))
    }

    /// Checked [`combine`](Region::combine); fails with
    /// [`RangeError::NonOperable`] when more than one axis differs or the
    /// differing axis is not connected.
    pub fn try_combine(&self, other: &Self) -> Result<Self, RangeError> {
        self.combine_impl(other)
    }

    /// Checked [`complement`](Region::complement); fails with
    /// [`RangeError::NonOperable`] when more than one axis differs or the
    /// differing axis keeps both sides.
    ///
    /// # Example
    /// ```
    /// use netrange::{Region, RangeError};
    ///
    /// let a = Region::from_pairs([(3, 0), (12, -5)]);
    /// let c = Region::from_pairs([(2, 2), (-4, -4)]);
    /// assert_eq!(a.try_complement(&c), Err(RangeError::NonOperable));
    /// ```
    pub fn try_complement(&self, other: &Self) -> Result<Self, RangeError> {
        self.complement_impl(other)
    }

    /// Checked [`partition`](Region::partition).
    pub fn try_partition(&self, other: &Self) -> Result<(Self, Self, Self), RangeError> {
        self.partition_impl(other)
    }
}

impl<T: Step> Default for Region<T> {
    fn default() -> Self {
        Region::new()
    }
}

impl<T: Step> FromIterator<Interval<T>> for Region<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Region::from_intervals(iter)
    }
}

impl<T: Step> PartialEq for Region<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.comparable(other)
            && self.axes.iter().zip(&other.axes).all(|(a, b)| a == b)
    }
}

impl<T: Step> Eq for Region<T> {}

impl<T: Step> PartialOrd for Region<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_empty() && other.is_empty() {
            return Some(Ordering::Equal);
        }
        if !self.comparable(other) {
            return None;
        }
        for (a, b) in self.axes.iter().zip(&other.axes) {
            let c = a.cmp(b);
            if c != Ordering::Equal {
                return Some(c);
            }
        }
        Some(Ordering::Equal)
    }
}

impl<T: Step> BitAnd for &Region<T> {
    type Output = Region<T>;

    fn bitand(self, rhs: Self) -> Region<T> {
        self.intersection(rhs)
    }
}

impl<T: Step + Display> Display for Region<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        for axis in &self.axes {
            write!(f, "{}", axis)?;
        }
        Ok(())
    }
}
