//! Canonical disjoint unions of regions.
//!
//! A [`RangeMap`] represents an arbitrary finite union of same-dimension
//! [`Region`]s as a tree: each node carries a *span* (an interval on one
//! axis) and a child forest one axis further in, so a union of
//! hyper-rectangles is factored axis by axis. The representation is kept in a
//! canonical normal form at all times:
//!
//! 1. every sibling list is sorted in strictly descending span order,
//! 2. sibling spans are disjoint,
//! 3. abutting siblings with structurally equal children are coalesced,
//! 4. no node has an empty span, and all leaves sit on the innermost axis.
//!
//! Because the normal form is unique, set equality is structural equality and
//! the textual rendering is a canonical key.
//!
//! Set operations walk two sibling lists in descending order, split the
//! overlapping leading spans with the three-way interval
//! [`partition`](crate::Interval::partition), recurse into the child
//! dimension for the overlapped middle, and push the low remainder back onto
//! the list it came from so the walk preserves order and disjointness.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};
use std::ops::{BitAnd, BitOr, Sub};

use itertools::Itertools;

use crate::{Interval, RangeError, Region, Step};

/// One node of a [`RangeMap`]: a span on the current axis and the sub-map it
/// factors on the remaining axes. Innermost-axis nodes have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T: Step> {
    pub(crate) span: Interval<T>,
    pub(crate) children: Vec<Node<T>>,
}

/// A finite union of same-dimension regions in canonical form.
///
/// Build one from a single [`Interval`] or [`Region`] and grow it with the
/// set operations; every operation returns a fresh, normalized map.
///
/// # Example
/// ```
/// use netrange::{Interval, RangeMap};
///
/// let a = RangeMap::from(Interval::new(10, 0));
/// let b = RangeMap::from(Interval::new(3, 2));
///
/// // The difference punches a hole into the middle of `a`.
/// let d = a.complement(&b);
/// assert_eq!(d.to_string(), "{[10:4];[1:0]}");
/// assert_eq!(d.size(), 9);
///
/// // Unioning the hole back in restores `a` (and coalesces the pieces).
/// assert_eq!(d.union(&b), a);
/// ```
///
/// Maps of different dimension cannot interact: the total operations return
/// their neutral value (the empty map, `false`, `true`) and the `try_`
/// variants report [`RangeError::NonComparable`]. The empty map has dimension
/// zero and combines with anything.
#[derive(Debug, Clone)]
pub struct RangeMap<T: Step> {
    pub(crate) level: usize,
    pub(crate) roots: Vec<Node<T>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeOp {
    Union,
    Intersect,
    Subtract,
}

/// Restores the canonical form of a sibling list: sort descending, drop
/// empty spans, coalesce abutting siblings with equal children.
fn normalize<T: Step>(nodes: Vec<Node<T>>) -> Vec<Node<T>> {
    let mut nodes: Vec<Node<T>> = nodes
        .into_iter()
        .filter(|n| !n.span.is_empty())
        .collect();
    nodes.sort_by(|a, b| b.span.cmp(&a.span));
    nodes
        .into_iter()
        .coalesce(|a, b| {
            if a.span.connected(&b.span) && a.children == b.children {
                Ok(Node {
                    span: a.span.hull(&b.span),
                    children: a.children,
                })
            } else {
                Err((a, b))
            }
        })
        .collect()
}

/// The shared skeleton of the binary set operations: a merge over two
/// descending, disjoint sibling lists at the same level.
///
/// Disjoint heads are retired greatest-first. Overlapping heads are split
/// three ways; the high part belongs to whichever side reaches higher and is
/// emitted according to the operation, the middle recurses into the child
/// dimension, and the low part is written back as the new head of the side it
/// belongs to. At the innermost axis (`level == 1`) the child recursion
/// degenerates to full membership: a union or intersection keeps the middle,
/// a subtraction drops it.
fn merge<T: Step>(lhs: &[Node<T>], rhs: &[Node<T>], level: usize, op: MergeOp) -> Vec<Node<T>> {
    let mut left: VecDeque<Node<T>> = lhs.iter().cloned().collect();
    let mut right: VecDeque<Node<T>> = rhs.iter().cloned().collect();
    let mut out = Vec::new();

    loop {
        let (lspan, rspan) = match (left.front(), right.front()) {
            (Some(l), Some(r)) => (l.span, r.span),
            (Some(_), None) => {
                if matches!(op, MergeOp::Union | MergeOp::Subtract) {
                    out.extend(left.drain(..));
                }
                break;
            }
            (None, Some(_)) => {
                if op == MergeOp::Union {
                    out.extend(right.drain(..));
                }
                break;
            }
            (None, None) => break,
        };

        if lspan.disjoint(&rspan) {
            if lspan < rspan {
                let node = right.pop_front().expect("head checked above");
                if op == MergeOp::Union {
                    out.push(node);
                }
            } else {
                let node = left.pop_front().expect("head checked above");
                if matches!(op, MergeOp::Union | MergeOp::Subtract) {
                    out.push(node);
                }
            }
            continue;
        }

        let (high, mid, low) = lspan.partition(&rspan);

        if !high.is_empty() {
            let left_owns = rspan.upper() < lspan.upper();
            let emit = match op {
                MergeOp::Union => true,
                MergeOp::Intersect => false,
                MergeOp::Subtract => left_owns,
            };
            if emit {
                let owner = if left_owns {
                    left.front().expect("head checked above")
                } else {
                    right.front().expect("head checked above")
                };
                out.push(Node {
                    span: high,
                    children: owner.children.clone(),
                });
            }
        }

        {
            let lnode = left.front().expect("head checked above");
            let rnode = right.front().expect("head checked above");
            match op {
                MergeOp::Union => {
                    let children = if level > 1 {
                        merge(&lnode.children, &rnode.children, level - 1, op)
                    } else {
                        Vec::new()
                    };
                    out.push(Node {
                        span: mid,
                        children,
                    });
                }
                MergeOp::Intersect | MergeOp::Subtract => {
                    if level > 1 {
                        let children = merge(&lnode.children, &rnode.children, level - 1, op);
                        if !children.is_empty() {
                            out.push(Node {
                                span: mid,
                                children,
                            });
                        }
                    } else if op == MergeOp::Intersect {
                        out.push(Node {
                            span: mid,
                            children: Vec::new(),
                        });
                    }
                    // a subtraction wipes the overlap out at the last axis
                }
            }
        }

        if low.is_empty() {
            left.pop_front();
            right.pop_front();
        } else if lspan.lower() < rspan.lower() {
            left.front_mut().expect("head checked above").span = low;
            right.pop_front();
        } else {
            right.front_mut().expect("head checked above").span = low;
            left.pop_front();
        }
    }

    normalize(out)
}

impl<T: Step> RangeMap<T> {
    /// Creates the empty map (dimension zero).
    pub fn new() -> Self {
        RangeMap {
            level: 0,
            roots: Vec::new(),
        }
    }

    /// A map is empty when it contains no region at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The number of axes of the contained regions; zero for the empty map.
    pub fn dimension(&self) -> usize {
        self.level
    }

    /// The number of points in the map: the sum over all nodes of the span
    /// size times the child size.
    ///
    /// # Example
    /// ```
    /// use netrange::{RangeMap, Region};
    ///
    /// let m = RangeMap::from(Region::from_pairs([(3, 0), (12, -5)]));
    /// assert_eq!(m.size(), 72);
    /// assert_eq!(RangeMap::<i32>::new().size(), 0);
    /// ```
    pub fn size(&self) -> T {
        fn list_size<T: Step>(nodes: &[Node<T>]) -> T {
            let mut total = T::zero();
            for node in nodes {
                let own = node.span.size();
                let sub = if node.children.is_empty() {
                    own
                } else {
                    own * list_size(&node.children)
                };
                total = total + sub;
            }
            total
        }
        list_size(&self.roots)
    }

    /// Deep check of the canonical-form invariants. Always true for maps
    /// produced by this crate; exposed for assertions in caller code.
    pub fn is_valid(&self) -> bool {
        fn valid_list<T: Step>(nodes: &[Node<T>], level: usize) -> bool {
            if level == 0 {
                return nodes.is_empty();
            }
            let mut prev: Option<&Node<T>> = None;
            for node in nodes {
                if !node.span.is_valid() || node.span.is_empty() {
                    return false;
                }
                if level == 1 {
                    if !node.children.is_empty() {
                        return false;
                    }
                } else if node.children.is_empty()
                    || !valid_list(&node.children, level - 1)
                {
                    return false;
                }
                if let Some(prev) = prev {
                    if prev.span <= node.span || !prev.span.disjoint(&node.span) {
                        return false;
                    }
                    if prev.span.connected(&node.span) && prev.children == node.children {
                        return false; // abutting twins must have been coalesced
                    }
                }
                prev = Some(node);
            }
            true
        }
        valid_list(&self.roots, self.level)
    }

    /// Checks whether a coordinate (one value per axis, outermost first) lies
    /// within the map.
    ///
    /// # Example
    /// ```
    /// use netrange::{Interval, RangeMap};
    ///
    /// let holed = RangeMap::from(Interval::new(10, 0))
    ///     .complement(&RangeMap::from(Interval::new(3, 2)));
    /// assert!(holed.contains(&[10]));
    /// assert!(!holed.contains(&[2]));
    /// ```
    pub fn contains(&self, point: &[T]) -> bool {
        fn list_contains<T: Step>(nodes: &[Node<T>], point: &[T]) -> bool {
            let (v, rest) = match point.split_first() {
                Some(split) => split,
                None => return false,
            };
            nodes.iter().any(|node| {
                node.span.contains(*v)
                    && (rest.is_empty() || list_contains(&node.children, rest))
            })
        }
        !self.is_empty() && point.len() == self.level && list_contains(&self.roots, point)
    }

    /// The union of the two maps. Union with the empty map returns the other
    /// operand; a dimension mismatch yields the empty neutral value.
    ///
    /// # Example
    /// ```
    /// use netrange::{Interval, RangeMap};
    ///
    /// let a = RangeMap::from(Interval::new(10, 5));
    /// let b = RangeMap::from(Interval::new(4, 0));
    /// // Abutting pieces coalesce back into one interval.
    /// assert_eq!(a.union(&b).to_string(), "[10:0]");
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        if self.level != other.level {
            return RangeMap::new();
        }
        let out = RangeMap {
            level: self.level,
            roots: merge(&self.roots, &other.roots, self.level, MergeOp::Union),
        };
        debug_assert!(out.is_valid());
        out
    }

    /// The intersection of the two maps. Anything intersected with the empty
    /// map (or with a map of a different dimension) is empty.
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() || self.level != other.level {
            return RangeMap::new();
        }
        let roots = merge(&self.roots, &other.roots, self.level, MergeOp::Intersect);
        if roots.is_empty() {
            return RangeMap::new();
        }
        let out = RangeMap {
            level: self.level,
            roots,
        };
        debug_assert!(out.is_valid());
        out
    }

    /// The points of this map not in `other`. Subtracting the empty map is
    /// the identity; a dimension mismatch yields the empty neutral value.
    ///
    /// # Example
    /// ```
    /// use netrange::{RangeMap, Region};
    ///
    /// let a = RangeMap::from(Region::from_pairs([(3, 0), (12, -5)]));
    /// let c = RangeMap::from(Region::from_pairs([(2, 2), (-4, -4)]));
    /// assert_eq!(
    ///     a.complement(&c).to_string(),
    ///     "{[3][12:-5];[2]{[12:-3];[-5]};[1:0][12:-5]}"
    /// );
    /// ```
    pub fn complement(&self, other: &Self) -> Self {
        if self.is_empty() {
            return RangeMap::new();
        }
        if other.is_empty() {
            return self.clone();
        }
        if self.level != other.level {
            return RangeMap::new();
        }
        let roots = merge(&self.roots, &other.roots, self.level, MergeOp::Subtract);
        if roots.is_empty() {
            return RangeMap::new();
        }
        let out = RangeMap {
            level: self.level,
            roots,
        };
        debug_assert!(out.is_valid());
        out
    }

    /// Checks whether every point of this map lies in `other`. The empty map
    /// is a subset of everything; maps of different dimension never contain
    /// each other.
    pub fn subset(&self, other: &Self) -> bool {
        if self.is_empty() {
            return true;
        }
        if other.is_empty() || self.level != other.level {
            return false;
        }
        // a portion of `self` unexplained by `other` survives the difference
        merge(&self.roots, &other.roots, self.level, MergeOp::Subtract).is_empty()
    }

    /// Checks whether this map is a subset of `other` without being equal to
    /// it.
    pub fn proper_subset(&self, other: &Self) -> bool {
        self.subset(other) && self != other
    }

    /// Checks whether this map contains `other`.
    pub fn superset(&self, other: &Self) -> bool {
        other.subset(self)
    }

    /// Checks whether this map contains `other` without being equal to it.
    pub fn proper_superset(&self, other: &Self) -> bool {
        other.proper_subset(self)
    }

    /// Checks whether the two maps share at least one point.
    pub fn overlap(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() || self.level != other.level {
            return false;
        }
        !merge(&self.roots, &other.roots, self.level, MergeOp::Intersect).is_empty()
    }

    /// Checks whether the two maps share no point.
    pub fn disjoint(&self, other: &Self) -> bool {
        !self.overlap(other)
    }

    /// Inserts a free-form `(span, child)` pair: the region set
    /// `span x child` is unioned into the map. An empty span is a no-op; on
    /// a level mismatch the map stays unchanged (the checked variant reports
    /// the mismatch instead).
    ///
    /// # Example
    /// ```
    /// use netrange::{Interval, RangeMap};
    ///
    /// let mut m = RangeMap::from(Interval::new(4, 0));
    /// m.add_node(Interval::new(10, 3), RangeMap::new());
    /// assert_eq!(m.to_string(), "[10:0]");
    /// ```
    pub fn add_node(&mut self, span: Interval<T>, child: RangeMap<T>) {
        if span.is_empty() {
            return;
        }
        let addition = RangeMap {
            level: child.level + 1,
            roots: normalize(vec![Node {
                span,
                children: child.roots,
            }]),
        };
        debug_assert!(addition.is_valid());
        if self.is_empty() {
            *self = addition;
        } else if addition.level == self.level {
            *self = self.union(&addition);
        }
    }

    /// Checked [`add_node`](RangeMap::add_node); fails with
    /// [`RangeError::InvalidRange`] on an invalid span and
    /// [`RangeError::NonComparable`] on a level mismatch.
    pub fn try_add_node(&mut self, span: Interval<T>, child: RangeMap<T>) -> Result<(), RangeError> {
        if !span.is_valid() {
            return Err(RangeError::InvalidRange);
        }
        if !self.is_empty() && child.level + 1 != self.level {
            return Err(RangeError::NonComparable {
                lhs: self.level,
                rhs: child.level + 1,
            });
        }
        self.add_node(span, child);
        Ok(())
    }

    fn check_comparable(&self, other: &Self) -> Result<(), RangeError> {
        if !self.is_empty() && !other.is_empty() && self.level != other.level {
            Err(RangeError::NonComparable {
                lhs: self.level,
                rhs: other.level,
            })
        } else {
            Ok(())
        }
    }

    /// Checked [`union`](RangeMap::union); fails with
    /// [`RangeError::NonComparable`] when both maps are non-empty and their
    /// dimensions differ.
    pub fn try_union(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_comparable(other)?;
        Ok(self.union(other))
    }

    /// Checked [`intersection`](RangeMap::intersection).
    pub fn try_intersection(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_comparable(other)?;
        Ok(self.intersection(other))
    }

    /// Checked [`complement`](RangeMap::complement).
    pub fn try_complement(&self, other: &Self) -> Result<Self, RangeError> {
        self.check_comparable(other)?;
        Ok(self.complement(other))
    }

    /// Checked [`subset`](RangeMap::subset).
    pub fn try_subset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.subset(other))
    }

    /// Checked [`proper_subset`](RangeMap::proper_subset).
    pub fn try_proper_subset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.proper_subset(other))
    }

    /// Checked [`superset`](RangeMap::superset).
    pub fn try_superset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.superset(other))
    }

    /// Checked [`proper_superset`](RangeMap::proper_superset).
    pub fn try_proper_superset(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.proper_superset(other))
    }

    /// Checked [`overlap`](RangeMap::overlap).
    pub fn try_overlap(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.overlap(other))
    }

    /// Checked [`disjoint`](RangeMap::disjoint).
    pub fn try_disjoint(&self, other: &Self) -> Result<bool, RangeError> {
        self.check_comparable(other)?;
        Ok(self.disjoint(other))
    }
}

impl<T: Step> Default for RangeMap<T> {
    fn default() -> Self {
        RangeMap::new()
    }
}

impl<T: Step> From<Interval<T>> for RangeMap<T> {
    fn from(interval: Interval<T>) -> Self {
        if interval.is_empty() {
            return RangeMap::new();
        }
        RangeMap {
            level: 1,
            roots: vec![Node {
                span: interval,
                children: Vec::new(),
            }],
        }
    }
}

impl<T: Step> From<&Region<T>> for RangeMap<T> {
    fn from(region: &Region<T>) -> Self {
        if region.is_empty() {
            return RangeMap::new();
        }
        let mut children = Vec::new();
        for axis in region.iter_axes().rev() {
            children = vec![Node {
                span: *axis,
                children,
            }];
        }
        RangeMap {
            level: region.dimension(),
            roots: children,
        }
    }
}

impl<T: Step> From<Region<T>> for RangeMap<T> {
    fn from(region: Region<T>) -> Self {
        RangeMap::from(&region)
    }
}

impl<T: Step> PartialEq for RangeMap<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.level == other.level && self.roots == other.roots
    }
}

impl<T: Step> Eq for RangeMap<T> {}

fn cmp_lists<T: Step>(lhs: &[Node<T>], rhs: &[Node<T>]) -> Ordering {
    for (a, b) in lhs.iter().zip(rhs) {
        let c = a
            .span
            .cmp(&b.span)
            .then_with(|| cmp_lists(&a.children, &b.children));
        if c != Ordering::Equal {
            return c;
        }
    }
    lhs.len().cmp(&rhs.len())
}

impl<T: Step> PartialOrd for RangeMap<T> {
    /// Lexicographic order over the normalized forest; the empty map is the
    /// bottom element and maps of different dimension are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => {
                if self.level != other.level {
                    None
                } else {
                    Some(cmp_lists(&self.roots, &other.roots))
                }
            }
        }
    }
}

impl<T: Step> BitOr for &RangeMap<T> {
    type Output = RangeMap<T>;

    fn bitor(self, rhs: Self) -> RangeMap<T> {
        self.union(rhs)
    }
}

impl<T: Step> BitAnd for &RangeMap<T> {
    type Output = RangeMap<T>;

    fn bitand(self, rhs: Self) -> RangeMap<T> {
        self.intersection(rhs)
    }
}

impl<T: Step> Sub for &RangeMap<T> {
    type Output = RangeMap<T>;

    fn sub(self, rhs: Self) -> RangeMap<T> {
        self.complement(rhs)
    }
}

fn render_node<T: Step + Display>(node: &Node<T>) -> String {
    if node.children.is_empty() {
        node.span.to_string()
    } else {
        format!("{}{}", node.span, render_list(&node.children))
    }
}

fn render_list<T: Step + Display>(nodes: &[Node<T>]) -> String {
    if nodes.len() == 1 {
        render_node(&nodes[0])
    } else {
        format!("{{{}}}", nodes.iter().map(render_node).join(";"))
    }
}

impl<T: Step + Display> Display for RangeMap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[]")
        } else {
            write!(f, "{}", render_list(&self.roots))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use super::{Node, RangeMap};
    use crate::{Interval, RangeError, Region};

    fn interval_map(upper: i32, lower: i32) -> RangeMap<i32> {
        RangeMap::from(Interval::new(upper, lower))
    }

    fn region_map(pairs: &[(i32, i32)]) -> RangeMap<i32> {
        RangeMap::from(Region::from_pairs(pairs.iter().copied()))
    }

    fn collect_points(nodes: &[Node<i32>], prefix: &mut Vec<i32>, out: &mut HashSet<Vec<i32>>) {
        for node in nodes {
            for v in node.span.iter() {
                prefix.push(v);
                if node.children.is_empty() {
                    out.insert(prefix.clone());
                } else {
                    collect_points(&node.children, prefix, out);
                }
                prefix.pop();
            }
        }
    }

    fn points(map: &RangeMap<i32>) -> HashSet<Vec<i32>> {
        let mut out = HashSet::new();
        collect_points(&map.roots, &mut Vec::new(), &mut out);
        out
    }

    /// Builds a map as the union of `regions`; all regions share `dim`.
    fn build(regions: &[Region<i32>]) -> RangeMap<i32> {
        let mut map = RangeMap::new();
        for region in regions {
            map = map.union(&RangeMap::from(region));
        }
        map
    }

    fn arb_region(g: &mut Gen, dim: usize) -> Region<i32> {
        Region::from_intervals((0..dim).map(|_| Interval::arbitrary(g)))
    }

    fn arb_map(g: &mut Gen, dim: usize) -> RangeMap<i32> {
        let n = usize::arbitrary(g) % 4;
        let regions: Vec<_> = (0..n).map(|_| arb_region(g, dim)).collect();
        build(&regions)
    }

    /// Two maps of the same dimension (1 or 2), built from a few small
    /// regions each so brute-force point enumeration stays cheap.
    #[derive(Debug, Clone)]
    struct MapPair(RangeMap<i32>, RangeMap<i32>);

    impl Arbitrary for MapPair {
        fn arbitrary(g: &mut Gen) -> Self {
            let dim = 1 + usize::arbitrary(g) % 2;
            let a = arb_map(g, dim);
            let b = arb_map(g, dim);
            MapPair(a, b)
        }
    }

    #[test]
    fn maps_from_intervals_and_regions() {
        assert_eq!(interval_map(12, -5).to_string(), "[12:-5]");
        assert_eq!(region_map(&[(3, 0), (12, -5)]).to_string(), "[3:0][12:-5]");
        assert_eq!(RangeMap::<i32>::new().to_string(), "[]");
        assert_eq!(RangeMap::from(Interval::<i32>::empty()).to_string(), "[]");
        assert_eq!(region_map(&[(3, 0), (12, -5)]).dimension(), 2);
        assert_eq!(region_map(&[(3, 0), (12, -5)]).size(), 72);
        assert!(region_map(&[(3, 0), (12, -5)]).is_valid());
    }

    #[test]
    fn one_dimensional_difference_splits_into_two_nodes() {
        let a = interval_map(10, 0);
        let b = interval_map(3, 2);
        let d = a.complement(&b);
        assert_eq!(d.to_string(), "{[10:4];[1:0]}");
        assert_eq!(a.intersection(&b).to_string(), "[3:2]");
        assert_eq!(d.size(), 9);
        // the pieces restore the original
        assert_eq!(d.union(&b), a);
    }

    #[test]
    fn two_dimensional_difference_factors_per_axis() {
        let a = region_map(&[(3, 0), (12, -5)]);
        let c = region_map(&[(2, 2), (-4, -4)]);
        let d = a.complement(&c);
        assert_eq!(d.to_string(), "{[3][12:-5];[2]{[12:-3];[-5]};[1:0][12:-5]}");
        assert_eq!(d.size(), 72 - 1);
        assert!(d.subset(&a));
        assert!(!a.subset(&d));
        assert_eq!(d.union(&c), a);
    }

    #[test]
    fn union_coalesces_abutting_spans_with_equal_children() {
        assert_eq!(
            interval_map(10, 5).union(&interval_map(4, 0)).to_string(),
            "[10:0]"
        );
        assert_eq!(
            interval_map(10, 6).union(&interval_map(4, 0)).to_string(),
            "{[10:6];[4:0]}"
        );
        // equal children across two dimensions coalesce as well
        let left = region_map(&[(3, 2), (7, 0)]);
        let right = region_map(&[(1, 0), (7, 0)]);
        assert_eq!(left.union(&right).to_string(), "[3:0][7:0]");
        // different children do not
        let narrow = region_map(&[(1, 0), (6, 0)]);
        assert_eq!(
            left.union(&narrow).to_string(),
            "{[3:2][7:0];[1:0][6:0]}"
        );
    }

    #[test]
    fn operations_with_the_empty_map_are_trivial() {
        let a = region_map(&[(3, 0), (12, -5)]);
        let empty = RangeMap::<i32>::new();
        assert_eq!(a.union(&empty), a);
        assert_eq!(empty.union(&a), a);
        assert!(a.intersection(&empty).is_empty());
        assert!(empty.intersection(&a).is_empty());
        assert_eq!(a.complement(&empty), a);
        assert!(empty.complement(&a).is_empty());
        assert!(empty.subset(&a));
        assert!(empty.proper_subset(&a));
        assert!(!a.subset(&empty));
        assert!(empty.subset(&empty));
        assert!(!empty.proper_subset(&empty));
        assert!(a.superset(&empty));
        assert!(a.proper_superset(&empty));
        assert!(a.disjoint(&empty));
    }

    #[test]
    fn dimension_mismatch_is_not_comparable() {
        let a = region_map(&[(3, 0), (12, -5)]);
        let b = region_map(&[(3, 0)]);
        assert!(!a.subset(&b));
        assert!(a.union(&b).is_empty());
        assert!(a.disjoint(&b));
        assert_eq!(
            a.try_subset(&b),
            Err(RangeError::NonComparable { lhs: 2, rhs: 1 })
        );
        assert_eq!(
            a.try_union(&b),
            Err(RangeError::NonComparable { lhs: 2, rhs: 1 })
        );
        assert_eq!(a.try_union(&RangeMap::new()), Ok(a.clone()));
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn add_node_inserts_and_renormalizes() {
        let mut m = interval_map(4, 0);
        m.add_node(Interval::new(10, 3), RangeMap::new());
        assert_eq!(m.to_string(), "[10:0]");

        let mut m = RangeMap::new();
        m.add_node(Interval::new(3, 0), RangeMap::from(Interval::new(12, -5)));
        assert_eq!(m.to_string(), "[3:0][12:-5]");
        assert_eq!(m.dimension(), 2);

        // empty span is a no-op
        let before = m.clone();
        m.add_node(Interval::empty(), RangeMap::new());
        assert_eq!(m, before);

        // level mismatch leaves the total surface unchanged, checked errors
        let mut m = interval_map(4, 0);
        let deep = RangeMap::from(Interval::new(2, 0));
        assert_eq!(
            m.try_add_node(Interval::new(9, 9), deep.clone()),
            Err(RangeError::NonComparable { lhs: 1, rhs: 2 })
        );
        assert_eq!(
            m.try_add_node(Interval::new(0, 9), RangeMap::new()),
            Err(RangeError::InvalidRange)
        );
        m.add_node(Interval::new(9, 9), deep);
        assert_eq!(m.to_string(), "[4:0]");
    }

    #[test]
    fn membership_lookup() {
        let d = region_map(&[(3, 0), (12, -5)]).complement(&region_map(&[(2, 2), (-4, -4)]));
        assert!(d.contains(&[3, -4]));
        assert!(d.contains(&[2, -5]));
        assert!(d.contains(&[2, 12]));
        assert!(!d.contains(&[2, -4]));
        assert!(!d.contains(&[4, 0]));
        assert!(!d.contains(&[2]));
        assert!(!RangeMap::<i32>::new().contains(&[]));
    }

    #[test]
    fn nested_braces_render_only_around_sibling_lists() {
        let a = region_map(&[(5, 0), (3, 0)]);
        let hole = region_map(&[(3, 2), (1, 1)]);
        let d = a.complement(&hole);
        assert_eq!(d.to_string(), "{[5:4][3:0];[3:2]{[3:2];[0]};[1:0][3:0]}");
        assert_eq!(points(&d).len(), 6 * 4 - 2);
    }

    #[quickcheck]
    fn union_matches_point_union(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        let u = a.union(&b);
        let expected: HashSet<_> = points(&a).union(&points(&b)).cloned().collect();
        points(&u) == expected
    }

    #[quickcheck]
    fn intersection_matches_point_intersection(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        let x = a.intersection(&b);
        let expected: HashSet<_> = points(&a).intersection(&points(&b)).cloned().collect();
        points(&x) == expected
    }

    #[quickcheck]
    fn complement_matches_point_difference(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        let d = a.complement(&b);
        let expected: HashSet<_> = points(&a).difference(&points(&b)).cloned().collect();
        points(&d) == expected
    }

    #[quickcheck]
    fn results_stay_in_normal_form(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        a.union(&b).is_valid()
            && a.intersection(&b).is_valid()
            && a.complement(&b).is_valid()
    }

    #[quickcheck]
    fn union_and_intersection_are_idempotent(p: MapPair) -> bool {
        let MapPair(a, _) = p;
        a.union(&a) == a && (a.is_empty() || a.intersection(&a) == a)
    }

    #[quickcheck]
    fn double_complement_is_intersection(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        a.complement(&a.complement(&b)) == a.intersection(&b)
    }

    #[quickcheck]
    fn cardinality_is_modular(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        a.union(&b).size() + a.intersection(&b).size() == a.size() + b.size()
    }

    #[quickcheck]
    fn subset_monotonicity(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        let big = a.union(&b);
        // a is always a subset of a ∪ b, and then absorption holds
        a.subset(&big) && a.union(&big) == big && a.intersection(&big) == a
    }

    #[quickcheck]
    fn subset_agrees_with_membership(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        a.subset(&b) == points(&a).is_subset(&points(&b))
    }

    #[quickcheck]
    fn normal_form_is_construction_order_independent(p: MapPair) {
        let MapPair(a, b) = p;
        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union(&b).to_string(), b.union(&a).to_string());
    }

    #[quickcheck]
    fn order_is_consistent_with_equality(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        match a.partial_cmp(&b) {
            Some(std::cmp::Ordering::Equal) => a == b,
            Some(_) => a != b,
            None => false, // same-dimension maps always order
        }
    }

    #[quickcheck]
    fn overlap_agrees_with_membership(p: MapPair) -> bool {
        let MapPair(a, b) = p;
        a.overlap(&b) == !points(&a).is_disjoint(&points(&b))
    }
}
