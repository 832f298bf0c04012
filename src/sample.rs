//! Random member extraction, for test-vector generation.
//!
//! Netlist checks often want *some* coordinate out of a computed region set,
//! e.g. to probe a bit the difference of two selects still covers. The
//! samplers here draw one: a node is chosen uniformly at each level and a
//! coordinate uniformly within its span, so the distribution is best-effort,
//! weighted by node rather than by cardinality.
//!
//! Only available with the `sample` feature (enabled by default).

use rand::distr::uniform::SampleUniform;
use rand::Rng;

use crate::{Interval, RangeMap, Step};

impl<T> Interval<T>
where
    T: Step + SampleUniform,
{
    /// Draws a uniformly distributed member of the interval, or `None` if it
    /// is empty.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let range = Interval::new(12, -5);
    /// let v = range.sample(&mut rand::rng()).unwrap();
    /// assert!(range.contains(v));
    /// assert_eq!(Interval::<i32>::empty().sample(&mut rand::rng()), None);
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(rng.random_range(self.lower()..=self.upper()))
        }
    }
}

impl<T> RangeMap<T>
where
    T: Step + SampleUniform,
{
    /// Draws a member coordinate of the map (one value per axis, outermost
    /// first), or `None` if the map is empty.
    ///
    /// # Example
    /// ```
    /// use netrange::{Interval, RangeMap};
    ///
    /// let holed = RangeMap::from(Interval::new(10, 0))
    ///     .complement(&RangeMap::from(Interval::new(3, 2)));
    /// let point = holed.sample(&mut rand::rng()).unwrap();
    /// assert!(holed.contains(&point));
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<T>> {
        if self.is_empty() {
            return None;
        }
        let mut point = Vec::with_capacity(self.dimension());
        let mut nodes = self.roots.as_slice();
        while !nodes.is_empty() {
            let node = &nodes[rng.random_range(0..nodes.len())];
            point.push(node.span.sample(rng)?);
            nodes = &node.children;
        }
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Interval, RangeMap, Region};

    #[test]
    fn interval_samples_stay_in_bounds() {
        let range = Interval::new(12, -5);
        let mut rng = rand::rng();
        for _ in 0..256 {
            let v = range.sample(&mut rng).unwrap();
            assert!(range.contains(v));
        }
        assert_eq!(Interval::<i32>::empty().sample(&mut rng), None);
        assert_eq!(Interval::singleton(7).sample(&mut rng), Some(7));
    }

    #[test]
    fn map_samples_are_members() {
        let map = RangeMap::from(Region::from_pairs([(3, 0), (12, -5)]))
            .complement(&RangeMap::from(Region::from_pairs([(2, 2), (-4, -4)])));
        let mut rng = rand::rng();
        for _ in 0..256 {
            let point = map.sample(&mut rng).unwrap();
            assert_eq!(point.len(), 2);
            assert!(map.contains(&point));
        }
        assert_eq!(RangeMap::<i32>::new().sample(&mut rng), None);
    }

    #[test]
    fn every_piece_is_eventually_sampled() {
        let map = RangeMap::from(Interval::new(10, 6)).union(&RangeMap::from(Interval::new(4, 0)));
        let mut rng = rand::rng();
        let mut seen_high = false;
        let mut seen_low = false;
        for _ in 0..512 {
            let point = map.sample(&mut rng).unwrap();
            if point[0] >= 6 {
                seen_high = true;
            } else {
                seen_low = true;
            }
        }
        assert!(seen_high && seen_low);
    }
}
