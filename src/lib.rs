//! Symbolic manipulation of multi-dimensional signal ranges.
//!
//! In netlist and hardware-description tooling a named signal carries a
//! multi-dimensional bit-range such as `data[3:0][12:-5]`. This crate provides
//! the algebra needed to reason about such regions: containment, overlap,
//! union, difference and canonical partitioning.
//!
//! Three layered types build on each other:
//!
//! - [`Interval`] is a single closed range `[upper:lower]` over a scalar
//!   domain `T`.
//! - [`Region`] is an ordered tuple of intervals, an axis-aligned
//!   hyper-rectangle. Axis 0 is the outermost (leftmost) dimension.
//! - [`RangeMap`] is a finite disjoint union of regions, kept in a canonical
//!   normal form. Results of set operations that a single region cannot
//!   express (for example a difference that punches a hole into one axis)
//!   live here.
//!
//! ```
//! use netrange::{Interval, RangeMap, Region};
//!
//! // A region difference that stays a single hyper-rectangle.
//! let word = Region::from_pairs([(3, 0), (12, -5)]);
//! let low = Region::from_pairs([(3, 0), (12, -3)]);
//! assert_eq!(word.complement(&low).to_string(), "[3:0][-4:-5]");
//!
//! // A difference that does not: the result is a two-node range map.
//! let a = RangeMap::from(Interval::new(10, 0));
//! let b = RangeMap::from(Interval::new(3, 2));
//! assert_eq!((&a - &b).to_string(), "{[10:4];[1:0]}");
//! ```
//!
//! Every operation comes in two flavours: a *total* method that maps
//! ill-conditioned inputs to a documented neutral value (`false`, `true`, or
//! the empty range), and a checked `try_` variant that reports the condition
//! as a [`RangeError`]. Both behave identically on well-formed inputs.

pub mod interval;
pub mod map;
pub mod parse;
pub mod region;
#[cfg(feature = "sample")]
pub mod sample;

pub use interval::Interval;
pub use map::RangeMap;
pub use parse::{parse_signal, ParseError};
pub use region::Region;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, Mul, Sub};

/// A totally ordered additive scalar domain with a uniform step between
/// adjacent values.
///
/// The range algebra is defined over any such domain; all primitive integers
/// implement it with `unit() == 1`. Boundary arithmetic (`upper + unit`,
/// `lower - unit`) goes through [`succ`](Step::succ) and [`pred`](Step::pred),
/// which saturate at the numeric limits of the domain so that walking off the
/// edge of the representable range stays total.
///
/// Continuous domains can hook in by returning `unit() == 0`, in which case
/// "adjacent" degenerates to "touching": the complement of a closed interval
/// produces closed artifacts at the cut points that the caller must
/// reinterpret as open boundaries. The `continuous` cargo feature provides
/// such implementations for `noisy_float`'s ordered reals. Plain `f32`/`f64`
/// do not qualify since they are not totally ordered.
pub trait Step:
    Copy + Ord + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity; the size of an empty range.
    fn zero() -> Self;

    /// The distance between adjacent values; `1` for integers, `0` for
    /// continuous domains.
    fn unit() -> Self;

    /// `self + unit`, saturating at the greatest representable value.
    fn succ(self) -> Self;

    /// `self - unit`, saturating at the least representable value.
    fn pred(self) -> Self;
}

macro_rules! impl_step_for_int {
    ($($t:ty),*) => {$(
        impl Step for $t {
            fn zero() -> Self {
                0
            }
            fn unit() -> Self {
                1
            }
            fn succ(self) -> Self {
                self.saturating_add(1)
            }
            fn pred(self) -> Self {
                self.saturating_sub(1)
            }
        }
    )*};
}

impl_step_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(feature = "continuous")]
mod continuous {
    use super::Step;
    use noisy_float::types::{r32, r64, R32, R64};

    impl Step for R64 {
        fn zero() -> Self {
            r64(0.0)
        }
        fn unit() -> Self {
            r64(0.0)
        }
        fn succ(self) -> Self {
            self
        }
        fn pred(self) -> Self {
            self
        }
    }

    impl Step for R32 {
        fn zero() -> Self {
            r32(0.0)
        }
        fn unit() -> Self {
            r32(0.0)
        }
        fn succ(self) -> Self {
            self
        }
        fn pred(self) -> Self {
            self
        }
    }
}

/// The failure conditions reported by the checked (`try_`) operation surface.
///
/// The total surface maps the same conditions to documented neutral values
/// instead; see the individual operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// An operand is not a valid range (default-constructed, or its bounds
    /// are reversed).
    InvalidRange,
    /// The operands have different dimensions and cannot be compared.
    NonComparable { lhs: usize, rhs: usize },
    /// The result cannot be expressed in a single piece through this entry
    /// point; the caller has to move up to [`RangeMap`](crate::RangeMap).
    NonOperable,
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidRange => write!(f, "operand is not a valid range"),
            RangeError::NonComparable { lhs, rhs } => {
                write!(f, "operands have different dimensions ({} vs {})", lhs, rhs)
            }
            RangeError::NonOperable => {
                write!(f, "result is not expressible as a single range")
            }
        }
    }
}

impl Error for RangeError {}
