//! Parsers for the textual range syntax.
//!
//! The grammar matches the stream-out format of the algebra types:
//!
//! ```text
//! range  := '[' (bound (':' bound)?)? ']'
//! region := range+
//! signal := name region?
//! ```
//!
//! `[12:-5]` is an [`Interval`], `[3:0][12:-5]` a two-dimensional
//! [`Region`], and `data[3:0][12:-5]` a signal reference that
//! [`parse_signal`] splits into its name and region part. Bounds are parsed
//! with the scalar domain's `FromStr`; malformed input is reported as a
//! [`ParseError`] carrying the offending position.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::{Interval, Region, Step};

/// The ways a textual range expression can be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended before the range expression was complete.
    UnexpectedEnd,
    /// An unexpected character at the given byte offset.
    UnexpectedChar(char, usize),
    /// A bound token the scalar domain could not parse.
    InvalidBound(String),
    /// A signal reference without a name in front of the ranges.
    EmptySignalName,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEnd => write!(f, "unexpected end of range expression"),
            ParseError::UnexpectedChar(c, at) => {
                write!(f, "unexpected character '{}' at byte {}", c, at)
            }
            ParseError::InvalidBound(token) => write!(f, "invalid range bound '{}'", token),
            ParseError::EmptySignalName => write!(f, "signal reference has no name"),
        }
    }
}

impl Error for ParseError {}

fn parse_bound<T: FromStr>(token: &str) -> Result<T, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidBound(token.to_string()))
}

/// Parses one `range` production starting at byte `start`; returns the
/// interval and the offset just past the closing bracket.
fn parse_range_at<T>(s: &str, start: usize) -> Result<(Interval<T>, usize), ParseError>
where
    T: Step + FromStr,
{
    let rest = &s[start..];
    match rest.chars().next() {
        None => return Err(ParseError::UnexpectedEnd),
        Some('[') => {}
        Some(c) => return Err(ParseError::UnexpectedChar(c, start)),
    }
    let close = match rest.find(']') {
        Some(i) => start + i,
        None => return Err(ParseError::UnexpectedEnd),
    };
    let body = &s[start + 1..close];
    let interval = if body.is_empty() {
        Interval::empty()
    } else if let Some(colon) = body.find(':') {
        let upper = parse_bound(&body[..colon])?;
        let lower = parse_bound(&body[colon + 1..])?;
        Interval::new(upper, lower)
    } else {
        Interval::singleton(parse_bound(body)?)
    };
    Ok((interval, close + 1))
}

/// Parses a `region` production starting at byte `start` and running to the
/// end of the input; at least one range is required.
fn parse_region_at<T>(s: &str, start: usize) -> Result<Region<T>, ParseError>
where
    T: Step + FromStr,
{
    if start >= s.len() {
        return Err(ParseError::UnexpectedEnd);
    }
    let mut axes = Vec::new();
    let mut pos = start;
    while pos < s.len() {
        let (interval, next) = parse_range_at(s, pos)?;
        axes.push(interval);
        pos = next;
    }
    Ok(Region::from_intervals(axes))
}

impl<T> FromStr for Interval<T>
where
    T: Step + FromStr,
{
    type Err = ParseError;

    /// Parses a single range.
    ///
    /// # Example
    /// ```
    /// use netrange::Interval;
    ///
    /// let r: Interval<i32> = "[12:-5]".parse().unwrap();
    /// assert_eq!(r, Interval::new(12, -5));
    /// let bit: Interval<i32> = "[-3]".parse().unwrap();
    /// assert_eq!(bit, Interval::singleton(-3));
    /// let none: Interval<i32> = "[]".parse().unwrap();
    /// assert!(none.is_empty());
    /// ```
    fn from_str(s: &str) -> Result<Self, ParseError> {
        let (interval, end) = parse_range_at(s, 0)?;
        if end != s.len() {
            let c = s[end..].chars().next().expect("offset below input length");
            return Err(ParseError::UnexpectedChar(c, end));
        }
        Ok(interval)
    }
}

impl<T> FromStr for Region<T>
where
    T: Step + FromStr,
{
    type Err = ParseError;

    /// Parses a concatenation of ranges, one per axis.
    ///
    /// # Example
    /// ```
    /// use netrange::Region;
    ///
    /// let r: Region<i32> = "[3:0][12:-5]".parse().unwrap();
    /// assert_eq!(r, Region::from_pairs([(3, 0), (12, -5)]));
    /// ```
    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse_region_at(s, 0)
    }
}

/// Splits a signal reference such as `data[3:0][12:-5]` into its name and
/// range part. A reference without ranges yields the zero-dimensional
/// region.
///
/// # Example
/// ```
/// use netrange::{parse_signal, Region};
///
/// let (name, range) = parse_signal::<i32>("data[3:0][12:-5]").unwrap();
/// assert_eq!(name, "data");
/// assert_eq!(range, Region::from_pairs([(3, 0), (12, -5)]));
///
/// let (name, range) = parse_signal::<i32>("clk").unwrap();
/// assert_eq!(name, "clk");
/// assert_eq!(range.dimension(), 0);
/// ```
pub fn parse_signal<T>(s: &str) -> Result<(String, Region<T>), ParseError>
where
    T: Step + FromStr,
{
    let bracket = s.find('[').unwrap_or(s.len());
    let name = &s[..bracket];
    if name.is_empty() {
        return Err(ParseError::EmptySignalName);
    }
    let region = if bracket == s.len() {
        Region::new()
    } else {
        parse_region_at(s, bracket)?
    };
    Ok((name.to_string(), region))
}
