use std::fmt;

use itertools::Itertools;

use super::{Error, Result};

/// An inclusive range of integers tagged with an additive offset.
///
/// The offset means different things depending on where the range lives:
///
/// * In a [`MappingStage`](super::MappingStage) it is the amount to add to
///   any source value in `[start, end]`.
/// * In a result set it is the amount that *was* added, so `[start, end]`
///   already holds transformed values.
///
/// Construction guarantees `start <= end`, and that both bounds can be
/// shifted by `offset` in either direction without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RangeInterval {
    start: i64,
    end: i64,
    offset: i64,
}

impl RangeInterval {
    pub fn new(start: i64, end: i64, offset: i64) -> Result<Self> {
        if start > end {
            return Err(Error::Inverted { start, end });
        }
        for bound in [start, end] {
            bound.checked_add(offset).ok_or(Error::Overflow)?;
            bound.checked_sub(offset).ok_or(Error::Overflow)?;
        }
        Ok(Self { start, end, offset })
    }

    /// A mapping range from an almanac line: `destination source length`.
    pub fn from_mapping(destination_start: i64, source_start: i64, length: i64) -> Result<Self> {
        let end = last_in_span(source_start, length)?;
        let offset = destination_start
            .checked_sub(source_start)
            .ok_or(Error::Overflow)?;
        Self::new(source_start, end, offset)
    }

    /// A candidate range of `length` values starting at `start`, with no
    /// offset applied yet.
    pub fn from_seed_range(start: i64, length: i64) -> Result<Self> {
        let end = last_in_span(start, length)?;
        Self::new(start, end, 0)
    }

    /// Builds a range whose bounds were derived from an already validated
    /// one.
    #[inline]
    pub(super) fn from_parts(start: i64, end: i64, offset: i64) -> Self {
        debug_assert!(start <= end, "inverted range [{start}, {end}]");
        Self { start, end, offset }
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Number of integers in the range. Wide enough for `[i64::MIN, i64::MAX]`.
    #[inline]
    pub fn len(&self) -> u128 {
        u128::from(self.end.abs_diff(self.start)) + 1
    }

    /// Start of the span this result range was produced from, i.e. before
    /// the offset was added.
    #[inline]
    pub fn source_start(&self) -> i64 {
        self.start - self.offset
    }

    #[inline]
    pub fn source_end(&self) -> i64 {
        self.end - self.offset
    }
}

impl fmt::Display for RangeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]{:+}", self.start, self.end, self.offset)
    }
}

fn last_in_span(start: i64, length: i64) -> Result<i64> {
    if length < 1 {
        return Err(Error::EmptyRange { start, length });
    }
    start.checked_add(length - 1).ok_or(Error::Overflow)
}

/// Reads a flat `start length start length ...` list as seed ranges.
pub fn seed_ranges(values: &[i64]) -> Result<Vec<RangeInterval>> {
    if values.len() % 2 != 0 {
        return Err(Error::UnpairedSeed(values[values.len() - 1]));
    }
    values
        .iter()
        .tuples()
        .map(|(&start, &length)| RangeInterval::from_seed_range(start, length))
        .collect()
}
