//! Closed status code intervals used by the status filters.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A closed interval `[low, high]` of HTTP status codes.
///
/// An interval with `low > high` is empty and contains no status code.
///
/// # Examples
///
/// ```
/// use sigmap_core::StatusRange;
///
/// assert!(StatusRange::SUCCESSFUL.contains(204));
/// assert!(!StatusRange::SUCCESSFUL.contains(301));
/// assert!(StatusRange::from(400_u16..=499).contains(404));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusRange {
    low: u16,
    high: u16,
}

impl StatusRange {
    /// 2xx responses.
    pub const SUCCESSFUL: StatusRange = StatusRange::new(200, 299);
    /// 3xx responses.
    pub const REDIRECT: StatusRange = StatusRange::new(300, 399);
    /// 2xx and 3xx responses.
    pub const SUCCESSFUL_AND_REDIRECT: StatusRange = StatusRange::new(200, 399);

    pub const fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    /// An interval holding exactly one status code.
    pub const fn single(code: u16) -> Self {
        Self::new(code, code)
    }

    pub const fn low(&self) -> u16 {
        self.low
    }

    pub const fn high(&self) -> u16 {
        self.high
    }

    pub const fn contains(&self, status_code: u16) -> bool {
        self.low <= status_code && status_code <= self.high
    }

    pub const fn is_empty(&self) -> bool {
        self.low > self.high
    }
}

impl From<RangeInclusive<u16>> for StatusRange {
    fn from(range: RangeInclusive<u16>) -> Self {
        StatusRange::new(*range.start(), *range.end())
    }
}

impl From<u16> for StatusRange {
    fn from(code: u16) -> Self {
        StatusRange::single(code)
    }
}

impl fmt::Display for StatusRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
