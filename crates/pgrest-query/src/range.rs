//! Two-bound payloads for the range operators.
//!
//! The range operators (`sl`, `sr`, `nxl`, `nxr`, `adj`) take a pair of
//! integer bounds and render them as `(low,high)` on the wire.

use std::fmt;
use std::ops::Range;

use crate::error::QueryError;

/// The payload of a range operator.
///
/// Infallibly built from a `(low, high)` tuple or a `low..high` range;
/// fallibly from a slice or vector, which must hold exactly two bounds.
///
/// # Examples
///
/// ```
/// use pgrest_query::FilterRange;
///
/// assert_eq!(FilterRange::from((1, 10)).to_string(), "(1,10)");
/// assert_eq!(FilterRange::from(1..10).to_string(), "(1,10)");
/// assert!(FilterRange::try_from(vec![1, 2, 3]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterRange {
    /// Lower bound.
    pub low: i64,
    /// Upper bound.
    pub high: i64,
}

impl FilterRange {
    /// Create a range from explicit bounds.
    #[must_use]
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }
}

impl fmt::Display for FilterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.low, self.high)
    }
}

impl From<(i64, i64)> for FilterRange {
    fn from((low, high): (i64, i64)) -> Self {
        Self { low, high }
    }
}

impl From<Range<i64>> for FilterRange {
    fn from(range: Range<i64>) -> Self {
        Self {
            low: range.start,
            high: range.end,
        }
    }
}

impl TryFrom<&[i64]> for FilterRange {
    type Error = QueryError;

    fn try_from(bounds: &[i64]) -> Result<Self, Self::Error> {
        match bounds {
            [low, high] => Ok(Self {
                low: *low,
                high: *high,
            }),
            other => Err(QueryError::MalformedRange(other.len())),
        }
    }
}

impl TryFrom<Vec<i64>> for FilterRange {
    type Error = QueryError;

    fn try_from(bounds: Vec<i64>) -> Result<Self, Self::Error> {
        Self::try_from(bounds.as_slice())
    }
}
