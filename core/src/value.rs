//! The `Numeral` value type.
//!
//! A `Numeral` wraps the integer a numeral string denotes. It is:
//! - Immutable once constructed
//! - Cheap to copy
//! - Unrestricted in range beyond what `i32` supports; arithmetic can
//!   produce negative values even though only values >= 0 can be formatted

use crate::{to_roman, FormatResult};
use std::fmt;

/// An immutable numeral value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Numeral(pub i32);

impl Numeral {
    /// Create a numeral from a raw integer value.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw integer value.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Add another numeral, yielding a new one.
    pub fn plus(self, other: Numeral) -> Numeral {
        Numeral(self.0 + other.0)
    }

    /// The canonical greedy-form text for this value.
    ///
    /// Fails for negative values, which have no numeral representation.
    pub fn to_roman(&self) -> FormatResult<String> {
        to_roman(self.0)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Numeral {
    fn from(value: i32) -> Self {
        Numeral(value)
    }
}

/// Sum any number of numerals. An empty input sums to zero.
pub fn sum<I>(values: I) -> Numeral
where
    I: IntoIterator<Item = Numeral>,
{
    Numeral(values.into_iter().map(|n| n.0).sum())
}
