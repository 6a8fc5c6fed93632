//! The symbol table: the fixed mapping from numeral characters to magnitudes.
//!
//! Eight symbols are recognized: the seven classical Roman symbols plus `N`
//! for zero. The table is a process-wide constant; lookups are pure.

use crate::{SymbolError, SymbolResult};

/// The magnitude of a single numeral character, or `None` if the character
/// is not a recognized symbol.
pub fn magnitude(c: char) -> Option<i32> {
    match c {
        'N' => Some(0),
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Look up the magnitude of a numeral digit given as text.
///
/// The text must be exactly one recognized symbol; anything else (an unknown
/// character, the empty string, more than one character) fails with
/// [`SymbolError`].
pub fn digit_value(digit: &str) -> SymbolResult<i32> {
    let mut chars = digit.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => magnitude(c).ok_or_else(|| SymbolError::new(digit)),
        _ => Err(SymbolError::new(digit)),
    }
}
