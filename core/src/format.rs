//! Canonical numeral formatting.
//!
//! The formatter is a greedy descent over a fixed table of magnitudes that
//! covers the elementary symbols and the six standard subtractive shorthands.
//! It always emits the canonical form, even for values the parser would also
//! accept in additive spellings ("IIII", "MC", ...).

use crate::{FormatError, FormatResult};

/// Magnitude/text pairs in descending order. The greedy scan always
/// terminates because 1 is in the table.
const PARTS: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Format a value as canonical numeral text.
///
/// Zero formats as `"N"`. Negative values fail with
/// [`FormatError::NegativeValue`]; there is no sign convention to guess.
pub fn to_roman(value: i32) -> FormatResult<String> {
    if value < 0 {
        return Err(FormatError::NegativeValue(value));
    }
    if value == 0 {
        return Ok("N".to_string());
    }

    let mut remaining = value;
    let mut out = String::new();
    while remaining > 0 {
        for (magnitude, text) in PARTS {
            if remaining >= magnitude {
                remaining -= magnitude;
                out.push_str(text);
                break;
            }
        }
    }
    Ok(out)
}
