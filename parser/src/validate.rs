//! Four-pass validation of numeral text.
//!
//! The passes run in a fixed order and the first violation aborts the whole
//! pipeline; no errors are accumulated. Each pass is public so it can be
//! exercised on its own:
//!
//! 1. [`scan_symbols`] - every character must be a recognized symbol
//! 2. [`check_pair_order`] - subtractive pairs must be well-formed
//! 3. [`check_run_length`] - at most one reduced digit before a maximal run
//! 4. [`check_subtractive_uniqueness`] - no symbol subtracts twice
//!
//! Passes 2-4 take the digit sequence produced by pass 1 as their
//! precondition.

use crate::{ParseError, ParseResult};
use numerus_core::magnitude;
use std::collections::HashSet;

/// A single validated character paired with its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit {
    pub ch: char,
    pub value: i32,
}

/// True when `left` acts as a subtrahend for `right`. Shared by the pair
/// checks and the parser scan so the notion cannot drift between passes.
pub fn is_subtractive(left: i32, right: i32) -> bool {
    left < right
}

/// Pass 1: resolve every character through the symbol table.
///
/// The first unrecognized character wins; the error reports the character
/// and its 0-based index.
pub fn scan_symbols(input: &str) -> ParseResult<Vec<Digit>> {
    input
        .chars()
        .enumerate()
        .map(|(index, ch)| match magnitude(ch) {
            Some(value) => Ok(Digit { ch, value }),
            None => Err(ParseError::invalid_symbol(ch, index)),
        })
        .collect()
}

/// Pass 2: reject malformed subtractive pairs.
///
/// For adjacent digits where the left is smaller than the right, the pair is
/// illegal when the right is more than ten times the left, or when the left
/// is one of the non-subtractable magnitudes 5, 50, 500. The zero symbol `N`
/// is exempt; it can only legally stand alone and is caught elsewhere.
pub fn check_pair_order(digits: &[Digit], input: &str) -> ParseResult<()> {
    for (index, pair) in digits.windows(2).enumerate() {
        let (left, right) = (pair[0], pair[1]);
        if left.value != 0
            && is_subtractive(left.value, right.value)
            && (right.value / left.value > 10 || matches!(left.value, 5 | 50 | 500))
        {
            return Err(ParseError::invalid_pair_order(
                left.ch, right.ch, index, input,
            ));
        }
    }
    Ok(())
}

/// Pass 3: reject more than one reduced digit before a maximal run.
///
/// Scans right to left tracking the largest magnitude seen so far. A digit
/// smaller than that maximum must be immediately adjacent to it, may occur at
/// most once, and may not follow a repeat of the maximum. Rejects forms like
/// "IIX", "VIX" and "IXXC". The error cites the character immediately to the
/// right of the offending digit.
pub fn check_run_length(digits: &[Digit]) -> ParseResult<()> {
    let mut max_digit = 0;
    let mut was_less = false;
    let mut was_max = false;

    for (pos, digit) in digits.iter().enumerate().rev() {
        if digit.value < max_digit {
            if was_less || was_max {
                return Err(ParseError::invalid_run(digits[pos + 1].ch));
            }
            was_less = true;
        } else if digit.value == max_digit {
            was_max = true;
            was_less = false;
        } else {
            max_digit = digit.value;
            was_less = false;
            was_max = false;
        }
    }
    Ok(())
}

/// Pass 4: reject a symbol used as a subtrahend more than once.
///
/// "IXIV" fails here: `I` subtracts at both occurrences.
pub fn check_subtractive_uniqueness(digits: &[Digit]) -> ParseResult<()> {
    let mut seen = HashSet::new();
    for pair in digits.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if is_subtractive(left.value, right.value) && !seen.insert(left.ch) {
            return Err(ParseError::duplicate_subtractive(left.ch));
        }
    }
    Ok(())
}

/// Run all four passes over `input`.
pub fn validate(input: &str) -> ParseResult<()> {
    let digits = scan_symbols(input)?;
    check_pair_order(&digits, input)?;
    check_run_length(&digits)?;
    check_subtractive_uniqueness(&digits)?;
    Ok(())
}
