//! Numeral text to value conversion.

use crate::{
    check_pair_order, check_run_length, check_subtractive_uniqueness, is_subtractive,
    scan_symbols, Digit, ParseResult,
};
use numerus_core::Numeral;

/// Parse numeral text into a [`Numeral`].
///
/// Runs the full four-pass validation, then accumulates right to left: a
/// digit adds when it is at least as large as its right neighbor and
/// subtracts otherwise. Repeated equal digits simply add, so additive forms
/// like "IIII" and "MM" parse even though the formatter never emits them.
pub fn parse(input: &str) -> ParseResult<Numeral> {
    let digits = scan_symbols(input)?;
    check_pair_order(&digits, input)?;
    check_run_length(&digits)?;
    check_subtractive_uniqueness(&digits)?;
    Ok(accumulate(&digits))
}

fn accumulate(digits: &[Digit]) -> Numeral {
    let mut value = 0;
    let mut right_digit = 0;
    for digit in digits.iter().rev() {
        if is_subtractive(digit.value, right_digit) {
            value -= digit.value;
        } else {
            value += digit.value;
        }
        right_digit = digit.value;
    }
    Numeral::new(value)
}
