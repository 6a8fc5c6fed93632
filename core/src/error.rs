//! Core error types for numerus.

use thiserror::Error;

/// A symbol lookup was given text that is not a recognized numeral digit.
///
/// The message names the offending text, the operation and the value type;
/// callers assert on those substrings, so the format is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("digit_value: Numeral has invalid value of {digit}")]
pub struct SymbolError {
    /// The text that failed to resolve.
    pub digit: String,
}

impl SymbolError {
    pub fn new(digit: impl Into<String>) -> Self {
        Self {
            digit: digit.into(),
        }
    }
}

/// Result type for symbol lookups.
pub type SymbolResult<T> = Result<T, SymbolError>;

/// Errors that can occur when formatting a value as numeral text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Negative values have no numeral representation.
    #[error("to_roman: cannot format negative value {0}")]
    NegativeValue(i32),
}

/// Result type for formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;
