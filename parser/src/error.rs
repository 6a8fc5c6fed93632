//! Parser error types.
//!
//! One variant per validation pass. The Display templates are asserted on by
//! callers and must not change.

use numerus_core::FormatError;
use thiserror::Error;

/// Errors that can occur while validating or parsing numeral text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character is not a recognized numeral symbol.
    #[error("Invalid character '{ch}' at index {index}")]
    InvalidSymbol { ch: char, index: usize },

    /// An illegal subtractive adjacency: the subtrahend is too small for the
    /// symbol it precedes, or is one of the non-subtractable symbols V, L, D.
    #[error("Invalid order '{left}' before '{right}' at index {index} in \"{input}\"")]
    InvalidPairOrder {
        left: char,
        right: char,
        index: usize,
        input: String,
    },

    /// More than one reduced digit precedes a maximal run.
    #[error("Invalid sequence: more than 1 less digit before '{ch}'")]
    InvalidRun { ch: char },

    /// The same symbol is used as a subtrahend twice.
    #[error("Duplicate subtractive digit '{ch}'")]
    DuplicateSubtractive { ch: char },
}

impl ParseError {
    pub fn invalid_symbol(ch: char, index: usize) -> Self {
        Self::InvalidSymbol { ch, index }
    }

    pub fn invalid_pair_order(left: char, right: char, index: usize, input: &str) -> Self {
        Self::InvalidPairOrder {
            left,
            right,
            index,
            input: input.to_string(),
        }
    }

    pub fn invalid_run(ch: char) -> Self {
        Self::InvalidRun { ch }
    }

    pub fn duplicate_subtractive(ch: char) -> Self {
        Self::DuplicateSubtractive { ch }
    }
}

/// Result type for validation and parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Umbrella error for operations that both parse and format, such as
/// [`crate::NumeralExt::plus_text`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
