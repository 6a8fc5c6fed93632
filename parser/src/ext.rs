//! Text arithmetic over the full parse/format pipeline.

use crate::{parse, NumeralError};
use numerus_core::Numeral;

/// Arithmetic between a [`Numeral`] and numeral text.
///
/// Value-to-value arithmetic lives on `Numeral` itself; this trait covers the
/// operations that need the parser and formatter on both sides.
pub trait NumeralExt {
    /// Parse `other`, add it, and return the canonical text of the result.
    ///
    /// The returned string is always in canonical greedy form, even when
    /// `other` was an accepted additive spelling. Validation errors from
    /// `other` and formatting errors from a negative result both surface.
    fn plus_text(&self, other: &str) -> Result<String, NumeralError>;
}

impl NumeralExt for Numeral {
    fn plus_text(&self, other: &str) -> Result<String, NumeralError> {
        let parsed = parse(other)?;
        let result = self.plus(parsed);
        Ok(result.to_roman()?)
    }
}
