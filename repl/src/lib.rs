//! Numerus REPL
//!
//! Interactive evaluator for numeral text:
//! - A numeral prints its integer value
//! - `<numeral> + <numeral>` prints the canonical sum
//! - A decimal integer prints its canonical numeral

mod repl;

pub use repl::Repl;
