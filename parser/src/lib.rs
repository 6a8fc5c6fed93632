//! Numerus Parser
//!
//! This crate turns numeral text into [`numerus_core::Numeral`] values:
//! - Four-pass validation (symbols, pair order, run length, subtractive
//!   uniqueness) with a distinct error per pass
//! - Right-to-left accumulation parsing
//! - Text arithmetic (`plus_text`) over the full pipeline

mod error;
mod ext;
mod parse;
mod validate;

pub use error::*;
pub use ext::*;
pub use parse::*;
pub use validate::*;
