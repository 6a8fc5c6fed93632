//! Numerus Core Types
//!
//! This crate provides the foundational pieces of the numerus system:
//! - The symbol table mapping numeral characters to magnitudes
//! - The immutable `Numeral` value type and its arithmetic
//! - The canonical greedy formatter
//! - Core error types

mod error;
mod format;
mod symbol;
mod value;

pub use error::*;
pub use format::*;
pub use symbol::*;
pub use value::*;
