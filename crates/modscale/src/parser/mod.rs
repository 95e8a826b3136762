//! nom parsers for the values this crate prints.
//!
//! - [`units`]: numbers, unit suffixes and lengths (`16px`, `1.25rem`, `50%`)

pub mod units;

pub use units::{parse_length, parse_number, parse_size_unit, parse_unit};
