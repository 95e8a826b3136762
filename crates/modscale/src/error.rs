//! Error types for scale lookup, parsing and validation.

use thiserror::Error;

/// Errors raised by the scale generator's fallible entry points.
///
/// Generation itself never fails; these come from catalog lookups,
/// strict unit/length parsing and [`ModularSystemConfig::validate`].
///
/// [`ModularSystemConfig::validate`]: crate::ModularSystemConfig::validate
///
/// # Examples
///
/// ```rust
/// use modscale::{ModularScale, ScaleError};
///
/// let err = ModularScale::lookup("Tritone").unwrap_err();
/// assert!(matches!(err, ScaleError::UnknownScale(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// The name matched no entry in the ratio catalog.
    #[error("Unknown modular scale: {0}")]
    UnknownScale(String),

    /// A unit string was not one of `px`, `rem` or `em`.
    #[error("Unknown size unit: {0}")]
    InvalidUnit(String),

    /// The configuration would produce a degenerate scale.
    #[error("Invalid modular system configuration: {0}")]
    InvalidConfig(String),

    /// A length could not be parsed.
    #[error("Length syntax error: {0}")]
    InvalidSyntax(String),
}
