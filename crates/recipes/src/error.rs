//! Error types for recipe configuration, rendering and export.

use modscale::ScaleError;
use thiserror::Error;

/// Errors that can occur while configuring or exporting recipes.
///
/// # Examples
///
/// ```rust
/// use recipes::{Measure, RecipeError};
///
/// let err = "space:huge".parse::<Measure>().unwrap_err();
/// assert!(matches!(err, RecipeError::InvalidMeasure(_)));
/// ```
#[derive(Error, Debug)]
pub enum RecipeError {
    /// No recipe is registered under this slug.
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    /// A measure string was neither a length, a token, a keyword nor a
    /// function expression.
    #[error("Invalid measure: {0}")]
    InvalidMeasure(String),

    /// A recipe's options are inconsistent (e.g. ragged grid areas).
    #[error("Invalid {recipe} options: {reason}")]
    InvalidOptions {
        recipe: &'static str,
        reason: String,
    },

    /// The modular system configuration was rejected.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// Writing an export bundle failed.
    #[error("I/O error writing export")]
    Io(#[from] std::io::Error),

    /// Serializing the JSON export failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}
