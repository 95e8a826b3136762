//! # modscale - Modular Scale Generator
//!
//! Derives typographic and spacing scales from a base size and a ratio.
//!
//! A modular scale is a geometric progression: every step multiplies the
//! previous one by a constant ratio, so the sizes stay proportional no matter
//! how large the base is. This crate provides:
//!
//! - **Catalog**: the twelve musical-interval ratios in [`ModularScale`]
//! - **Enumeration**: [`generate_scale`] produces the raw progression
//! - **Formatting**: [`format_value`] renders a size as `px`, `rem` or `em`
//! - **Size sets**: [`generate_sizes_from_modular_system`] labels font and
//!   spacing values (`xs`, `sm`, `base`, ...)
//! - **Parsing**: [`parser::units`] reads CSS lengths back into [`Length`]
//!
//! ## Quick Start
//!
//! ```rust
//! use modscale::{ModularScale, ModularSystemConfig, SizeUnit, generate_sizes_from_modular_system};
//!
//! let config = ModularSystemConfig::default()
//!     .with_font_scale(ModularScale::MAJOR_THIRD)
//!     .with_font_unit(SizeUnit::Px);
//!
//! let sizes = generate_sizes_from_modular_system(&config);
//! assert_eq!(sizes.font_sizes.get("base"), Some("16px"));
//! assert_eq!(sizes.font_sizes.get("lg"), Some("20px"));
//! ```
//!
//! ## Label Alignment
//!
//! Font sizes are enumerated two steps below the base, so the label list
//! `xs, sm, base, ...` puts `base` on the `ratio^0` term. Spacing starts at
//! the base, so `xs` is the spacing base itself.
//!
//! ## Modules
//!
//! - [`types`]: scale catalog, units, lengths and the system configuration
//! - [`generate`]: enumeration, formatting and labelled size sets
//! - [`parser`]: nom parsers for lengths and units
//! - [`error`]: error type for lookups, parsing and validation

pub mod error;
pub mod generate;
pub mod parser;
pub mod types;

pub use error::ScaleError;
pub use generate::{
    Direction, FONT_LABELS, GeneratedSizes, ROOT_FONT_SIZE, SPACING_LABELS, SizeMap,
    format_value, generate_scale, generate_sizes_from_modular_system,
};
pub use types::{Length, ModularScale, ModularSystemConfig, SizeUnit, Unit, format_number};
