//! CSS layout recipes driven by a modular design system.
//!
//! A [`DesignSystem`] turns a [`ModularSystemConfig`](modscale::ModularSystemConfig)
//! into font and spacing tokens. Recipes are small option structs that render
//! a [`StyleSheet`], referring to those tokens through `var(--space-*)` and
//! `var(--text-*)`. The [`export`] module bundles both into files.
//!
//! ```rust
//! use recipes::{DesignSystem, Recipe, RecipeKind, export_css};
//!
//! let system = DesignSystem::default();
//! let stack = RecipeKind::Stack.default_recipe();
//!
//! assert!(stack.css().contains("margin-block-start: var(--space-md);"));
//!
//! let css = export_css(&system, &[stack]).unwrap();
//! assert!(css.starts_with("/* Design tokens */\n:root {"));
//! ```

pub mod error;
pub mod export;
pub mod measure;
pub mod recipes;
pub mod stylesheet;
pub mod system;
pub mod tokens;

pub use error::RecipeError;
pub use export::{BundlePaths, CSS_FILE, JSON_FILE, export_css, export_json, export_stylesheet, write_bundle};
pub use measure::Measure;
pub use recipes::{AnyRecipe, Recipe, RecipeKind, RecipeSet};
pub use stylesheet::{Block, Declaration, Rule, StyleSheet};
pub use system::DesignSystem;
pub use tokens::{SPACE_PREFIX, TEXT_PREFIX, tokens_stylesheet};
