//! Bundling tokens and recipes into a CSS file and a JSON description.

use crate::error::RecipeError;
use crate::recipes::{AnyRecipe, Recipe};
use crate::stylesheet::StyleSheet;
use crate::system::DesignSystem;
use modscale::{ModularSystemConfig, SizeMap};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CSS_FILE: &str = "layout.css";
pub const JSON_FILE: &str = "layout.json";

/// One stylesheet with the design tokens first, then every recipe under a
/// `/* Name */` banner.
///
/// Each recipe is validated before anything is rendered.
pub fn export_stylesheet(
    system: &DesignSystem,
    recipes: &[AnyRecipe],
) -> Result<StyleSheet, RecipeError> {
    for recipe in recipes {
        recipe.validate()?;
    }

    let mut sheet = StyleSheet::new();
    sheet.comment("Design tokens");
    sheet.extend(system.tokens());
    for recipe in recipes {
        sheet.comment(recipe.name());
        sheet.extend(recipe.stylesheet());
    }
    Ok(sheet)
}

pub fn export_css(system: &DesignSystem, recipes: &[AnyRecipe]) -> Result<String, RecipeError> {
    Ok(export_stylesheet(system, recipes)?.to_css())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedRecipe<'a> {
    name: &'static str,
    class_name: &'a str,
    css: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Bundle<'a> {
    config: &'a ModularSystemConfig,
    font_sizes: &'a SizeMap,
    spacing: &'a SizeMap,
    recipes: Vec<ExportedRecipe<'a>>,
}

/// Pretty-printed JSON with the active config, both size maps and the CSS of
/// each recipe.
pub fn export_json(system: &DesignSystem, recipes: &[AnyRecipe]) -> Result<String, RecipeError> {
    let mut exported = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        recipe.validate()?;
        exported.push(ExportedRecipe {
            name: recipe.name(),
            class_name: recipe.class_name(),
            css: recipe.css(),
        });
    }

    let bundle = Bundle {
        config: system.config(),
        font_sizes: &system.sizes().font_sizes,
        spacing: &system.sizes().spacing,
        recipes: exported,
    };
    Ok(serde_json::to_string_pretty(&bundle)?)
}

/// Paths written by [`write_bundle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePaths {
    pub css: PathBuf,
    pub json: PathBuf,
}

/// Writes `layout.css` and `layout.json` into `dir`, creating it if needed.
///
/// Both documents are rendered before either file is touched.
pub fn write_bundle(
    dir: impl AsRef<Path>,
    system: &DesignSystem,
    recipes: &[AnyRecipe],
) -> Result<BundlePaths, RecipeError> {
    let dir = dir.as_ref();
    let css = export_css(system, recipes)?;
    let json = export_json(system, recipes)?;

    fs::create_dir_all(dir)?;
    let paths = BundlePaths {
        css: dir.join(CSS_FILE),
        json: dir.join(JSON_FILE),
    };
    fs::write(&paths.css, css)?;
    fs::write(&paths.json, json)?;

    log::info!(
        "exported {} recipe(s) to {}",
        recipes.len(),
        dir.display()
    );
    Ok(paths)
}
