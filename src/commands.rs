//! Subcommand implementations. Each writes its report to `out`.

use std::io::Write;

use modscale::{ModularScale, SizeMap, format_number};
use recipes::{DesignSystem, Recipe, write_bundle};

use crate::cli::{ExportArgs, RecipeArgs, ScaleArgs};
use crate::config::ProjectConfig;
use crate::error::Result;

pub fn run_ratios(out: &mut impl Write) -> Result<()> {
    for scale in ModularScale::catalog() {
        writeln!(
            out,
            "{:<18} {:<18} {}",
            scale.slug,
            scale.name,
            format_number(scale.ratio)
        )?;
    }
    Ok(())
}

pub fn run_scale(config: &ProjectConfig, args: &ScaleArgs, out: &mut impl Write) -> Result<()> {
    let mut merged = config.system.clone();
    args.apply(&mut merged);
    let system = DesignSystem::new(merged)?;

    if args.json {
        let json = serde_json::to_string_pretty(system.sizes()).map_err(recipes::RecipeError::from)?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    let system_config = system.config();
    writeln!(
        out,
        "Font sizes ({}, {})",
        system_config.font_scale.slug, system_config.font_unit
    )?;
    write_sizes(out, &system.sizes().font_sizes)?;
    writeln!(out)?;
    writeln!(
        out,
        "Spacing ({}, {})",
        system_config.spacing_scale.slug, system_config.spacing_unit
    )?;
    write_sizes(out, &system.sizes().spacing)?;
    Ok(())
}

fn write_sizes(out: &mut impl Write, sizes: &SizeMap) -> Result<()> {
    for (label, value) in sizes.iter() {
        writeln!(out, "  {label:<5} {value}")?;
    }
    Ok(())
}

pub fn run_recipe(config: &ProjectConfig, args: &RecipeArgs, out: &mut impl Write) -> Result<()> {
    let recipe = config.recipes.get(args.kind);
    recipe.validate()?;

    if args.tokens {
        let system = config.design_system()?;
        writeln!(out, "{}", system.tokens())?;
    }
    write!(out, "{}", recipe.css())?;
    Ok(())
}

pub fn run_export(config: &ProjectConfig, args: &ExportArgs, out: &mut impl Write) -> Result<()> {
    let system = config.design_system()?;
    let recipes = config.recipes.select(&args.recipes);
    let paths = write_bundle(&args.out, &system, &recipes)?;

    writeln!(out, "{}", paths.css.display())?;
    writeln!(out, "{}", paths.json.display())?;
    Ok(())
}
