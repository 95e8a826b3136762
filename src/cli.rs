//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use modscale::{ModularScale, ModularSystemConfig, SizeUnit};
use recipes::RecipeKind;

#[derive(Parser, Debug)]
#[command(
    name = "layoutsmith",
    version,
    about = "CSS layout recipes and modular type/spacing scales"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML project file with `[system]` and `[recipes.*]` sections.
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the ratio catalog.
    Ratios,

    /// Print the font and spacing sizes for a modular system.
    Scale(ScaleArgs),

    /// Print the CSS for one recipe.
    Recipe(RecipeArgs),

    /// Write layout.css and layout.json into a directory.
    Export(ExportArgs),
}

/// Overrides applied on top of the config file's `[system]` section.
#[derive(Parser, Debug, Default)]
pub struct ScaleArgs {
    /// Base font size in px.
    #[arg(long = "base-font", value_name = "PX")]
    pub base_font: Option<f64>,

    /// Base spacing in px.
    #[arg(long = "base-spacing", value_name = "PX")]
    pub base_spacing: Option<f64>,

    /// Ratio for font sizes, by slug or name (see `ratios`).
    #[arg(long = "font-scale", value_name = "SCALE", value_parser = ModularScale::lookup)]
    pub font_scale: Option<ModularScale>,

    /// Ratio for spacing, by slug or name.
    #[arg(long = "spacing-scale", value_name = "SCALE", value_parser = ModularScale::lookup)]
    pub spacing_scale: Option<ModularScale>,

    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub steps: Option<i32>,

    /// px, rem or em. Anything else falls back to px.
    #[arg(long = "font-unit", value_name = "UNIT")]
    pub font_unit: Option<String>,

    /// px, rem or em. Anything else falls back to px.
    #[arg(long = "spacing-unit", value_name = "UNIT")]
    pub spacing_unit: Option<String>,

    /// Print the sizes as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ScaleArgs {
    pub fn apply(&self, config: &mut ModularSystemConfig) {
        if let Some(size) = self.base_font {
            config.base_font_size = size;
        }
        if let Some(size) = self.base_spacing {
            config.base_spacing = size;
        }
        if let Some(scale) = self.font_scale {
            config.font_scale = scale;
        }
        if let Some(scale) = self.spacing_scale {
            config.spacing_scale = scale;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(unit) = &self.font_unit {
            config.font_unit = SizeUnit::from_lenient(unit);
        }
        if let Some(unit) = &self.spacing_unit {
            config.spacing_unit = SizeUnit::from_lenient(unit);
        }
    }
}

#[derive(Parser, Debug)]
pub struct RecipeArgs {
    /// Recipe slug, e.g. `stack` or `grid-area`.
    #[arg(value_name = "RECIPE")]
    pub kind: RecipeKind,

    /// Prepend the `:root` token block.
    #[arg(long)]
    pub tokens: bool,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output directory.
    #[arg(long, short, value_name = "DIR")]
    pub out: PathBuf,

    /// Recipes to include (default: all).
    #[arg(value_name = "RECIPE")]
    pub recipes: Vec<RecipeKind>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_scale_overrides() {
        let cli = Cli::try_parse_from([
            "layoutsmith",
            "-vv",
            "scale",
            "--font-scale",
            "Perfect Fifth",
            "--steps",
            "6",
            "--font-unit",
            "px",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Command::Scale(args) = cli.command else {
            panic!("expected scale");
        };
        let mut config = ModularSystemConfig::default();
        args.apply(&mut config);
        assert_eq!(config.font_scale, ModularScale::PERFECT_FIFTH);
        assert_eq!(config.steps, 6);
        assert_eq!(config.font_unit, SizeUnit::Px);
        assert_eq!(config.spacing_scale, ModularScale::PERFECT_FOURTH);
    }

    #[test]
    fn test_unknown_scale_is_a_usage_error() {
        assert!(Cli::try_parse_from(["layoutsmith", "scale", "--font-scale", "golden"]).is_err());
    }

    #[test]
    fn test_unknown_unit_falls_back_to_px() {
        let args = ScaleArgs {
            spacing_unit: Some("vw".into()),
            ..ScaleArgs::default()
        };
        let mut config = ModularSystemConfig::default();
        args.apply(&mut config);
        assert_eq!(config.spacing_unit, SizeUnit::Px);
    }

    #[test]
    fn test_parses_export_recipes_and_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "layoutsmith",
            "export",
            "--out",
            "dist",
            "stack",
            "grid-area",
            "--config",
            "layoutsmith.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("layoutsmith.toml")));
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.out, PathBuf::from("dist"));
        assert_eq!(args.recipes, vec![RecipeKind::Stack, RecipeKind::GridArea]);
    }
}
