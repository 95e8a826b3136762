//! End-to-end tests: config file in, CSS and JSON out.

use clap::Parser;
use layoutsmith::cli::{Cli, Command};
use layoutsmith::commands::{run_export, run_recipe, run_scale};
use layoutsmith::{AppError, ProjectConfig};
use std::fs;
use std::process::Command as Process;

const PROJECT: &str = r#"
[system]
baseFontSize = 18
fontScale = "minor-third"
spacingScale = "golden-section"
"#;

fn write_project(dir: &std::path::Path, source: &str) -> std::path::PathBuf {
    let path = dir.join("layoutsmith.toml");
    fs::write(&path, source).unwrap();
    path
}

// ============================================================================
// CONFIG FILES
// ============================================================================

#[test]
fn test_unknown_scale_in_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_project(dir.path(), PROJECT);

    let err = ProjectConfig::load(&path).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProjectConfig::load(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

// ============================================================================
// COMMANDS
// ============================================================================

#[test]
fn test_export_honours_file_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_project(
        dir.path(),
        r#"
        [system]
        fontUnit = "px"
        spacingUnit = "px"
        spacingScale = "octave"
        steps = 4

        [recipes.stack]
        space = "space:lg"
        "#,
    );
    let out_dir = dir.path().join("dist");
    let out_arg = out_dir.to_string_lossy().into_owned();

    let cli = Cli::try_parse_from([
        "layoutsmith",
        "--config",
        path.to_str().unwrap(),
        "export",
        "--out",
        out_arg.as_str(),
        "stack",
    ])
    .unwrap();
    let config = ProjectConfig::load_or_default(cli.config.as_deref()).unwrap();
    let Command::Export(args) = &cli.command else {
        panic!("expected export");
    };

    let mut report = Vec::new();
    run_export(&config, args, &mut report).unwrap();
    assert_eq!(String::from_utf8(report).unwrap().lines().count(), 2);

    let css = fs::read_to_string(out_dir.join("layout.css")).unwrap();
    assert!(css.contains("--space-lg: 128px;"));
    assert!(css.contains("margin-block-start: var(--space-lg);"));
    assert!(!css.contains("/* Box */"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("layout.json")).unwrap()).unwrap();
    assert_eq!(json["config"]["spacingScale"], "octave");
    assert_eq!(json["fontSizes"]["base"], "16px");
}

#[test]
fn test_recipe_with_tokens() {
    let cli = Cli::try_parse_from(["layoutsmith", "recipe", "icon", "--tokens"]).unwrap();
    let Command::Recipe(args) = &cli.command else {
        panic!("expected recipe");
    };

    let mut out = Vec::new();
    run_recipe(&ProjectConfig::default(), args, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with(":root {\n  --text-xs: 0.64rem;\n"));
    assert!(out.contains("}\n\n.icon {\n"));
}

#[test]
fn test_scale_json_keeps_label_order() {
    let cli = Cli::try_parse_from(["layoutsmith", "scale", "--json", "--steps", "3"]).unwrap();
    let Command::Scale(args) = &cli.command else {
        panic!("expected scale");
    };

    let mut out = Vec::new();
    run_scale(&ProjectConfig::default(), args, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    let xs = out.find("\"xs\"").unwrap();
    let sm = out.find("\"sm\"").unwrap();
    let base = out.find("\"base\"").unwrap();
    assert!(xs < sm && sm < base);
    assert!(out.contains("\"spacing\""));
}

// ============================================================================
// BINARY
// ============================================================================

#[test]
fn test_binary_lists_ratios() {
    let output = Process::new(env!("CARGO_BIN_EXE_layoutsmith"))
        .arg("ratios")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("perfect-fourth"));
}

#[test]
fn test_binary_fails_on_unknown_recipe() {
    let output = Process::new(env!("CARGO_BIN_EXE_layoutsmith"))
        .args(["recipe", "masonry"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
