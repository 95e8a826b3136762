//! Integration tests for the design-system context and its tokens.

use modscale::{ModularScale, ModularSystemConfig, SizeUnit};
use recipes::{DesignSystem, Measure, Recipe, RecipeError, RecipeKind, StyleSheet};

fn root_declarations(sheet: &StyleSheet) -> Vec<(String, String)> {
    sheet
        .rule(":root")
        .expect(":root rule")
        .declarations
        .iter()
        .map(|d| (d.property.clone(), d.value.clone()))
        .collect()
}

// ============================================================================
// TOKENS
// ============================================================================

#[test]
fn test_default_system_declares_every_label() {
    let system = DesignSystem::default();
    let declarations = root_declarations(&system.tokens());

    // font: 10 of 10 labels, spacing: 10 of 10 labels with 13 steps
    assert_eq!(declarations.len(), 20);
    assert_eq!(declarations[0], ("--text-xs".into(), "0.64rem".into()));
    assert_eq!(declarations[2], ("--text-base".into(), "1rem".into()));
    assert_eq!(declarations[10], ("--space-xs".into(), "1rem".into()));
}

#[test]
fn test_every_token_reference_in_default_recipes_resolves() {
    let system = DesignSystem::default();
    let declared: Vec<String> = root_declarations(&system.tokens())
        .into_iter()
        .map(|(property, _)| format!("var({property})"))
        .collect();

    for kind in RecipeKind::ALL {
        for rule in kind.default_recipe().stylesheet().rules() {
            for declaration in &rule.declarations {
                if declaration.value.starts_with("var(--space-")
                    || declaration.value.starts_with("var(--text-")
                {
                    assert!(
                        declared.contains(&declaration.value),
                        "{kind}: {} is not declared",
                        declaration.value
                    );
                }
            }
        }
    }
}

#[test]
fn test_short_scales_omit_upper_tokens() {
    let system = DesignSystem::new(ModularSystemConfig::default().with_steps(4)).unwrap();

    assert_eq!(system.sizes().font_sizes.len(), 4);
    assert_eq!(system.sizes().spacing.len(), 4);
    assert_eq!(system.resolve(&Measure::Text("xl")), None);
    assert_eq!(system.resolve(&Measure::Space("lg")), Some("2.369rem"));
}

// ============================================================================
// UPDATES
// ============================================================================

#[test]
fn test_update_switches_units_for_tokens() {
    let mut system = DesignSystem::default();
    system
        .update(|config| {
            config.font_unit = SizeUnit::Px;
            config.font_scale = ModularScale::PERFECT_FIFTH;
        })
        .unwrap();

    let tokens = system.tokens();
    let root = tokens.rule(":root").unwrap();
    assert_eq!(root.get("--text-base"), Some("16px"));
    assert_eq!(root.get("--text-lg"), Some("24px"));
    assert_eq!(root.get("--text-xl"), Some("36px"));
}

#[test]
fn test_invalid_replacement_is_reported_and_ignored() {
    let mut system = DesignSystem::default();
    let before = system.tokens().to_css();

    let err = system
        .replace(ModularSystemConfig::default().with_base_spacing(f64::NAN))
        .unwrap_err();

    assert!(matches!(err, RecipeError::Scale(_)));
    assert_eq!(system.tokens().to_css(), before);
}
