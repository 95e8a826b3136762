//! Integration tests for reading recipe options from JSON.

use recipes::recipes::{ReelVariants, Side};
use recipes::{AnyRecipe, Measure, Recipe, RecipeKind, RecipeSet};

#[test]
fn test_any_recipe_reads_partial_options() {
    let recipe: AnyRecipe = serde_json::from_str(
        r#"{ "recipe": "sidebar", "side": "right", "sideWidth": "20rem", "space": "space:lg" }"#,
    )
    .unwrap();

    let AnyRecipe::Sidebar(sidebar) = &recipe else {
        panic!("expected a sidebar, got {recipe:?}");
    };
    assert_eq!(sidebar.side, Side::Right);
    assert_eq!(sidebar.class_name, "with-sidebar");

    let sheet = recipe.stylesheet();
    assert_eq!(
        sheet.rule(".with-sidebar > :last-child").unwrap().get("flex-basis"),
        Some("20rem")
    );
    assert_eq!(
        sheet.rule(".with-sidebar").unwrap().get("gap"),
        Some("var(--space-lg)")
    );
}

#[test]
fn test_recipe_set_reads_kebab_case_keys() {
    let set: RecipeSet = serde_json::from_str(
        r#"{
            "box": { "invert": true },
            "grid-area": { "className": "page" },
            "reel": { "variants": "NO_BAR | OVERFLOWING" }
        }"#,
    )
    .unwrap();

    assert_eq!(set.get(RecipeKind::Box).css(), {
        let mut boxed = recipes::recipes::Boxed::default();
        boxed.invert = true;
        boxed.css()
    });
    assert_eq!(set.get(RecipeKind::GridArea).selector(), ".page");
    match set.get(RecipeKind::Reel) {
        AnyRecipe::Reel(reel) => {
            assert_eq!(reel.variants, ReelVariants::NO_BAR | ReelVariants::OVERFLOWING)
        }
        other => panic!("expected a reel, got {other:?}"),
    }
    assert!(set.stack.is_none());
}

#[test]
fn test_bad_measures_fail_deserialization() {
    let err = serde_json::from_str::<AnyRecipe>(r#"{ "recipe": "stack", "space": "space:huge" }"#)
        .unwrap_err();
    assert!(err.to_string().contains("huge"));
}

#[test]
fn test_measures_in_options_round_trip() {
    let original = RecipeKind::Switcher.default_recipe();
    let json = serde_json::to_string(&original).unwrap();
    let back: AnyRecipe = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);

    assert_eq!(
        "min(60ch, 100%)".parse::<Measure>().unwrap(),
        Measure::Expr("min(60ch, 100%)".into())
    );
}
