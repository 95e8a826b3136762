//! Imposter: an element centred over its positioning container.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use bitflags::bitflags;
use modscale::Length;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ImposterVariants: u8 {
        /// Keep the imposter inside its container, scrolling if needed.
        const CONTAIN = 1 << 0;
        /// Centre over the viewport instead of the container.
        const FIXED = 1 << 1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Imposter {
    pub class_name: String,
    /// Minimum gap to the container edge when contained.
    pub margin: Measure,
    pub variants: ImposterVariants,
}

impl Default for Imposter {
    fn default() -> Self {
        Self {
            class_name: "imposter".into(),
            margin: Measure::Length(Length::ZERO),
            variants: ImposterVariants::empty(),
        }
    }
}

impl Recipe for Imposter {
    fn name(&self) -> &'static str {
        "Imposter"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let position = if self.variants.contains(ImposterVariants::FIXED) {
            "fixed"
        } else {
            "absolute"
        };

        let mut rule = Rule::new(self.selector())
            .declare("position", position)
            .declare("inset-block-start", "50%")
            .declare("inset-inline-start", "50%")
            .declare("transform", "translate(-50%, -50%)");

        if self.variants.contains(ImposterVariants::CONTAIN) {
            let max = format!("calc(100% - ({} * 2))", self.margin);
            rule = rule
                .declare("overflow", "auto")
                .declare("max-inline-size", &max)
                .declare("max-block-size", &max);
        }

        StyleSheet::new().with(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_imposter_css() {
        insta::assert_snapshot!(Imposter::default().css(), @r"
        .imposter {
          position: absolute;
          inset-block-start: 50%;
          inset-inline-start: 50%;
          transform: translate(-50%, -50%);
        }
        ");
    }

    #[test]
    fn test_contained_fixed_imposter() {
        let imposter = Imposter {
            margin: Measure::Space("sm"),
            variants: ImposterVariants::CONTAIN | ImposterVariants::FIXED,
            ..Imposter::default()
        };
        let sheet = imposter.stylesheet();
        let rule = sheet.rule(".imposter").unwrap();
        assert_eq!(rule.get("position"), Some("fixed"));
        assert_eq!(
            rule.get("max-inline-size"),
            Some("calc(100% - (var(--space-sm) * 2))")
        );
    }
}
