//! Switcher: a row of equal children that flips to a column below a
//! container width threshold.
//!
//! `flex-basis: calc((threshold - 100%) * 999)` is hugely negative above the
//! threshold (children share the row) and hugely positive below it (each
//! child takes a full line). More than `limit` children always stack.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use modscale::Length;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Switcher {
    pub class_name: String,
    pub threshold: Measure,
    pub space: Measure,
    /// Most children that may share a row.
    pub limit: u32,
}

impl Default for Switcher {
    fn default() -> Self {
        Self {
            class_name: "switcher".into(),
            threshold: Measure::Length(Length::rem(30.0)),
            space: Measure::Space("md"),
            limit: 4,
        }
    }
}

impl Recipe for Switcher {
    fn name(&self) -> &'static str {
        "Switcher"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();
        let overflow = format!("{class} > :nth-last-child(n+{})", self.limit.saturating_add(1));

        StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("display", "flex")
                    .declare("flex-wrap", "wrap")
                    .declare("gap", &self.space),
            )
            .with(
                Rule::new(format!("{class} > *"))
                    .declare("flex-grow", 1)
                    .declare("flex-basis", format!("calc(({} - 100%) * 999)", self.threshold)),
            )
            .with(
                Rule::with_selectors([overflow.clone(), format!("{overflow} ~ *")])
                    .declare("flex-basis", "100%"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_switcher_css() {
        insta::assert_snapshot!(Switcher::default().css(), @r"
        .switcher {
          display: flex;
          flex-wrap: wrap;
          gap: var(--space-md);
        }

        .switcher > * {
          flex-grow: 1;
          flex-basis: calc((30rem - 100%) * 999);
        }

        .switcher > :nth-last-child(n+5),
        .switcher > :nth-last-child(n+5) ~ * {
          flex-basis: 100%;
        }
        ");
    }

    #[test]
    fn test_limit_controls_the_quantity_query() {
        let switcher = Switcher {
            limit: 2,
            ..Switcher::default()
        };
        assert!(switcher.stylesheet().rule(".switcher > :nth-last-child(n+3) ~ *").is_some());
    }

    #[test]
    fn test_largest_limit_does_not_overflow() {
        let switcher = Switcher {
            limit: u32::MAX,
            ..Switcher::default()
        };
        let selector = format!(".switcher > :nth-last-child(n+{})", u32::MAX);
        assert!(switcher.stylesheet().rule(&selector).is_some());
    }
}
