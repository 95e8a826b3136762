//! Grid: as many equal columns as fit, each at least `min_item` wide.
//!
//! The column template sits behind `@supports (width: min(...))` so browsers
//! without `min()` keep a single column instead of overflowing.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Block, Rule, StyleSheet};
use modscale::Length;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Grid {
    pub class_name: String,
    pub min_item: Measure,
    pub space: Measure,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            class_name: "grid".into(),
            min_item: Measure::Length(Length::px(250.0)),
            space: Measure::Space("md"),
        }
    }
}

impl Recipe for Grid {
    fn name(&self) -> &'static str {
        "Grid"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();
        let min = format!("min({}, 100%)", self.min_item);

        StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("display", "grid")
                    .declare("gap", &self.space),
            )
            .with(Block::at_rule(
                "supports",
                format!("(width: {min})"),
                vec![
                    Rule::new(&class)
                        .declare(
                            "grid-template-columns",
                            format!("repeat(auto-fit, minmax({min}, 1fr))"),
                        )
                        .into(),
                ],
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_css() {
        insta::assert_snapshot!(Grid::default().css(), @r"
        .grid {
          display: grid;
          gap: var(--space-md);
        }

        @supports (width: min(250px, 100%)) {
          .grid {
            grid-template-columns: repeat(auto-fit, minmax(min(250px, 100%), 1fr));
          }
        }
        ");
    }

    #[test]
    fn test_min_item_accepts_tokens() {
        let grid = Grid {
            min_item: Measure::Text("6xl"),
            ..Grid::default()
        };
        assert!(grid.css().contains("minmax(min(var(--text-6xl), 100%), 1fr)"));
    }
}
