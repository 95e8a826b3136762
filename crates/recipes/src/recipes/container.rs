//! Container: a named query container whose children switch from a column to
//! a row once the container itself is wider than `breakpoint`.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Block, Rule, StyleSheet};
use modscale::Length;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    pub class_name: String,
    /// `container-name`, referenced by the `@container` query.
    pub name: String,
    pub breakpoint: Measure,
    pub space: Measure,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            class_name: "container".into(),
            name: "layout".into(),
            breakpoint: Measure::Length(Length::rem(40.0)),
            space: Measure::Space("md"),
        }
    }
}

impl Recipe for Container {
    fn name(&self) -> &'static str {
        "Container"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();
        let children = format!("{class} > *");

        StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("container-type", "inline-size")
                    .declare("container-name", &self.name),
            )
            .with(
                Rule::new(&children)
                    .declare("display", "flex")
                    .declare("flex-direction", "column")
                    .declare("gap", &self.space),
            )
            .with(Block::at_rule(
                "container",
                format!("{} (min-width: {})", self.name, self.breakpoint),
                vec![Rule::new(&children).declare("flex-direction", "row").into()],
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_container_css() {
        insta::assert_snapshot!(Container::default().css(), @r"
        .container {
          container-type: inline-size;
          container-name: layout;
        }

        .container > * {
          display: flex;
          flex-direction: column;
          gap: var(--space-md);
        }

        @container layout (min-width: 40rem) {
          .container > * {
            flex-direction: row;
          }
        }
        ");
    }
}
