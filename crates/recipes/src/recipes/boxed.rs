//! Box: padding, a border and a colour pair.
//!
//! The outline duplicates the border width so the box keeps a visible edge
//! in forced-colour modes, where the transparent outline becomes visible.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use modscale::Length;
use serde::{Deserialize, Serialize};

const DARK: &str = "var(--color-dark, #000)";
const LIGHT: &str = "var(--color-light, #fff)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Boxed {
    pub class_name: String,
    pub padding: Measure,
    pub border_width: Measure,
    /// Swap foreground and background.
    pub invert: bool,
}

impl Default for Boxed {
    fn default() -> Self {
        Self {
            class_name: "box".into(),
            padding: Measure::Space("md"),
            border_width: Measure::Length(Length::px(1.0)),
            invert: false,
        }
    }
}

impl Recipe for Boxed {
    fn name(&self) -> &'static str {
        "Box"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();
        let (color, background) = if self.invert {
            (LIGHT, DARK)
        } else {
            (DARK, LIGHT)
        };
        let border = &self.border_width;

        StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("padding", &self.padding)
                    .declare("border", format!("{border} solid"))
                    .declare("outline", format!("{border} solid transparent"))
                    .declare("outline-offset", format!("calc({border} * -1)"))
                    .declare("color", color)
                    .declare("background-color", background),
            )
            .with(Rule::new(format!("{class} *")).declare("color", "inherit"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_box_css() {
        insta::assert_snapshot!(Boxed::default().css(), @r"
        .box {
          padding: var(--space-md);
          border: 1px solid;
          outline: 1px solid transparent;
          outline-offset: calc(1px * -1);
          color: var(--color-dark, #000);
          background-color: var(--color-light, #fff);
        }

        .box * {
          color: inherit;
        }
        ");
    }

    #[test]
    fn test_invert_swaps_colours() {
        let boxed = Boxed {
            invert: true,
            ..Boxed::default()
        };
        let sheet = boxed.stylesheet();
        let rule = sheet.rule(".box").unwrap();
        assert_eq!(rule.get("color"), Some(LIGHT));
        assert_eq!(rule.get("background-color"), Some(DARK));
    }
}
