//! Icon: inline SVG icons sized to the cap height of the surrounding text.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Icon {
    pub class_name: String,
    /// Gap between the icon and its label, when wrapped in `.with-icon`.
    pub space: Option<Measure>,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            class_name: "icon".into(),
            space: None,
        }
    }
}

impl Recipe for Icon {
    fn name(&self) -> &'static str {
        "Icon"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();

        // `cap` overrides the em fallback where supported
        let mut sheet = StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("height", "0.75em")
                    .declare("height", "1cap")
                    .declare("width", "0.75em")
                    .declare("width", "1cap"),
            )
            .with(
                Rule::new(".with-icon")
                    .declare("display", "inline-flex")
                    .declare("align-items", "baseline"),
            );

        if let Some(space) = &self.space {
            sheet.push(Rule::new(format!(".with-icon {class}")).declare("margin-inline-end", space));
        }

        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_icon_css() {
        insta::assert_snapshot!(Icon::default().css(), @r"
        .icon {
          height: 0.75em;
          height: 1cap;
          width: 0.75em;
          width: 1cap;
        }

        .with-icon {
          display: inline-flex;
          align-items: baseline;
        }
        ");
    }

    #[test]
    fn test_space_adds_label_gap() {
        let icon = Icon {
            space: Some(Measure::Space("xs")),
            ..Icon::default()
        };
        assert_eq!(
            icon.stylesheet()
                .rule(".with-icon .icon")
                .unwrap()
                .get("margin-inline-end"),
            Some("var(--space-xs)")
        );
    }
}
