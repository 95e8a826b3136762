//! Cluster: inline items that wrap, with even gaps in both directions.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `justify-content` values offered for clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl Justify {
    pub fn as_str(self) -> &'static str {
        match self {
            Justify::FlexStart => "flex-start",
            Justify::FlexEnd => "flex-end",
            Justify::Center => "center",
            Justify::SpaceBetween => "space-between",
            Justify::SpaceAround => "space-around",
            Justify::SpaceEvenly => "space-evenly",
        }
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `align-items` values offered for clusters and sidebars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    FlexStart,
    FlexEnd,
    #[default]
    Center,
    Baseline,
    Stretch,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::FlexStart => "flex-start",
            Align::FlexEnd => "flex-end",
            Align::Center => "center",
            Align::Baseline => "baseline",
            Align::Stretch => "stretch",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cluster {
    pub class_name: String,
    pub space: Measure,
    pub justify: Justify,
    pub align: Align,
}

impl Default for Cluster {
    fn default() -> Self {
        Self {
            class_name: "cluster".into(),
            space: Measure::Space("md"),
            justify: Justify::default(),
            align: Align::default(),
        }
    }
}

impl Recipe for Cluster {
    fn name(&self) -> &'static str {
        "Cluster"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::new().with(
            Rule::new(self.selector())
                .declare("display", "flex")
                .declare("flex-wrap", "wrap")
                .declare("gap", &self.space)
                .declare("justify-content", self.justify)
                .declare("align-items", self.align),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cluster_css() {
        insta::assert_snapshot!(Cluster::default().css(), @r"
        .cluster {
          display: flex;
          flex-wrap: wrap;
          gap: var(--space-md);
          justify-content: flex-start;
          align-items: center;
        }
        ");
    }

    #[test]
    fn test_alignment_options_render_as_keywords() {
        let cluster = Cluster {
            justify: Justify::SpaceBetween,
            align: Align::Baseline,
            space: Measure::Space("xs"),
            ..Cluster::default()
        };
        let sheet = cluster.stylesheet();
        let rule = sheet.rule(".cluster").unwrap();
        assert_eq!(rule.get("justify-content"), Some("space-between"));
        assert_eq!(rule.get("align-items"), Some("baseline"));
        assert_eq!(rule.get("gap"), Some("var(--space-xs)"));
    }
}
