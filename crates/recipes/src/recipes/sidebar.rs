//! Sidebar: two children side by side that stack when the content would get
//! narrower than `content_min`.
//!
//! The sidebar keeps its `side_width` (or its content width when unset)
//! while the content child grows to absorb the rest.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use modscale::Length;
use serde::{Deserialize, Serialize};

/// Which child is the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sidebar {
    pub class_name: String,
    pub side: Side,
    pub side_width: Option<Measure>,
    /// Narrowest the content may get before the layout wraps.
    pub content_min: Measure,
    pub space: Measure,
    /// Keep children at their natural height.
    pub no_stretch: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            class_name: "with-sidebar".into(),
            side: Side::Left,
            side_width: None,
            content_min: Measure::Length(Length::percent(50.0)),
            space: Measure::Space("md"),
            no_stretch: false,
        }
    }
}

impl Recipe for Sidebar {
    fn name(&self) -> &'static str {
        "Sidebar"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();
        let (sidebar, content) = match self.side {
            Side::Left => (":first-child", ":last-child"),
            Side::Right => (":last-child", ":first-child"),
        };

        StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("display", "flex")
                    .declare("flex-wrap", "wrap")
                    .declare("gap", &self.space)
                    .declare_opt("align-items", self.no_stretch.then_some("flex-start")),
            )
            .with(
                Rule::new(format!("{class} > {sidebar}"))
                    .declare_opt("flex-basis", self.side_width.as_ref())
                    .declare("flex-grow", 1),
            )
            .with(
                Rule::new(format!("{class} > {content}"))
                    .declare("flex-basis", 0)
                    .declare("flex-grow", 999)
                    .declare("min-inline-size", &self.content_min),
            )
    }
}
