//! Subgrid: cards whose inner rows line up across a parent grid.
//!
//! Each child spans `rows_per_item` parent rows and adopts them with
//! `grid-template-rows: subgrid`, so headings, bodies and footers align
//! between siblings.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subgrid {
    pub class_name: String,
    pub columns: u32,
    pub rows_per_item: u32,
    pub space: Measure,
}

impl Default for Subgrid {
    fn default() -> Self {
        Self {
            class_name: "subgrid".into(),
            columns: 3,
            rows_per_item: 3,
            space: Measure::Space("md"),
        }
    }
}

impl Recipe for Subgrid {
    fn name(&self) -> &'static str {
        "Subgrid"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();

        StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("display", "grid")
                    .declare(
                        "grid-template-columns",
                        format!("repeat({}, 1fr)", self.columns.max(1)),
                    )
                    .declare("gap", &self.space),
            )
            .with(
                Rule::new(format!("{class} > *"))
                    .declare("display", "grid")
                    .declare("grid-row", format!("span {}", self.rows_per_item.max(1)))
                    .declare("grid-template-rows", "subgrid")
                    .declare("gap", 0),
            )
    }
}
