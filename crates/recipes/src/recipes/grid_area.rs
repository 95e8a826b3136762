//! Grid-Area: a named-area page grid.
//!
//! `areas` is a row-major matrix of area names; `.` marks an empty cell. Each
//! distinct name gets a `.grid-area > .<name>` placement rule, in order of
//! first appearance.

use super::Recipe;
use crate::error::RecipeError;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use modscale::Length;
use serde::{Deserialize, Serialize};

const EMPTY_CELL: &str = ".";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridArea {
    pub class_name: String,
    pub columns: Vec<Measure>,
    pub rows: Vec<Measure>,
    pub areas: Vec<Vec<String>>,
    pub space: Measure,
}

impl Default for GridArea {
    fn default() -> Self {
        let areas = [
            ["header", "header"],
            ["sidebar", "main"],
            ["footer", "footer"],
        ];
        Self {
            class_name: "grid-area".into(),
            columns: vec![
                Measure::Length(Length::fr(1.0)),
                Measure::Length(Length::fr(3.0)),
            ],
            rows: vec![
                Measure::auto(),
                Measure::Length(Length::fr(1.0)),
                Measure::auto(),
            ],
            areas: areas
                .iter()
                .map(|row| row.iter().map(|name| name.to_string()).collect())
                .collect(),
            space: Measure::Space("md"),
        }
    }
}

impl GridArea {
    /// Distinct area names in order of first appearance.
    pub fn area_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.areas.iter().flatten() {
            if name != EMPTY_CELL && !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }

    fn template_areas(&self) -> String {
        self.areas
            .iter()
            .map(|row| format!("\"{}\"", row.join(" ")))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn invalid(&self, reason: String) -> RecipeError {
        RecipeError::InvalidOptions {
            recipe: self.name(),
            reason,
        }
    }
}

fn track_list(tracks: &[Measure]) -> String {
    tracks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Recipe for GridArea {
    fn name(&self) -> &'static str {
        "Grid-Area"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();
        let non_empty = |s: String| (!s.is_empty()).then_some(s);

        let mut sheet = StyleSheet::new().with(
            Rule::new(&class)
                .declare("display", "grid")
                .declare_opt("grid-template-columns", non_empty(track_list(&self.columns)))
                .declare_opt("grid-template-rows", non_empty(track_list(&self.rows)))
                .declare_opt("grid-template-areas", non_empty(self.template_areas()))
                .declare("gap", &self.space),
        );

        for name in self.area_names() {
            sheet.push(Rule::new(format!("{class} > .{name}")).declare("grid-area", name));
        }

        sheet
    }

    /// Areas must be rectangular, match the track counts and name every
    /// cell with a CSS identifier or `.`.
    fn validate(&self) -> Result<(), RecipeError> {
        let Some(first) = self.areas.first() else {
            return Ok(());
        };

        let width = first.len();
        if let Some(row) = self.areas.iter().find(|row| row.len() != width) {
            return Err(self.invalid(format!(
                "area rows must all have {width} cells, found {}",
                row.len()
            )));
        }
        if !self.columns.is_empty() && self.columns.len() != width {
            return Err(self.invalid(format!(
                "{} column tracks for {width} area columns",
                self.columns.len()
            )));
        }
        if !self.rows.is_empty() && self.rows.len() != self.areas.len() {
            return Err(self.invalid(format!(
                "{} row tracks for {} area rows",
                self.rows.len(),
                self.areas.len()
            )));
        }

        let is_ident = |name: &str| {
            !name.is_empty()
                && !name.starts_with(|c: char| c.is_ascii_digit())
                && name
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        };
        if let Some(name) = self
            .areas
            .iter()
            .flatten()
            .find(|name| name.as_str() != EMPTY_CELL && !is_ident(name))
        {
            return Err(self.invalid(format!("{name:?} is not a valid area name")));
        }

        Ok(())
    }
}
