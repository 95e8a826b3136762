//! Cover: a full-height column that vertically centres one principal child.
//!
//! Children other than the centred one keep `space` of margin; the first and
//! last lose their outer margin so they sit flush with the padding.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use modscale::Length;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cover {
    pub class_name: String,
    /// Selector of the child that is centred.
    pub centered: String,
    pub space: Measure,
    pub min_height: Measure,
    /// Drop the container padding.
    pub no_pad: bool,
}

impl Default for Cover {
    fn default() -> Self {
        Self {
            class_name: "cover".into(),
            centered: "h1".into(),
            space: Measure::Space("md"),
            min_height: Measure::Length(Length::vh(100.0)),
            no_pad: false,
        }
    }
}

impl Recipe for Cover {
    fn name(&self) -> &'static str {
        "Cover"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();
        let centered = &self.centered;
        let padding = if self.no_pad {
            "0".to_string()
        } else {
            self.space.to_string()
        };

        StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("display", "flex")
                    .declare("flex-direction", "column")
                    .declare("min-block-size", &self.min_height)
                    .declare("padding", padding),
            )
            .with(Rule::new(format!("{class} > *")).declare("margin-block", &self.space))
            .with(
                Rule::new(format!("{class} > :first-child:not({centered})"))
                    .declare("margin-block-start", 0),
            )
            .with(
                Rule::new(format!("{class} > :last-child:not({centered})"))
                    .declare("margin-block-end", 0),
            )
            .with(Rule::new(format!("{class} > {centered}")).declare("margin-block", "auto"))
    }
}
