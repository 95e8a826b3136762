//! Reel: a horizontally scrolling strip.
//!
//! Modifier classes are opt-in through [`ReelVariants`]:
//!
//! - `NO_BAR` emits `.reel.no-bar`, hiding the scrollbar
//! - `OVERFLOWING` emits `.reel.overflowing`, reserving room under the items
//!   for the scrollbar (the class is toggled by script when content overflows)

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

const DARK: &str = "var(--color-dark, #000)";
const LIGHT: &str = "var(--color-light, #fff)";

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ReelVariants: u8 {
        const NO_BAR = 1 << 0;
        const OVERFLOWING = 1 << 1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reel {
    pub class_name: String,
    pub item_width: Measure,
    pub space: Measure,
    pub height: Measure,
    pub variants: ReelVariants,
}

impl Default for Reel {
    fn default() -> Self {
        Self {
            class_name: "reel".into(),
            item_width: Measure::auto(),
            space: Measure::Space("md"),
            height: Measure::auto(),
            variants: ReelVariants::empty(),
        }
    }
}

impl Recipe for Reel {
    fn name(&self) -> &'static str {
        "Reel"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();
        let thumb = format!(
            "linear-gradient({DARK} 0, {DARK} 0.25rem, {LIGHT} 0.25rem, {LIGHT} 0.75rem, {DARK} 0.75rem)"
        );

        let mut sheet = StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("display", "flex")
                    .declare("block-size", &self.height)
                    .declare("overflow-x", "auto")
                    .declare("overflow-y", "hidden")
                    .declare("scrollbar-color", format!("{LIGHT} {DARK}")),
            )
            .with(Rule::new(format!("{class}::-webkit-scrollbar")).declare("block-size", "1rem"))
            .with(
                Rule::new(format!("{class}::-webkit-scrollbar-track"))
                    .declare("background-color", DARK),
            )
            .with(
                Rule::new(format!("{class}::-webkit-scrollbar-thumb"))
                    .declare("background-color", DARK)
                    .declare("background-image", thumb),
            )
            .with(
                Rule::new(format!("{class} > *"))
                    .declare("flex", format!("0 0 {}", self.item_width)),
            )
            .with(
                Rule::new(format!("{class} > img"))
                    .declare("block-size", "100%")
                    .declare("flex-basis", "auto")
                    .declare("width", "auto"),
            )
            .with(
                Rule::new(format!("{class} > * + *")).declare("margin-inline-start", &self.space),
            );

        if self.variants.contains(ReelVariants::OVERFLOWING) {
            sheet.push(
                Rule::new(format!("{class}.overflowing"))
                    .declare("padding-block-end", &self.space),
            );
        }

        if self.variants.contains(ReelVariants::NO_BAR) {
            sheet.push(Rule::new(format!("{class}.no-bar")).declare("scrollbar-width", "none"));
            sheet.push(
                Rule::new(format!("{class}.no-bar::-webkit-scrollbar")).declare("display", "none"),
            );
        }

        sheet
    }
}
