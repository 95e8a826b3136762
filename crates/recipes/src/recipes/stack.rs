//! Stack: vertical flow with uniform space between siblings.
//!
//! ```css
//! .stack > * + * {
//!     margin-block-start: var(--space-md);
//! }
//! ```
//!
//! `recursive` applies the spacing at every nesting depth, and `split_after`
//! pushes everything after the nth child to the bottom of the stack.

use super::Recipe;
use crate::measure::Measure;
use crate::stylesheet::{Rule, StyleSheet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stack {
    pub class_name: String,
    pub space: Measure,
    pub recursive: bool,
    pub split_after: Option<u32>,
}

impl Default for Stack {
    fn default() -> Self {
        Self {
            class_name: "stack".into(),
            space: Measure::Space("md"),
            recursive: false,
            split_after: None,
        }
    }
}

impl Recipe for Stack {
    fn name(&self) -> &'static str {
        "Stack"
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn stylesheet(&self) -> StyleSheet {
        let class = self.selector();
        let combinator = if self.recursive { " " } else { " > " };

        let mut sheet = StyleSheet::new()
            .with(
                Rule::new(&class)
                    .declare("display", "flex")
                    .declare("flex-direction", "column")
                    .declare("justify-content", "flex-start"),
            )
            .with(Rule::new(format!("{class}{combinator}*")).declare("margin-block", 0))
            .with(
                Rule::new(format!("{class}{combinator}* + *"))
                    .declare("margin-block-start", &self.space),
            );

        if let Some(nth) = self.split_after {
            sheet.push(Rule::new(format!("{class}:only-child")).declare("block-size", "100%"));
            sheet.push(
                Rule::new(format!("{class} > :nth-child({nth})"))
                    .declare("margin-block-end", "auto"),
            );
        }

        sheet
    }
}
