//! Stylesheet data structures and CSS rendering.
//!
//! Recipes build a [`StyleSheet`] instead of concatenating strings, so every
//! recipe renders with the same layout:
//!
//! ```css
//! .stack {
//!   display: flex;
//! }
//!
//! @supports (width: min(250px, 100%)) {
//!   .grid {
//!     grid-template-columns: repeat(auto-fit, minmax(min(250px, 100%), 1fr));
//!   }
//! }
//! ```
//!
//! Blocks are separated by a blank line, except that a comment sits directly
//! above the block it introduces.

use std::fmt::{self, Write};

/// A `property: value` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl ToString) -> Self {
        Self {
            property: property.into(),
            value: value.to_string(),
        }
    }
}

/// A selector list with its declarations, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selectors: vec![selector.into()],
            declarations: Vec::new(),
        }
    }

    /// Creates a rule matching any of several selectors.
    pub fn with_selectors<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            declarations: Vec::new(),
        }
    }

    /// Appends a declaration.
    pub fn declare(mut self, property: impl Into<String>, value: impl ToString) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    /// Appends a declaration when `value` is present.
    pub fn declare_opt<V: ToString>(self, property: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.declare(property, value),
            None => self,
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

/// A top-level or nested stylesheet item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Rule(Rule),
    /// `@name prelude { blocks }`, e.g. `@supports` or `@container`.
    AtRule {
        name: String,
        prelude: String,
        blocks: Vec<Block>,
    },
    /// `/* text */`
    Comment(String),
}

impl From<Rule> for Block {
    fn from(rule: Rule) -> Self {
        Block::Rule(rule)
    }
}

impl Block {
    pub fn at_rule(name: impl Into<String>, prelude: impl Into<String>, blocks: Vec<Block>) -> Self {
        Block::AtRule {
            name: name.into(),
            prelude: prelude.into(),
            blocks,
        }
    }
}

/// An ordered list of blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub blocks: Vec<Block>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, block: impl Into<Block>) -> Self {
        self.push(block);
        self
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Comment(text.into()));
    }

    pub fn extend(&mut self, other: StyleSheet) {
        self.blocks.extend(other.blocks);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Top-level rules, skipping comments and at-rules.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Rule(rule) => Some(rule),
            _ => None,
        })
    }

    /// Finds the first top-level rule whose selector list contains `selector`.
    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.rules()
            .find(|rule| rule.selectors.iter().any(|s| s == selector))
    }

    pub fn to_css(&self) -> String {
        let mut out = String::new();
        write_blocks(&mut out, &self.blocks, 0);
        out
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn write_blocks(out: &mut String, blocks: &[Block], depth: usize) {
    let mut previous: Option<&Block> = None;
    for block in blocks {
        if previous.is_some_and(|p| !matches!(p, Block::Comment(_))) {
            out.push('\n');
        }
        write_block(out, block, depth);
        previous = Some(block);
    }
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    let indent = "  ".repeat(depth);
    match block {
        Block::Rule(rule) => {
            let separator = format!(",\n{indent}");
            let _ = writeln!(out, "{indent}{} {{", rule.selectors.join(&separator));
            for declaration in &rule.declarations {
                let _ = writeln!(
                    out,
                    "{indent}  {}: {};",
                    declaration.property, declaration.value
                );
            }
            let _ = writeln!(out, "{indent}}}");
        }
        Block::AtRule {
            name,
            prelude,
            blocks,
        } => {
            let _ = writeln!(out, "{indent}@{name} {prelude} {{");
            write_blocks(out, blocks, depth + 1);
            let _ = writeln!(out, "{indent}}}");
        }
        Block::Comment(text) => {
            let _ = writeln!(out, "{indent}/* {text} */");
        }
    }
}
