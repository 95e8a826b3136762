//! Measures: the values recipe options are written in.
//!
//! A measure is one of:
//!
//! - a concrete [`Length`]: `1.5rem`, `250px`, `50%`
//! - a spacing token: `space:md`, rendered as `var(--space-md)`
//! - a font-size token: `text:lg`, rendered as `var(--text-lg)`
//! - a keyword: `auto`, `none`, `inherit`, or a unitless `0`
//! - a function expression kept verbatim: `min(60ch, 100%)`, `var(--gutter)`
//!
//! `var(--space-*)` and `var(--text-*)` references to known labels are read
//! back as tokens, so a measure survives a display/parse round trip.

use crate::error::RecipeError;
use modscale::parser::units::parse_length;
use modscale::{FONT_LABELS, Length, SPACING_LABELS};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, satisfy},
    combinator::{all_consuming, map, map_opt, not, recognize},
    sequence::{delimited, pair, preceded, terminated},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Measure {
    Length(Length),
    Space(&'static str),
    Text(&'static str),
    Keyword(String),
    Expr(String),
}

impl Measure {
    pub const AUTO: &'static str = "auto";

    /// A spacing token, checked against the spacing labels.
    pub fn space(label: &str) -> Result<Self, RecipeError> {
        spacing_label(label)
            .map(Measure::Space)
            .ok_or_else(|| RecipeError::InvalidMeasure(format!("unknown spacing label {label:?}")))
    }

    /// A font-size token, checked against the font labels.
    pub fn text(label: &str) -> Result<Self, RecipeError> {
        font_label(label)
            .map(Measure::Text)
            .ok_or_else(|| RecipeError::InvalidMeasure(format!("unknown font label {label:?}")))
    }

    pub fn keyword(keyword: impl Into<String>) -> Self {
        Measure::Keyword(keyword.into())
    }

    pub fn auto() -> Self {
        Measure::keyword(Self::AUTO)
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Measure::Keyword(k) if k == Self::AUTO)
    }
}

impl From<Length> for Measure {
    fn from(length: Length) -> Self {
        Measure::Length(length)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Length(length) => write!(f, "{length}"),
            Measure::Space(label) => write!(f, "var(--space-{label})"),
            Measure::Text(label) => write!(f, "var(--text-{label})"),
            Measure::Keyword(keyword) => f.write_str(keyword),
            Measure::Expr(expr) => f.write_str(expr),
        }
    }
}

impl FromStr for Measure {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(parse_measure)(s.trim())
            .map(|(_, measure)| measure)
            .map_err(|_| RecipeError::InvalidMeasure(s.to_string()))
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        source.parse().map_err(serde::de::Error::custom)
    }
}

fn spacing_label(label: &str) -> Option<&'static str> {
    SPACING_LABELS.iter().copied().find(|l| *l == label)
}

fn font_label(label: &str) -> Option<&'static str> {
    FONT_LABELS.iter().copied().find(|l| *l == label)
}

fn parse_label(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric())(input)
}

/// Parses a CSS identifier such as `auto` or `flex-start`.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn parse_space_token(input: &str) -> IResult<&str, Measure> {
    map_opt(
        alt((
            preceded(tag("space:"), parse_label),
            delimited(tag("var(--space-"), parse_label, char(')')),
        )),
        |label| spacing_label(label).map(Measure::Space),
    )(input)
}

fn parse_text_token(input: &str) -> IResult<&str, Measure> {
    map_opt(
        alt((
            preceded(tag("text:"), parse_label),
            delimited(tag("var(--text-"), parse_label, char(')')),
        )),
        |label| font_label(label).map(Measure::Text),
    )(input)
}

/// Consumes a balanced parenthesised argument list, including the parens.
fn parse_arguments(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => break,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[i + 1..], &input[..=i]));
                }
            }
            _ if depth == 0 => break,
            _ => {}
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// A unitless `0` stays a keyword so it prints back as written.
fn parse_bare_zero(input: &str) -> IResult<&str, Measure> {
    map(
        terminated(
            tag("0"),
            not(satisfy(|c: char| c.is_ascii_alphanumeric() || c == '.' || c == '%')),
        ),
        |zero: &str| Measure::keyword(zero),
    )(input)
}

fn parse_expr(input: &str) -> IResult<&str, Measure> {
    map(recognize(pair(parse_ident, parse_arguments)), |expr: &str| {
        Measure::Expr(expr.to_string())
    })(input)
}

/// Parses a single measure.
pub fn parse_measure(input: &str) -> IResult<&str, Measure> {
    let input = input.trim_start();
    alt((
        parse_space_token,
        parse_text_token,
        parse_bare_zero,
        map(parse_length, Measure::Length),
        parse_expr,
        map(parse_ident, |ident: &str| Measure::keyword(ident)),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_lengths() {
        assert_eq!(
            "1.5rem".parse::<Measure>().unwrap(),
            Measure::Length(Length::rem(1.5))
        );
    }

    #[test]
    fn test_parses_tokens_in_both_spellings() {
        assert_eq!("space:md".parse::<Measure>().unwrap(), Measure::Space("md"));
        assert_eq!(
            "var(--space-2xl)".parse::<Measure>().unwrap(),
            Measure::Space("2xl")
        );
        assert_eq!("text:base".parse::<Measure>().unwrap(), Measure::Text("base"));
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        assert!("space:base".parse::<Measure>().is_err());
        assert!("text:md".parse::<Measure>().is_err());
        assert!(Measure::space("7xl").is_err());
    }

    #[test]
    fn test_other_variables_stay_expressions() {
        assert_eq!(
            "var(--gutter)".parse::<Measure>().unwrap(),
            Measure::Expr("var(--gutter)".into())
        );
    }

    #[test]
    fn test_nested_functions_are_balanced() {
        let measure: Measure = "min(calc(100% - 2rem), 60ch)".parse().unwrap();
        assert_eq!(measure.to_string(), "min(calc(100% - 2rem), 60ch)");
        assert!("min(100%, 60ch".parse::<Measure>().is_err());
    }

    #[test]
    fn test_keywords() {
        assert!("auto".parse::<Measure>().unwrap().is_auto());
        assert_eq!(
            "none".parse::<Measure>().unwrap(),
            Measure::keyword("none")
        );
    }

    #[test]
    fn test_display_round_trips() {
        for source in ["250px", "0", "0px", "var(--space-md)", "var(--text-lg)", "auto", "min(1rem, 2vw)"] {
            let measure: Measure = source.parse().unwrap();
            assert_eq!(measure.to_string(), source);
        }
    }

    #[test]
    fn test_bare_zero_is_a_keyword() {
        assert_eq!("0".parse::<Measure>().unwrap(), Measure::keyword("0"));
        assert_eq!(
            "0px".parse::<Measure>().unwrap(),
            Measure::Length(Length::px(0.0))
        );
        assert_eq!(
            "0.5rem".parse::<Measure>().unwrap(),
            Measure::Length(Length::rem(0.5))
        );
        assert_eq!(
            "0%".parse::<Measure>().unwrap(),
            Measure::Length(Length::percent(0.0))
        );
    }
}
