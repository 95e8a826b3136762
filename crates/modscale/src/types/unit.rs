//! Units and lengths.
//!
//! [`SizeUnit`] is the narrow set the scale formatter emits (`px`, `rem`,
//! `em`). [`Unit`] is the wider set a layout length may carry, and
//! [`Length`] pairs a value with one of them.

use crate::error::ScaleError;
use crate::parser::units::parse_length;
use nom::combinator::all_consuming;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output unit for generated scale values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    /// Absolute pixels (the formatter's fallback).
    #[default]
    Px,
    /// Relative to a 16px root font size.
    Rem,
    /// Relative to the domain's base size.
    Em,
}

impl SizeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            SizeUnit::Px => "px",
            SizeUnit::Rem => "rem",
            SizeUnit::Em => "em",
        }
    }

    /// Parses a unit name, treating anything unrecognised as `px`.
    pub fn from_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            log::warn!("unrecognised size unit {s:?}, formatting as px");
            SizeUnit::Px
        })
    }
}

impl FromStr for SizeUnit {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "px" => Ok(SizeUnit::Px),
            "rem" => Ok(SizeUnit::Rem),
            "em" => Ok(SizeUnit::Em),
            _ => Err(ScaleError::InvalidUnit(s.to_string())),
        }
    }
}

impl From<&str> for SizeUnit {
    fn from(s: &str) -> Self {
        Self::from_lenient(s)
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any unit a layout length may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// CSS pixels.
    #[default]
    Px,
    /// Root font size multiples.
    Rem,
    /// Current font size multiples.
    Em,
    /// Percentage of the containing block.
    Percent,
    /// Width of the `0` glyph.
    Ch,
    /// Percentage of viewport width.
    ViewWidth,
    /// Percentage of viewport height.
    ViewHeight,
    /// Grid fraction (fr).
    Fraction,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::Ch => "ch",
            Unit::ViewWidth => "vw",
            Unit::ViewHeight => "vh",
            Unit::Fraction => "fr",
        }
    }
}

impl From<SizeUnit> for Unit {
    fn from(unit: SizeUnit) -> Self {
        match unit {
            SizeUnit::Px => Unit::Px,
            SizeUnit::Rem => Unit::Rem,
            SizeUnit::Em => Unit::Em,
        }
    }
}

/// A number with a unit, e.g. `1.5rem` or `50%`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: Unit::Px,
    };

    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    pub const fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }

    pub const fn em(value: f64) -> Self {
        Self::new(value, Unit::Em)
    }

    pub const fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    pub const fn ch(value: f64) -> Self {
        Self::new(value, Unit::Ch)
    }

    pub const fn vh(value: f64) -> Self {
        Self::new(value, Unit::ViewHeight)
    }

    pub const fn fr(value: f64) -> Self {
        Self::new(value, Unit::Fraction)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(parse_length)(s.trim())
            .map(|(_, length)| length)
            .map_err(|e| ScaleError::InvalidSyntax(format!("{s:?}: {e}")))
    }
}

/// Prints a number in its shortest round-tripping form (`16`, `1.5`).
///
/// Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
