//! The catalog of modular scale ratios.
//!
//! Every ratio is a musical interval. Scales are selected from this fixed
//! list, never constructed from arbitrary numbers:
//!
//! | Name             | Slug               | Ratio |
//! |------------------|--------------------|-------|
//! | Minor Second     | `minor-second`     | 1.067 |
//! | Major Second     | `major-second`     | 1.125 |
//! | Minor Third      | `minor-third`      | 1.2   |
//! | Major Third      | `major-third`      | 1.25  |
//! | Perfect Fourth   | `perfect-fourth`   | 1.333 |
//! | Augmented Fourth | `augmented-fourth` | 1.414 |
//! | Perfect Fifth    | `perfect-fifth`    | 1.5   |
//! | Minor Sixth      | `minor-sixth`      | 1.6   |
//! | Major Sixth      | `major-sixth`      | 1.667 |
//! | Minor Seventh    | `minor-seventh`    | 1.778 |
//! | Major Seventh    | `major-seventh`    | 1.875 |
//! | Octave           | `octave`           | 2.0   |

use crate::error::ScaleError;
use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A named multiplicative growth factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModularScale {
    pub name: &'static str,
    pub slug: &'static str,
    pub ratio: f64,
}

impl ModularScale {
    pub const MINOR_SECOND: Self = Self::new("Minor Second", "minor-second", 1.067);
    pub const MAJOR_SECOND: Self = Self::new("Major Second", "major-second", 1.125);
    pub const MINOR_THIRD: Self = Self::new("Minor Third", "minor-third", 1.2);
    pub const MAJOR_THIRD: Self = Self::new("Major Third", "major-third", 1.25);
    pub const PERFECT_FOURTH: Self = Self::new("Perfect Fourth", "perfect-fourth", 1.333);
    pub const AUGMENTED_FOURTH: Self = Self::new("Augmented Fourth", "augmented-fourth", 1.414);
    pub const PERFECT_FIFTH: Self = Self::new("Perfect Fifth", "perfect-fifth", 1.5);
    pub const MINOR_SIXTH: Self = Self::new("Minor Sixth", "minor-sixth", 1.6);
    pub const MAJOR_SIXTH: Self = Self::new("Major Sixth", "major-sixth", 1.667);
    pub const MINOR_SEVENTH: Self = Self::new("Minor Seventh", "minor-seventh", 1.778);
    pub const MAJOR_SEVENTH: Self = Self::new("Major Seventh", "major-seventh", 1.875);
    pub const OCTAVE: Self = Self::new("Octave", "octave", 2.0);

    const fn new(name: &'static str, slug: &'static str, ratio: f64) -> Self {
        Self { name, slug, ratio }
    }

    /// All catalog entries in ascending ratio order.
    pub fn catalog() -> &'static [ModularScale] {
        &CATALOG
    }

    /// Finds a scale by slug or display name, ignoring case.
    ///
    /// `"Perfect Fourth"`, `"perfect-fourth"` and `"PERFECT_FOURTH"` all
    /// resolve to [`ModularScale::PERFECT_FOURTH`].
    pub fn lookup(name: &str) -> Result<Self, ScaleError> {
        let key: String = name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        SCALES_BY_SLUG
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ScaleError::UnknownScale(name.to_string()))
    }
}

impl fmt::Display for ModularScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.ratio)
    }
}

// Scales travel through config files and JSON exports by slug.
impl Serialize for ModularScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug)
    }
}

impl<'de> Deserialize<'de> for ModularScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::lookup(&name).map_err(serde::de::Error::custom)
    }
}

static CATALOG: [ModularScale; 12] = [
    ModularScale::MINOR_SECOND,
    ModularScale::MAJOR_SECOND,
    ModularScale::MINOR_THIRD,
    ModularScale::MAJOR_THIRD,
    ModularScale::PERFECT_FOURTH,
    ModularScale::AUGMENTED_FOURTH,
    ModularScale::PERFECT_FIFTH,
    ModularScale::MINOR_SIXTH,
    ModularScale::MAJOR_SIXTH,
    ModularScale::MINOR_SEVENTH,
    ModularScale::MAJOR_SEVENTH,
    ModularScale::OCTAVE,
];

static SCALES_BY_SLUG: phf::Map<&'static str, ModularScale> = phf_map! {
    "minor-second" => ModularScale::MINOR_SECOND,
    "major-second" => ModularScale::MAJOR_SECOND,
    "minor-third" => ModularScale::MINOR_THIRD,
    "major-third" => ModularScale::MAJOR_THIRD,
    "perfect-fourth" => ModularScale::PERFECT_FOURTH,
    "augmented-fourth" => ModularScale::AUGMENTED_FOURTH,
    "perfect-fifth" => ModularScale::PERFECT_FIFTH,
    "minor-sixth" => ModularScale::MINOR_SIXTH,
    "major-sixth" => ModularScale::MAJOR_SIXTH,
    "minor-seventh" => ModularScale::MINOR_SEVENTH,
    "major-seventh" => ModularScale::MAJOR_SEVENTH,
    "octave" => ModularScale::OCTAVE,
};
