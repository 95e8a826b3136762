//! Scale enumeration, unit formatting and labelled size sets.
//!
//! The pipeline is three pure functions:
//!
//! 1. [`generate_scale`] enumerates `base * ratio^i` over an exponent range
//! 2. [`format_value`] rounds and suffixes one raw size
//! 3. [`generate_sizes_from_modular_system`] zips both domains against their
//!    label lists
//!
//! Nothing here validates its input. A ratio of zero or a negative step count
//! passes straight through to the arithmetic; see
//! [`ModularSystemConfig::validate`] for the gate.

use crate::types::{ModularSystemConfig, SizeUnit, format_number};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Root font size assumed by `rem` conversion, in pixels.
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// Font size labels, smallest first. `base` sits on the `ratio^0` term.
pub const FONT_LABELS: [&str; 10] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
];

/// Spacing labels, smallest first. `xs` sits on the `ratio^0` term.
pub const SPACING_LABELS: [&str; 10] = [
    "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
];

/// Which exponents [`generate_scale`] enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `0..=steps`
    Up,
    /// `-2..=steps`
    Both,
}

impl Direction {
    fn first_exponent(self) -> i32 {
        match self {
            Direction::Up => 0,
            Direction::Both => -2,
        }
    }
}

/// Enumerates `base_size * ratio^i` in ascending exponent order.
///
/// `Up` yields `steps + 1` values and `Both` yields `steps + 3`. An exponent
/// range that is empty (negative `steps`) yields an empty vector.
pub fn generate_scale(base_size: f64, ratio: f64, steps: i32, direction: Direction) -> Vec<f64> {
    (direction.first_exponent()..=steps)
        .map(|i| base_size * ratio.powi(i))
        .collect()
}

/// Formats a pixel size in the requested unit.
///
/// - `px`: two decimal places
/// - `rem`: divided by [`ROOT_FONT_SIZE`], three decimal places
/// - `em`: divided by `base_for_em` (default [`ROOT_FONT_SIZE`]), three decimal places
pub fn format_value(size: f64, unit: SizeUnit, base_for_em: Option<f64>) -> String {
    match unit {
        SizeUnit::Px => format!("{}px", format_number(round_to(size, 2))),
        SizeUnit::Rem => format!("{}rem", format_number(round_to(size / ROOT_FONT_SIZE, 3))),
        SizeUnit::Em => {
            let base = base_for_em.unwrap_or(ROOT_FONT_SIZE);
            format!("{}em", format_number(round_to(size / base, 3)))
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// An ordered label → formatted size mapping.
///
/// Iteration and serialization follow label order. Labels the scale was too
/// short to reach are simply absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SizeMap {
    entries: Vec<(&'static str, String)>,
}

impl SizeMap {
    fn from_scale(labels: &[&'static str], raw: &[f64], unit: SizeUnit, base: f64) -> Self {
        let entries = labels
            .iter()
            .zip(raw)
            .map(|(label, size)| (*label, format_value(*size, unit, Some(base))))
            .collect();
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(label, value)| (*label, value.as_str()))
    }
}

impl Serialize for SizeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Font and spacing sizes produced from one [`ModularSystemConfig`].
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSizes {
    pub font_sizes: SizeMap,
    pub spacing: SizeMap,
}

/// Builds both labelled size sets from a configuration.
///
/// Font sizes come from a `Both` scale of `steps - 3` steps, formatted
/// relative to `base_font_size`; spacing from an `Up` scale of `steps - 1`
/// steps, formatted relative to `base_spacing`.
pub fn generate_sizes_from_modular_system(config: &ModularSystemConfig) -> GeneratedSizes {
    // values past the last label are never kept, so stop enumerating there
    let font_steps = config
        .steps
        .saturating_sub(3)
        .min(FONT_LABELS.len() as i32 - 3);
    let spacing_steps = config
        .steps
        .saturating_sub(1)
        .min(SPACING_LABELS.len() as i32 - 1);

    let font_raw = generate_scale(
        config.base_font_size,
        config.font_scale.ratio,
        font_steps,
        Direction::Both,
    );
    let spacing_raw = generate_scale(
        config.base_spacing,
        config.spacing_scale.ratio,
        spacing_steps,
        Direction::Up,
    );

    let sizes = GeneratedSizes {
        font_sizes: SizeMap::from_scale(
            &FONT_LABELS,
            &font_raw,
            config.font_unit,
            config.base_font_size,
        ),
        spacing: SizeMap::from_scale(
            &SPACING_LABELS,
            &spacing_raw,
            config.spacing_unit,
            config.base_spacing,
        ),
    };

    log::debug!(
        "generated {} font sizes ({}) and {} spacing sizes ({})",
        sizes.font_sizes.len(),
        config.font_scale.slug,
        sizes.spacing.len(),
        config.spacing_scale.slug,
    );

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to(39.0625, 2), 39.06);
        assert_eq!(round_to(0.6403, 3), 0.64);
    }

    #[test]
    fn test_size_map_skips_labels_past_the_scale() {
        let map = SizeMap::from_scale(&SPACING_LABELS, &[16.0, 20.0], SizeUnit::Px, 16.0);
        assert_eq!(map.len(), 2);
        assert_eq!(map.labels().collect::<Vec<_>>(), vec!["xs", "sm"]);
        assert!(!map.contains_key("md"));
    }

    #[test]
    fn test_size_map_drops_values_past_the_labels() {
        let raw: Vec<f64> = (0..15).map(f64::from).collect();
        let map = SizeMap::from_scale(&FONT_LABELS, &raw, SizeUnit::Px, 16.0);
        assert_eq!(map.len(), FONT_LABELS.len());
        assert_eq!(map.get("6xl"), Some("9px"));
    }
}
