//! Design tokens as CSS custom properties.
//!
//! Generated sizes become `:root` variables that recipes reference through
//! [`Measure::Space`](crate::Measure::Space) and
//! [`Measure::Text`](crate::Measure::Text):
//!
//! ```css
//! :root {
//!   --text-xs: 0.64rem;
//!   --text-sm: 0.8rem;
//!   --text-base: 1rem;
//!   /* ... */
//!   --space-xs: 1rem;
//!   /* ... */
//! }
//! ```

use crate::stylesheet::{Rule, StyleSheet};
use modscale::GeneratedSizes;

pub const TEXT_PREFIX: &str = "--text-";
pub const SPACE_PREFIX: &str = "--space-";

/// A single `:root` rule declaring every font size, then every spacing size.
pub fn tokens_stylesheet(sizes: &GeneratedSizes) -> StyleSheet {
    let mut root = Rule::new(":root");
    for (label, value) in sizes.font_sizes.iter() {
        root = root.declare(format!("{TEXT_PREFIX}{label}"), value);
    }
    for (label, value) in sizes.spacing.iter() {
        root = root.declare(format!("{SPACE_PREFIX}{label}"), value);
    }
    StyleSheet::new().with(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modscale::{ModularScale, ModularSystemConfig, generate_sizes_from_modular_system};

    #[test]
    fn test_tokens_follow_label_order() {
        let config = ModularSystemConfig::default()
            .with_font_scale(ModularScale::MAJOR_THIRD)
            .with_spacing_scale(ModularScale::OCTAVE)
            .with_steps(4);
        let sheet = tokens_stylesheet(&generate_sizes_from_modular_system(&config));

        // font: -2..=1, spacing: 0..=3
        insta::assert_snapshot!(sheet.to_css(), @r"
        :root {
          --text-xs: 0.64rem;
          --text-sm: 0.8rem;
          --text-base: 1rem;
          --text-lg: 1.25rem;
          --space-xs: 1rem;
          --space-sm: 2rem;
          --space-md: 4rem;
          --space-lg: 8rem;
        }
        ");
    }

    #[test]
    fn test_empty_sizes_still_render_root() {
        let sheet = tokens_stylesheet(&GeneratedSizes::default());
        assert_eq!(sheet.to_css(), ":root {\n}\n");
    }
}
