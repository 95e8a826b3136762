//! The design-system context shared by everything that renders.
//!
//! A [`DesignSystem`] owns the active [`ModularSystemConfig`] together with
//! the [`GeneratedSizes`] derived from it. Consumers borrow it; the only way
//! to change it is [`DesignSystem::replace`] (or [`DesignSystem::update`],
//! which goes through `replace`), which validates the new configuration and
//! swaps config and sizes together. A rejected configuration leaves the
//! previous state untouched.

use crate::error::RecipeError;
use crate::measure::Measure;
use crate::stylesheet::StyleSheet;
use crate::tokens::tokens_stylesheet;
use modscale::{GeneratedSizes, ModularSystemConfig, generate_sizes_from_modular_system};

#[derive(Debug, Clone, PartialEq)]
pub struct DesignSystem {
    config: ModularSystemConfig,
    sizes: GeneratedSizes,
}

impl DesignSystem {
    pub fn new(config: ModularSystemConfig) -> Result<Self, RecipeError> {
        config.validate()?;
        let sizes = generate_sizes_from_modular_system(&config);
        Ok(Self { config, sizes })
    }

    pub fn config(&self) -> &ModularSystemConfig {
        &self.config
    }

    pub fn sizes(&self) -> &GeneratedSizes {
        &self.sizes
    }

    /// Installs a new configuration and regenerates every size.
    pub fn replace(&mut self, config: ModularSystemConfig) -> Result<&GeneratedSizes, RecipeError> {
        config.validate()?;
        let sizes = generate_sizes_from_modular_system(&config);
        log::debug!(
            "design system updated: font {} @ {}px, spacing {} @ {}px, {} steps",
            config.font_scale.slug,
            config.base_font_size,
            config.spacing_scale.slug,
            config.base_spacing,
            config.steps
        );
        self.config = config;
        self.sizes = sizes;
        Ok(&self.sizes)
    }

    /// Edits a copy of the current configuration and installs it.
    pub fn update(
        &mut self,
        edit: impl FnOnce(&mut ModularSystemConfig),
    ) -> Result<&GeneratedSizes, RecipeError> {
        let mut config = self.config.clone();
        edit(&mut config);
        self.replace(config)
    }

    /// The concrete value a token measure stands for, if it was generated.
    pub fn resolve(&self, measure: &Measure) -> Option<&str> {
        match measure {
            Measure::Space(label) => self.sizes.spacing.get(label),
            Measure::Text(label) => self.sizes.font_sizes.get(label),
            _ => None,
        }
    }

    /// The `:root` custom-property block for the current sizes.
    pub fn tokens(&self) -> StyleSheet {
        tokens_stylesheet(&self.sizes)
    }
}

impl Default for DesignSystem {
    fn default() -> Self {
        let config = ModularSystemConfig::default();
        let sizes = generate_sizes_from_modular_system(&config);
        Self { config, sizes }
    }
}
