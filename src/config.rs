//! Project configuration file.
//!
//! ```toml
//! [system]
//! baseFontSize = 18
//! fontScale = "perfect-fourth"
//! steps = 10
//!
//! [recipes.switcher]
//! limit = 3
//!
//! [recipes.grid-area]
//! className = "page"
//! ```
//!
//! Every section and key is optional; missing values use their defaults.

use crate::error::{AppError, Result};
use modscale::ModularSystemConfig;
use recipes::{DesignSystem, RecipeSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub system: ModularSystemConfig,
    pub recipes: RecipeSet,
}

impl ProjectConfig {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// A validated design system for the configured scale.
    pub fn design_system(&self) -> Result<DesignSystem> {
        let mut system = DesignSystem::default();
        system.replace(self.system.clone())?;
        Ok(system)
    }
}
