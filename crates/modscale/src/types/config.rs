use super::{ModularScale, SizeUnit};
use crate::error::ScaleError;
use serde::{Deserialize, Serialize};

/// Input to [`generate_sizes_from_modular_system`](crate::generate_sizes_from_modular_system).
///
/// Font and spacing scales are independent: each has its own base, ratio
/// and output unit. `steps` is shared; the font path enumerates `steps - 3`
/// steps above its base (plus two below) and the spacing path `steps - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModularSystemConfig {
    /// Font size at the scale's zero point, in pixels.
    pub base_font_size: f64,
    /// Spacing at the scale's zero point, in pixels.
    pub base_spacing: f64,
    pub font_scale: ModularScale,
    pub spacing_scale: ModularScale,
    pub steps: i32,
    pub font_unit: SizeUnit,
    pub spacing_unit: SizeUnit,
}

impl Default for ModularSystemConfig {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            base_spacing: 16.0,
            font_scale: ModularScale::MAJOR_THIRD,
            spacing_scale: ModularScale::PERFECT_FOURTH,
            steps: 13,
            font_unit: SizeUnit::Rem,
            spacing_unit: SizeUnit::Rem,
        }
    }
}

impl ModularSystemConfig {
    pub const MIN_STEPS: i32 = 3;
    pub const MAX_STEPS: i32 = 64;

    pub fn with_base_font_size(mut self, size: f64) -> Self {
        self.base_font_size = size;
        self
    }

    pub fn with_base_spacing(mut self, size: f64) -> Self {
        self.base_spacing = size;
        self
    }

    pub fn with_font_scale(mut self, scale: ModularScale) -> Self {
        self.font_scale = scale;
        self
    }

    pub fn with_spacing_scale(mut self, scale: ModularScale) -> Self {
        self.spacing_scale = scale;
        self
    }

    pub fn with_steps(mut self, steps: i32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_font_unit(mut self, unit: SizeUnit) -> Self {
        self.font_unit = unit;
        self
    }

    pub fn with_spacing_unit(mut self, unit: SizeUnit) -> Self {
        self.spacing_unit = unit;
        self
    }

    /// Rejects configurations that would produce NaN, sign-alternating or
    /// empty scales.
    ///
    /// Generation does not call this; it is the gate used by whoever stores a
    /// configuration.
    pub fn validate(&self) -> Result<(), ScaleError> {
        check_positive("baseFontSize", self.base_font_size)?;
        check_positive("baseSpacing", self.base_spacing)?;
        check_positive("fontScale ratio", self.font_scale.ratio)?;
        check_positive("spacingScale ratio", self.spacing_scale.ratio)?;
        if self.steps < Self::MIN_STEPS {
            return Err(ScaleError::InvalidConfig(format!(
                "steps must be at least {}, got {}",
                Self::MIN_STEPS,
                self.steps
            )));
        }
        if self.steps > Self::MAX_STEPS {
            return Err(ScaleError::InvalidConfig(format!(
                "steps must be at most {}, got {}",
                Self::MAX_STEPS,
                self.steps
            )));
        }
        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ScaleError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScaleError::InvalidConfig(format!(
            "{field} must be a positive finite number, got {value}"
        )))
    }
}
