//! Per-mount tuning: the two responsive presets and the viewport they are
//! picked from.

use crate::constants::COMPACT_BREAKPOINT_PX;
use crate::error::ConfigError;

/// Visible drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let ok = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !ok {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Narrow viewports (phones): fewer particles, weaker pull.
    Compact,
    Full,
}

impl Preset {
    pub fn for_width(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT_PX {
            Preset::Compact
        } else {
            Preset::Full
        }
    }

    pub fn config(self) -> FieldConfig {
        match self {
            Preset::Compact => FieldConfig {
                particle_count: 300,
                glow_radius: 100.0,
                attract_radius: 150.0,
                attract_strength: 0.03,
                max_speed: 1.5,
                glow_intensity: 0.6,
            },
            Preset::Full => FieldConfig {
                particle_count: 500,
                glow_radius: 150.0,
                attract_radius: 200.0,
                attract_strength: 0.05,
                max_speed: 2.0,
                glow_intensity: 0.8,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub glow_radius: f32,
    pub attract_radius: f32,
    pub attract_strength: f32,
    pub max_speed: f32,
    pub glow_intensity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Preset::Full.config()
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        for (name, value) in [
            ("glow_radius", self.glow_radius),
            ("attract_radius", self.attract_radius),
            ("attract_strength", self.attract_strength),
            ("max_speed", self.max_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.glow_intensity) {
            return Err(ConfigError::GlowIntensityOutOfRange(self.glow_intensity));
        }
        Ok(())
    }
}
