use thiserror::Error;

/// Rejections raised when building a [`crate::FieldConfig`] by hand.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    EmptyPopulation,
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("glow intensity must lie in [0, 1], got {0}")]
    GlowIntensityOutOfRange(f32),
    #[error("viewport must be finite with positive size, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
