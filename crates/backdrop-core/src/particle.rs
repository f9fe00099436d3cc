use crate::constants::*;
use crate::palette::{Rgb, PALETTE};
use glam::Vec2;
use rand::prelude::*;

/// One point of light in the backdrop. Positions are in document space.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Radius drawn on the last frame; rederived from `base_radius` each frame.
    pub radius: f32,
    pub base_radius: f32,
    pub velocity: Vec2,
    pub base_velocity: Vec2,
    pub color: Rgb,
    pub alpha: f32,
}

impl Particle {
    pub fn new(
        position: Vec2,
        base_velocity: Vec2,
        base_radius: f32,
        color: Rgb,
        alpha: f32,
    ) -> Self {
        Self {
            position,
            radius: base_radius,
            base_radius,
            velocity: base_velocity,
            base_velocity,
            color,
            alpha,
        }
    }

    /// Random particle inside `[0, width) x [top, top + height)`.
    ///
    /// Velocity starts at the resting drift so an undisturbed particle moves
    /// by exactly `base_velocity` per tick.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, top: f32, height: f32) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * width, top + rng.gen::<f32>() * height);
        let drift = Vec2::new(
            (rng.gen::<f32>() - 0.5) * DRIFT_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * DRIFT_SPEED_SPAN,
        );
        let base_radius = BASE_RADIUS_MIN + rng.gen::<f32>() * BASE_RADIUS_SPAN;
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        let alpha = ALPHA_MIN + rng.gen::<f32>() * ALPHA_SPAN;
        Self::new(position, drift, base_radius, color, alpha)
    }
}
