//! The particle field: population, per-frame physics and painting.

use crate::config::{FieldConfig, Preset, Viewport};
use crate::constants::*;
use crate::error::ConfigError;
use crate::particle::Particle;
use crate::physics;
use crate::surface::{Disc, Halo, Surface};
use glam::Vec2;
use rand::prelude::*;

/// Inputs sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Page scroll offset in CSS px.
    pub scroll_y: f32,
    /// Pointer in document space, if engaged.
    pub pointer: Option<Vec2>,
}

/// Counters for one painted frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldStats {
    pub updated: usize,
    pub drawn: usize,
    pub haloed: usize,
}

pub struct ParticleField {
    preset: Option<Preset>,
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Field using the preset for `viewport`'s width and a fixed seed.
    pub fn with_seed(viewport: Viewport, scroll_y: f32, seed: u64) -> Self {
        Self::build(viewport, scroll_y, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(viewport: Viewport, scroll_y: f32) -> Self {
        Self::build(viewport, scroll_y, StdRng::from_entropy())
    }

    /// Field with an explicit configuration. Resizing never swaps it for a preset.
    pub fn with_config(
        config: FieldConfig,
        viewport: Viewport,
        scroll_y: f32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            preset: None,
            config,
            viewport,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.reseed(scroll_y);
        Ok(field)
    }

    fn build(viewport: Viewport, scroll_y: f32, rng: StdRng) -> Self {
        let preset = Preset::for_width(viewport.width);
        let mut field = Self {
            preset: Some(preset),
            config: preset.config(),
            viewport,
            particles: Vec::new(),
            rng,
        };
        field.reseed(scroll_y);
        log::info!(
            "[field] preset={:?} particles={} viewport={}x{}",
            preset,
            field.particles.len(),
            viewport.width,
            viewport.height
        );
        field
    }

    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Replace the population with a fresh one covering the visible band.
    pub fn reseed(&mut self, scroll_y: f32) {
        let Viewport { width, height } = self.viewport;
        let rng = &mut self.rng;
        self.particles = (0..self.config.particle_count)
            .map(|_| Particle::random(&mut *rng, width, scroll_y, height))
            .collect();
    }

    /// Adopt a new viewport. Crossing the compact/full breakpoint swaps the
    /// preset and reseeds; returns whether that happened.
    pub fn resize(&mut self, viewport: Viewport, scroll_y: f32) -> bool {
        self.viewport = viewport;
        let Some(current) = self.preset else {
            return false;
        };
        let next = Preset::for_width(viewport.width);
        if next == current {
            return false;
        }
        self.preset = Some(next);
        self.config = next.config();
        self.reseed(scroll_y);
        log::info!(
            "[field] preset {:?} -> {:?}, reseeded {} particles",
            current,
            next,
            self.particles.len()
        );
        true
    }

    /// Advance physics one tick without painting.
    pub fn step(&mut self, input: &FrameInput) {
        for p in &mut self.particles {
            advance(p, &self.config, self.viewport, input);
        }
    }

    /// Advance one tick and paint every visible particle.
    pub fn frame<S: Surface>(&mut self, input: &FrameInput, surface: &mut S) -> FieldStats {
        let mut stats = FieldStats::default();
        surface.clear();
        for p in &mut self.particles {
            advance(p, &self.config, self.viewport, input);
            stats.updated += 1;
            p.radius = p.base_radius;
            if !physics::is_visible(p.position.y, input.scroll_y, self.viewport.height) {
                continue;
            }
            if paint(p, &self.config, input, surface) {
                stats.haloed += 1;
            }
            stats.drawn += 1;
        }
        stats
    }
}

fn advance(p: &mut Particle, cfg: &FieldConfig, viewport: Viewport, input: &FrameInput) {
    p.velocity = physics::steer(p.velocity, p.base_velocity, p.position, input.pointer, cfg);
    p.position += p.velocity;
    p.position = physics::wrap(
        p.position,
        viewport.width,
        input.scroll_y,
        viewport.height,
        WRAP_MARGIN,
    );
}

// Returns true when a halo was painted.
fn paint<S: Surface>(
    p: &mut Particle,
    cfg: &FieldConfig,
    input: &FrameInput,
    surface: &mut S,
) -> bool {
    let center = Vec2::new(p.position.x, p.position.y - input.scroll_y);
    let glow = input
        .pointer
        .and_then(|ptr| physics::glow_factor(ptr.distance(p.position), cfg.glow_radius));

    let mut alpha = p.alpha;
    if let Some(glow) = glow {
        p.radius = p.base_radius * (1.0 + glow * GLOW_RADIUS_BOOST);
        alpha = (p.alpha + glow * cfg.glow_intensity).min(1.0);
        surface.fill_halo(&Halo {
            center,
            radius: p.radius * HALO_RADIUS_SCALE,
            color: p.color,
            alpha,
        });
    }
    surface.fill_disc(&Disc {
        center,
        radius: p.radius,
        color: p.color,
        alpha,
    });
    glow.is_some()
}
