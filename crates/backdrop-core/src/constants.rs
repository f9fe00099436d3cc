// Physics, seeding and drawing constants shared by every preset.

// Viewport width (CSS px) below which the compact preset is used
pub const COMPACT_BREAKPOINT_PX: f32 = 768.0;

// Wraparound
pub const WRAP_MARGIN: f32 = 50.0; // how far past an edge a particle travels before recycling

// Culling
pub const CULL_MARGIN: f32 = 100.0; // extra band above/below the viewport that is still drawn

// Relaxation toward the resting drift: new = KEEP * old + (1 - KEEP) * base
pub const VELOCITY_KEEP: f32 = 0.98;

// Below this pointer distance the attraction direction is undefined
pub const MIN_ATTRACT_DISTANCE: f32 = 1e-6;

// Seeding ranges
pub const BASE_RADIUS_MIN: f32 = 1.0;
pub const BASE_RADIUS_SPAN: f32 = 2.0;
pub const DRIFT_SPEED_SPAN: f32 = 0.8; // each component in [-SPAN/2, SPAN/2)
pub const ALPHA_MIN: f32 = 0.3;
pub const ALPHA_SPAN: f32 = 0.6;

// Glow
pub const GLOW_FALLOFF_EXP: f32 = 1.5;
pub const GLOW_RADIUS_BOOST: f32 = 3.0; // full glow draws at (1 + BOOST) x base radius
pub const HALO_RADIUS_SCALE: f32 = 2.5; // halo extent relative to the boosted radius
pub const HALO_MID_STOP: f32 = 0.6;

// Touch
pub const TOUCH_RELEASE_DELAY_MS: f64 = 50.0;
