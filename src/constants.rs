// Web front-end constants. Physics tuning lives in `backdrop_core::constants`.

// Element the backdrop mounts onto when the module starts
pub const CANVAS_ELEMENT_ID: &str = "backdrop-canvas";

// Frame statistics are logged (debug) once per this many frames
pub const STATS_LOG_INTERVAL_FRAMES: u64 = 600;

// Scroll jumps larger than this (CSS px) are logged, e.g. anchor navigation
pub const LARGE_SCROLL_JUMP_PX: f32 = 400.0;
