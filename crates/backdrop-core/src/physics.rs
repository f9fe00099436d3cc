//! Per-particle physics: pointer attraction, relaxation, speed clamp,
//! wraparound and glow falloff. All positions here are document space.

use crate::config::FieldConfig;
use crate::constants::*;
use glam::Vec2;

/// Rescale `velocity` so its length is at most `max_speed`.
#[inline]
pub fn clamp_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed > max_speed {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}

/// Exponential smoothing toward the resting drift. A particle already at its
/// drift keeps exactly that velocity.
#[inline]
pub fn relax(velocity: Vec2, base_velocity: Vec2) -> Vec2 {
    velocity + (base_velocity - velocity) * (1.0 - VELOCITY_KEEP)
}

/// Impulse pulling a particle at `position` toward `pointer`, or `None` when
/// the pointer is out of reach or sits exactly on the particle.
#[inline]
pub fn attraction(position: Vec2, pointer: Vec2, cfg: &FieldConfig) -> Option<Vec2> {
    let delta = pointer - position;
    let distance = delta.length();
    if distance >= cfg.attract_radius || distance < MIN_ATTRACT_DISTANCE {
        return None;
    }
    let force = (1.0 - distance / cfg.attract_radius) * cfg.attract_strength;
    Some(delta / distance * force)
}

/// Next-frame velocity for one particle.
pub fn steer(
    velocity: Vec2,
    base_velocity: Vec2,
    position: Vec2,
    pointer: Option<Vec2>,
    cfg: &FieldConfig,
) -> Vec2 {
    let next = match pointer.and_then(|p| attraction(position, p, cfg)) {
        Some(impulse) => velocity + impulse,
        None => relax(velocity, base_velocity),
    };
    clamp_speed(next, cfg.max_speed)
}

/// Recycle a position that left the simulation band to the opposite edge.
///
/// Horizontally the band is the canvas width; vertically it follows the
/// scrolled window `[scroll_y, scroll_y + view_height]`. Both get `margin`.
#[inline]
pub fn wrap(position: Vec2, width: f32, scroll_y: f32, view_height: f32, margin: f32) -> Vec2 {
    let mut p = position;
    if p.x < -margin {
        p.x = width + margin;
    } else if p.x > width + margin {
        p.x = -margin;
    }
    let top = scroll_y - margin;
    let bottom = scroll_y + view_height + margin;
    if p.y < top {
        p.y = bottom;
    } else if p.y > bottom {
        p.y = top;
    }
    p
}

/// Glow strength in `(0, 1]` for a particle `distance` away from the pointer.
#[inline]
pub fn glow_factor(distance: f32, glow_radius: f32) -> Option<f32> {
    if distance < glow_radius {
        Some((1.0 - distance / glow_radius).powf(GLOW_FALLOFF_EXP))
    } else {
        None
    }
}

/// Whether a document-space `y` lies in the band worth drawing.
#[inline]
pub fn is_visible(y: f32, scroll_y: f32, view_height: f32) -> bool {
    y >= scroll_y - CULL_MARGIN && y <= scroll_y + view_height + CULL_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_direction() {
        let v = clamp_speed(Vec2::new(3.0, 4.0), 2.5);
        assert!((v.length() - 2.5).abs() < 1e-5);
        assert!((v.x / v.y - 0.75).abs() < 1e-5);
        assert_eq!(clamp_speed(Vec2::new(0.3, 0.4), 2.5), Vec2::new(0.3, 0.4));
    }

    #[test]
    fn glow_is_monotonic_and_bounded() {
        let r = 150.0;
        let mut last = f32::INFINITY;
        for d in [0.0, 10.0, 50.0, 100.0, 149.0] {
            let g = glow_factor(d, r).unwrap();
            assert!(g <= 1.0 && g > 0.0);
            assert!(g < last || d == 0.0);
            last = g;
        }
        assert_eq!(glow_factor(0.0, r), Some(1.0));
        assert!(glow_factor(150.0, r).is_none());
    }

    #[test]
    fn attraction_points_at_pointer() {
        let cfg = FieldConfig::default();
        let impulse = attraction(Vec2::ZERO, Vec2::new(100.0, 0.0), &cfg).unwrap();
        assert!(impulse.x > 0.0);
        assert_eq!(impulse.y, 0.0);
        assert!((impulse.x - 0.5 * cfg.attract_strength).abs() < 1e-6);
    }

    #[test]
    fn cull_band_includes_margin() {
        assert!(is_visible(-100.0, 0.0, 600.0));
        assert!(!is_visible(-100.5, 0.0, 600.0));
        assert!(is_visible(2700.0, 2000.0, 600.0));
        assert!(!is_visible(2700.5, 2000.0, 600.0));
    }
}
