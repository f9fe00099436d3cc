use crate::palette::Rgb;
use glam::Vec2;

/// Solid particle disc, in surface (viewport) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Radial glow painted beneath a disc. `alpha` applies at the centre and the
/// gradient fades to transparent at `radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct Halo {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Anything the field can paint a frame onto.
pub trait Surface {
    fn clear(&mut self);
    fn fill_halo(&mut self, halo: &Halo);
    fn fill_disc(&mut self, disc: &Disc);
}
