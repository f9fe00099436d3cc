// Fixed backdrop palette and CSS colour formatting for the canvas.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const PALETTE: [Rgb; 4] = [
    Rgb(0x6C, 0x63, 0xFF), // violet
    Rgb(0xFF, 0x6B, 0x6B), // coral
    Rgb(0x4E, 0xCD, 0xC4), // teal
    Rgb(0x45, 0xB7, 0xD1), // sky
];

impl Rgb {
    /// `#rrggbb`, suitable for `fillStyle` combined with `globalAlpha`.
    pub fn css_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// `#rrggbbaa` with the alpha byte floored from `alpha * 255`.
    pub fn css_hex_alpha(self, alpha: f32) -> String {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).floor() as u8;
        format!("#{:02x}{:02x}{:02x}{:02x}", self.0, self.1, self.2, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formats_are_lowercase_and_padded() {
        assert_eq!(PALETTE[0].css_hex(), "#6c63ff");
        assert_eq!(Rgb(1, 2, 3).css_hex_alpha(0.0), "#01020300");
        assert_eq!(Rgb(1, 2, 3).css_hex_alpha(1.0), "#010203ff");
        assert_eq!(Rgb(1, 2, 3).css_hex_alpha(0.5), "#0102037f");
    }

    #[test]
    fn alpha_outside_unit_range_is_clamped() {
        assert_eq!(Rgb(0, 0, 0).css_hex_alpha(3.0), "#000000ff");
        assert_eq!(Rgb(0, 0, 0).css_hex_alpha(-1.0), "#00000000");
    }
}
