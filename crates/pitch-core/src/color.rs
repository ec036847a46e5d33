use palette::{FromColor, LinSrgba, Srgba};

use crate::scene::ColorLinPremul;

// sRGB → Linear premultiplied conversions, kept out of scene.rs for separation of concerns.
impl ColorLinPremul {
    /// Shorthand for an sRGB u8 color; `Color::rgba(255, 255, 255, 255)` is opaque white.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgba_u8([r, g, b, a])
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[inline]
    pub fn rgb_hex(hex: u32) -> Self {
        Self::rgba((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
    }

    /// Create from sRGB u8 RGBA array (premultiplied in linear space).
    #[inline]
    pub fn from_srgba_u8(c: [u8; 4]) -> Self {
        let s = Srgba::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// Convert back to sRGB u8 RGBA array (unpremultiplied).
    #[inline]
    pub fn to_srgba_u8(&self) -> [u8; 4] {
        let (r, g, b) = if self.a > 0.0001 {
            (self.r / self.a, self.g / self.a, self.b / self.a)
        } else {
            (0.0, 0.0, 0.0)
        };

        let lin = LinSrgba::new(r, g, b, self.a);
        let srgb: Srgba = Srgba::from_color(lin);

        [
            (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::Color;

    #[test]
    fn srgb_round_trips_through_linear() {
        for c in [[0x99, 0xcc, 0x00, 0xff], [0x66, 0x99, 0x00, 0xff], [255, 255, 255, 255]] {
            assert_eq!(Color::from_srgba_u8(c).to_srgba_u8(), c);
        }
    }

    #[test]
    fn hex_matches_component_constructor() {
        assert_eq!(Color::rgb_hex(0x99cc00), Color::rgba(0x99, 0xcc, 0x00, 0xff));
    }

    #[test]
    fn transparent_unpremultiplies_to_zero() {
        assert_eq!(Color::rgba(10, 20, 30, 0).to_srgba_u8(), [0, 0, 0, 0]);
    }
}
