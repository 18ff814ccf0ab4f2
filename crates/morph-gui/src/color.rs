/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Convert a single sRGB channel (0.0-1.0) to linear space
const fn srgb_channel_to_linear(x: f32) -> f32 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        // Approximate ((x + 0.055) / 1.055)^2.4
        let t = (x + 0.055) / 1.055;
        t * t * (0.5870 * t + 0.4130)
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            srgb_channel_to_linear(r as f32 / 255.0),
            srgb_channel_to_linear(g as f32 / 255.0),
            srgb_channel_to_linear(b as f32 / 255.0),
            a as f32 / 255.0,
        )
    }

    /// Convert sRGB color with float channels (0.0-1.0) to linear space
    ///
    /// Handy for colors written down as `red: 0.12, green: 0.69, blue: 0.11`.
    #[inline]
    pub const fn srgb_f32(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(
            srgb_channel_to_linear(r),
            srgb_channel_to_linear(g),
            srgb_channel_to_linear(b),
            1.0,
        )
    }

    /// Same color with alpha replaced
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Channels quantized to bytes, clamped to [0, 255]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.a * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

/// CSS color constants
pub mod css {
    use super::Color;

    pub const BLACK: Color = Color::srgba(0, 0, 0, 255);
    pub const DARK_GRAY: Color = Color::srgba(85, 85, 85, 255);
    pub const GRAY: Color = Color::srgba(128, 128, 128, 255);
    pub const GREEN: Color = Color::srgba(0, 128, 0, 255);
    pub const SILVER: Color = Color::srgba(192, 192, 192, 255);
    pub const WHITE: Color = Color::srgba(255, 255, 255, 255);
}

/// Catppuccin color palette
pub mod catppuccin {
    pub mod mocha {
        use crate::color::Color;

        pub const BASE: Color = Color::srgba(30, 30, 46, 255);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgba_endpoints() {
        assert_eq!(css::BLACK, Color::rgb(0.0, 0.0, 0.0));
        let white = css::WHITE;
        assert!((white.r - 1.0).abs() < 1e-3);
        assert_eq!(white.a, 1.0);
    }

    #[test]
    fn test_to_rgba8_clamps() {
        let c = Color::rgba(1.5, -0.2, 0.5, 1.0);
        assert_eq!(c.to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_srgb_f32_matches_u8_variant() {
        let a = Color::srgb_f32(1.0, 0.0, 0.0);
        let b = Color::srgba(255, 0, 0, 255);
        assert!((a.r - b.r).abs() < 1e-6);
        assert_eq!(a.g, 0.0);
    }
}
