//! Solid color images
//!
//! Renderers use these as placeholder textures, and controls can hand them
//! out as background images for a given state.

use crate::color::Color;

/// CPU-side RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Wrap an existing RGBA8 buffer
    ///
    /// Returns `None` if the buffer does not hold exactly `width * height` pixels.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = byte_len(width, height)?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image of the given size filled with `color`
    ///
    /// Returns `None` when no drawable image can be produced: an empty size,
    /// or one whose pixel buffer would not fit in memory.
    pub fn from_color(color: Color, size: [u32; 2]) -> Option<Self> {
        let [width, height] = size;
        if width == 0 || height == 0 {
            return None;
        }
        let len = byte_len(width, height)?;
        let texel = color.to_rgba8();
        let pixels = texel.iter().copied().cycle().take(len).collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 rows, tightly packed
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.pixels[offset..offset + 4];
        Some([p[0], p[1], p[2], p[3]])
    }
}

fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
        .filter(|len| *len <= isize::MAX as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_color_fills_every_pixel() {
        let image = Image::from_color(Color::rgba(1.0, 0.0, 0.0, 1.0), [3, 2])
            .expect("3x2 swatch should be drawable");
        assert_eq!(image.pixels().len(), 24);
        assert_eq!(image.pixel(2, 1), Some([255, 0, 0, 255]));
        assert_eq!(image.pixel(3, 0), None);
    }

    #[test]
    fn test_empty_size_yields_none() {
        assert!(Image::from_color(Color::transparent(), [0, 10]).is_none());
        assert!(Image::from_color(Color::transparent(), [10, 0]).is_none());
    }

    #[test]
    fn test_from_rgba8_checks_length() {
        assert!(Image::from_rgba8(1, 1, vec![0; 4]).is_some());
        assert!(Image::from_rgba8(2, 1, vec![0; 4]).is_none());
    }
}
