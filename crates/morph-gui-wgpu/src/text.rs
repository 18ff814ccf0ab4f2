//! Text rasterization with cosmic-text
//!
//! Titles are short single lines, so each distinct (text, size) pair is
//! rasterized once into its own white RGBA8 image; the vertex color tints it.

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, SwashCache};
use morph_gui::Image;

/// Line height relative to the font size
const LINE_HEIGHT_FACTOR: f32 = 1.2;

pub struct TextRasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRasterizer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Rasterize a single line of text at `px_size` pixels
    ///
    /// Returns `None` for empty text or when shaping produced no glyphs.
    pub fn rasterize(&mut self, text: &str, px_size: f32) -> Option<Image> {
        if text.is_empty() || px_size <= 0.0 {
            return None;
        }

        let line_height = (px_size * LINE_HEIGHT_FACTOR).ceil();
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(px_size, line_height));
        buffer.set_size(&mut self.font_system, None, Some(line_height));
        buffer.set_text(
            &mut self.font_system,
            text,
            &Attrs::new(),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let width = buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0_f32, f32::max)
            .ceil() as u32;
        let height = line_height as u32;
        if width == 0 || height == 0 {
            log::trace!("text {:?} produced no glyphs", text);
            return None;
        }

        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            cosmic_text::Color::rgba(255, 255, 255, 255),
            |x, y, w, h, color| {
                let alpha = color.a();
                if alpha == 0 {
                    return;
                }
                for py in y.max(0)..(y + h as i32).min(height as i32) {
                    for px in x.max(0)..(x + w as i32).min(width as i32) {
                        let offset = (py as usize * width as usize + px as usize) * 4;
                        let texel = &mut pixels[offset..offset + 4];
                        texel[..3].copy_from_slice(&[255, 255, 255]);
                        texel[3] = texel[3].max(alpha);
                    }
                }
            },
        );

        Image::from_rgba8(width, height, pixels)
    }
}

impl Default for TextRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRasterizer").finish_non_exhaustive()
    }
}

/// Vertex for textured text quads
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    /// Tint with opacity applied (Unorm8x4)
    pub color: [u8; 4],
}

impl TextVertex {
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            0 => Float32x2,
            1 => Float32x2,
            2 => Unorm8x4
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TextVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_not_rasterized() {
        let mut rasterizer = TextRasterizer::new();
        assert!(rasterizer.rasterize("", 18.0).is_none());
        assert!(rasterizer.rasterize("GO", 0.0).is_none());
    }

    #[test]
    fn test_text_vertex_size() {
        assert_eq!(std::mem::size_of::<TextVertex>(), 20);
    }
}
