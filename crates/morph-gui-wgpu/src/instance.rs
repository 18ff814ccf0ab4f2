use morph_gui::{ArcShape, Color, PositionedShape, StyledRect};

/// Filled rounded rectangle
pub const KIND_RECT: u32 = 0;
/// Stroked circular arc
pub const KIND_ARC: u32 = 1;
/// Blurred rounded rectangle drawn under a rect
pub const KIND_SHADOW: u32 = 2;

/// Instance data for SDF rendering.
///
/// Geometry is given in untransformed window pixels; the affine columns place
/// it on screen. The fragment shader evaluates the distance field in local
/// space, so rotation and scale keep analytic anti-aliasing.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeInstance {
    /// Center in untransformed window pixels
    pub center: [f32; 2],
    /// Half-size of the quad before padding
    pub half_size: [f32; 2],
    /// First column of the affine matrix
    pub x_axis: [f32; 2],
    /// Second column of the affine matrix
    pub y_axis: [f32; 2],
    pub translation: [f32; 2],
    /// Fill color with opacity applied (Unorm8x4)
    pub fill_color: [u8; 4],
    /// Stroke color with opacity applied (Unorm8x4)
    pub stroke_color: [u8; 4],
    pub stroke_width: f32,
    /// One of the `KIND_*` constants
    pub kind: u32,
    /// Kind specific:
    /// rect = [corner radius, 0, 0, 0],
    /// shadow = [corner radius, blur radius, 0, 0],
    /// arc = [radius, start angle, sweep, 0]
    pub params: [f32; 4],
}

fn rgba8(color: Color, opacity: f32) -> [u8; 4] {
    color.with_alpha(color.a * opacity).to_rgba8()
}

impl ShapeInstance {
    fn positioned(positioned: &PositionedShape, center: [f32; 2], half_size: [f32; 2]) -> Self {
        let affine = positioned.transform.affine;
        Self {
            center,
            half_size,
            x_axis: affine.matrix2.x_axis.into(),
            y_axis: affine.matrix2.y_axis.into(),
            translation: affine.translation.into(),
            fill_color: [0; 4],
            stroke_color: [0; 4],
            stroke_width: 0.0,
            kind: KIND_RECT,
            params: [0.0; 4],
        }
    }

    /// Fill instance for a rounded rectangle
    pub fn rect(positioned: &PositionedShape, rect: &StyledRect) -> Self {
        let center = rect.rect.center();
        Self {
            fill_color: rgba8(rect.fill, positioned.opacity),
            params: [rect.corner_radius, 0.0, 0.0, 0.0],
            ..Self::positioned(
                positioned,
                [center.x, center.y],
                [rect.rect.width() * 0.5, rect.rect.height() * 0.5],
            )
        }
    }

    /// Shadow instance for a rounded rectangle, if it has one
    pub fn shadow(positioned: &PositionedShape, rect: &StyledRect) -> Option<Self> {
        let shadow = rect.shadow?;
        let center = rect.rect.center();
        let opacity = positioned.opacity * shadow.opacity;
        if opacity <= 0.0 || shadow.color.a <= 0.0 {
            return None;
        }

        Some(Self {
            kind: KIND_SHADOW,
            fill_color: rgba8(shadow.color, opacity),
            params: [rect.corner_radius, shadow.radius.max(0.0), 0.0, 0.0],
            ..Self::positioned(
                positioned,
                [center.x + shadow.offset[0], center.y + shadow.offset[1]],
                [rect.rect.width() * 0.5, rect.rect.height() * 0.5],
            )
        })
    }

    pub fn arc(positioned: &PositionedShape, arc: &ArcShape) -> Self {
        let extent = arc.radius + arc.stroke.width * 0.5;
        Self {
            kind: KIND_ARC,
            stroke_color: rgba8(arc.stroke.color, positioned.opacity),
            stroke_width: arc.stroke.width,
            params: [arc.radius, arc.start_angle, arc.sweep, 0.0],
            ..Self::positioned(positioned, [arc.center.x, arc.center.y], [extent, extent])
        }
    }

    /// Vertex buffer layout for instance attributes
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            1 => Float32x2, // center
            2 => Float32x2, // half_size
            3 => Float32x2, // x_axis
            4 => Float32x2, // y_axis
            5 => Float32x2, // translation
            6 => Unorm8x4,  // fill_color
            7 => Unorm8x4,  // stroke_color
            8 => Float32,   // stroke_width
            9 => Uint32,    // kind
            10 => Float32x4 // params
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_gui::{Point, Rect, Shadow, Shape, Stroke, Transform2D};

    fn positioned(shape: Shape, opacity: f32) -> PositionedShape {
        PositionedShape {
            shape,
            transform: Transform2D::IDENTITY,
            opacity,
        }
    }

    fn styled(shadow: Option<Shadow>) -> StyledRect {
        StyledRect {
            rect: Rect::from_min_size([10.0, 10.0], [180.0, 50.0]),
            corner_radius: 10.0,
            fill: Color::rgba(1.0, 0.0, 0.0, 1.0),
            shadow,
        }
    }

    #[test]
    fn test_instance_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 72);
    }

    #[test]
    fn test_rect_instance_applies_opacity() {
        let rect = styled(None);
        let shape = positioned(Shape::Rect(rect.clone()), 0.5);
        let instance = ShapeInstance::rect(&shape, &rect);

        assert_eq!(instance.kind, KIND_RECT);
        assert_eq!(instance.center, [100.0, 35.0]);
        assert_eq!(instance.half_size, [90.0, 25.0]);
        assert_eq!(instance.fill_color, [255, 0, 0, 128]);
        assert_eq!(instance.params[0], 10.0);
        assert_eq!(instance.x_axis, [1.0, 0.0]);
        assert_eq!(instance.y_axis, [0.0, 1.0]);
    }

    #[test]
    fn test_shadow_instance_is_offset() {
        let rect = styled(Some(Shadow::default()));
        let shape = positioned(Shape::Rect(rect.clone()), 1.0);
        let shadow = ShapeInstance::shadow(&shape, &rect).expect("shadow instance");

        assert_eq!(shadow.kind, KIND_SHADOW);
        assert_eq!(shadow.center, [100.0, 38.0]);
        assert_eq!(shadow.fill_color, [0, 0, 0, 128]);
        assert_eq!(shadow.params[1], 1.0);

        assert!(ShapeInstance::shadow(&shape, &styled(None)).is_none());
    }

    #[test]
    fn test_arc_instance_covers_stroke() {
        let arc = ArcShape {
            center: Point::new(50.0, 50.0),
            radius: 10.0,
            start_angle: 0.0,
            sweep: 1.0,
            stroke: Stroke::new(4.0, Color::rgb(1.0, 1.0, 1.0)),
        };
        let shape = positioned(Shape::Arc(arc.clone()), 1.0);
        let instance = ShapeInstance::arc(&shape, &arc);

        assert_eq!(instance.kind, KIND_ARC);
        assert_eq!(instance.half_size, [12.0, 12.0]);
        assert_eq!(instance.stroke_width, 4.0);
        assert_eq!(instance.params, [10.0, 0.0, 1.0, 0.0]);
    }
}
