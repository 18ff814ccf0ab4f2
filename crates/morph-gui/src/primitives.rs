use crate::color::Color;
use glam::{Affine2, Vec2};

/// A 2D point in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl From<Point> for Vec2 {
    fn from(point: Point) -> Self {
        Vec2::new(point.x, point.y)
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center_size(center: Point, size: [f32; 2]) -> Self {
        let half = [size[0] * 0.5, size[1] * 0.5];
        Self {
            min: [center.x - half[0], center.y - half[1]],
            max: [center.x + half[0], center.y + half[1]],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
        )
    }

    /// Same center and height, different width
    pub fn with_width_centered(&self, width: f32) -> Self {
        Self::from_center_size(self.center(), [width, self.height()])
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min[0]
            && point.x <= self.max[0]
            && point.y >= self.min[1]
            && point.y <= self.max[1]
    }
}

/// Accumulated 2D transform (scale and rotation around a pivot, then translation)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub affine: Affine2,
}

impl Transform2D {
    pub const IDENTITY: Self = Self {
        affine: Affine2::IDENTITY,
    };

    /// Uniform scale and rotation (radians, clockwise positive) around `pivot`
    pub fn around(pivot: Point, scale: f32, rotation: f32) -> Self {
        let pivot = Vec2::from(pivot);
        let affine = Affine2::from_translation(pivot)
            * Affine2::from_angle(rotation)
            * Affine2::from_scale(Vec2::splat(scale))
            * Affine2::from_translation(-pivot);
        Self { affine }
    }

    /// Apply `self` after `parent` (child transforms are nested inside their parent)
    pub fn then_parent(self, parent: Transform2D) -> Self {
        Self {
            affine: parent.affine * self.affine,
        }
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let p = self.affine.transform_point2(Vec2::from(point));
        Point::new(p.x, p.y)
    }
}

/// Stroke definition with width and color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Drop shadow drawn underneath a rounded rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    /// Multiplied with the color alpha
    pub opacity: f32,
    pub offset: [f32; 2],
    /// Blur radius in pixels
    pub radius: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.0, 0.0, 0.0),
            opacity: 0.5,
            offset: [0.0, 3.0],
            radius: 1.0,
        }
    }
}

/// Rectangle with rounded corners, fill, and optional shadow
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRect {
    pub rect: Rect,
    pub corner_radius: f32,
    pub fill: Color,
    pub shadow: Option<Shadow>,
}

/// Stroked circular arc, like a progress ring segment
#[derive(Clone, Debug, PartialEq)]
pub struct ArcShape {
    pub center: Point,
    pub radius: f32,
    /// Start angle in radians, 0 = +x axis, clockwise positive
    pub start_angle: f32,
    /// Sweep in radians
    pub sweep: f32,
    pub stroke: Stroke,
}

/// Single line of centered text
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    pub rect: Rect,
    pub text: String,
    pub font_size: f32,
    pub color: Color,
}

/// Shapes that can be rendered
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(StyledRect),
    Arc(ArcShape),
    Text(TextShape),
}

/// A shape with the transform and opacity accumulated from the layer tree
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedShape {
    pub shape: Shape,
    pub transform: Transform2D,
    pub opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_width_centered_keeps_center() {
        let rect = Rect::from_min_size([10.0, 10.0], [320.0, 45.0]);
        let narrow = rect.with_width_centered(45.0);
        assert_eq!(narrow.center(), rect.center());
        assert_eq!(narrow.width(), 45.0);
        assert_eq!(narrow.height(), 45.0);
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::from_min_size([0.0, 0.0], [10.0, 10.0]);
        assert!(rect.contains(Point::new(0.0, 10.0)));
        assert!(!rect.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn test_transform_around_pivot() {
        let pivot = Point::new(50.0, 50.0);
        let t = Transform2D::around(pivot, 2.0, 0.0);
        assert_eq!(t.transform_point(pivot), pivot);
        assert_eq!(t.transform_point(Point::new(60.0, 50.0)), Point::new(70.0, 50.0));
    }

    #[test]
    fn test_transform_nesting() {
        let parent = Transform2D::around(Point::zero(), 2.0, 0.0);
        let child = Transform2D::around(Point::zero(), 1.5, 0.0);
        let combined = child.then_parent(parent);
        let p = combined.transform_point(Point::new(1.0, 0.0));
        assert!((p.x - 3.0).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }
}
