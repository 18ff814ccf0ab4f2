use crate::layer::Layer;
use crate::primitives::{PositionedShape, Transform2D};

/// Everything a backend needs to draw one frame
#[derive(Debug, Clone, Default)]
pub struct FullOutput {
    /// Shapes in painter's order (later shapes on top)
    pub shapes: Vec<PositionedShape>,
}

impl FullOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the shapes of several layer trees, in the given order
    pub fn from_layers<'a>(layers: impl IntoIterator<Item = &'a Layer>) -> Self {
        let mut output = Self::new();
        for layer in layers {
            output.push_layer(layer);
        }
        output
    }

    /// Append a layer tree on top of what is already collected
    pub fn push_layer(&mut self, layer: &Layer) {
        layer.collect_shapes(Transform2D::IDENTITY, 1.0, &mut self.shapes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Rect, Shape};

    #[test]
    fn test_layers_keep_order() {
        let back = Layer::new("back", Rect::from_min_size([0.0, 0.0], [10.0, 10.0]))
            .with_background(Color::rgb(1.0, 0.0, 0.0));
        let front = Layer::new("front", Rect::from_min_size([5.0, 5.0], [10.0, 10.0]))
            .with_background(Color::rgb(0.0, 0.0, 1.0));

        let output = FullOutput::from_layers([&back, &front]);
        assert_eq!(output.shapes.len(), 2);
        let Shape::Rect(top) = &output.shapes[1].shape else {
            panic!("expected rect");
        };
        assert_eq!(top.fill, Color::rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_transparent_layer_without_content_is_skipped() {
        let layer = Layer::new("empty", Rect::from_min_size([0.0, 0.0], [10.0, 10.0]));
        assert!(FullOutput::from_layers([&layer]).shapes.is_empty());
    }
}
