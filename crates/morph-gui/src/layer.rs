//! Layer tree
//!
//! A [`Layer`] is a drawable surface with a handful of animatable properties.
//! Setting a property changes the *model* value immediately; animations added
//! with [`Layer::add_animation`] only affect the *presentation* value while
//! they run, so the model always reflects where the layer ends up.
//!
//! Frames of sublayers are expressed in the same window coordinates as their
//! parent. Sublayers inherit the parent's transform and opacity, not its
//! position.

use crate::animation::{AnimatedProperty, PropertyAnimation};
use crate::color::Color;
use crate::primitives::{
    ArcShape, PositionedShape, Rect, Shadow, Shape, Stroke, StyledRect, TextShape, Transform2D,
};
use std::time::Duration;

/// Unique identifier of a layer within its tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for LayerId {
    fn from(s: S) -> Self {
        Self::new(s)
    }
}

/// What a layer draws on top of its background
#[derive(Debug, Clone, PartialEq)]
pub enum LayerContent {
    None,
    /// Single line of text centered in the frame
    Text {
        text: String,
        font_size: f32,
        color: Color,
    },
    /// Stroked arc centered in the frame
    Arc {
        /// Start angle in radians (0 = +x, clockwise positive)
        start_angle: f32,
        /// Sweep in radians
        sweep: f32,
        /// Distance between the frame edge and the outer edge of the stroke
        inset: f32,
        stroke: Stroke,
    },
}

/// The animatable values of a layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerValues {
    pub frame: Rect,
    pub corner_radius: f32,
    pub opacity: f32,
    pub scale: f32,
    pub rotation: f32,
}

impl LayerValues {
    fn apply(&mut self, property: AnimatedProperty, value: f32) {
        match property {
            AnimatedProperty::CornerRadius => self.corner_radius = value,
            AnimatedProperty::Width => self.frame = self.frame.with_width_centered(value),
            AnimatedProperty::Opacity => self.opacity = value,
            AnimatedProperty::Scale => self.scale = value,
            AnimatedProperty::Rotation => self.rotation = value,
        }
    }

    /// Model value of a single property
    pub fn get(&self, property: AnimatedProperty) -> f32 {
        match property {
            AnimatedProperty::CornerRadius => self.corner_radius,
            AnimatedProperty::Width => self.frame.width(),
            AnimatedProperty::Opacity => self.opacity,
            AnimatedProperty::Scale => self.scale,
            AnimatedProperty::Rotation => self.rotation,
        }
    }
}

/// Reported by [`Layer::tick`] when a keyed animation has run to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedAnimation {
    pub layer: LayerId,
    pub key: String,
}

/// A node of the layer tree
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    model: LayerValues,
    background: Color,
    hidden: bool,
    shadow: Option<Shadow>,
    content: LayerContent,
    sublayers: Vec<Layer>,
    animations: Vec<(String, PropertyAnimation)>,
}

impl Layer {
    pub fn new(id: impl Into<LayerId>, frame: Rect) -> Self {
        Self {
            id: id.into(),
            model: LayerValues {
                frame,
                corner_radius: 0.0,
                opacity: 1.0,
                scale: 1.0,
                rotation: 0.0,
            },
            background: Color::transparent(),
            hidden: false,
            shadow: None,
            content: LayerContent::None,
            sublayers: Vec::new(),
            animations: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: LayerContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.model.corner_radius = radius;
        self
    }

    pub fn id(&self) -> &LayerId {
        &self.id
    }

    // Model properties

    pub fn model(&self) -> &LayerValues {
        &self.model
    }

    pub fn frame(&self) -> Rect {
        self.model.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.model.frame = frame;
    }

    /// Resize around the current center, keeping the height
    pub fn set_width(&mut self, width: f32) {
        self.model.frame = self.model.frame.with_width_centered(width);
    }

    pub fn corner_radius(&self) -> f32 {
        self.model.corner_radius
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.model.corner_radius = radius;
    }

    pub fn opacity(&self) -> f32 {
        self.model.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.model.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn scale(&self) -> f32 {
        self.model.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.model.scale = scale;
    }

    pub fn rotation(&self) -> f32 {
        self.model.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.model.rotation = rotation;
    }

    /// Set the model value of a single animatable property
    pub fn set_value(&mut self, property: AnimatedProperty, value: f32) {
        match property {
            AnimatedProperty::CornerRadius => self.set_corner_radius(value),
            AnimatedProperty::Width => self.set_width(value),
            AnimatedProperty::Opacity => self.set_opacity(value),
            AnimatedProperty::Scale => self.set_scale(value),
            AnimatedProperty::Rotation => self.set_rotation(value),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow
    }

    pub fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.shadow = shadow;
    }

    pub fn content(&self) -> &LayerContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut LayerContent {
        &mut self.content
    }

    // Sublayers

    pub fn add_sublayer(&mut self, layer: Layer) {
        self.sublayers.push(layer);
    }

    pub fn sublayers(&self) -> &[Layer] {
        &self.sublayers
    }

    /// Find a layer by id in this subtree (including `self`)
    pub fn find(&self, id: &LayerId) -> Option<&Layer> {
        if &self.id == id {
            return Some(self);
        }
        self.sublayers.iter().find_map(|l| l.find(id))
    }

    /// Mutable variant of [`Layer::find`]
    pub fn find_mut(&mut self, id: &LayerId) -> Option<&mut Layer> {
        if &self.id == id {
            return Some(self);
        }
        self.sublayers.iter_mut().find_map(|l| l.find_mut(id))
    }

    // Animations

    /// Attach an animation under `key`, replacing any animation with the same key
    pub fn add_animation(&mut self, key: impl Into<String>, animation: PropertyAnimation) {
        let key = key.into();
        self.animations.retain(|(k, _)| *k != key);
        self.animations.push((key, animation));
    }

    pub fn animation(&self, key: &str) -> Option<&PropertyAnimation> {
        self.animations
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, a)| a)
    }

    pub fn remove_animation(&mut self, key: &str) {
        self.animations.retain(|(k, _)| k != key);
    }

    pub fn remove_all_animations(&mut self) {
        self.animations.clear();
    }

    pub fn has_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Whether this layer or any sublayer has a running animation
    pub fn is_animating(&self) -> bool {
        self.has_animations() || self.sublayers.iter().any(Layer::is_animating)
    }

    /// Advance all animations in this subtree by `dt`
    ///
    /// Finished animations are removed and reported in tree order.
    pub fn tick(&mut self, dt: Duration) -> Vec<FinishedAnimation> {
        let mut finished = Vec::new();
        self.tick_into(dt, &mut finished);
        finished
    }

    fn tick_into(&mut self, dt: Duration, finished: &mut Vec<FinishedAnimation>) {
        for (_, animation) in &mut self.animations {
            animation.advance(dt);
        }

        let id = &self.id;
        self.animations.retain(|(key, animation)| {
            if animation.is_finished() {
                finished.push(FinishedAnimation {
                    layer: id.clone(),
                    key: key.clone(),
                });
                false
            } else {
                true
            }
        });

        for sublayer in &mut self.sublayers {
            sublayer.tick_into(dt, finished);
        }
    }

    /// Values as currently displayed, with running animations applied on top of the model
    pub fn presentation(&self) -> LayerValues {
        let mut values = self.model;
        for (_, animation) in &self.animations {
            values.apply(animation.property(), animation.value());
        }
        values
    }

    // Output

    /// Append the shapes of this subtree to `out` in painter's order
    pub fn collect_shapes(
        &self,
        parent_transform: Transform2D,
        parent_opacity: f32,
        out: &mut Vec<PositionedShape>,
    ) {
        if self.hidden {
            return;
        }

        let values = self.presentation();
        let opacity = parent_opacity * values.opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 {
            return;
        }

        let transform = Transform2D::around(values.frame.center(), values.scale, values.rotation)
            .then_parent(parent_transform);
        let frame = values.frame;

        if self.background.a > 0.0 || self.shadow.is_some() {
            out.push(PositionedShape {
                shape: Shape::Rect(StyledRect {
                    rect: frame,
                    corner_radius: values
                        .corner_radius
                        .clamp(0.0, frame.width().min(frame.height()) * 0.5),
                    fill: self.background,
                    shadow: self.shadow,
                }),
                transform,
                opacity,
            });
        }

        match &self.content {
            LayerContent::None => {}
            LayerContent::Text {
                text,
                font_size,
                color,
            } => {
                if !text.is_empty() {
                    out.push(PositionedShape {
                        shape: Shape::Text(TextShape {
                            rect: frame,
                            text: text.clone(),
                            font_size: *font_size,
                            color: *color,
                        }),
                        transform,
                        opacity,
                    });
                }
            }
            LayerContent::Arc {
                start_angle,
                sweep,
                inset,
                stroke,
            } => {
                let radius = frame.width().min(frame.height()) * 0.5 - inset - stroke.width * 0.5;
                if radius > 0.0 {
                    out.push(PositionedShape {
                        shape: Shape::Arc(ArcShape {
                            center: frame.center(),
                            radius,
                            start_angle: *start_angle,
                            sweep: *sweep,
                            stroke: *stroke,
                        }),
                        transform,
                        opacity,
                    });
                }
            }
        }

        for sublayer in &self.sublayers {
            sublayer.collect_shapes(transform, opacity, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{linear, Transition};

    fn frame() -> Rect {
        Rect::from_min_size([0.0, 0.0], [320.0, 45.0])
    }

    fn radius_anim(from: f32, to: f32) -> PropertyAnimation {
        PropertyAnimation::basic(
            AnimatedProperty::CornerRadius,
            from,
            to,
            Transition::new(1.0, linear),
        )
    }

    #[test]
    fn test_presentation_follows_animation_model_stays() {
        let mut layer = Layer::new("root", frame()).with_corner_radius(10.0);
        layer.add_animation("corner", radius_anim(10.0, 20.0));
        layer.set_corner_radius(20.0);

        layer.tick(Duration::from_millis(500));
        assert_eq!(layer.corner_radius(), 20.0);
        assert_eq!(layer.presentation().corner_radius, 15.0);
    }

    #[test]
    fn test_add_animation_replaces_same_key() {
        let mut layer = Layer::new("root", frame());
        layer.add_animation("corner", radius_anim(0.0, 10.0));
        layer.add_animation("corner", radius_anim(5.0, 6.0));
        assert_eq!(layer.animation("corner").map(|a| a.value()), Some(5.0));
        assert_eq!(layer.animations.len(), 1);
    }

    #[test]
    fn test_tick_reports_and_removes_finished() {
        let mut layer = Layer::new("root", frame());
        layer.add_sublayer(Layer::new("child", frame()));
        layer.add_animation("a", radius_anim(0.0, 1.0));
        if let Some(child) = layer.find_mut(&LayerId::new("child")) {
            child.add_animation("b", radius_anim(0.0, 1.0));
        }

        assert!(layer.tick(Duration::from_millis(400)).is_empty());
        let finished = layer.tick(Duration::from_millis(700));
        assert_eq!(
            finished,
            vec![
                FinishedAnimation {
                    layer: LayerId::new("root"),
                    key: "a".into()
                },
                FinishedAnimation {
                    layer: LayerId::new("child"),
                    key: "b".into()
                },
            ]
        );
        assert!(!layer.is_animating());
    }

    #[test]
    fn test_width_animation_keeps_center() {
        let mut layer = Layer::new("root", frame());
        layer.add_animation(
            "width",
            PropertyAnimation::basic(
                AnimatedProperty::Width,
                320.0,
                45.0,
                Transition::new(1.0, linear),
            ),
        );
        layer.tick(Duration::from_millis(1000 / 2));
        let presented = layer.presentation().frame;
        assert!((presented.width() - 182.5).abs() < 1e-3);
        assert_eq!(presented.center(), frame().center());
    }

    #[test]
    fn test_set_value_routes_to_model() {
        let mut layer = Layer::new("root", frame());
        layer.set_value(AnimatedProperty::Width, 45.0);
        layer.set_value(AnimatedProperty::Opacity, 2.0);
        assert_eq!(layer.frame().width(), 45.0);
        assert_eq!(layer.frame().center(), frame().center());
        assert_eq!(layer.opacity(), 1.0);
    }

    #[test]
    fn test_hidden_layer_emits_nothing() {
        let mut layer = Layer::new("root", frame()).with_background(Color::rgb(1.0, 0.0, 0.0));
        let mut out = Vec::new();
        layer.collect_shapes(Transform2D::IDENTITY, 1.0, &mut out);
        assert_eq!(out.len(), 1);

        layer.set_hidden(true);
        out.clear();
        layer.collect_shapes(Transform2D::IDENTITY, 1.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_sublayers_inherit_opacity() {
        let mut layer = Layer::new("root", frame()).with_background(Color::rgb(1.0, 1.0, 1.0));
        layer.set_opacity(0.5);
        layer.add_sublayer(
            Layer::new("title", frame()).with_content(LayerContent::Text {
                text: "GO".into(),
                font_size: 18.0,
                color: Color::rgb(0.0, 0.0, 0.0),
            }),
        );

        let mut out = Vec::new();
        layer.collect_shapes(Transform2D::IDENTITY, 1.0, &mut out);
        assert_eq!(out.len(), 2);
        assert!(matches!(out[1].shape, Shape::Text(_)));
        assert_eq!(out[1].opacity, 0.5);
    }

    #[test]
    fn test_corner_radius_clamped_in_output() {
        let layer = Layer::new("root", frame())
            .with_background(Color::rgb(1.0, 1.0, 1.0))
            .with_corner_radius(100.0);
        let mut out = Vec::new();
        layer.collect_shapes(Transform2D::IDENTITY, 1.0, &mut out);
        let Shape::Rect(rect) = &out[0].shape else {
            panic!("expected rect");
        };
        assert_eq!(rect.corner_radius, 22.5);
    }
}
