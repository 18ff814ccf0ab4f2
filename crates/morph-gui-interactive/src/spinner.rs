//! Spinner overlay: a rotating partial ring shown while something loads

use morph_gui::{
    linear, AnimatedProperty, Color, Layer, LayerContent, LayerId, PropertyAnimation, Rect,
    Stroke, Transition,
};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Visual styling for a spinner
#[derive(Debug, Clone)]
pub struct SpinnerStyle {
    /// Stroke color of the arc
    pub color: Color,
    /// Stroke width in pixels
    pub line_width: f32,
    /// How much of the ring is drawn, in radians
    pub sweep: f32,
    /// Gap between the host edge and the ring
    pub inset: f32,
    /// Seconds per full revolution
    pub period: f32,
}

impl Default for SpinnerStyle {
    fn default() -> Self {
        Self {
            color: morph_gui::css::DARK_GRAY,
            line_width: 3.0,
            sweep: TAU * 0.75,
            inset: 6.0,
            period: 1.0,
        }
    }
}

impl SpinnerStyle {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn content(&self) -> LayerContent {
        LayerContent::Arc {
            start_angle: -FRAC_PI_2,
            sweep: self.sweep,
            inset: self.inset,
            stroke: Stroke::new(self.line_width, self.color),
        }
    }
}

/// Handle to a spinner sublayer living inside a host layer
///
/// The spinner is a square centered on the host, as tall as the host. It
/// starts hidden.
#[derive(Debug, Clone)]
pub struct Spinner {
    layer_id: LayerId,
    style: SpinnerStyle,
}

impl Spinner {
    /// Animation key of the endless rotation
    pub const ROTATION_KEY: &'static str = "spinner_rotation";

    /// Create the spinner sublayer and attach it to `host`
    pub fn attach(host: &mut Layer, style: SpinnerStyle) -> Self {
        let layer_id = LayerId::new(format!("{}_spinner", host.id().as_str()));
        let mut layer = Layer::new(layer_id.clone(), Self::frame_in(host)).with_content(style.content());
        layer.set_hidden(true);
        host.add_sublayer(layer);

        log::trace!("attached spinner {:?}", layer_id);
        Self { layer_id, style }
    }

    fn frame_in(host: &Layer) -> Rect {
        let frame = host.frame();
        let side = frame.height();
        Rect::from_center_size(frame.center(), [side, side])
    }

    pub fn layer_id(&self) -> &LayerId {
        &self.layer_id
    }

    pub fn style(&self) -> &SpinnerStyle {
        &self.style
    }

    /// Unhide and start rotating forever
    pub fn start(&self, host: &mut Layer) {
        let Some(layer) = host.find_mut(&self.layer_id) else {
            log::warn!("spinner {:?} is not attached to {:?}", self.layer_id, host.id());
            return;
        };
        layer.set_hidden(false);
        layer.add_animation(
            Self::ROTATION_KEY,
            PropertyAnimation::basic(
                AnimatedProperty::Rotation,
                0.0,
                TAU,
                Transition::new(self.style.period, linear),
            )
            .repeat_forever(),
        );
    }

    /// Hide and drop every animation
    pub fn stop(&self, host: &mut Layer) {
        if let Some(layer) = host.find_mut(&self.layer_id) {
            layer.set_hidden(true);
            layer.remove_all_animations();
        }
    }

    pub fn is_animating(&self, host: &Layer) -> bool {
        host.find(&self.layer_id)
            .is_some_and(|l| !l.is_hidden() && l.animation(Self::ROTATION_KEY).is_some())
    }

    pub fn set_color(&mut self, host: &mut Layer, color: Color) {
        self.style.color = color;
        if let Some(layer) = host.find_mut(&self.layer_id) {
            *layer.content_mut() = self.style.content();
        }
    }

    /// Re-center on the host after its frame changed
    pub fn layout(&self, host: &mut Layer) {
        let frame = Self::frame_in(host);
        if let Some(layer) = host.find_mut(&self.layer_id) {
            layer.set_frame(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn host() -> Layer {
        Layer::new("button", Rect::from_min_size([10.0, 10.0], [320.0, 45.0]))
    }

    #[test]
    fn test_attach_hidden_and_centered() {
        let mut host = host();
        let spinner = Spinner::attach(&mut host, SpinnerStyle::default());
        let layer = host.find(spinner.layer_id()).expect("spinner sublayer");
        assert!(layer.is_hidden());
        assert_eq!(layer.frame().center(), host.frame().center());
        assert_eq!(layer.frame().width(), 45.0);
    }

    #[test]
    fn test_start_rotates_forever_and_stop_hides() {
        let mut host = host();
        let spinner = Spinner::attach(&mut host, SpinnerStyle::default());

        spinner.start(&mut host);
        assert!(spinner.is_animating(&host));
        for _ in 0..100 {
            assert!(host.tick(Duration::from_millis(50)).is_empty());
        }
        assert!(spinner.is_animating(&host));

        spinner.stop(&mut host);
        assert!(!spinner.is_animating(&host));
        let layer = host.find(spinner.layer_id()).expect("spinner sublayer");
        assert!(layer.is_hidden());
        assert!(!layer.has_animations());
    }

    #[test]
    fn test_set_color_updates_stroke() {
        let mut host = host();
        let mut spinner = Spinner::attach(&mut host, SpinnerStyle::default());
        spinner.set_color(&mut host, morph_gui::css::WHITE);
        let layer = host.find(spinner.layer_id()).expect("spinner sublayer");
        let LayerContent::Arc { stroke, .. } = layer.content() else {
            panic!("spinner should draw an arc");
        };
        assert_eq!(stroke.color, morph_gui::css::WHITE);
    }
}
