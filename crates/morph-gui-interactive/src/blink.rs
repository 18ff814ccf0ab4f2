//! One-shot scale pulse used as feedback when something becomes enabled

use morph_gui::{ease_in, ease_out, AnimatedProperty, Layer, PropertyAnimation, Segment, Transition};

/// Animation key used by [`Blink::blink`]
pub const BLINK_KEY: &str = "blink";

/// Scale pulse for any layer: 105% → 95% → 100%
pub trait Blink {
    fn blink(&mut self);
}

impl Blink for Layer {
    fn blink(&mut self) {
        self.set_scale(1.0);
        self.add_animation(
            BLINK_KEY,
            PropertyAnimation::keyframes(
                AnimatedProperty::Scale,
                vec![
                    Segment::new(1.05, 0.95, Transition::new(0.09, ease_in)),
                    Segment::new(0.95, 1.0, Transition::new(0.09, ease_out)),
                ],
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_gui::Rect;
    use std::time::Duration;

    #[test]
    fn test_blink_pulses_and_returns_to_identity() {
        let mut layer = Layer::new("button", Rect::from_min_size([0.0, 0.0], [100.0, 40.0]));
        layer.blink();

        assert!((layer.presentation().scale - 1.05).abs() < 1e-6);

        layer.tick(Duration::from_millis(90));
        assert!((layer.presentation().scale - 0.95).abs() < 1e-3);

        let finished = layer.tick(Duration::from_millis(100));
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].key, BLINK_KEY);
        assert_eq!(layer.presentation().scale, 1.0);
    }

    #[test]
    fn test_blink_never_touches_model_beyond_identity() {
        let mut layer = Layer::new("button", Rect::default());
        layer.blink();
        assert_eq!(layer.scale(), 1.0);
    }
}
