//! Property animations for layers
//!
//! An animation interpolates a single scalar property of a layer over one or
//! more keyframe segments. Layers keep their model value untouched while an
//! animation runs; the animated value only shows up in the presentation.

use crate::transition::{lerp_f32, Transition};
use std::time::Duration;

/// Layer property that can be driven by an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// Corner radius in pixels
    CornerRadius,
    /// Frame width in pixels, resized around the frame center
    Width,
    /// Layer opacity (0.0 - 1.0)
    Opacity,
    /// Uniform scale around the frame center
    Scale,
    /// Rotation in radians around the frame center
    Rotation,
}

/// One keyframe segment of an animation
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub from: f32,
    pub to: f32,
    pub transition: Transition,
}

impl Segment {
    pub fn new(from: f32, to: f32, transition: Transition) -> Self {
        Self {
            from,
            to,
            transition,
        }
    }

    fn sample(&self, local: f32) -> f32 {
        if self.transition.duration <= 0.0 {
            return self.to;
        }
        let t = (local / self.transition.duration).clamp(0.0, 1.0);
        lerp_f32(self.from, self.to, (self.transition.easing)(t))
    }
}

/// How often an animation plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

/// A running (or ready to run) property animation
#[derive(Debug, Clone)]
pub struct PropertyAnimation {
    property: AnimatedProperty,
    segments: Vec<Segment>,
    repeat: Repeat,
    /// Seconds since the animation was added
    elapsed: f32,
}

impl PropertyAnimation {
    /// Single segment animation from `from` to `to`
    pub fn basic(property: AnimatedProperty, from: f32, to: f32, transition: Transition) -> Self {
        Self::keyframes(property, vec![Segment::new(from, to, transition)])
    }

    /// Animation playing `segments` back to back
    pub fn keyframes(property: AnimatedProperty, segments: Vec<Segment>) -> Self {
        Self {
            property,
            segments,
            repeat: Repeat::Once,
            elapsed: 0.0,
        }
    }

    /// Loop the animation until it is removed
    pub fn repeat_forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    pub fn property(&self) -> AnimatedProperty {
        self.property
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Duration of one pass through all segments, in seconds
    pub fn total_duration(&self) -> f32 {
        self.segments
            .iter()
            .map(|s| s.transition.duration.max(0.0))
            .sum()
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt.as_secs_f32();

        // Keep looping animations from accumulating float error
        if self.repeat == Repeat::Forever {
            let total = self.total_duration();
            if total > 0.0 {
                self.elapsed %= total;
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.repeat == Repeat::Once && self.elapsed >= self.total_duration()
    }

    /// Current value of the animated property
    pub fn value(&self) -> f32 {
        self.value_at(self.elapsed)
    }

    /// Value of the animated property `elapsed` seconds after the start
    pub fn value_at(&self, elapsed: f32) -> f32 {
        let Some(last) = self.segments.last() else {
            return 0.0;
        };

        let total = self.total_duration();
        if total <= 0.0 {
            return last.to;
        }

        let mut local = match self.repeat {
            Repeat::Once if elapsed >= total => return last.to,
            Repeat::Once => elapsed.max(0.0),
            Repeat::Forever => elapsed.rem_euclid(total),
        };

        for segment in &self.segments {
            let duration = segment.transition.duration.max(0.0);
            if local < duration {
                return segment.sample(local);
            }
            local -= duration;
        }

        last.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::linear;

    fn lin(duration: f32) -> Transition {
        Transition::new(duration, linear)
    }

    #[test]
    fn test_basic_samples_linearly() {
        let anim = PropertyAnimation::basic(AnimatedProperty::CornerRadius, 10.0, 20.0, lin(1.0));
        assert_eq!(anim.value_at(0.0), 10.0);
        assert_eq!(anim.value_at(0.5), 15.0);
        assert_eq!(anim.value_at(2.0), 20.0);
    }

    #[test]
    fn test_keyframes_chain_segments() {
        let anim = PropertyAnimation::keyframes(
            AnimatedProperty::Scale,
            vec![Segment::new(1.0, 0.0, lin(1.0)), Segment::new(0.0, 2.0, lin(1.0))],
        );
        assert_eq!(anim.total_duration(), 2.0);
        assert_eq!(anim.value_at(0.5), 0.5);
        assert_eq!(anim.value_at(1.5), 1.0);
        assert_eq!(anim.value_at(5.0), 2.0);
    }

    #[test]
    fn test_finishes_after_duration() {
        let mut anim = PropertyAnimation::basic(AnimatedProperty::Opacity, 1.0, 0.0, lin(0.5));
        anim.advance(Duration::from_millis(250));
        assert!(!anim.is_finished());
        anim.advance(Duration::from_millis(300));
        assert!(anim.is_finished());
        assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn test_repeat_forever_never_finishes() {
        let mut anim = PropertyAnimation::basic(AnimatedProperty::Rotation, 0.0, 4.0, lin(1.0))
            .repeat_forever();
        for _ in 0..10 {
            anim.advance(Duration::from_millis(750));
        }
        assert!(!anim.is_finished());
        // 7.5s into a 1s loop
        assert!((anim.value() - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_duration_snaps_to_target() {
        let anim = PropertyAnimation::basic(AnimatedProperty::Width, 320.0, 45.0, lin(0.0));
        assert!(anim.is_finished());
        assert_eq!(anim.value(), 45.0);
    }
}
