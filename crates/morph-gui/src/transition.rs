//! Easing curves and the timing of a single tween

/// Maps normalized progress in [0, 1] to eased progress
pub type EasingFn = fn(f32) -> f32;

pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic, accelerating from rest
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Quadratic, decelerating to rest
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Quadratic on both ends, symmetric around t = 0.5
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// How long a tween runs and how its progress is shaped
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// Seconds; zero or less applies the end value immediately
    pub duration: f32,
    pub easing: EasingFn,
}

impl Transition {
    pub fn new(duration: f32, easing: EasingFn) -> Self {
        Self { duration, easing }
    }

    pub fn instant() -> Self {
        Self::new(0.0, linear)
    }
}

impl Default for Transition {
    /// 250 ms, ease-in-out
    fn default() -> Self {
        Self::new(0.25, ease_in_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [linear as EasingFn, ease_in, ease_out, ease_in_out] {
            assert_eq!(easing(0.0), 0.0);
            assert_eq!(easing(1.0), 1.0);
        }
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn test_easing_shape() {
        assert!(ease_in(0.5) < 0.5);
        assert!(ease_out(0.5) > 0.5);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_lerp_f32() {
        assert_eq!(lerp_f32(10.0, 22.5, 0.0), 10.0);
        assert_eq!(lerp_f32(320.0, 45.0, 1.0), 45.0);
        assert_eq!(lerp_f32(0.0, 4.0, 0.5), 2.0);
    }

    #[test]
    fn test_instant_has_no_duration() {
        assert_eq!(Transition::instant().duration, 0.0);
        assert!(Transition::default().duration > 0.0);
    }
}
