use morph_gui::{catppuccin::mocha, Color, FullOutput, Interactive, TargetedEvent};
use std::time::Duration;

/// Core trait that all examples implement.
/// The runner owns the window, GPU state, and input; apps only own their controls.
pub trait ExampleApp: Sized {
    /// Create a new instance
    fn new() -> Self;

    /// Controls to hit test, in painter's order
    fn controls(&self) -> Vec<&dyn Interactive>;

    /// React to this frame's control events
    fn handle_events(&mut self, events: &[TargetedEvent]);

    /// Advance animations by the frame delta
    fn update(&mut self, dt: Duration);

    /// Shapes to draw this frame
    fn output(&self) -> FullOutput;

    /// Optional: Window title
    fn window_title() -> &'static str {
        "Morph GUI Example"
    }

    /// Optional: Window size in logical pixels
    fn window_size() -> (u32, u32) {
        (800, 600)
    }

    /// Optional: Background the frame is cleared to
    fn clear_color() -> Color {
        mocha::BASE
    }
}
