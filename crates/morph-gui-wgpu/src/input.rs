//! Winit input adapter for morph-gui
//!
//! Converts winit window events into morph-gui's backend-agnostic
//! [`InputState`].

use morph_gui::{InputState, MouseButton, Point};
use winit::event::{ElementState, WindowEvent};

/// Extension trait for InputState to handle winit events
pub trait WinitInputExt {
    /// Process a winit WindowEvent and update internal state
    ///
    /// Cursor positions arrive in physical pixels and are divided by
    /// `scale_factor`, so controls can be laid out in logical pixels.
    fn handle_winit_event(&mut self, event: &WindowEvent, scale_factor: f64);
}

impl WinitInputExt for InputState {
    fn handle_winit_event(&mut self, event: &WindowEvent, scale_factor: f64) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(scale_factor);
                self.set_cursor_position(Some(Point::new(logical.x, logical.y)));
            }
            WindowEvent::CursorLeft { .. } => {
                self.set_cursor_position(None);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = convert_mouse_button(*button);
                match state {
                    ElementState::Pressed => self.press_button(button),
                    ElementState::Released => self.release_button(button),
                }
            }
            WindowEvent::Focused(false) => {
                // Drop held buttons so a press can't get stuck across focus changes
                for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
                    if self.is_button_down(button) {
                        self.release_button(button);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Convert winit MouseButton to morph-gui MouseButton
fn convert_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n.min(255) as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_mouse_button() {
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Left),
            MouseButton::Left
        );
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Other(1000)),
            MouseButton::Other(255)
        );
    }

    #[test]
    fn test_focus_loss_releases_buttons() {
        let mut input = InputState::new();
        input.press_button(MouseButton::Left);
        input.handle_winit_event(&WindowEvent::Focused(false), 1.0);
        assert!(!input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_released(MouseButton::Left));
    }
}
