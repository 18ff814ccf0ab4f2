//! Pointer state, fed by a windowing backend and read by the event dispatcher

use crate::Point;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button; touch contacts map here too
    Left,
    Right,
    Middle,
    /// Backend-specific index
    Other(u8),
}

/// Pointer position and buttons for the current frame
///
/// `just_pressed`/`just_released` only hold edges seen since the last
/// [`InputState::begin_frame`].
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Logical pixels; `None` once the cursor leaves the window
    pub cursor_position: Option<Point>,
    held: HashSet<MouseButton>,
    just_pressed: HashSet<MouseButton>,
    just_released: HashSet<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's edges; held buttons stay held
    pub fn begin_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.held.insert(button);
        self.just_pressed.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.held.remove(&button);
        self.just_released.insert(button);
    }

    pub fn set_cursor_position(&mut self, position: Option<Point>) {
        self.cursor_position = position;
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.just_pressed.contains(&button)
    }

    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.just_released.contains(&button)
    }
}
