//! Tap dispatching for interactive controls
//!
//! Generates control events (touch down, touch up inside/outside) from the
//! input state by hit testing a list of controls. Backend-agnostic.

use crate::{InputState, MouseButton, Point, Rect};

/// Unique identifier of an interactive control
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlId(String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for ControlId {
    fn from(s: S) -> Self {
        Self::new(s)
    }
}

/// Something the dispatcher can hit test
pub trait Interactive {
    fn control_id(&self) -> &ControlId;

    /// Hit area in window coordinates
    fn hit_frame(&self) -> Rect;

    /// Whether the control currently takes pointer input
    fn accepts_input(&self) -> bool;
}

/// Type of control event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Primary button pressed over the control
    TouchDown { position: Point },
    /// Press released over the same control it started on (a tap)
    TouchUpInside { position: Point },
    /// Press released somewhere else
    TouchUpOutside { position: Option<Point> },
}

/// A control event targeted at a specific control
#[derive(Debug, Clone, PartialEq)]
pub struct TargetedEvent {
    pub event: ControlEvent,
    pub target: ControlId,
}

/// Event dispatcher that turns input into control events
///
/// Keeps the press target across frames so a tap is only reported when the
/// release lands on the control the press started on.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    pressed: Option<ControlId>,
    hovered: Option<ControlId>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Control that received the current press, if any
    pub fn pressed(&self) -> Option<&ControlId> {
        self.pressed.as_ref()
    }

    /// Topmost control under the cursor after the last dispatch
    pub fn hovered(&self) -> Option<&ControlId> {
        self.hovered.as_ref()
    }

    /// Generate events for this frame
    ///
    /// `controls` are given in painter's order; later entries sit on top and
    /// win the hit test.
    pub fn dispatch(
        &mut self,
        input: &InputState,
        controls: &[&dyn Interactive],
    ) -> Vec<TargetedEvent> {
        let mut events = Vec::new();
        let cursor = input.cursor_position;

        let hit = cursor.and_then(|pos| {
            controls
                .iter()
                .rev()
                .find(|c| c.accepts_input() && c.hit_frame().contains(pos))
                .map(|c| c.control_id().clone())
        });
        self.hovered = hit.clone();

        if input.is_button_just_pressed(MouseButton::Left) && self.pressed.is_none() {
            if let (Some(target), Some(position)) = (hit.clone(), cursor) {
                events.push(TargetedEvent {
                    event: ControlEvent::TouchDown { position },
                    target: target.clone(),
                });
                self.pressed = Some(target);
            }
        }

        if input.is_button_just_released(MouseButton::Left) {
            if let Some(target) = self.pressed.take() {
                let event = match cursor {
                    Some(position) if hit.as_ref() == Some(&target) => {
                        ControlEvent::TouchUpInside { position }
                    }
                    position => ControlEvent::TouchUpOutside { position },
                };
                events.push(TargetedEvent { event, target });
            }
        }

        events
    }
}

/// Check if the control with the given ID was tapped this frame
pub fn was_tapped(control_id: &str, events: &[TargetedEvent]) -> bool {
    events.iter().any(|e| {
        matches!(e.event, ControlEvent::TouchUpInside { .. }) && e.target.as_str() == control_id
    })
}
