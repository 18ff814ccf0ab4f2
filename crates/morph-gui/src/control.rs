//! The interactive-control contract shared by all controls
//!
//! A [`Control`] carries what every tappable widget needs: an id, a frame,
//! the enabled and user-interaction flags, highlight state while pressed and
//! tap subscriptions. Widgets embed one and delegate to it.

use crate::events::{ControlEvent, ControlId, Interactive, TargetedEvent};
use crate::primitives::Rect;

type TapHandler = Box<dyn FnMut(&ControlId)>;

pub struct Control {
    id: ControlId,
    frame: Rect,
    enabled: bool,
    user_interaction_enabled: bool,
    highlighted: bool,
    tap_handlers: Vec<TapHandler>,
}

impl Control {
    pub fn new(id: impl Into<ControlId>, frame: Rect) -> Self {
        Self {
            id: id.into(),
            frame,
            enabled: true,
            user_interaction_enabled: true,
            highlighted: false,
            tap_handlers: Vec::new(),
        }
    }

    pub fn id(&self) -> &ControlId {
        &self.id
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.highlighted = false;
        }
    }

    pub fn set_user_interaction_enabled(&mut self, enabled: bool) {
        self.user_interaction_enabled = enabled;
        if !enabled {
            self.highlighted = false;
        }
    }

    /// Whether a press that started on this control is still held
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Subscribe to taps (touch up inside)
    pub fn on_tap(&mut self, f: impl FnMut(&ControlId) + 'static) {
        self.tap_handlers.push(Box::new(f));
    }

    /// Feed an event from the dispatcher
    ///
    /// Events for other controls are ignored. Returns `true` when the event
    /// was a tap on this control and the tap handlers ran.
    pub fn handle_event(&mut self, event: &TargetedEvent) -> bool {
        if event.target != self.id {
            return false;
        }

        match event.event {
            ControlEvent::TouchDown { .. } => {
                self.highlighted = self.accepts_input();
                false
            }
            ControlEvent::TouchUpOutside { .. } => {
                self.highlighted = false;
                false
            }
            ControlEvent::TouchUpInside { .. } => {
                self.highlighted = false;
                if !self.accepts_input() {
                    return false;
                }
                for handler in &mut self.tap_handlers {
                    handler(&self.id);
                }
                true
            }
        }
    }
}

impl Interactive for Control {
    fn control_id(&self) -> &ControlId {
        &self.id
    }

    fn hit_frame(&self) -> Rect {
        self.frame
    }

    fn accepts_input(&self) -> bool {
        self.enabled && self.user_interaction_enabled
    }
}

impl std::fmt::Debug for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("id", &self.id)
            .field("frame", &self.frame)
            .field("enabled", &self.enabled)
            .field("user_interaction_enabled", &self.user_interaction_enabled)
            .field("highlighted", &self.highlighted)
            .field("tap_handlers", &self.tap_handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use std::cell::Cell;
    use std::rc::Rc;

    fn tap(id: &str) -> TargetedEvent {
        TargetedEvent {
            event: ControlEvent::TouchUpInside {
                position: Point::zero(),
            },
            target: ControlId::new(id),
        }
    }

    #[test]
    fn test_tap_runs_handlers() {
        let count = Rc::new(Cell::new(0));
        let mut control = Control::new("go", Rect::default());
        let c = count.clone();
        control.on_tap(move |_| c.set(c.get() + 1));

        assert!(control.handle_event(&tap("go")));
        assert!(!control.handle_event(&tap("other")));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_no_taps_without_user_interaction() {
        let count = Rc::new(Cell::new(0));
        let mut control = Control::new("go", Rect::default());
        let c = count.clone();
        control.on_tap(move |_| c.set(c.get() + 1));

        control.set_user_interaction_enabled(false);
        assert!(!control.handle_event(&tap("go")));
        control.set_user_interaction_enabled(true);
        control.set_enabled(false);
        assert!(!control.handle_event(&tap("go")));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_highlight_follows_press() {
        let mut control = Control::new("go", Rect::default());
        control.handle_event(&TargetedEvent {
            event: ControlEvent::TouchDown {
                position: Point::zero(),
            },
            target: ControlId::new("go"),
        });
        assert!(control.is_highlighted());
        control.handle_event(&TargetedEvent {
            event: ControlEvent::TouchUpOutside { position: None },
            target: ControlId::new("go"),
        });
        assert!(!control.is_highlighted());
    }
}
