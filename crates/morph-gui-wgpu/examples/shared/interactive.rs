use morph_gui::{EventDispatcher, InputState};
use std::time::{Duration, Instant};

/// Bundle of pointer input and dispatch state, owned by the runner
pub struct InteractiveState {
    pub input_state: InputState,
    pub event_dispatcher: EventDispatcher,
    pub last_frame_time: Instant,
}

impl InteractiveState {
    pub fn new() -> Self {
        Self {
            input_state: InputState::new(),
            event_dispatcher: EventDispatcher::new(),
            last_frame_time: Instant::now(),
        }
    }

    /// Clear per-frame transitions once the frame has been dispatched
    pub fn end_frame(&mut self) {
        self.input_state.begin_frame();
    }

    /// Time since the last call
    pub fn delta_time(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        delta
    }
}

impl Default for InteractiveState {
    fn default() -> Self {
        Self::new()
    }
}
