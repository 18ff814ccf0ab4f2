//! Loader button playground
//!
//! Three buttons stacked on the left:
//! - "GOOOOO" logs its enabled state when tapped
//! - "enable/disable" toggles whether the first button is enabled
//! - "start/stop" morphs the first button into its spinner and back
//!
//! Controls:
//! - F: toggle frame profiling (or run with PROFILE=1)
//! - ESC: quit
//!
//! Run with RUST_LOG=debug to see state changes.

mod shared;

use morph_gui::{css, FullOutput, Interactive, Rect, TargetedEvent};
use morph_gui_interactive::{LoaderButton, LoaderButtonStyle};
use shared::{run_example, ExampleApp};
use std::time::Duration;

const BUTTON_SIZE: [f32; 2] = [180.0, 50.0];

struct Playground {
    go: LoaderButton,
    toggle_enabled: LoaderButton,
    toggle_loading: LoaderButton,
}

impl Playground {
    fn buttons(&self) -> [&LoaderButton; 3] {
        [&self.go, &self.toggle_enabled, &self.toggle_loading]
    }
}

impl ExampleApp for Playground {
    fn new() -> Self {
        let secondary = LoaderButtonStyle::default().with_enabled_color(css::GRAY);

        let mut go = LoaderButton::new("go", Rect::from_min_size([10.0, 10.0], BUTTON_SIZE))
            .with_title("GOOOOO");
        go.on_tap(|id| log::debug!("{} tapped", id.as_str()));

        Self {
            go,
            toggle_enabled: LoaderButton::new(
                "toggle_enabled",
                Rect::from_min_size([10.0, 70.0], BUTTON_SIZE),
            )
            .with_style(secondary.clone())
            .with_title("enable/disable"),
            toggle_loading: LoaderButton::new(
                "toggle_loading",
                Rect::from_min_size([10.0, 130.0], BUTTON_SIZE),
            )
            .with_style(secondary)
            .with_title("start/stop"),
        }
    }

    fn window_title() -> &'static str {
        "Loader Button Playground"
    }

    fn window_size() -> (u32, u32) {
        (400, 300)
    }

    fn controls(&self) -> Vec<&dyn Interactive> {
        self.buttons()
            .into_iter()
            .map(|b| b as &dyn Interactive)
            .collect()
    }

    fn handle_events(&mut self, events: &[TargetedEvent]) {
        for event in events {
            if self.go.handle_event(event) {
                log::info!("GOOOOO tapped, enabled: {}", self.go.appears_enabled());
            }

            if self.toggle_enabled.handle_event(event) {
                let enabled = !self.go.appears_enabled();
                self.go.set_enabled(enabled);
            }

            if self.toggle_loading.handle_event(event) {
                if self.go.is_loading() {
                    self.go.stop_loading();
                } else {
                    self.go.start_loading();
                }
            }
        }
    }

    fn update(&mut self, dt: Duration) {
        self.go.update(dt);
        self.toggle_enabled.update(dt);
        self.toggle_loading.update(dt);
    }

    fn output(&self) -> FullOutput {
        FullOutput::from_layers(self.buttons().into_iter().map(LoaderButton::layer))
    }
}

fn main() {
    run_example::<Playground>();
}
