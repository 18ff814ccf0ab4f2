use super::example_app::ExampleApp;
use super::gpu_state::GpuState;
use super::interactive::InteractiveState;
use morph_gui_wgpu::WinitInputExt;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Frame timing statistics
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub total_frame_time_ms: f32,
    pub event_dispatch_ms: f32,
    pub update_ms: f32,
    pub output_generation_ms: f32,
    pub render_ms: f32,
    pub fps: f32,
}

/// Generic application wrapper that handles all boilerplate
/// This implements ApplicationHandler for any type that implements ExampleApp
pub struct AppRunner<T: ExampleApp> {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    interactive: InteractiveState,
    app: T,
    last_frame_time: Instant,
    frame_stats: FrameStats,
    enable_profiling: bool,
}

impl<T: ExampleApp> AppRunner<T> {
    pub fn new(app: T) -> Self {
        Self {
            window: None,
            gpu_state: None,
            interactive: InteractiveState::new(),
            app,
            last_frame_time: Instant::now(),
            frame_stats: FrameStats::default(),
            enable_profiling: std::env::var("PROFILE").is_ok(),
        }
    }

    fn render(&mut self) {
        let frame_start = Instant::now();
        let dt = self.interactive.delta_time();

        // Dispatch pointer input to the app's controls
        let event_start = Instant::now();
        let events = {
            let controls = self.app.controls();
            self.interactive
                .event_dispatcher
                .dispatch(&self.interactive.input_state, &controls)
        };
        self.app.handle_events(&events);
        let event_time = event_start.elapsed();

        let update_start = Instant::now();
        self.app.update(dt);
        let update_time = update_start.elapsed();

        let output_start = Instant::now();
        let output = self.app.output();
        let output_time = output_start.elapsed();

        // Render
        let render_start = Instant::now();
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };

        match gpu_state.render(&output, T::clear_color()) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                if let Some(window) = &self.window {
                    gpu_state.resize(window.inner_size())
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory");
                std::process::exit(1);
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
        let render_time = render_start.elapsed();

        // Clear input transitions for next frame
        self.interactive.end_frame();

        // Update frame stats
        let total_frame_time = frame_start.elapsed();
        let frame_time_since_last = self.last_frame_time.elapsed();
        self.last_frame_time = Instant::now();

        self.frame_stats = FrameStats {
            total_frame_time_ms: total_frame_time.as_secs_f32() * 1000.0,
            event_dispatch_ms: event_time.as_secs_f32() * 1000.0,
            update_ms: update_time.as_secs_f32() * 1000.0,
            output_generation_ms: output_time.as_secs_f32() * 1000.0,
            render_ms: render_time.as_secs_f32() * 1000.0,
            fps: if frame_time_since_last.as_secs_f32() > 0.0 {
                1.0 / frame_time_since_last.as_secs_f32()
            } else {
                0.0
            },
        };

        // Print stats if profiling enabled
        if self.enable_profiling {
            let shape_count = self
                .gpu_state
                .as_ref()
                .map_or(0, GpuState::last_shape_count);
            println!(
                "Frame: {:.2}ms ({:.1} FPS) | Events: {:.2}ms | Update: {:.2}ms | Output: {:.2}ms | Render: {:.2}ms | Shapes: {}",
                self.frame_stats.total_frame_time_ms,
                self.frame_stats.fps,
                self.frame_stats.event_dispatch_ms,
                self.frame_stats.update_ms,
                self.frame_stats.output_generation_ms,
                self.frame_stats.render_ms,
                shape_count,
            );
        }
    }
}

impl<T: ExampleApp> ApplicationHandler for AppRunner<T> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = T::window_size();
        let window_attributes = Window::default_attributes()
            .with_title(T::window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu_state) => self.gpu_state = Some(gpu_state),
            Err(e) => {
                log::error!("GPU setup failed: {e}");
                event_loop.exit();
                return;
            }
        }
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let scale_factor = self.gpu_state.as_ref().map_or(1.0, GpuState::scale_factor);
        self.interactive
            .input_state
            .handle_winit_event(&event, scale_factor);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event: ref key_event,
                ..
            } if matches!(
                key_event.physical_key,
                winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape)
            ) && key_event.state == ElementState::Pressed =>
            {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event: ref key_event,
                ..
            } if matches!(
                key_event.physical_key,
                winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::KeyF)
            ) && key_event.state == ElementState::Pressed
                && !key_event.repeat =>
            {
                // Toggle profiling
                self.enable_profiling = !self.enable_profiling;
                println!(
                    "Profiling {}",
                    if self.enable_profiling {
                        "enabled"
                    } else {
                        "disabled"
                    }
                );
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.set_scale_factor(scale_factor);
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }

        // Always request redraw for Poll mode
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Convenience function to run an example
pub fn run_example<T: ExampleApp + 'static>() {
    env_logger::init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {e}");
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = AppRunner::new(T::new());

    println!("F: toggle frame profiling | ESC: quit");

    if let Err(e) = event_loop.run_app(&mut runner) {
        log::error!("Event loop error: {e}");
    }
}
