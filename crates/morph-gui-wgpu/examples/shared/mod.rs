//! Shared modules for `morph-gui-wgpu` examples.

pub mod example_app;
pub mod gpu_state;
pub mod interactive;
pub mod runner;

// Re-export commonly used items
pub use example_app::ExampleApp;
pub use runner::run_example;
