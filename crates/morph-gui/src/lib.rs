//! # morph-gui
//!
//! Graphics backend agnostic layers, animations and controls.
//!
//! This crate provides the host capabilities a control builds on, with zero
//! dependencies on any specific graphics API. Rendering is handled by separate
//! backend crates like `morph-gui-wgpu`.
//!
//! ## Drawing
//!
//! - [`Layer`] - Drawable surface with animatable properties and sublayers
//! - [`PropertyAnimation`] - Keyframed animation of one layer property
//! - [`FullOutput`] - Flattened shapes ready for a backend
//!
//! ## Input & Events
//!
//! - [`InputState`] - Tracks the pointer across frames
//! - [`EventDispatcher`] - Turns input into control events via hit testing
//! - [`Control`] - Enabled/interaction flags and tap subscriptions
//!
//! ## Misc
//!
//! - [`Image`] - Solid color swatches

pub mod animation;
mod color;
mod control;
mod events;
mod input;
mod layer;
mod output;
mod primitives;
mod swatch;
pub mod transition;

pub use animation::{AnimatedProperty, PropertyAnimation, Repeat, Segment};
pub use color::*;
pub use control::*;
pub use events::*;
pub use input::*;
pub use layer::*;
pub use output::*;
pub use primitives::*;
pub use swatch::*;
pub use transition::*;
