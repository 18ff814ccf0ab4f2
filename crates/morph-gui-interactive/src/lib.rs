//! # morph-gui-interactive
//!
//! Interactive components built on the morph-gui layer tree.
//!
//! The main component is [`LoaderButton`], a button that morphs into a
//! spinning loading indicator and back. The [`Spinner`] overlay and the
//! [`Blink`] pulse it uses are available on their own as well.

mod blink;
mod loader_button;
mod morph;
mod spinner;

pub use blink::*;
pub use loader_button::*;
pub use morph::*;
pub use spinner::*;
