//! Opal core primitives
//!
//! Shared leaf types for the Opal dialog and notification toolkit:
//!
//! - [`Color`]: 8-bit ARGB color with hex parsing and channel math
//! - [`UiContext`]: ownership token for the UI thread, used by stateful
//!   services to reject mutation from background threads

pub mod color;
pub mod context;

pub use color::{Color, ColorParseError};
pub use context::UiContext;
