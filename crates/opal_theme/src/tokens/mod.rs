//! Design tokens for theming
//!
//! Tokens are the named values a design system is built from. Opal's dialog
//! and notification surfaces consume color tokens exclusively; the set is
//! closed and enumerable so that a complete preset can be checked against it.

mod color;

pub use color::*;
