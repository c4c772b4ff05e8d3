//! Opal Theme System
//!
//! Design-token theming for the Opal dialog and notification toolkit:
//! layered token resolution, built-in and custom presets, runtime overrides,
//! accent derivation, and brush synchronization.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: a closed set of semantic color names every preset
//!   must resolve
//! - **Layered resolution**: primitives, base semantics, optional legacy
//!   aliases, the active preset, and runtime overrides, last layer wins
//! - **Presets**: built-in light/dark baselines plus custom TOML presets
//!   addressed by a locator
//! - **Accent derivation**: hover/pressed/link variants computed from one
//!   brand color
//! - **Brush synchronization**: consumer-held handles that always reflect
//!   the latest resolved value
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use opal_core::{Color, UiContext};
//! use opal_theme::{ColorToken, ThemeConfig, ThemePreset, ThemeService};
//!
//! // Create the service at app startup, on the UI thread.
//! let theme = ThemeService::new(UiContext::capture(), ThemeConfig::default());
//! theme.ensure_loaded()?;
//!
//! // Hand brushes to visual consumers.
//! let accent = theme.brush(ColorToken::InteractiveDefault)?;
//!
//! // Mutations re-synchronize every brush.
//! theme.apply_preset(ThemePreset::Dark)?;
//! theme.set_accent_color(Color::from_hex(0x1F6FEB))?;
//! ```
//!
//! # Architecture
//!
//! All operations are synchronous, in-memory mutations followed by a
//! synchronization pass. The service is single-threaded by contract: it is
//! owned by the UI thread, and mutating calls from anywhere else fail with
//! [`ThemeError::WrongThread`] rather than being marshaled.
//!
//! Runtime overrides always form the top layer. Swapping presets never
//! disturbs them; [`ThemeService::clear_overrides`] is the only way to
//! remove them, and it removes all of them.

pub mod accent;
pub mod error;
pub mod layers;
pub mod legacy;
pub mod overrides;
pub mod presets;
pub mod service;
pub mod sync;
pub mod tokens;

// Re-export commonly used types
pub use accent::{AccentSet, HOVER_DARKEN, PRESSED_DARKEN};
pub use error::ThemeError;
pub use layers::{Layer, LayerId, LayerStack};
pub use legacy::{LegacySubscription, LegacyTheme, LegacyThemeAdapter};
pub use overrides::OverrideSet;
pub use presets::{PresetId, ThemePreset};
pub use service::{PresetChanged, Subscription, ThemeConfig, ThemeService};
pub use sync::{Brush, BrushSynchronizer, SyncTarget};
pub use tokens::*;
