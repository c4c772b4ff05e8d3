//! Built-in theme presets and the custom preset loader
//!
//! Two built-in presets ship with the toolkit: a light and a dark baseline.
//! Custom presets are TOML documents mapping token names to hex colors,
//! addressed by a stable locator string (a file path in this implementation):
//!
//! ```toml
//! name = "Ocean"
//!
//! [colors]
//! SurfaceBase = "#0B1D2A"
//! InteractiveDefault = "#1F6FEB"
//! ```
//!
//! A custom preset may be partial; anything it leaves out falls through to
//! the base semantic layer. Every loaded preset is checked against the closed
//! token set and missing names are logged as warnings so incomplete presets
//! are caught early.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::fs;

use opal_core::{Color, ColorParseError};
use serde::Deserialize;

use crate::accent::{HOVER_DARKEN, PRESSED_DARKEN};
use crate::error::ThemeError;
use crate::layers::{Layer, LayerId};
use crate::tokens::ColorToken;

/// Light palette, adapted from Catppuccin Latte.
mod dawn {
    use opal_core::Color;

    pub const BASE: Color = Color::from_hex(0xEFF1F5);
    pub const MANTLE: Color = Color::from_hex(0xE6E9EF);
    pub const CRUST: Color = Color::from_hex(0xDCE0E8);
    pub const SURFACE0: Color = Color::from_hex(0xCCD0DA);
    pub const SURFACE1: Color = Color::from_hex(0xBCC0CC);
    pub const TEXT: Color = Color::from_hex(0x4C4F69);
    pub const SUBTEXT: Color = Color::from_hex(0x6C6F85);
    pub const OVERLAY: Color = Color::from_hex(0x9CA0B0);
    pub const BLUE: Color = Color::from_hex(0x1E66F5);
    pub const SKY: Color = Color::from_hex(0x04A5E5);
    pub const GREEN: Color = Color::from_hex(0x40A02B);
    pub const YELLOW: Color = Color::from_hex(0xDF8E1D);
    pub const RED: Color = Color::from_hex(0xD20F39);
}

/// Dark palette, adapted from Catppuccin Mocha.
mod dusk {
    use opal_core::Color;

    pub const BASE: Color = Color::from_hex(0x1E1E2E);
    pub const MANTLE: Color = Color::from_hex(0x181825);
    pub const CRUST: Color = Color::from_hex(0x11111B);
    pub const SURFACE0: Color = Color::from_hex(0x313244);
    pub const SURFACE1: Color = Color::from_hex(0x45475A);
    pub const SURFACE2: Color = Color::from_hex(0x585B70);
    pub const TEXT: Color = Color::from_hex(0xCDD6F4);
    pub const SUBTEXT: Color = Color::from_hex(0xBAC2DE);
    pub const OVERLAY: Color = Color::from_hex(0x6C7086);
    pub const BLUE: Color = Color::from_hex(0x89B4FA);
    pub const SKY: Color = Color::from_hex(0x89DCEB);
    pub const GREEN: Color = Color::from_hex(0xA6E3A1);
    pub const YELLOW: Color = Color::from_hex(0xF9E2AF);
    pub const RED: Color = Color::from_hex(0xF38BA8);
}

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    Light,
    Dark,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Light, ThemePreset::Dark];
        &PRESETS
    }

    /// Builds the complete preset layer for this built-in.
    pub fn layer(self) -> Layer {
        match self {
            Self::Light => light_layer(),
            Self::Dark => dark_layer(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Identity of the active preset, built-in or custom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresetId {
    BuiltIn(ThemePreset),
    Custom {
        locator: String,
        display_name: Option<String>,
    },
}

impl PresetId {
    /// User-facing name: the built-in name, the custom display name, or the
    /// locator when a custom preset is anonymous.
    pub fn display_name(&self) -> &str {
        match self {
            Self::BuiltIn(preset) => preset.display_name(),
            Self::Custom {
                display_name: Some(name),
                ..
            } => name,
            Self::Custom { locator, .. } => locator,
        }
    }

    /// The custom display name, when this is a named custom preset.
    pub fn custom_name(&self) -> Option<&str> {
        match self {
            Self::Custom { display_name, .. } => display_name.as_deref(),
            Self::BuiltIn(_) => None,
        }
    }
}

impl Display for PresetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

fn light_layer() -> Layer {
    use ColorToken::*;
    Layer::with_colors(
        LayerId::Preset,
        [
            (SurfaceBase, Color::WHITE),
            (SurfacePanel, dawn::BASE),
            (SurfaceElevated, Color::WHITE),
            (SurfaceOverlay, dawn::MANTLE),
            (TextPrimary, dawn::TEXT),
            (TextSecondary, dawn::SUBTEXT),
            (TextDisabled, dawn::OVERLAY),
            (TextInverse, Color::WHITE),
            (InteractiveDefault, dawn::BLUE),
            (InteractiveHover, dawn::BLUE.darken(HOVER_DARKEN)),
            (InteractivePressed, dawn::BLUE.darken(PRESSED_DARKEN)),
            (InteractiveDisabled, dawn::SURFACE1),
            (InteractiveText, Color::WHITE),
            (NeutralDefault, dawn::SURFACE0),
            (NeutralHover, dawn::SURFACE1),
            (NeutralPressed, dawn::CRUST),
            (NeutralText, dawn::TEXT),
            (StatusInfo, dawn::SKY),
            (StatusSuccess, dawn::GREEN),
            (StatusWarning, dawn::YELLOW),
            (StatusError, dawn::RED),
            (BorderDefault, dawn::SURFACE0),
            (BorderSubtle, dawn::MANTLE),
            (BorderFocus, dawn::BLUE),
            (Shadow, Color::BLACK.with_alpha(0x59)),
            (LinkDefault, dawn::BLUE),
            (LinkHover, dawn::BLUE.darken(HOVER_DARKEN)),
            (CloseButtonDefault, dawn::SUBTEXT),
            (CloseButtonHover, dawn::TEXT),
            (CloseButtonPressed, dawn::OVERLAY),
        ],
    )
}

fn dark_layer() -> Layer {
    use ColorToken::*;
    Layer::with_colors(
        LayerId::Preset,
        [
            (SurfaceBase, dusk::BASE),
            (SurfacePanel, dusk::MANTLE),
            (SurfaceElevated, dusk::SURFACE0),
            (SurfaceOverlay, dusk::CRUST),
            (TextPrimary, dusk::TEXT),
            (TextSecondary, dusk::SUBTEXT),
            (TextDisabled, dusk::OVERLAY),
            (TextInverse, dusk::CRUST),
            (InteractiveDefault, dusk::BLUE),
            (InteractiveHover, dusk::BLUE.darken(HOVER_DARKEN)),
            (InteractivePressed, dusk::BLUE.darken(PRESSED_DARKEN)),
            (InteractiveDisabled, dusk::SURFACE2),
            (InteractiveText, dusk::CRUST),
            (NeutralDefault, dusk::SURFACE0),
            (NeutralHover, dusk::SURFACE1),
            (NeutralPressed, dusk::SURFACE2),
            (NeutralText, dusk::TEXT),
            (StatusInfo, dusk::SKY),
            (StatusSuccess, dusk::GREEN),
            (StatusWarning, dusk::YELLOW),
            (StatusError, dusk::RED),
            (BorderDefault, dusk::SURFACE1),
            (BorderSubtle, dusk::SURFACE0),
            (BorderFocus, dusk::BLUE),
            (Shadow, Color::BLACK.with_alpha(0x8C)),
            (LinkDefault, dusk::BLUE),
            (LinkHover, dusk::BLUE.darken(HOVER_DARKEN)),
            (CloseButtonDefault, dusk::SUBTEXT),
            (CloseButtonHover, dusk::TEXT),
            (CloseButtonPressed, dusk::OVERLAY),
        ],
    )
}

/// The lowest layer: raw values that hold regardless of the active preset.
pub fn primitives_layer() -> Layer {
    Layer::with_colors(
        LayerId::Primitives,
        [
            (ColorToken::Shadow, Color::BLACK.with_alpha(0x59)),
            (ColorToken::TextInverse, Color::WHITE),
        ],
    )
}

/// Base semantic defaults: the complete light mapping. Guarantees that every
/// token in the closed set resolves even under a partial custom preset.
pub fn base_semantics_layer() -> Layer {
    let light = light_layer();
    Layer::with_colors(
        LayerId::BaseSemantics,
        ColorToken::ALL
            .iter()
            .filter_map(|&token| light.get(token).map(|color| (token, color))),
    )
}

/// Aliases carried for consumers of the pre-token theme API. Sits beneath the
/// active preset so any preset value still wins.
pub fn legacy_aliases_layer() -> Layer {
    use ColorToken::*;
    Layer::with_colors(
        LayerId::LegacyAliases,
        [
            (InteractiveDefault, Color::from_hex(0x3B82F6)),
            (InteractiveHover, Color::from_hex(0x326FD1)),
            (InteractivePressed, Color::from_hex(0x295BAC)),
            (LinkDefault, Color::from_hex(0x3B82F6)),
            (BorderFocus, Color::from_hex(0x3B82F6)),
        ],
    )
}

#[derive(Debug, Deserialize)]
struct PresetDocument {
    #[serde(default)]
    name: Option<String>,
    colors: BTreeMap<String, String>,
}

fn load_error(locator: &str, reason: impl Display) -> ThemeError {
    ThemeError::PresetLoad {
        locator: locator.to_string(),
        reason: reason.to_string(),
    }
}

/// Loads a custom preset from its locator.
///
/// Fails without applying anything when the source is unreachable or
/// malformed. Unknown token names are skipped with a warning; malformed
/// colors are load errors. Returns the preset layer and the document's
/// optional display name.
pub fn load_custom(locator: &str) -> Result<(Layer, Option<String>), ThemeError> {
    let text = fs::read_to_string(locator).map_err(|err| load_error(locator, err))?;
    let doc: PresetDocument = toml::from_str(&text).map_err(|err| load_error(locator, err))?;

    let mut layer = Layer::new(LayerId::Preset);
    for (name, value) in &doc.colors {
        let Some(token) = ColorToken::from_name(name) else {
            tracing::warn!(locator, name = %name, "custom preset names an unknown token, skipping");
            continue;
        };
        let color: Color = value
            .parse()
            .map_err(|err: ColorParseError| load_error(locator, format!("{name}: {err}")))?;
        layer.insert(token, color);
    }
    tracing::debug!(locator, tokens = layer.len(), "loaded custom preset");
    Ok((layer, doc.name))
}

/// Checks a preset layer against the closed token set. Missing names are
/// logged as warnings and returned for callers that want to inspect them;
/// an incomplete preset is diagnosed, never rejected.
pub fn validate_preset(layer: &Layer) -> Vec<ColorToken> {
    let missing: Vec<ColorToken> = ColorToken::ALL
        .iter()
        .copied()
        .filter(|&token| !layer.contains(token))
        .collect();
    for &token in &missing {
        tracing::warn!(token = token.name(), "preset does not define required token");
    }
    missing
}
