//! Accent color derivation
//!
//! A single brand color yields the full interactive family: hover and pressed
//! variants are fixed-percentage darkenings of the base, and the link tokens
//! mirror the same values. Derivation is pure; the facade applies the result
//! as a batch of token overrides each time the accent is set.

use opal_core::Color;

use crate::tokens::ColorToken;

/// Darkening factor for the hover variant. Part of the public contract:
/// `channel' = round(channel * (1 - 0.15))`, alpha unchanged.
pub const HOVER_DARKEN: f32 = 0.15;

/// Darkening factor for the pressed variant. Part of the public contract:
/// `channel' = round(channel * (1 - 0.30))`, alpha unchanged.
pub const PRESSED_DARKEN: f32 = 0.30;

/// The token values derived from one accent base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentSet {
    pub default: Color,
    pub hover: Color,
    pub pressed: Color,
    pub link_default: Color,
    pub link_hover: Color,
}

impl AccentSet {
    /// Derives the interactive family from a base color. Linear RGB scaling,
    /// no gamma correction.
    pub fn derive(base: Color) -> Self {
        let hover = base.darken(HOVER_DARKEN);
        Self {
            default: base,
            hover,
            pressed: base.darken(PRESSED_DARKEN),
            link_default: base,
            link_hover: hover,
        }
    }

    /// The derived values paired with the tokens they override.
    pub fn entries(&self) -> [(ColorToken, Color); 5] {
        [
            (ColorToken::InteractiveDefault, self.default),
            (ColorToken::InteractiveHover, self.hover),
            (ColorToken::InteractivePressed, self.pressed),
            (ColorToken::LinkDefault, self.link_default),
            (ColorToken::LinkHover, self.link_hover),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_exact() {
        let set = AccentSet::derive(Color::rgb(200, 100, 50));
        assert_eq!(set.default, Color::rgb(200, 100, 50));
        assert_eq!(set.hover, Color::rgb(170, 85, 42));
        assert_eq!(set.pressed, Color::rgb(140, 70, 35));
    }

    #[test]
    fn links_mirror_the_interactive_values() {
        let set = AccentSet::derive(Color::from_hex(0x1F6FEB));
        assert_eq!(set.link_default, set.default);
        assert_eq!(set.link_hover, set.hover);
    }

    #[test]
    fn alpha_passes_through_derivation() {
        let set = AccentSet::derive(Color::rgba(100, 100, 100, 128));
        assert_eq!(set.hover.a, 128);
        assert_eq!(set.pressed.a, 128);
    }
}
