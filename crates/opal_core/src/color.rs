//! 8-bit ARGB color

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error raised when color text cannot be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color string must be 6 or 8 hex digits, got {got} in {input:?}")]
    BadLength { input: String, got: usize },

    #[error("invalid hex digit in color string {input:?}")]
    BadDigit { input: String },
}

/// A color with 8-bit alpha, red, green, and blue channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color from red, green, and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    /// Multiplicative darkening: every color channel becomes
    /// `round(channel * (1 - factor))`, clamped to `[0, 255]`. Alpha is
    /// unchanged. Linear RGB scaling, no gamma correction.
    pub fn darken(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * (1.0 - factor)).round().clamp(0.0, 255.0) as u8;
        Self {
            a: self.a,
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    /// Linear interpolation between two colors, `t` in `[0, 1]`.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            a: mix(from.a, to.a),
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
        }
    }

    /// Hex form: `#RRGGBB` when fully opaque, `#AARRGGBB` otherwise.
    pub fn to_hex_string(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#RRGGBB` or `#AARRGGBB`; the leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::BadLength {
                input: s.to_string(),
                got: digits.len(),
            });
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit {
                input: s.to_string(),
            });
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::BadDigit {
            input: s.to_string(),
        })?;
        if digits.len() == 6 {
            Ok(Self::from_hex(value))
        } else {
            Ok(Self::rgba(
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
                ((value >> 24) & 0xFF) as u8,
            ))
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
