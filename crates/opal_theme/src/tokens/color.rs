//! Color tokens for theming

use std::fmt::{self, Display, Formatter};

/// Semantic color token keys.
///
/// This is the closed set of names every complete preset must cover. After a
/// preset is applied, each key resolves to exactly one color; an incomplete
/// preset is a configuration problem, not a silent gap.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Surface colors
    SurfaceBase,
    SurfacePanel,
    SurfaceElevated,
    SurfaceOverlay,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextDisabled,
    TextInverse,

    // Interactive (accent-bearing) colors
    InteractiveDefault,
    InteractiveHover,
    InteractivePressed,
    InteractiveDisabled,
    InteractiveText,

    // Neutral button colors
    NeutralDefault,
    NeutralHover,
    NeutralPressed,
    NeutralText,

    // Status colors
    StatusInfo,
    StatusSuccess,
    StatusWarning,
    StatusError,

    // Border colors
    BorderDefault,
    BorderSubtle,
    BorderFocus,

    // Shadow
    Shadow,

    // Link colors
    LinkDefault,
    LinkHover,

    // Close button colors
    CloseButtonDefault,
    CloseButtonHover,
    CloseButtonPressed,
}

impl ColorToken {
    /// Every token in the closed set, in declaration order.
    pub const ALL: &'static [ColorToken] = &[
        Self::SurfaceBase,
        Self::SurfacePanel,
        Self::SurfaceElevated,
        Self::SurfaceOverlay,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::TextDisabled,
        Self::TextInverse,
        Self::InteractiveDefault,
        Self::InteractiveHover,
        Self::InteractivePressed,
        Self::InteractiveDisabled,
        Self::InteractiveText,
        Self::NeutralDefault,
        Self::NeutralHover,
        Self::NeutralPressed,
        Self::NeutralText,
        Self::StatusInfo,
        Self::StatusSuccess,
        Self::StatusWarning,
        Self::StatusError,
        Self::BorderDefault,
        Self::BorderSubtle,
        Self::BorderFocus,
        Self::Shadow,
        Self::LinkDefault,
        Self::LinkHover,
        Self::CloseButtonDefault,
        Self::CloseButtonHover,
        Self::CloseButtonPressed,
    ];

    /// Stable wire name, used in preset files, configuration, and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::SurfaceBase => "SurfaceBase",
            Self::SurfacePanel => "SurfacePanel",
            Self::SurfaceElevated => "SurfaceElevated",
            Self::SurfaceOverlay => "SurfaceOverlay",
            Self::TextPrimary => "TextPrimary",
            Self::TextSecondary => "TextSecondary",
            Self::TextDisabled => "TextDisabled",
            Self::TextInverse => "TextInverse",
            Self::InteractiveDefault => "InteractiveDefault",
            Self::InteractiveHover => "InteractiveHover",
            Self::InteractivePressed => "InteractivePressed",
            Self::InteractiveDisabled => "InteractiveDisabled",
            Self::InteractiveText => "InteractiveText",
            Self::NeutralDefault => "NeutralDefault",
            Self::NeutralHover => "NeutralHover",
            Self::NeutralPressed => "NeutralPressed",
            Self::NeutralText => "NeutralText",
            Self::StatusInfo => "StatusInfo",
            Self::StatusSuccess => "StatusSuccess",
            Self::StatusWarning => "StatusWarning",
            Self::StatusError => "StatusError",
            Self::BorderDefault => "BorderDefault",
            Self::BorderSubtle => "BorderSubtle",
            Self::BorderFocus => "BorderFocus",
            Self::Shadow => "Shadow",
            Self::LinkDefault => "LinkDefault",
            Self::LinkHover => "LinkHover",
            Self::CloseButtonDefault => "CloseButtonDefault",
            Self::CloseButtonHover => "CloseButtonHover",
            Self::CloseButtonPressed => "CloseButtonPressed",
        }
    }

    /// Reverse lookup from a wire name. `None` for names outside the set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|token| token.name() == name)
    }
}

impl Display for ColorToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
