use opal_core::ColorParseError;
use thiserror::Error;

use crate::tokens::ColorToken;

/// Errors surfaced by theme operations.
///
/// Every variant propagates synchronously to the caller of the operation
/// that triggered it; nothing is swallowed or retried internally.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A token name outside the closed set was supplied by a caller or a
    /// configuration source.
    #[error("unknown theme token name {name:?}")]
    UnknownToken { name: String },

    /// A token in the closed set did not resolve to a color. Cannot happen
    /// once a preset is installed; hitting this is a programming error.
    #[error("token {0:?} does not resolve to a color in any layer")]
    Unresolved(ColorToken),

    /// A custom preset source was unreachable or malformed. The preset is
    /// not applied, not even partially.
    #[error("failed to load theme preset from {locator:?}: {reason}")]
    PresetLoad { locator: String, reason: String },

    /// A mutating theme operation was invoked off the UI thread.
    #[error("theme mutation invoked off the UI thread")]
    WrongThread,

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),
}
