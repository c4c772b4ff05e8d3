//! Runtime token overrides
//!
//! The override set is the topmost layer of the resolved theme. Entries are
//! set individually and only ever cleared en masse: there is no per-key
//! removal, so callers needing partial rollback must capture prior state
//! themselves. Overrides survive preset swaps until explicitly cleared.

use opal_core::Color;
use rustc_hash::FxHashMap;

use crate::layers::{Layer, LayerId};
use crate::tokens::ColorToken;

#[derive(Clone, Debug, Default)]
pub struct OverrideSet {
    colors: FxHashMap<ColorToken, Color>,
}

impl OverrideSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an override. Last write per token wins.
    pub fn set(&mut self, token: ColorToken, color: Color) {
        self.colors.insert(token, color);
    }

    /// Removes every override atomically.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn get(&self, token: ColorToken) -> Option<Color> {
        self.colors.get(&token).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Projects the set into the overrides layer slot.
    pub fn to_layer(&self) -> Layer {
        Layer::with_colors(
            LayerId::Overrides,
            self.colors.iter().map(|(&token, &color)| (token, color)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins_per_token() {
        let mut set = OverrideSet::new();
        set.set(ColorToken::LinkDefault, Color::from_hex(0x111111));
        set.set(ColorToken::LinkDefault, Color::from_hex(0x222222));
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(ColorToken::LinkDefault),
            Some(Color::from_hex(0x222222))
        );
    }

    #[test]
    fn clear_removes_everything() {
        let mut set = OverrideSet::new();
        set.set(ColorToken::LinkDefault, Color::WHITE);
        set.set(ColorToken::Shadow, Color::BLACK);
        set.clear();
        assert!(set.is_empty());
        assert!(set.to_layer().is_empty());
    }
}
