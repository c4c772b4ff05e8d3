//! Ordered token layers and last-write-wins resolution
//!
//! The resolved theme is a stack of named layers, lowest priority first:
//! primitives, base semantics, optional legacy aliases, the active preset,
//! and runtime overrides. Resolving a token scans the stack from the top and
//! returns the first layer that defines it.

use opal_core::Color;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::ThemeError;
use crate::tokens::ColorToken;

/// Identity of a layer slot in the stack. At most one layer per id.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum LayerId {
    Primitives,
    BaseSemantics,
    LegacyAliases,
    Preset,
    Overrides,
}

/// One contributor to the resolved theme: a partial token-to-color mapping.
#[derive(Clone, Debug)]
pub struct Layer {
    id: LayerId,
    colors: FxHashMap<ColorToken, Color>,
}

impl Layer {
    pub fn new(id: LayerId) -> Self {
        Self {
            id,
            colors: FxHashMap::default(),
        }
    }

    pub fn with_colors(id: LayerId, colors: impl IntoIterator<Item = (ColorToken, Color)>) -> Self {
        Self {
            id,
            colors: colors.into_iter().collect(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn insert(&mut self, token: ColorToken, color: Color) {
        self.colors.insert(token, color);
    }

    pub fn get(&self, token: ColorToken) -> Option<Color> {
        self.colors.get(&token).copied()
    }

    pub fn contains(&self, token: ColorToken) -> bool {
        self.colors.contains_key(&token)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// The ordered layer stack.
///
/// Invariant: the overrides layer, when present, is always last. Swapping
/// the preset slot goes through [`install_preset`], which removes the
/// overrides layer, swaps the preset, and re-appends the overrides so they
/// stay topmost.
///
/// [`install_preset`]: LayerStack::install_preset
#[derive(Clone, Debug, Default)]
pub struct LayerStack {
    layers: SmallVec<[Layer; 5]>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer at the top of the stack. The slot must be vacant.
    pub fn push(&mut self, layer: Layer) {
        debug_assert!(
            self.layer(layer.id()).is_none(),
            "layer slot {:?} is already occupied",
            layer.id()
        );
        self.layers.push(layer);
    }

    /// Removes the layer in the given slot, preserving the relative order of
    /// the rest.
    pub fn remove(&mut self, id: LayerId) -> Option<Layer> {
        let index = self.layers.iter().position(|layer| layer.id() == id)?;
        Some(self.layers.remove(index))
    }

    /// Swaps the preset slot while keeping runtime overrides topmost:
    /// remove the overrides layer, replace the preset, re-append overrides.
    pub fn install_preset(&mut self, preset: Layer) {
        debug_assert_eq!(preset.id(), LayerId::Preset);
        let overrides = self.remove(LayerId::Overrides);
        self.remove(LayerId::Preset);
        self.layers.push(preset);
        if let Some(overrides) = overrides {
            self.layers.push(overrides);
        }
    }

    /// Replaces the overrides layer wholesale. Always lands on top.
    pub fn install_overrides(&mut self, overrides: Layer) {
        debug_assert_eq!(overrides.id(), LayerId::Overrides);
        self.remove(LayerId::Overrides);
        self.layers.push(overrides);
    }

    /// Resolves a token by scanning from the highest-priority layer down.
    pub fn resolve(&self, token: ColorToken) -> Result<Color, ThemeError> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.get(token))
            .ok_or(ThemeError::Unresolved(token))
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    /// Slot ids in stack order, lowest priority first.
    pub fn ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(Layer::id).collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
