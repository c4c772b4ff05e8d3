//! Brush handles and consumer synchronization
//!
//! Visual consumers never read the layer stack directly. They hold a
//! [`Brush`] (a shared mutable color cell) or register a [`SyncTarget`]
//! adapter, and the synchronizer re-projects every resolved token value onto
//! them after each theme mutation. The invariant is that every consumer
//! reflects the latest resolved value; how a given UI toolkit reacts to the
//! new color (observable property, binding invalidation, repaint) lives in
//! its `SyncTarget` implementation.

use std::sync::{Arc, RwLock};

use opal_core::Color;
use rustc_hash::FxHashMap;

use crate::error::ThemeError;
use crate::layers::LayerStack;
use crate::tokens::ColorToken;

/// A shared, mutable color handle bound to one token.
///
/// Created lazily on the first synchronization pass, updated in place on
/// every subsequent pass, and never destroyed for the life of the service.
/// Cloning is cheap and clones observe the same cell.
#[derive(Clone, Debug)]
pub struct Brush {
    color: Arc<RwLock<Color>>,
}

impl Brush {
    fn new(color: Color) -> Self {
        Self {
            color: Arc::new(RwLock::new(color)),
        }
    }

    /// The most recently synchronized color.
    pub fn color(&self) -> Color {
        *self.color.read().unwrap()
    }

    fn set(&self, color: Color) {
        *self.color.write().unwrap() = color;
    }
}

/// Capability interface for pushing a resolved color into a UI toolkit.
pub trait SyncTarget: Send + Sync {
    fn apply(&self, color: Color);
}

impl<F: Fn(Color) + Send + Sync> SyncTarget for F {
    fn apply(&self, color: Color) {
        self(color)
    }
}

type RepaintCallback = Box<dyn Fn() + Send + Sync>;

/// Re-projects resolved token colors onto brushes and registered targets.
#[derive(Default)]
pub struct BrushSynchronizer {
    brushes: FxHashMap<ColorToken, Brush>,
    targets: Vec<(ColorToken, Box<dyn SyncTarget>)>,
    repaint: Option<RepaintCallback>,
}

impl BrushSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The brush for a token, once a synchronization pass has created it.
    pub fn brush(&self, token: ColorToken) -> Option<Brush> {
        self.brushes.get(&token).cloned()
    }

    pub fn register_target(&mut self, token: ColorToken, target: Box<dyn SyncTarget>) {
        self.targets.push((token, target));
    }

    /// Registers a callback invoked after every synchronization pass, for
    /// hosts that need a global redraw rather than per-target updates.
    pub fn set_repaint_callback(&mut self, callback: RepaintCallback) {
        self.repaint = Some(callback);
    }

    /// Pushes every resolved token color into its brush and into all
    /// registered targets. Brushes missing from the table are created;
    /// existing ones are mutated in place so held clones see the new value.
    pub fn sync_all(&mut self, stack: &LayerStack) -> Result<(), ThemeError> {
        for &token in ColorToken::ALL {
            let color = stack.resolve(token)?;
            match self.brushes.get(&token) {
                Some(brush) => brush.set(color),
                None => {
                    self.brushes.insert(token, Brush::new(color));
                }
            }
        }
        for (token, target) in &self.targets {
            target.apply(stack.resolve(*token)?);
        }
        tracing::trace!(
            brushes = self.brushes.len(),
            targets = self.targets.len(),
            "synchronized resolved colors"
        );
        if let Some(repaint) = &self.repaint {
            repaint();
        }
        Ok(())
    }
}
