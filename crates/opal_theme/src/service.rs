//! Theme service facade
//!
//! One `ThemeService` instance exists per application, created by the
//! composition root on the UI thread and passed to every consumer that needs
//! it. All theme mutation funnels through this type: mutate the layer stack,
//! re-synchronize brushes, then notify subscribers (preset changes only).
//! Mutating operations must run on the UI thread and fail with
//! [`ThemeError::WrongThread`] anywhere else; reads are safe from any thread.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};

use opal_core::{Color, UiContext};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::accent::AccentSet;
use crate::error::ThemeError;
use crate::layers::{LayerId, LayerStack};
use crate::overrides::OverrideSet;
use crate::presets::{self, PresetId, ThemePreset};
use crate::sync::{Brush, BrushSynchronizer, SyncTarget};
use crate::tokens::ColorToken;

/// Startup configuration for the theme service.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Initial built-in preset.
    pub default_preset: ThemePreset,
    /// Accent applied as a derivation batch right after the preset loads.
    pub accent_color: Option<Color>,
    /// When set, overrides `default_preset` as the initial preset source.
    pub custom_preset_locator: Option<String>,
    /// Token-name to color-text overrides applied after preset and accent.
    pub token_overrides: FxHashMap<String, String>,
    /// Loads legacy-named aliases as an extra layer beneath the preset.
    pub include_legacy_compatibility: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_preset: ThemePreset::Light,
            accent_color: None,
            custom_preset_locator: None,
            token_overrides: FxHashMap::default(),
            include_legacy_compatibility: false,
        }
    }
}

/// Notification payload for preset changes.
#[derive(Clone, Debug)]
pub struct PresetChanged {
    pub old: PresetId,
    pub new: PresetId,
}

impl PresetChanged {
    /// Display name of the newly applied custom preset, if any.
    pub fn custom_name(&self) -> Option<&str> {
        self.new.custom_name()
    }
}

/// Handle returned by [`ThemeService::subscribe`]; pass it back to
/// [`ThemeService::unsubscribe`] to stop receiving notifications.
#[derive(Debug)]
pub struct Subscription(u64);

type Listener = Box<dyn Fn(&PresetChanged) + Send + Sync>;

/// The theme subsystem's public operation surface.
pub struct ThemeService {
    ctx: UiContext,
    config: ThemeConfig,
    loaded: AtomicBool,
    stack: RwLock<LayerStack>,
    overrides: RwLock<OverrideSet>,
    current: RwLock<PresetId>,
    sync: Mutex<BrushSynchronizer>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener: AtomicU64,
}

impl ThemeService {
    /// Creates the service. Nothing is resolved until [`ensure_loaded`]
    /// runs, either directly or through the first mutating operation.
    ///
    /// [`ensure_loaded`]: ThemeService::ensure_loaded
    pub fn new(ctx: UiContext, config: ThemeConfig) -> Self {
        let initial = match &config.custom_preset_locator {
            Some(locator) => PresetId::Custom {
                locator: locator.clone(),
                display_name: None,
            },
            None => PresetId::BuiltIn(config.default_preset),
        };
        Self {
            ctx,
            config,
            loaded: AtomicBool::new(false),
            stack: RwLock::new(LayerStack::new()),
            overrides: RwLock::new(OverrideSet::new()),
            current: RwLock::new(initial),
            sync: Mutex::new(BrushSynchronizer::new()),
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        }
    }

    /// Builds the layer stack from configuration and runs the first
    /// synchronization pass. Idempotent; repeat calls no-op. Fires no
    /// change notification.
    pub fn ensure_loaded(&self) -> Result<(), ThemeError> {
        self.ensure_owner()?;
        if self.loaded.load(Ordering::SeqCst) {
            return Ok(());
        }

        let mut stack = LayerStack::new();
        stack.push(presets::primitives_layer());
        stack.push(presets::base_semantics_layer());
        if self.config.include_legacy_compatibility {
            stack.push(presets::legacy_aliases_layer());
        }

        let initial = if let Some(locator) = &self.config.custom_preset_locator {
            let (layer, name) = presets::load_custom(locator)?;
            presets::validate_preset(&layer);
            stack.push(layer);
            PresetId::Custom {
                locator: locator.clone(),
                display_name: name,
            }
        } else {
            let preset = self.config.default_preset;
            stack.push(preset.layer());
            PresetId::BuiltIn(preset)
        };

        let mut overrides = OverrideSet::new();
        if let Some(accent) = self.config.accent_color {
            for (token, color) in AccentSet::derive(accent).entries() {
                overrides.set(token, color);
            }
        }
        for (name, value) in &self.config.token_overrides {
            let token = ColorToken::from_name(name).ok_or_else(|| ThemeError::UnknownToken {
                name: name.clone(),
            })?;
            let color: Color = value.parse()?;
            overrides.set(token, color);
        }
        stack.install_overrides(overrides.to_layer());

        *self.stack.write().unwrap() = stack;
        *self.overrides.write().unwrap() = overrides;
        *self.current.write().unwrap() = initial;
        self.loaded.store(true, Ordering::SeqCst);
        self.sync_all()?;
        tracing::debug!(preset = %self.current_preset(), "theme service loaded");
        Ok(())
    }

    /// Applies a built-in preset. Runtime overrides survive the swap.
    pub fn apply_preset(&self, preset: ThemePreset) -> Result<(), ThemeError> {
        self.ensure_owner()?;
        self.ensure_loaded()?;

        let old = self.current_preset();
        let new = PresetId::BuiltIn(preset);
        if old == new {
            tracing::debug!(preset = preset.id(), "preset already active");
            return Ok(());
        }

        tracing::debug!(old = %old, new = preset.id(), "switching theme preset");
        let layer = preset.layer();
        presets::validate_preset(&layer);
        self.stack.write().unwrap().install_preset(layer);
        *self.current.write().unwrap() = new.clone();
        self.sync_all()?;
        self.notify(&PresetChanged { old, new });
        Ok(())
    }

    /// Loads and applies a custom preset. A broken source fails the whole
    /// operation; the active preset stays untouched. An explicit
    /// `display_name` wins over the name carried in the document.
    pub fn apply_custom_preset(
        &self,
        locator: &str,
        display_name: Option<&str>,
    ) -> Result<(), ThemeError> {
        self.ensure_owner()?;
        self.ensure_loaded()?;

        let (layer, doc_name) = presets::load_custom(locator)?;
        presets::validate_preset(&layer);

        let old = self.current_preset();
        let new = PresetId::Custom {
            locator: locator.to_string(),
            display_name: display_name.map(str::to_string).or(doc_name),
        };
        tracing::debug!(old = %old, new = %new, "switching to custom preset");
        self.stack.write().unwrap().install_preset(layer);
        *self.current.write().unwrap() = new.clone();
        self.sync_all()?;
        self.notify(&PresetChanged { old, new });
        Ok(())
    }

    /// Overrides one token. The override outlives preset swaps until
    /// [`clear_overrides`] removes it.
    ///
    /// [`clear_overrides`]: ThemeService::clear_overrides
    pub fn set_token(&self, token: ColorToken, color: Color) -> Result<(), ThemeError> {
        self.ensure_owner()?;
        self.ensure_loaded()?;

        let mut overrides = self.overrides.write().unwrap();
        overrides.set(token, color);
        self.stack
            .write()
            .unwrap()
            .install_overrides(overrides.to_layer());
        drop(overrides);
        self.sync_all()
    }

    /// String-driven variant of [`set_token`] for input boundaries such as a
    /// color-picker text field.
    ///
    /// [`set_token`]: ThemeService::set_token
    pub fn set_token_by_name(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        let token = ColorToken::from_name(name).ok_or_else(|| ThemeError::UnknownToken {
            name: name.to_string(),
        })?;
        let color: Color = value.parse()?;
        self.set_token(token, color)
    }

    /// Derives the interactive family from `base` and applies it as a batch
    /// of overrides. Re-applied in full on every call; like any override,
    /// the batch is removed only by [`clear_overrides`].
    ///
    /// [`clear_overrides`]: ThemeService::clear_overrides
    pub fn set_accent_color(&self, base: Color) -> Result<(), ThemeError> {
        self.ensure_owner()?;
        self.ensure_loaded()?;

        let mut overrides = self.overrides.write().unwrap();
        for (token, color) in AccentSet::derive(base).entries() {
            overrides.set(token, color);
        }
        self.stack
            .write()
            .unwrap()
            .install_overrides(overrides.to_layer());
        drop(overrides);
        self.sync_all()
    }

    /// Removes every runtime override atomically. There is no per-token
    /// removal; callers wanting partial rollback must capture prior state.
    pub fn clear_overrides(&self) -> Result<(), ThemeError> {
        self.ensure_owner()?;
        self.ensure_loaded()?;

        let mut overrides = self.overrides.write().unwrap();
        overrides.clear();
        self.stack
            .write()
            .unwrap()
            .install_overrides(overrides.to_layer());
        drop(overrides);
        self.sync_all()
    }

    /// The active preset. Before loading, this reports the configured
    /// default. Safe from any thread.
    pub fn current_preset(&self) -> PresetId {
        self.current.read().unwrap().clone()
    }

    /// The resolved color for a token. Safe from any thread.
    pub fn color(&self, token: ColorToken) -> Result<Color, ThemeError> {
        self.stack.read().unwrap().resolve(token)
    }

    /// Every token's resolved color as wire-name to hex-string pairs, for
    /// debug surfaces and export.
    pub fn resolved_map(&self) -> Result<FxHashMap<&'static str, String>, ThemeError> {
        let stack = self.stack.read().unwrap();
        let mut map = FxHashMap::default();
        for &token in ColorToken::ALL {
            map.insert(token.name(), stack.resolve(token)?.to_hex_string());
        }
        Ok(map)
    }

    /// The shared brush handle for a token. Loads the service if needed.
    pub fn brush(&self, token: ColorToken) -> Result<Brush, ThemeError> {
        self.ensure_owner()?;
        self.ensure_loaded()?;
        self.sync
            .lock()
            .unwrap()
            .brush(token)
            .ok_or(ThemeError::Unresolved(token))
    }

    /// Registers a toolkit adapter for a token. The target receives the
    /// current resolved color immediately and every later pass.
    pub fn register_sync_target(
        &self,
        token: ColorToken,
        target: Box<dyn SyncTarget>,
    ) -> Result<(), ThemeError> {
        self.ensure_owner()?;
        self.ensure_loaded()?;
        target.apply(self.stack.read().unwrap().resolve(token)?);
        self.sync.lock().unwrap().register_target(token, target);
        Ok(())
    }

    /// Registers a callback invoked after every synchronization pass.
    pub fn set_repaint_callback(&self, callback: Box<dyn Fn() + Send + Sync>) {
        self.sync.lock().unwrap().set_repaint_callback(callback);
    }

    /// Subscribes to preset-change notifications. Listeners run
    /// synchronously on the UI thread, inside the mutating operation.
    pub fn subscribe(
        &self,
        listener: impl Fn(&PresetChanged) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_listener.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().unwrap().push((id, Box::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|(id, _)| *id != subscription.0);
    }

    /// Layer slot ids in stack order, for diagnostics.
    pub fn layer_ids(&self) -> Vec<LayerId> {
        self.stack.read().unwrap().ids()
    }

    fn ensure_owner(&self) -> Result<(), ThemeError> {
        if self.ctx.is_owner() {
            Ok(())
        } else {
            Err(ThemeError::WrongThread)
        }
    }

    fn sync_all(&self) -> Result<(), ThemeError> {
        let stack = self.stack.read().unwrap();
        self.sync.lock().unwrap().sync_all(&stack)
    }

    fn notify(&self, change: &PresetChanged) {
        for (_, listener) in self.listeners.lock().unwrap().iter() {
            listener(change);
        }
    }
}
