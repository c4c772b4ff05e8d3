//! Adapter for the pre-token theme API
//!
//! Older consumers configure theming through a single two-value property.
//! The adapter maps that surface 1:1 onto the facade: `set_theme` is
//! `apply_preset`, and the change event is a field-by-field translation of
//! the facade's preset notification. The adapter holds no state of its own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::ThemeError;
use crate::presets::{PresetId, ThemePreset};
use crate::service::{Subscription, ThemeService};

/// The legacy two-value theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegacyTheme {
    Light,
    Dark,
}

impl LegacyTheme {
    /// Legacy view of a preset id. Custom presets have no legacy
    /// equivalent.
    pub fn from_preset(preset: &PresetId) -> Option<Self> {
        match preset {
            PresetId::BuiltIn(ThemePreset::Light) => Some(Self::Light),
            PresetId::BuiltIn(ThemePreset::Dark) => Some(Self::Dark),
            PresetId::Custom { .. } => None,
        }
    }
}

impl From<LegacyTheme> for ThemePreset {
    fn from(theme: LegacyTheme) -> Self {
        match theme {
            LegacyTheme::Light => ThemePreset::Light,
            LegacyTheme::Dark => ThemePreset::Dark,
        }
    }
}

type LegacyListener = Box<dyn Fn(LegacyTheme, LegacyTheme) + Send + Sync>;

/// Handle for a legacy change-event registration.
#[derive(Debug)]
pub struct LegacySubscription(u64);

/// Wraps a [`ThemeService`] behind the single-property legacy surface.
pub struct LegacyThemeAdapter {
    service: Arc<ThemeService>,
    listeners: Arc<Mutex<Vec<(u64, LegacyListener)>>>,
    next_listener: AtomicU64,
    _forward: Subscription,
}

impl LegacyThemeAdapter {
    pub fn new(service: Arc<ThemeService>) -> Self {
        let listeners: Arc<Mutex<Vec<(u64, LegacyListener)>>> = Arc::default();
        let sink = Arc::clone(&listeners);
        let forward = service.subscribe(move |change| {
            // Transitions involving a custom preset do not exist in the
            // legacy model and are not re-emitted.
            let (Some(old), Some(new)) = (
                LegacyTheme::from_preset(&change.old),
                LegacyTheme::from_preset(&change.new),
            ) else {
                return;
            };
            for (_, listener) in sink.lock().unwrap().iter() {
                listener(old, new);
            }
        });
        Self {
            service,
            listeners,
            next_listener: AtomicU64::new(0),
            _forward: forward,
        }
    }

    /// The current theme. Custom presets report as `Light`, the legacy
    /// default.
    pub fn current_theme(&self) -> LegacyTheme {
        LegacyTheme::from_preset(&self.service.current_preset()).unwrap_or(LegacyTheme::Light)
    }

    /// Maps directly onto [`ThemeService::apply_preset`].
    pub fn set_theme(&self, theme: LegacyTheme) -> Result<(), ThemeError> {
        self.service.apply_preset(theme.into())
    }

    /// Registers a listener for `(old, new)` theme changes.
    pub fn on_theme_changed(
        &self,
        listener: impl Fn(LegacyTheme, LegacyTheme) + Send + Sync + 'static,
    ) -> LegacySubscription {
        let id = self.next_listener.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().unwrap().push((id, Box::new(listener)));
        LegacySubscription(id)
    }

    pub fn remove_theme_changed(&self, subscription: LegacySubscription) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|(id, _)| *id != subscription.0);
    }
}
