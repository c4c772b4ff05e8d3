use std::sync::{Arc, Mutex};
use std::thread;

use opal_core::{Color, UiContext};
use opal_theme::{
    ColorToken, LayerId, LegacyTheme, LegacyThemeAdapter, PresetChanged, PresetId, ThemeConfig,
    ThemeError, ThemePreset, ThemeService,
};

fn loaded_service() -> ThemeService {
    let service = ThemeService::new(UiContext::capture(), ThemeConfig::default());
    service.ensure_loaded().unwrap();
    service
}

#[test]
fn every_token_resolves_under_both_built_in_presets() {
    let service = loaded_service();
    for &preset in ThemePreset::all() {
        service.apply_preset(preset).unwrap();
        for &token in ColorToken::ALL {
            assert!(
                service.color(token).is_ok(),
                "{token} must resolve under {preset}"
            );
        }
    }
}

#[test]
fn override_survives_a_preset_swap() {
    let service = loaded_service();
    let custom = Color::from_hex(0xABCDEF);

    service
        .set_token(ColorToken::InteractiveDefault, custom)
        .unwrap();
    service.apply_preset(ThemePreset::Dark).unwrap();

    assert_eq!(
        service.color(ColorToken::InteractiveDefault).unwrap(),
        custom
    );
}

#[test]
fn clear_overrides_reverts_to_the_preset_value() {
    let service = loaded_service();
    service.apply_preset(ThemePreset::Dark).unwrap();
    let preset_value = ThemePreset::Dark
        .layer()
        .get(ColorToken::InteractiveDefault)
        .unwrap();

    service
        .set_token(ColorToken::InteractiveDefault, Color::from_hex(0x123456))
        .unwrap();
    assert_ne!(
        service.color(ColorToken::InteractiveDefault).unwrap(),
        preset_value
    );

    service.clear_overrides().unwrap();
    assert_eq!(
        service.color(ColorToken::InteractiveDefault).unwrap(),
        preset_value
    );
}

#[test]
fn accent_derivation_is_deterministic_and_exact() {
    let service = loaded_service();
    service.set_accent_color(Color::rgb(200, 100, 50)).unwrap();

    assert_eq!(
        service.color(ColorToken::InteractiveDefault).unwrap(),
        Color::rgb(200, 100, 50)
    );
    assert_eq!(
        service.color(ColorToken::InteractiveHover).unwrap(),
        Color::rgb(170, 85, 42)
    );
    assert_eq!(
        service.color(ColorToken::InteractivePressed).unwrap(),
        Color::rgb(140, 70, 35)
    );
    assert_eq!(
        service.color(ColorToken::LinkDefault).unwrap(),
        Color::rgb(200, 100, 50)
    );
    assert_eq!(
        service.color(ColorToken::LinkHover).unwrap(),
        Color::rgb(170, 85, 42)
    );
}

#[test]
fn ensure_loaded_is_idempotent() {
    let service = ThemeService::new(UiContext::capture(), ThemeConfig::default());
    service.ensure_loaded().unwrap();
    let ids = service.layer_ids();
    let resolved = service.resolved_map().unwrap();

    service.ensure_loaded().unwrap();

    assert_eq!(service.layer_ids(), ids);
    assert_eq!(service.resolved_map().unwrap(), resolved);
    assert_eq!(
        ids,
        vec![
            LayerId::Primitives,
            LayerId::BaseSemantics,
            LayerId::Preset,
            LayerId::Overrides,
        ]
    );
}

#[test]
fn preset_change_fires_exactly_one_notification() {
    let service = loaded_service();
    let seen: Arc<Mutex<Vec<PresetChanged>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let _sub = service.subscribe(move |change| sink.lock().unwrap().push(change.clone()));

    service.apply_preset(ThemePreset::Dark).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].old, PresetId::BuiltIn(ThemePreset::Light));
    assert_eq!(seen[0].new, PresetId::BuiltIn(ThemePreset::Dark));
    assert_eq!(seen[0].custom_name(), None);
}

#[test]
fn reapplying_the_active_preset_fires_nothing() {
    let service = loaded_service();
    let count: Arc<Mutex<usize>> = Arc::default();
    let sink = Arc::clone(&count);
    let _sub = service.subscribe(move |_| *sink.lock().unwrap() += 1);

    service.apply_preset(ThemePreset::Light).unwrap();

    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn token_and_accent_mutations_fire_no_notification() {
    let service = loaded_service();
    let count: Arc<Mutex<usize>> = Arc::default();
    let sink = Arc::clone(&count);
    let _sub = service.subscribe(move |_| *sink.lock().unwrap() += 1);

    service
        .set_token(ColorToken::LinkDefault, Color::WHITE)
        .unwrap();
    service.set_accent_color(Color::from_hex(0x1F6FEB)).unwrap();
    service.clear_overrides().unwrap();

    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn unsubscribed_listeners_stop_receiving() {
    let service = loaded_service();
    let count: Arc<Mutex<usize>> = Arc::default();
    let sink = Arc::clone(&count);
    let sub = service.subscribe(move |_| *sink.lock().unwrap() += 1);

    service.unsubscribe(sub);
    service.apply_preset(ThemePreset::Dark).unwrap();

    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn off_thread_mutation_is_rejected_and_leaves_state_unchanged() {
    let service = Arc::new(loaded_service());
    let before = service.color(ColorToken::InteractiveDefault).unwrap();

    let worker = Arc::clone(&service);
    let result = thread::spawn(move || {
        worker.set_token(ColorToken::InteractiveDefault, Color::from_hex(0xFF0000))
    })
    .join()
    .unwrap();

    assert!(matches!(result, Err(ThemeError::WrongThread)));
    assert_eq!(
        service.color(ColorToken::InteractiveDefault).unwrap(),
        before
    );
}

#[test]
fn current_preset_reads_are_allowed_off_thread() {
    let service = Arc::new(loaded_service());
    let worker = Arc::clone(&service);

    let preset = thread::spawn(move || worker.current_preset()).join().unwrap();

    assert_eq!(preset, PresetId::BuiltIn(ThemePreset::Light));
}

#[test]
fn legacy_adapter_round_trips_through_the_facade() {
    let service = Arc::new(loaded_service());
    let adapter = LegacyThemeAdapter::new(Arc::clone(&service));

    let seen: Arc<Mutex<Vec<(LegacyTheme, LegacyTheme)>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let _sub = adapter.on_theme_changed(move |old, new| sink.lock().unwrap().push((old, new)));

    adapter.set_theme(LegacyTheme::Dark).unwrap();

    assert_eq!(
        service.current_preset(),
        PresetId::BuiltIn(ThemePreset::Dark)
    );
    assert_eq!(adapter.current_theme(), LegacyTheme::Dark);
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[(LegacyTheme::Light, LegacyTheme::Dark)]
    );
}

#[test]
fn brushes_held_by_consumers_track_mutations() {
    let service = loaded_service();
    let brush = service.brush(ColorToken::InteractiveDefault).unwrap();

    service.set_accent_color(Color::rgb(10, 20, 30)).unwrap();
    assert_eq!(brush.color(), Color::rgb(10, 20, 30));

    service.clear_overrides().unwrap();
    assert_eq!(
        brush.color(),
        service.color(ColorToken::InteractiveDefault).unwrap()
    );
}

#[test]
fn registered_sync_targets_see_the_current_and_later_values() {
    let service = loaded_service();
    let seen: Arc<Mutex<Vec<Color>>> = Arc::default();
    let sink = Arc::clone(&seen);

    service
        .register_sync_target(
            ColorToken::SurfaceBase,
            Box::new(move |color: Color| sink.lock().unwrap().push(color)),
        )
        .unwrap();
    service.apply_preset(ThemePreset::Dark).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.first().copied(), Some(Color::WHITE));
    assert_eq!(
        seen.last().copied(),
        Some(ThemePreset::Dark.layer().get(ColorToken::SurfaceBase).unwrap())
    );
}

#[test]
fn resolved_map_serializes_for_export() {
    let service = loaded_service();
    let map = service.resolved_map().unwrap();
    assert_eq!(map.len(), ColorToken::ALL.len());

    let json = serde_json::to_string(&map).unwrap();
    assert!(json.contains("\"SurfaceBase\""));
    assert!(json.contains("\"#FFFFFF\""));
}

#[test]
fn malformed_color_text_is_surfaced_to_the_caller() {
    let service = loaded_service();

    assert!(matches!(
        service.set_token_by_name("LinkDefault", "#12XYZ8"),
        Err(ThemeError::InvalidColor(_))
    ));
    assert!(matches!(
        service.set_token_by_name("NotAToken", "#123456"),
        Err(ThemeError::UnknownToken { .. })
    ));
}
