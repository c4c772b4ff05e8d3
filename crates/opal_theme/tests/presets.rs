use std::io::Write as _;
use std::sync::{Arc, Mutex};

use opal_core::{Color, UiContext};
use opal_theme::{
    ColorToken, PresetChanged, PresetId, ThemeConfig, ThemeError, ThemePreset, ThemeService,
};

const OCEAN: &str = r##"
name = "Ocean"

[colors]
SurfaceBase = "#0B1D2A"
InteractiveDefault = "#1F6FEB"
"##;

fn write_preset(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn loaded_service() -> ThemeService {
    let service = ThemeService::new(UiContext::capture(), ThemeConfig::default());
    service.ensure_loaded().unwrap();
    service
}

#[test]
fn preset_catalog_contains_expected_presets() {
    let ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["light", "dark"]);
    assert_eq!(ThemePreset::Light.display_name(), "Light");
    assert_eq!(ThemePreset::Dark.to_string(), "Dark");
}

#[test]
fn custom_preset_applies_and_notifies_with_its_name() {
    let file = write_preset(OCEAN);
    let service = loaded_service();

    let seen: Arc<Mutex<Vec<PresetChanged>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let _sub = service.subscribe(move |change| sink.lock().unwrap().push(change.clone()));

    service
        .apply_custom_preset(file.path().to_str().unwrap(), None)
        .unwrap();

    assert_eq!(
        service.color(ColorToken::SurfaceBase).unwrap(),
        Color::from_hex(0x0B1D2A)
    );
    assert_eq!(service.current_preset().custom_name(), Some("Ocean"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].old, PresetId::BuiltIn(ThemePreset::Light));
    assert_eq!(seen[0].custom_name(), Some("Ocean"));
}

#[test]
fn partial_custom_preset_falls_back_to_base_semantics() {
    let file = write_preset(OCEAN);
    let service = loaded_service();
    service
        .apply_custom_preset(file.path().to_str().unwrap(), None)
        .unwrap();

    // The document only defines two tokens; the rest must still resolve.
    for &token in ColorToken::ALL {
        assert!(service.color(token).is_ok(), "{token} must resolve");
    }
    assert_eq!(
        service.color(ColorToken::TextPrimary).unwrap(),
        ThemePreset::Light.layer().get(ColorToken::TextPrimary).unwrap()
    );
}

#[test]
fn explicit_display_name_wins_over_the_document() {
    let file = write_preset(OCEAN);
    let service = loaded_service();
    service
        .apply_custom_preset(file.path().to_str().unwrap(), Some("Brand"))
        .unwrap();

    assert_eq!(service.current_preset().custom_name(), Some("Brand"));
}

#[test]
fn unreachable_custom_preset_is_not_applied() {
    let service = loaded_service();
    let before = service.resolved_map().unwrap();

    let result = service.apply_custom_preset("/nonexistent/ocean.toml", None);

    assert!(matches!(result, Err(ThemeError::PresetLoad { .. })));
    assert_eq!(service.current_preset(), PresetId::BuiltIn(ThemePreset::Light));
    assert_eq!(service.resolved_map().unwrap(), before);
}

#[test]
fn malformed_custom_preset_is_not_applied() {
    let file = write_preset("this is [not valid toml");
    let service = loaded_service();
    let before = service.resolved_map().unwrap();

    let result = service.apply_custom_preset(file.path().to_str().unwrap(), None);

    assert!(matches!(result, Err(ThemeError::PresetLoad { .. })));
    assert_eq!(service.resolved_map().unwrap(), before);
}

#[test]
fn malformed_color_in_custom_preset_is_a_load_error() {
    let file = write_preset(
        r##"
        [colors]
        SurfaceBase = "#XYZ123"
        "##,
    );
    let service = loaded_service();

    assert!(matches!(
        service.apply_custom_preset(file.path().to_str().unwrap(), None),
        Err(ThemeError::PresetLoad { .. })
    ));
}

#[test]
fn unknown_token_names_in_a_custom_preset_are_skipped() {
    let file = write_preset(
        r##"
        [colors]
        Primary = "#112233"
        SurfaceBase = "#0B1D2A"
        "##,
    );
    let service = loaded_service();
    service
        .apply_custom_preset(file.path().to_str().unwrap(), None)
        .unwrap();

    assert_eq!(
        service.color(ColorToken::SurfaceBase).unwrap(),
        Color::from_hex(0x0B1D2A)
    );
}

#[test]
fn configured_custom_locator_is_the_initial_preset() {
    let file = write_preset(OCEAN);
    let config = ThemeConfig {
        custom_preset_locator: Some(file.path().to_str().unwrap().to_string()),
        ..ThemeConfig::default()
    };
    let service = ThemeService::new(UiContext::capture(), config);

    // Before loading, the configured source is reported without a name.
    assert!(matches!(
        service.current_preset(),
        PresetId::Custom { .. }
    ));

    service.ensure_loaded().unwrap();
    assert_eq!(service.current_preset().custom_name(), Some("Ocean"));
    assert_eq!(
        service.color(ColorToken::SurfaceBase).unwrap(),
        Color::from_hex(0x0B1D2A)
    );
}

#[test]
fn overrides_survive_a_custom_preset_swap() {
    let file = write_preset(OCEAN);
    let service = loaded_service();
    let custom = Color::from_hex(0xFACADE);

    service.set_token(ColorToken::SurfaceBase, custom).unwrap();
    service
        .apply_custom_preset(file.path().to_str().unwrap(), None)
        .unwrap();

    assert_eq!(service.color(ColorToken::SurfaceBase).unwrap(), custom);
}

#[test]
fn config_applies_preset_then_accent_then_overrides() {
    let mut config = ThemeConfig {
        default_preset: ThemePreset::Dark,
        accent_color: Some(Color::rgb(200, 100, 50)),
        ..ThemeConfig::default()
    };
    config
        .token_overrides
        .insert("LinkDefault".to_string(), "#FF0000".to_string());

    let service = ThemeService::new(UiContext::capture(), config);
    service.ensure_loaded().unwrap();

    // Accent derivation lands on top of the dark preset.
    assert_eq!(
        service.color(ColorToken::InteractiveHover).unwrap(),
        Color::rgb(170, 85, 42)
    );
    // Explicit token overrides are applied after the accent batch.
    assert_eq!(
        service.color(ColorToken::LinkDefault).unwrap(),
        Color::from_hex(0xFF0000)
    );
    assert_eq!(
        service.current_preset(),
        PresetId::BuiltIn(ThemePreset::Dark)
    );
}
