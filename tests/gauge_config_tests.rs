use live_gauge::GaugeError;
use live_gauge::api::{
    BLANK_UNIT, ColorPalette, ColorPaletteKind, GaugeConfig, GaugeSpec, RawValue, SizePreset,
    SizePresetKind, build_config, normalize_unit,
};
use live_gauge::render::Color;

#[test]
fn unknown_palette_falls_back_to_autumn() {
    let config = build_config("0", "100", "50", None, Some("sunset"), Some("C"));
    let autumn = ColorPaletteKind::Autumn.palette();

    assert_eq!(config.palette, autumn);
    assert_eq!(config.palette.color1, Color::from_rgb8(255, 255, 0));
    assert_eq!(config.palette.color2, Color::from_rgb8(255, 153, 102));
    assert_eq!(config.palette.color3, Color::from_rgb8(255, 0, 0));
}

#[test]
fn missing_palette_falls_back_to_autumn() {
    let config = build_config("0", "100", "50", None, None, None);
    assert_eq!(config.palette.kind, ColorPaletteKind::Autumn);
}

#[test]
fn palette_names_are_case_sensitive() {
    assert_eq!(ColorPaletteKind::lookup("blues"), Some(ColorPaletteKind::Blues));
    assert_eq!(ColorPaletteKind::lookup("Blues"), None);
    assert_eq!(
        ColorPalette::from_name(Some("Blues")).kind,
        ColorPaletteKind::Autumn
    );
}

#[test]
fn every_palette_round_trips_through_its_name() {
    for kind in ColorPaletteKind::ALL {
        assert_eq!(ColorPaletteKind::from_name(Some(kind.name())), kind);
    }
}

#[test]
fn placeholder_units_become_a_single_space() {
    for raw in [Some("null"), Some("undefined"), None] {
        let config = build_config("0", "10", "5", None, None, raw);
        assert_eq!(config.unit, BLANK_UNIT);
    }
}

#[test]
fn real_units_get_a_leading_space() {
    assert_eq!(normalize_unit(Some("C")), " C");
    assert_eq!(normalize_unit(Some("%RH")), " %RH");
    assert_eq!(normalize_unit(Some("")), " ");
}

#[test]
fn only_small_selects_the_small_preset() {
    let small = build_config("0", "10", "5", Some("small"), None, None);
    let other = build_config("0", "10", "5", Some("huge"), None, None);
    let missing = build_config("0", "10", "5", None, None, None);

    assert_eq!(small.size, SizePreset::SMALL);
    assert!(small.is_small());
    assert_eq!(other.size.kind, SizePresetKind::Default);
    assert_eq!(missing.size, SizePreset::DEFAULT);
}

#[test]
fn numeric_inputs_are_read_as_integers() {
    let config = build_config(" -20", "80.9", "12abc", None, None, None);
    assert_eq!(config.min_val, -20.0);
    assert_eq!(config.max_val, 80.0);
    assert_eq!(config.current_val, 12.0);
    assert!(config.invalid_inputs().is_empty());
    assert!(config.validate_numeric().is_ok());
}

#[test]
fn non_numeric_inputs_propagate_as_nan() {
    let config = build_config("low", "100", "n/a", None, None, None);

    assert!(config.min_val.is_nan());
    assert!(config.current_val.is_nan());
    assert_eq!(config.invalid_inputs().as_slice(), &["min_val", "current_val"]);
    let err = config.validate_numeric().expect_err("min is not numeric");
    assert!(matches!(
        err,
        GaugeError::InvalidNumericInput { field: "min_val" }
    ));
}

#[test]
fn typed_constructor_truncates_and_chains() {
    let config = GaugeConfig::new(0.7, 99.9, 42.2)
        .with_size(SizePresetKind::Small)
        .with_palette(ColorPaletteKind::Viridis)
        .with_unit(Some("kPa"))
        .with_sensor_type("Pressure");

    assert_eq!((config.min_val, config.max_val, config.current_val), (0.0, 99.0, 42.0));
    assert_eq!(config.size.kind, SizePresetKind::Small);
    assert_eq!(config.palette.kind, ColorPaletteKind::Viridis);
    assert_eq!(config.unit, " kPa");
    assert_eq!(config.sensor_type.as_deref(), Some("Pressure"));
}

#[test]
fn gauge_spec_parses_mixed_number_and_text_fields() {
    let spec = GaugeSpec::from_json_str(
        r#"{
            "id": "hum1",
            "current_value": 41.5,
            "min": "0",
            "max": 100,
            "sensor_type": "Humidity",
            "size": "small",
            "color_map": "cool",
            "unit": "%"
        }"#,
    )
    .expect("valid spec");

    assert_eq!(spec.min, RawValue::Text("0".to_owned()));
    assert_eq!(spec.target_value(), 41.5);

    let config = spec.to_config();
    assert_eq!(config.min_val, 0.0);
    assert_eq!(config.max_val, 100.0);
    assert_eq!(config.current_val, 41.0);
    assert_eq!(config.palette.kind, ColorPaletteKind::Cool);
    assert!(config.is_small());
    assert_eq!(config.unit, " %");
    assert_eq!(config.sensor_type.as_deref(), Some("Humidity"));
}

#[test]
fn gauge_spec_optional_fields_default_to_none() {
    let spec = GaugeSpec::from_json_str(r#"{"id":"g","current_value":1,"min":0,"max":2}"#)
        .expect("minimal spec");
    assert!(spec.unit.is_none());
    assert_eq!(spec.to_config().unit, BLANK_UNIT);
}

#[test]
fn gauge_spec_rejects_malformed_json() {
    let err = GaugeSpec::from_json_str("{not json").expect_err("must fail");
    assert!(matches!(err, GaugeError::InvalidData(_)));
}

#[test]
fn gauge_config_survives_json_round_trip() {
    let config = build_config("0", "50", "20", Some("small"), Some("plasma"), Some("V"));
    let json = serde_json::to_string(&config).expect("serialize");
    let restored: GaugeConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored.size, config.size);
    assert_eq!(restored.palette.kind, ColorPaletteKind::Plasma);
    assert_eq!(restored.unit, " V");
    assert_eq!((restored.min_val, restored.max_val), (0.0, 50.0));
    assert!((restored.palette.color2.green - config.palette.color2.green).abs() <= 1e-12);
}

#[test]
fn gauge_spec_json_round_trip_keeps_text_and_numbers_apart() {
    let spec = GaugeSpec::new("press", "12", 0, 300)
        .with_sensor_type("Pressure")
        .with_color_map("viridis")
        .with_unit("kPa");

    let json = spec.to_json_pretty().expect("serialize");
    assert!(json.contains("\"current_value\": \"12\""));
    assert!(json.contains("\"max\": 300.0"));

    let restored = GaugeSpec::from_json_str(&json).expect("parse");
    assert_eq!(restored, spec);
}

#[test]
fn text_targets_coerce_like_a_browser_number() {
    assert_eq!(RawValue::from("").as_number(), 0.0);
    assert_eq!(RawValue::from(" 18.25 ").as_number(), 18.25);
    assert_eq!(RawValue::from("0x1F").as_number(), 31.0);
    assert!(RawValue::from("inf").as_number().is_nan());
    assert!(RawValue::from("nan").as_number().is_nan());
    assert!(RawValue::from("18C").as_number().is_nan());
}
