use live_gauge::api::{
    BIG_TICK_CLASS, ColorPaletteKind, GaugeConfig, GaugeElementIds, LABEL_CLASS, READOUT_CLASS,
    SMALL_TICK_CLASS, SizePresetKind, WARNING_CLASS, build_config, build_gauge_scene,
};
use live_gauge::core::Viewport;
use live_gauge::render::Fill;

#[test]
fn element_ids_are_namespaced_by_gauge_id() {
    let ids = GaugeElementIds::new("temp2");
    assert_eq!(ids.left_gradient, "lgrad1temp2gauge");
    assert_eq!(ids.right_gradient, "lgrad2temp2gauge");
    assert_eq!(ids.pointer, "temp2triangle");
    assert_eq!(ids.readout_group, "temp2-current-val");
    assert_eq!(ids.warning_group, "temp2-warning");
}

#[test]
fn default_scene_contains_dial_ticks_and_labels() {
    let config = build_config("0", "100", "50", Some("default"), Some("blues"), Some("C"));
    let scene = build_gauge_scene("g1", &config);
    let dial = &scene.dial;

    assert_eq!(dial.viewport, Viewport::new(350, 350));
    assert_eq!(dial.arcs.len(), 3);
    assert_eq!(dial.gradients.len(), 2);
    assert_eq!(dial.lines.len(), 61);
    assert_eq!(
        dial.lines
            .iter()
            .filter(|line| line.class == Some(BIG_TICK_CLASS))
            .count(),
        11
    );
    assert_eq!(
        dial.lines
            .iter()
            .filter(|line| line.class == Some(SMALL_TICK_CLASS))
            .count(),
        50
    );

    let labels: Vec<&str> = dial
        .texts
        .iter()
        .filter(|text| text.class == Some(LABEL_CLASS))
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(
        labels,
        ["0", "10", "20", "30", "40", "50", "60", "70", "80", "90", "100"]
    );
    assert!(
        dial.texts
            .iter()
            .all(|text| text.font_size_px == Some(14.5))
    );
    dial.validate().expect("static dial is valid");
}

#[test]
fn arcs_use_the_palette_gradients() {
    let config = build_config("0", "100", "0", None, Some("blues"), None);
    let scene = build_gauge_scene("g1", &config);
    let dial = &scene.dial;

    assert_eq!(dial.arcs[0].fill, Fill::Gradient("lgrad1g1gauge".to_owned()));
    assert_eq!(dial.arcs[1].fill, Fill::Gradient("lgrad2g1gauge".to_owned()));
    assert!(matches!(dial.arcs[2].fill, Fill::Solid(_)));

    let palette = ColorPaletteKind::Blues.palette();
    let left = dial.gradient("lgrad1g1gauge").expect("left gradient");
    assert_eq!(left.stops.len(), 2);
    assert_eq!((left.stops[0].offset, left.stops[0].color), (0.0, palette.color1));
    assert_eq!((left.stops[1].offset, left.stops[1].color), (0.5, palette.color2));
    assert_eq!((left.x1, left.y1, left.x2, left.y2), (0.0, 1.0, 1.0, 0.0));

    let right = dial.gradient("lgrad2g1gauge").expect("right gradient");
    assert_eq!((right.stops[0].offset, right.stops[0].color), (0.5, palette.color2));
    assert_eq!((right.stops[1].offset, right.stops[1].color), (1.0, palette.color3));
    assert_eq!((right.x1, right.y1, right.x2, right.y2), (0.0, 0.15, 1.0, 0.85));
}

#[test]
fn dial_arcs_span_the_270_degree_sweep() {
    let config = GaugeConfig::new(0.0, 10.0, 0.0);
    let scene = build_gauge_scene("g", &config);
    let [left, right, axis] = [&scene.dial.arcs[0], &scene.dial.arcs[1], &scene.dial.arcs[2]];

    assert!((left.sector.start_angle.to_degrees() - -135.0).abs() <= 1e-9);
    assert_eq!(left.sector.end_angle, 0.0);
    assert!((right.sector.end_angle.to_degrees() - 135.0).abs() <= 1e-9);
    assert_eq!((left.sector.inner_radius, left.sector.outer_radius), (130.0, 145.0));
    assert_eq!((axis.sector.inner_radius, axis.sector.outer_radius), (128.0, 130.0));
    assert!(axis.sector.is_large_arc());
    assert_eq!(left.center.x, 175.0);
}

#[test]
fn animated_parts_start_in_their_initial_state() {
    let config = build_config("5", "25", "12", None, None, Some("V"));
    let scene = build_gauge_scene("volt", &config);

    assert_eq!(scene.pointer.id.as_deref(), Some("volttriangle"));
    assert!(scene.pointer.transform.is_none());
    assert_eq!(scene.pointer.points.len(), 3);

    assert_eq!(scene.readout.text, "5 V");
    assert_eq!(scene.readout.class, Some(READOUT_CLASS));
    assert_eq!(scene.readout.group_id.as_deref(), Some("volt-current-val"));
    assert_eq!((scene.readout.x, scene.readout.y), (175.0, 210.0));
    assert_eq!(scene.readout.font_size_px, None);

    assert!(scene.warning.text.is_empty());
    assert_eq!(scene.warning.class, Some(WARNING_CLASS));
    assert_eq!(scene.warning.y, 320.0);
}

#[test]
fn small_preset_scales_fonts_and_positions() {
    let config = GaugeConfig::new(0.0, 100.0, 0.0).with_size(SizePresetKind::Small);
    let scene = build_gauge_scene("s", &config);

    assert_eq!(scene.dial.viewport, Viewport::new(245, 260));
    assert!(
        scene
            .dial
            .texts
            .iter()
            .all(|text| text.font_size_px == Some(12.0))
    );
    assert_eq!(scene.readout.y, 221.0);
    assert_eq!(scene.readout.font_size_px, Some(30.0));
    assert_eq!(scene.warning.y, 250.0);
    assert_eq!(scene.warning.font_size_px, Some(18.0));
    assert_eq!(scene.readout.x, 122.5);
}

#[test]
fn small_pointer_is_half_the_area_of_the_default_one() {
    let area = |points: &[live_gauge::core::Point]| {
        let [a, b, c] = [points[0], points[1], points[2]];
        ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
    };
    let small = build_gauge_scene("a", &GaugeConfig::new(0.0, 1.0, 0.0).with_size(SizePresetKind::Small));
    let default = build_gauge_scene("b", &GaugeConfig::new(0.0, 1.0, 0.0));

    assert!((area(&small.pointer.points) - 100.0).abs() <= 1e-9);
    assert!((area(&default.pointer.points) - 200.0).abs() <= 1e-9);
}

#[test]
fn compose_overlays_the_animated_state() {
    let config = GaugeConfig::new(0.0, 100.0, 0.0).with_unit(Some("C"));
    let scene = build_gauge_scene("g1", &config);
    let frame = scene.compose(None, "42 C", "Above Threshold!");

    assert_eq!(frame.texts.len(), 13);
    assert_eq!(frame.polygons.len(), 1);
    assert_eq!(
        frame.text_in_group("g1-current-val").map(|text| text.text.as_str()),
        Some("42 C")
    );
    assert_eq!(
        frame.text_in_group("g1-warning").map(|text| text.text.as_str()),
        Some("Above Threshold!")
    );
    assert!(frame.polygon("g1triangle").is_some());
}

#[test]
fn non_numeric_range_yields_nan_labels_without_panicking() {
    let config = build_config("abc", "100", "0", None, None, None);
    let scene = build_gauge_scene("bad", &config);
    let labels: Vec<&str> = scene
        .dial
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .collect();

    assert_eq!(labels[0], "NaN");
    assert_eq!(labels[5], "NaN");
    assert_eq!(labels[10], "100");
    assert_eq!(scene.readout.text, "NaN ");
}

#[test]
fn static_scene_validates_even_with_nan_labels() {
    let scene = build_gauge_scene("ok", &GaugeConfig::new(0.0, 100.0, 10.0));
    assert!(scene.validate().is_ok());

    let config = build_config("abc", "100", "0", None, None, None);
    assert!(build_gauge_scene("nan", &config).validate().is_ok());
    assert!(config.validate_numeric().is_err());
}
