#![cfg(feature = "cairo-backend")]

use std::time::Duration;

use live_gauge::api::{GaugeSpec, LiveGauge};
use live_gauge::render::{CairoRenderer, Color, Renderer};

fn finished(spec: &GaugeSpec) -> LiveGauge {
    let mut gauge = LiveGauge::create(spec, Duration::ZERO).expect("gauge");
    gauge.finish();
    gauge
}

#[test]
fn cairo_renderer_draws_every_gauge_part() {
    let gauge = finished(&GaugeSpec::new("g1", 50, 0, 100).with_unit("C"));
    let mut renderer = CairoRenderer::new(350, 350).expect("surface");
    gauge.render(&mut renderer).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.arcs_drawn, 3);
    assert_eq!(stats.lines_drawn, 61);
    assert_eq!(stats.polygons_drawn, 1);
    // the empty warning text is not drawn
    assert_eq!(stats.texts_drawn, 12);
    assert_eq!(stats.skipped_non_finite, 0);
}

#[test]
fn cairo_renderer_skips_non_finite_pointer() {
    let gauge = finished(&GaugeSpec::new("bad", 50, "n/a", 100));
    let mut renderer = CairoRenderer::new(350, 350).expect("surface");
    renderer
        .render(&gauge.build_render_frame())
        .expect("lenient render");

    let stats = renderer.last_stats();
    assert_eq!(stats.polygons_drawn, 0);
    assert_eq!(stats.skipped_non_finite, 1);
}

#[test]
fn cairo_renderer_rejects_bad_sizes_and_colors() {
    assert!(CairoRenderer::new(0, 10).is_err());
    let mut renderer = CairoRenderer::new(10, 10).expect("surface");
    assert!(renderer.set_clear_color(Color::rgb(2.0, 0.0, 0.0)).is_err());
}
