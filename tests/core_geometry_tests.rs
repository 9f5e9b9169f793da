use std::f64::consts::{FRAC_PI_2, PI};

use live_gauge::core::{
    GaugeScale, LARGE_TICK_COUNT, Point, label_values, large_tick_angles, position_on_circle,
    rotate_translate, small_tick_angles,
};

#[test]
fn position_at_zero_angle_is_below_center() {
    let point = position_on_circle(100.0, 0.0, 175.0, 175.0);
    assert_eq!(point, Point::new(175.0, 275.0));
}

#[test]
fn position_at_quarter_turn_is_left_of_center() {
    let point = position_on_circle(100.0, FRAC_PI_2, 175.0, 175.0);
    assert_eq!(point, Point::new(75.0, 175.0));
}

#[test]
fn negative_radius_mirrors_through_center() {
    let point = position_on_circle(-40.0, 0.0, 10.0, 10.0);
    assert_eq!(point, Point::new(10.0, -30.0));
}

#[test]
fn position_keeps_fractional_center_and_rounds_offsets() {
    // Small preset center.
    let point = position_on_circle(110.0, PI, 122.5, 130.0);
    assert_eq!(point, Point::new(122.5, 20.0));

    let diagonal = position_on_circle(105.0, 45.0_f64.to_radians(), 175.0, 180.0);
    assert_eq!(diagonal, Point::new(101.0, 254.0));
}

#[test]
fn large_ticks_cover_the_dial_in_27_degree_steps() {
    let angles = large_tick_angles();
    assert_eq!(angles.len(), LARGE_TICK_COUNT);
    assert_eq!(angles[0], 45.0);
    assert_eq!(angles[10], 315.0);
    for pair in angles.windows(2) {
        assert!((pair[1] - pair[0] - 27.0).abs() <= 1e-9);
    }
}

#[test]
fn five_small_ticks_per_large_division() {
    let small = small_tick_angles();
    assert_eq!(small.len(), 5 * (LARGE_TICK_COUNT - 1));
    assert!(small.iter().all(|angle| *angle >= 45.0 && *angle < 315.0));
}

#[test]
fn label_values_for_percent_range() {
    let values = label_values(0.0, 100.0);
    let expected: Vec<f64> = (0..=10).map(|i| f64::from(i) * 10.0).collect();
    assert_eq!(values.to_vec(), expected);
}

#[test]
fn label_values_hit_awkward_endpoints_exactly() {
    let values = label_values(-7.0, 3.0);
    assert_eq!(values[0], -7.0);
    assert_eq!(values[10], 3.0);
    assert!((values[5] - -2.0).abs() <= 1e-12);
}

#[test]
fn rotate_translate_applies_rotation_before_translation() {
    let point = rotate_translate(Point::new(10.0, 0.0), 90.0, Point::new(100.0, 100.0));
    assert!((point.x - 100.0).abs() <= 1e-9);
    assert!((point.y - 110.0).abs() <= 1e-9);
}

#[test]
fn gauge_scale_maps_range_onto_dial_angles() {
    let scale = GaugeScale::new(0.0, 100.0);
    let (slope, intercept) = scale.coefficients();
    assert_eq!(slope, 1.0);
    assert_eq!(intercept, 0.0);
    approx::assert_abs_diff_eq!(scale.angle_for(50.0), 180.0, epsilon = 1e-9);
    assert_eq!(scale.clamp(120.0), 100.0);
    assert_eq!(scale.clamp(-3.0), 0.0);
}
