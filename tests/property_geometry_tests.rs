use live_gauge::core::{label_values, position_on_circle};
use proptest::prelude::*;

proptest! {
    #[test]
    fn label_values_are_evenly_spaced_with_exact_endpoints(
        min_val in -100_000i32..100_000,
        span in 1i32..200_000
    ) {
        let min_val = f64::from(min_val);
        let max_val = min_val + f64::from(span);
        let values = label_values(min_val, max_val);

        prop_assert_eq!(values[0], min_val);
        prop_assert_eq!(values[10], max_val);
        let step = (max_val - min_val) / 10.0;
        for pair in values.windows(2) {
            prop_assert!((pair[1] - pair[0] - step).abs() <= 1e-9 * step.abs().max(1.0));
        }
    }

    #[test]
    fn positions_are_whole_pixel_offsets_from_center(
        radius in -400.0f64..400.0,
        angle in -10.0f64..10.0,
        cx in 0i32..1000,
        cy in 0i32..1000
    ) {
        let cx = f64::from(cx) + 0.5;
        let cy = f64::from(cy);
        let point = position_on_circle(radius, angle, cx, cy);

        prop_assert_eq!((point.x - cx).fract(), 0.0);
        prop_assert_eq!((point.y - cy).fract(), 0.0);
        let distance = ((point.x - cx).powi(2) + (point.y - cy).powi(2)).sqrt();
        prop_assert!((distance - radius.abs()).abs() <= 1.0);
    }
}
