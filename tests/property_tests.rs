//! Property tests for the metric math.

use plot_tools::geometry::metrics::{signed_area, Metrics, SQYD_PER_SQM, YD_PER_M};
use plot_tools::Vector2;
use proptest::prelude::*;

fn rectangle(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Vec<Vector2> {
    vec![
        Vector2::new(origin_x, origin_y),
        Vector2::new(origin_x + width, origin_y),
        Vector2::new(origin_x + width, origin_y + height),
        Vector2::new(origin_x, origin_y + height),
    ]
}

proptest! {
    #[test]
    fn shoelace_matches_rectangle_area(
        origin_x in -1.0e3..1.0e3f64,
        origin_y in -1.0e3..1.0e3f64,
        width in 0.1..100.0f64,
        height in 0.1..100.0f64,
    ) {
        let ring = rectangle(origin_x, origin_y, width, height);
        let area = signed_area(&ring);
        let expected = width * height;
        prop_assert!((area - expected).abs() <= 1e-6 * expected.max(1.0));
    }

    #[test]
    fn shoelace_invariant_under_start_vertex(
        width in 0.1..1.0e4f64,
        height in 0.1..1.0e4f64,
        shift in 0usize..4,
    ) {
        let mut ring = rectangle(0.0, 0.0, width, height);
        let before = signed_area(&ring);
        ring.rotate_left(shift);
        let after = signed_area(&ring);
        prop_assert!((before - after).abs() <= 1e-9 * before.abs().max(1.0));
    }

    #[test]
    fn shoelace_flips_sign_under_reversal(
        width in 0.1..1.0e4f64,
        height in 0.1..1.0e4f64,
    ) {
        let mut ring = rectangle(0.0, 0.0, width, height);
        let forward = signed_area(&ring);
        ring.reverse();
        let backward = signed_area(&ring);
        prop_assert!((forward + backward).abs() <= 1e-9 * forward.abs().max(1.0));
    }

    #[test]
    fn unit_conversion_round_trips(
        area_raw in 0.0..1.0e9f64,
        perimeter_raw in 0.0..1.0e6f64,
        scale in 0.001..1.0e4f64,
    ) {
        let m = Metrics::from_raw(area_raw, perimeter_raw, scale).unwrap();
        prop_assert!((m.area_sqyd / SQYD_PER_SQM - m.area_sqm).abs() <= 1e-9 * m.area_sqm.max(1.0));
        prop_assert!((m.perimeter_yd / YD_PER_M - m.perimeter_m).abs() <= 1e-9 * m.perimeter_m.max(1.0));
    }
}
