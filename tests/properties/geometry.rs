//! Property tests for boundary area and point parsing.

use proptest::prelude::*;

use paddock::{area, parse_points, Point};

/// Integer coordinates keep every shoelace term exact in f64, so rotated
/// and reversed sums compare equal without a tolerance.
fn boundary(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((-1000i32..=1000, -1000i32..=1000), 0..=max_len).prop_map(
        |pairs| {
            pairs
                .into_iter()
                .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Area does not depend on the starting point.
    #[test]
    fn property_area_rotation_invariant(points in boundary(12), shift in 0usize..12) {
        let mut rotated = points.clone();
        if !rotated.is_empty() {
            let by = shift % rotated.len();
            rotated.rotate_left(by);
        }
        prop_assert_eq!(area(&rotated), area(&points));
    }

    /// PROPERTY: Area does not depend on winding direction.
    #[test]
    fn property_area_reversal_invariant(points in boundary(12)) {
        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert_eq!(area(&reversed), area(&points));
    }

    /// PROPERTY: Fewer than three points enclose nothing.
    #[test]
    fn property_area_degenerate_is_zero(points in boundary(2)) {
        prop_assert_eq!(area(&points), 0.0);
    }

    /// PROPERTY: Area is never negative.
    #[test]
    fn property_area_non_negative(points in boundary(16)) {
        prop_assert!(area(&points) >= 0.0);
    }

    /// PROPERTY: Formatting points with `Display` and parsing them back
    /// yields the same boundary.
    #[test]
    fn property_parse_points_reads_display_output(points in boundary(10)) {
        let text = points
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";");
        prop_assert_eq!(parse_points(&text).unwrap(), points);
    }

    /// PROPERTY: `parse_points` never panics on arbitrary input.
    #[test]
    fn property_parse_points_never_panics(input in "(?s).{0,128}") {
        let _ = parse_points(&input);
    }
}

#[test]
fn empty_boundary_has_zero_area() {
    assert_eq!(area(&[]), 0.0);
}
