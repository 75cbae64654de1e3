//! Boundary geometry
//!
//! Planar area via the shoelace formula. This is decision-support geometry:
//! no projection, no geodesic correction, no self-intersection checks.

use crate::domain::value_objects::Point;
use crate::error::{PaddockError, PaddockResult};

/// Minimum number of points for a boundary to enclose anything
pub const MIN_BOUNDARY_POINTS: usize = 3;

/// Enclosed area of an ordered boundary.
///
/// Fewer than three points yield `0.0`. The result does not depend on the
/// starting point or the winding direction.
pub fn area(boundary: &[Point]) -> f64 {
    if boundary.len() < MIN_BOUNDARY_POINTS {
        return 0.0;
    }

    let twice_signed: f64 = boundary
        .iter()
        .zip(boundary.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();

    twice_signed.abs() / 2.0
}

/// Parse the `"x,y;x,y;..."` boundary notation.
///
/// Whitespace around separators is ignored and a trailing `;` is allowed.
pub fn parse_points(input: &str) -> PaddockResult<Vec<Point>> {
    input
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| PaddockError::invalid(format!("point '{}' is not 'x,y'", pair)))?;
            let x = parse_coordinate(x, pair)?;
            let y = parse_coordinate(y, pair)?;
            Ok(Point::new(x, y))
        })
        .collect()
}

fn parse_coordinate(raw: &str, pair: &str) -> PaddockResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| PaddockError::invalid(format!("bad coordinate '{}' in '{}'", raw, pair)))?;
    if !value.is_finite() {
        return Err(PaddockError::invalid(format!(
            "coordinate in '{}' is not finite",
            pair
        )));
    }
    Ok(value)
}
