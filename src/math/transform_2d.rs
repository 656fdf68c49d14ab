use super::polygon_2d::centroid;
use super::{Matrix2, Point2, Vector2};
use crate::error::Result;

/// Rotates `point` around `center` by `angle` degrees.
///
/// Positive angles rotate counter-clockwise in the usual mathematical frame
/// (y pointing up). Callers working in screen coordinates with y pointing
/// down will observe clockwise rotation for positive angles.
#[must_use]
pub fn rotate_point(point: Point2, center: Point2, angle: f64) -> Point2 {
    let rot = Matrix2::rotation(angle.to_radians());
    rot.apply(point - center) + center
}

/// Rotates every point around `center` by `angle` degrees.
///
/// Order and length are preserved; an empty slice yields an empty result.
#[must_use]
pub fn rotate_points_around(points: &[Point2], center: Point2, angle: f64) -> Vec<Point2> {
    let rot = Matrix2::rotation(angle.to_radians());
    points
        .iter()
        .map(|&p| rot.apply(p - center) + center)
        .collect()
}

/// Rotates a point set around its own centroid by `angle` degrees.
///
/// # Errors
///
/// Returns [`DegenerateOperand::EmptyPointSet`] if `points` is empty.
///
/// [`DegenerateOperand::EmptyPointSet`]: crate::error::DegenerateOperand::EmptyPointSet
pub fn rotate_points(points: &[Point2], angle: f64) -> Result<Vec<Point2>> {
    let center = centroid(points)?;
    Ok(rotate_points_around(points, center, angle))
}

/// Translates `point` by `offset`.
#[must_use]
pub fn translate_point(point: Point2, offset: Vector2) -> Point2 {
    point + offset
}

/// Translates every point by `offset`, preserving order.
#[must_use]
pub fn translate_points(points: &[Point2], offset: Vector2) -> Vec<Point2> {
    points.iter().map(|&p| translate_point(p, offset)).collect()
}
