use super::Point2;
use crate::error::{DegenerateOperand, Result};

/// Computes the centroid (arithmetic mean) of a point set.
///
/// # Errors
///
/// Returns [`DegenerateOperand::EmptyPointSet`] if `points` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point2]) -> Result<Point2> {
    if points.is_empty() {
        return Err(DegenerateOperand::EmptyPointSet.into());
    }
    let sum = points.iter().fold(Point2::ZERO, |acc, &p| acc + p);
    sum.divided_by(points.len() as f64)
}
