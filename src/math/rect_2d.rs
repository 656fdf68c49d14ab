use super::Point2;

/// An axis-aligned rectangle given by its minimum and maximum corners.
///
/// Overlap and containment use closed intervals, so touching edges count,
/// consistent with the segment-intersection policy. `min` must not exceed
/// `max` on either axis for the queries to be meaningful;
/// [`Rect::from_origin_size`] upholds this for non-negative sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Rect {
    /// Creates a rectangle from its corners.
    #[must_use]
    pub const fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from an origin corner and its width and height.
    #[must_use]
    pub fn from_origin_size(origin: Point2, width: f64, height: f64) -> Self {
        Self::new(origin, Point2::new(origin.x + width, origin.y + height))
    }

    /// Tests whether two rectangles overlap, edges included.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Tests whether `point` lies in the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }
}
