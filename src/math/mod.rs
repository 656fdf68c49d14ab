pub mod intersect_2d;
pub mod matrix_2d;
pub mod polygon_2d;
pub mod rect_2d;
pub mod transform_2d;
pub mod vector_2d;

pub use matrix_2d::Matrix2;
pub use rect_2d::Rect;
pub use vector_2d::{Point2, Vector2};

/// Global geometric tolerance for floating-point comparisons.
///
/// The kernel's own degeneracy checks (zero divisors, parallel segments)
/// compare exactly against zero so that edge-case classification is
/// reproducible; this constant is for callers and tests comparing computed
/// coordinates.
pub const TOLERANCE: f64 = 1e-10;
