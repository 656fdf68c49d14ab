use thiserror::Error;

/// Top-level error type for the planar geometry kernel.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Degenerate(#[from] DegenerateOperand),
}

/// A zero operand where a nonzero value is mathematically required.
///
/// Intersection queries never produce these: degenerate geometric
/// configurations (parallel, coincident, or zero-length segments, polygons
/// without edges) resolve to a boolean result instead.
#[derive(Debug, Error)]
pub enum DegenerateOperand {
    #[error("division by zero scalar")]
    ZeroScalar,

    #[error("zero-length vector")]
    ZeroVector,

    #[error("empty point set")]
    EmptyPointSet,
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
