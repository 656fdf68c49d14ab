use super::Point2;

/// Tests whether segment `a`–`b` intersects segment `c`–`d`.
///
/// Uses the parametric line-intersection formulation with closed parameter
/// intervals, so touching at an endpoint counts as intersecting. Degenerate
/// input never fails: parallel, coincident, and zero-length segments all
/// resolve to a boolean.
///
/// Coincident segments (same supporting line) are classified by overlap of
/// their `[min, max]` intervals on both the x- and y-axis. This
/// bounding-interval rule is deliberate, stable behavior; collision callers
/// depend on its boundary classification.
#[must_use]
pub fn segments_intersect(a: Point2, b: Point2, c: Point2, d: Point2) -> bool {
    let denom = (b.x - a.x) * (d.y - c.y) - (b.y - a.y) * (d.x - c.x);
    let num1 = (a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y);
    let num2 = (a.y - c.y) * (b.x - a.x) - (a.x - c.x) * (b.y - a.y);

    // Zero tests are exact: edge-case classification must be reproducible.
    if denom == 0.0 {
        if num1 == 0.0 && num2 == 0.0 {
            // Coincident supporting lines.
            return intervals_overlap(a.x, b.x, c.x, d.x)
                && intervals_overlap(a.y, b.y, c.y, d.y);
        }
        // Parallel, distinct lines.
        return false;
    }

    let r = num1 / denom;
    let s = num2 / denom;
    (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s)
}

/// Overlap of the closed intervals spanned by `p0..p1` and `q0..q1`.
fn intervals_overlap(p0: f64, p1: f64, q0: f64, q1: f64) -> bool {
    let (p_min, p_max) = if p0 <= p1 { (p0, p1) } else { (p1, p0) };
    let (q_min, q_max) = if q0 <= q1 { (q0, q1) } else { (q1, q0) };
    p_min <= q_max && q_min <= p_max
}

/// Tests whether two closed polygons intersect.
///
/// Edge `i` of an `n`-point polygon connects point `i` to point
/// `(i + 1) % n`, closing the loop implicitly. Returns `true` on the first
/// intersecting edge pair, with no guarantee about which pair that is. A
/// polygon with fewer than 2 points has no edges, so the result is `false`.
#[must_use]
pub fn polygons_intersect(a: &[Point2], b: &[Point2]) -> bool {
    if a.len() < 2 || b.len() < 2 {
        return false;
    }
    for (i, &a0) in a.iter().enumerate() {
        let a1 = a[(i + 1) % a.len()];
        for (j, &b0) in b.iter().enumerate() {
            let b1 = b[(j + 1) % b.len()];
            if segments_intersect(a0, a1, b0, b1) {
                return true;
            }
        }
    }
    false
}
