//! Collision demo — a spinning ship and a drifting asteroid.
//!
//! Steps a fixed number of frames: the ship spins in place around its
//! centroid while an asteroid drifts across the field. Each frame runs a
//! cheap bounding-box pass before the exact polygon test and reports the
//! first colliding frame.
//!
//! ```text
//! cargo run --example collision
//! ```

use planar::math::transform_2d::{rotate_points, translate_points};
use planar::math::{intersect_2d, polygon_2d, Point2, Rect, Vector2};

fn main() -> planar::Result<()> {
    // Default: WARN for everything, INFO for the kernel and this demo.
    // Override with RUST_LOG (e.g. RUST_LOG=collision=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("collision=info".parse().unwrap_or_default())
        .add_directive("planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let field = Rect::from_origin_size(Point2::new(0.0, 0.0), 800.0, 600.0);

    // Ship: a triangle near the middle of the field.
    let mut ship = vec![
        Point2::new(390.0, 280.0),
        Point2::new(410.0, 280.0),
        Point2::new(400.0, 320.0),
    ];

    // Asteroid: a rough pentagon entering from the left edge.
    let mut asteroid = vec![
        Point2::new(20.0, 300.0),
        Point2::new(50.0, 285.0),
        Point2::new(75.0, 300.0),
        Point2::new(60.0, 330.0),
        Point2::new(30.0, 330.0),
    ];
    let velocity = Vector2::new(4.0, -0.5);

    for frame in 0..600_u32 {
        ship = rotate_points(&ship, 3.0)?;
        asteroid = translate_points(&asteroid, velocity);

        let center = polygon_2d::centroid(&asteroid)?;
        if !field.contains(center) {
            tracing::info!(frame, "asteroid left the field without hitting");
            return Ok(());
        }

        if bounding_rect(&ship).intersects(&bounding_rect(&asteroid))
            && intersect_2d::polygons_intersect(&ship, &asteroid)
        {
            tracing::info!(frame, center.x, center.y, "collision");
            return Ok(());
        }
    }

    tracing::info!("no collision within the simulated frames");
    Ok(())
}

/// Axis-aligned bounds of a non-empty point set.
fn bounding_rect(points: &[Point2]) -> Rect {
    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min = Point2::new(min.x.min(p.x), min.y.min(p.y));
        max = Point2::new(max.x.max(p.x), max.y.max(p.y));
    }
    Rect::new(min, max)
}
