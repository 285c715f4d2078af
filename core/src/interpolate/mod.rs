//! Easing-based interpolation between cross sections.
//!
//! Polygons are paired strictly by vertex index: no resampling happens, so
//! both sides must carry the same point count and winding. The x and y
//! channels follow the chosen easing curve while z always advances linearly,
//! keeping slices evenly stacked regardless of easing style.

mod easing;


pub use easing::{lerp, Easing};

use crate::error::{HandleError, HandleResult};
use crate::geometry::{Point3, Polygon};

/// Interpolate a single point: eased in x/y, linear in z.
pub fn interpolate_point(p0: &Point3, p1: &Point3, t: f64, easing: Easing) -> Point3 {
    Point3::new(
        easing.apply(p0.x, p1.x, t),
        easing.apply(p0.y, p1.y, t),
        lerp(p0.z, p1.z, t),
    )
}

/// Evaluate the transition between two polygons at parameter `t`.
pub fn polygon_at(p0: &Polygon, p1: &Polygon, t: f64, easing: Easing) -> HandleResult<Polygon> {
    check_pairing(p0, p1)?;
    Ok(blend(p0, p1, t, easing))
}

/// Intermediate polygons from `p0` to `p1`.
///
/// Returns `steps - 1` polygons at `t = k / (steps - 1)` for `k = 1..=steps-1`:
/// `p0` itself is skipped and the final entry reproduces `p1`.
pub fn interpolate_polygon(
    p0: &Polygon,
    p1: &Polygon,
    steps: usize,
    easing: Easing,
) -> HandleResult<Vec<Polygon>> {
    check_pairing(p0, p1)?;
    if steps < 2 {
        return Err(HandleError::validation(format!(
            "Interpolation requires at least 2 steps, got {}",
            steps
        )));
    }

    let denom = (steps - 1) as f64;
    let polygons = (1..steps)
        .map(|step| blend(p0, p1, step as f64 / denom, easing))
        .collect();

    tracing::debug!(
        points = p0.len(),
        steps,
        ?easing,
        "interpolated polygon transition"
    );
    Ok(polygons)
}

fn blend(p0: &Polygon, p1: &Polygon, t: f64, easing: Easing) -> Polygon {
    p0.points()
        .iter()
        .zip(p1.points())
        .map(|(a, b)| interpolate_point(a, b, t, easing))
        .collect::<Vec<_>>()
        .into()
}

fn check_pairing(p0: &Polygon, p1: &Polygon) -> HandleResult<()> {
    if p0.len() != p1.len() {
        return Err(HandleError::validation(format!(
            "Cannot interpolate polygons with {} and {} points",
            p0.len(),
            p1.len()
        )));
    }
    Ok(())
}
