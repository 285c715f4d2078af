//! Superellipse sampling for loft cross sections.
//!
//! A superellipse of order 2 is an ordinary ellipse; larger orders flatten
//! the sides toward a rounded rectangle.

use super::{Point3, Polygon};
use crate::error::{HandleError, HandleResult};
use std::f64::consts::TAU;

/// Magnitude of `x` with the sign of `y`.
///
/// Only a strictly positive `y` keeps the positive magnitude; zero maps to
/// the negative side, which is harmless because callers pass `|x| == 0` there.
pub fn copysign(x: f64, y: f64) -> f64 {
    if y > 0.0 {
        x.abs()
    } else {
        -x.abs()
    }
}

/// `|v|^p` carrying the sign of `v`, so all four quadrants come out of a
/// single loop without per-quadrant branching.
pub fn signed_power(v: f64, p: f64) -> f64 {
    copysign(v.abs().powf(p), v)
}

/// Sample `npnts` points on a superellipse centered at `center`.
///
/// `diax` / `diay` are full diameters, `order` is the superellipse exponent.
pub fn superellipse(
    center: Point3,
    diax: f64,
    diay: f64,
    npnts: usize,
    order: f64,
) -> HandleResult<Polygon> {
    if npnts < 3 {
        return Err(HandleError::validation(format!(
            "Superellipse requires at least 3 points, got {}",
            npnts
        )));
    }
    if !(order.is_finite() && order > 0.0) {
        return Err(HandleError::validation(format!(
            "Superellipse order must be positive, got {}",
            order
        )));
    }
    if !(diax.is_finite() && diay.is_finite() && diax > 0.0 && diay > 0.0) {
        return Err(HandleError::validation(format!(
            "Superellipse diameters must be positive, got {} x {}",
            diax, diay
        )));
    }

    let power = 2.0 / order;
    let theta = TAU / npnts as f64;
    let radius_x = diax / 2.0;
    let radius_y = diay / 2.0;

    let points = (0..npnts)
        .map(|i| {
            let angle = i as f64 * theta;
            Point3::new(
                center.x + radius_x * signed_power(angle.cos(), power),
                center.y + radius_y * signed_power(angle.sin(), power),
                center.z,
            )
        })
        .collect();

    Ok(Polygon::new(points))
}
