use super::{ApproxEq, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A closed polygon used as a loft cross section.
///
/// The last point implicitly connects back to the first. Polygons that are
/// interpolated against each other must share point count and winding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point3>,
}

impl Polygon {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Create from raw coordinate arrays.
    pub fn from_arrays(points: &[[f64; 3]]) -> Self {
        Self {
            points: points.iter().map(|p| Point3::new(p[0], p[1], p[2])).collect(),
        }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Z of the first vertex. Slices are planar, so this is the slice height.
    pub fn z(&self) -> Option<f64> {
        self.points.first().map(|p| p.z)
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: Vector3) -> Self {
        Self {
            points: self.points.iter().map(|p| p + offset).collect(),
        }
    }

    pub fn centroid(&self) -> Option<Point3> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let sum = self
            .points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Some(Point3::from(sum / n))
    }

    /// True when every point lies at the same height.
    pub fn is_planar_z(&self) -> bool {
        match self.z() {
            Some(z) => self.points.iter().all(|p| p.z.approx_eq(&z)),
            None => true,
        }
    }

    /// Signed area of the XY projection (positive for counter-clockwise).
    pub fn signed_area_xy(&self) -> f64 {
        let n = self.points.len();
        let mut area = 0.0;
        for i in 0..n {
            let a = &self.points[i];
            let b = &self.points[(i + 1) % n];
            area += a.x * b.y - b.x * a.y;
        }
        area / 2.0
    }
}

impl From<Vec<Point3>> for Polygon {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}
