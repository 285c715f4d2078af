//! Kernel-agnostic output types.

use serde::{Deserialize, Serialize};

/// A 3D point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<crate::geometry::Point3> for Point3D {
    fn from(p: crate::geometry::Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

/// Output triangle mesh from tessellation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub positions: Vec<Point3D>,
    /// Triangle indices (each triple refers to positions).
    pub triangles: Vec<(u32, u32, u32)>,
    /// Per-triangle topological face ID.
    pub face_ids: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, pos: Point3D) -> u32 {
        let idx = self.positions.len() as u32;
        self.positions.push(pos);
        idx
    }

    /// Add a triangle with an associated topological face ID.
    pub fn add_triangle_with_face(&mut self, i0: u32, i1: u32, i2: u32, face_id: u32) {
        self.triangles.push((i0, i1, i2));
        self.face_ids.push(face_id);
    }

    /// Axis-aligned bounds as (min, max), or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Point3D, Point3D)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(lo, hi), p| {
            (
                Point3D::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Point3D::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        }))
    }

    /// Number of distinct topological faces referenced by triangles.
    pub fn face_count(&self) -> usize {
        self.face_ids.iter().max().map_or(0, |m| *m as usize + 1)
    }
}
