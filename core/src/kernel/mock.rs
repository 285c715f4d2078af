//! MockKernel: deterministic test double for [`GeometryKernel`].
//!
//! Records every loft request and keeps the sections it was given, so
//! callers can check what reached the kernel without building B-rep.

use super::types::*;
use super::{GeometryKernel, KernelOpError, KernelResult};
use crate::geometry::Polygon;
use std::cell::Cell;

/// Solid produced by [`MockKernel`]: just the sections it was lofted through.
#[derive(Debug, Clone, PartialEq)]
pub struct MockSolid {
    pub sections: Vec<Polygon>,
}

#[derive(Debug, Default)]
pub struct MockKernel {
    lofts: Cell<usize>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `loft` has been called.
    pub fn loft_calls(&self) -> usize {
        self.lofts.get()
    }
}

impl GeometryKernel for MockKernel {
    type Solid = MockSolid;

    fn loft(&self, wires: &[Polygon]) -> KernelResult<Self::Solid> {
        self.lofts.set(self.lofts.get() + 1);
        if wires.len() < 2 {
            return Err(KernelOpError::InvalidGeometry(
                "Loft requires at least 2 wires".into(),
            ));
        }
        Ok(MockSolid {
            sections: wires.to_vec(),
        })
    }

    /// Side walls only: two triangles per quad between consecutive sections.
    fn tessellate(&self, solid: &Self::Solid) -> KernelResult<TriangleMesh> {
        let mut mesh = TriangleMesh::new();
        let n = solid.sections.first().map_or(0, |s| s.len()) as u32;
        for section in &solid.sections {
            for p in section.points() {
                mesh.add_vertex((*p).into());
            }
        }
        for ring in 0..solid.sections.len().saturating_sub(1) as u32 {
            let base = ring * n;
            for i in 0..n {
                let j = (i + 1) % n;
                mesh.add_triangle_with_face(base + i, base + j, base + n + j, ring);
                mesh.add_triangle_with_face(base + i, base + n + j, base + n + i, ring);
            }
        }
        Ok(mesh)
    }

    fn export_step(&self, _solid: &Self::Solid) -> KernelResult<String> {
        Err(KernelOpError::NotImplemented(
            "MockKernel does not export STEP".into(),
        ))
    }
}
