//! Truck-based implementation of the geometry kernel.
//!
//! This module provides a CAD kernel implementation using the Truck library,
//! which is licensed under Apache-2.0 (MIT-compatible).

use super::types::*;
use super::{GeometryKernel, KernelOpError, KernelResult};
use crate::geometry::Polygon;

// Use truck's pre-exported types which come from cgmath64
use truck_meshalgo::tessellation::MeshableShape;
use truck_modeling::{builder, Face, Point3, Shell, Solid, Vertex, Wire};
use truck_topology::shell::ShellCondition;

/// Truck-based CAD kernel implementation.
pub struct TruckKernel {
    /// Tessellation tolerance for mesh generation.
    pub tolerance: f64,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            tolerance: 0.01, // 0.01mm precision
        }
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryKernel for TruckKernel {
    type Solid = Solid;

    fn loft(&self, wires: &[Polygon]) -> KernelResult<Self::Solid> {
        if wires.len() < 2 {
            return Err(KernelOpError::InvalidGeometry(
                "Loft requires at least 2 wires".into(),
            ));
        }
        let points = wires[0].len();
        if let Some((i, wire)) = wires.iter().enumerate().find(|(_, w)| w.len() != points) {
            return Err(KernelOpError::InvalidGeometry(format!(
                "Wire {} has {} points, expected {}",
                i,
                wire.len(),
                points
            )));
        }

        let truck_wires = wires
            .iter()
            .map(|w| self.build_wire(w))
            .collect::<KernelResult<Vec<Wire>>>()?;

        // Side walls: one ruled band per pair of consecutive sections.
        // Consecutive bands share the section wire's edges.
        let mut faces: Vec<Face> = Vec::new();
        for (i, pair) in truck_wires.windows(2).enumerate() {
            let band: Shell = builder::try_wire_homotopy(&pair[0], &pair[1]).map_err(|e| {
                KernelOpError::OperationFailed(format!("Failed to connect wires {} and {}: {:?}", i, i + 1, e))
            })?;
            faces.extend(band.face_iter().cloned());
        }

        // Caps. Sections wind counter-clockwise about +Z, so the first cap
        // has to be flipped to face outward.
        let bottom = builder::try_attach_plane(&[truck_wires[0].clone()])
            .map_err(|e| KernelOpError::OperationFailed(format!("Failed to create start cap: {:?}", e)))?;
        let top = builder::try_attach_plane(&[truck_wires[truck_wires.len() - 1].clone()])
            .map_err(|e| KernelOpError::OperationFailed(format!("Failed to create end cap: {:?}", e)))?;
        faces.push(bottom.inverse());
        faces.push(top);

        let shell: Shell = faces.into_iter().collect();
        let condition = shell.shell_condition();
        if condition != ShellCondition::Closed {
            return Err(KernelOpError::OperationFailed(format!(
                "Loft shell is not closed ({:?})",
                condition
            )));
        }

        tracing::debug!(
            wires = wires.len(),
            faces = shell.face_iter().count(),
            "lofted solid"
        );

        Solid::try_new(vec![shell])
            .map_err(|e| KernelOpError::OperationFailed(format!("Failed to create solid: {:?}", e)))
    }

    fn tessellate(&self, solid: &Self::Solid) -> KernelResult<TriangleMesh> {
        let meshed = solid.triangulation(self.tolerance);
        let faces = meshed.boundaries().iter().flat_map(|shell| shell.face_iter());

        let mut mesh = TriangleMesh::new();
        for (face_id, face) in faces.enumerate() {
            // Faces the mesher could not handle keep their id slot.
            let Some(patch) = face.surface() else {
                continue;
            };
            let face_id = face_id as u32;
            let base = mesh.positions.len() as u32;
            for p in patch.positions() {
                mesh.add_vertex(Point3D::new(p.x, p.y, p.z));
            }
            for tri in patch.tri_faces() {
                let [a, b, c] = [tri[0].pos, tri[1].pos, tri[2].pos].map(|i| base + i as u32);
                mesh.add_triangle_with_face(a, b, c, face_id);
            }
            for quad in patch.quad_faces() {
                let [a, b, c, d] =
                    [quad[0].pos, quad[1].pos, quad[2].pos, quad[3].pos].map(|i| base + i as u32);
                mesh.add_triangle_with_face(a, b, c, face_id);
                mesh.add_triangle_with_face(a, c, d, face_id);
            }
        }

        if mesh.triangles.is_empty() {
            return Err(KernelOpError::TessellationFailed(
                "Triangulation produced no triangles".into(),
            ));
        }
        tracing::debug!(
            vertices = mesh.positions.len(),
            triangles = mesh.triangles.len(),
            "tessellated solid"
        );
        Ok(mesh)
    }

    fn export_step(&self, solid: &Self::Solid) -> KernelResult<String> {
        use truck_stepio::out::{CompleteStepDisplay, StepModels};

        let compressed = solid.compress();
        let models: StepModels<_, _, _> = std::iter::once(&compressed).collect();
        Ok(CompleteStepDisplay::new(models, step_header()).to_string())
    }
}

/// Header for exported handles. The time stamp is fixed so exports are reproducible.
fn step_header() -> truck_stepio::out::StepHeaderDescriptor {
    truck_stepio::out::StepHeaderDescriptor {
        file_name: "handle.step".into(),
        time_stamp: "1970-01-01T00:00:00".into(),
        authors: Vec::new(),
        organization: Vec::new(),
        organization_system: format!("handle-core {}", env!("CARGO_PKG_VERSION")),
        authorization: String::new(),
    }
}

impl TruckKernel {
    /// Build a closed truck Wire through the polygon's points.
    fn build_wire(&self, polygon: &Polygon) -> KernelResult<Wire> {
        if polygon.len() < 3 {
            return Err(KernelOpError::InvalidGeometry(
                "Wire requires at least 3 points".into(),
            ));
        }
        if polygon
            .points()
            .iter()
            .any(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(KernelOpError::InvalidGeometry(
                "Wire contains non-finite coordinates".into(),
            ));
        }

        let mut vertices: Vec<Vertex> = polygon
            .points()
            .iter()
            .map(|p| builder::vertex(Point3::new(p.x, p.y, p.z)))
            .collect();

        // Close the loop
        vertices.push(vertices[0].clone());

        let edges = vertices
            .windows(2)
            .map(|pair| builder::line(&pair[0], &pair[1]));
        Ok(Wire::from_iter(edges))
    }
}
