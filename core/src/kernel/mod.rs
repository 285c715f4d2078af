//! Kernel abstraction layer for CAD geometry operations.
//!
//! The handle math only needs a kernel that can loft an ordered list of
//! closed wires into a solid. This trait keeps that boundary narrow so the
//! Truck implementation can be swapped out without touching the geometry.

pub mod cache;
pub mod mock;
pub mod types;
mod truck;

#[cfg(test)]
mod tests_loft;

pub use cache::{loft_key, LoftCache};
pub use mock::{MockKernel, MockSolid};
pub use truck::TruckKernel;
pub use types::*;

use crate::geometry::Polygon;
use thiserror::Error;

/// Errors that can occur during kernel operations.
#[derive(Debug, Error, Clone)]
pub enum KernelOpError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Tessellation failed: {0}")]
    TessellationFailed(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

/// Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelOpError>;

/// Abstract interface for CAD kernel geometry operations.
pub trait GeometryKernel {
    /// The kernel's internal solid representation.
    type Solid;

    /// Build a closed solid passing through `wires` in order.
    ///
    /// Every wire is a closed polygon; all wires must share a point count
    /// so consecutive sections can be paired vertex by vertex.
    fn loft(&self, wires: &[Polygon]) -> KernelResult<Self::Solid>;

    /// Convert a solid to a triangle mesh for rendering.
    fn tessellate(&self, solid: &Self::Solid) -> KernelResult<TriangleMesh>;

    /// Export a solid to STEP format and return as a string.
    fn export_step(&self, solid: &Self::Solid) -> KernelResult<String>;
}
