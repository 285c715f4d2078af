//! Handle solids lofted through superellipse cross sections.
//!
//! [`handle::build_slices`] produces the ordered cross sections;
//! [`handle::generate`] lofts them through a [`kernel::GeometryKernel`]
//! into a [`scene::Scene`].

pub mod error;
pub mod geometry;
pub mod handle;
pub mod interpolate;
pub mod kernel;
pub mod scene;

pub use error::{HandleError, HandleResult};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
