//! Handle geometry: alternating large/small superellipse segments with
//! tapered caps, lofted into a single solid.

pub mod assembly;
pub mod config;

#[cfg(test)]
mod tests_assembly;

pub use assembly::{build_slices, profile, verify_ascending, HandleProfiles};
pub use config::{Dimension, EndCapConfig, HandleConfig, Resolution, MAX_SEGMENTS};

use crate::error::HandleResult;
use crate::kernel::{GeometryKernel, LoftCache};
use crate::scene::{Scene, ShapeId};

/// Build the handle's slices, add them to `scene` as wires and loft them.
///
/// Returns the id of the lofted solid. The wires stay in the scene only
/// when `keep_wires` is set.
pub fn generate<K: GeometryKernel>(
    kernel: &K,
    cache: &mut LoftCache<K::Solid>,
    scene: &mut Scene<K::Solid>,
    config: &HandleConfig,
    keep_wires: bool,
) -> HandleResult<ShapeId>
where
    K::Solid: Clone,
{
    let slices = build_slices(config)?;
    verify_ascending(&slices)?;
    tracing::info!(slices = slices.len(), "lofting handle");

    let wire_ids: Vec<ShapeId> = slices.into_iter().map(|s| scene.add_wire(s)).collect();
    scene.loft(kernel, cache, &wire_ids, keep_wires)
}
