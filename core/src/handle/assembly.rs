use super::config::{Dimension, HandleConfig};
use crate::error::{HandleError, HandleResult};
use crate::geometry::{superellipse, Point3, Polygon, Vector3};
use crate::interpolate::interpolate_polygon;

/// Sample a dimension as a superellipse centered on the Z axis at height `z`.
pub fn profile(dimension: &Dimension, z: f64, points: usize) -> HandleResult<Polygon> {
    superellipse(
        Point3::new(0.0, 0.0, z),
        dimension.width,
        dimension.height,
        points,
        dimension.order,
    )
}

/// Base profiles every segment is derived from.
#[derive(Debug, Clone)]
pub struct HandleProfiles {
    /// Large profile at z = 0.
    pub large_start: Polygon,
    /// Small profile at z = offset / 2.
    pub small_mid: Polygon,
    /// Small profile at z = 0.
    pub small_start: Polygon,
    /// Large profile at z = offset / 2.
    pub large_mid: Polygon,
    /// End cap profile behind z = 0.
    pub entry: Polygon,
}

impl HandleProfiles {
    pub fn new(config: &HandleConfig) -> HandleResult<Self> {
        let n = config.resolution().points_per_profile;
        let half = config.offset / 2.0;
        Ok(Self {
            large_start: profile(&config.large, 0.0, n)?,
            small_mid: profile(&config.small, half, n)?,
            small_start: profile(&config.small, 0.0, n)?,
            large_mid: profile(&config.large, half, n)?,
            entry: profile(&config.end_dimension(), -config.end.offset, n)?,
        })
    }
}

/// Build the ordered cross sections of a handle, from the entry cap to the exit cap.
///
/// The result holds `steps + count * (steps - 1) + (steps - 1)` polygons in
/// strictly increasing z.
pub fn build_slices(config: &HandleConfig) -> HandleResult<Vec<Polygon>> {
    config.validate()?;
    let resolution = config.resolution();
    let steps = resolution.interpolation_steps;
    let profiles = HandleProfiles::new(config)?;

    let large_to_small = interpolate_polygon(
        &profiles.large_start,
        &profiles.small_mid,
        steps,
        config.transition_easing,
    )?;
    let small_to_large = interpolate_polygon(
        &profiles.small_start,
        &profiles.large_mid,
        steps,
        config.transition_easing,
    )?;

    let capacity = config.slice_count().ok_or_else(|| {
        HandleError::validation(format!("Too many segments: {}", config.count))
    })?;
    let mut slices = Vec::with_capacity(capacity);

    // Interpolation skips its first polygon, so the cap profile goes in by hand.
    slices.push(profiles.entry.clone());
    slices.extend(interpolate_polygon(
        &profiles.entry,
        &profiles.large_start,
        steps,
        config.entry_easing,
    )?);

    for i in 0..config.count {
        let shift = Vector3::new(0.0, 0.0, (config.offset * i as f64) / 2.0);
        let transition = if i % 2 == 0 {
            &large_to_small
        } else {
            &small_to_large
        };
        slices.extend(transition.iter().map(|p| p.translated(shift)));
    }

    let end_z = config.end_z();
    let last = if config.count % 2 == 0 {
        &config.large
    } else {
        &config.small
    };
    slices.extend(interpolate_polygon(
        &profile(last, end_z, resolution.points_per_profile)?,
        &profile(&config.end_dimension(), end_z + config.end.offset, resolution.points_per_profile)?,
        steps,
        config.exit_easing,
    )?);

    tracing::debug!(
        slices = slices.len(),
        count = config.count,
        steps,
        points = resolution.points_per_profile,
        "assembled handle cross sections"
    );
    Ok(slices)
}

/// Check that slice heights strictly increase.
pub fn verify_ascending(slices: &[Polygon]) -> HandleResult<()> {
    let mut previous: Option<f64> = None;
    for (i, slice) in slices.iter().enumerate() {
        let z = slice
            .z()
            .ok_or_else(|| HandleError::validation(format!("Slice {} is empty", i)))?;
        if let Some(prev) = previous {
            if z <= prev {
                return Err(HandleError::validation(format!(
                    "Slice {} at z={} does not follow z={}",
                    i, z, prev
                )));
            }
        }
        previous = Some(z);
    }
    Ok(())
}
