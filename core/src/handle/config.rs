use crate::error::{HandleError, HandleResult};
use crate::interpolate::Easing;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One cross-section style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
    /// Superellipse order. 2 = ellipse, >2 flattens toward a rounded rectangle.
    pub order: f64,
}

impl Dimension {
    pub const fn new(width: f64, height: f64, order: f64) -> Self {
        Self { width, height, order }
    }

    fn validate(&self, name: &str) -> HandleResult<()> {
        let finite = self.width.is_finite() && self.height.is_finite() && self.order.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 || self.order <= 0.0 {
            return Err(HandleError::validation(format!(
                "Dimension '{}' must have positive width, height and order, got {:?}",
                name, self
            )));
        }
        Ok(())
    }
}

/// Shrunk profile closing each end of the handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndCapConfig {
    /// Amount removed from the large profile's width and height.
    pub shrink: f64,
    /// Axial distance between the end profile and the adjacent large profile.
    pub offset: f64,
    pub order: f64,
}

impl Default for EndCapConfig {
    fn default() -> Self {
        Self {
            shrink: 1.0,
            offset: 1.0,
            order: 2.6,
        }
    }
}

impl EndCapConfig {
    /// Cap dimension derived from the large profile.
    pub fn dimension(&self, large: &Dimension) -> Dimension {
        Dimension::new(large.width - self.shrink, large.height - self.shrink, self.order)
    }
}

/// Sampling density derived from [`HandleConfig::low_resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub interpolation_steps: usize,
    pub points_per_profile: usize,
}

impl Resolution {
    pub const FULL: Self = Self {
        interpolation_steps: 8,
        points_per_profile: 36,
    };

    pub const LOW: Self = Self {
        interpolation_steps: 6,
        points_per_profile: 18,
    };
}

/// Upper bound on [`HandleConfig::count`].
pub const MAX_SEGMENTS: usize = 10_000;

/// Parameters describing one handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleConfig {
    /// Number of axial segments (alternating large→small, small→large).
    pub count: usize,
    /// Axial length of two consecutive segments.
    pub offset: f64,
    /// Trade fidelity for speed: fewer interpolation steps and profile points.
    pub low_resolution: bool,
    pub large: Dimension,
    pub small: Dimension,
    pub end: EndCapConfig,
    pub transition_easing: Easing,
    pub entry_easing: Easing,
    pub exit_easing: Easing,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            count: 8,
            offset: 20.0,
            low_resolution: false,
            large: Dimension::new(16.5, 10.0, 2.6),
            small: Dimension::new(11.0, 10.5, 2.2),
            end: EndCapConfig::default(),
            transition_easing: Easing::InOutQuad,
            entry_easing: Easing::OutQuart,
            exit_easing: Easing::InQuart,
        }
    }
}

impl HandleConfig {
    pub fn from_json_str(json: &str) -> HandleResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> HandleResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn resolution(&self) -> Resolution {
        if self.low_resolution {
            Resolution::LOW
        } else {
            Resolution::FULL
        }
    }

    /// Cap dimension derived from the large profile.
    pub fn end_dimension(&self) -> Dimension {
        self.end.dimension(&self.large)
    }

    /// Number of cross sections `build_slices` produces, or `None` on overflow.
    pub fn slice_count(&self) -> Option<usize> {
        let steps = self.resolution().interpolation_steps;
        self.count
            .checked_add(1)?
            .checked_mul(steps - 1)?
            .checked_add(steps)
    }

    /// Z of the profile closing the last segment.
    pub fn end_z(&self) -> f64 {
        (self.offset / 2.0) * self.count as f64
    }

    pub fn validate(&self) -> HandleResult<()> {
        if self.count > MAX_SEGMENTS || self.slice_count().is_none() {
            return Err(HandleError::validation(format!(
                "Segment count must be at most {}, got {}",
                MAX_SEGMENTS, self.count
            )));
        }
        if !(self.offset.is_finite() && self.offset > 0.0) {
            return Err(HandleError::validation(format!(
                "Segment offset must be positive, got {}",
                self.offset
            )));
        }
        if !(self.end.offset.is_finite() && self.end.offset > 0.0) {
            return Err(HandleError::validation(format!(
                "End cap offset must be positive, got {}",
                self.end.offset
            )));
        }
        self.large.validate("large")?;
        self.small.validate("small")?;
        self.end_dimension().validate("end")?;
        Ok(())
    }
}
