use serde::{Deserialize, Serialize};

/// Named easing curves mapping [0, 1] onto [0, 1].
///
/// See <https://easings.net/> for plots of each curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    InQuart,
    OutQuart,
    #[default]
    InOutQuad,
}

impl Easing {
    /// Remap a normalized parameter along this curve.
    pub fn ease(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InQuart => t * t * t * t,
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }

    /// Interpolate between `start` and `end` with eased pacing.
    pub fn apply(self, start: f64, end: f64, t: f64) -> f64 {
        lerp(start, end, self.ease(t))
    }
}

pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}
