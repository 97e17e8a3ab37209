//! Camera orientation types.

use cineprompt_config::{DEFAULT_AZIMUTH, DEFAULT_ELEVATION, DEFAULT_ROLL};
use serde::{Deserialize, Serialize};

/// Camera orbit around the subject, in degrees.
///
/// Azimuth is accepted unnormalized; the engine wraps it into [0, 360).
/// Elevation and roll are used as given, clamping belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraAngles {
    /// Horizontal orbit (0 = facing the subject)
    pub azimuth: f64,
    /// Vertical angle, negative = below eye level
    pub elevation: f64,
    /// Dutch tilt about the viewing axis, positive = clockwise
    pub roll: f64,
}

impl CameraAngles {
    pub fn new(azimuth: f64, elevation: f64, roll: f64) -> Self {
        Self {
            azimuth,
            elevation,
            roll,
        }
    }
}

impl Default for CameraAngles {
    fn default() -> Self {
        Self::new(DEFAULT_AZIMUTH, DEFAULT_ELEVATION, DEFAULT_ROLL)
    }
}
