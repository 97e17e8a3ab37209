//! Exported configuration format.

use cineprompt_config::EXPORT_VERSION;
use serde::{Deserialize, Serialize};

use super::{CameraAngles, SceneSettings};

/// Shareable snapshot of the camera and scene settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedConfiguration {
    pub version: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub camera: CameraAngles,
    pub scene: SceneSettings,
}

impl ExportedConfiguration {
    pub fn new(timestamp: u64, camera: CameraAngles, scene: SceneSettings) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            timestamp,
            camera,
            scene,
        }
    }
}
