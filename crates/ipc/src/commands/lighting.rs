//! Lighting rig command types.

use serde::{Deserialize, Serialize};

use crate::types::{LightRole, LightState, Position3, PracticalType};

/// Partial update of a single light.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightUpdate {
    pub enabled: Option<bool>,
    pub color: Option<String>,
    pub intensity: Option<f64>,
    pub position: Option<Position3>,
}

impl LightUpdate {
    /// Overwrite only the fields present in the update
    pub fn apply_to(self, light: &mut LightState) {
        if let Some(enabled) = self.enabled {
            light.enabled = enabled;
        }
        if let Some(color) = self.color {
            light.color = color;
        }
        if let Some(intensity) = self.intensity {
            light.intensity = intensity;
        }
        if let Some(position) = self.position {
            light.position = position;
        }
    }
}

/// Commands for the lighting rig and atmosphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LightingCommand {
    UpdateLight { role: LightRole, update: LightUpdate },
    /// Picks a practical type; also resets and re-colors the practical light
    SetPracticalType(PracticalType),
    SetVolumetric(bool),
    SetFogDensity(f64),
    SetFogColor(String),
    Reset,
}
