//! Command types for IPC messages.
//!
//! One variant per UI control action. The engine session applies them to its
//! snapshot; clamping and mode side effects live there, not here.

mod lighting;
mod location;

pub use lighting::*;
pub use location::*;

use serde::{Deserialize, Serialize};

use crate::types::{DepthLayer, LayerKind};

/// A change to any part of the shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShotCommand {
    Camera(CameraCommand),
    Scene(SceneCommand),
    Lighting(LightingCommand),
    Composition(CompositionCommand),
    Location(LocationCommand),
}

/// Camera axis addressed by a nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleAxis {
    Azimuth,
    Elevation,
    Roll,
}

/// Camera control commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CameraCommand {
    SetAzimuth { value: f64 },
    SetElevation { value: f64 },
    SetRoll { value: f64 },
    /// Partial update, absent axes keep their value
    SetAngles {
        azimuth: Option<f64>,
        elevation: Option<f64>,
        roll: Option<f64>,
    },
    /// Step one axis up (`increase`) or down; `coarse` picks the larger step
    Nudge {
        axis: AngleAxis,
        increase: bool,
        coarse: bool,
    },
    LoadPreset { id: String },
    Reset,
}

/// Subject, lens, framing, and film stock commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SceneCommand {
    SetSubject(String),
    SetSetting(String),
    SetCharSheet(Option<String>),
    SetLens(String),
    SetAspectRatio(String),
    SetLightingPreset(String),
    SetFilmStock(String),
    Reset,
}

/// Partial update of a depth layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthLayerUpdate {
    pub description: Option<String>,
    pub fog_density: Option<f64>,
}

impl DepthLayerUpdate {
    /// Overwrite only the fields present in the update
    pub fn apply_to(self, layer: &mut DepthLayer) {
        if let Some(description) = self.description {
            layer.description = description;
        }
        if let Some(fog_density) = self.fog_density {
            layer.fog_density = fog_density;
        }
    }
}

/// Depth layer composition commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CompositionCommand {
    UpdateLayer {
        layer: LayerKind,
        update: DepthLayerUpdate,
    },
    SetFocusLayer(LayerKind),
    SetDepthBlur(f64),
    Reset,
}
