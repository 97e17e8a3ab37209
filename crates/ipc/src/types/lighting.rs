//! Lighting rig types.

use cineprompt_config::{DEFAULT_FOG_COLOR, DEFAULT_FOG_DENSITY};
use serde::{Deserialize, Deserializer, Serialize};

use crate::commands::LightUpdate;

/// Position of a light in preview space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A single light in the rig.
///
/// Only `enabled` and `intensity` reach the prompt text; color and position
/// drive the 3D preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    pub enabled: bool,
    /// Hex color, e.g. "#ffffff"
    pub color: String,
    pub intensity: f64,
    pub position: Position3,
}

impl LightState {
    pub fn new(enabled: bool, color: &str, intensity: f64, position: Position3) -> Self {
        Self {
            enabled,
            color: color.to_string(),
            intensity,
            position,
        }
    }

    pub fn default_key() -> Self {
        Self::new(true, "#ffffff", 1.0, Position3::new(3.0, 3.0, 3.0))
    }

    pub fn default_fill() -> Self {
        Self::new(true, "#88aaff", 0.4, Position3::new(-3.0, 1.0, 2.0))
    }

    pub fn default_back() -> Self {
        Self::new(true, "#ffaa44", 0.6, Position3::new(0.0, 2.0, -4.0))
    }

    pub fn default_practical() -> Self {
        Self::new(false, "#ff00ff", 0.5, Position3::new(2.0, 0.0, 1.0))
    }
}

/// Snapshot lights may be partial; absent fields keep the role's default.
fn merge_light<'de, D>(deserializer: D, mut light: LightState) -> Result<LightState, D::Error>
where
    D: Deserializer<'de>,
{
    LightUpdate::deserialize(deserializer)?.apply_to(&mut light);
    Ok(light)
}

fn key_light<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LightState, D::Error> {
    merge_light(deserializer, LightState::default_key())
}

fn fill_light<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LightState, D::Error> {
    merge_light(deserializer, LightState::default_fill())
}

fn back_light<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LightState, D::Error> {
    merge_light(deserializer, LightState::default_back())
}

fn practical_light<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LightState, D::Error> {
    merge_light(deserializer, LightState::default_practical())
}

/// Which light of the rig a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightRole {
    Key,
    Fill,
    Back,
    Practical,
}

/// Kind of in-frame practical light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticalType {
    #[default]
    None,
    Neon,
    Candle,
    Window,
    Screen,
    /// Any type id this build does not know about
    #[serde(other)]
    Other,
}

impl PracticalType {
    /// Preview color the practical light takes when this type is picked
    pub fn preview_color(self) -> &'static str {
        match self {
            Self::Neon => "#ff00ff",
            Self::Candle => "#ff9933",
            Self::Window => "#aaccff",
            Self::Screen => "#00ffaa",
            Self::None | Self::Other => "#ffffff",
        }
    }
}

/// Full lighting rig plus atmosphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightingConfig {
    #[serde(deserialize_with = "key_light")]
    pub key_light: LightState,
    #[serde(deserialize_with = "fill_light")]
    pub fill_light: LightState,
    #[serde(deserialize_with = "back_light")]
    pub back_light: LightState,
    #[serde(deserialize_with = "practical_light")]
    pub practical_light: LightState,
    pub practical_type: PracticalType,
    pub volumetric: bool,
    /// Scene fog density (0.0 - ~0.2)
    pub fog_density: f64,
    /// Preview fog color
    pub fog_color: String,
}

impl LightingConfig {
    /// Light state for a role
    pub fn light(&self, role: LightRole) -> &LightState {
        match role {
            LightRole::Key => &self.key_light,
            LightRole::Fill => &self.fill_light,
            LightRole::Back => &self.back_light,
            LightRole::Practical => &self.practical_light,
        }
    }

    /// Mutable light state for a role
    pub fn light_mut(&mut self, role: LightRole) -> &mut LightState {
        match role {
            LightRole::Key => &mut self.key_light,
            LightRole::Fill => &mut self.fill_light,
            LightRole::Back => &mut self.back_light,
            LightRole::Practical => &mut self.practical_light,
        }
    }

    /// A rig with every light switched off and no atmosphere
    pub fn unlit() -> Self {
        let mut config = Self::default();
        for role in [LightRole::Key, LightRole::Fill, LightRole::Back, LightRole::Practical] {
            config.light_mut(role).enabled = false;
        }
        config
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            key_light: LightState::default_key(),
            fill_light: LightState::default_fill(),
            back_light: LightState::default_back(),
            practical_light: LightState::default_practical(),
            practical_type: PracticalType::None,
            volumetric: false,
            fog_density: DEFAULT_FOG_DENSITY,
            fog_color: DEFAULT_FOG_COLOR.to_string(),
        }
    }
}
