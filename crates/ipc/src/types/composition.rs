//! Depth layer composition types.

use cineprompt_config::{
    DEFAULT_BACKGROUND_FOG, DEFAULT_DEPTH_BLUR, DEFAULT_FOREGROUND_FOG, DEFAULT_MIDGROUND_FOG,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::commands::DepthLayerUpdate;

/// One of the three depth planes of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Foreground,
    #[default]
    Midground,
    Background,
}

/// Free-text content of a depth plane and how much haze separates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthLayer {
    pub description: String,
    /// 0-100
    pub fog_density: f64,
}

impl DepthLayer {
    pub fn new(description: impl Into<String>, fog_density: f64) -> Self {
        Self {
            description: description.into(),
            fog_density,
        }
    }
}

/// Snapshot layers may be partial; absent fields keep the plane's default haze.
fn merge_layer<'de, D>(deserializer: D, fog_density: f64) -> Result<DepthLayer, D::Error>
where
    D: Deserializer<'de>,
{
    let mut layer = DepthLayer::new("", fog_density);
    DepthLayerUpdate::deserialize(deserializer)?.apply_to(&mut layer);
    Ok(layer)
}

fn foreground<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DepthLayer, D::Error> {
    merge_layer(deserializer, DEFAULT_FOREGROUND_FOG)
}

fn midground<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DepthLayer, D::Error> {
    merge_layer(deserializer, DEFAULT_MIDGROUND_FOG)
}

fn background<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DepthLayer, D::Error> {
    merge_layer(deserializer, DEFAULT_BACKGROUND_FOG)
}

/// Foreground/midground/background layers plus depth of field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompositionConfig {
    #[serde(deserialize_with = "foreground")]
    pub foreground: DepthLayer,
    #[serde(deserialize_with = "midground")]
    pub midground: DepthLayer,
    #[serde(deserialize_with = "background")]
    pub background: DepthLayer,
    /// 0-100
    pub depth_blur: f64,
    /// UI focus plane, never reaches the prompt text
    pub focus_layer: LayerKind,
}

impl CompositionConfig {
    pub fn layer(&self, kind: LayerKind) -> &DepthLayer {
        match kind {
            LayerKind::Foreground => &self.foreground,
            LayerKind::Midground => &self.midground,
            LayerKind::Background => &self.background,
        }
    }

    pub fn layer_mut(&mut self, kind: LayerKind) -> &mut DepthLayer {
        match kind {
            LayerKind::Foreground => &mut self.foreground,
            LayerKind::Midground => &mut self.midground,
            LayerKind::Background => &mut self.background,
        }
    }
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            foreground: DepthLayer::new("", DEFAULT_FOREGROUND_FOG),
            midground: DepthLayer::new("", DEFAULT_MIDGROUND_FOG),
            background: DepthLayer::new("", DEFAULT_BACKGROUND_FOG),
            depth_blur: DEFAULT_DEPTH_BLUR,
            focus_layer: LayerKind::Midground,
        }
    }
}
