//! Scene-level settings: subject, lens, framing, film stock.

use cineprompt_config::{
    DEFAULT_ASPECT_RATIO, DEFAULT_FILM_STOCK, DEFAULT_LENS, DEFAULT_LIGHTING_PRESET,
    DEFAULT_SETTING, DEFAULT_SUBJECT,
};
use serde::{Deserialize, Serialize};

/// Free-text scene description plus the catalog ids picked in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneSettings {
    pub subject: String,
    /// Fallback place description, used only when no location phrase exists
    pub setting: String,
    /// Character reference sheet (data URL). Only its presence matters to the engine.
    pub char_sheet: Option<String>,
    pub lens: String,
    /// Passed through verbatim into `--ar`
    pub aspect_ratio: String,
    /// Lighting preset id, drives the 3D preview only
    pub lighting: String,
    pub film_stock: String,
}

impl SceneSettings {
    /// Whether a character reference image is attached
    pub fn has_character_reference(&self) -> bool {
        self.char_sheet.as_deref().is_some_and(|sheet| !sheet.is_empty())
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            setting: DEFAULT_SETTING.to_string(),
            char_sheet: None,
            lens: DEFAULT_LENS.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            lighting: DEFAULT_LIGHTING_PRESET.to_string(),
            film_stock: DEFAULT_FILM_STOCK.to_string(),
        }
    }
}
