//! Structured settings extracted from free text by an external service.
//!
//! Every field is optional: only what the service recognized is merged back
//! into the shot.

use serde::{Deserialize, Serialize};

use super::LocationMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParsedSettings {
    pub subject: Option<String>,
    pub setting: Option<String>,
    pub lens: Option<String>,
    pub aspect_ratio: Option<String>,
    pub film_stock: Option<String>,
    pub camera: Option<ParsedCamera>,
    pub location: Option<ParsedLocation>,
    pub lighting: Option<ParsedLighting>,
    pub composition: Option<ParsedComposition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedCamera {
    pub azimuth: Option<f64>,
    pub elevation: Option<f64>,
    pub roll: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParsedLocation {
    pub mode: Option<LocationMode>,
    pub earth_location: Option<String>,
    pub custom_location: Option<String>,
    pub cosmic_location: Option<String>,
    pub era: Option<String>,
    pub year: Option<i32>,
    pub time_of_day: Option<String>,
    pub weather: Option<String>,
    pub season: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedLighting {
    pub volumetric: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedComposition {
    pub foreground: Option<String>,
    pub midground: Option<String>,
    pub background: Option<String>,
}
