//! Location, era, and atmosphere types.

use cineprompt_config::{
    DEFAULT_ERA, DEFAULT_SEASON, DEFAULT_TIME_OF_DAY, DEFAULT_WEATHER, DEFAULT_YEAR,
};
use serde::{Deserialize, Serialize};

/// Whether the shot is placed on Earth or somewhere in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    #[default]
    Earth,
    Cosmic,
}

/// A point picked on the interactive map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapCoordinates {
    pub lat: f64,
    pub lng: f64,
    pub place_name: String,
}

/// Where and when the shot takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationConfig {
    pub mode: LocationMode,
    pub coordinates: Option<MapCoordinates>,
    /// Earth location catalog id
    pub earth_location: String,
    /// Free-text place, wins over `earth_location` when non-blank
    pub custom_location: String,
    /// Cosmic location catalog id
    pub cosmic_location: String,
    /// Era catalog id
    pub era: String,
    /// Signed year, negative = BC
    pub year: i32,
    pub time_of_day: String,
    pub weather: String,
    pub season: String,
    /// Enables contradiction filtering of the flat prompt
    pub smart_filter_enabled: bool,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            mode: LocationMode::Earth,
            coordinates: None,
            earth_location: String::new(),
            custom_location: String::new(),
            cosmic_location: String::new(),
            era: DEFAULT_ERA.to_string(),
            year: DEFAULT_YEAR,
            time_of_day: DEFAULT_TIME_OF_DAY.to_string(),
            weather: DEFAULT_WEATHER.to_string(),
            season: DEFAULT_SEASON.to_string(),
            smart_filter_enabled: true,
        }
    }
}
