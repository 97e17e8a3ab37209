//! Location and time command types.

use serde::{Deserialize, Serialize};

use crate::types::{LocationMode, MapCoordinates};

/// Commands for place, era, and atmosphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LocationCommand {
    SetMode(LocationMode),
    /// Map pick; switches to earth mode
    SetCoordinates(Option<MapCoordinates>),
    /// Earth preset; switches to earth mode and drops map coordinates
    SetEarthLocation(String),
    SetCustomLocation(String),
    /// Cosmic preset; switches to cosmic mode
    SetCosmicLocation(String),
    SetEra(String),
    SetYear(i32),
    SetTimeOfDay(String),
    SetWeather(String),
    SetSeason(String),
    SetSmartFilter(bool),
    Reset,
}
