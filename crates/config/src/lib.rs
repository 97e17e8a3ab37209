//! Shared configuration for CinePrompt
//!
//! This crate provides the single source of truth for the default shot
//! values, control ranges, and process settings shared by the data model,
//! the prompt engine, and the command-line front end.

use serde::{Deserialize, Serialize};

// ============================================================================
// Camera
// ============================================================================

/// Default horizontal orbit angle in degrees
pub const DEFAULT_AZIMUTH: f64 = 45.0;

/// Default vertical camera angle in degrees
pub const DEFAULT_ELEVATION: f64 = 15.0;

/// Default dutch tilt in degrees
pub const DEFAULT_ROLL: f64 = 0.0;

/// Elevation slider range (degrees)
pub const ELEVATION_RANGE: (f64, f64) = (-90.0, 90.0);

/// Roll slider range (degrees)
pub const ROLL_RANGE: (f64, f64) = (-45.0, 45.0);

/// Fine nudge step for azimuth/elevation
pub const NUDGE_STEP: f64 = 1.0;

/// Coarse nudge step for azimuth/elevation
pub const NUDGE_STEP_COARSE: f64 = 5.0;

/// Roll nudge step
pub const ROLL_NUDGE_STEP: f64 = 5.0;

// ============================================================================
// Scene
// ============================================================================

pub const DEFAULT_SUBJECT: &str = "A cyberpunk samurai warrior";
pub const DEFAULT_SETTING: &str = "neon-lit rain slicked streets";
pub const DEFAULT_LENS: &str = "50mm";
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";
pub const DEFAULT_LIGHTING_PRESET: &str = "natural";
pub const DEFAULT_FILM_STOCK: &str = "digital";

// ============================================================================
// Composition
// ============================================================================

pub const DEFAULT_FOREGROUND_FOG: f64 = 10.0;
pub const DEFAULT_MIDGROUND_FOG: f64 = 0.0;
pub const DEFAULT_BACKGROUND_FOG: f64 = 40.0;
pub const DEFAULT_DEPTH_BLUR: f64 = 30.0;

// ============================================================================
// Lighting
// ============================================================================

/// Default atmospheric fog density (scene units, not percent)
pub const DEFAULT_FOG_DENSITY: f64 = 0.02;
pub const DEFAULT_FOG_COLOR: &str = "#1a1a2e";

// ============================================================================
// Location / time
// ============================================================================

pub const DEFAULT_ERA: &str = "modern";
pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_TIME_OF_DAY: &str = "day";
pub const DEFAULT_WEATHER: &str = "clear";
pub const DEFAULT_SEASON: &str = "summer";

/// Version tag written into exported configurations
pub const EXPORT_VERSION: &str = "1.0";

/// Output format for the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain prompt text (segments one per line when requested)
    #[default]
    Text,
    /// Full `PromptOutput` as JSON
    Json,
}

impl OutputFormat {
    /// Parse from environment variable CINEPROMPT_OUTPUT
    pub fn from_env() -> Self {
        Self::parse(std::env::var("CINEPROMPT_OUTPUT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            Some("text") | _ => Self::Text,
        }
    }
}

/// Process configuration read once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputFormat,
    /// Forces the smart contradiction filter on or off regardless of the
    /// snapshot's own flag
    pub smart_filter_override: Option<bool>,
}

impl AppConfig {
    /// Build the configuration from CINEPROMPT_* environment variables
    pub fn from_env() -> Self {
        Self {
            output: OutputFormat::from_env(),
            smart_filter_override: parse_switch(
                std::env::var("CINEPROMPT_SMART_FILTER").ok().as_deref(),
            ),
        }
    }
}

fn parse_switch(value: Option<&str>) -> Option<bool> {
    match value?.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Some(true),
        "off" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Clamp an angle to an inclusive (min, max) range
pub fn clamp_to(value: f64, range: (f64, f64)) -> f64 {
    value.max(range.0).min(range.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse(Some("json")), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(Some("text")), OutputFormat::Text);
        assert_eq!(OutputFormat::parse(Some("yaml")), OutputFormat::Text);
        assert_eq!(OutputFormat::parse(None), OutputFormat::Text);
    }

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch(Some("ON")), Some(true));
        assert_eq!(parse_switch(Some("off")), Some(false));
        assert_eq!(parse_switch(Some("maybe")), None);
        assert_eq!(parse_switch(None), None);
    }

    #[test]
    fn test_clamp_to_ranges() {
        assert_eq!(clamp_to(120.0, ELEVATION_RANGE), 90.0);
        assert_eq!(clamp_to(-50.0, ROLL_RANGE), -45.0);
        assert_eq!(clamp_to(10.0, ROLL_RANGE), 10.0);
    }
}
