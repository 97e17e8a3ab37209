//! Place, era, time of day, weather, and season phrasing

use cineprompt_config::{DEFAULT_ERA, DEFAULT_SEASON};
use cineprompt_ipc::{LocationConfig, LocationMode};

use crate::catalog::Catalog;
use crate::constants::SEGMENT_SEPARATOR;

/// Where the shot happens. Only one source contributes, in priority order:
/// map pick, then earth custom text or preset, then cosmic preset.
pub fn place_phrase(location: &LocationConfig, catalog: &Catalog) -> Option<String> {
    if let Some(coordinates) = &location.coordinates {
        if !coordinates.place_name.is_empty() {
            return Some(format!("in {}", coordinates.place_name));
        }
    }

    match location.mode {
        LocationMode::Earth => {
            let custom = location.custom_location.trim();
            if !custom.is_empty() {
                return Some(format!("in {custom}"));
            }
            catalog
                .earth_location(&location.earth_location)
                .map(|place| format!("in {}", place.prompt))
        }
        LocationMode::Cosmic => catalog
            .cosmic_location(&location.cosmic_location)
            .map(|place| place.prompt.clone()),
    }
}

/// Format a signed year as "N BC" / "N AD"
pub fn year_label(year: i32) -> String {
    if year < 0 {
        format!("{} BC", year.unsigned_abs())
    } else {
        format!("{year} AD")
    }
}

/// Era phrase; the default era never contributes.
///
/// A year that differs from the era's canonical year is phrased as
/// "circa <year>" instead of the era text.
pub fn era_phrase(location: &LocationConfig, catalog: &Catalog) -> Option<String> {
    if location.era == DEFAULT_ERA {
        return None;
    }
    let era = catalog.era(&location.era)?;
    if location.year != era.year {
        Some(format!("circa {}", year_label(location.year)))
    } else {
        Some(era.prompt.clone())
    }
}

/// Describe place and time as comma-joined phrases in the fixed order
/// place, era, time of day, weather, season.
pub fn describe_location_time(location: &LocationConfig, catalog: &Catalog) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.extend(place_phrase(location, catalog));
    parts.extend(era_phrase(location, catalog));

    let time = catalog.time_of_day(&location.time_of_day);
    let weather = catalog.weather(&location.weather);
    let season = if location.season == DEFAULT_SEASON {
        None
    } else {
        catalog.season(&location.season)
    };

    parts.extend(
        [time, weather, season]
            .into_iter()
            .flatten()
            .filter(|descriptor| !descriptor.prompt.is_empty())
            .map(|descriptor| descriptor.prompt.clone()),
    );

    parts.join(SEGMENT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineprompt_ipc::MapCoordinates;

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_defaults_contribute_nothing() {
        assert_eq!(describe_location_time(&LocationConfig::default(), catalog()), "");
    }

    #[test]
    fn test_map_pick_wins() {
        let location = LocationConfig {
            coordinates: Some(MapCoordinates {
                lat: 48.85,
                lng: 2.35,
                place_name: "Montmartre, Paris".into(),
            }),
            custom_location: "somewhere else".into(),
            earth_location: "tokyo".into(),
            ..Default::default()
        };
        assert_eq!(describe_location_time(&location, catalog()), "in Montmartre, Paris");
    }

    #[test]
    fn test_map_pick_wins_in_cosmic_mode() {
        let location = LocationConfig {
            mode: LocationMode::Cosmic,
            coordinates: Some(MapCoordinates {
                lat: 37.24,
                lng: -115.81,
                place_name: "Area 51".into(),
            }),
            cosmic_location: "mars".into(),
            ..Default::default()
        };
        assert_eq!(place_phrase(&location, catalog()).as_deref(), Some("in Area 51"));
        assert_eq!(describe_location_time(&location, catalog()), "in Area 51");
    }

    #[test]
    fn test_empty_place_name_falls_through() {
        let location = LocationConfig {
            coordinates: Some(MapCoordinates::default()),
            earth_location: "cairo".into(),
            ..Default::default()
        };
        assert_eq!(
            describe_location_time(&location, catalog()),
            "in Cairo, Egypt near the pyramids"
        );
    }

    #[test]
    fn test_custom_location_beats_preset() {
        let location = LocationConfig {
            custom_location: "  a quiet fishing village ".into(),
            earth_location: "tokyo".into(),
            ..Default::default()
        };
        assert_eq!(describe_location_time(&location, catalog()), "in a quiet fishing village");
    }

    #[test]
    fn test_cosmic_prompt_is_verbatim() {
        let location = LocationConfig {
            mode: LocationMode::Cosmic,
            cosmic_location: "mars".into(),
            earth_location: "tokyo".into(),
            ..Default::default()
        };
        assert_eq!(
            describe_location_time(&location, catalog()),
            "on the surface of Mars, red desert landscape"
        );
    }

    #[test]
    fn test_unknown_ids_are_omitted() {
        let location = LocationConfig {
            earth_location: "atlantis".into(),
            era: "jurassic".into(),
            time_of_day: "teatime".into(),
            weather: "meteor shower".into(),
            season: "monsoon".into(),
            ..Default::default()
        };
        assert_eq!(describe_location_time(&location, catalog()), "");
    }

    #[test]
    fn test_era_canonical_year_uses_era_text() {
        let mut location = LocationConfig {
            era: "ancient_egypt".into(),
            year: -2500,
            ..Default::default()
        };
        assert_eq!(
            describe_location_time(&location, catalog()),
            "ancient Egyptian era, pharaohs and pyramids"
        );

        location.year = -3000;
        assert_eq!(describe_location_time(&location, catalog()), "circa 3000 BC");

        location.year = 0;
        assert_eq!(describe_location_time(&location, catalog()), "circa 0 AD");
    }

    #[test]
    fn test_modern_era_never_contributes() {
        let location = LocationConfig {
            era: "modern".into(),
            year: 1999,
            ..Default::default()
        };
        assert_eq!(describe_location_time(&location, catalog()), "");
    }

    #[test]
    fn test_full_order() {
        let location = LocationConfig {
            earth_location: "london".into(),
            era: "victorian".into(),
            year: 1880,
            time_of_day: "night".into(),
            weather: "fog".into(),
            season: "winter".into(),
            ..Default::default()
        };
        assert_eq!(
            describe_location_time(&location, catalog()),
            "in London, England, Victorian era, steam and industry, \
             at night, darkness and city lights, thick fog, low visibility, \
             winter season, bare trees and frost"
        );
    }

    #[test]
    fn test_clear_weather_and_summer_are_silent() {
        let location = LocationConfig {
            time_of_day: "dawn".into(),
            weather: "clear".into(),
            season: "summer".into(),
            ..Default::default()
        };
        assert_eq!(
            describe_location_time(&location, catalog()),
            "at dawn, first light of day"
        );
    }

    #[test]
    fn test_year_label() {
        assert_eq!(year_label(-50000), "50000 BC");
        assert_eq!(year_label(1920), "1920 AD");
    }
}
