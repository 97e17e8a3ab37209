//! Reference catalog
//!
//! Read-only tables looked up by string id: lenses, film stocks, places,
//! eras, times of day, weather, seasons, lighting setups, camera presets,
//! and the ordered contradiction pairs used by the smart filter. A lookup
//! miss is not an error; the describers simply omit the phrase.

mod builtin;
mod records;

pub use records::*;

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate id '{id}' in {table} table")]
    DuplicateId { table: &'static str, id: String },

    #[error("Contradiction pair {index} has an empty term")]
    EmptyContradictionTerm { index: usize },

    #[error("Failed to compile contradiction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// All reference tables.
///
/// Deserializing fills any table missing from the JSON with the built-in one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Catalog {
    pub lenses: Vec<Lens>,
    pub aspect_ratios: Vec<AspectRatio>,
    pub film_stocks: Vec<FilmStock>,
    pub earth_locations: Vec<Place>,
    pub cosmic_locations: Vec<Place>,
    pub eras: Vec<Era>,
    pub times_of_day: Vec<Descriptor>,
    pub weather: Vec<Descriptor>,
    pub seasons: Vec<Descriptor>,
    pub lighting_setups: Vec<Descriptor>,
    pub camera_presets: Vec<CameraPreset>,
    pub contradictions: Vec<ContradictionPair>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            lenses: builtin::lenses(),
            aspect_ratios: builtin::aspect_ratios(),
            film_stocks: builtin::film_stocks(),
            earth_locations: builtin::earth_locations(),
            cosmic_locations: builtin::cosmic_locations(),
            eras: builtin::eras(),
            times_of_day: builtin::times_of_day(),
            weather: builtin::weather(),
            seasons: builtin::seasons(),
            lighting_setups: builtin::lighting_setups(),
            camera_presets: builtin::camera_presets(),
            contradictions: builtin::contradictions(),
        }
    }
}

fn find<'a, T: Record>(table: &'a [T], id: &str) -> Option<&'a T> {
    table.iter().find(|record| record.id() == id)
}

fn check_unique<T: Record>(table: &'static str, records: &[T]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(CatalogError::DuplicateId {
                table,
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}

impl Catalog {
    /// Shared instance of the built-in tables
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(Catalog::default)
    }

    /// Load collaborator-supplied tables and validate them
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.validate()?;
        debug!(
            lenses = catalog.lenses.len(),
            film_stocks = catalog.film_stocks.len(),
            contradictions = catalog.contradictions.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Check the no-duplicate-id invariant of every table and that every
    /// contradiction term is non-empty
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_unique("lenses", &self.lenses)?;
        check_unique("aspect ratios", &self.aspect_ratios)?;
        check_unique("film stocks", &self.film_stocks)?;
        check_unique("earth locations", &self.earth_locations)?;
        check_unique("cosmic locations", &self.cosmic_locations)?;
        check_unique("eras", &self.eras)?;
        check_unique("times of day", &self.times_of_day)?;
        check_unique("weather", &self.weather)?;
        check_unique("seasons", &self.seasons)?;
        check_unique("lighting setups", &self.lighting_setups)?;
        check_unique("camera presets", &self.camera_presets)?;

        for (index, pair) in self.contradictions.iter().enumerate() {
            if pair.keep.trim().is_empty() || pair.drop.trim().is_empty() {
                return Err(CatalogError::EmptyContradictionTerm { index });
            }
        }
        Ok(())
    }

    pub fn lens(&self, id: &str) -> Option<&Lens> {
        find(&self.lenses, id)
    }

    pub fn aspect_ratio(&self, id: &str) -> Option<&AspectRatio> {
        find(&self.aspect_ratios, id)
    }

    pub fn film_stock(&self, id: &str) -> Option<&FilmStock> {
        find(&self.film_stocks, id)
    }

    pub fn earth_location(&self, id: &str) -> Option<&Place> {
        find(&self.earth_locations, id)
    }

    pub fn cosmic_location(&self, id: &str) -> Option<&Place> {
        find(&self.cosmic_locations, id)
    }

    pub fn era(&self, id: &str) -> Option<&Era> {
        find(&self.eras, id)
    }

    pub fn time_of_day(&self, id: &str) -> Option<&Descriptor> {
        find(&self.times_of_day, id)
    }

    pub fn weather(&self, id: &str) -> Option<&Descriptor> {
        find(&self.weather, id)
    }

    pub fn season(&self, id: &str) -> Option<&Descriptor> {
        find(&self.seasons, id)
    }

    pub fn lighting_setup(&self, id: &str) -> Option<&Descriptor> {
        find(&self.lighting_setups, id)
    }

    pub fn camera_preset(&self, id: &str) -> Option<&CameraPreset> {
        find(&self.camera_presets, id)
    }
}
