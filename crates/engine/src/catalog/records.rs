//! Reference table record types.

use cineprompt_ipc::CameraAngles;
use serde::{Deserialize, Serialize};

/// Anything stored in a catalog table, keyed by a unique id.
pub trait Record {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_record!(Lens, AspectRatio, FilmStock, Place, Era, Descriptor, CameraPreset);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lens {
    pub id: String,
    /// Appears in the prompt as "shot on <name> lens"
    pub name: String,
    pub desc: String,
    pub focal_length: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilmCategory {
    Digital,
    Film,
    Specialty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmStock {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub category: Option<FilmCategory>,
}

/// Earth or cosmic location.
///
/// Earth prompts are bare place names ("in " is prepended); cosmic prompts
/// are already complete phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Era {
    pub id: String,
    pub name: String,
    /// Canonical year, negative = BC
    pub year: i32,
    pub prompt: String,
}

/// Time of day, weather, season, or lighting setup: an id with prompt text.
/// An empty prompt contributes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub id: String,
    pub name: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub angles: CameraAngles,
}

/// Two terms that should not appear together. `keep` wins, `drop` is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionPair {
    pub keep: String,
    pub drop: String,
}
