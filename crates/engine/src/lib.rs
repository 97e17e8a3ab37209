//! CinePrompt engine - shot configuration to image-generator prompt
//!
//! This crate turns a [`cineprompt_ipc::ShotConfig`] snapshot into prompt text:
//! - [`camera_angle`] - azimuth/elevation/roll to cinematography phrasing
//! - [`lighting`] - lighting rig to qualitative lighting phrases
//! - [`composition`] - depth layers and blur to composition phrases
//! - [`location`] - place, era, time, weather, and season phrasing
//! - [`smart_filter`] - removal of contradicting terms from the final text
//! - [`assembler`] - ordered, tagged segments and the flat prompt
//! - [`catalog`] - reference tables looked up by id
//! - [`session`] - in-memory owner of a snapshot that applies UI commands
//!
//! Every composition function is pure: same snapshot, same text.

pub mod assembler;
pub mod bands;
pub mod camera_angle;
pub mod catalog;
pub mod composition;
pub mod constants;
pub mod lighting;
pub mod location;
pub mod session;
pub mod smart_filter;

pub use assembler::*;
pub use camera_angle::*;
pub use catalog::*;
pub use composition::*;
pub use constants::*;
pub use lighting::*;
pub use location::*;
pub use session::*;
pub use smart_filter::*;
