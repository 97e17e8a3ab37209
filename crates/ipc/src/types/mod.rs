//! Type definitions for IPC messages.

mod camera;
mod composition;
mod export;
mod lighting;
mod location;
mod output;
mod parsed;
mod scene;
mod shot;

pub use camera::*;
pub use composition::*;
pub use export::*;
pub use lighting::*;
pub use location::*;
pub use output::*;
pub use parsed::*;
pub use scene::*;
pub use shot::*;
