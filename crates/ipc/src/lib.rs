//! IPC message protocol for CinePrompt
//!
//! Defines the shot configuration snapshot the UI layer owns, the tagged
//! prompt output the engine returns, and the messages exchanged between them.

mod commands;
mod error;
mod messages;
mod types;

pub use commands::*;
pub use error::IpcError;
pub use messages::*;
pub use types::*;
