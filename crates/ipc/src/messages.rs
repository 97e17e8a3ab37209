//! Main IPC message enums for communication between the UI and the engine.

use serde::{Deserialize, Serialize};

use crate::commands::ShotCommand;
use crate::error::IpcError;
use crate::types::{ParsedSettings, PromptOutput};

/// Messages from the UI to the prompt engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToEngine {
    /// A control changed
    Command(ShotCommand),

    /// Settings recognized by the external text-understanding service
    ApplyParsedSettings(ParsedSettings),

    /// Recompute the prompt without changing anything
    RequestPrompt,

    /// Serialize camera and scene for sharing
    ExportConfiguration { timestamp: u64 },

    /// Load a previously exported configuration
    ImportConfiguration { json: String },
}

/// Messages from the prompt engine to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineToUi {
    /// Fresh prompt after any change
    PromptUpdated(PromptOutput),

    /// Result of an export request
    ConfigurationExported { json: String },

    /// Error notification
    Error { code: String, message: String },
}

impl UiToEngine {
    /// Decode a message received from the UI
    pub fn from_json(text: &str) -> Result<Self, IpcError> {
        if text.trim().is_empty() {
            return Err(IpcError::InvalidFormat("empty message".into()));
        }
        serde_json::from_str(text).map_err(IpcError::Decode)
    }
}

impl EngineToUi {
    /// Encode a message for the UI
    pub fn to_json(&self) -> Result<String, IpcError> {
        serde_json::to_string(self).map_err(IpcError::Encode)
    }
}
