//! Error types for the UI message channel.

/// Failures decoding UI messages or encoding engine replies.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Failed to decode UI message: {0}")]
    Decode(serde_json::Error),

    #[error("Failed to encode engine message: {0}")]
    Encode(serde_json::Error),

    #[error("Invalid message format: {0}")]
    InvalidFormat(String),
}
