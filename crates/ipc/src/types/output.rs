//! Prompt output types.

use serde::{Deserialize, Serialize};

/// Category of a prompt fragment, used for highlighting in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    Reference,
    Subject,
    Camera,
    Composition,
    Location,
    Setting,
    Lighting,
    Quality,
    Parameters,
}

impl SegmentType {
    /// Wire name of the segment type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Subject => "subject",
            Self::Camera => "camera",
            Self::Composition => "composition",
            Self::Location => "location",
            Self::Setting => "setting",
            Self::Lighting => "lighting",
            Self::Quality => "quality",
            Self::Parameters => "parameters",
        }
    }
}

/// A tagged fragment of the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSegment {
    #[serde(rename = "type")]
    pub segment_type: SegmentType,
    pub content: String,
}

impl PromptSegment {
    pub fn new(segment_type: SegmentType, content: impl Into<String>) -> Self {
        Self {
            segment_type,
            content: content.into(),
        }
    }
}

/// Result of one composition pass.
///
/// `prompt` is contradiction-filtered; `segments` carry the pre-filter text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptOutput {
    pub prompt: String,
    pub segments: Vec<PromptSegment>,
}
