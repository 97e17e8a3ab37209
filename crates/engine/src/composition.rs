//! Depth layers and blur to composition phrases

use cineprompt_ipc::CompositionConfig;

use crate::bands::{Rung, climb};
use crate::constants::SEGMENT_SEPARATOR;

pub const FOREGROUND_RUNGS: [Rung<&str>; 2] = [
    Rung {
        above: 50.0,
        value: "hazy",
    },
    Rung {
        above: 20.0,
        value: "soft",
    },
];

pub const BACKGROUND_RUNGS: [Rung<&str>; 2] = [
    Rung {
        above: 50.0,
        value: "distant atmospheric",
    },
    Rung {
        above: 20.0,
        value: "hazy",
    },
];

pub const DEPTH_OF_FIELD_RUNGS: [Rung<Option<&str>>; 2] = [
    Rung {
        above: 50.0,
        value: Some("shallow depth of field"),
    },
    Rung {
        above: 20.0,
        value: Some("moderate depth of field"),
    },
];

/// Describe the depth layers; empty when no layer has text and blur is 20 or less.
pub fn describe_composition(composition: &CompositionConfig) -> String {
    let mut parts: Vec<String> = Vec::new();

    let foreground = composition.foreground.description.trim();
    if !foreground.is_empty() {
        let haze = climb(composition.foreground.fog_density, &FOREGROUND_RUNGS, "sharp");
        parts.push(format!("{foreground} in {haze} foreground"));
    }

    let midground = composition.midground.description.trim();
    if !midground.is_empty() {
        parts.push(format!("{midground} in midground"));
    }

    let background = composition.background.description.trim();
    if !background.is_empty() {
        let haze = climb(composition.background.fog_density, &BACKGROUND_RUNGS, "clear");
        parts.push(format!("{background} in {haze} background"));
    }

    if let Some(depth) = climb(composition.depth_blur, &DEPTH_OF_FIELD_RUNGS, None) {
        parts.push(depth.to_string());
    }

    parts.join(SEGMENT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineprompt_ipc::DepthLayer;

    fn empty() -> CompositionConfig {
        CompositionConfig {
            depth_blur: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_has_moderate_depth_only() {
        assert_eq!(describe_composition(&CompositionConfig::default()), "moderate depth of field");
    }

    #[test]
    fn test_empty_composition() {
        assert_eq!(describe_composition(&empty()), "");
    }

    #[test]
    fn test_all_layers() {
        let composition = CompositionConfig {
            foreground: DepthLayer::new("  falling leaves ", 60.0),
            midground: DepthLayer::new("a lone samurai", 90.0),
            background: DepthLayer::new("mountains", 10.0),
            depth_blur: 75.0,
            ..Default::default()
        };
        assert_eq!(
            describe_composition(&composition),
            "falling leaves in hazy foreground, a lone samurai in midground, \
             mountains in clear background, shallow depth of field"
        );
    }

    #[test]
    fn test_layer_fog_qualifiers() {
        let mut composition = empty();
        composition.foreground = DepthLayer::new("rain", 25.0);
        composition.background = DepthLayer::new("city", 30.0);
        assert_eq!(
            describe_composition(&composition),
            "rain in soft foreground, city in hazy background"
        );

        composition.foreground.fog_density = 20.0;
        composition.background.fog_density = 51.0;
        assert_eq!(
            describe_composition(&composition),
            "rain in sharp foreground, city in distant atmospheric background"
        );
    }

    #[test]
    fn test_whitespace_layers_are_skipped() {
        let mut composition = empty();
        composition.midground = DepthLayer::new("   ", 0.0);
        composition.depth_blur = 20.0;
        assert_eq!(describe_composition(&composition), "");
    }
}
