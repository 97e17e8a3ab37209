//! Lighting rig to qualitative lighting phrases

use cineprompt_ipc::{LightingConfig, PracticalType};

use crate::bands::{Rung, climb};
use crate::constants::SEGMENT_SEPARATOR;

/// Key-to-fill ratio ladder.
pub const CONTRAST_RUNGS: [Rung<&str>; 2] = [
    Rung {
        above: 3.0,
        value: "high contrast lighting",
    },
    Rung {
        above: 2.0,
        value: "cinematic lighting ratio",
    },
];
pub const LOW_CONTRAST: &str = "low contrast fill";

/// Smallest fill intensity used as the ratio denominator.
pub const MIN_FILL_INTENSITY: f64 = 0.1;

/// Volumetric fog ladder (scene fog density).
pub const FOG_RUNGS: [Rung<&str>; 2] = [
    Rung {
        above: 0.1,
        value: "heavy volumetric fog",
    },
    Rung {
        above: 0.05,
        value: "volumetric haze",
    },
];
pub const THIN_FOG: &str = "atmospheric depth";

/// Key light character from its intensity
pub fn key_light_phrase(intensity: f64) -> &'static str {
    if intensity > 1.0 {
        "dramatic key light"
    } else if intensity < 0.5 {
        "soft key light"
    } else {
        "balanced key light"
    }
}

/// Phrase for a practical light type, `None` when there is no practical
pub fn practical_phrase(practical: PracticalType) -> Option<&'static str> {
    match practical {
        PracticalType::None => None,
        PracticalType::Neon => Some("neon light ambiance"),
        PracticalType::Candle => Some("candlelight glow"),
        PracticalType::Window => Some("natural window light"),
        PracticalType::Screen => Some("screen glow"),
        PracticalType::Other => Some("practical lighting"),
    }
}

/// Describe the rig as comma-joined phrases; empty when nothing contributes.
///
/// The contrast phrase depends only on the fill light being enabled. With the
/// key light off the ratio still uses the key's stored intensity.
pub fn describe_lighting(lighting: &LightingConfig) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if lighting.key_light.enabled {
        parts.push(key_light_phrase(lighting.key_light.intensity));
    }

    if lighting.fill_light.enabled {
        let ratio =
            lighting.key_light.intensity / lighting.fill_light.intensity.max(MIN_FILL_INTENSITY);
        parts.push(climb(ratio, &CONTRAST_RUNGS, LOW_CONTRAST));
    }

    if lighting.back_light.enabled {
        parts.push("rim lighting");
    }

    if lighting.practical_light.enabled {
        parts.extend(practical_phrase(lighting.practical_type));
    }

    if lighting.volumetric {
        parts.push(climb(lighting.fog_density, &FOG_RUNGS, THIN_FOG));
    }

    parts.join(SEGMENT_SEPARATOR)
}
