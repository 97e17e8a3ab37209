//! The complete shot snapshot handed to the engine.

use serde::{Deserialize, Serialize};

use super::{CameraAngles, CompositionConfig, LightingConfig, LocationConfig, SceneSettings};

/// Everything the prompt is derived from, captured at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    pub camera: CameraAngles,
    pub scene: SceneSettings,
    pub lighting: LightingConfig,
    pub composition: CompositionConfig,
    pub location: LocationConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let shot: ShotConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(shot, ShotConfig::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let shot: ShotConfig = serde_json::from_str(
            r#"{
                "scene": {"subject": "a robot", "filmStock": "polaroid", "aspectRatio": "1:1"},
                "location": {"mode": "cosmic", "cosmicLocation": "mars", "smartFilterEnabled": false}
            }"#,
        )
        .unwrap();
        assert_eq!(shot.scene.subject, "a robot");
        assert_eq!(shot.scene.film_stock, "polaroid");
        assert_eq!(shot.scene.aspect_ratio, "1:1");
        assert_eq!(shot.location.cosmic_location, "mars");
        assert!(!shot.location.smart_filter_enabled);
        // Unset scene fields keep their defaults
        assert_eq!(shot.scene.lens, "50mm");
    }

    #[test]
    fn test_character_reference_presence() {
        let mut shot = ShotConfig::default();
        assert!(!shot.scene.has_character_reference());
        shot.scene.char_sheet = Some(String::new());
        assert!(!shot.scene.has_character_reference());
        shot.scene.char_sheet = Some("data:image/png;base64,AAAA".into());
        assert!(shot.scene.has_character_reference());
    }
}
