//! Prompt assembly
//!
//! Runs every describer over a snapshot and lays the phrases out in a fixed
//! segment order. The flat prompt is contradiction-filtered; the tagged
//! segments are returned as assembled.

use std::sync::OnceLock;

use cineprompt_ipc::{PromptOutput, PromptSegment, SegmentType, ShotConfig};
use tracing::debug;

use crate::camera_angle::describe_angles;
use crate::catalog::{Catalog, CatalogError};
use crate::composition::describe_composition;
use crate::constants::{QUALITY_BOOSTER, REFERENCE_TOKEN, SEGMENT_SEPARATOR};
use crate::lighting::describe_lighting;
use crate::location::describe_location_time;
use crate::smart_filter::SmartFilter;

/// Catalog plus the contradiction filter compiled from its pairs
#[derive(Debug)]
pub struct PromptEngine {
    catalog: Catalog,
    filter: SmartFilter,
}

impl PromptEngine {
    /// Shared engine over the built-in catalog
    pub fn builtin() -> &'static PromptEngine {
        static BUILTIN: OnceLock<PromptEngine> = OnceLock::new();
        BUILTIN.get_or_init(|| PromptEngine {
            catalog: Catalog::builtin().clone(),
            filter: SmartFilter::builtin().clone(),
        })
    }

    /// Engine over collaborator-supplied tables
    pub fn with_catalog(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        let filter = SmartFilter::new(&catalog.contradictions)?;
        Ok(Self { catalog, filter })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &SmartFilter {
        &self.filter
    }

    /// Ordered, tagged segments for a snapshot. Never contradiction-filtered.
    pub fn build_segments(&self, shot: &ShotConfig) -> Vec<PromptSegment> {
        let scene = &shot.scene;
        let mut segments = Vec::with_capacity(9);

        if scene.has_character_reference() {
            segments.push(PromptSegment::new(SegmentType::Reference, REFERENCE_TOKEN));
        }

        segments.push(PromptSegment::new(
            SegmentType::Subject,
            format!("{} of {}", describe_angles(&shot.camera), scene.subject),
        ));

        if let Some(lens) = self.catalog.lens(&scene.lens) {
            segments.push(PromptSegment::new(
                SegmentType::Camera,
                format!("shot on {} lens", lens.name),
            ));
        }

        let composition = describe_composition(&shot.composition);
        if !composition.is_empty() {
            segments.push(PromptSegment::new(SegmentType::Composition, composition));
        }

        // The free-text setting only stands in when no location phrase exists
        let location = describe_location_time(&shot.location, &self.catalog);
        if !location.is_empty() {
            segments.push(PromptSegment::new(SegmentType::Location, location));
        } else if !scene.setting.trim().is_empty() {
            segments.push(PromptSegment::new(
                SegmentType::Setting,
                format!("set in {}", scene.setting),
            ));
        }

        let lighting = describe_lighting(&shot.lighting);
        if !lighting.is_empty() {
            segments.push(PromptSegment::new(SegmentType::Lighting, lighting));
        }

        if let Some(film) = self.catalog.film_stock(&scene.film_stock) {
            segments.push(PromptSegment::new(SegmentType::Quality, film.prompt.clone()));
        }

        segments.push(PromptSegment::new(SegmentType::Quality, QUALITY_BOOSTER));
        segments.push(PromptSegment::new(
            SegmentType::Parameters,
            format!("--ar {}", scene.aspect_ratio),
        ));

        segments
    }

    /// Flat prompt: joined segments passed through the smart filter
    pub fn build_prompt(&self, shot: &ShotConfig) -> String {
        let segments = self.build_segments(shot);
        self.flatten(&segments, shot.location.smart_filter_enabled)
    }

    /// Both outputs from one assembly pass
    pub fn compose(&self, shot: &ShotConfig) -> PromptOutput {
        let segments = self.build_segments(shot);
        let prompt = self.flatten(&segments, shot.location.smart_filter_enabled);
        debug!(
            segments = segments.len(),
            chars = prompt.len(),
            "Composed prompt"
        );
        PromptOutput { prompt, segments }
    }

    fn flatten(&self, segments: &[PromptSegment], smart_filter: bool) -> String {
        let joined = segments
            .iter()
            .map(|segment| segment.content.as_str())
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR);
        self.filter.apply(&joined, smart_filter)
    }
}

/// Flat prompt using the built-in catalog
pub fn build_prompt(shot: &ShotConfig) -> String {
    PromptEngine::builtin().build_prompt(shot)
}

/// Tagged segments using the built-in catalog
pub fn build_prompt_segments(shot: &ShotConfig) -> Vec<PromptSegment> {
    PromptEngine::builtin().build_segments(shot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineprompt_ipc::{CameraAngles, LightingConfig};

    fn bare_shot() -> ShotConfig {
        let mut shot = ShotConfig::default();
        shot.camera = CameraAngles::new(0.0, 0.0, 0.0);
        shot.scene.subject = "a robot".into();
        shot.scene.setting = String::new();
        shot.lighting = LightingConfig::unlit();
        shot.composition.depth_blur = 0.0;
        shot.composition.foreground.description.clear();
        shot.composition.midground.description.clear();
        shot.composition.background.description.clear();
        shot
    }

    fn types(segments: &[PromptSegment]) -> Vec<SegmentType> {
        segments.iter().map(|s| s.segment_type).collect()
    }

    #[test]
    fn test_minimal_segment_order() {
        let segments = build_prompt_segments(&bare_shot());
        assert_eq!(
            types(&segments),
            vec![
                SegmentType::Subject,
                SegmentType::Camera,
                SegmentType::Quality,
                SegmentType::Quality,
                SegmentType::Parameters,
            ]
        );
        assert_eq!(
            segments[0].content,
            "direct frontal shot at 0°, eye level shot at 0° of a robot"
        );
        assert_eq!(segments[1].content, "shot on 50mm Prime lens");
        assert_eq!(segments[4].content, "--ar 16:9");
    }

    #[test]
    fn test_reference_token_leads() {
        let mut shot = bare_shot();
        shot.scene.char_sheet = Some("data:image/png;base64,AAAA".into());
        let segments = build_prompt_segments(&shot);
        assert_eq!(segments[0].segment_type, SegmentType::Reference);
        assert!(build_prompt(&shot).starts_with("<character_reference_image>, direct frontal"));
    }

    #[test]
    fn test_unknown_lens_and_film_are_omitted() {
        let mut shot = bare_shot();
        shot.scene.lens = "9000mm".into();
        shot.scene.film_stock = "wet-plate".into();
        let prompt = build_prompt(&shot);
        assert!(!prompt.contains("shot on"));
        assert_eq!(
            prompt,
            "direct frontal shot at 0°, eye level shot at 0° of a robot, \
             detailed textures, professional composition, --ar 16:9"
        );
    }

    #[test]
    fn test_setting_fallback() {
        let mut shot = bare_shot();
        shot.scene.setting = "a rainy alley".into();
        let segments = build_prompt_segments(&shot);
        let setting = segments
            .iter()
            .find(|s| s.segment_type == SegmentType::Setting)
            .unwrap();
        assert_eq!(setting.content, "set in a rainy alley");

        shot.scene.setting = "   ".into();
        let segments = build_prompt_segments(&shot);
        assert!(segments.iter().all(|s| s.segment_type != SegmentType::Setting));
    }

    #[test]
    fn test_location_suppresses_setting() {
        let mut shot = bare_shot();
        shot.scene.setting = "a rainy alley".into();
        shot.location.earth_location = "tokyo".into();
        let prompt = build_prompt(&shot);
        assert!(prompt.contains("in Tokyo, Japan"));
        assert!(!prompt.contains("set in "));
    }

    #[test]
    fn test_aspect_ratio_passed_verbatim() {
        let mut shot = bare_shot();
        shot.scene.aspect_ratio = "7:3 please".into();
        assert!(build_prompt(&shot).ends_with("--ar 7:3 please"));
    }

    #[test]
    fn test_segments_are_not_filtered() {
        let mut shot = bare_shot();
        shot.scene.subject = "a lone figure at noon".into();
        shot.location.time_of_day = "night".into();

        let output = PromptEngine::builtin().compose(&shot);
        assert!(!output.prompt.contains("noon"));
        assert!(output.segments[0].content.contains("noon"));

        shot.location.smart_filter_enabled = false;
        assert!(build_prompt(&shot).contains("at noon"));
    }

    #[test]
    fn test_compose_matches_separate_calls() {
        let shot = ShotConfig::default();
        let output = PromptEngine::builtin().compose(&shot);
        assert_eq!(output.prompt, build_prompt(&shot));
        assert_eq!(output.segments, build_prompt_segments(&shot));
    }

    #[test]
    fn test_with_catalog_uses_its_tables() {
        let catalog = Catalog::from_json(
            r#"{
                "lenses": [{"id": "fisheye", "name": "8mm Fisheye", "desc": "Bulge"}],
                "contradictions": [{"keep": "robot", "drop": "lens"}]
            }"#,
        )
        .unwrap();
        let engine = PromptEngine::with_catalog(catalog).unwrap();
        assert_eq!(engine.filter().len(), 1);
        assert_eq!(engine.catalog().lenses.len(), 1);

        let mut shot = bare_shot();
        shot.scene.lens = "fisheye".into();
        let segments = engine.build_segments(&shot);
        assert_eq!(segments[1].content, "shot on 8mm Fisheye lens");
        assert!(engine.build_prompt(&shot).contains("shot on 8mm Fisheye ,"));
    }
}
