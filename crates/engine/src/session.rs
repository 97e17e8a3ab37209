//! In-memory shot session
//!
//! Owns the current snapshot, applies UI commands to it, and recomputes the
//! prompt on request. Nothing is cached: every `prompt()` call runs the full
//! assembly over the snapshot as it stands.

use cineprompt_config::{EXPORT_VERSION, NUDGE_STEP, NUDGE_STEP_COARSE, ROLL_NUDGE_STEP};
use cineprompt_ipc::{
    AngleAxis, CameraAngles, CameraCommand, CompositionCommand, CompositionConfig,
    DepthLayerUpdate, EngineToUi, ExportedConfiguration, IpcError, LayerKind, LightState,
    LightingCommand, LightingConfig, LocationCommand, LocationConfig, LocationMode,
    ParsedSettings, PracticalType, PromptOutput, SceneCommand, SceneSettings, ShotCommand,
    ShotConfig, UiToEngine,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::assembler::PromptEngine;
use crate::camera_angle::clamp_angle;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown camera preset '{0}'")]
    UnknownPreset(String),

    #[error(transparent)]
    Ipc(#[from] IpcError),

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported configuration version '{0}'")]
    UnsupportedVersion(String),
}

impl SessionError {
    /// Stable code reported to the UI in `EngineToUi::Error`
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownPreset(_) => "unknown_preset",
            Self::Ipc(_) => "invalid_message",
            Self::Json(_) => "invalid_json",
            Self::UnsupportedVersion(_) => "unsupported_version",
        }
    }
}

/// A shot snapshot plus the engine that turns it into a prompt
#[derive(Debug)]
pub struct ShotSession<'e> {
    engine: &'e PromptEngine,
    shot: ShotConfig,
}

impl Default for ShotSession<'static> {
    fn default() -> Self {
        Self::new(PromptEngine::builtin())
    }
}

impl<'e> ShotSession<'e> {
    /// Session starting from the default snapshot
    pub fn new(engine: &'e PromptEngine) -> Self {
        Self::with_shot(engine, ShotConfig::default())
    }

    pub fn with_shot(engine: &'e PromptEngine, shot: ShotConfig) -> Self {
        Self { engine, shot }
    }

    pub fn shot(&self) -> &ShotConfig {
        &self.shot
    }

    pub fn engine(&self) -> &PromptEngine {
        self.engine
    }

    /// Recompute the prompt from the current snapshot
    pub fn prompt(&self) -> PromptOutput {
        self.engine.compose(&self.shot)
    }

    /// Apply one control change
    pub fn apply(&mut self, command: ShotCommand) -> Result<(), SessionError> {
        match command {
            ShotCommand::Camera(cmd) => self.apply_camera(cmd)?,
            ShotCommand::Scene(cmd) => apply_scene(&mut self.shot.scene, cmd),
            ShotCommand::Lighting(cmd) => apply_lighting(&mut self.shot.lighting, cmd),
            ShotCommand::Composition(cmd) => apply_composition(&mut self.shot.composition, cmd),
            ShotCommand::Location(cmd) => apply_location(&mut self.shot.location, cmd),
        }
        Ok(())
    }

    fn apply_camera(&mut self, command: CameraCommand) -> Result<(), SessionError> {
        let camera = &mut self.shot.camera;
        match command {
            CameraCommand::SetAzimuth { value } => camera.azimuth = value,
            CameraCommand::SetElevation { value } => camera.elevation = value,
            CameraCommand::SetRoll { value } => camera.roll = value,
            CameraCommand::SetAngles {
                azimuth,
                elevation,
                roll,
            } => {
                camera.azimuth = azimuth.unwrap_or(camera.azimuth);
                camera.elevation = elevation.unwrap_or(camera.elevation);
                camera.roll = roll.unwrap_or(camera.roll);
            }
            CameraCommand::Nudge {
                axis,
                increase,
                coarse,
            } => {
                let step = match (axis, coarse) {
                    (AngleAxis::Roll, _) => ROLL_NUDGE_STEP,
                    (_, true) => NUDGE_STEP_COARSE,
                    (_, false) => NUDGE_STEP,
                };
                let delta = if increase { step } else { -step };
                let slot = match axis {
                    AngleAxis::Azimuth => &mut camera.azimuth,
                    AngleAxis::Elevation => &mut camera.elevation,
                    AngleAxis::Roll => &mut camera.roll,
                };
                *slot = clamp_angle(axis, *slot + delta);
            }
            CameraCommand::LoadPreset { id } => {
                let Some(preset) = self.engine.catalog().camera_preset(&id) else {
                    warn!("Rejected unknown camera preset '{}'", id);
                    return Err(SessionError::UnknownPreset(id));
                };
                *camera = preset.angles;
                debug!("Loaded camera preset '{}'", preset.name);
            }
            CameraCommand::Reset => *camera = CameraAngles::default(),
        }
        Ok(())
    }

    /// Merge settings recognized by an external text-understanding service.
    ///
    /// Only fields present in `parsed` change; each goes through the same
    /// command path as a UI control, so mode side effects apply.
    pub fn apply_parsed(&mut self, parsed: ParsedSettings) -> Result<(), SessionError> {
        let mut commands = Vec::new();

        let scene_fields: [(Option<String>, fn(String) -> SceneCommand); 5] = [
            (parsed.subject, SceneCommand::SetSubject),
            (parsed.setting, SceneCommand::SetSetting),
            (parsed.lens, SceneCommand::SetLens),
            (parsed.aspect_ratio, SceneCommand::SetAspectRatio),
            (parsed.film_stock, SceneCommand::SetFilmStock),
        ];
        for (value, command) in scene_fields {
            if let Some(value) = value {
                commands.push(ShotCommand::Scene(command(value)));
            }
        }

        if let Some(camera) = parsed.camera {
            commands.push(ShotCommand::Camera(CameraCommand::SetAngles {
                azimuth: camera.azimuth,
                elevation: camera.elevation,
                roll: camera.roll,
            }));
        }

        if let Some(location) = parsed.location {
            let text_fields: [(Option<String>, fn(String) -> LocationCommand); 7] = [
                (location.earth_location, LocationCommand::SetEarthLocation),
                (location.custom_location, LocationCommand::SetCustomLocation),
                (location.cosmic_location, LocationCommand::SetCosmicLocation),
                (location.era, LocationCommand::SetEra),
                (location.time_of_day, LocationCommand::SetTimeOfDay),
                (location.weather, LocationCommand::SetWeather),
                (location.season, LocationCommand::SetSeason),
            ];
            for (value, command) in text_fields {
                if let Some(value) = value {
                    commands.push(ShotCommand::Location(command(value)));
                }
            }
            if let Some(year) = location.year {
                commands.push(ShotCommand::Location(LocationCommand::SetYear(year)));
            }
            // An explicit mode overrides whatever the preset setters implied
            if let Some(mode) = location.mode {
                commands.push(ShotCommand::Location(LocationCommand::SetMode(mode)));
            }
        }

        if let Some(volumetric) = parsed.lighting.and_then(|lighting| lighting.volumetric) {
            commands.push(ShotCommand::Lighting(LightingCommand::SetVolumetric(volumetric)));
        }

        if let Some(composition) = parsed.composition {
            let layers = [
                (LayerKind::Foreground, composition.foreground),
                (LayerKind::Midground, composition.midground),
                (LayerKind::Background, composition.background),
            ];
            for (layer, description) in layers {
                if let Some(description) = description {
                    commands.push(ShotCommand::Composition(CompositionCommand::UpdateLayer {
                        layer,
                        update: DepthLayerUpdate {
                            description: Some(description),
                            fog_density: None,
                        },
                    }));
                }
            }
        }

        debug!("Applying {} parsed settings", commands.len());
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    /// Serialize camera and scene settings for sharing
    pub fn export_configuration(&self, timestamp: u64) -> Result<String, SessionError> {
        let exported =
            ExportedConfiguration::new(timestamp, self.shot.camera, self.shot.scene.clone());
        Ok(serde_json::to_string_pretty(&exported)?)
    }

    /// Replace camera and scene settings from an exported configuration.
    /// Lighting, composition, and location are left untouched.
    pub fn import_configuration(&mut self, json: &str) -> Result<(), SessionError> {
        let imported: ExportedConfiguration = serde_json::from_str(json)?;
        if imported.version != EXPORT_VERSION {
            return Err(SessionError::UnsupportedVersion(imported.version));
        }
        self.shot.camera = imported.camera;
        self.shot.scene = imported.scene;
        info!("Imported configuration from {}", imported.timestamp);
        Ok(())
    }

    /// Dispatch a UI message and produce the reply
    pub fn handle(&mut self, message: UiToEngine) -> EngineToUi {
        let result = match message {
            UiToEngine::Command(command) => self.apply(command).map(|()| self.prompt_updated()),
            UiToEngine::ApplyParsedSettings(parsed) => {
                self.apply_parsed(parsed).map(|()| self.prompt_updated())
            }
            UiToEngine::RequestPrompt => Ok(self.prompt_updated()),
            UiToEngine::ExportConfiguration { timestamp } => self
                .export_configuration(timestamp)
                .map(|json| EngineToUi::ConfigurationExported { json }),
            UiToEngine::ImportConfiguration { json } => self
                .import_configuration(&json)
                .map(|()| self.prompt_updated()),
        };

        result.unwrap_or_else(|err| {
            warn!("UI message failed: {}", err);
            EngineToUi::Error {
                code: err.code().to_string(),
                message: err.to_string(),
            }
        })
    }

    /// Decode a raw JSON message, dispatch it, and encode the reply
    pub fn handle_json(&mut self, text: &str) -> Result<String, SessionError> {
        let reply = match UiToEngine::from_json(text) {
            Ok(message) => self.handle(message),
            Err(err) => {
                let err = SessionError::from(err);
                warn!("Rejected UI message: {}", err);
                EngineToUi::Error {
                    code: err.code().to_string(),
                    message: err.to_string(),
                }
            }
        };
        Ok(reply.to_json()?)
    }

    fn prompt_updated(&self) -> EngineToUi {
        EngineToUi::PromptUpdated(self.prompt())
    }
}

fn apply_scene(scene: &mut SceneSettings, command: SceneCommand) {
    match command {
        SceneCommand::SetSubject(value) => scene.subject = value,
        SceneCommand::SetSetting(value) => scene.setting = value,
        SceneCommand::SetCharSheet(value) => scene.char_sheet = value,
        SceneCommand::SetLens(value) => scene.lens = value,
        SceneCommand::SetAspectRatio(value) => scene.aspect_ratio = value,
        SceneCommand::SetLightingPreset(value) => scene.lighting = value,
        SceneCommand::SetFilmStock(value) => scene.film_stock = value,
        SceneCommand::Reset => *scene = SceneSettings::default(),
    }
}

fn apply_lighting(lighting: &mut LightingConfig, command: LightingCommand) {
    match command {
        LightingCommand::UpdateLight { role, update } => {
            update.apply_to(lighting.light_mut(role));
        }
        LightingCommand::SetPracticalType(practical) => {
            lighting.practical_type = practical;
            lighting.practical_light = LightState {
                enabled: practical != PracticalType::None,
                color: practical.preview_color().to_string(),
                ..LightState::default_practical()
            };
        }
        LightingCommand::SetVolumetric(enabled) => lighting.volumetric = enabled,
        LightingCommand::SetFogDensity(density) => lighting.fog_density = density,
        LightingCommand::SetFogColor(color) => lighting.fog_color = color,
        LightingCommand::Reset => *lighting = LightingConfig::default(),
    }
}

fn apply_composition(composition: &mut CompositionConfig, command: CompositionCommand) {
    match command {
        CompositionCommand::UpdateLayer { layer, update } => {
            update.apply_to(composition.layer_mut(layer));
        }
        CompositionCommand::SetFocusLayer(layer) => composition.focus_layer = layer,
        CompositionCommand::SetDepthBlur(blur) => composition.depth_blur = blur,
        CompositionCommand::Reset => *composition = CompositionConfig::default(),
    }
}

fn apply_location(location: &mut LocationConfig, command: LocationCommand) {
    match command {
        LocationCommand::SetMode(mode) => location.mode = mode,
        LocationCommand::SetCoordinates(coordinates) => {
            location.coordinates = coordinates;
            location.mode = LocationMode::Earth;
        }
        LocationCommand::SetEarthLocation(id) => {
            location.earth_location = id;
            location.mode = LocationMode::Earth;
            location.coordinates = None;
        }
        LocationCommand::SetCustomLocation(text) => location.custom_location = text,
        LocationCommand::SetCosmicLocation(id) => {
            location.cosmic_location = id;
            location.mode = LocationMode::Cosmic;
        }
        LocationCommand::SetEra(id) => location.era = id,
        LocationCommand::SetYear(year) => location.year = year,
        LocationCommand::SetTimeOfDay(id) => location.time_of_day = id,
        LocationCommand::SetWeather(id) => location.weather = id,
        LocationCommand::SetSeason(id) => location.season = id,
        LocationCommand::SetSmartFilter(enabled) => location.smart_filter_enabled = enabled,
        LocationCommand::Reset => *location = LocationConfig::default(),
    }
}
