//! End-to-end prompt composition over the built-in catalog.

use cineprompt_engine::{
    PromptEngine, ShotSession, apply_smart_filter, build_prompt, build_prompt_segments,
    describe_camera_angle,
};
use cineprompt_ipc::{
    CameraAngles, DepthLayer, LightingConfig, LocationCommand, LocationMode, SegmentType,
    ShotCommand, ShotConfig,
};

/// Snapshot with lighting, composition, location, and setting all silent.
fn robot_shot() -> ShotConfig {
    let mut shot = ShotConfig::default();
    shot.camera = CameraAngles::new(0.0, 0.0, 0.0);
    shot.scene.subject = "a robot".into();
    shot.scene.setting = String::new();
    shot.scene.lens = "50mm".into();
    shot.scene.film_stock = "digital".into();
    shot.scene.aspect_ratio = "16:9".into();
    shot.lighting = LightingConfig::unlit();
    shot.composition.depth_blur = 0.0;
    shot
}

#[test]
fn test_robot_example() {
    assert_eq!(
        build_prompt(&robot_shot()),
        "direct frontal shot at 0°, eye level shot at 0° of a robot, \
         shot on 50mm Prime lens, \
         8k resolution, razor sharp focus, digital cinema camera, \
         detailed textures, professional composition, --ar 16:9"
    );
}

#[test]
fn test_negative_azimuth_wraps() {
    for (negative, positive) in [(-10.0, 350.0), (-90.0, 270.0), (-725.0, 355.0)] {
        assert_eq!(
            describe_camera_angle(negative, 0.0, 0.0),
            describe_camera_angle(positive, 0.0, 0.0)
        );
    }
}

#[test]
fn test_low_angle_and_extreme_roll() {
    let description = describe_camera_angle(0.0, -50.0, 30.0);
    assert_eq!(
        description,
        "heroic power shot, direct frontal shot at 0°, steep low angle at 50° looking up, \
         extreme dutch angle tilted 30° clockwise"
    );
    assert!(describe_camera_angle(0.0, -40.0, 0.0).contains("dramatic low angle hero shot at 40°"));
}

#[test]
fn test_every_integer_degree_has_one_phrase() {
    for degree in 0..360 {
        let description = describe_camera_angle(f64::from(degree), 0.0, 0.0);
        // azimuth phrase plus elevation phrase, optionally a shot type
        let phrases = description.split(", ").count();
        assert!((2..=3).contains(&phrases), "{degree}: {description}");
    }
    for degree in -120..=120 {
        let description = describe_camera_angle(90.0, f64::from(degree), 0.0);
        assert!(!description.is_empty(), "{degree}");
    }
}

#[test]
fn test_era_year_example() {
    let mut shot = robot_shot();
    shot.location.era = "ancient_egypt".into();
    shot.location.year = -2500;
    let prompt = build_prompt(&shot);
    assert!(prompt.contains("ancient Egyptian era, pharaohs and pyramids"));
    assert!(!prompt.contains("circa"));

    shot.location.year = -3000;
    let prompt = build_prompt(&shot);
    assert!(prompt.contains("circa 3000 BC"));
    assert!(!prompt.contains("pharaohs"));
}

#[test]
fn test_location_excludes_setting_fallback() {
    let mut shot = robot_shot();
    shot.scene.setting = "neon-lit rain slicked streets".into();
    assert!(build_prompt(&shot).contains("set in neon-lit rain slicked streets"));

    shot.location.mode = LocationMode::Cosmic;
    shot.location.cosmic_location = "mars".into();
    let prompt = build_prompt(&shot);
    assert!(prompt.contains("on the surface of Mars"));
    assert!(!prompt.contains("set in "));
}

#[test]
fn test_unresolved_lens_and_film_leave_no_empty_segment() {
    let mut shot = robot_shot();
    shot.scene.lens = "unknown".into();
    shot.scene.film_stock = "unknown".into();

    let segments = build_prompt_segments(&shot);
    assert!(segments.iter().all(|s| !s.content.is_empty()));
    assert!(segments.iter().all(|s| s.segment_type != SegmentType::Camera));
    assert_eq!(
        segments
            .iter()
            .filter(|s| s.segment_type == SegmentType::Quality)
            .count(),
        1
    );
    assert!(!build_prompt(&shot).contains(", ,"));
}

#[test]
fn test_full_shot_segment_order() {
    let mut shot = robot_shot();
    shot.scene.char_sheet = Some("data:image/png;base64,AAAA".into());
    shot.lighting = LightingConfig::default();
    shot.composition.foreground = DepthLayer::new("rain drops", 60.0);
    shot.composition.depth_blur = 70.0;
    shot.location.earth_location = "tokyo".into();
    shot.location.time_of_day = "night".into();

    let types: Vec<SegmentType> = build_prompt_segments(&shot)
        .iter()
        .map(|s| s.segment_type)
        .collect();
    assert_eq!(
        types,
        vec![
            SegmentType::Reference,
            SegmentType::Subject,
            SegmentType::Camera,
            SegmentType::Composition,
            SegmentType::Location,
            SegmentType::Lighting,
            SegmentType::Quality,
            SegmentType::Quality,
            SegmentType::Parameters,
        ]
    );

    let prompt = build_prompt(&shot);
    assert!(prompt.contains(
        "rain drops in hazy foreground, shallow depth of field, in Tokyo, Japan, at night"
    ));
    assert!(prompt.contains("balanced key light, cinematic lighting ratio, rim lighting"));
}

#[test]
fn test_filter_only_touches_flat_prompt() {
    let mut shot = robot_shot();
    shot.scene.subject = "a knight in winter armor at summer solstice".into();
    shot.location.season = "winter".into();

    let output = PromptEngine::builtin().compose(&shot);
    assert!(!output.prompt.contains("summer"));
    assert!(output.segments[0].content.contains("summer"));
    assert_eq!(apply_smart_filter(&output.prompt, true), output.prompt);
}

#[test]
fn test_session_drives_prompt() {
    let mut session = ShotSession::default();
    session
        .apply(ShotCommand::Location(LocationCommand::SetEarthLocation(
            "london".into(),
        )))
        .unwrap();
    session
        .apply(ShotCommand::Location(LocationCommand::SetWeather("fog".into())))
        .unwrap();
    let output = session.prompt();
    assert!(output.prompt.contains("in London, England, thick fog, low visibility"));
    assert!(!output.prompt.contains("set in"));
}
