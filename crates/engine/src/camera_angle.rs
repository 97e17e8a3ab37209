//! Camera angle description using cinematography terminology
//!
//! Azimuth, elevation, and roll are each classified through an ordered band
//! table. Every band carries a phrase template; `{deg}` is replaced with the
//! rounded degree value and `{dir}` with the tilt direction.

use cineprompt_config::{ELEVATION_RANGE, ROLL_RANGE, clamp_to};
use cineprompt_ipc::{AngleAxis, CameraAngles};

use crate::bands::round_degrees;
use crate::constants::{DEGREE_SLOT, DIRECTION_SLOT, SEGMENT_SEPARATOR};

/// Azimuth band, lower bound is the previous band's `through` (exclusive).
#[derive(Debug, Clone, Copy)]
pub struct AzimuthBand {
    /// Inclusive upper bound in normalized degrees
    pub through: f64,
    pub template: &'static str,
}

/// Frontal band wraps around 0: [350, 360) and [0, 10].
pub const FRONTAL_WRAP_START: f64 = 350.0;
pub const FRONTAL_EDGE: f64 = 10.0;
pub const FRONTAL_PHRASE: &str = "direct frontal shot at 0°";

/// Bands covering (10, 350). The last band's upper bound is exclusive
/// because 350 already belongs to the frontal band.
pub const AZIMUTH_BANDS: [AzimuthBand; 13] = [
    AzimuthBand {
        through: 30.0,
        template: "slight 3/4 view at {deg}° offset",
    },
    AzimuthBand {
        through: 45.0,
        template: "classic 3/4 angle at {deg}°",
    },
    AzimuthBand {
        through: 60.0,
        template: "strong 3/4 profile at {deg}°",
    },
    AzimuthBand {
        through: 80.0,
        template: "near-profile view at {deg}°",
    },
    AzimuthBand {
        through: 100.0,
        template: "direct side profile at {deg}°",
    },
    AzimuthBand {
        through: 135.0,
        template: "rear 3/4 view at {deg}°",
    },
    AzimuthBand {
        through: 170.0,
        template: "over-the-shoulder angle at {deg}°",
    },
    AzimuthBand {
        through: 190.0,
        template: "direct back view at 180°",
    },
    AzimuthBand {
        through: 225.0,
        template: "reverse over-the-shoulder at {deg}°",
    },
    AzimuthBand {
        through: 260.0,
        template: "opposing side profile at {deg}°",
    },
    AzimuthBand {
        through: 280.0,
        template: "near-profile from left at {deg}°",
    },
    AzimuthBand {
        through: 315.0,
        template: "3/4 view from left at {deg}°",
    },
    AzimuthBand {
        through: FRONTAL_WRAP_START,
        template: "slight 3/4 from left at {deg}°",
    },
];

/// Elevation band, checked top-down.
#[derive(Debug, Clone, Copy)]
pub struct ElevationBand {
    /// Inclusive lower bound in degrees
    pub from: f64,
    pub template: &'static str,
    /// Print the absolute value instead of the signed one
    pub magnitude: bool,
}

pub const ELEVATION_BANDS: [ElevationBand; 11] = [
    ElevationBand {
        from: 80.0,
        template: "extreme overhead bird's eye at {deg}° downward",
        magnitude: false,
    },
    ElevationBand {
        from: 60.0,
        template: "steep high angle at {deg}° downward, God's eye view",
        magnitude: false,
    },
    ElevationBand {
        from: 45.0,
        template: "dramatic high angle at {deg}° looking down",
        magnitude: false,
    },
    ElevationBand {
        from: 30.0,
        template: "moderate high angle at {deg}° above eye level",
        magnitude: false,
    },
    ElevationBand {
        from: 15.0,
        template: "slight high angle at {deg}° elevation",
        magnitude: false,
    },
    ElevationBand {
        from: -5.0,
        template: "eye level shot at {deg}°",
        magnitude: false,
    },
    ElevationBand {
        from: -15.0,
        template: "slight low angle at {deg}° below eye level",
        magnitude: true,
    },
    ElevationBand {
        from: -30.0,
        template: "moderate low angle at {deg}° upward",
        magnitude: true,
    },
    ElevationBand {
        from: -45.0,
        template: "dramatic low angle hero shot at {deg}°",
        magnitude: true,
    },
    ElevationBand {
        from: -60.0,
        template: "steep low angle at {deg}° looking up",
        magnitude: true,
    },
    ElevationBand {
        from: f64::NEG_INFINITY,
        template: "extreme worm's eye view at {deg}° from ground",
        magnitude: true,
    },
];

/// Roll band, matched on the absolute tilt.
#[derive(Debug, Clone, Copy)]
pub struct RollBand {
    /// Absolute roll must be strictly greater than this
    pub above: f64,
    pub template: &'static str,
    /// Direction words for (positive, negative) roll
    pub directions: (&'static str, &'static str),
}

/// Below the last threshold the roll contributes no phrase.
pub const ROLL_BANDS: [RollBand; 3] = [
    RollBand {
        above: 25.0,
        template: "extreme dutch angle tilted {deg}° {dir}",
        directions: ("clockwise", "counter-clockwise"),
    },
    RollBand {
        above: 10.0,
        template: "dutch angle {deg}° {dir} tilt",
        directions: ("right", "left"),
    },
    RollBand {
        above: 3.0,
        template: "subtle {deg}° {dir} tilt",
        directions: ("right", "left"),
    },
];

/// Angles after azimuth normalization, as the shot-type rules see them.
#[derive(Debug, Clone, Copy)]
pub struct AngleReading {
    pub azimuth: f64,
    pub elevation: f64,
    pub roll: f64,
}

/// Leading shot-type label, rules checked in order.
#[derive(Debug, Clone, Copy)]
pub struct ShotTypeRule {
    pub label: &'static str,
    pub applies: fn(&AngleReading) -> bool,
}

pub const SHOT_TYPE_RULES: [ShotTypeRule; 5] = [
    ShotTypeRule {
        label: "establishing overhead",
        applies: |r| r.elevation >= 60.0,
    },
    ShotTypeRule {
        label: "heroic power shot",
        applies: |r| r.elevation <= -45.0,
    },
    ShotTypeRule {
        label: "tension-building",
        applies: |r| r.roll.abs() > 15.0,
    },
    ShotTypeRule {
        label: "mystery back shot",
        applies: |r| r.azimuth > 160.0 && r.azimuth < 200.0,
    },
    ShotTypeRule {
        label: "cinematic 3/4 portrait",
        applies: |r| {
            (r.azimuth > 40.0 && r.azimuth < 50.0) || (r.azimuth > 310.0 && r.azimuth < 320.0)
        },
    },
];

/// Wrap any azimuth into [0, 360)
pub fn normalize_azimuth(azimuth: f64) -> f64 {
    ((azimuth % 360.0) + 360.0) % 360.0
}

fn fill(template: &str, degrees: i64) -> String {
    template.replace(DEGREE_SLOT, &degrees.to_string())
}

/// Phrase for a normalized azimuth
pub fn azimuth_phrase(normalized: f64) -> Option<String> {
    if normalized >= FRONTAL_WRAP_START || normalized <= FRONTAL_EDGE {
        return Some(FRONTAL_PHRASE.to_string());
    }
    AZIMUTH_BANDS
        .iter()
        .find(|band| normalized <= band.through && normalized < FRONTAL_WRAP_START)
        .map(|band| fill(band.template, round_degrees(normalized)))
}

/// Phrase for an elevation; values beyond +/-90 land in the extremal bands
pub fn elevation_phrase(elevation: f64) -> Option<String> {
    ELEVATION_BANDS
        .iter()
        .find(|band| elevation >= band.from)
        .map(|band| {
            let shown = if band.magnitude { elevation.abs() } else { elevation };
            fill(band.template, round_degrees(shown))
        })
}

/// Phrase for a roll, `None` when the tilt is 3 degrees or less
pub fn roll_phrase(roll: f64) -> Option<String> {
    let magnitude = roll.abs();
    ROLL_BANDS.iter().find(|band| magnitude > band.above).map(|band| {
        let direction = if roll > 0.0 { band.directions.0 } else { band.directions.1 };
        fill(band.template, round_degrees(magnitude)).replace(DIRECTION_SLOT, direction)
    })
}

/// Shot-type label for the first matching rule
pub fn shot_type(reading: &AngleReading) -> Option<&'static str> {
    SHOT_TYPE_RULES
        .iter()
        .find(|rule| (rule.applies)(reading))
        .map(|rule| rule.label)
}

/// Describe a camera orientation as comma-joined cinematography phrases:
/// shot type (optional), azimuth, elevation, roll (optional).
pub fn describe_camera_angle(azimuth: f64, elevation: f64, roll: f64) -> String {
    let reading = AngleReading {
        azimuth: normalize_azimuth(azimuth),
        elevation,
        roll,
    };

    let mut parts: Vec<String> = Vec::with_capacity(4);
    if let Some(label) = shot_type(&reading) {
        parts.push(label.to_string());
    }
    parts.extend(azimuth_phrase(reading.azimuth));
    parts.extend(elevation_phrase(elevation));
    parts.extend(roll_phrase(roll));

    parts.join(SEGMENT_SEPARATOR)
}

/// Convenience wrapper over [`describe_camera_angle`]
pub fn describe_angles(angles: &CameraAngles) -> String {
    describe_camera_angle(angles.azimuth, angles.elevation, angles.roll)
}

/// Clamp a value to the control range of its axis. Azimuth is unbounded.
pub fn clamp_angle(axis: AngleAxis, value: f64) -> f64 {
    match axis {
        AngleAxis::Azimuth => value,
        AngleAxis::Elevation => clamp_to(value, ELEVATION_RANGE),
        AngleAxis::Roll => clamp_to(value, ROLL_RANGE),
    }
}

/// Compact readout for the viewport overlay, e.g. "Az: 45° | El: 15° | Roll: 0°"
pub fn angle_display_string(azimuth: f64, elevation: f64, roll: f64) -> String {
    format!(
        "Az: {}° | El: {}° | Roll: {}°",
        round_degrees(azimuth),
        round_degrees(elevation),
        round_degrees(roll)
    )
}
