/// Placeholder the image generator replaces with the attached character sheet.
pub const REFERENCE_TOKEN: &str = "<character_reference_image>";

/// Quality booster appended to every prompt.
pub const QUALITY_BOOSTER: &str = "detailed textures, professional composition";

/// Separator between prompt segments and between phrases inside a segment.
pub const SEGMENT_SEPARATOR: &str = ", ";

/// Placeholder for the rounded degree value in angle phrase templates.
pub const DEGREE_SLOT: &str = "{deg}";

/// Placeholder for the tilt direction in roll phrase templates.
pub const DIRECTION_SLOT: &str = "{dir}";
