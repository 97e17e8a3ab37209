//! Built-in reference tables.

use cineprompt_ipc::CameraAngles;

use super::records::*;

fn descriptor(id: &str, name: &str, prompt: &str) -> Descriptor {
    Descriptor {
        id: id.into(),
        name: name.into(),
        prompt: prompt.into(),
    }
}

fn place(id: &str, name: &str, prompt: &str, category: Option<&str>) -> Place {
    Place {
        id: id.into(),
        name: name.into(),
        prompt: prompt.into(),
        category: category.map(Into::into),
    }
}

pub(super) fn lenses() -> Vec<Lens> {
    [
        ("16mm", "16mm Wide", "Epic scale, distortion", 16),
        ("24mm", "24mm Wide", "Environmental storytelling", 24),
        ("35mm", "35mm Street", "Cinematic standard", 35),
        ("50mm", "50mm Prime", "Human eye perspective", 50),
        ("85mm", "85mm Portrait", "Compression, bokeh", 85),
        ("135mm", "135mm Tele", "Intimate close-ups", 135),
        ("200mm", "200mm Super Tele", "Extreme compression", 200),
    ]
    .into_iter()
    .map(|(id, name, desc, focal)| Lens {
        id: id.into(),
        name: name.into(),
        desc: desc.into(),
        focal_length: Some(focal),
    })
    .collect()
}

pub(super) fn aspect_ratios() -> Vec<AspectRatio> {
    [
        ("1:1", "Square", 1.0, 1.0),
        ("4:3", "Classic", 4.0, 3.0),
        ("16:9", "Widescreen", 16.0, 9.0),
        ("9:16", "Vertical", 9.0, 16.0),
        ("21:9", "Ultrawide", 21.0, 9.0),
        ("2.35:1", "Anamorphic", 2.35, 1.0),
    ]
    .into_iter()
    .map(|(id, name, width, height)| AspectRatio {
        id: id.into(),
        name: name.into(),
        width,
        height,
    })
    .collect()
}

pub(super) fn film_stocks() -> Vec<FilmStock> {
    use FilmCategory::*;
    [
        (
            "digital",
            "Digital Sharp",
            "8k resolution, razor sharp focus, digital cinema camera",
            Digital,
        ),
        (
            "kodak-portra",
            "Kodak Portra 400",
            "Kodak Portra 400 film stock, fine grain, natural skin tones, vintage warmth",
            Film,
        ),
        (
            "kodak-gold",
            "Kodak Gold 200",
            "Kodak Gold 200, nostalgic warm tones, classic film aesthetic",
            Film,
        ),
        (
            "fuji-velvia",
            "Fuji Velvia 50",
            "Fujifilm Velvia 50, hyper saturated colors, vibrant landscapes, slide film",
            Film,
        ),
        (
            "fuji-superia",
            "Fuji Superia",
            "Fujifilm Superia, cool color cast, everyday film aesthetic",
            Film,
        ),
        (
            "cinestill-800t",
            "CineStill 800T",
            "CineStill 800T tungsten film, halation glow, cinematic night photography",
            Specialty,
        ),
        (
            "ilford-hp5",
            "Ilford HP5",
            "Ilford HP5 Plus, black and white photography, high contrast, classic grain",
            Film,
        ),
        (
            "ilford-delta",
            "Ilford Delta 3200",
            "Ilford Delta 3200, extreme grain, gritty black and white, noir aesthetic",
            Specialty,
        ),
        (
            "polaroid",
            "Polaroid SX-70",
            "Polaroid SX-70 instant film, soft focus, vintage instant photo aesthetic",
            Specialty,
        ),
    ]
    .into_iter()
    .map(|(id, name, prompt, category)| FilmStock {
        id: id.into(),
        name: name.into(),
        prompt: prompt.into(),
        category: Some(category),
    })
    .collect()
}

pub(super) fn earth_locations() -> Vec<Place> {
    [
        ("tokyo", "Tokyo, Japan", "Tokyo, Japan"),
        ("paris", "Paris, France", "Paris, France"),
        ("newyork", "New York City", "New York City, USA"),
        ("london", "London, UK", "London, England"),
        ("dubai", "Dubai, UAE", "Dubai, UAE"),
        ("cairo", "Cairo, Egypt", "Cairo, Egypt near the pyramids"),
        ("rome", "Rome, Italy", "Rome, Italy"),
        ("beijing", "Beijing, China", "Beijing, China"),
        ("mumbai", "Mumbai, India", "Mumbai, India"),
        ("sydney", "Sydney, Australia", "Sydney, Australia"),
        ("amazon", "Amazon Rainforest", "Amazon rainforest, South America"),
        ("sahara", "Sahara Desert", "Sahara desert, Africa"),
        ("alps", "Swiss Alps", "Swiss Alps, Europe"),
        ("iceland", "Iceland", "Iceland, volcanic landscape"),
        ("antarctica", "Antarctica", "Antarctica, frozen landscape"),
    ]
    .into_iter()
    .map(|(id, name, prompt)| place(id, name, prompt, None))
    .collect()
}

pub(super) fn cosmic_locations() -> Vec<Place> {
    const SOLAR: Option<&str> = Some("Solar System");
    const DEEP: Option<&str> = Some("Deep Space");
    const SCI_FI: Option<&str> = Some("Sci-Fi");
    vec![
        place("moon", "The Moon", "on the surface of the Moon with Earth in the sky", SOLAR),
        place("mars", "Mars Surface", "on the surface of Mars, red desert landscape", SOLAR),
        place(
            "europa",
            "Europa (Jupiter Moon)",
            "on Europa, icy moon of Jupiter with Jupiter looming in the sky",
            SOLAR,
        ),
        place(
            "titan",
            "Titan (Saturn Moon)",
            "on Titan, orange hazy atmosphere, hydrocarbon lakes",
            SOLAR,
        ),
        place(
            "saturn_rings",
            "Saturn's Rings",
            "floating among Saturn's rings, ice and rock debris",
            SOLAR,
        ),
        place(
            "asteroid",
            "Asteroid Belt",
            "on an asteroid in the asteroid belt, rocky void of space",
            SOLAR,
        ),
        place("orion", "Orion Nebula", "inside the Orion Nebula, swirling cosmic gas clouds", DEEP),
        place(
            "pillars",
            "Pillars of Creation",
            "near the Pillars of Creation, towering cosmic dust columns",
            DEEP,
        ),
        place(
            "blackhole",
            "Black Hole",
            "near a supermassive black hole with accretion disk",
            DEEP,
        ),
        place(
            "andromeda",
            "Andromeda Galaxy",
            "viewing Andromeda Galaxy, spiral arms of billions of stars",
            DEEP,
        ),
        place(
            "neutron",
            "Neutron Star",
            "near a pulsar neutron star, intense radiation beams",
            DEEP,
        ),
        place(
            "dyson",
            "Dyson Sphere",
            "inside a Dyson Sphere, massive megastructure around a star",
            SCI_FI,
        ),
        place(
            "ringworld",
            "Ringworld",
            "on a Ringworld megastructure, artificial horizon curves upward",
            SCI_FI,
        ),
        place(
            "wormhole",
            "Wormhole",
            "entering a wormhole, spacetime tunnel with gravitational lensing",
            SCI_FI,
        ),
    ]
}

pub(super) fn eras() -> Vec<Era> {
    [
        ("prehistoric", "Prehistoric", -50000, "prehistoric era, primitive world"),
        ("ancient_egypt", "Ancient Egypt", -2500, "ancient Egyptian era, pharaohs and pyramids"),
        ("ancient_rome", "Ancient Rome", 100, "ancient Roman era, togas and temples"),
        ("medieval", "Medieval", 1200, "medieval era, castles and knights"),
        ("renaissance", "Renaissance", 1500, "Renaissance era, art and enlightenment"),
        ("victorian", "Victorian", 1880, "Victorian era, steam and industry"),
        ("roaring20s", "Roaring 20s", 1925, "1920s era, jazz age and art deco"),
        ("ww2", "World War II", 1943, "1940s wartime era"),
        ("retro60s", "1960s Retro", 1965, "1960s era, mod fashion and space race"),
        ("synthwave80s", "1980s Synthwave", 1985, "1980s synthwave aesthetic, neon and chrome"),
        ("y2k", "Y2K / 2000s", 2000, "Y2K era, millennium aesthetic"),
        ("modern", "Modern Day", 2024, "modern day, contemporary setting"),
        ("nearfuture", "Near Future", 2050, "near future, advanced technology"),
        ("cyberpunk", "Cyberpunk", 2077, "cyberpunk future, neon dystopia"),
        ("farfuture", "Far Future", 3000, "far future, post-singularity civilization"),
    ]
    .into_iter()
    .map(|(id, name, year, prompt)| Era {
        id: id.into(),
        name: name.into(),
        year,
        prompt: prompt.into(),
    })
    .collect()
}

pub(super) fn times_of_day() -> Vec<Descriptor> {
    vec![
        descriptor("dawn", "Dawn", "at dawn, first light of day"),
        descriptor("morning", "Morning", "in the morning, soft daylight"),
        descriptor("noon", "Noon", "at noon, harsh midday sun"),
        descriptor("afternoon", "Afternoon", "in the afternoon, warm golden light"),
        descriptor("goldenhour", "Golden Hour", "during golden hour, warm sunset light"),
        descriptor("dusk", "Dusk", "at dusk, twilight fading"),
        descriptor("night", "Night", "at night, darkness and city lights"),
        descriptor("midnight", "Midnight", "at midnight, deep night"),
        descriptor("bluehour", "Blue Hour", "during blue hour, ethereal twilight"),
    ]
}

pub(super) fn weather() -> Vec<Descriptor> {
    vec![
        descriptor("clear", "Clear", ""),
        descriptor("cloudy", "Cloudy", "overcast sky"),
        descriptor("rain", "Rain", "rain falling, wet surfaces"),
        descriptor("storm", "Thunderstorm", "thunderstorm, lightning in the sky"),
        descriptor("snow", "Snow", "snowfall, winter atmosphere"),
        descriptor("fog", "Fog", "thick fog, low visibility"),
        descriptor("sandstorm", "Sandstorm", "sandstorm, dusty atmosphere"),
        descriptor("aurora", "Aurora", "aurora borealis in the sky"),
    ]
}

pub(super) fn seasons() -> Vec<Descriptor> {
    vec![
        descriptor("spring", "Spring", "spring season, cherry blossoms"),
        descriptor("summer", "Summer", "summer season, vibrant green"),
        descriptor("autumn", "Autumn", "autumn season, golden leaves"),
        descriptor("winter", "Winter", "winter season, bare trees and frost"),
    ]
}

pub(super) fn lighting_setups() -> Vec<Descriptor> {
    vec![
        descriptor("natural", "Natural Light", "natural ambient lighting, soft shadows"),
        descriptor("golden", "Golden Hour", "warm golden hour lighting, sunset glow, long shadows"),
        descriptor(
            "rembrandt",
            "Rembrandt",
            "dramatic rembrandt lighting, chiaroscuro, triangle of light",
        ),
        descriptor(
            "rim",
            "Rim / Backlight",
            "strong rim lighting, silhouette contour, edge definition",
        ),
        descriptor(
            "volumetric",
            "Volumetric",
            "hazy volumetric god rays, atmospheric fog, light beams",
        ),
        descriptor(
            "neon",
            "Neon / Cyber",
            "cyan and magenta neon lighting, bioluminescence, electric atmosphere",
        ),
        descriptor(
            "studio",
            "Softbox Studio",
            "professional studio softbox lighting, even illumination, clean shadows",
        ),
        descriptor(
            "cinematic",
            "Cinematic",
            "cinematic three-point lighting, professional film setup, dramatic contrast",
        ),
        descriptor(
            "moody",
            "Moody Low-Key",
            "moody low-key lighting, deep shadows, mystery atmosphere",
        ),
    ]
}

pub(super) fn camera_presets() -> Vec<CameraPreset> {
    [
        ("hero", "Hero Shot", "Slight low angle, front-facing, cinematic", (0.0, -15.0, 0.0)),
        (
            "dramatic-low",
            "Dramatic Low",
            "Worm's eye view, powerful perspective",
            (45.0, -45.0, 0.0),
        ),
        ("overhead", "Overhead", "Bird's eye view, top-down perspective", (0.0, 80.0, 0.0)),
        ("profile", "Side Profile", "Clean 90° side view", (90.0, 0.0, 0.0)),
        ("three-quarter", "Three Quarter", "Classic portrait angle", (45.0, 15.0, 0.0)),
        ("dutch-angle", "Dutch Angle", "Tilted, dynamic unease", (30.0, 5.0, 25.0)),
        ("back-view", "Back View", "Over the shoulder perspective", (180.0, 10.0, 0.0)),
        ("high-angle", "High Angle", "Looking down, vulnerable feel", (25.0, 35.0, 0.0)),
    ]
    .into_iter()
    .map(|(id, name, description, (azimuth, elevation, roll))| CameraPreset {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        angles: CameraAngles::new(azimuth, elevation, roll),
    })
    .collect()
}

/// Ordered; earlier pairs are applied first.
pub(super) fn contradictions() -> Vec<ContradictionPair> {
    [
        ("night", "noon"),
        ("night", "morning"),
        ("midnight", "golden hour"),
        ("midnight", "dawn"),
        ("winter", "summer"),
        ("snow", "summer"),
        ("rain", "clear sky"),
        ("indoor", "outdoor"),
        ("space", "earth"),
        ("underwater", "desert"),
        ("ancient", "cyberpunk"),
        ("prehistoric", "modern"),
    ]
    .into_iter()
    .map(|(keep, drop)| ContradictionPair {
        keep: keep.into(),
        drop: drop.into(),
    })
    .collect()
}
