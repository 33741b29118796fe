//! # Zone Records
//!
//! A [`ZoneRecord`] is one display entry: a named layer, its short code, a
//! one-sentence description and the color it is drawn in.

use serde::Serialize;
use uuid::Uuid;

/// Longest abbreviation a badge can hold.
pub const MAX_ABBREVIATION_LEN: usize = 4;

/// Symbolic color of a zone, used for fill, border and badge gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Purple,
    Blue,
    Teal,
    Green,
    Orange,
    Red,
}

impl ColorTag {
    /// All color tags.
    pub const ALL: [ColorTag; 6] = [
        ColorTag::Purple,
        ColorTag::Blue,
        ColorTag::Teal,
        ColorTag::Green,
        ColorTag::Orange,
        ColorTag::Red,
    ];

    /// Lowercase name of the tag.
    pub fn name(&self) -> &'static str {
        match self {
            ColorTag::Purple => "purple",
            ColorTag::Blue => "blue",
            ColorTag::Teal => "teal",
            ColorTag::Green => "green",
            ColorTag::Orange => "orange",
            ColorTag::Red => "red",
        }
    }

    /// Saturated base tone as RGB.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorTag::Purple => (175, 82, 222),
            ColorTag::Blue => (0, 122, 255),
            ColorTag::Teal => (48, 176, 199),
            ColorTag::Green => (52, 199, 89),
            ColorTag::Orange => (255, 149, 0),
            ColorTag::Red => (255, 59, 48),
        }
    }

    /// Base tone mixed toward `other` by `t` (0.0 = base, 1.0 = other).
    pub fn mix(&self, other: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
        let t = t.clamp(0.0, 1.0);
        let (r, g, b) = self.rgb();
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        (lerp(r, other.0), lerp(g, other.1), lerp(b, other.2))
    }
}

/// One zone of the developing cortex.
///
/// Fields are read through accessors so a record handed out by the catalog
/// cannot be changed in place.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneRecord {
    id: Uuid,
    name: &'static str,
    abbreviation: &'static str,
    description: &'static str,
    color: ColorTag,
}

impl ZoneRecord {
    /// Create a record with a freshly generated id.
    pub fn new(
        name: &'static str,
        abbreviation: &'static str,
        description: &'static str,
        color: ColorTag,
    ) -> Self {
        debug_assert!(abbreviation.chars().count() <= MAX_ABBREVIATION_LEN);
        Self {
            id: Uuid::new_v4(),
            name,
            abbreviation,
            description,
            color,
        }
    }

    /// Stable identifier for list rendering. Carries no meaning.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }
}

/// Content equality; the generated `id` is ignored.
impl PartialEq for ZoneRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.abbreviation == other.abbreviation
            && self.description == other.description
            && self.color == other.color
    }
}

impl Eq for ZoneRecord {}
