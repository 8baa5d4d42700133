//! The fixed palette of selectable moods and their display attributes.

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, EnumString, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mood {
    Calm,
    Relaxed,
    Happy,
    Dreamy,
    Focused,
    Excited,
    Grateful,
    Peaceful,
    Energetic,
    Creative,
    Confident,
    Nostalgic,
    Motivated,
    Content,
    Inspired,
    Playful,
    Reflective,
    Adventurous,
    Loving,
    Hopeful,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown mood '{0}'")]
    UnknownMood(String),
}

/// An RGB accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodStyle {
    pub glyph: &'static str,
    pub color: Rgb,
}

impl MoodStyle {
    /// Shown for ids the catalog no longer knows about.
    pub const PLACEHOLDER: MoodStyle = MoodStyle {
        glyph: "❔",
        color: Rgb(0x5C, 0x63, 0x70),
    };
}

impl Mood {
    /// All moods in palette order.
    pub fn all() -> impl Iterator<Item = Mood> {
        Mood::iter()
    }

    /// Parses a mood id, ignoring case and surrounding whitespace.
    pub fn parse(id: &str) -> Result<Mood, CatalogError> {
        Mood::from_str(id.trim()).map_err(|_| CatalogError::UnknownMood(id.to_string()))
    }

    pub fn id(&self) -> &'static str {
        (*self).into()
    }

    pub fn style(&self) -> MoodStyle {
        let (glyph, color) = match self {
            Mood::Calm => ("😌", Rgb(0x8E, 0x9A, 0xAF)),
            Mood::Relaxed => ("😊", Rgb(0xCB, 0xC0, 0xD3)),
            Mood::Happy => ("😍", Rgb(0xEF, 0xD3, 0xD7)),
            Mood::Dreamy => ("🌙", Rgb(0xFE, 0xEA, 0xFA)),
            Mood::Focused => ("🎯", Rgb(0xDE, 0xE2, 0xFF)),
            Mood::Excited => ("🤩", Rgb(0xFF, 0xB3, 0xBA)),
            Mood::Grateful => ("🙏", Rgb(0xFF, 0xDF, 0xBA)),
            Mood::Peaceful => ("🕊️", Rgb(0xBA, 0xFF, 0xC9)),
            Mood::Energetic => ("⚡", Rgb(0xBA, 0xE1, 0xFF)),
            Mood::Creative => ("🎨", Rgb(0xE6, 0xB3, 0xFF)),
            Mood::Confident => ("💪", Rgb(0xFF, 0xB3, 0xE6)),
            Mood::Nostalgic => ("📸", Rgb(0xD4, 0xA5, 0xA5)),
            Mood::Motivated => ("🚀", Rgb(0xA5, 0xD4, 0xA5)),
            Mood::Content => ("😌", Rgb(0xA5, 0xA5, 0xD4)),
            Mood::Inspired => ("✨", Rgb(0xD4, 0xD4, 0xA5)),
            Mood::Playful => ("🎪", Rgb(0xFF, 0xA5, 0xA5)),
            Mood::Reflective => ("🤔", Rgb(0xA5, 0xFF, 0xA5)),
            Mood::Adventurous => ("🗺️", Rgb(0xA5, 0xA5, 0xFF)),
            Mood::Loving => ("💕", Rgb(0xFF, 0xA5, 0xFF)),
            Mood::Hopeful => ("🌈", Rgb(0xA5, 0xFF, 0xFF)),
        };
        MoodStyle { glyph, color }
    }
}

/// Looks up the display attributes for a mood id.
pub fn lookup(id: &str) -> Result<MoodStyle, CatalogError> {
    Mood::parse(id).map(|mood| mood.style())
}

/// Like [`lookup`], but never fails: stale ids from an older palette get
/// [`MoodStyle::PLACEHOLDER`].
pub fn style_or_placeholder(id: &str) -> MoodStyle {
    match lookup(id) {
        Ok(style) => style,
        Err(e) => {
            tracing::warn!(error = %e, "rendering placeholder for unknown mood");
            MoodStyle::PLACEHOLDER
        }
    }
}
