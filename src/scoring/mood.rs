//! Mood detection
//!
//! An ordered decision tree over average hue, saturation and lightness,
//! lightness contrast and hue spread. The first matching rule wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stats::{
    chromatics, hue_spread, lightnesses, max_lightness_contrast, mean, mean_hue, saturations,
};
use crate::color::ColorRecord;

/// Overall mood an outfit conveys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    DarkEdgy,
    MonochromeMinimal,
    EnergeticBold,
    RomanticSoft,
    EarthyNatural,
    CalmProfessional,
    PlayfulCreative,
    FreshSporty,
    MinimalElegant,
    NeutralClassic,
    Balanced,
    Unknown,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Self::DarkEdgy => "Dark & Edgy",
            Self::MonochromeMinimal => "Monochrome Minimal",
            Self::EnergeticBold => "Energetic & Bold",
            Self::RomanticSoft => "Romantic & Soft",
            Self::EarthyNatural => "Earthy & Natural",
            Self::CalmProfessional => "Calm & Professional",
            Self::PlayfulCreative => "Playful & Creative",
            Self::FreshSporty => "Fresh & Sporty",
            Self::MinimalElegant => "Minimal & Elegant",
            Self::NeutralClassic => "Neutral & Classic",
            Self::Balanced => "Balanced",
            Self::Unknown => "Unknown",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::DarkEdgy => "🖤",
            Self::MonochromeMinimal => "🔲",
            Self::EnergeticBold => "⚡",
            Self::RomanticSoft => "🌸",
            Self::EarthyNatural => "🌿",
            Self::CalmProfessional => "💼",
            Self::PlayfulCreative => "🎨",
            Self::FreshSporty => "👟",
            Self::MinimalElegant => "✨",
            Self::NeutralClassic => "👔",
            Self::Balanced => "⚖️",
            Self::Unknown => "❔",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Self::DarkEdgy => "Deep, dark tones give the outfit an edgy, confident feel.",
            Self::MonochromeMinimal => "Crisp black-and-white contrast keeps things graphic and minimal.",
            Self::EnergeticBold => "Saturated colors bring energy and make a statement.",
            Self::RomanticSoft => "Light, gentle pinks and purples feel soft and romantic.",
            Self::EarthyNatural => "Muted warm earth tones feel grounded and natural.",
            Self::CalmProfessional => "Subdued blues read as calm, composed and professional.",
            Self::PlayfulCreative => "Widely spread hues feel playful and creative.",
            Self::FreshSporty => "Bright, light colors feel fresh and sporty.",
            Self::MinimalElegant => "A restrained, low-saturation palette feels quietly elegant.",
            Self::NeutralClassic => "Neutral basics with a touch of color make a timeless look.",
            Self::Balanced => "A balanced mix of colors without one dominant mood.",
            Self::Unknown => "Not enough color information to read a mood.",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detected mood with its display emoji and explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodResult {
    pub mood: Mood,
    pub emoji: String,
    pub explanation: String,
}

impl From<Mood> for MoodResult {
    fn from(mood: Mood) -> Self {
        Self {
            mood,
            emoji: mood.emoji().to_string(),
            explanation: mood.explanation().to_string(),
        }
    }
}

struct MoodProfile {
    avg_lightness: f64,
    avg_saturation: f64,
    max_contrast: f64,
    /// Circular mean hue of the chromatic colors
    hue: Option<f64>,
    hue_spread: f64,
    chromatic_count: usize,
    neutral_count: usize,
}

impl MoodProfile {
    fn new(colors: &[ColorRecord]) -> Self {
        let chromatic_count = chromatics(colors).len();
        Self {
            avg_lightness: mean(&lightnesses(colors)),
            avg_saturation: mean(&saturations(colors)),
            max_contrast: max_lightness_contrast(colors),
            hue: mean_hue(colors),
            hue_spread: hue_spread(colors),
            chromatic_count,
            neutral_count: colors.len() - chromatic_count,
        }
    }

    fn hue_in(&self, ranges: &[(f64, f64)]) -> bool {
        self.hue
            .is_some_and(|h| ranges.iter().any(|&(start, end)| h >= start && h < end))
    }
}

/// Mood rules in priority order
const MOOD_RULES: [(Mood, fn(&MoodProfile) -> bool); 10] = [
    (Mood::DarkEdgy, |p| p.avg_lightness < 25.0),
    (Mood::MonochromeMinimal, |p| p.chromatic_count == 0 && p.max_contrast > 40.0),
    (Mood::EnergeticBold, |p| p.chromatic_count >= 2 && p.avg_saturation > 65.0),
    (Mood::RomanticSoft, |p| {
        p.avg_lightness > 65.0
            && (20.0..=60.0).contains(&p.avg_saturation)
            && p.hue_in(&[(290.0, 360.0), (0.0, 15.0)])
    }),
    (Mood::EarthyNatural, |p| {
        p.avg_saturation < 55.0 && p.avg_lightness < 60.0 && p.hue_in(&[(15.0, 100.0)])
    }),
    (Mood::CalmProfessional, |p| {
        p.avg_saturation < 50.0 && p.hue_in(&[(180.0, 260.0)])
    }),
    (Mood::PlayfulCreative, |p| p.chromatic_count >= 2 && p.hue_spread >= 120.0),
    (Mood::FreshSporty, |p| {
        p.chromatic_count >= 1 && p.avg_lightness > 55.0 && p.avg_saturation > 40.0
    }),
    (Mood::MinimalElegant, |p| {
        p.chromatic_count <= 1 && p.neutral_count >= 2 && p.avg_saturation < 30.0
    }),
    (Mood::NeutralClassic, |p| p.neutral_count >= 1),
];

/// Mood conveyed by an outfit's colors
pub fn detect_mood(colors: &[ColorRecord]) -> MoodResult {
    if colors.is_empty() {
        return Mood::Unknown.into();
    }

    let profile = MoodProfile::new(colors);
    let mood = MOOD_RULES
        .iter()
        .find(|(_, rule)| rule(&profile))
        .map(|(mood, _)| *mood)
        .unwrap_or(Mood::Balanced);

    log::debug!("Mood: {}", mood);
    mood.into()
}
