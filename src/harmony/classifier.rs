//! Color harmony classification
//!
//! Classifies 2-3 garment colors into a color-theory relationship:
//! - Achromatic and neutral-anchored outfits are decided by the neutral split
//! - Outfits with two or more chromatic colors go through an ordered rule
//!   table over pairwise hue differences, where the first matching rule wins
//!
//! Rule order is significant: later rules assume earlier ones did not match.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::temperature::{analyze_temperature, TemperatureAnalysis};
use crate::color::{hue_difference, ColorRecord};
use crate::constants::harmony::*;

/// Color harmony classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyType {
    SingleColor,
    /// Only neutrals; `contrast` when the lightness range is wide
    Achromatic { contrast: bool },
    /// One chromatic color over neutrals; `pop` when it is saturated
    NeutralAnchored { pop: bool },
    /// Chromatics share a hue; `flat` without saturation or lightness variation
    Monochromatic { flat: bool },
    Analogous,
    SplitComplementary,
    /// Opposite hues; `bold` when saturated with no neutral anchor
    Complementary { bold: bool },
    Triadic,
    /// Clashing hues rescued by a neutral
    Tension,
    ColorClash,
    WarmHarmony,
    CoolHarmony,
    Mixed,
}

impl HarmonyType {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::SingleColor => "Single Color",
            Self::Achromatic { contrast: true } => "Achromatic Contrast",
            Self::Achromatic { contrast: false } => "Achromatic",
            Self::NeutralAnchored { pop: true } => "Neutral-Anchored Pop",
            Self::NeutralAnchored { pop: false } => "Neutral-Anchored",
            Self::Monochromatic { flat: false } => "Monochromatic",
            Self::Monochromatic { flat: true } => "Monochromatic - Flat",
            Self::Analogous => "Analogous",
            Self::SplitComplementary => "Split-Complementary",
            Self::Complementary { bold: true } => "Complementary - Bold",
            Self::Complementary { bold: false } => "Complementary",
            Self::Triadic => "Triadic",
            Self::Tension => "Tension (Neutral-Rescued)",
            Self::ColorClash => "Color Clash",
            Self::WarmHarmony => "Warm Harmony",
            Self::CoolHarmony => "Cool Harmony",
            Self::Mixed => "Mixed",
        }
    }

    /// Human-readable explanation template
    pub fn explanation(self) -> &'static str {
        match self {
            Self::SingleColor => "Only one color was detected, so there is no relationship to judge.",
            Self::Achromatic { contrast: true } => {
                "Black, white and gray with strong light-dark contrast: crisp and graphic."
            }
            Self::Achromatic { contrast: false } => {
                "An all-neutral palette: understated and easy to wear."
            }
            Self::NeutralAnchored { pop: true } => {
                "A single vivid color pops against a neutral base."
            }
            Self::NeutralAnchored { pop: false } => {
                "One soft color grounded by neutrals: balanced and versatile."
            }
            Self::Monochromatic { flat: false } => {
                "Shades of one hue with varied depth create a cohesive tonal look."
            }
            Self::Monochromatic { flat: true } => {
                "One hue at nearly the same depth throughout, which can read as flat."
            }
            Self::Analogous => "Neighboring hues on the color wheel blend naturally.",
            Self::SplitComplementary => {
                "A hue paired with neighbors of its opposite: contrast with less tension."
            }
            Self::Complementary { bold: true } => {
                "Saturated opposite hues with no neutral relief: loud and attention-grabbing."
            }
            Self::Complementary { bold: false } => {
                "Opposite hues on the color wheel make each other stand out."
            }
            Self::Triadic => "Three evenly spaced hues create a lively, balanced palette.",
            Self::Tension => "The hues compete, but a neutral piece keeps the look together.",
            Self::ColorClash => "Saturated hues at awkward distances compete for attention.",
            Self::WarmHarmony => "All colors come from the warm family and feel cohesive.",
            Self::CoolHarmony => "All colors come from the cool family and feel cohesive.",
            Self::Mixed => "The colors do not follow a classic harmony pattern.",
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Measurements behind a classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyDetails {
    pub neutral_count: usize,
    pub chromatic_count: usize,
    /// Pairwise hue statistics, present with two or more chromatic colors
    pub max_hue_difference: Option<f64>,
    pub avg_hue_difference: Option<f64>,
    /// Mean saturation of the chromatic colors
    pub avg_saturation: Option<f64>,
    pub temperature_coherence: f64,
}

/// Harmony classification of a set of garment colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyResult {
    pub harmony_type: HarmonyType,
    /// 0-100
    pub score: u32,
    pub explanation: String,
    pub details: HarmonyDetails,
}

impl HarmonyResult {
    fn new(harmony_type: HarmonyType, score: u32, details: HarmonyDetails) -> Self {
        Self {
            harmony_type,
            score: score.min(100),
            explanation: harmony_type.explanation().to_string(),
            details,
        }
    }
}

/// Statistics over the chromatic colors of an outfit
struct ChromaticProfile {
    count: usize,
    has_neutral: bool,
    hue_diffs: Vec<f64>,
    max_diff: f64,
    min_diff: f64,
    avg_diff: f64,
    avg_saturation: f64,
    saturation_range: f64,
    lightness_range: f64,
    temperature: TemperatureAnalysis,
}

impl ChromaticProfile {
    fn new(chromatics: &[&ColorRecord], neutral_count: usize, temperature: TemperatureAnalysis) -> Self {
        let mut hue_diffs = Vec::new();
        for (i, a) in chromatics.iter().enumerate() {
            for b in &chromatics[i + 1..] {
                hue_diffs.push(hue_difference(a.hsl.h, b.hsl.h));
            }
        }

        let max_diff = hue_diffs.iter().copied().fold(0.0, f64::max);
        let min_diff = hue_diffs.iter().copied().fold(f64::INFINITY, f64::min);
        let avg_diff = hue_diffs.iter().sum::<f64>() / hue_diffs.len().max(1) as f64;

        let saturations: Vec<f64> = chromatics.iter().map(|c| c.hsl.s).collect();
        let lightnesses: Vec<f64> = chromatics.iter().map(|c| c.hsl.l).collect();

        Self {
            count: chromatics.len(),
            has_neutral: neutral_count > 0,
            hue_diffs,
            max_diff,
            min_diff,
            avg_diff,
            avg_saturation: saturations.iter().sum::<f64>() / saturations.len().max(1) as f64,
            saturation_range: range(&saturations),
            lightness_range: range(&lightnesses),
            temperature,
        }
    }

    fn is_coherent(&self) -> bool {
        self.temperature.coherence >= 1.0
    }
}

type Rule = fn(&ChromaticProfile) -> Option<(HarmonyType, u32)>;

/// Rules for two or more chromatic colors, in priority order
const CHROMATIC_RULES: [Rule; 7] = [
    monochromatic,
    analogous,
    split_complementary,
    complementary,
    triadic,
    clash,
    temperature_family,
];

fn monochromatic(p: &ChromaticProfile) -> Option<(HarmonyType, u32)> {
    if p.max_diff >= MONOCHROMATIC_MAX_DIFF {
        return None;
    }
    let varied = p.saturation_range > MONOCHROMATIC_MIN_RANGE || p.lightness_range > MONOCHROMATIC_MIN_RANGE;
    Some(if varied {
        (HarmonyType::Monochromatic { flat: false }, 87)
    } else {
        (HarmonyType::Monochromatic { flat: true }, 68)
    })
}

fn analogous(p: &ChromaticProfile) -> Option<(HarmonyType, u32)> {
    if p.max_diff > ANALOGOUS_MAX_DIFF {
        return None;
    }
    let mut score = 88;
    if p.has_neutral {
        score += 5;
    }
    if p.is_coherent() {
        score += 3;
    }
    Some((HarmonyType::Analogous, score.min(100)))
}

fn split_complementary(p: &ChromaticProfile) -> Option<(HarmonyType, u32)> {
    let (low, high) = SPLIT_COMPLEMENTARY_RANGE;
    p.hue_diffs
        .iter()
        .any(|d| (low..=high).contains(d))
        .then_some((HarmonyType::SplitComplementary, 84))
}

fn complementary(p: &ChromaticProfile) -> Option<(HarmonyType, u32)> {
    if p.max_diff < COMPLEMENTARY_MIN_DIFF {
        return None;
    }
    Some(if p.avg_saturation > BOLD_MIN_SATURATION && !p.has_neutral {
        (HarmonyType::Complementary { bold: true }, 75)
    } else if p.has_neutral {
        (HarmonyType::Complementary { bold: false }, 90)
    } else {
        (HarmonyType::Complementary { bold: false }, 84)
    })
}

fn triadic(p: &ChromaticProfile) -> Option<(HarmonyType, u32)> {
    let (low, high) = TRIADIC_PAIR_RANGE;
    let evenly_spaced = p.hue_diffs.iter().all(|d| (low..=high).contains(d))
        || p.max_diff - p.min_diff < TRIADIC_MAX_SPREAD;

    (p.count >= 3 && evenly_spaced && p.avg_diff >= TRIADIC_MIN_AVG_DIFF)
        .then_some((HarmonyType::Triadic, 82))
}

fn clash(p: &ChromaticProfile) -> Option<(HarmonyType, u32)> {
    let (low, high) = CLASH_AVG_DIFF;
    if !(low..high).contains(&p.avg_diff) || p.avg_saturation <= CLASH_MIN_SATURATION {
        return None;
    }
    Some(if p.count <= 2 && p.has_neutral {
        (HarmonyType::Tension, 62)
    } else if p.temperature.is_mixed() {
        (HarmonyType::ColorClash, 32)
    } else {
        (HarmonyType::ColorClash, 40)
    })
}

fn temperature_family(p: &ChromaticProfile) -> Option<(HarmonyType, u32)> {
    if !p.is_coherent() {
        return None;
    }
    Some(if p.temperature.warm_count > 0 {
        (HarmonyType::WarmHarmony, 78)
    } else {
        (HarmonyType::CoolHarmony, 78)
    })
}

fn mixed(p: &ChromaticProfile) -> (HarmonyType, u32) {
    let neutral_bonus = if p.has_neutral { 5.0 } else { 0.0 };
    let score = (50.0 + 15.0 * p.temperature.coherence + neutral_bonus).min(70.0);
    (HarmonyType::Mixed, score.round() as u32)
}

fn range(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    if values.is_empty() {
        0.0
    } else {
        max - min
    }
}

/// Classify the relationship between garment colors
///
/// Accepts 2-3 colors; fewer than two yields [`HarmonyType::SingleColor`].
pub fn analyze_harmony(colors: &[ColorRecord]) -> HarmonyResult {
    let temperature = analyze_temperature(colors);
    let (neutrals, chromatics): (Vec<&ColorRecord>, Vec<&ColorRecord>) =
        colors.iter().partition(|c| c.is_neutral());

    let mut details = HarmonyDetails {
        neutral_count: neutrals.len(),
        chromatic_count: chromatics.len(),
        max_hue_difference: None,
        avg_hue_difference: None,
        avg_saturation: None,
        temperature_coherence: temperature.coherence,
    };

    let result = if colors.len() < 2 {
        HarmonyResult::new(HarmonyType::SingleColor, 50, details)
    } else if chromatics.is_empty() {
        let lightnesses: Vec<f64> = neutrals.iter().map(|c| c.hsl.l).collect();
        if range(&lightnesses) > ACHROMATIC_CONTRAST_RANGE {
            HarmonyResult::new(HarmonyType::Achromatic { contrast: true }, 85, details)
        } else {
            HarmonyResult::new(HarmonyType::Achromatic { contrast: false }, 72, details)
        }
    } else if chromatics.len() == 1 {
        details.avg_saturation = Some(chromatics[0].hsl.s);
        if chromatics[0].hsl.s > POP_MIN_SATURATION {
            HarmonyResult::new(HarmonyType::NeutralAnchored { pop: true }, 88, details)
        } else {
            HarmonyResult::new(HarmonyType::NeutralAnchored { pop: false }, 80, details)
        }
    } else {
        let profile = ChromaticProfile::new(&chromatics, neutrals.len(), temperature);
        details.max_hue_difference = Some(profile.max_diff);
        details.avg_hue_difference = Some(profile.avg_diff);
        details.avg_saturation = Some(profile.avg_saturation);

        let (harmony_type, score) = CHROMATIC_RULES
            .iter()
            .find_map(|rule| rule(&profile))
            .unwrap_or_else(|| mixed(&profile));
        HarmonyResult::new(harmony_type, score, details)
    };

    log::debug!(
        "Harmony: {} (score {}, {} neutral / {} chromatic)",
        result.harmony_type,
        result.score,
        result.details.neutral_count,
        result.details.chromatic_count
    );
    result
}
