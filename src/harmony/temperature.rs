//! Warm/cool temperature balance of an outfit

use serde::{Deserialize, Serialize};

use crate::color::{is_cool_hue, is_warm_hue, ColorRecord};

/// Prevailing temperature family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temperature {
    Warm,
    Cool,
    /// Equal warm and cool counts
    Mixed,
    /// No warm or cool colors at all
    Neutral,
}

/// Temperature counts over a set of colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureAnalysis {
    pub dominant: Temperature,
    pub warm_count: usize,
    pub cool_count: usize,
    pub neutral_count: usize,
    /// Chromatic colors in neither family
    pub other_count: usize,
    /// Share of chromatic colors in the larger family (1.0 without chromatics)
    pub coherence: f64,
}

impl TemperatureAnalysis {
    pub fn chromatic_count(&self) -> usize {
        self.warm_count + self.cool_count + self.other_count
    }

    /// Warm and cool colors are both present
    pub fn is_mixed(&self) -> bool {
        self.warm_count > 0 && self.cool_count > 0
    }
}

/// Count warm, cool and neutral colors
///
/// Chromatic hues outside both families (greens between 70 and 170 degrees)
/// count toward neither, which lowers coherence.
pub fn analyze_temperature(colors: &[ColorRecord]) -> TemperatureAnalysis {
    let mut warm_count = 0;
    let mut cool_count = 0;
    let mut neutral_count = 0;
    let mut other_count = 0;

    for color in colors {
        if color.is_neutral() {
            neutral_count += 1;
        } else if is_warm_hue(color.hsl.h) {
            warm_count += 1;
        } else if is_cool_hue(color.hsl.h) {
            cool_count += 1;
        } else {
            other_count += 1;
        }
    }

    let dominant = match warm_count.cmp(&cool_count) {
        _ if warm_count == 0 && cool_count == 0 => Temperature::Neutral,
        std::cmp::Ordering::Greater => Temperature::Warm,
        std::cmp::Ordering::Less => Temperature::Cool,
        std::cmp::Ordering::Equal => Temperature::Mixed,
    };

    let mut analysis = TemperatureAnalysis {
        dominant,
        warm_count,
        cool_count,
        neutral_count,
        other_count,
        coherence: 1.0,
    };
    let chromatic = analysis.chromatic_count();
    if chromatic > 0 {
        analysis.coherence = warm_count.max(cool_count) as f64 / chromatic as f64;
    }
    analysis
}
