//! Outfit confidence estimate
//!
//! How confidently an outfit reads to a viewer, from 0 to 100. Six factors
//! over aggregate HSL statistics add up to 100 at best.

use super::stats::{bell_curve, hue_spread, lightnesses, mean, saturations, std_dev};
use crate::color::ColorRecord;
use crate::constants::confidence::*;
use crate::harmony::analyze_temperature;

/// Confidence estimate in [0, 100]; no colors means no confidence
pub fn calculate_confidence(colors: &[ColorRecord]) -> u32 {
    if colors.is_empty() {
        return 0;
    }

    let lightness = lightnesses(colors);
    let saturation = saturations(colors);

    let curve = |value: f64, (center, spread): (f64, f64)| bell_curve(value, center, spread);

    let contrast = CONTRAST_MAX * curve(std_dev(&lightness), LIGHTNESS_SPREAD_CURVE);
    let vibrancy = SATURATION_MAX * curve(mean(&saturation), SATURATION_CURVE);
    let balance = balance_factor(colors);
    let anchor = neutral_anchor_factor(colors);
    let intentionality = intentionality_factor(colors);
    let darkness = DARKNESS_MAX * curve(mean(&lightness), DARKNESS_CURVE);

    let total = contrast + vibrancy + balance + anchor + intentionality + darkness;
    log::trace!(
        "Confidence factors: contrast {:.1}, saturation {:.1}, balance {:.1}, anchor {:.1}, intent {:.1}, darkness {:.1}",
        contrast,
        vibrancy,
        balance,
        anchor,
        intentionality,
        darkness
    );

    total.round().clamp(0.0, 100.0) as u32
}

/// Warm/cool balance
fn balance_factor(colors: &[ColorRecord]) -> f64 {
    let coherence = analyze_temperature(colors).coherence;
    if coherence >= 1.0 {
        BALANCE_MAX
    } else if coherence >= 0.6 {
        BALANCE_MAX * 2.0 / 3.0
    } else {
        BALANCE_MAX / 3.0
    }
}

fn neutral_anchor_factor(colors: &[ColorRecord]) -> f64 {
    let neutrals = colors.iter().filter(|c| c.is_fashion_neutral()).count();
    if neutrals == colors.len() {
        NEUTRAL_ANCHOR_MAX * 2.0 / 3.0
    } else if neutrals > 0 {
        NEUTRAL_ANCHOR_MAX
    } else {
        NEUTRAL_ANCHOR_MAX / 3.0
    }
}

/// Cohesive or deliberately opposed hues read as intentional
fn intentionality_factor(colors: &[ColorRecord]) -> f64 {
    let spread = hue_spread(colors);
    if spread <= 60.0 {
        INTENTIONALITY_MAX
    } else if spread >= 150.0 {
        INTENTIONALITY_MAX * 0.8
    } else {
        INTENTIONALITY_MAX * 0.4
    }
}
