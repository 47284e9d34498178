//! Aggregate HSL statistics shared by the scoring rules

use crate::color::{hue_difference, ColorRecord};

/// Gaussian falloff around `center`, in (0, 1]
pub fn bell_curve(x: f64, center: f64, spread: f64) -> f64 {
    let z = (x - center) / spread;
    (-0.5 * z * z).exp()
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

pub(crate) fn lightnesses(colors: &[ColorRecord]) -> Vec<f64> {
    colors.iter().map(|c| c.hsl.l).collect()
}

pub(crate) fn saturations(colors: &[ColorRecord]) -> Vec<f64> {
    colors.iter().map(|c| c.hsl.s).collect()
}

fn pairwise<F: Fn(&ColorRecord, &ColorRecord) -> f64>(colors: &[&ColorRecord], f: F) -> Vec<f64> {
    let mut diffs = Vec::new();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            diffs.push(f(*a, *b));
        }
    }
    diffs
}

/// Lightness differences over all color pairs
pub(crate) fn lightness_diffs(colors: &[ColorRecord]) -> Vec<f64> {
    let refs: Vec<&ColorRecord> = colors.iter().collect();
    pairwise(&refs, |a, b| (a.hsl.l - b.hsl.l).abs())
}

/// Largest pairwise lightness difference, 0 for fewer than two colors
pub(crate) fn max_lightness_contrast(colors: &[ColorRecord]) -> f64 {
    lightness_diffs(colors).into_iter().fold(0.0, f64::max)
}

/// Mean pairwise lightness difference, `None` for fewer than two colors
pub(crate) fn avg_lightness_contrast(colors: &[ColorRecord]) -> Option<f64> {
    let diffs = lightness_diffs(colors);
    (!diffs.is_empty()).then(|| mean(&diffs))
}

pub(crate) fn chromatics(colors: &[ColorRecord]) -> Vec<&ColorRecord> {
    colors.iter().filter(|c| !c.is_neutral()).collect()
}

/// Largest pairwise hue difference among chromatic colors
pub(crate) fn hue_spread(colors: &[ColorRecord]) -> f64 {
    pairwise(&chromatics(colors), |a, b| hue_difference(a.hsl.h, b.hsl.h))
        .into_iter()
        .fold(0.0, f64::max)
}

/// Circular mean hue of the chromatic colors
pub(crate) fn mean_hue(colors: &[ColorRecord]) -> Option<f64> {
    let chromatic = chromatics(colors);
    if chromatic.is_empty() {
        return None;
    }
    let (sin, cos) = chromatic.iter().fold((0.0, 0.0), |(sin, cos), c| {
        let radians = c.hsl.h.to_radians();
        (sin + radians.sin(), cos + radians.cos())
    });
    let hue = sin.atan2(cos).to_degrees().rem_euclid(360.0);
    Some(if hue >= 360.0 { 0.0 } else { hue })
}
