//! Outfit score
//!
//! The 0-100 outfit score is the sum of six independently capped categories:
//! - Harmony: the harmony score carried over at 30%
//! - Contrast: bell curve over the widest lightness gap
//! - Saturation: bell curves over average and spread of saturation
//! - Temperature: warm/cool dominance, three tiers
//! - Neutrals: how many fashion neutrals anchor the outfit, five tiers
//! - Polish: penalties and bonuses for common styling mistakes and wins

use serde::{Deserialize, Serialize};

use super::stats::{
    avg_lightness_contrast, bell_curve, max_lightness_contrast, mean, saturations, std_dev,
};
use crate::color::ColorRecord;
use crate::constants::score::*;
use crate::harmony::{analyze_temperature, HarmonyResult, HarmonyType};

/// Points earned in one score category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdownItem {
    pub category: String,
    pub points: u32,
    pub max: u32,
    pub detail: String,
}

impl ScoreBreakdownItem {
    fn new(category: &str, points: u32, max: u32, detail: impl Into<String>) -> Self {
        Self {
            category: category.to_string(),
            points: points.min(max),
            max,
            detail: detail.into(),
        }
    }
}

/// Outfit score with its per-category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Clamped sum of the breakdown points, 0-100
    pub total: u32,
    pub breakdown: Vec<ScoreBreakdownItem>,
}

/// Score an outfit from its garment colors and harmony classification
///
/// Colors are expected in top, bottom, shoes order; the third color is
/// treated as the shoes for the polish bonus.
pub fn calculate_outfit_score(colors: &[ColorRecord], harmony: &HarmonyResult) -> ScoreResult {
    let breakdown = vec![
        harmony_points(harmony),
        contrast_points(colors),
        saturation_points(colors),
        temperature_points(colors),
        neutral_points(colors),
        polish_points(colors, harmony),
    ];

    let total = breakdown.iter().map(|item| item.points).sum::<u32>().min(100);
    log::debug!("Outfit score {} ({} harmony)", total, harmony.harmony_type);

    ScoreResult { total, breakdown }
}

fn harmony_points(harmony: &HarmonyResult) -> ScoreBreakdownItem {
    let points = (harmony.score as f64 * HARMONY_WEIGHT).round() as u32;
    ScoreBreakdownItem::new("Harmony", points, HARMONY_MAX, harmony.harmony_type.label())
}

fn contrast_points(colors: &[ColorRecord]) -> ScoreBreakdownItem {
    let contrast = max_lightness_contrast(colors);
    let points = (CONTRAST_MAX as f64 * bell_curve(contrast, CONTRAST_CENTER, CONTRAST_SPREAD)).round();
    let detail = if contrast < 15.0 {
        "Very little light-dark contrast"
    } else if contrast > 65.0 {
        "Stark light-dark contrast"
    } else {
        "Balanced light-dark contrast"
    };
    ScoreBreakdownItem::new("Contrast", points as u32, CONTRAST_MAX, detail)
}

fn saturation_points(colors: &[ColorRecord]) -> ScoreBreakdownItem {
    let saturation = saturations(colors);
    let average = mean(&saturation);
    let spread = std_dev(&saturation);

    let (average_center, average_spread) = SATURATION_AVERAGE_CURVE;
    let (spread_center, spread_spread) = SATURATION_SPREAD_CURVE;
    let points = (SATURATION_AVERAGE_POINTS * bell_curve(average, average_center, average_spread)
        + SATURATION_SPREAD_POINTS * bell_curve(spread, spread_center, spread_spread))
    .round();
    let detail = format!("Average saturation {:.0}%, spread {:.0}", average, spread);
    ScoreBreakdownItem::new("Saturation", points as u32, SATURATION_MAX, detail)
}

fn temperature_points(colors: &[ColorRecord]) -> ScoreBreakdownItem {
    let temperature = analyze_temperature(colors);
    let (points, detail) = if temperature.coherence >= 1.0 {
        (12, "Consistent color temperature")
    } else if temperature.coherence >= 0.6 {
        (8, "Mostly consistent color temperature")
    } else {
        (4, "Competing warm and cool tones")
    };
    ScoreBreakdownItem::new("Temperature", points, TEMPERATURE_MAX, detail)
}

fn neutral_points(colors: &[ColorRecord]) -> ScoreBreakdownItem {
    let neutrals = colors.iter().filter(|c| c.is_fashion_neutral()).count();
    let (points, detail) = match (neutrals, colors.len()) {
        (n, total) if n == total && total > 0 => (7, "All neutral"),
        (1, _) => (10, "One neutral anchors the look"),
        (2, _) => (9, "Two neutrals support one color"),
        (0, total) if total <= 2 => (6, "No neutral anchor"),
        _ => (4, "No neutral anchor among several colors"),
    };
    ScoreBreakdownItem::new("Neutrals", points, NEUTRAL_MAX, detail)
}

fn polish_points(colors: &[ColorRecord], harmony: &HarmonyResult) -> ScoreBreakdownItem {
    let mut points = POLISH_MAX as i32;
    let mut notes = Vec::new();

    let vivid = colors.iter().filter(|c| c.hsl.s > 70.0).count();
    if vivid >= 3 {
        points -= 6;
        notes.push("too many saturated pieces");
    }
    if avg_lightness_contrast(colors).is_some_and(|contrast| contrast < 15.0) {
        points -= 4;
        notes.push("low contrast");
    }
    if harmony.harmony_type == HarmonyType::ColorClash {
        points -= 5;
        notes.push("clashing hues");
    }

    let has_neutral = colors.iter().any(|c| c.is_neutral());
    if analyze_temperature(colors).is_mixed() && !has_neutral {
        points -= 3;
        notes.push("warm and cool without a neutral");
    }

    if colors.iter().any(|c| c.is_fashion_neutral()) && harmony.score >= 80 {
        points += 2;
    }
    if colors
        .get(2)
        .is_some_and(|shoes| shoes.is_fashion_neutral() || shoes.hsl.l < 25.0)
    {
        points += 1;
    }

    let points = points.clamp(0, POLISH_MAX as i32) as u32;
    let detail = if notes.is_empty() {
        "Clean, finished look".to_string()
    } else {
        format!("Deductions: {}", notes.join(", "))
    };
    ScoreBreakdownItem::new("Polish", points, POLISH_MAX, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;
    use crate::harmony::analyze_harmony;

    fn colors(hsls: &[(f64, f64, f64)]) -> Vec<ColorRecord> {
        hsls.iter()
            .map(|&(h, s, l)| ColorRecord::from_hsl(Hsl::new(h, s, l)))
            .collect()
    }

    fn score(hsls: &[(f64, f64, f64)]) -> ScoreResult {
        let colors = colors(hsls);
        let harmony = analyze_harmony(&colors);
        calculate_outfit_score(&colors, &harmony)
    }

    fn points(result: &ScoreResult, category: &str) -> u32 {
        result
            .breakdown
            .iter()
            .find(|item| item.category == category)
            .map(|item| item.points)
            .unwrap()
    }

    #[test]
    fn test_breakdown_has_six_categories() {
        let result = score(&[(220.0, 50.0, 25.0), (40.0, 25.0, 65.0), (0.0, 0.0, 8.0)]);
        assert_eq!(result.breakdown.len(), 6);
        let maxima: u32 = result.breakdown.iter().map(|item| item.max).sum();
        assert_eq!(maxima, 100);
        let sum: u32 = result.breakdown.iter().map(|item| item.points).sum();
        assert_eq!(result.total, sum.min(100));
    }

    #[test]
    fn test_harmony_points_scaled() {
        // Triadic 82 * 0.3 = 24.6
        let result = score(&[(0.0, 60.0, 50.0), (120.0, 60.0, 50.0), (240.0, 60.0, 50.0)]);
        assert_eq!(points(&result, "Harmony"), 25);
    }

    #[test]
    fn test_contrast_peaks_near_center() {
        let ideal = score(&[(0.0, 0.0, 30.0), (0.0, 0.0, 68.0)]);
        assert_eq!(points(&ideal, "Contrast"), 18);

        let flat = score(&[(0.0, 0.0, 50.0), (0.0, 0.0, 52.0)]);
        assert!(points(&flat, "Contrast") < 5);
    }

    #[test]
    fn test_neutral_tiers() {
        assert_eq!(points(&score(&[(0.0, 0.0, 5.0), (0.0, 0.0, 95.0)]), "Neutrals"), 7);
        assert_eq!(points(&score(&[(0.0, 70.0, 50.0), (0.0, 0.0, 5.0)]), "Neutrals"), 10);
        assert_eq!(
            points(&score(&[(0.0, 70.0, 50.0), (0.0, 0.0, 5.0), (0.0, 0.0, 95.0)]), "Neutrals"),
            9
        );
        assert_eq!(points(&score(&[(0.0, 70.0, 50.0), (120.0, 70.0, 50.0)]), "Neutrals"), 6);
        assert_eq!(
            points(&score(&[(0.0, 70.0, 50.0), (120.0, 70.0, 50.0), (280.0, 70.0, 50.0)]), "Neutrals"),
            4
        );
    }

    #[test]
    fn test_temperature_tiers() {
        assert_eq!(points(&score(&[(10.0, 60.0, 50.0), (40.0, 60.0, 30.0)]), "Temperature"), 12);
        assert_eq!(
            points(&score(&[(10.0, 60.0, 50.0), (40.0, 60.0, 30.0), (200.0, 60.0, 40.0)]), "Temperature"),
            8
        );
        assert_eq!(points(&score(&[(10.0, 60.0, 50.0), (200.0, 60.0, 30.0)]), "Temperature"), 4);
    }

    #[test]
    fn test_polish_penalties() {
        // Three vivid warm/cool hues at equal lightness, no neutral
        let loud = score(&[(0.0, 90.0, 50.0), (60.0, 90.0, 50.0), (200.0, 90.0, 50.0)]);
        let polish = points(&loud, "Polish");
        assert!(polish <= 15 - 6 - 4 - 3);

        let clean = score(&[(220.0, 50.0, 25.0), (0.0, 0.0, 95.0), (0.0, 0.0, 8.0)]);
        assert_eq!(points(&clean, "Polish"), 15);
    }

    #[test]
    fn test_single_color_stays_in_range() {
        let result = score(&[(120.0, 100.0, 50.0)]);
        assert!(result.total <= 100);
        let empty = score(&[]);
        assert!(empty.total <= 100);
    }
}
