//! Improvement suggestions
//!
//! Each rule inspects the outfit colors and harmony result independently and
//! contributes at most one fixed sentence. Several rules may fire at once.

use indexmap::IndexSet;

use super::stats::avg_lightness_contrast;
use crate::color::ColorRecord;
use crate::harmony::{analyze_temperature, HarmonyResult, HarmonyType};

pub const ADD_NEUTRAL: &str =
    "Add a neutral piece such as black, white, gray, navy or beige to anchor the outfit.";
pub const MATCH_TEMPERATURE: &str =
    "Warm and cool tones are competing; put a neutral between them or swap one piece to match the others.";
pub const ADD_CONTRAST: &str = "Add contrast by pairing a lighter piece with a darker one.";
pub const TONE_DOWN: &str =
    "Tone it down: swap one saturated piece for a muted or neutral shade.";
pub const RESOLVE_CLASH: &str =
    "These hues clash; keep one bold color and let the other pieces go neutral.";
pub const ADD_ACCENT: &str = "Consider one accent color to bring the neutral outfit to life.";
pub const VARY_SHADES: &str =
    "Vary the shades: mix lighter and darker tones of the same color for depth.";

/// Suggestions for the outfit, in rule order and without repeats
pub fn generate_suggestions(colors: &[ColorRecord], harmony: &HarmonyResult) -> Vec<String> {
    let mut suggestions = IndexSet::new();

    let neutral_count = colors.iter().filter(|c| c.is_neutral()).count();
    let fashion_neutral_count = colors.iter().filter(|c| c.is_fashion_neutral()).count();
    let chromatic_count = colors.len() - neutral_count;

    if fashion_neutral_count == 0 && chromatic_count >= 2 {
        suggestions.insert(ADD_NEUTRAL);
    }
    if analyze_temperature(colors).is_mixed() && neutral_count == 0 {
        suggestions.insert(MATCH_TEMPERATURE);
    }
    if avg_lightness_contrast(colors).is_some_and(|contrast| contrast < 15.0) {
        suggestions.insert(ADD_CONTRAST);
    }
    if colors.iter().filter(|c| c.hsl.s > 70.0).count() >= 3 {
        suggestions.insert(TONE_DOWN);
    }
    if harmony.harmony_type == HarmonyType::ColorClash {
        suggestions.insert(RESOLVE_CLASH);
    }
    if !colors.is_empty() && neutral_count == colors.len() {
        suggestions.insert(ADD_ACCENT);
    }
    if harmony.harmony_type == (HarmonyType::Monochromatic { flat: true }) {
        suggestions.insert(VARY_SHADES);
    }

    log::debug!("{} suggestion(s)", suggestions.len());
    suggestions.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;
    use crate::harmony::analyze_harmony;

    fn suggest(hsls: &[(f64, f64, f64)]) -> Vec<String> {
        let colors: Vec<ColorRecord> = hsls
            .iter()
            .map(|&(h, s, l)| ColorRecord::from_hsl(Hsl::new(h, s, l)))
            .collect();
        let harmony = analyze_harmony(&colors);
        generate_suggestions(&colors, &harmony)
    }

    #[test]
    fn test_well_balanced_outfit_has_none() {
        // Navy, white, black
        assert!(suggest(&[(220.0, 50.0, 25.0), (0.0, 0.0, 95.0), (0.0, 0.0, 8.0)]).is_empty());
    }

    #[test]
    fn test_flat_monochrome() {
        let suggestions = suggest(&[(220.0, 80.0, 20.0); 3]);
        // Three saturated pieces at equal lightness with no neutral
        assert_eq!(
            suggestions,
            vec![ADD_NEUTRAL, ADD_CONTRAST, TONE_DOWN, VARY_SHADES]
        );
    }

    #[test]
    fn test_all_neutral() {
        let suggestions = suggest(&[(0.0, 0.0, 5.0), (0.0, 0.0, 95.0), (0.0, 0.0, 50.0)]);
        assert_eq!(suggestions, vec![ADD_ACCENT]);
    }

    #[test]
    fn test_clash_and_temperature() {
        // Yellow (warm) against cyan (cool), saturated, same lightness
        let suggestions = suggest(&[(60.0, 70.0, 50.0), (170.0, 70.0, 50.0)]);
        assert_eq!(
            suggestions,
            vec![ADD_NEUTRAL, MATCH_TEMPERATURE, ADD_CONTRAST, RESOLVE_CLASH]
        );
    }

    #[test]
    fn test_no_duplicates() {
        let suggestions = suggest(&[(0.0, 90.0, 50.0), (60.0, 90.0, 50.0), (200.0, 90.0, 50.0)]);
        let unique: IndexSet<&String> = suggestions.iter().collect();
        assert_eq!(unique.len(), suggestions.len());
    }
}
