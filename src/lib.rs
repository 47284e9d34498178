//! # Outfit Colors
//!
//! A Rust crate for judging outfit colors from photographs.
//!
//! This library turns a person photo into a color-theory verdict by:
//! - Locating the body column and the top, bottom and shoes zones
//! - Extracting a robust color per garment, rejecting skin and outliers
//! - Classifying the harmony between the garment colors
//! - Scoring the outfit, grading it and reading its mood and confidence
//! - Suggesting improvements
//!
//! ## Example
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use outfit_colors::{analyze_outfit, AnalysisConfig, PixelBuffer};
//!
//! let image = RgbaImage::from_fn(120, 240, |_, y| {
//!     if y < 100 { Rgba([30, 45, 90, 255]) } else { Rgba([235, 235, 230, 255]) }
//! });
//! let buffer = PixelBuffer::from_image(&image);
//!
//! let analysis = analyze_outfit(&buffer, &AnalysisConfig::default());
//! println!(
//!     "{} ({}): {}/100, grade {}",
//!     analysis.harmony.harmony_type, analysis.mood.emoji, analysis.score.total, analysis.grade.letter
//! );
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod harmony;
pub mod pixel_buffer;
pub mod scoring;

pub use color::{calculate_contrast, ColorRecord, GarmentColorExtractor, Hsl, Rgb};
pub use config::AnalysisConfig;
pub use detection::{Zone, ZoneDetector, ZoneOptions};
pub use error::{AnalysisError, Result};
pub use harmony::{analyze_harmony, analyze_temperature, HarmonyResult, HarmonyType, TemperatureAnalysis};
pub use pixel_buffer::{PixelBuffer, Rect};
pub use scoring::{
    calculate_confidence, calculate_outfit_score, detect_mood, generate_suggestions, get_grade,
    Grade, Mood, MoodResult, ScoreResult,
};

/// One value per garment of an outfit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentSet<T> {
    pub top: T,
    pub bottom: T,
    pub shoes: T,
}

impl<T> GarmentSet<T> {
    pub fn new(top: T, bottom: T, shoes: T) -> Self {
        Self { top, bottom, shoes }
    }

    /// Transform each garment value, top to shoes
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> GarmentSet<U> {
        GarmentSet {
            top: f(self.top),
            bottom: f(self.bottom),
            shoes: f(self.shoes),
        }
    }

    /// Transform each garment value by reference, top to shoes
    pub fn map_ref<U>(&self, mut f: impl FnMut(&T) -> U) -> GarmentSet<U> {
        GarmentSet {
            top: f(&self.top),
            bottom: f(&self.bottom),
            shoes: f(&self.shoes),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.top, &self.bottom, &self.shoes].into_iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Complete judgment of one outfit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitAnalysis {
    /// Zone geometry, absent when colors were supplied directly
    pub zones: Option<GarmentSet<Zone>>,
    pub colors: GarmentSet<ColorRecord>,
    pub harmony: HarmonyResult,
    pub score: ScoreResult,
    pub grade: Grade,
    /// Outfit-level confidence, 0-100
    pub confidence: u32,
    pub mood: MoodResult,
    pub temperature: TemperatureAnalysis,
    pub suggestions: Vec<String>,
}

/// Garment zones of a person photo with default layout parameters
pub fn detect_zones(buffer: &PixelBuffer, options: ZoneOptions) -> GarmentSet<Zone> {
    ZoneDetector::new().detect(buffer, options)
}

/// Garment colors for previously detected zones with default extraction parameters
///
/// Zones without opaque pixels yield the neutral gray sentinel record.
pub fn extract_zone_colors(buffer: &PixelBuffer, zones: &GarmentSet<Zone>) -> GarmentSet<ColorRecord> {
    GarmentColorExtractor::new().extract_zone_colors(buffer, zones)
}

/// Run the whole pipeline on a person photo
///
/// Zones, garment colors, harmony, score, grade, confidence, mood,
/// temperature and suggestions in one pass.
pub fn analyze_outfit(buffer: &PixelBuffer, config: &AnalysisConfig) -> OutfitAnalysis {
    let detector = ZoneDetector::with_config(config.zones.clone(), config.body_detection.clone());
    let zones = detector.detect(
        buffer,
        ZoneOptions {
            smart_crop: config.zones.smart_crop,
        },
    );
    let colors = GarmentColorExtractor::from_config(config).extract_zone_colors(buffer, &zones);

    OutfitAnalysis {
        zones: Some(zones),
        ..analyze_colors(&colors)
    }
}

/// Judge garment colors that are already known, e.g. from a color picker
pub fn analyze_colors(colors: &GarmentSet<ColorRecord>) -> OutfitAnalysis {
    let list = colors.to_vec();

    let harmony = analyze_harmony(&list);
    let score = calculate_outfit_score(&list, &harmony);
    let grade = get_grade(score.total);
    let suggestions = generate_suggestions(&list, &harmony);

    log::debug!(
        "Outfit {} / {} / {}: {} -> {} ({})",
        colors.top.hex,
        colors.bottom.hex,
        colors.shoes.hex,
        harmony.harmony_type,
        score.total,
        grade.letter
    );

    OutfitAnalysis {
        zones: None,
        colors: colors.clone(),
        confidence: calculate_confidence(&list),
        mood: detect_mood(&list),
        temperature: analyze_temperature(&list),
        harmony,
        score,
        grade,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outfit(top: &str, bottom: &str, shoes: &str) -> GarmentSet<ColorRecord> {
        GarmentSet::new(top, bottom, shoes).map(|hex| ColorRecord::from_hex(hex).unwrap())
    }

    #[test]
    fn test_garment_set_order() {
        let set = GarmentSet::new(1, 2, 3);
        assert_eq!(set.to_vec(), vec![1, 2, 3]);
        assert_eq!(set.map_ref(|v| v * 10), GarmentSet::new(10, 20, 30));
        assert_eq!(set.iter().sum::<i32>(), 6);
    }

    #[test]
    fn test_analyze_colors() {
        // Navy top, white trousers, black shoes
        let analysis = analyze_colors(&outfit("#1B2A4A", "#F2F2F2", "#141414"));

        assert!(analysis.zones.is_none());
        assert_eq!(analysis.colors.top.name, "Navy");
        assert_eq!(analysis.harmony.harmony_type, HarmonyType::NeutralAnchored { pop: false });
        assert!(analysis.score.total >= 60, "score {}", analysis.score.total);
        assert_eq!(analysis.grade, get_grade(analysis.score.total));
        assert!(analysis.suggestions.is_empty());
        assert!(analysis.confidence <= 100);
    }

    #[test]
    fn test_analysis_serialization() {
        let analysis = analyze_colors(&outfit("#C0392B", "#2C3E50", "#7F8C8D"));

        let json = serde_json::to_string(&analysis).unwrap();
        let deserialized: OutfitAnalysis = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.colors.top.hex, "#C0392B");
        assert_eq!(deserialized.harmony.harmony_type, analysis.harmony.harmony_type);
        assert_eq!(deserialized.score, analysis.score);
        assert_eq!(deserialized.grade, analysis.grade);
        assert_eq!(deserialized.mood, analysis.mood);
        assert_eq!(deserialized.suggestions, analysis.suggestions);
    }
}
