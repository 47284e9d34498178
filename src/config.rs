//! Configuration structures for the outfit analysis pipeline.
//!
//! This module defines all tunable parameters for garment color analysis,
//! organized into logical groups for sampling, skin filtering, zone layout,
//! body detection, color extraction and pattern detection.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use outfit_colors::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), outfit_colors::AnalysisError>(())
//! ```
//!
//! Every section carries `#[serde(default)]`, so a file only needs to name
//! the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::skin::SkinRange;
use crate::constants::{body, extraction, pattern, sampling, zones};
use crate::{AnalysisError, Result};

/// Complete pipeline configuration for outfit analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Pixel sampling configuration
    pub sampling: SamplingConfig,

    /// Skin tone rejection configuration
    pub skin: SkinFilterConfig,

    /// Garment zone layout
    pub zones: ZoneConfig,

    /// Body column detection configuration
    pub body_detection: BodyDetectionConfig,

    /// Color extraction configuration
    pub extraction: ExtractionConfig,

    /// Pattern detection configuration
    pub pattern: PatternConfig,
}

/// Fixed-stride pixel sampling with transparency filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Sample every `stride`th pixel horizontally and vertically
    pub stride: u32,

    /// Pixels with alpha below this value are skipped
    pub min_alpha: u8,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            stride: sampling::STRIDE,
            min_alpha: sampling::MIN_ALPHA,
        }
    }
}

/// Skin tone ranges rejected from garment samples.
///
/// Ranges are data: additional skin tones are supported by appending a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinFilterConfig {
    pub ranges: Vec<SkinRange>,
}

impl Default for SkinFilterConfig {
    fn default() -> Self {
        Self {
            ranges: SkinRange::defaults(),
        }
    }
}

/// A vertical band of the image as fractions of its height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub start: f64,
    pub end: f64,
}

impl Band {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Garment zone layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    pub top: Band,
    pub bottom: Band,
    pub shoes: Band,

    /// Vertical inset applied on each side of a band before sampling
    pub inset_ratio: f64,

    /// Width of the centered column used when body detection is unavailable
    pub center_fallback_ratio: f64,

    /// Use body column detection to narrow the horizontal sampling range
    pub smart_crop: bool,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            top: Band::new(zones::TOP.0, zones::TOP.1),
            bottom: Band::new(zones::BOTTOM.0, zones::BOTTOM.1),
            shoes: Band::new(zones::SHOES.0, zones::SHOES.1),
            inset_ratio: zones::INSET_RATIO,
            center_fallback_ratio: zones::CENTER_FALLBACK_RATIO,
            smart_crop: true,
        }
    }
}

/// Edge-density body column detection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyDetectionConfig {
    /// Top of the analysed strip as fraction of image height
    pub strip_start: f64,

    /// Bottom of the analysed strip as fraction of image height
    pub strip_end: f64,

    /// Row subsampling within the strip
    pub row_stride: u32,

    /// Sliding window width as fraction of image width
    pub window_ratio: f64,

    /// Minimum mean gradient per column for a detection
    pub min_edge_strength: f64,

    /// Padding on each side of the detected window as fraction of image width
    pub padding_ratio: f64,

    pub min_strip_height: u32,
    pub min_width: u32,
}

impl Default for BodyDetectionConfig {
    fn default() -> Self {
        Self {
            strip_start: body::STRIP_START,
            strip_end: body::STRIP_END,
            row_stride: body::ROW_STRIDE,
            window_ratio: body::WINDOW_RATIO,
            min_edge_strength: body::MIN_EDGE_STRENGTH,
            padding_ratio: body::PADDING_RATIO,
            min_strip_height: body::MIN_STRIP_HEIGHT,
            min_width: body::MIN_WIDTH,
        }
    }
}

/// Representative color extraction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fraction trimmed from each end of each channel before averaging
    pub trim_ratio: f64,

    /// Number of dominant colors reported
    pub dominant_count: usize,

    /// Right shift applied to channels before bucketing
    pub quantization_shift: u8,

    /// Maximum pixels used for the consistency score
    pub consistency_sample_cap: usize,

    /// RGB distance mapped to zero consistency
    pub max_expected_distance: f64,

    /// Sample count mapped to full sample-size confidence
    pub full_sample_size: usize,

    /// Skin filter survival rate mapped to full confidence
    pub skin_survival_target: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            trim_ratio: extraction::TRIM_RATIO,
            dominant_count: extraction::DOMINANT_COUNT,
            quantization_shift: extraction::QUANTIZATION_SHIFT,
            consistency_sample_cap: extraction::CONSISTENCY_SAMPLE_CAP,
            max_expected_distance: extraction::MAX_EXPECTED_DISTANCE,
            full_sample_size: extraction::FULL_SAMPLE_SIZE,
            skin_survival_target: extraction::SKIN_SURVIVAL_TARGET,
        }
    }
}

/// Two-color pattern detection thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Frequency the most common color must exceed
    pub primary_min_frequency: f64,

    /// Frequency the second most common color must exceed
    pub secondary_min_frequency: f64,

    /// Hue difference (degrees) above which two colors are distinct
    pub hue_threshold: f64,

    /// Lightness difference above which two colors are distinct
    pub lightness_threshold: f64,

    /// Saturation difference above which two colors are distinct
    pub saturation_threshold: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            primary_min_frequency: pattern::PRIMARY_MIN_FREQUENCY,
            secondary_min_frequency: pattern::SECONDARY_MIN_FREQUENCY,
            hue_threshold: pattern::HUE_THRESHOLD,
            lightness_threshold: pattern::LIGHTNESS_THRESHOLD,
            saturation_threshold: pattern::SATURATION_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check that every parameter is inside its meaningful range
    pub fn validate(&self) -> Result<()> {
        if self.sampling.stride == 0 {
            return Err(AnalysisError::invalid_parameter("sampling.stride", 0));
        }
        if self.body_detection.row_stride == 0 {
            return Err(AnalysisError::invalid_parameter("body_detection.row_stride", 0));
        }

        for (name, band) in [
            ("zones.top", self.zones.top),
            ("zones.bottom", self.zones.bottom),
            ("zones.shoes", self.zones.shoes),
        ] {
            if !(0.0..=1.0).contains(&band.start)
                || !(0.0..=1.0).contains(&band.end)
                || band.start >= band.end
            {
                return Err(AnalysisError::invalid_parameter(
                    name,
                    format!("{}..{}", band.start, band.end),
                ));
            }
        }

        let ratios = [
            ("zones.inset_ratio", self.zones.inset_ratio, 0.0, 0.5),
            ("zones.center_fallback_ratio", self.zones.center_fallback_ratio, 0.0, 1.0),
            ("body_detection.strip_start", self.body_detection.strip_start, 0.0, 1.0),
            ("body_detection.strip_end", self.body_detection.strip_end, 0.0, 1.0),
            ("body_detection.window_ratio", self.body_detection.window_ratio, 0.0, 1.0),
            ("body_detection.padding_ratio", self.body_detection.padding_ratio, 0.0, 0.5),
            ("extraction.trim_ratio", self.extraction.trim_ratio, 0.0, 0.5),
            ("extraction.skin_survival_target", self.extraction.skin_survival_target, 0.0, 1.0),
        ];
        for (name, value, min, max) in ratios {
            if !(min..=max).contains(&value) {
                return Err(AnalysisError::invalid_parameter(name, value));
            }
        }

        if self.body_detection.strip_start >= self.body_detection.strip_end {
            return Err(AnalysisError::invalid_parameter(
                "body_detection.strip_end",
                self.body_detection.strip_end,
            ));
        }
        if self.extraction.quantization_shift > 7 {
            return Err(AnalysisError::invalid_parameter(
                "extraction.quantization_shift",
                self.extraction.quantization_shift,
            ));
        }
        if self.extraction.max_expected_distance <= 0.0 {
            return Err(AnalysisError::invalid_parameter(
                "extraction.max_expected_distance",
                self.extraction.max_expected_distance,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sampling.stride, 4);
        assert_eq!(config.skin.ranges.len(), 2);
        assert!(config.zones.smart_crop);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "sampling": { "stride": 2 }, "zones": { "smart_crop": false } }"#;
        let config: AnalysisConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.sampling.stride, 2);
        assert_eq!(config.sampling.min_alpha, 128);
        assert!(!config.zones.smart_crop);
        assert_eq!(config.zones.top, Band::new(0.08, 0.42));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AnalysisConfig::default();
        config.sampling.stride = 0;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.zones.bottom = Band::new(0.8, 0.4);
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.extraction.trim_ratio = 0.75;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "outfit_colors_config_{}.json",
            std::process::id()
        ));

        let mut config = AnalysisConfig::default();
        config.pattern.hue_threshold = 30.0;
        config.to_json_file(&path).unwrap();

        let loaded = AnalysisConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AnalysisConfig::from_json_file(Path::new("/nonexistent/outfit.json"));
        assert!(matches!(result, Err(AnalysisError::ConfigIo(_))));
    }
}
