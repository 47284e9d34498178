//! Garment color extraction
//!
//! Extracts a representative color per garment zone with:
//! - Fixed-stride sampling with transparency filtering
//! - Skin tone rejection
//! - Trimmed-mean aggregation and dominant color bucketing
//! - Two-color pattern detection
//! - Confidence scoring from skin survival, consistency and sample size

use super::conversion::{hue_difference, Rgb};
use super::record::ColorRecord;
use super::skin::SkinFilter;
use super::statistics::{dominant_colors, extract_average_color_with_ratio, DominantColor};
use crate::config::{AnalysisConfig, ExtractionConfig, PatternConfig, SamplingConfig};
use crate::constants::extraction::CONFIDENCE_WEIGHTS;
use crate::detection::Zone;
use crate::pixel_buffer::{PixelBuffer, Rect};
use crate::GarmentSet;

/// Garment color extractor
#[derive(Debug, Clone, Default)]
pub struct GarmentColorExtractor {
    sampling: SamplingConfig,
    skin_filter: SkinFilter,
    extraction: ExtractionConfig,
    pattern: PatternConfig,
}

impl GarmentColorExtractor {
    /// Create an extractor with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from the relevant sections of a pipeline config
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            sampling: config.sampling.clone(),
            skin_filter: SkinFilter::with_ranges(config.skin.ranges.clone()),
            extraction: config.extraction.clone(),
            pattern: config.pattern.clone(),
        }
    }

    /// Colors for all three garment zones
    pub fn extract_zone_colors(
        &self,
        buffer: &PixelBuffer,
        zones: &GarmentSet<Zone>,
    ) -> GarmentSet<ColorRecord> {
        zones.map_ref(|zone| {
            let record = self.extract_region(buffer, zone.sampling_rect);
            log::debug!(
                "{} zone: {} {} (confidence {:.2}, pattern {})",
                zone.label,
                record.hex,
                record.name,
                record.confidence,
                record.is_pattern
            );
            record
        })
    }

    /// Representative color of one rectangle
    ///
    /// Regions without opaque pixels yield the neutral gray sentinel.
    pub fn extract_region(&self, buffer: &PixelBuffer, rect: Rect) -> ColorRecord {
        let pixels = buffer.sample_region(rect, self.sampling.stride, self.sampling.min_alpha);
        self.extract_from_pixels(&pixels)
    }

    /// Representative color of an already sampled pixel list
    pub fn extract_from_pixels(&self, pixels: &[Rgb]) -> ColorRecord {
        if pixels.is_empty() {
            return ColorRecord::sentinel();
        }

        let filtered = self.skin_filter.reject_skin_pixels(pixels);
        let survival = filtered.len() as f64 / pixels.len() as f64;
        let working: &[Rgb] = if filtered.is_empty() { pixels } else { &filtered };

        let rgb = extract_average_color_with_ratio(working, self.extraction.trim_ratio);
        let dominant = dominant_colors(
            working,
            self.extraction.dominant_count,
            self.extraction.quantization_shift,
        );
        let is_pattern = self.detect_pattern(&dominant);
        let confidence = self.confidence(survival, working, rgb);

        log::trace!(
            "{} samples, {:.0}% survived skin filter",
            pixels.len(),
            survival * 100.0
        );

        ColorRecord {
            confidence,
            dominant_colors: dominant,
            is_pattern,
            ..ColorRecord::from_rgb(rgb)
        }
    }

    /// Two frequent and visually distinct colors mean a patterned garment
    pub fn detect_pattern(&self, dominant: &[DominantColor]) -> bool {
        let [first, second, ..] = dominant else {
            return false;
        };

        if first.frequency <= self.pattern.primary_min_frequency
            || second.frequency <= self.pattern.secondary_min_frequency
        {
            return false;
        }

        hue_difference(first.hsl.h, second.hsl.h) > self.pattern.hue_threshold
            || (first.hsl.l - second.hsl.l).abs() > self.pattern.lightness_threshold
            || (first.hsl.s - second.hsl.s).abs() > self.pattern.saturation_threshold
    }

    /// Weighted confidence in [0, 1], rounded to two decimals
    fn confidence(&self, survival: f64, working: &[Rgb], color: Rgb) -> f64 {
        let survival_score = (survival / self.extraction.skin_survival_target).min(1.0);

        let cap = self.extraction.consistency_sample_cap.max(1);
        let step = (working.len() / cap).max(1);
        let distances: Vec<f64> = working
            .iter()
            .step_by(step)
            .take(cap)
            .map(|p| rgb_distance(*p, color))
            .collect();
        let mean_distance = distances.iter().sum::<f64>() / distances.len().max(1) as f64;
        let consistency_score =
            (1.0 - mean_distance / self.extraction.max_expected_distance).clamp(0.0, 1.0);

        let size_score =
            (working.len() as f64 / self.extraction.full_sample_size.max(1) as f64).min(1.0);

        let confidence = CONFIDENCE_WEIGHTS[0] * survival_score
            + CONFIDENCE_WEIGHTS[1] * consistency_score
            + CONFIDENCE_WEIGHTS[2] * size_score;

        ((confidence * 100.0).round() / 100.0).clamp(0.0, 1.0)
    }
}

/// Euclidean distance in RGB space
fn rgb_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a.red as f64 - b.red as f64;
    let dg = a.green as f64 - b.green as f64;
    let db = a.blue as f64 - b.blue as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::conversion::{hsl_to_rgb, Hsl};
    use image::{Rgba, RgbaImage};

    fn dominant(h: f64, s: f64, l: f64, frequency: f64) -> DominantColor {
        DominantColor::new(hsl_to_rgb(Hsl::new(h, s, l)), frequency)
    }

    #[test]
    fn test_pattern_with_distinct_hues() {
        let extractor = GarmentColorExtractor::new();
        let colors = vec![dominant(200.0, 60.0, 50.0, 0.3), dominant(240.0, 60.0, 50.0, 0.2)];
        assert!(extractor.detect_pattern(&colors));
    }

    #[test]
    fn test_no_pattern_for_similar_colors() {
        let extractor = GarmentColorExtractor::new();
        let colors = vec![dominant(200.0, 60.0, 50.0, 0.3), dominant(205.0, 65.0, 55.0, 0.2)];
        assert!(!extractor.detect_pattern(&colors));
    }

    #[test]
    fn test_no_pattern_for_rare_second_color() {
        let extractor = GarmentColorExtractor::new();
        let colors = vec![dominant(0.0, 0.0, 10.0, 0.8), dominant(0.0, 0.0, 90.0, 0.15)];
        assert!(!extractor.detect_pattern(&colors));
        assert!(!extractor.detect_pattern(&colors[..1]));
    }

    #[test]
    fn test_empty_region_is_sentinel() {
        let extractor = GarmentColorExtractor::new();
        let record = extractor.extract_from_pixels(&[]);
        assert_eq!(record.rgb, Rgb::new(128, 128, 128));
        assert_eq!(record.confidence, 0.0);
    }

    #[test]
    fn test_uniform_region_high_confidence() {
        let image = RgbaImage::from_pixel(80, 80, Rgba([20, 40, 160, 255]));
        let buffer = PixelBuffer::from_image(&image);

        let record = GarmentColorExtractor::new().extract_region(&buffer, Rect::new(0, 0, 80, 80));

        assert_eq!(record.rgb, Rgb::new(20, 40, 160));
        assert_eq!(record.confidence, 1.0);
        assert!(!record.is_pattern);
        assert_eq!(record.dominant_colors.len(), 1);
        assert_eq!(record.dominant_colors[0].frequency, 1.0);
    }

    #[test]
    fn test_skin_pixels_are_removed() {
        // Left half skin, right half navy shirt
        let image = RgbaImage::from_fn(40, 40, |x, _| {
            if x < 20 {
                Rgba([229, 194, 159, 255])
            } else {
                Rgba([25, 35, 80, 255])
            }
        });
        let buffer = PixelBuffer::from_image(&image);

        let record = GarmentColorExtractor::new().extract_region(&buffer, Rect::new(0, 0, 40, 40));

        assert_eq!(record.rgb, Rgb::new(25, 35, 80));
        // Half the samples survived: survival score saturates
        assert!(record.confidence > 0.5);
    }

    #[test]
    fn test_all_skin_falls_back_to_unfiltered() {
        let pixels = vec![Rgb::new(229, 194, 159); 50];
        let record = GarmentColorExtractor::new().extract_from_pixels(&pixels);

        assert_eq!(record.rgb, Rgb::new(229, 194, 159));
        // survival 0, consistency 1, size 0.5
        assert_eq!(record.confidence, 0.5);
    }

    #[test]
    fn test_striped_garment_is_pattern() {
        let image = RgbaImage::from_fn(40, 40, |_, y| {
            if (y / 4) % 2 == 0 {
                Rgba([240, 240, 240, 255])
            } else {
                Rgba([20, 30, 120, 255])
            }
        });
        let buffer = PixelBuffer::from_image(&image);

        let record = GarmentColorExtractor::new().extract_region(&buffer, Rect::new(0, 0, 40, 40));
        assert!(record.is_pattern);
        assert!(record.confidence < 1.0);
    }
}
