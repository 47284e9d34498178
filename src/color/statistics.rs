//! Robust color statistics over sampled pixels
//!
//! - Per-channel trimmed mean for a representative color
//! - Quantized histogram bucketing for the most frequent colors
//!
//! Bucketing is deterministic: buckets keep first-seen order and are sorted
//! with a stable sort, so equal counts keep that order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::conversion::{rgb_to_hsl, to_hex, Hsl, Rgb};
use crate::constants::{extraction, sampling};

/// A frequent color within a sampled region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantColor {
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hex: String,
    /// Share of sampled pixels in this bucket (0.0-1.0)
    pub frequency: f64,
}

impl DominantColor {
    pub fn new(rgb: Rgb, frequency: f64) -> Self {
        Self {
            rgb,
            hsl: rgb_to_hsl(rgb),
            hex: to_hex(rgb),
            frequency,
        }
    }
}

/// Fallback color for regions without usable pixels
pub fn neutral_gray() -> Rgb {
    let [r, g, b] = sampling::NEUTRAL_GRAY;
    Rgb::new(r, g, b)
}

/// Median of an ascending slice; 0.0 for an empty slice
fn median(sorted: &[f64]) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2],
        n => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}

/// Mean after dropping `trim_ratio` of the values from each end
///
/// Falls back to the median when trimming leaves nothing, so the result is
/// never NaN.
pub fn trimmed_mean_with_ratio(values: &[f64], trim_ratio: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let trim = (sorted.len() as f64 * trim_ratio).floor() as usize;
    let kept = sorted.get(trim..sorted.len().saturating_sub(trim)).unwrap_or(&[]);

    if kept.is_empty() {
        return median(&sorted);
    }
    kept.iter().sum::<f64>() / kept.len() as f64
}

/// Mean after dropping 10% of the values from each end
pub fn trimmed_mean(values: &[f64]) -> f64 {
    trimmed_mean_with_ratio(values, extraction::TRIM_RATIO)
}

/// Representative color using a per-channel trimmed mean
pub fn extract_average_color_with_ratio(pixels: &[Rgb], trim_ratio: f64) -> Rgb {
    if pixels.is_empty() {
        return neutral_gray();
    }

    let channel = |select: fn(&Rgb) -> u8| {
        let values: Vec<f64> = pixels.iter().map(|p| select(p) as f64).collect();
        trimmed_mean_with_ratio(&values, trim_ratio).round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(channel(|p| p.red), channel(|p| p.green), channel(|p| p.blue))
}

/// Representative color using the default 10% trim
pub fn extract_average_color(pixels: &[Rgb]) -> Rgb {
    extract_average_color_with_ratio(pixels, extraction::TRIM_RATIO)
}

#[derive(Default)]
struct Bucket {
    sum: [u64; 3],
    count: usize,
}

/// Most frequent colors after quantizing each channel by `shift` bits
///
/// Each result is the mean of the pixels in its bucket, with frequency
/// relative to all pixels given. Shifts above 7 are treated as 7.
pub fn dominant_colors(pixels: &[Rgb], k: usize, shift: u8) -> Vec<DominantColor> {
    if pixels.is_empty() || k == 0 {
        return Vec::new();
    }

    let shift = shift.min(7);

    let mut buckets: IndexMap<(u8, u8, u8), Bucket> = IndexMap::new();
    for p in pixels {
        let key = (p.red >> shift, p.green >> shift, p.blue >> shift);
        let bucket = buckets.entry(key).or_default();
        bucket.sum[0] += p.red as u64;
        bucket.sum[1] += p.green as u64;
        bucket.sum[2] += p.blue as u64;
        bucket.count += 1;
    }

    log::trace!("{} pixels fell into {} color buckets", pixels.len(), buckets.len());

    let mut ranked: Vec<Bucket> = buckets.into_values().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let total = pixels.len() as f64;
    ranked
        .into_iter()
        .take(k)
        .map(|bucket| {
            let n = bucket.count as u64;
            let mean = |i: usize| ((bucket.sum[i] as f64) / n as f64).round() as u8;
            DominantColor::new(
                Rgb::new(mean(0), mean(1), mean(2)),
                bucket.count as f64 / total,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_mean_constant() {
        assert_eq!(trimmed_mean(&[50.0; 100]), 50.0);
    }

    #[test]
    fn test_trimmed_mean_empty_is_not_nan() {
        let mean = trimmed_mean(&[]);
        assert!(!mean.is_nan());
        assert_eq!(mean, 0.0);
    }

    #[test]
    fn test_trimmed_mean_drops_outliers() {
        let mut values = vec![100.0; 18];
        values.push(0.0);
        values.push(255.0);
        // 20 values: one dropped from each end
        assert_eq!(trimmed_mean(&values), 100.0);
    }

    #[test]
    fn test_trimmed_mean_small_inputs() {
        // Fewer than ten values trim nothing
        assert_eq!(trimmed_mean(&[1.0, 2.0, 6.0]), 3.0);
        assert_eq!(trimmed_mean(&[7.0]), 7.0);
    }

    #[test]
    fn test_trimmed_mean_full_trim_uses_median() {
        assert_eq!(trimmed_mean_with_ratio(&[1.0, 2.0, 9.0, 10.0], 0.5), 5.5);
        assert_eq!(trimmed_mean_with_ratio(&[1.0, 2.0, 9.0], 0.5), 2.0);
    }

    #[test]
    fn test_extract_average_color_empty_is_gray() {
        assert_eq!(extract_average_color(&[]), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_extract_average_color_ignores_specks() {
        let mut pixels = vec![Rgb::new(20, 40, 200); 45];
        pixels.push(Rgb::new(255, 255, 255));
        pixels.push(Rgb::new(255, 255, 255));
        pixels.push(Rgb::new(0, 0, 0));
        pixels.push(Rgb::new(0, 0, 0));
        pixels.push(Rgb::new(255, 255, 255));

        assert_eq!(extract_average_color(&pixels), Rgb::new(20, 40, 200));
    }

    #[test]
    fn test_dominant_colors_ranking() {
        let mut pixels = vec![Rgb::new(200, 10, 10); 6];
        pixels.extend(vec![Rgb::new(10, 10, 200); 3]);
        pixels.push(Rgb::new(10, 200, 10));

        let dominant = dominant_colors(&pixels, 2, 4);
        assert_eq!(dominant.len(), 2);
        assert_eq!(dominant[0].rgb, Rgb::new(200, 10, 10));
        assert!((dominant[0].frequency - 0.6).abs() < 1e-9);
        assert_eq!(dominant[1].rgb, Rgb::new(10, 10, 200));
        assert!((dominant[1].frequency - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_dominant_colors_bucket_mean() {
        // Same bucket with shift 4: 0xC0..0xCF
        let pixels = vec![Rgb::new(192, 0, 0), Rgb::new(200, 0, 0)];
        let dominant = dominant_colors(&pixels, 3, 4);
        assert_eq!(dominant.len(), 1);
        assert_eq!(dominant[0].rgb, Rgb::new(196, 0, 0));
        assert_eq!(dominant[0].frequency, 1.0);
    }

    #[test]
    fn test_dominant_colors_ties_keep_first_seen_order() {
        let pixels = vec![
            Rgb::new(10, 200, 10),
            Rgb::new(200, 10, 10),
            Rgb::new(200, 10, 10),
            Rgb::new(10, 200, 10),
            Rgb::new(10, 10, 200),
        ];

        let dominant = dominant_colors(&pixels, 3, 4);
        assert_eq!(dominant[0].rgb, Rgb::new(10, 200, 10));
        assert_eq!(dominant[1].rgb, Rgb::new(200, 10, 10));
        assert_eq!(dominant[2].rgb, Rgb::new(10, 10, 200));
    }

    #[test]
    fn test_dominant_colors_oversized_shift() {
        let pixels = vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(255, 255, 255)];

        // Seven bits leaves one bucket per channel half
        let dominant = dominant_colors(&pixels, 3, 8);
        assert_eq!(dominant, dominant_colors(&pixels, 3, 7));
        assert_eq!(dominant.len(), 2);
        assert_eq!(dominant[0].rgb, Rgb::new(255, 255, 255));
    }
}
