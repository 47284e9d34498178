//! Skin tone rejection for garment samples
//!
//! Arms, necks and hands bleed into garment zones. Pixels whose HSL falls in
//! any configured skin range are dropped before color extraction.

use serde::{Deserialize, Serialize};

use super::conversion::{rgb_to_hsl, Hsl, Rgb};

/// Inclusive HSL ranges approximating one group of skin tones
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinRange {
    pub hue: (f64, f64),
    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
}

impl SkinRange {
    pub fn new(hue: (f64, f64), saturation: (f64, f64), lightness: (f64, f64)) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Light/medium and darker skin tones
    pub fn defaults() -> Vec<SkinRange> {
        vec![
            SkinRange::new((5.0, 45.0), (15.0, 70.0), (20.0, 80.0)),
            SkinRange::new((15.0, 40.0), (20.0, 60.0), (10.0, 50.0)),
        ]
    }

    pub fn contains(&self, hsl: &Hsl) -> bool {
        (self.hue.0..=self.hue.1).contains(&hsl.h)
            && (self.saturation.0..=self.saturation.1).contains(&hsl.s)
            && (self.lightness.0..=self.lightness.1).contains(&hsl.l)
    }
}

/// Classifies pixels against a set of skin ranges
#[derive(Debug, Clone, PartialEq)]
pub struct SkinFilter {
    ranges: Vec<SkinRange>,
}

impl Default for SkinFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SkinFilter {
    /// Create a skin filter with the default ranges
    pub fn new() -> Self {
        Self::with_ranges(SkinRange::defaults())
    }

    /// Create a skin filter with custom ranges
    pub fn with_ranges(ranges: Vec<SkinRange>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[SkinRange] {
        &self.ranges
    }

    pub fn is_skin_color(&self, pixel: Rgb) -> bool {
        let hsl = rgb_to_hsl(pixel);
        self.ranges.iter().any(|range| range.contains(&hsl))
    }

    /// Keep only pixels that are not skin-toned
    pub fn reject_skin_pixels(&self, pixels: &[Rgb]) -> Vec<Rgb> {
        pixels
            .iter()
            .copied()
            .filter(|p| !self.is_skin_color(*p))
            .collect()
    }
}
