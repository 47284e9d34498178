//! Per-garment color record

use serde::{Deserialize, Serialize};

use super::conversion::{hsl_to_rgb, is_fashion_neutral, is_neutral, parse_hex, rgb_to_hsl, to_hex, Hsl, Rgb};
use super::naming::get_color_description;
use super::statistics::{neutral_gray, DominantColor};
use crate::Result;

/// Representative color of one garment, created once per analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub rgb: Rgb,
    pub hsl: Hsl,
    /// Uppercase "#RRGGBB"
    pub hex: String,
    /// Fashion color name, e.g. "Navy" or "Muted Green"
    pub name: String,
    /// Extraction confidence (0.0 = low, 1.0 = high)
    pub confidence: f64,
    /// Most frequent colors in the sampled region, most frequent first
    pub dominant_colors: Vec<DominantColor>,
    /// Two distinct colors share the garment (stripes, prints, color blocks)
    pub is_pattern: bool,
}

impl ColorRecord {
    /// Record for a color given directly, e.g. from a color picker
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hsl = rgb_to_hsl(rgb);
        Self {
            rgb,
            hsl,
            hex: to_hex(rgb),
            name: get_color_description(&hsl),
            confidence: 1.0,
            dominant_colors: Vec::new(),
            is_pattern: false,
        }
    }

    /// Record that keeps the given HSL exactly and derives RGB from it
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb = hsl_to_rgb(hsl);
        Self {
            rgb,
            hsl,
            hex: to_hex(rgb),
            name: get_color_description(&hsl),
            confidence: 1.0,
            dominant_colors: Vec::new(),
            is_pattern: false,
        }
    }

    /// Record parsed from a "#RRGGBB" string
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb(parse_hex(hex)?))
    }

    /// Sentinel returned when a zone yields no usable pixels
    pub fn sentinel() -> Self {
        Self {
            confidence: 0.0,
            ..Self::from_rgb(neutral_gray())
        }
    }

    pub fn is_neutral(&self) -> bool {
        is_neutral(&self.hsl)
    }

    pub fn is_fashion_neutral(&self) -> bool {
        is_fashion_neutral(&self.hsl)
    }
}
