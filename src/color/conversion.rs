//! Color model utilities
//!
//! Provides the color math every other stage relies on:
//! - sRGB (8-bit) to HSL and back
//! - WCAG relative luminance and contrast ratio
//! - Circular hue distance and warm/cool hue families
//! - Neutral and fashion-neutral classification
//! - Hex color representation
//!
//! HSL values are whole numbers: hue in degrees [0, 360), saturation and
//! lightness in percent [0, 100].

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::constants::{neutral, temperature};
use crate::{AnalysisError, Result};

/// 8-bit sRGB color
pub type Rgb = Srgb<u8>;

/// HSL color with rounded components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees [0, 360)
    pub h: f64,
    /// Saturation in percent [0, 100]
    pub s: f64,
    /// Lightness in percent [0, 100]
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }
}

/// An HSL box used by the fashion-neutral classifier (inclusive bounds)
struct HslBox {
    hue: (f64, f64),
    saturation: (f64, f64),
    lightness: (f64, f64),
}

impl HslBox {
    fn contains(&self, hsl: &Hsl) -> bool {
        (self.hue.0..=self.hue.1).contains(&hsl.h)
            && (self.saturation.0..=self.saturation.1).contains(&hsl.s)
            && (self.lightness.0..=self.lightness.1).contains(&hsl.l)
    }
}

/// Navy, khaki, olive and brown: hued colors styled as neutrals
const FASHION_NEUTRAL_BOXES: [HslBox; 4] = [
    // navy
    HslBox { hue: (210.0, 250.0), saturation: (20.0, 60.0), lightness: (10.0, 30.0) },
    // khaki
    HslBox { hue: (30.0, 55.0), saturation: (10.0, 40.0), lightness: (50.0, 80.0) },
    // olive
    HslBox { hue: (60.0, 100.0), saturation: (15.0, 45.0), lightness: (20.0, 45.0) },
    // brown
    HslBox { hue: (15.0, 40.0), saturation: (20.0, 60.0), lightness: (15.0, 40.0) },
];

/// Convert 8-bit RGB to HSL
///
/// Hue is rounded to the nearest degree and wrapped into [0, 360);
/// saturation and lightness are rounded to the nearest percent.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.red as f64 / 255.0;
    let g = rgb.green as f64 / 255.0;
    let b = rgb.blue as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: (l * 100.0).round(),
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sector / 6.0;

    Hsl {
        h: (h * 360.0).round().rem_euclid(360.0),
        s: (s * 100.0).round(),
        l: (l * 100.0).round(),
    }
}

/// Convert HSL back to 8-bit RGB
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// WCAG 2.x relative luminance in [0, 1]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let linear = |channel: u8| {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(rgb.red) + 0.7152 * linear(rgb.green) + 0.0722 * linear(rgb.blue)
}

/// WCAG contrast ratio in [1, 21]
pub fn calculate_contrast(c1: Rgb, c2: Rgb) -> f64 {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// Circular hue distance in [0, 180]
pub fn hue_difference(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).abs().rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Reds, oranges, yellows and magentas
pub fn is_warm_hue(h: f64) -> bool {
    h < temperature::WARM_END || h >= temperature::WARM_WRAP_START
}

/// Cyans, blues and violets
pub fn is_cool_hue(h: f64) -> bool {
    (temperature::COOL_START..temperature::COOL_END).contains(&h)
}

/// Grays, near-blacks and near-whites
pub fn is_neutral(hsl: &Hsl) -> bool {
    hsl.s < neutral::MAX_SATURATION
        || ((hsl.l < neutral::DARK_LIGHTNESS || hsl.l > neutral::LIGHT_LIGHTNESS)
            && hsl.s < neutral::EXTREME_MAX_SATURATION)
}

/// Neutral, or one of the hued colors treated as neutral in styling
/// (navy, khaki, olive, brown)
pub fn is_fashion_neutral(hsl: &Hsl) -> bool {
    is_neutral(hsl) || FASHION_NEUTRAL_BOXES.iter().any(|b| b.contains(hsl))
}

/// Convert RGB to an uppercase hex string (e.g. "#FF0000")
pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

/// Parse a hex color string ("#FF0000" or "FF0000")
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || AnalysisError::InvalidHex {
        value: hex.to_string(),
    };

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn test_rgb_to_hsl_hue_never_reaches_360() {
        // Raw hue is 359.76 degrees, which rounds to 360
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert_eq!(hsl.h, 0.0);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 25.0)), Rgb::new(0, 128, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 100.0)), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_hsl_roundtrip_grid() {
        // Rounding HSL to whole units bounds the error at 5 per channel
        let within = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 5;
        for r in 0..=255u8 {
            for g in (0..=255u8).step_by(2) {
                for b in (0..=255u8).step_by(2) {
                    let rgb = Rgb::new(r, g, b);
                    let back = hsl_to_rgb(rgb_to_hsl(rgb));
                    assert!(
                        within(back.red, r) && within(back.green, g) && within(back.blue, b),
                        "{:?} -> {:?}",
                        rgb,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsl_roundtrip_worst_case() {
        let rgb = Rgb::new(2, 228, 230);
        let hsl = rgb_to_hsl(rgb);
        assert_eq!((hsl.h, hsl.s, hsl.l), (181.0, 98.0, 45.0));
        assert_eq!(hsl_to_rgb(hsl), Rgb::new(2, 223, 227));
    }

    #[test]
    fn test_hsl_matches_palette_inverse() {
        use palette::FromColor;

        for (r, g, b) in [(200, 30, 60), (12, 80, 160), (240, 220, 90), (60, 60, 61)] {
            let hsl = rgb_to_hsl(Rgb::new(r, g, b));
            let reference =
                palette::Hsl::new_srgb(hsl.h as f32, hsl.s as f32 / 100.0, hsl.l as f32 / 100.0);
            let linear: palette::Srgb<f32> = palette::Srgb::from_color(reference);
            let expected: Rgb = linear.into_format();
            let actual = hsl_to_rgb(hsl);

            assert!((actual.red as i32 - expected.red as i32).abs() <= 1);
            assert!((actual.green as i32 - expected.green as i32).abs() <= 1);
            assert!((actual.blue as i32 - expected.blue as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_contrast_black_white() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(calculate_contrast(black, white), 21.0);
        assert_eq!(calculate_contrast(white, black), 21.0);
    }

    #[test]
    fn test_contrast_same_color() {
        let teal = Rgb::new(0, 128, 128);
        assert_eq!(calculate_contrast(teal, teal), 1.0);
    }

    #[test]
    fn test_hue_difference() {
        assert_eq!(hue_difference(350.0, 10.0), 20.0);
        assert_eq!(hue_difference(0.0, 180.0), 180.0);
        assert_eq!(hue_difference(90.0, 90.0), 0.0);
        assert_eq!(hue_difference(10.0, 300.0), 70.0);
    }

    #[test]
    fn test_temperature_families() {
        assert!(is_warm_hue(0.0));
        assert!(is_warm_hue(69.0));
        assert!(!is_warm_hue(70.0));
        assert!(is_warm_hue(300.0));
        assert!(is_cool_hue(170.0));
        assert!(is_cool_hue(299.0));
        assert!(!is_cool_hue(300.0));
        assert!(!is_warm_hue(120.0) && !is_cool_hue(120.0));
    }

    #[test]
    fn test_is_neutral() {
        assert!(is_neutral(&Hsl::new(200.0, 5.0, 50.0)));
        assert!(is_neutral(&Hsl::new(30.0, 18.0, 95.0)));
        assert!(is_neutral(&Hsl::new(30.0, 18.0, 8.0)));
        assert!(!is_neutral(&Hsl::new(30.0, 18.0, 50.0)));
        assert!(!is_neutral(&Hsl::new(0.0, 80.0, 50.0)));
    }

    #[test]
    fn test_is_fashion_neutral() {
        // navy, khaki, olive, brown
        assert!(is_fashion_neutral(&Hsl::new(225.0, 45.0, 20.0)));
        assert!(is_fashion_neutral(&Hsl::new(40.0, 30.0, 65.0)));
        assert!(is_fashion_neutral(&Hsl::new(80.0, 30.0, 30.0)));
        assert!(is_fashion_neutral(&Hsl::new(25.0, 45.0, 25.0)));

        assert!(!is_fashion_neutral(&Hsl::new(225.0, 80.0, 20.0)));
        assert!(!is_fashion_neutral(&Hsl::new(0.0, 90.0, 50.0)));
    }

    #[test]
    fn test_hex_conversion() {
        assert_eq!(to_hex(Rgb::new(255, 0, 0)), "#FF0000");
        assert_eq!(to_hex(Rgb::new(12, 171, 239)), "#0CABEF");

        assert_eq!(parse_hex("#0CABEF").unwrap(), Rgb::new(12, 171, 239));
        assert_eq!(parse_hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(parse_hex("#FF").is_err());
        assert!(parse_hex("#GGGGGG").is_err());
        assert!(parse_hex("#ééé").is_err());
    }
}
