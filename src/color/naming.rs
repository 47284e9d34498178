//! Fashion-aware color names
//!
//! Names are built in three tiers: achromatic names by lightness, tinted
//! near-neutrals, and hue bands with optional lightness or saturation
//! modifiers. At most one modifier is prefixed; lightness wins over
//! saturation. Band-specific names such as "Navy" or "Burgundy" already
//! describe their shade and never take a modifier.

use super::conversion::{is_warm_hue, Hsl};

/// Achromatic names by upper lightness bound (exclusive)
const ACHROMATIC_NAMES: [(f64, &str); 8] = [
    (10.0, "Black"),
    (20.0, "Charcoal"),
    (35.0, "Dark Gray"),
    (55.0, "Gray"),
    (70.0, "Silver"),
    (85.0, "Light Gray"),
    (95.0, "Off-White"),
    (f64::INFINITY, "White"),
];

const ACHROMATIC_MAX_SATURATION: f64 = 8.0;
const TINTED_NEUTRAL_MAX_SATURATION: f64 = 15.0;

enum HueName {
    /// Generic hue name that accepts a modifier prefix
    Plain(&'static str),
    /// Shade-specific name used as is
    Specific(&'static str),
}

/// One band of the hue wheel, [start, end) degrees
struct HueBand {
    start: f64,
    end: f64,
    name: fn(&Hsl) -> HueName,
}

const HUE_BANDS: [HueBand; 12] = [
    HueBand { start: 345.0, end: 360.0, name: red },
    HueBand { start: 0.0, end: 15.0, name: red },
    HueBand { start: 15.0, end: 25.0, name: red_orange },
    HueBand { start: 25.0, end: 40.0, name: orange },
    HueBand { start: 40.0, end: 50.0, name: gold },
    HueBand { start: 50.0, end: 70.0, name: yellow },
    HueBand { start: 70.0, end: 150.0, name: green },
    HueBand { start: 150.0, end: 180.0, name: teal },
    HueBand { start: 180.0, end: 200.0, name: cyan },
    HueBand { start: 200.0, end: 240.0, name: blue },
    HueBand { start: 240.0, end: 290.0, name: purple },
    HueBand { start: 290.0, end: 345.0, name: magenta },
];

fn red(c: &Hsl) -> HueName {
    if c.l < 30.0 {
        HueName::Specific("Burgundy")
    } else if c.l > 75.0 {
        HueName::Specific("Pink")
    } else {
        HueName::Plain("Red")
    }
}

fn red_orange(c: &Hsl) -> HueName {
    if c.l < 40.0 {
        HueName::Specific("Rust")
    } else if c.l >= 60.0 && c.s > 50.0 {
        HueName::Specific("Coral")
    } else {
        HueName::Plain("Red-Orange")
    }
}

fn orange(c: &Hsl) -> HueName {
    if c.l < 35.0 {
        HueName::Specific("Brown")
    } else if c.s < 50.0 && c.l >= 60.0 {
        HueName::Specific("Tan")
    } else {
        HueName::Plain("Orange")
    }
}

fn gold(c: &Hsl) -> HueName {
    if c.l < 35.0 {
        HueName::Specific("Bronze")
    } else if c.s < 45.0 {
        HueName::Specific("Khaki")
    } else {
        HueName::Plain("Gold")
    }
}

fn yellow(c: &Hsl) -> HueName {
    if c.l < 40.0 {
        HueName::Specific("Olive")
    } else {
        HueName::Plain("Yellow")
    }
}

fn green(c: &Hsl) -> HueName {
    if c.h < 90.0 && c.l < 40.0 {
        HueName::Specific("Olive")
    } else if c.h < 90.0 && c.s > 60.0 {
        HueName::Plain("Lime")
    } else if c.l < 25.0 {
        HueName::Specific("Forest Green")
    } else if c.s < 35.0 && c.l >= 45.0 {
        HueName::Specific("Sage")
    } else {
        HueName::Plain("Green")
    }
}

fn teal(c: &Hsl) -> HueName {
    if c.l > 70.0 {
        HueName::Specific("Mint")
    } else {
        HueName::Plain("Teal")
    }
}

fn cyan(c: &Hsl) -> HueName {
    if c.l < 35.0 {
        HueName::Specific("Petrol")
    } else {
        HueName::Plain("Turquoise")
    }
}

fn blue(c: &Hsl) -> HueName {
    if c.l < 25.0 {
        HueName::Specific("Navy")
    } else if c.l > 75.0 {
        HueName::Specific("Sky Blue")
    } else if c.s < 40.0 && (30.0..=60.0).contains(&c.l) {
        HueName::Specific("Denim")
    } else {
        HueName::Plain("Blue")
    }
}

fn purple(c: &Hsl) -> HueName {
    if c.l > 70.0 {
        HueName::Specific("Lavender")
    } else if c.l < 25.0 {
        HueName::Specific("Eggplant")
    } else if c.h < 260.0 {
        HueName::Plain("Indigo")
    } else {
        HueName::Plain("Purple")
    }
}

fn magenta(c: &Hsl) -> HueName {
    if c.l > 70.0 {
        HueName::Specific("Pink")
    } else if c.l < 30.0 {
        HueName::Specific("Plum")
    } else if c.s < 40.0 {
        HueName::Specific("Mauve")
    } else {
        HueName::Plain("Magenta")
    }
}

fn lightness_modifier(l: f64) -> Option<&'static str> {
    if l < 20.0 {
        Some("Very Dark")
    } else if l < 35.0 {
        Some("Dark")
    } else if l > 85.0 {
        Some("Pale")
    } else if l > 70.0 {
        Some("Light")
    } else {
        None
    }
}

fn saturation_modifier(s: f64) -> Option<&'static str> {
    if s < 35.0 {
        Some("Muted")
    } else if s > 90.0 {
        Some("Vibrant")
    } else if s > 75.0 {
        Some("Vivid")
    } else {
        None
    }
}

/// Human-readable garment color name
pub fn get_color_description(color: &Hsl) -> String {
    if color.s < ACHROMATIC_MAX_SATURATION {
        return ACHROMATIC_NAMES
            .iter()
            .find(|(upper, _)| color.l < *upper)
            .map(|(_, name)| name.to_string())
            .unwrap_or_else(|| "White".to_string());
    }

    if color.s < TINTED_NEUTRAL_MAX_SATURATION {
        let name = match (is_warm_hue(color.h), color.l) {
            (true, l) if l > 75.0 => "Cream",
            (true, l) if l >= 25.0 => "Taupe",
            (_, l) if l < 25.0 => "Dark Gray",
            (_, l) if l > 75.0 => "Light Gray",
            _ => "Gray",
        };
        return name.to_string();
    }

    let Some(band) = HUE_BANDS
        .iter()
        .find(|band| color.h >= band.start && color.h < band.end)
    else {
        return "Unknown".to_string();
    };

    match (band.name)(color) {
        HueName::Specific(name) => name.to_string(),
        HueName::Plain(name) => {
            match lightness_modifier(color.l).or_else(|| saturation_modifier(color.s)) {
                Some(modifier) => format!("{} {}", modifier, name),
                None => name.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(h: f64, s: f64, l: f64) -> String {
        get_color_description(&Hsl::new(h, s, l))
    }

    #[test]
    fn test_achromatic_bands() {
        assert_eq!(name(0.0, 0.0, 3.0), "Black");
        assert_eq!(name(0.0, 0.0, 15.0), "Charcoal");
        assert_eq!(name(0.0, 5.0, 50.0), "Gray");
        assert_eq!(name(0.0, 0.0, 90.0), "Off-White");
        assert_eq!(name(0.0, 0.0, 100.0), "White");
    }

    #[test]
    fn test_tinted_neutrals() {
        assert_eq!(name(40.0, 12.0, 85.0), "Cream");
        assert_eq!(name(30.0, 12.0, 45.0), "Taupe");
        assert_eq!(name(210.0, 12.0, 50.0), "Gray");
    }

    #[test]
    fn test_specific_names_take_no_modifier() {
        assert_eq!(name(225.0, 60.0, 18.0), "Navy");
        assert_eq!(name(350.0, 70.0, 22.0), "Burgundy");
        assert_eq!(name(30.0, 50.0, 25.0), "Brown");
    }

    #[test]
    fn test_modifier_precedence() {
        assert_eq!(name(0.0, 60.0, 50.0), "Red");
        // Lightness modifier wins over saturation modifier
        assert_eq!(name(220.0, 95.0, 72.0), "Light Blue");
        assert_eq!(name(120.0, 95.0, 50.0), "Vibrant Green");
        assert_eq!(name(120.0, 80.0, 30.0), "Dark Green");
        assert_eq!(name(200.0, 30.0, 65.0), "Muted Blue");
    }

    #[test]
    fn test_every_hue_has_a_name() {
        for h in 0..360 {
            assert_ne!(name(h as f64, 60.0, 50.0), "Unknown", "hue {}", h);
        }
    }
}
