//! Tuning constants for garment color analysis
//!
//! These values are empirically tuned against real outfit photos. They are
//! the compatibility contract of the analysis and are kept exactly as tuned;
//! `AnalysisConfig::default()` is built from them.

/// Neutral color thresholds (HSL percent units)
pub mod neutral {
    /// Saturation below which any color is neutral
    pub const MAX_SATURATION: f64 = 12.0;

    /// Lightness below which a low-saturation color reads as black
    pub const DARK_LIGHTNESS: f64 = 12.0;

    /// Lightness above which a low-saturation color reads as white
    pub const LIGHT_LIGHTNESS: f64 = 92.0;

    /// Saturation allowed for near-black and near-white neutrals
    pub const EXTREME_MAX_SATURATION: f64 = 20.0;
}

/// Hue families used for temperature analysis (degrees)
pub mod temperature {
    /// Warm hues: [0, WARM_END) and [WARM_WRAP_START, 360)
    pub const WARM_END: f64 = 70.0;
    pub const WARM_WRAP_START: f64 = 300.0;

    /// Cool hues: [COOL_START, COOL_END)
    pub const COOL_START: f64 = 170.0;
    pub const COOL_END: f64 = 300.0;
}

/// Pixel sampling defaults
pub mod sampling {
    /// Sample every Nth pixel in both directions
    pub const STRIDE: u32 = 4;

    /// Pixels with alpha below this are treated as transparent
    pub const MIN_ALPHA: u8 = 128;

    /// Fallback color when a region yields no usable pixels
    pub const NEUTRAL_GRAY: [u8; 3] = [128, 128, 128];
}

/// Vertical garment bands as fractions of image height
pub mod zones {
    pub const TOP: (f64, f64) = (0.08, 0.42);
    pub const BOTTOM: (f64, f64) = (0.42, 0.78);
    pub const SHOES: (f64, f64) = (0.78, 0.97);

    /// Vertical inset on each side of a band, as fraction of band height
    pub const INSET_RATIO: f64 = 0.10;

    /// Centered width used when no body column is detected
    pub const CENTER_FALLBACK_RATIO: f64 = 0.60;
}

/// Body column detection parameters
pub mod body {
    /// Horizontal strip analysed, as fractions of image height
    pub const STRIP_START: f64 = 0.30;
    pub const STRIP_END: f64 = 0.70;

    /// Row subsampling within the strip
    pub const ROW_STRIDE: u32 = 4;

    /// Sliding window width as fraction of image width
    pub const WINDOW_RATIO: f64 = 0.5;

    /// Minimum mean gradient per column inside the best window
    pub const MIN_EDGE_STRENGTH: f64 = 3.0;

    /// Padding added on each side of the window, as fraction of image width
    pub const PADDING_RATIO: f64 = 0.05;

    pub const MIN_STRIP_HEIGHT: u32 = 10;
    pub const MIN_WIDTH: u32 = 20;

    /// ITU-R BT.601 luma weights
    pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];
}

/// Garment color extraction parameters
pub mod extraction {
    /// Fraction trimmed from each end before averaging
    pub const TRIM_RATIO: f64 = 0.10;

    /// Number of dominant colors reported per garment
    pub const DOMINANT_COUNT: usize = 3;

    /// Right shift applied to each channel before bucketing (16 levels)
    pub const QUANTIZATION_SHIFT: u8 = 4;

    /// Pixels compared against the extracted color for consistency
    pub const CONSISTENCY_SAMPLE_CAP: usize = 200;

    /// RGB distance treated as completely inconsistent
    pub const MAX_EXPECTED_DISTANCE: f64 = 150.0;

    /// Sample count regarded as fully sufficient
    pub const FULL_SAMPLE_SIZE: usize = 100;

    /// Skin filter survival rate regarded as fully reliable
    pub const SKIN_SURVIVAL_TARGET: f64 = 0.5;

    /// Confidence weights: skin survival, consistency, sample size
    pub const CONFIDENCE_WEIGHTS: [f64; 3] = [0.4, 0.4, 0.2];
}

/// Pattern detection thresholds
pub mod pattern {
    pub const PRIMARY_MIN_FREQUENCY: f64 = 0.25;
    pub const SECONDARY_MIN_FREQUENCY: f64 = 0.15;
    pub const HUE_THRESHOLD: f64 = 25.0;
    pub const LIGHTNESS_THRESHOLD: f64 = 25.0;
    pub const SATURATION_THRESHOLD: f64 = 30.0;
}

/// Hue-difference thresholds for harmony classification (degrees)
pub mod harmony {
    pub const MONOCHROMATIC_MAX_DIFF: f64 = 25.0;
    pub const ANALOGOUS_MAX_DIFF: f64 = 60.0;
    pub const SPLIT_COMPLEMENTARY_RANGE: (f64, f64) = (130.0, 170.0);
    pub const COMPLEMENTARY_MIN_DIFF: f64 = 150.0;
    pub const TRIADIC_PAIR_RANGE: (f64, f64) = (90.0, 150.0);
    pub const TRIADIC_MAX_SPREAD: f64 = 40.0;
    pub const TRIADIC_MIN_AVG_DIFF: f64 = 90.0;
    pub const CLASH_AVG_DIFF: (f64, f64) = (60.0, 130.0);

    /// Saturation or lightness range that keeps a monochromatic look lively
    pub const MONOCHROMATIC_MIN_RANGE: f64 = 25.0;
    /// Lightness range separating high-contrast achromatic outfits
    pub const ACHROMATIC_CONTRAST_RANGE: f64 = 40.0;
    pub const POP_MIN_SATURATION: f64 = 50.0;
    pub const BOLD_MIN_SATURATION: f64 = 60.0;
    pub const CLASH_MIN_SATURATION: f64 = 45.0;
}

/// Maximum points per outfit score category
pub mod score {
    pub const HARMONY_MAX: u32 = 30;
    pub const CONTRAST_MAX: u32 = 18;
    pub const SATURATION_MAX: u32 = 15;
    pub const TEMPERATURE_MAX: u32 = 12;
    pub const NEUTRAL_MAX: u32 = 10;
    pub const POLISH_MAX: u32 = 15;

    /// Share of the harmony score carried into the outfit score
    pub const HARMONY_WEIGHT: f64 = 0.30;

    /// Lightness contrast bell curve
    pub const CONTRAST_CENTER: f64 = 38.0;
    pub const CONTRAST_SPREAD: f64 = 18.0;

    /// Saturation points split between average and spread
    pub const SATURATION_AVERAGE_POINTS: f64 = 8.0;
    pub const SATURATION_SPREAD_POINTS: f64 = 7.0;

    /// (center, spread) of the saturation bell curves
    pub const SATURATION_AVERAGE_CURVE: (f64, f64) = (40.0, 25.0);
    pub const SATURATION_SPREAD_CURVE: (f64, f64) = (20.0, 15.0);
}

/// Maximum points per outfit confidence factor
pub mod confidence {
    pub const CONTRAST_MAX: f64 = 25.0;
    pub const SATURATION_MAX: f64 = 20.0;
    pub const BALANCE_MAX: f64 = 15.0;
    pub const NEUTRAL_ANCHOR_MAX: f64 = 15.0;
    pub const INTENTIONALITY_MAX: f64 = 15.0;
    pub const DARKNESS_MAX: f64 = 10.0;

    /// (center, spread) of the bell curve behind each continuous factor
    pub const LIGHTNESS_SPREAD_CURVE: (f64, f64) = (22.0, 12.0);
    pub const SATURATION_CURVE: (f64, f64) = (45.0, 25.0);
    pub const DARKNESS_CURVE: (f64, f64) = (40.0, 20.0);
}
