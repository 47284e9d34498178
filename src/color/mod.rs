//! Color model, statistics and garment color extraction
//!
//! This module handles color conversions and classification, statistical
//! aggregation of sampled pixels, skin rejection and the per-garment
//! color records consumed by harmony analysis.

pub mod analysis;
pub mod conversion;
pub mod naming;
pub mod record;
pub mod skin;
pub mod statistics;

pub use analysis::GarmentColorExtractor;
pub use conversion::{
    calculate_contrast, hsl_to_rgb, hue_difference, is_cool_hue, is_fashion_neutral, is_neutral,
    is_warm_hue, parse_hex, relative_luminance, rgb_to_hsl, to_hex, Hsl, Rgb,
};
pub use naming::get_color_description;
pub use record::ColorRecord;
pub use skin::{SkinFilter, SkinRange};
pub use statistics::{dominant_colors, extract_average_color, trimmed_mean, DominantColor};
