//! Color harmony and temperature analysis
//!
//! Classifies how the garment colors of an outfit relate on the hue wheel
//! and how they split between warm, cool and neutral families.

pub mod classifier;
pub mod temperature;

pub use classifier::{analyze_harmony, HarmonyDetails, HarmonyResult, HarmonyType};
pub use temperature::{analyze_temperature, Temperature, TemperatureAnalysis};
