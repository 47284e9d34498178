//! Outfit scoring module
//!
//! This module turns garment colors and their harmony classification into
//! the user-facing judgment: a weighted 0-100 score with breakdown, a letter
//! grade, a confidence estimate, a mood label and improvement suggestions.

pub mod confidence;
pub mod grade;
pub mod mood;
pub mod outfit;
pub mod stats;
pub mod suggestions;

pub use confidence::calculate_confidence;
pub use grade::{get_grade, Grade};
pub use mood::{detect_mood, Mood, MoodResult};
pub use outfit::{calculate_outfit_score, ScoreBreakdownItem, ScoreResult};
pub use stats::bell_curve;
pub use suggestions::generate_suggestions;
