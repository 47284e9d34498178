//! Letter grades for outfit scores

use serde::{Deserialize, Serialize};

/// Letter grade with a short description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub letter: String,
    pub description: String,
}

/// Lower bound (inclusive), letter, description; highest tier first
const GRADE_TIERS: [(u32, &str, &str); 11] = [
    (95, "S", "Exceptional"),
    (90, "A+", "Outstanding"),
    (85, "A", "Excellent"),
    (80, "A-", "Very good"),
    (75, "B+", "Good"),
    (70, "B", "Solid"),
    (65, "B-", "Decent"),
    (60, "C+", "Fair"),
    (50, "C", "Average"),
    (40, "D", "Needs work"),
    (0, "F", "Rethink the combination"),
];

/// Grade for a 0-100 outfit score
pub fn get_grade(score: u32) -> Grade {
    let (_, letter, description) = GRADE_TIERS
        .iter()
        .copied()
        .find(|(min, _, _)| score >= *min)
        .unwrap_or(GRADE_TIERS[GRADE_TIERS.len() - 1]);

    Grade {
        letter: letter.to_string(),
        description: description.to_string(),
    }
}
