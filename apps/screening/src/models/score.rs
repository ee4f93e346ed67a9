use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable classification of an overall match score.
///
/// Thresholds are inclusive at the lower bound of each band: exactly 0.8 is
/// Excellent, exactly 0.6 is Good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchCategory {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Fair Match")]
    Fair,
    #[serde(rename = "Poor Match")]
    Poor,
}

impl MatchCategory {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            MatchCategory::Excellent
        } else if score >= 0.6 {
            MatchCategory::Good
        } else if score >= 0.4 {
            MatchCategory::Fair
        } else {
            MatchCategory::Poor
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchCategory::Excellent => "Excellent Match",
            MatchCategory::Good => "Good Match",
            MatchCategory::Fair => "Fair Match",
            MatchCategory::Poor => "Poor Match",
        };
        write!(f, "{label}")
    }
}

/// The three sub-scores and their weighted combination, each in [0.0, 1.0].
/// `overall_score` is rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub overall_score: f64,
    pub category: MatchCategory,
}

impl ScoreBreakdown {
    /// The breakdown substituted when score computation produces an unusable
    /// value: a downstream ranking step must always receive a comparable number.
    pub fn worst_case() -> Self {
        Self {
            skills_score: 0.0,
            experience_score: 0.0,
            education_score: 0.0,
            overall_score: 0.0,
            category: MatchCategory::Poor,
        }
    }
}
