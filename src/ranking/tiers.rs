/// Value tier classification for report display
///
/// Buckets value scores into the rating bands used by the
/// recommendation listing, so top results read as more than a wall of
/// close decimals.
use serde::{Deserialize, Serialize};

/// Rating band for a neighborhood's value score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueTier {
    /// value_score >= 85
    Excellent,
    /// value_score >= 75
    Great,
    /// value_score >= 65
    Good,
    /// everything below
    Fair,
}

impl ValueTier {
    /// Classify a value score into its tier
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ValueTier::Excellent
        } else if score >= 75.0 {
            ValueTier::Great
        } else if score >= 65.0 {
            ValueTier::Good
        } else {
            ValueTier::Fair
        }
    }

    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            ValueTier::Excellent => "Excellent",
            ValueTier::Great => "Great",
            ValueTier::Good => "Good",
            ValueTier::Fair => "Fair",
        }
    }
}
