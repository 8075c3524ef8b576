//! Affordability and weighted value scoring.
//!
//! The affordability index is a fixed step function on the monthly
//! rent-to-income ratio (the 30% rule); the value score is a weighted
//! composite of the six component scores. Both are pure functions with
//! no I/O, re-run wholesale on every pipeline invocation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{Error, Result};

/// Substituted for records that carry no school score.
pub const DEFAULT_SCHOOL_SCORE: f64 = 75.0;

/// Fallback applied when a supplied weight map omits the `schools` key.
/// No other weight key has a documented fallback.
pub const DEFAULT_SCHOOLS_WEIGHT: f64 = 0.10;

/// Canonical default weight vector. The raw components sum to 1.10 and
/// are normalized to sum 1.0 before every use.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    affordability: 0.30,
    amenities: 0.20,
    transit: 0.20,
    safety: 0.20,
    schools: 0.10,
    growth: 0.10,
};

/// Weights for the six value-score components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub affordability: f64,
    pub amenities: f64,
    pub transit: f64,
    pub safety: f64,
    pub schools: f64,
    pub growth: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl ScoringWeights {
    /// Build weights from a string-keyed map.
    ///
    /// `schools` falls back to [`DEFAULT_SCHOOLS_WEIGHT`] when absent;
    /// any other missing key fails the whole call. Unknown keys are
    /// ignored.
    pub fn from_map(map: &BTreeMap<String, f64>) -> Result<Self> {
        let weights = Self {
            affordability: required_weight(map, "affordability")?,
            amenities: required_weight(map, "amenities")?,
            transit: required_weight(map, "transit")?,
            safety: required_weight(map, "safety")?,
            schools: map
                .get("schools")
                .copied()
                .unwrap_or(DEFAULT_SCHOOLS_WEIGHT),
            growth: required_weight(map, "growth")?,
        };
        weights.validate()?;
        Ok(weights)
    }

    fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("affordability", self.affordability),
            ("amenities", self.amenities),
            ("transit", self.transit),
            ("safety", self.safety),
            ("schools", self.schools),
            ("growth", self.growth),
        ]
    }

    /// Validate that every weight is a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidWeight {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Raw component sum, before normalization.
    pub fn sum(&self) -> f64 {
        self.affordability + self.amenities + self.transit + self.safety + self.schools + self.growth
    }

    /// Return a copy scaled to sum exactly 1.0.
    ///
    /// An all-zero vector carries no preference and falls back to the
    /// normalized defaults.
    pub fn normalized(&self) -> Self {
        let sum = self.sum();
        if sum <= 0.0 {
            log::debug!("zero weight vector supplied, falling back to defaults");
            return DEFAULT_WEIGHTS.normalized();
        }
        if (sum - 1.0).abs() <= 1e-9 {
            return *self;
        }
        Self {
            affordability: self.affordability / sum,
            amenities: self.amenities / sum,
            transit: self.transit / sum,
            safety: self.safety / sum,
            schools: self.schools / sum,
            growth: self.growth / sum,
        }
    }
}

fn required_weight(map: &BTreeMap<String, f64>, key: &str) -> Result<f64> {
    map.get(key)
        .copied()
        .ok_or_else(|| Error::missing_field(format!("weights.{key}")))
}

/// Affordability score (0-100) from annual income and monthly rent.
///
/// Non-positive income means affordability is undefined and scores 0.
/// The breakpoints have inclusive upper bounds; past a ratio of 0.40 the
/// score decays linearly and is clamped at 0.
pub fn affordability_index(rent: f64, income: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    let monthly_income = income / 12.0;
    let ratio = rent / monthly_income;

    if ratio <= 0.25 {
        100.0
    } else if ratio <= 0.30 {
        85.0
    } else if ratio <= 0.35 {
        70.0
    } else if ratio <= 0.40 {
        50.0
    } else {
        (100.0 - (ratio - 0.30) * 200.0).max(0.0)
    }
}

/// Weighted composite of the six component scores.
///
/// Callers are expected to pass normalized weights; this function applies
/// whatever vector it is given.
pub fn value_score(
    affordability: f64,
    amenity: f64,
    transit: f64,
    safety: f64,
    school: f64,
    growth: f64,
    weights: &ScoringWeights,
) -> f64 {
    affordability * weights.affordability
        + amenity * weights.amenities
        + transit * weights.transit
        + safety * weights.safety
        + school * weights.schools
        + growth * weights.growth
}
