use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::scoring::ScoringWeights;

/// Value score at or above this counts as a high-value option in summaries.
pub const HIGH_VALUE_THRESHOLD: f64 = 70.0;

/// One neighborhood as supplied by a record source.
///
/// All component scores are nominally 0-100 but are not clamped here;
/// `school_score` is optional and defaulted at scoring time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NeighborhoodRecord {
    pub name: String,
    pub county: String,
    pub latitude: f64,
    pub longitude: f64,
    pub total_population: u32,
    pub median_income: f64,
    pub median_rent: f64,
    pub median_age: f64,
    pub college_educated_pct: f64,
    pub renter_pct: f64,
    pub unemployment_rate: f64,
    pub amenity_score: f64,
    pub transit_score: f64,
    pub safety_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_score: Option<f64>,
    pub growth_potential: f64,
}

impl NeighborhoodRecord {
    pub fn new(name: impl Into<String>, county: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            county: county.into(),
            latitude: 0.0,
            longitude: 0.0,
            total_population: 0,
            median_income: 0.0,
            median_rent: 0.0,
            median_age: 0.0,
            college_educated_pct: 0.0,
            renter_pct: 0.0,
            unemployment_rate: 0.0,
            amenity_score: 0.0,
            transit_score: 0.0,
            safety_score: 0.0,
            school_score: None,
            growth_potential: 0.0,
        }
    }
}

/// A neighborhood enriched with the derived scoring fields.
///
/// `affordability` and `value_score` are always computed, never supplied;
/// `rank` is 1-based and dense, assigned after the stable descending sort.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankedNeighborhood {
    #[serde(flatten)]
    pub record: NeighborhoodRecord,
    pub affordability: f64,
    pub value_score: f64,
    pub rank: usize,
}

/// Per-county aggregate row (mean over all neighborhoods in the county).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CountyAggregate {
    pub county: String,
    pub avg_value_score: f64,
    pub avg_rent: f64,
    pub avg_affordability: f64,
    pub neighborhood_count: usize,
}

/// Statistics for a single county.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CountyStats {
    pub county: String,
    pub total_neighborhoods: usize,
    pub avg_rent: f64,
    pub avg_value_score: f64,
    pub avg_affordability: f64,
    pub min_rent: f64,
    pub max_rent: f64,
}

/// Market-wide overview metrics for a ranked record set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MarketSummary {
    pub total_neighborhoods: usize,
    pub counties: usize,
    pub avg_rent: f64,
    pub avg_value_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_budget: Option<usize>,
    pub high_value: usize,
}

impl MarketSummary {
    /// Compute overview metrics over a ranked set.
    ///
    /// `max_rent` is the active budget; when absent the within-budget
    /// count is omitted rather than reported as zero.
    pub fn compute(rows: &[RankedNeighborhood], max_rent: Option<f64>) -> Self {
        let n = rows.len();
        let counties: HashSet<&str> = rows.iter().map(|r| r.record.county.as_str()).collect();
        let (avg_rent, avg_value_score) = if n == 0 {
            (0.0, 0.0)
        } else {
            let rent_sum: f64 = rows.iter().map(|r| r.record.median_rent).sum();
            let value_sum: f64 = rows.iter().map(|r| r.value_score).sum();
            (rent_sum / n as f64, value_sum / n as f64)
        };
        let within_budget = max_rent.map(|budget| {
            rows.iter()
                .filter(|r| r.record.median_rent <= budget)
                .count()
        });
        let high_value = rows
            .iter()
            .filter(|r| r.value_score >= HIGH_VALUE_THRESHOLD)
            .count();

        Self {
            total_neighborhoods: n,
            counties: counties.len(),
            avg_rent,
            avg_value_score,
            within_budget,
            high_value,
        }
    }
}

/// Full analysis report: the selection, the weights actually applied
/// (post-normalization), the market summary and the ranked rows.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rent: Option<f64>,
    pub weights: ScoringWeights,
    pub summary: MarketSummary,
    pub neighborhoods: Vec<RankedNeighborhood>,
}

static COUNTY_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Extract the county from a `"Name (County)"` display name.
///
/// Record sources that assign `county` directly do not need this; it is
/// the adapter for names that carry the county in parentheses.
pub fn county_from_name(name: &str) -> Option<&str> {
    let pattern =
        COUNTY_PATTERN.get_or_init(|| Regex::new(r"\(([^)]+)\)").expect("valid county pattern"));
    pattern
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
