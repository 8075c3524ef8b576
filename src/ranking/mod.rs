//! Ranking engine: weighted composite scoring over a whole record set.
//!
//! Records are enriched with `affordability` and `value_score`, sorted
//! descending by value score (stable, so equal scores keep their original
//! relative order), and assigned dense 1-based ranks. The input is never
//! mutated; callers get a fresh ranked set on every invocation.

pub mod tiers;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::core::{NeighborhoodRecord, RankedNeighborhood};
use crate::errors::Result;
use crate::scoring::{
    affordability_index, value_score, ScoringWeights, DEFAULT_SCHOOL_SCORE, DEFAULT_WEIGHTS,
};

/// Score, sort and rank a record set.
///
/// When `weights` is `None` the canonical defaults apply; either way the
/// vector is normalized to sum 1.0 before use. Records without a school
/// score get [`DEFAULT_SCHOOL_SCORE`] substituted, per record, and the
/// substituted value is materialized on the returned row.
pub fn rank_neighborhoods(
    records: &[NeighborhoodRecord],
    weights: Option<&ScoringWeights>,
) -> Vec<RankedNeighborhood> {
    let weights = weights.copied().unwrap_or(DEFAULT_WEIGHTS).normalized();

    let mut ranked: Vec<RankedNeighborhood> = records
        .iter()
        .map(|record| score_record(record, &weights))
        .collect();

    ranked.sort_by(|a, b| {
        b.value_score
            .partial_cmp(&a.value_score)
            .unwrap_or(Ordering::Equal)
    });
    for (index, row) in ranked.iter_mut().enumerate() {
        row.rank = index + 1;
    }

    log::debug!("ranked {} neighborhoods", ranked.len());
    ranked
}

/// Rank with a caller-supplied partial weight map.
///
/// The map contract is the one from [`ScoringWeights::from_map`]: only
/// `schools` has a fallback, any other missing key fails the whole call.
pub fn rank_with_weight_map(
    records: &[NeighborhoodRecord],
    weights: &BTreeMap<String, f64>,
) -> Result<Vec<RankedNeighborhood>> {
    let weights = ScoringWeights::from_map(weights)?;
    Ok(rank_neighborhoods(records, Some(&weights)))
}

fn score_record(record: &NeighborhoodRecord, weights: &ScoringWeights) -> RankedNeighborhood {
    let affordability = affordability_index(record.median_rent, record.median_income);
    let school = record.school_score.unwrap_or(DEFAULT_SCHOOL_SCORE);
    let value = value_score(
        affordability,
        record.amenity_score,
        record.transit_score,
        record.safety_score,
        school,
        record.growth_potential,
        weights,
    );

    let mut record = record.clone();
    record.school_score = Some(school);
    RankedNeighborhood {
        record,
        affordability,
        value_score: value,
        rank: 0,
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_record(index: usize, rent: f64, income: f64, amenity: f64) -> NeighborhoodRecord {
        let mut r = NeighborhoodRecord::new(format!("n{index}"), "County");
        r.median_rent = rent;
        r.median_income = income;
        r.amenity_score = amenity;
        r.transit_score = 50.0;
        r.safety_score = 50.0;
        r.school_score = None;
        r.growth_potential = 50.0;
        r
    }

    proptest! {
        #[test]
        fn ranks_always_form_a_permutation(
            inputs in proptest::collection::vec((500.0..5000.0f64, 20_000.0..200_000.0f64, 0.0..100.0f64), 0..40)
        ) {
            let records: Vec<NeighborhoodRecord> = inputs
                .iter()
                .enumerate()
                .map(|(i, (rent, income, amenity))| arb_record(i, *rent, *income, *amenity))
                .collect();
            let ranked = rank_neighborhoods(&records, None);
            prop_assert_eq!(ranked.len(), records.len());
            let mut ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
            ranks.sort_unstable();
            let expected: Vec<usize> = (1..=records.len()).collect();
            prop_assert_eq!(ranks, expected);
        }
    }
}
