//! Snapshot store over the ranked record set.
//!
//! Holds one full snapshot at a time, rebuilt by wholesale replacement on
//! every pipeline run (the delete-all-and-reinsert pattern of a throwaway
//! table, modeled as a swap so recomputation stays idempotent). Exposes
//! the six read-only access patterns: all rows, county filter, budget
//! filter, the conjunction of both, top counties by mean value score, and
//! per-county statistics. Filters never mutate rows; empty matches return
//! empty sequences, and an absent county yields no aggregate row at all.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::core::{CountyAggregate, CountyStats, RankedNeighborhood};

#[derive(Clone, Debug, Default)]
pub struct NeighborhoodStore {
    rows: Vec<RankedNeighborhood>,
    by_name: HashMap<String, usize>,
}

#[derive(Default)]
struct CountyAccum {
    count: usize,
    rent_sum: f64,
    value_sum: f64,
    affordability_sum: f64,
}

impl NeighborhoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an already-ranked set.
    pub fn from_ranked(rows: Vec<RankedNeighborhood>) -> Self {
        let mut store = Self::new();
        store.replace_all(rows);
        store
    }

    /// Replace the entire snapshot.
    ///
    /// Rows are kept in rank order (equivalently: value score descending),
    /// so every query returns its results already ordered.
    pub fn replace_all(&mut self, mut rows: Vec<RankedNeighborhood>) {
        rows.sort_by_key(|row| row.rank);
        self.by_name = rows
            .iter()
            .enumerate()
            .map(|(index, row)| (row.record.name.clone(), index))
            .collect();
        self.rows = rows;
        log::debug!("store rebuilt with {} rows", self.rows.len());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Point lookup by neighborhood name.
    pub fn get(&self, name: &str) -> Option<&RankedNeighborhood> {
        self.by_name.get(name).map(|&index| &self.rows[index])
    }

    /// All rows, ordered by value score descending.
    pub fn all(&self) -> Vec<RankedNeighborhood> {
        self.rows.to_vec()
    }

    /// Rows in a county (exact, case-sensitive match), ordered by value
    /// score descending.
    pub fn by_county(&self, county: &str) -> Vec<RankedNeighborhood> {
        self.rows
            .iter()
            .filter(|row| row.record.county == county)
            .cloned()
            .collect()
    }

    /// Rows with rent within budget (inclusive), ordered by value score
    /// descending.
    pub fn by_budget(&self, max_rent: f64) -> Vec<RankedNeighborhood> {
        self.rows
            .iter()
            .filter(|row| row.record.median_rent <= max_rent)
            .cloned()
            .collect()
    }

    /// Conjunction of the county and budget filters.
    pub fn by_county_and_budget(&self, county: &str, max_rent: f64) -> Vec<RankedNeighborhood> {
        self.rows
            .iter()
            .filter(|row| row.record.county == county && row.record.median_rent <= max_rent)
            .cloned()
            .collect()
    }

    /// First `n` counties by mean value score, descending.
    ///
    /// Counties with no rows are simply absent. Ties keep alphabetical
    /// order, so the result is deterministic.
    pub fn top_counties(&self, n: usize) -> Vec<CountyAggregate> {
        let mut groups: BTreeMap<&str, CountyAccum> = BTreeMap::new();
        for row in &self.rows {
            let accum = groups.entry(row.record.county.as_str()).or_default();
            accum.count += 1;
            accum.rent_sum += row.record.median_rent;
            accum.value_sum += row.value_score;
            accum.affordability_sum += row.affordability;
        }

        let mut aggregates: Vec<CountyAggregate> = groups
            .into_iter()
            .map(|(county, accum)| CountyAggregate {
                county: county.to_string(),
                avg_value_score: accum.value_sum / accum.count as f64,
                avg_rent: accum.rent_sum / accum.count as f64,
                avg_affordability: accum.affordability_sum / accum.count as f64,
                neighborhood_count: accum.count,
            })
            .collect();
        aggregates.sort_by(|a, b| {
            b.avg_value_score
                .partial_cmp(&a.avg_value_score)
                .unwrap_or(Ordering::Equal)
        });
        aggregates.truncate(n);
        aggregates
    }

    /// Statistics for one county; `None` when no row matches.
    pub fn county_stats(&self, county: &str) -> Option<CountyStats> {
        let rows: Vec<&RankedNeighborhood> = self
            .rows
            .iter()
            .filter(|row| row.record.county == county)
            .collect();
        if rows.is_empty() {
            return None;
        }

        let count = rows.len();
        let rent_sum: f64 = rows.iter().map(|row| row.record.median_rent).sum();
        let value_sum: f64 = rows.iter().map(|row| row.value_score).sum();
        let affordability_sum: f64 = rows.iter().map(|row| row.affordability).sum();
        let min_rent = rows
            .iter()
            .map(|row| row.record.median_rent)
            .fold(f64::INFINITY, f64::min);
        let max_rent = rows
            .iter()
            .map(|row| row.record.median_rent)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(CountyStats {
            county: county.to_string(),
            total_neighborhoods: count,
            avg_rent: rent_sum / count as f64,
            avg_value_score: value_sum / count as f64,
            avg_affordability: affordability_sum / count as f64,
            min_rent,
            max_rent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NeighborhoodRecord;

    fn ranked(
        name: &str,
        county: &str,
        rent: f64,
        affordability: f64,
        value: f64,
        rank: usize,
    ) -> RankedNeighborhood {
        let mut record = NeighborhoodRecord::new(name, county);
        record.median_rent = rent;
        RankedNeighborhood {
            record,
            affordability,
            value_score: value,
            rank,
        }
    }

    fn sample_store() -> NeighborhoodStore {
        NeighborhoodStore::from_ranked(vec![
            ranked("A", "Alpha", 1500.0, 85.0, 90.0, 1),
            ranked("B", "Beta", 2500.0, 70.0, 80.0, 2),
            ranked("C", "Alpha", 3500.0, 50.0, 70.0, 3),
            ranked("D", "Beta", 1200.0, 100.0, 60.0, 4),
        ])
    }

    #[test]
    fn all_returns_rows_in_value_score_order() {
        let store = sample_store();
        let names: Vec<String> = store.all().into_iter().map(|r| r.record.name).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn replace_all_restores_rank_order() {
        // Rows arriving shuffled still come back in rank order.
        let mut store = NeighborhoodStore::new();
        store.replace_all(vec![
            ranked("C", "Alpha", 3500.0, 50.0, 70.0, 3),
            ranked("A", "Alpha", 1500.0, 85.0, 90.0, 1),
            ranked("B", "Beta", 2500.0, 70.0, 80.0, 2),
        ]);
        let names: Vec<String> = store.all().into_iter().map(|r| r.record.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn replace_all_discards_the_previous_snapshot() {
        let mut store = sample_store();
        store.replace_all(vec![ranked("Z", "Zeta", 900.0, 100.0, 95.0, 1)]);
        assert_eq!(store.len(), 1);
        assert!(store.get("A").is_none());
        assert!(store.get("Z").is_some());
    }

    #[test]
    fn by_county_is_exact_and_case_sensitive() {
        let store = sample_store();
        let names: Vec<String> = store
            .by_county("Alpha")
            .into_iter()
            .map(|r| r.record.name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(store.by_county("alpha").is_empty());
    }

    #[test]
    fn by_budget_is_inclusive() {
        let store = sample_store();
        let names: Vec<String> = store
            .by_budget(2500.0)
            .into_iter()
            .map(|r| r.record.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "D"]);
    }

    #[test]
    fn by_county_and_budget_is_the_conjunction() {
        let store = sample_store();
        let names: Vec<String> = store
            .by_county_and_budget("Beta", 2000.0)
            .into_iter()
            .map(|r| r.record.name)
            .collect();
        assert_eq!(names, vec!["D"]);
    }

    #[test]
    fn filters_matching_nothing_return_empty() {
        let store = sample_store();
        assert!(store.by_county("Gamma").is_empty());
        assert!(store.by_budget(100.0).is_empty());
        assert!(store.by_county_and_budget("Alpha", 100.0).is_empty());
    }

    #[test]
    fn top_counties_orders_by_mean_value_score() {
        let store = sample_store();
        let top = store.top_counties(10);
        // Alpha mean 80, Beta mean 70
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].county, "Alpha");
        assert!((top[0].avg_value_score - 80.0).abs() < 1e-9);
        assert!((top[0].avg_rent - 2500.0).abs() < 1e-9);
        assert!((top[0].avg_affordability - 67.5).abs() < 1e-9);
        assert_eq!(top[0].neighborhood_count, 2);
        assert_eq!(top[1].county, "Beta");
    }

    #[test]
    fn top_counties_returns_at_most_n_groups() {
        let store = sample_store();
        assert_eq!(store.top_counties(1).len(), 1);
        assert_eq!(store.top_counties(0).len(), 0);
    }

    #[test]
    fn county_stats_computes_all_aggregates() {
        let store = sample_store();
        let stats = store.county_stats("Beta").unwrap();
        assert_eq!(stats.total_neighborhoods, 2);
        assert!((stats.avg_rent - 1850.0).abs() < 1e-9);
        assert!((stats.avg_value_score - 70.0).abs() < 1e-9);
        assert!((stats.avg_affordability - 85.0).abs() < 1e-9);
        assert!((stats.min_rent - 1200.0).abs() < 1e-9);
        assert!((stats.max_rent - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn county_stats_for_absent_county_is_none() {
        let store = sample_store();
        assert!(store.county_stats("Gamma").is_none());
    }

    #[test]
    fn get_finds_rows_by_name() {
        let store = sample_store();
        assert_eq!(store.get("C").unwrap().rank, 3);
        assert!(store.get("missing").is_none());
    }
}
