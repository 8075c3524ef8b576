use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

use crate::config;
use crate::core::{AnalysisReport, MarketSummary};
use crate::io::output::{create_writer, format_row, OutputFormat};
use crate::ranking::rank_neighborhoods;
use crate::samples::{sample_neighborhoods, CitySelection};
use crate::store::NeighborhoodStore;

pub struct AnalyzeConfig {
    pub city: CitySelection,
    pub county: Option<String>,
    pub max_rent: Option<f64>,
    pub top: Option<usize>,
    pub seed: u64,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Run the full pipeline: generate, score, rank, rebuild the store,
/// apply the selection filters and write the report.
pub fn handle_analyze(cfg: AnalyzeConfig) -> Result<()> {
    let file_config = config::load_config(cfg.config.as_deref())?;
    let weights = file_config.scoring_weights()?;

    let records = sample_neighborhoods(cfg.city, cfg.seed);
    let ranked = rank_neighborhoods(&records, Some(&weights));
    let store = NeighborhoodStore::from_ranked(ranked);

    // "All" from the presentation side means no county filter.
    let county = cfg.county.as_deref().filter(|c| *c != "All");
    let rows = match (county, cfg.max_rent) {
        (Some(county), Some(max_rent)) => store.by_county_and_budget(county, max_rent),
        (Some(county), None) => store.by_county(county),
        (None, Some(max_rent)) => store.by_budget(max_rent),
        (None, None) => store.all(),
    };
    for row in &rows {
        log::debug!("matched {}", format_row(row));
    }

    // Market summary covers the full snapshot; the row listing is the
    // filtered (and optionally truncated) selection.
    let summary = MarketSummary::compute(&store.all(), cfg.max_rent);
    let top = cfg.top.or(file_config.output.top);
    let neighborhoods = match top {
        Some(n) => rows.into_iter().take(n).collect(),
        None => rows,
    };

    let report = AnalysisReport {
        generated_at: Utc::now(),
        city: cfg.city.label().to_string(),
        county: county.map(str::to_string),
        max_rent: cfg.max_rent,
        weights: weights.normalized(),
        summary,
        neighborhoods,
    };

    let target = super::output_target(cfg.output.as_deref())?;
    let mut writer = create_writer(target, cfg.format);
    writer.write_report(&report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AnalyzeConfig {
        AnalyzeConfig {
            city: CitySelection::Oakland,
            county: None,
            max_rent: None,
            top: None,
            seed: crate::samples::DEFAULT_SEED,
            format: OutputFormat::Json,
            output: None,
            config: None,
        }
    }

    #[test]
    fn analyze_writes_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let cfg = AnalyzeConfig {
            output: Some(out.clone()),
            ..base_config()
        };
        handle_analyze(cfg).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["summary"]["total_neighborhoods"], 6);
        assert_eq!(report["city"], "Oakland");
    }

    #[test]
    fn county_all_means_no_filter() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let cfg = AnalyzeConfig {
            county: Some("All".to_string()),
            output: Some(out.clone()),
            ..base_config()
        };
        handle_analyze(cfg).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(report.get("county").is_none());
        assert_eq!(report["neighborhoods"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn missing_explicit_config_fails() {
        let cfg = AnalyzeConfig {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            ..base_config()
        };
        assert!(handle_analyze(cfg).is_err());
    }
}
