use anyhow::Result;
use colored::*;
use std::io::Write;
use std::path::PathBuf;

use crate::config;
use crate::core::CountyAggregate;
use crate::io::output::OutputFormat;
use crate::ranking::rank_neighborhoods;
use crate::samples::{sample_neighborhoods, CitySelection};
use crate::store::NeighborhoodStore;

pub struct CountiesConfig {
    pub top: usize,
    pub city: CitySelection,
    pub seed: u64,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Rank counties by average value score and write the aggregate rows.
pub fn handle_counties(cfg: CountiesConfig) -> Result<()> {
    let file_config = config::load_config(cfg.config.as_deref())?;
    let weights = file_config.scoring_weights()?;

    let records = sample_neighborhoods(cfg.city, cfg.seed);
    let ranked = rank_neighborhoods(&records, Some(&weights));
    let store = NeighborhoodStore::from_ranked(ranked);
    let counties = store.top_counties(cfg.top);

    let mut target = super::output_target(cfg.output.as_deref())?;
    write_counties(&mut target, &counties, cfg.format)?;
    Ok(())
}

fn write_counties(
    writer: &mut dyn Write,
    counties: &[CountyAggregate],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(counties)?;
            writeln!(writer, "{json}")?;
        }
        OutputFormat::Markdown => {
            writeln!(writer, "# Top Counties by Average Value Score")?;
            writeln!(writer)?;
            writeln!(
                writer,
                "| County | Avg Value Score | Avg Rent | Avg Affordability | Neighborhoods |"
            )?;
            writeln!(
                writer,
                "|--------|-----------------|----------|-------------------|---------------|"
            )?;
            for county in counties {
                writeln!(
                    writer,
                    "| {} | {:.1} | ${:.0} | {:.1} | {} |",
                    county.county,
                    county.avg_value_score,
                    county.avg_rent,
                    county.avg_affordability,
                    county.neighborhood_count
                )?;
            }
        }
        OutputFormat::Terminal => {
            writeln!(writer, "{}", "Top Counties".bold().blue())?;
            writeln!(writer, "{}", "============".blue())?;
            if counties.is_empty() {
                writeln!(writer, "No counties in the record set.")?;
            }
            for (index, county) in counties.iter().enumerate() {
                writeln!(
                    writer,
                    "  {}. {} - value {:.1}, rent ${:.0}, affordability {:.1} ({} neighborhoods)",
                    index + 1,
                    county.county.bold(),
                    county.avg_value_score,
                    county.avg_rent,
                    county.avg_affordability,
                    county.neighborhood_count
                )?;
            }
        }
    }
    Ok(())
}
