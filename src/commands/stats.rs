use anyhow::Result;
use colored::*;
use std::io::Write;
use std::path::PathBuf;

use crate::config;
use crate::core::CountyStats;
use crate::io::output::OutputFormat;
use crate::ranking::rank_neighborhoods;
use crate::samples::{sample_neighborhoods, CitySelection};
use crate::store::NeighborhoodStore;

pub struct StatsConfig {
    pub county: String,
    pub city: CitySelection,
    pub seed: u64,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Compute and write the statistics row for one county.
///
/// A county with no rows is a valid empty result, not an error: the
/// terminal writer says so, JSON emits `null`.
pub fn handle_stats(cfg: StatsConfig) -> Result<()> {
    let file_config = config::load_config(cfg.config.as_deref())?;
    let weights = file_config.scoring_weights()?;

    let records = sample_neighborhoods(cfg.city, cfg.seed);
    let ranked = rank_neighborhoods(&records, Some(&weights));
    let store = NeighborhoodStore::from_ranked(ranked);
    let stats = store.county_stats(&cfg.county);

    let mut target = super::output_target(cfg.output.as_deref())?;
    write_stats(&mut target, &cfg.county, stats.as_ref(), cfg.format)?;
    Ok(())
}

fn write_stats(
    writer: &mut dyn Write,
    county: &str,
    stats: Option<&CountyStats>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats)?;
            writeln!(writer, "{json}")?;
        }
        OutputFormat::Markdown => match stats {
            Some(stats) => {
                writeln!(writer, "# County Statistics: {}", stats.county)?;
                writeln!(writer)?;
                writeln!(writer, "| Metric | Value |")?;
                writeln!(writer, "|--------|-------|")?;
                writeln!(writer, "| Neighborhoods | {} |", stats.total_neighborhoods)?;
                writeln!(writer, "| Average Rent | ${:.0} |", stats.avg_rent)?;
                writeln!(
                    writer,
                    "| Average Value Score | {:.1} |",
                    stats.avg_value_score
                )?;
                writeln!(
                    writer,
                    "| Average Affordability | {:.1} |",
                    stats.avg_affordability
                )?;
                writeln!(writer, "| Min Rent | ${:.0} |", stats.min_rent)?;
                writeln!(writer, "| Max Rent | ${:.0} |", stats.max_rent)?;
            }
            None => {
                writeln!(writer, "No neighborhoods found for county `{county}`.")?;
            }
        },
        OutputFormat::Terminal => match stats {
            Some(stats) => {
                writeln!(writer, "{}", format!("County: {}", stats.county).bold().blue())?;
                writeln!(writer, "  Neighborhoods: {}", stats.total_neighborhoods)?;
                writeln!(writer, "  Average rent: ${:.0}", stats.avg_rent)?;
                writeln!(writer, "  Average value score: {:.1}", stats.avg_value_score)?;
                writeln!(
                    writer,
                    "  Average affordability: {:.1}",
                    stats.avg_affordability
                )?;
                writeln!(
                    writer,
                    "  Rent range: ${:.0} - ${:.0}",
                    stats.min_rent, stats.max_rent
                )?;
            }
            None => {
                writeln!(
                    writer,
                    "{} No neighborhoods found for county `{}`.",
                    "!".yellow().bold(),
                    county
                )?;
            }
        },
    }
    Ok(())
}
