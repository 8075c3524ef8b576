use crate::core::{AnalysisReport, RankedNeighborhood};
use crate::ranking::tiers::ValueTier;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer(writer: Box<dyn Write>, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_weights(report)?;
        self.write_neighborhoods(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Rentmap Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Selection: {}", selection_line(report))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Market Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Neighborhoods | {} |",
            report.summary.total_neighborhoods
        )?;
        writeln!(self.writer, "| Counties | {} |", report.summary.counties)?;
        writeln!(
            self.writer,
            "| Average Rent | ${:.0} |",
            report.summary.avg_rent
        )?;
        writeln!(
            self.writer,
            "| Average Value Score | {:.1} |",
            report.summary.avg_value_score
        )?;
        if let Some(within_budget) = report.summary.within_budget {
            writeln!(self.writer, "| Within Budget | {} |", within_budget)?;
        }
        writeln!(
            self.writer,
            "| High Value Options | {} |",
            report.summary.high_value
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_weights(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let w = &report.weights;
        writeln!(self.writer, "## Applied Weights")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Affordability | Amenities | Transit | Safety | Schools | Growth |"
        )?;
        writeln!(
            self.writer,
            "|---------------|-----------|---------|--------|---------|--------|"
        )?;
        writeln!(
            self.writer,
            "| {:.3} | {:.3} | {:.3} | {:.3} | {:.3} | {:.3} |",
            w.affordability, w.amenities, w.transit, w.safety, w.schools, w.growth
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_neighborhoods(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.neighborhoods.is_empty() {
            writeln!(self.writer, "No neighborhoods matched the selection.")?;
            return Ok(());
        }

        writeln!(self.writer, "## Neighborhoods")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Rank | Neighborhood | County | Rent | Affordability | Value Score | Tier |"
        )?;
        writeln!(
            self.writer,
            "|------|--------------|--------|------|---------------|-------------|------|"
        )?;
        for row in &report.neighborhoods {
            writeln!(
                self.writer,
                "| {} | {} | {} | ${:.0} | {:.1} | {:.1} | {} |",
                row.rank,
                row.record.name,
                row.record.county,
                row.record.median_rent,
                row.affordability,
                row.value_score,
                ValueTier::from_score(row.value_score).label()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_recommendations(report)?;
        self.write_listing(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Rentmap Analysis Report".bold().blue())?;
        writeln!(self.writer, "{}", "=======================".blue())?;
        writeln!(self.writer, "Selection: {}", selection_line(report))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "Summary:")?;
        writeln!(
            self.writer,
            "  Neighborhoods: {}",
            report.summary.total_neighborhoods
        )?;
        writeln!(self.writer, "  Counties: {}", report.summary.counties)?;
        writeln!(self.writer, "  Average rent: ${:.0}", report.summary.avg_rent)?;
        writeln!(
            self.writer,
            "  Average value score: {:.1}",
            report.summary.avg_value_score
        )?;
        if let Some(within_budget) = report.summary.within_budget {
            writeln!(self.writer, "  Within budget: {}", within_budget)?;
        }
        writeln!(
            self.writer,
            "  High value options: {}",
            report.summary.high_value
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.neighborhoods.is_empty() {
            writeln!(
                self.writer,
                "{} No neighborhoods matched the selection. Try raising the budget.",
                "!".yellow().bold()
            )?;
            return Ok(());
        }

        writeln!(self.writer, "Top recommendations:")?;
        for row in report.neighborhoods.iter().take(5) {
            let tier = ValueTier::from_score(row.value_score);
            writeln!(
                self.writer,
                "  {}. {} - ${:.0} rent, value {:.1} [{}]",
                row.rank,
                row.record.name.bold(),
                row.record.median_rent,
                row.value_score,
                tier_colored(tier)
            )?;
            writeln!(
                self.writer,
                "     affordability {:.0} | amenities {:.0} | transit {:.0} | safety {:.0} | schools {:.0} | growth {:.0}",
                row.affordability,
                row.record.amenity_score,
                row.record.transit_score,
                row.record.safety_score,
                row.record.school_score.unwrap_or_default(),
                row.record.growth_potential
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_listing(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.neighborhoods.len() <= 5 {
            return Ok(());
        }

        writeln!(
            self.writer,
            "{:>4}  {:<32} {:<14} {:>6} {:>8} {:>7}",
            "Rank", "Neighborhood", "County", "Rent", "Afford", "Value"
        )?;
        for row in &report.neighborhoods {
            writeln!(
                self.writer,
                "{:>4}  {:<32} {:<14} {:>6.0} {:>8.1} {:>7.1}",
                row.rank,
                row.record.name,
                row.record.county,
                row.record.median_rent,
                row.affordability,
                row.value_score
            )?;
        }
        Ok(())
    }
}

fn selection_line(report: &AnalysisReport) -> String {
    let county = report.county.as_deref().unwrap_or("All");
    match report.max_rent {
        Some(budget) => format!("{} / county {} / budget ${:.0}", report.city, county, budget),
        None => format!("{} / county {}", report.city, county),
    }
}

fn tier_colored(tier: ValueTier) -> ColoredString {
    match tier {
        ValueTier::Excellent => tier.label().green().bold(),
        ValueTier::Great => tier.label().blue(),
        ValueTier::Good => tier.label().yellow(),
        ValueTier::Fair => tier.label().dimmed(),
    }
}

/// Render a ranked row as a single plain-text line (used by -v logging).
pub fn format_row(row: &RankedNeighborhood) -> String {
    format!(
        "#{} {} ({}) rent ${:.0} value {:.1}",
        row.rank, row.record.name, row.record.county, row.record.median_rent, row.value_score
    )
}
