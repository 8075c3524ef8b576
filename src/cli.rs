use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::samples::CitySelection;

#[derive(Parser, Debug)]
#[command(name = "rentmap")]
#[command(about = "Neighborhood rental value scoring and ranking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score, rank and filter the neighborhood set
    Analyze {
        /// City to generate sample data for
        #[arg(long, value_enum, default_value = "all")]
        city: City,

        /// Filter to a single county ("All" means no filter)
        #[arg(long)]
        county: Option<String>,

        /// Monthly rent budget; keeps neighborhoods with rent <= budget
        #[arg(long = "max-rent", visible_alias = "budget")]
        max_rent: Option<f64>,

        /// Show only top N neighborhoods
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Seed for the sample record source
        #[arg(long, default_value_t = crate::samples::DEFAULT_SEED)]
        seed: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .rentmap.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Rank counties by average value score
    Counties {
        /// Number of counties to show
        #[arg(long, default_value = "10")]
        top: usize,

        /// City to generate sample data for
        #[arg(long, value_enum, default_value = "all")]
        city: City,

        /// Seed for the sample record source
        #[arg(long, default_value_t = crate::samples::DEFAULT_SEED)]
        seed: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .rentmap.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show statistics for one county
    Stats {
        /// County name (exact match)
        county: String,

        /// City to generate sample data for
        #[arg(long, value_enum, default_value = "all")]
        city: City,

        /// Seed for the sample record source
        #[arg(long, default_value_t = crate::samples::DEFAULT_SEED)]
        seed: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .rentmap.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum City {
    /// All California cities
    All,
    LosAngeles,
    SanFrancisco,
    SanDiego,
    SanJose,
    Oakland,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl From<City> for CitySelection {
    fn from(city: City) -> Self {
        match city {
            City::All => CitySelection::All,
            City::LosAngeles => CitySelection::LosAngeles,
            City::SanFrancisco => CitySelection::SanFrancisco,
            City::SanDiego => CitySelection::SanDiego,
            City::SanJose => CitySelection::SanJose,
            City::Oakland => CitySelection::Oakland,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
