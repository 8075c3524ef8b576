use anyhow::Result;
use clap::Parser;
use rentmap::cli::{Cli, Commands};
use rentmap::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            city,
            county,
            max_rent,
            top,
            seed,
            format,
            output,
            config,
        } => commands::analyze::handle_analyze(commands::analyze::AnalyzeConfig {
            city: city.into(),
            county,
            max_rent,
            top,
            seed,
            format: format.into(),
            output,
            config,
        }),
        Commands::Counties {
            top,
            city,
            seed,
            format,
            output,
            config,
        } => commands::counties::handle_counties(commands::counties::CountiesConfig {
            top,
            city: city.into(),
            seed,
            format: format.into(),
            output,
            config,
        }),
        Commands::Stats {
            county,
            city,
            seed,
            format,
            output,
            config,
        } => commands::stats::handle_stats(commands::stats::StatsConfig {
            county,
            city: city.into(),
            seed,
            format: format.into(),
            output,
            config,
        }),
        Commands::Init { force } => commands::init::init_config(force),
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
