use anyhow::Result;
use clap::Parser;
use vehicle_tco::cli::{Cli, Commands};
use vehicle_tco::commands::{self, CalculateConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            input,
            format,
            output,
            config,
            years,
            miles_per_year,
            purchase_price,
            current_mileage,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_calculate(CalculateConfig {
                input,
                format,
                output,
                config,
                years,
                miles_per_year,
                purchase_price,
                current_mileage,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(force)
        }
    }
}

// Pure function: map -v count to a log level
fn level_for_verbosity(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// `RUST_LOG` still wins when set.
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
