use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vehicle-tco")]
#[command(about = "Vehicle total cost of ownership estimator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute total cost of ownership from upstream analysis results
    Calculate {
        /// JSON request with gapAnalysis, riskEvaluation, marketValuation, ...
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to searching for .vehicle-tco.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Ownership horizon in years, overriding the request
        #[arg(long = "years")]
        years: Option<f64>,

        /// Annual mileage, overriding the request
        #[arg(long = "miles-per-year")]
        miles_per_year: Option<f64>,

        /// Purchase price, overriding the request
        #[arg(long = "purchase-price", env = "VEHICLE_TCO_PURCHASE_PRICE")]
        purchase_price: Option<f64>,

        /// Current odometer reading, overriding the request
        #[arg(long = "current-mileage")]
        current_mileage: Option<f64>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
