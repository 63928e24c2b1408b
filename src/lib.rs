// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod input;
pub mod normalize;
pub mod output;
pub mod tco;

// Re-export commonly used types
pub use crate::config::{load_config, TcoConfig};
pub use crate::errors::{Result, TcoError};
pub use crate::input::TcoInputs;
pub use crate::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::tco::{calculate_total_cost_of_ownership, TcoCalculator, TcoResult};
