//! CLI command implementations.
//!
//! - **calculate**: compute total cost of ownership for a request file
//! - **init**: write a default `.vehicle-tco.toml`

pub mod calculate;
pub mod init;

pub use calculate::{handle_calculate, parse_inputs, read_inputs, CalculateConfig};
pub use init::{init_config, write_default_config, DEFAULT_CONFIG};
