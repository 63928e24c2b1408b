use crate::config::CONFIG_FILE_NAME;
use crate::errors::TcoError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Vehicle TCO Configuration

[defaults]
time_period_years = 3
miles_per_year = 12000

[risk]
high_confidence_score = 70
medium_risk_score = 50

[condition]
red_flag_keywords = [
    "suspicious",
    "phishy",
    "abnormal",
    "concerning",
    "warning",
    "red flag",
    "inconsistent",
]
positive_keywords = ["well-maintained", "excellent", "proper", "regular", "consistent", "good"]
penalty_per_flag = 10
bonus_per_keyword = 3
bonus_cap = 15
overdue_penalty = 5
due_now_penalty = 2
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(config_path, DEFAULT_CONFIG).map_err(|e| TcoError::io(config_path, e))?;
    log::debug!("Wrote default config to {}", config_path.display());
    Ok(())
}
