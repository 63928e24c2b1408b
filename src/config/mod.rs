mod loader;
mod scoring;

pub use loader::{
    find_config_file, load_config, load_config_from_path, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use scoring::{
    default_bonus_cap, default_bonus_per_keyword, default_due_now_penalty,
    default_high_confidence_score, default_medium_risk_score, default_overdue_penalty,
    default_penalty_per_flag, default_positive_keywords, default_red_flag_keywords,
    ConditionScoringConfig, RiskThresholds,
};

use serde::{Deserialize, Serialize};

/// Root configuration structure for the TCO engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TcoConfig {
    /// Condition score keyword table and weights
    #[serde(default)]
    pub condition: Option<ConditionScoringConfig>,

    /// Risk-score thresholds for expected repair cost
    #[serde(default)]
    pub risk: Option<RiskThresholds>,

    /// Horizon used when the request leaves it unspecified
    #[serde(default)]
    pub defaults: Option<HorizonDefaults>,
}

impl TcoConfig {
    pub fn condition(&self) -> ConditionScoringConfig {
        self.condition.clone().unwrap_or_default()
    }

    pub fn risk(&self) -> RiskThresholds {
        self.risk.unwrap_or_default()
    }

    pub fn defaults(&self) -> HorizonDefaults {
        self.defaults.unwrap_or_default()
    }

    /// Replace any invalid section with its defaults, logging why.
    pub fn sanitized(mut self) -> Self {
        if let Some(Err(e)) = self.condition.as_ref().map(ConditionScoringConfig::validate) {
            log::warn!("Invalid [condition] section: {}. Using defaults.", e);
            self.condition = Some(ConditionScoringConfig::default());
        }
        if let Some(Err(e)) = self.risk.as_ref().map(RiskThresholds::validate) {
            log::warn!("Invalid [risk] section: {}. Using defaults.", e);
            self.risk = Some(RiskThresholds::default());
        }
        if let Some(Err(e)) = self.defaults.as_ref().map(HorizonDefaults::validate) {
            log::warn!("Invalid [defaults] section: {}. Using defaults.", e);
            self.defaults = Some(HorizonDefaults::default());
        }
        self
    }
}

/// Ownership horizon applied when a request omits it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonDefaults {
    #[serde(default = "default_time_period_years")]
    pub time_period_years: f64,

    #[serde(default = "default_miles_per_year")]
    pub miles_per_year: f64,
}

impl Default for HorizonDefaults {
    fn default() -> Self {
        Self {
            time_period_years: default_time_period_years(),
            miles_per_year: default_miles_per_year(),
        }
    }
}

impl HorizonDefaults {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.time_period_years.is_finite() && self.time_period_years > 0.0) {
            return Err("time_period_years must be positive".to_string());
        }
        if !(self.miles_per_year.is_finite() && self.miles_per_year >= 0.0) {
            return Err("miles_per_year must be non-negative".to_string());
        }
        Ok(())
    }
}

pub fn default_time_period_years() -> f64 {
    3.0
}
pub fn default_miles_per_year() -> f64 {
    12_000.0
}
