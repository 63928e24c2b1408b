//! Scoring configuration for the condition score and risk tiers
//!
//! This module contains the tunable tables behind the heuristics:
//! - Keyword lists and weights for the condition score
//! - Risk-score thresholds for expected repair cost inclusion and tiering

use serde::{Deserialize, Serialize};

/// Keyword table and weights for the 0-100 condition score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionScoringConfig {
    /// Phrases that signal neglect or inconsistency in the evaluation text
    #[serde(default = "default_red_flag_keywords")]
    pub red_flag_keywords: Vec<String>,

    /// Phrases that signal diligent maintenance
    #[serde(default = "default_positive_keywords")]
    pub positive_keywords: Vec<String>,

    /// Points removed per distinct red-flag keyword present
    #[serde(default = "default_penalty_per_flag")]
    pub penalty_per_flag: f64,

    /// Points added per distinct positive keyword present
    #[serde(default = "default_bonus_per_keyword")]
    pub bonus_per_keyword: f64,

    /// Upper bound on the total positive-keyword bonus
    #[serde(default = "default_bonus_cap")]
    pub bonus_cap: f64,

    /// Points removed per overdue maintenance item
    #[serde(default = "default_overdue_penalty")]
    pub overdue_penalty: f64,

    /// Points removed per item due now
    #[serde(default = "default_due_now_penalty")]
    pub due_now_penalty: f64,
}

impl Default for ConditionScoringConfig {
    fn default() -> Self {
        Self {
            red_flag_keywords: default_red_flag_keywords(),
            positive_keywords: default_positive_keywords(),
            penalty_per_flag: default_penalty_per_flag(),
            bonus_per_keyword: default_bonus_per_keyword(),
            bonus_cap: default_bonus_cap(),
            overdue_penalty: default_overdue_penalty(),
            due_now_penalty: default_due_now_penalty(),
        }
    }
}

impl ConditionScoringConfig {
    // Pure function: Validate a single weight is a non-negative finite number
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if weight.is_finite() && weight >= 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a non-negative number", name))
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.penalty_per_flag, "penalty_per_flag")?;
        Self::validate_weight(self.bonus_per_keyword, "bonus_per_keyword")?;
        Self::validate_weight(self.bonus_cap, "bonus_cap")?;
        Self::validate_weight(self.overdue_penalty, "overdue_penalty")?;
        Self::validate_weight(self.due_now_penalty, "due_now_penalty")?;

        if self
            .red_flag_keywords
            .iter()
            .chain(&self.positive_keywords)
            .any(|keyword| keyword.trim().is_empty())
        {
            return Err("keyword lists must not contain blank entries".to_string());
        }

        Ok(())
    }
}

pub fn default_red_flag_keywords() -> Vec<String> {
    [
        "suspicious",
        "phishy",
        "abnormal",
        "concerning",
        "warning",
        "red flag",
        "inconsistent",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn default_positive_keywords() -> Vec<String> {
    [
        "well-maintained",
        "excellent",
        "proper",
        "regular",
        "consistent",
        "good",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn default_penalty_per_flag() -> f64 {
    10.0
}
pub fn default_bonus_per_keyword() -> f64 {
    3.0
}
pub fn default_bonus_cap() -> f64 {
    15.0
}
pub fn default_overdue_penalty() -> f64 {
    5.0
}
pub fn default_due_now_penalty() -> f64 {
    2.0
}

/// Risk-score thresholds (0-100 scale) for expected repair cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Score at or above which an item is high risk, and at which an item
    /// with unknown timing is still counted
    #[serde(default = "default_high_confidence_score")]
    pub high_confidence_score: f64,

    /// Score at or above which an item is medium risk
    #[serde(default = "default_medium_risk_score")]
    pub medium_risk_score: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_confidence_score: default_high_confidence_score(),
            medium_risk_score: default_medium_risk_score(),
        }
    }
}

impl RiskThresholds {
    pub fn is_valid_score(score: f64) -> bool {
        (0.0..=100.0).contains(&score)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !Self::is_valid_score(self.high_confidence_score) {
            return Err("high_confidence_score must be between 0 and 100".to_string());
        }
        if !Self::is_valid_score(self.medium_risk_score) {
            return Err("medium_risk_score must be between 0 and 100".to_string());
        }
        if self.medium_risk_score > self.high_confidence_score {
            return Err(format!(
                "medium_risk_score ({}) must not exceed high_confidence_score ({})",
                self.medium_risk_score, self.high_confidence_score
            ));
        }
        Ok(())
    }
}

pub fn default_high_confidence_score() -> f64 {
    70.0
}
pub fn default_medium_risk_score() -> f64 {
    50.0
}
