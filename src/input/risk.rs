//! Mechanical risk forecast payload.

use super::gap::CostFields;
use super::lenient;
use crate::normalize::{normalize_probability, parse_optional};
use serde::Deserialize;
use serde_json::Value;

/// A forecast failure with its probability and repair cost.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RiskItem {
    #[serde(deserialize_with = "lenient::string")]
    pub item: Option<String>,
    #[serde(rename = "riskLevel", deserialize_with = "lenient::string")]
    pub risk_level: Option<String>,
    #[serde(rename = "riskScore", deserialize_with = "lenient::number")]
    pub risk_score: Option<f64>,
    pub probability: Option<Value>,
    #[serde(rename = "alreadyFixed", deserialize_with = "lenient::flag")]
    pub already_fixed: bool,

    #[serde(rename = "forecastMileage")]
    pub forecast_mileage: Option<Value>,
    #[serde(rename = "forecastMileageMin")]
    pub forecast_mileage_min: Option<Value>,
    #[serde(rename = "forecastMileageMax")]
    pub forecast_mileage_max: Option<Value>,
    #[serde(rename = "milesUntilTypicalFailure")]
    pub miles_until_typical_failure: Option<Value>,

    #[serde(flatten)]
    pub cost: CostFields,
}

impl RiskItem {
    pub fn name(&self) -> &str {
        self.item.as_deref().unwrap_or("Unnamed risk")
    }

    /// Resolved items never count toward expected repair cost.
    pub fn is_already_fixed(&self) -> bool {
        self.already_fixed
            || self
                .risk_level
                .as_deref()
                .is_some_and(|level| level.to_ascii_lowercase().contains("already fixed"))
    }

    /// Miles from now until the forecast failure; `0.0` means unknown timing.
    ///
    /// An explicit single value wins, then the smaller end of a min/max pair,
    /// then `milesUntilTypicalFailure`. Zero counts as absent at every step,
    /// the same way an explicit zero cost falls through to the next field.
    pub fn forecast_mileage(&self) -> f64 {
        let positive = |value: Option<&Value>| parse_optional(value).filter(|miles| *miles > 0.0);

        let explicit = positive(self.forecast_mileage.as_ref());
        let range = match (
            positive(self.forecast_mileage_min.as_ref()),
            positive(self.forecast_mileage_max.as_ref()),
        ) {
            (Some(low), Some(high)) => Some(low.min(high)),
            (low, high) => low.or(high),
        };
        let typical = parse_optional(self.miles_until_typical_failure.as_ref());

        explicit.or(range).or(typical).unwrap_or(0.0).max(0.0)
    }

    pub fn probability(&self) -> f64 {
        normalize_probability(self.probability.as_ref())
    }

    pub fn normalized_cost(&self) -> f64 {
        self.cost.normalized()
    }

    /// Case-insensitive substring test against the declared risk level.
    pub fn level_mentions(&self, needle: &str) -> bool {
        self.risk_level
            .as_deref()
            .is_some_and(|level| level.to_ascii_lowercase().contains(&needle.to_ascii_lowercase()))
    }
}

/// Output of the risk-evaluation collaborator. Items are read from
/// `allItems` or `risks`; a bare array is taken as the item list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct RiskEvaluation {
    pub items: Vec<RiskItem>,
}

impl RiskEvaluation {
    pub fn new(items: Vec<RiskItem>) -> Self {
        Self { items }
    }
}

impl From<Value> for RiskEvaluation {
    fn from(value: Value) -> Self {
        let list = match &value {
            Value::Array(_) => Some(&value),
            _ => lenient::first_list(&value, &["allItems", "risks"]),
        };
        Self {
            items: lenient::items(list),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn risk(value: Value) -> RiskItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_forecast_mileage_priority() {
        let explicit = risk(json!({
            "forecastMileage": 15000,
            "forecastMileageMin": 5000,
            "milesUntilTypicalFailure": 1000
        }));
        assert_eq!(explicit.forecast_mileage(), 15000.0);

        let ranged = risk(json!({"forecastMileageMin": "8,000", "forecastMileageMax": 12000}));
        assert_eq!(ranged.forecast_mileage(), 8000.0);

        let typical = risk(json!({"milesUntilTypicalFailure": 22000}));
        assert_eq!(typical.forecast_mileage(), 22000.0);
    }

    #[test]
    fn test_inverted_forecast_pair_uses_smaller_end() {
        let inverted = risk(json!({"forecastMileageMin": 30000, "forecastMileageMax": 10000}));
        assert_eq!(inverted.forecast_mileage(), 10000.0);

        let max_only = risk(json!({"forecastMileageMax": "9,500"}));
        assert_eq!(max_only.forecast_mileage(), 9500.0);
    }

    #[test]
    fn test_zero_forecast_falls_through() {
        let zero_explicit = risk(json!({
            "forecastMileage": 0,
            "forecastMileageMin": 0,
            "forecastMileageMax": 14000,
            "milesUntilTypicalFailure": 2000
        }));
        assert_eq!(zero_explicit.forecast_mileage(), 14000.0);

        let only_typical = risk(json!({"forecastMileage": "0", "milesUntilTypicalFailure": 2000}));
        assert_eq!(only_typical.forecast_mileage(), 2000.0);
    }

    #[test]
    fn test_overdue_typical_failure_clamps_to_zero() {
        let overdue = risk(json!({"milesUntilTypicalFailure": -4000}));
        assert_eq!(overdue.forecast_mileage(), 0.0);
        assert_eq!(risk(json!({})).forecast_mileage(), 0.0);
    }

    #[test]
    fn test_already_fixed_detection() {
        assert!(risk(json!({"alreadyFixed": true})).is_already_fixed());
        assert!(risk(json!({"alreadyFixed": "yes"})).is_already_fixed());
        assert!(risk(json!({"riskLevel": "Already Fixed/Replaced"})).is_already_fixed());
        assert!(!risk(json!({"riskLevel": "High"})).is_already_fixed());
    }

    #[test]
    fn test_risk_evaluation_aliases() {
        let risks: RiskEvaluation = serde_json::from_value(json!({"risks": [{"item": "Turbo"}]})).unwrap();
        assert_eq!(risks.items[0].name(), "Turbo");

        let empty: RiskEvaluation = serde_json::from_value(json!({"allItems": null})).unwrap();
        assert!(empty.items.is_empty());
    }
}
