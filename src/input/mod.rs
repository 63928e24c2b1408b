//! Upstream collaborator payloads and the aggregator request.
//!
//! All models deserialize leniently: wrong scalar types are coerced, malformed
//! sub-sections become `None`, and non-object list entries are skipped. A
//! payload that is valid JSON never fails to load because of its contents.

pub mod gap;
pub mod lenient;
pub mod market;
pub mod risk;
pub mod routine;

pub use gap::{CostFields, GapAnalysis, GapItem};
pub use market::{
    CurrentValuation, DepreciationData, MarketValuation, ProjectedValue, ProjectedValues,
    ValuationBand,
};
pub use risk::{RiskEvaluation, RiskItem};
pub use routine::{RoutineItem, RoutineMaintenance};

use serde::Deserialize;
use serde_json::Value;

/// Free-text evaluation from the service-history analyzer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ServiceHistoryAnalysis {
    pub evaluation: Option<String>,
}

impl ServiceHistoryAnalysis {
    pub fn new(evaluation: impl Into<String>) -> Self {
        Self {
            evaluation: Some(evaluation.into()),
        }
    }

    /// The evaluation text, treating blank text as missing.
    pub fn evaluation_text(&self) -> Option<&str> {
        self.evaluation.as_deref().filter(|text| !text.trim().is_empty())
    }
}

impl From<Value> for ServiceHistoryAnalysis {
    fn from(value: Value) -> Self {
        let evaluation = match value {
            Value::String(text) => Some(text),
            Value::Object(mut map) => match map.remove("evaluation") {
                Some(Value::String(text)) => Some(text),
                _ => None,
            },
            _ => None,
        };
        Self { evaluation }
    }
}

/// Everything the aggregator consumes in one call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TcoInputs {
    pub gap_analysis: Option<GapAnalysis>,
    pub risk_evaluation: Option<RiskEvaluation>,
    pub service_history_analysis: Option<ServiceHistoryAnalysis>,
    pub routine_maintenance: Option<RoutineMaintenance>,
    #[serde(deserialize_with = "lenient::nested")]
    pub market_valuation: Option<MarketValuation>,
    #[serde(deserialize_with = "lenient::number")]
    pub purchase_price: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub time_period_years: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub miles_per_year: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub current_mileage: Option<f64>,
}

impl TcoInputs {
    pub fn gap_items(&self) -> &[GapItem] {
        self.gap_analysis.as_ref().map_or(&[], |gap| gap.items.as_slice())
    }

    pub fn risk_items(&self) -> &[RiskItem] {
        self.risk_evaluation
            .as_ref()
            .map_or(&[], |risk| risk.items.as_slice())
    }

    pub fn routine_items(&self) -> &[RoutineItem] {
        self.routine_maintenance
            .as_ref()
            .map_or(&[], |routine| routine.items.as_slice())
    }

    pub fn evaluation_text(&self) -> Option<&str> {
        self.service_history_analysis
            .as_ref()
            .and_then(ServiceHistoryAnalysis::evaluation_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inputs_from_camel_case_payload() {
        let inputs: TcoInputs = serde_json::from_value(json!({
            "gapAnalysis": {"allItems": [{"item": "Coolant", "status": "Overdue", "cost": 100}]},
            "riskEvaluation": {"risks": []},
            "serviceHistoryAnalysis": {"evaluation": "Regular oil changes."},
            "purchasePrice": "$20,000",
            "timePeriodYears": 3,
            "milesPerYear": "12,000"
        }))
        .unwrap();

        assert_eq!(inputs.gap_items().len(), 1);
        assert!(inputs.risk_items().is_empty());
        assert!(inputs.routine_items().is_empty());
        assert_eq!(inputs.evaluation_text(), Some("Regular oil changes."));
        assert_eq!(inputs.purchase_price, Some(20000.0));
        assert_eq!(inputs.miles_per_year, Some(12000.0));
        assert!(inputs.market_valuation.is_none());
    }

    #[test]
    fn test_blank_evaluation_is_missing() {
        let history = ServiceHistoryAnalysis::new("   ");
        assert_eq!(history.evaluation_text(), None);

        let from_string = ServiceHistoryAnalysis::from(json!("Looks good"));
        assert_eq!(from_string.evaluation_text(), Some("Looks good"));
    }

    #[test]
    fn test_null_sections() {
        let inputs: TcoInputs = serde_json::from_value(json!({
            "gapAnalysis": null,
            "marketValuation": null,
            "purchasePrice": null
        }))
        .unwrap();
        assert!(inputs.gap_items().is_empty());
        assert!(inputs.market_valuation.is_none());
        assert!(inputs.purchase_price.is_none());
    }
}
