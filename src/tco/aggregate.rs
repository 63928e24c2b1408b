//! Combines every calculator into the ownership-cost result.

use super::condition::{calculate_condition_score_with_config, ConditionScore};
use super::depreciation::{resolve_depreciation, Depreciation};
use super::eurc::{calculate_eurc_with_thresholds, ExpectedUnscheduledRepairs};
use super::icb::{calculate_icb, ImmediateCostBurden};
use super::routine::{calculate_projected_routine_costs, ProjectedRoutine};
use crate::config::TcoConfig;
use crate::input::TcoInputs;
use serde::Serialize;

/// Cost over the configured horizon. The name predates configurable
/// horizons; it is not limited to twelve months. Carries full copies of both
/// component results so readers can drill into `c12.icb.items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct C12 {
    pub total: f64,
    pub icb: ImmediateCostBurden,
    pub eurc: ExpectedUnscheduledRepairs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCosts {
    pub immediate_cost_burden: f64,
    pub projected_routine_maintenance: f64,
    pub expected_unscheduled_repairs: f64,
    pub depreciation: f64,
    pub total: f64,
}

/// Display-ready projection of the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcoSummary {
    pub purchase_price: Option<f64>,
    pub current_value: Option<f64>,
    pub time_period_years: f64,
    pub miles_per_year: f64,
    pub total_costs: TotalCosts,
    pub expected_sale_price: Option<f64>,
    #[serde(rename = "currentValueMinusPurchaseAndICB")]
    pub current_value_minus_purchase_and_icb: Option<f64>,
    pub total_loss: Option<f64>,
    pub condition_score: u8,
    pub adjusted_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcoResult {
    pub icb: ImmediateCostBurden,
    pub eurc: ExpectedUnscheduledRepairs,
    pub c12: C12,
    pub condition_score: ConditionScore,
    pub projected_routine: ProjectedRoutine,
    pub depreciation: Option<Depreciation>,
    pub total_costs: TotalCosts,
    pub summary: TcoSummary,
}

/// Runs the full computation with a fixed configuration.
///
/// Stateless apart from the configuration; one calculator can serve any
/// number of requests, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct TcoCalculator {
    config: TcoConfig,
}

impl TcoCalculator {
    pub fn new(config: TcoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TcoConfig {
        &self.config
    }

    pub fn calculate(&self, inputs: &TcoInputs) -> TcoResult {
        let defaults = self.config.defaults();
        let years = positive_or(inputs.time_period_years, defaults.time_period_years);
        let miles_per_year = non_negative_or(inputs.miles_per_year, defaults.miles_per_year);
        let horizon_months = years * 12.0;

        let icb = calculate_icb(inputs.gap_items());
        let eurc = calculate_eurc_with_thresholds(
            inputs.risk_items(),
            horizon_months,
            miles_per_year,
            &self.config.risk(),
        );
        let c12 = C12 {
            total: icb.total + eurc.total,
            icb: icb.clone(),
            eurc: eurc.clone(),
        };
        let condition_score = calculate_condition_score_with_config(
            inputs.evaluation_text(),
            inputs.gap_items(),
            &self.config.condition(),
        );
        let projected_routine = calculate_projected_routine_costs(
            inputs.routine_items(),
            horizon_months,
            miles_per_year,
            inputs.current_mileage,
        );
        let depreciation = inputs
            .market_valuation
            .as_ref()
            .and_then(|valuation| resolve_depreciation(valuation, years));

        let total_costs = total_costs(&icb, &eurc, &projected_routine, depreciation.as_ref());

        log::debug!(
            "TCO over {} years: icb={:.2} eurc={:.2} routine={:.2} depreciation={:.2}",
            years,
            total_costs.immediate_cost_burden,
            total_costs.expected_unscheduled_repairs,
            total_costs.projected_routine_maintenance,
            total_costs.depreciation
        );

        let summary = summarize(
            inputs.purchase_price,
            depreciation.as_ref(),
            years,
            miles_per_year,
            &total_costs,
            &c12,
            condition_score.score,
        );

        TcoResult {
            icb,
            eurc,
            c12,
            condition_score,
            projected_routine,
            depreciation,
            total_costs,
            summary,
        }
    }
}

/// Compute with the default configuration.
pub fn calculate_total_cost_of_ownership(inputs: &TcoInputs) -> TcoResult {
    TcoCalculator::default().calculate(inputs)
}

fn total_costs(
    icb: &ImmediateCostBurden,
    eurc: &ExpectedUnscheduledRepairs,
    routine: &ProjectedRoutine,
    depreciation: Option<&Depreciation>,
) -> TotalCosts {
    let depreciation = depreciation.map_or(0.0, |d| d.depreciation);
    TotalCosts {
        immediate_cost_burden: icb.total,
        projected_routine_maintenance: routine.total,
        expected_unscheduled_repairs: eurc.total,
        depreciation,
        total: icb.total + routine.total + eurc.total + depreciation,
    }
}

fn summarize(
    purchase_price: Option<f64>,
    depreciation: Option<&Depreciation>,
    years: f64,
    miles_per_year: f64,
    totals: &TotalCosts,
    c12: &C12,
    condition_score: u8,
) -> TcoSummary {
    let current_value = depreciation.map(|d| d.current_value);
    let expected_sale_price = depreciation.map(|d| d.expected_sale_price);

    TcoSummary {
        purchase_price,
        current_value,
        time_period_years: years,
        miles_per_year,
        total_costs: *totals,
        expected_sale_price,
        current_value_minus_purchase_and_icb: purchase_price
            .zip(current_value)
            .map(|(price, value)| value - (price + totals.immediate_cost_burden)),
        total_loss: purchase_price
            .map(|price| (price + totals.total) - expected_sale_price.unwrap_or(0.0)),
        condition_score,
        adjusted_value: purchase_price.unwrap_or(0.0) + c12.total,
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(fallback)
}

fn non_negative_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inputs(value: serde_json::Value) -> TcoInputs {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_request_degrades_to_zeroes() {
        let result = calculate_total_cost_of_ownership(&TcoInputs::default());

        assert_eq!(result.c12, C12::default());
        assert_eq!(result.total_costs, TotalCosts::default());
        assert!(result.depreciation.is_none());
        assert_eq!(result.summary.time_period_years, 3.0);
        assert_eq!(result.summary.miles_per_year, 12000.0);
        assert_eq!(result.summary.current_value_minus_purchase_and_icb, None);
        assert_eq!(result.summary.total_loss, None);
        assert_eq!(result.summary.adjusted_value, 0.0);
        assert_eq!(result.summary.condition_score, 0);
    }

    #[test]
    fn test_horizon_uses_request_values() {
        let result = calculate_total_cost_of_ownership(&inputs(json!({
            "timePeriodYears": 2,
            "milesPerYear": 8000,
            "riskEvaluation": {"allItems": [
                {"item": "Clutch", "forecastMileage": 16000, "probability": 50, "cost": 1200},
                {"item": "Turbo", "forecastMileage": 16001, "probability": 50, "cost": 3000}
            ]}
        })));

        assert_eq!(result.eurc.total, 600.0);
        assert_eq!(result.summary.time_period_years, 2.0);
        assert_eq!(result.projected_routine.horizon_miles, 16000.0);
    }

    #[test]
    fn test_invalid_horizon_falls_back_to_config() {
        let config = TcoConfig {
            defaults: Some(crate::config::HorizonDefaults {
                time_period_years: 5.0,
                miles_per_year: 10000.0,
            }),
            ..Default::default()
        };
        let result = TcoCalculator::new(config).calculate(&inputs(json!({
            "timePeriodYears": 0,
            "milesPerYear": "lots"
        })));
        assert_eq!(result.summary.time_period_years, 5.0);
        assert_eq!(result.summary.miles_per_year, 10000.0);
    }

    #[test]
    fn test_total_loss_without_valuation_uses_zero_sale_price() {
        let result = calculate_total_cost_of_ownership(&inputs(json!({
            "purchasePrice": 15000,
            "gapAnalysis": {"allItems": [{"status": "Due Now", "cost": 250}]}
        })));

        assert_eq!(result.summary.total_loss, Some(15250.0));
        assert_eq!(result.summary.expected_sale_price, None);
        assert_eq!(result.summary.current_value_minus_purchase_and_icb, None);
        assert_eq!(result.summary.adjusted_value, 15250.0);
    }

    #[test]
    fn test_summary_field_names() {
        let result = calculate_total_cost_of_ownership(&TcoInputs::default());
        let value = serde_json::to_value(&result).unwrap();

        for key in ["icb", "eurc", "c12", "conditionScore", "projectedRoutine", "depreciation", "totalCosts", "summary"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert!(value["summary"].get("currentValueMinusPurchaseAndICB").is_some());
        assert!(value["totalCosts"].get("expectedUnscheduledRepairs").is_some());
        assert!(value["c12"]["icb"].is_object());
        assert!(value["c12"]["eurc"]["breakdown"].is_object());
        assert!(value["summary"]["totalCosts"].is_object());
    }

    #[test]
    fn test_c12_and_summary_nest_component_results() {
        let result = calculate_total_cost_of_ownership(&inputs(json!({
            "gapAnalysis": {"allItems": [{"item": "Coolant", "status": "Overdue", "cost": 100}]}
        })));
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["c12"]["total"], json!(100.0));
        assert_eq!(value["c12"]["icb"]["total"], json!(100.0));
        assert_eq!(value["c12"]["icb"]["items"][0]["item"], json!("Coolant"));
        assert_eq!(value["c12"]["eurc"]["total"], json!(0.0));
        assert_eq!(value["summary"]["totalCosts"]["total"], json!(100.0));
        assert_eq!(value["summary"]["totalCosts"]["immediateCostBurden"], json!(100.0));
        assert_eq!(result.c12.icb, result.icb);
        assert_eq!(result.summary.total_costs, result.total_costs);
        assert_eq!(value["depreciation"], json!(null));
    }
}
