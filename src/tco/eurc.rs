//! Expected Unscheduled Repair Cost: probability-weighted forecast repairs
//! that land inside the ownership horizon.

use super::horizon_miles;
use crate::config::RiskThresholds;
use crate::input::RiskItem;
use serde::Serialize;

/// Exclusive risk tier of an applied item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskTier {
    HighRisk,
    MediumRisk,
    LowRisk,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EurcItem {
    pub item: String,
    pub risk_level: Option<String>,
    pub risk_score: Option<f64>,
    pub forecast_mileage: f64,
    pub probability: f64,
    pub cost: f64,
    pub expected_cost: f64,
    pub tier: RiskTier,
}

/// Per-tier sums. Tiers are exclusive, so they add up to the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EurcBreakdown {
    pub high_risk: f64,
    pub medium_risk: f64,
    pub low_risk: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpectedUnscheduledRepairs {
    pub total: f64,
    pub items: Vec<EurcItem>,
    pub breakdown: EurcBreakdown,
}

pub fn calculate_eurc(
    items: &[RiskItem],
    horizon_months: f64,
    miles_per_year: f64,
) -> ExpectedUnscheduledRepairs {
    calculate_eurc_with_thresholds(
        items,
        horizon_months,
        miles_per_year,
        &RiskThresholds::default(),
    )
}

pub fn calculate_eurc_with_thresholds(
    items: &[RiskItem],
    horizon_months: f64,
    miles_per_year: f64,
    thresholds: &RiskThresholds,
) -> ExpectedUnscheduledRepairs {
    let horizon = horizon_miles(horizon_months, miles_per_year);

    items
        .iter()
        .filter_map(|item| applied_item(item, horizon, thresholds))
        .fold(ExpectedUnscheduledRepairs::default(), |mut eurc, applied| {
            eurc.total += applied.expected_cost;
            match applied.tier {
                RiskTier::HighRisk => eurc.breakdown.high_risk += applied.expected_cost,
                RiskTier::MediumRisk => eurc.breakdown.medium_risk += applied.expected_cost,
                RiskTier::LowRisk => eurc.breakdown.low_risk += applied.expected_cost,
            }
            eurc.items.push(applied);
            eurc
        })
}

/// Pure function: does a forecast fall inside the horizon?
///
/// Unknown timing (`0`) still counts when the risk score is high-confidence.
pub fn within_horizon(
    forecast_mileage: f64,
    horizon_miles: f64,
    risk_score: Option<f64>,
    thresholds: &RiskThresholds,
) -> bool {
    if forecast_mileage > 0.0 {
        forecast_mileage <= horizon_miles
    } else {
        risk_score.is_some_and(|score| score >= thresholds.high_confidence_score)
    }
}

/// Pure function: assign the exclusive risk tier
pub fn classify_tier(item: &RiskItem, thresholds: &RiskThresholds) -> RiskTier {
    let score = item.risk_score.unwrap_or(0.0);
    if score >= thresholds.high_confidence_score
        || item.level_mentions("high")
        || item.level_mentions("critical")
    {
        RiskTier::HighRisk
    } else if score >= thresholds.medium_risk_score {
        RiskTier::MediumRisk
    } else {
        RiskTier::LowRisk
    }
}

fn applied_item(item: &RiskItem, horizon: f64, thresholds: &RiskThresholds) -> Option<EurcItem> {
    if item.is_already_fixed() {
        log::debug!("EURC: '{}' already fixed, excluded", item.name());
        return None;
    }

    let forecast_mileage = item.forecast_mileage();
    if !within_horizon(forecast_mileage, horizon, item.risk_score, thresholds) {
        return None;
    }

    let probability = item.probability();
    let cost = item.normalized_cost();
    let expected_cost = probability * cost;
    if expected_cost <= 0.0 {
        return None;
    }

    Some(EurcItem {
        item: item.name().to_string(),
        risk_level: item.risk_level.clone(),
        risk_score: item.risk_score,
        forecast_mileage,
        probability,
        cost,
        expected_cost,
        tier: classify_tier(item, thresholds),
    })
}
