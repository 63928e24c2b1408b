//! Resale value and depreciation over the horizon.

use crate::input::{MarketValuation, ValuationBand};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Depreciation {
    pub current_value: f64,
    pub expected_sale_price: f64,
    /// Negative when the projection shows appreciation.
    pub depreciation: f64,
    pub annual_rate: f64,
}

/// Current value by fixed preference: averages, then maxima, then minima,
/// private party before retail at each step. `0.0` when nothing is usable.
pub fn resolve_current_value(valuation: &MarketValuation) -> f64 {
    let Some(current) = valuation.current_valuation.as_ref() else {
        return 0.0;
    };
    let private = current.private_party.unwrap_or_default();
    let retail = current.retail.unwrap_or_default();

    let pick: [fn(&ValuationBand) -> Option<f64>; 3] = [
        |b: &ValuationBand| b.average,
        |b: &ValuationBand| b.max,
        |b: &ValuationBand| b.min,
    ];
    pick.iter()
        .flat_map(|field| [field(&private), field(&retail)])
        .flatten()
        .find(|value| *value > 0.0)
        .unwrap_or(0.0)
}

/// `None` when no current value can be resolved.
pub fn resolve_depreciation(valuation: &MarketValuation, horizon_years: f64) -> Option<Depreciation> {
    let current_value = resolve_current_value(valuation);
    if current_value <= 0.0 {
        log::debug!("Depreciation: no usable current value");
        return None;
    }

    let data = valuation.depreciation.as_ref();
    let annual_rate = data
        .and_then(|d| d.annual_depreciation_rate)
        .unwrap_or(0.0);

    let projected = data
        .and_then(|d| d.projected_values.as_ref())
        .and_then(|values| values.for_years(horizon_years))
        .and_then(|value| value.preferred());

    let expected_sale_price = projected
        .unwrap_or_else(|| extrapolate_value(current_value, annual_rate, horizon_years));

    Some(Depreciation {
        current_value,
        expected_sale_price,
        depreciation: current_value - expected_sale_price,
        annual_rate,
    })
}

/// Pure function: compound a percent-per-year rate over `years`
pub fn extrapolate_value(current_value: f64, annual_rate_percent: f64, years: f64) -> f64 {
    current_value * (1.0 - annual_rate_percent / 100.0).powf(years)
}
