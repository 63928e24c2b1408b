//! Market valuation payload.

use super::lenient;
use crate::normalize::parse_number;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketValuation {
    #[serde(deserialize_with = "lenient::nested")]
    pub current_valuation: Option<CurrentValuation>,
    #[serde(deserialize_with = "lenient::nested")]
    pub depreciation: Option<DepreciationData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentValuation {
    pub private_party: Option<ValuationBand>,
    pub retail: Option<ValuationBand>,
}

/// Average/min/max for one sales channel. A bare number is its average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ValuationBand {
    pub average: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl From<Value> for ValuationBand {
    fn from(value: Value) -> Self {
        match &value {
            Value::Object(map) => Self {
                average: map.get("average").and_then(parse_number),
                min: map.get("min").and_then(parse_number),
                max: map.get("max").and_then(parse_number),
            },
            scalar => Self {
                average: parse_number(scalar),
                ..Self::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepreciationData {
    /// Percent per year; `"15%"` and `15` are equivalent.
    #[serde(deserialize_with = "lenient::number")]
    pub annual_depreciation_rate: Option<f64>,
    #[serde(deserialize_with = "lenient::nested")]
    pub projected_values: Option<ProjectedValues>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectedValues {
    pub one_year: Option<ProjectedValue>,
    pub two_years: Option<ProjectedValue>,
    pub three_years: Option<ProjectedValue>,
    pub five_years: Option<ProjectedValue>,
}

impl ProjectedValues {
    /// The bucket for an exact whole-year horizon, if one is published.
    pub fn for_years(&self, years: f64) -> Option<&ProjectedValue> {
        let bucket = match years {
            y if y == 1.0 => &self.one_year,
            y if y == 2.0 => &self.two_years,
            y if y == 3.0 => &self.three_years,
            y if y == 5.0 => &self.five_years,
            _ => &None,
        };
        bucket.as_ref()
    }
}

/// Projected resale value for one horizon. A bare number is the
/// private-party value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ProjectedValue {
    pub private_party: Option<f64>,
    pub retail: Option<f64>,
}

impl ProjectedValue {
    /// Private-party value when positive, otherwise retail.
    pub fn preferred(&self) -> Option<f64> {
        [self.private_party, self.retail]
            .into_iter()
            .flatten()
            .find(|value| *value > 0.0)
    }
}

impl From<Value> for ProjectedValue {
    fn from(value: Value) -> Self {
        match &value {
            Value::Object(map) => Self {
                private_party: map.get("privateParty").and_then(channel_value),
                retail: map.get("retail").and_then(channel_value),
            },
            scalar => Self {
                private_party: parse_number(scalar),
                retail: None,
            },
        }
    }
}

fn channel_value(value: &Value) -> Option<f64> {
    match value {
        Value::Object(map) => map.get("average").and_then(parse_number),
        scalar => parse_number(scalar),
    }
}
