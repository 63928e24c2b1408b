//! Cost normalization.
//!
//! A cost arrives in one of four shapes. [`CostSpec`] closes over them and
//! [`CostSpec::normalize`] collapses any of them to a single non-negative
//! midpoint.

use super::{parse_leading_float, parse_number};
use serde_json::Value;

/// The closed set of cost representations emitted by upstream analyses.
#[derive(Debug, Clone, PartialEq)]
pub enum CostSpec {
    /// `"$min-$max"`, `"min-max"` or a lone formatted amount such as `"$1,200"`.
    RangeString(String),
    /// An object value `{ "min": .., "max": .. }`.
    MinMaxObject { min: Option<f64>, max: Option<f64> },
    /// Two sibling fields on the item, e.g. `costMin` / `costMax`.
    PairedScalars { min: Option<f64>, max: Option<f64> },
    /// A single numeric field.
    SingleScalar(Option<f64>),
}

impl CostSpec {
    /// Classify a single cost field value.
    ///
    /// Returns `None` for values that carry no cost shape at all (null,
    /// booleans, arrays, objects without `min`/`max`).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::RangeString(s.clone())),
            Value::Number(_) => Some(Self::SingleScalar(parse_number(value))),
            Value::Object(map) if map.contains_key("min") || map.contains_key("max") => {
                Some(Self::MinMaxObject {
                    min: map.get("min").and_then(parse_number),
                    max: map.get("max").and_then(parse_number),
                })
            }
            _ => None,
        }
    }

    /// Build a paired-field spec when at least one of the two fields is present.
    pub fn paired(min: Option<&Value>, max: Option<&Value>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Self::PairedScalars {
            min: min.and_then(parse_number),
            max: max.and_then(parse_number),
        })
    }

    /// Collapse to a single non-negative amount. Unparseable data yields `0.0`.
    pub fn normalize(&self) -> f64 {
        let raw = match self {
            Self::RangeString(text) => midpoint_of_range(text),
            Self::MinMaxObject { min, max } | Self::PairedScalars { min, max } => {
                midpoint(*min, *max)
            }
            Self::SingleScalar(value) => value.unwrap_or(0.0),
        };
        sanitize(raw)
    }
}

/// Normalize a single cost spec. See [`CostSpec::normalize`].
pub fn normalize_cost(spec: &CostSpec) -> f64 {
    spec.normalize()
}

/// Walk candidates in priority order and return the first positive amount.
///
/// An explicit zero does not stop the search, so an item with `cost: 0` and
/// `oemCost: "$300"` resolves to `300`.
pub fn first_positive_cost<I>(candidates: I) -> f64
where
    I: IntoIterator<Item = CostSpec>,
{
    candidates
        .into_iter()
        .map(|spec| spec.normalize())
        .find(|cost| *cost > 0.0)
        .unwrap_or(0.0)
}

fn midpoint_of_range(text: &str) -> f64 {
    let bounds: Vec<f64> = text
        .split(['-', '\u{2013}', '\u{2014}'])
        .filter_map(parse_leading_float)
        .collect();

    match bounds.as_slice() {
        [] => 0.0,
        [single] => *single,
        [low, high, ..] => (low + high) / 2.0,
    }
}

fn midpoint(min: Option<f64>, max: Option<f64>) -> f64 {
    match (min, max) {
        (Some(low), Some(high)) => (low + high) / 2.0,
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => 0.0,
    }
}

fn sanitize(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}
