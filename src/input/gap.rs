//! Maintenance gap analysis payload.

use super::lenient;
use crate::normalize::{first_positive_cost, CostSpec};
use serde::Deserialize;
use serde_json::Value;

/// One maintenance item as judged by the gap-analysis collaborator.
///
/// Interval and last-service fields are accepted on the wire but unused:
/// routine projection reads its cadence from the routine schedule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GapItem {
    #[serde(deserialize_with = "lenient::string")]
    pub item: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub severity: Option<String>,
    #[serde(rename = "riskNote", deserialize_with = "lenient::string")]
    pub risk_note: Option<String>,

    #[serde(flatten)]
    pub cost: CostFields,
}

impl GapItem {
    pub fn name(&self) -> &str {
        self.item.as_deref().unwrap_or("Unnamed item")
    }

    pub fn normalized_cost(&self) -> f64 {
        self.cost.normalized()
    }
}

/// Every field name under which a cost has been observed, kept raw so the
/// priority order can be applied after deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CostFields {
    pub cost_range: Option<Value>,
    #[serde(rename = "costRange")]
    pub cost_range_camel: Option<Value>,
    pub cost_min: Option<Value>,
    pub cost_max: Option<Value>,
    #[serde(rename = "costMin")]
    pub cost_min_camel: Option<Value>,
    #[serde(rename = "costMax")]
    pub cost_max_camel: Option<Value>,
    pub cost: Option<Value>,
    pub oem_cost: Option<Value>,
    #[serde(rename = "oemCost")]
    pub oem_cost_camel: Option<Value>,
}

impl CostFields {
    /// Cost specs in resolution order.
    pub fn candidates(&self) -> Vec<CostSpec> {
        [
            self.cost_range.as_ref().and_then(CostSpec::from_value),
            self.cost_range_camel.as_ref().and_then(CostSpec::from_value),
            CostSpec::paired(self.cost_min.as_ref(), self.cost_max.as_ref()),
            CostSpec::paired(self.cost_min_camel.as_ref(), self.cost_max_camel.as_ref()),
            self.cost.as_ref().and_then(CostSpec::from_value),
            self.oem_cost.as_ref().and_then(CostSpec::from_value),
            self.oem_cost_camel.as_ref().and_then(CostSpec::from_value),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn normalized(&self) -> f64 {
        first_positive_cost(self.candidates())
    }
}

/// Output of the gap-analysis collaborator. Items are read from `allItems`
/// or `items`; a bare array is taken as the item list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct GapAnalysis {
    pub items: Vec<GapItem>,
}

impl GapAnalysis {
    pub fn new(items: Vec<GapItem>) -> Self {
        Self { items }
    }
}

impl From<Value> for GapAnalysis {
    fn from(value: Value) -> Self {
        let list = match &value {
            Value::Array(_) => Some(&value),
            _ => lenient::first_list(&value, &["allItems", "items"]),
        };
        Self {
            items: lenient::items(list),
        }
    }
}
