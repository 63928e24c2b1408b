//! Routine maintenance schedule payload.

use super::gap::CostFields;
use super::lenient;
use crate::normalize::{normalize_interval, Interval, VariantField};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoutineItem {
    #[serde(deserialize_with = "lenient::string")]
    pub item: Option<String>,

    pub interval_miles: Option<Value>,
    #[serde(rename = "intervalMiles")]
    pub interval_miles_camel: Option<Value>,
    pub interval_months: Option<Value>,
    #[serde(rename = "intervalMonths")]
    pub interval_months_camel: Option<Value>,

    #[serde(flatten)]
    pub cost: CostFields,
}

impl RoutineItem {
    pub fn name(&self) -> &str {
        self.item.as_deref().unwrap_or("Unnamed service")
    }

    pub fn interval(&self) -> Interval {
        normalize_interval(
            VariantField::new(self.interval_miles.as_ref(), self.interval_miles_camel.as_ref()),
            VariantField::new(
                self.interval_months.as_ref(),
                self.interval_months_camel.as_ref(),
            ),
        )
    }

    pub fn normalized_cost(&self) -> f64 {
        self.cost.normalized()
    }
}

/// Output of the schedule generator. Items are read from `items`,
/// `allItems` or `schedule`; a bare array is taken as the item list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct RoutineMaintenance {
    pub items: Vec<RoutineItem>,
}

impl RoutineMaintenance {
    pub fn new(items: Vec<RoutineItem>) -> Self {
        Self { items }
    }
}

impl From<Value> for RoutineMaintenance {
    fn from(value: Value) -> Self {
        let list = match &value {
            Value::Array(_) => Some(&value),
            _ => lenient::first_list(&value, &["items", "allItems", "schedule"]),
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

    #[test]
    fn test_routine_item_fields() {
        let item: RoutineItem = serde_json::from_value(json!({
            "item": "Oil change",
            "intervalMiles": "5,000",
            "intervalMonths": 6,
            "cost_range": "$60-$90"
        }))
        .unwrap();
        assert_eq!(item.interval(), Interval { miles: 5000.0, months: 6.0 });
        assert_eq!(item.normalized_cost(), 75.0);
    }

    #[test]
    fn test_schedule_alias() {
        let schedule: RoutineMaintenance =
            serde_json::from_value(json!({"schedule": [{"item": "Tires"}]})).unwrap();
        assert_eq!(schedule.items[0].name(), "Tires");
    }
}
