//! Projected routine maintenance spend over the horizon.

use super::horizon_miles;
use crate::input::RoutineItem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedItem {
    pub item: String,
    pub interval_miles: f64,
    pub interval_months: f64,
    pub occurrences: u64,
    pub cost_per_service: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedRoutine {
    pub total: f64,
    pub items: Vec<ProjectedItem>,
    pub horizon_miles: f64,
    pub current_mileage: Option<f64>,
    pub horizon_end_mileage: Option<f64>,
}

/// Pure function: services needed to cover `horizon` at a fixed `interval`
pub fn occurrences_within(horizon: f64, interval: f64) -> u64 {
    if interval <= 0.0 || horizon <= 0.0 {
        return 0;
    }
    (horizon / interval).ceil() as u64
}

pub fn calculate_projected_routine_costs(
    items: &[RoutineItem],
    horizon_months: f64,
    miles_per_year: f64,
    current_mileage: Option<f64>,
) -> ProjectedRoutine {
    let horizon = horizon_miles(horizon_months, miles_per_year);

    let items: Vec<ProjectedItem> = items
        .iter()
        .filter_map(|item| project_item(item, horizon, horizon_months))
        .collect();

    ProjectedRoutine {
        total: items.iter().map(|item| item.total).sum(),
        items,
        horizon_miles: horizon,
        current_mileage,
        horizon_end_mileage: current_mileage.map(|odometer| odometer + horizon),
    }
}

fn project_item(item: &RoutineItem, horizon_miles: f64, horizon_months: f64) -> Option<ProjectedItem> {
    let interval = item.interval();
    if interval.is_empty() {
        log::debug!("Routine: '{}' has no interval, skipped", item.name());
        return None;
    }

    // Whichever interval comes first governs the cadence
    let occurrences = occurrences_within(horizon_miles, interval.miles)
        .max(occurrences_within(horizon_months, interval.months));
    let cost = item.normalized_cost();
    if occurrences == 0 || cost <= 0.0 {
        return None;
    }

    Some(ProjectedItem {
        item: item.name().to_string(),
        interval_miles: interval.miles,
        interval_months: interval.months,
        occurrences,
        cost_per_service: cost,
        total: cost * occurrences as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn routine(value: serde_json::Value) -> RoutineItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_occurrences_within() {
        assert_eq!(occurrences_within(12000.0, 5000.0), 3);
        assert_eq!(occurrences_within(24.0, 12.0), 2);
        assert_eq!(occurrences_within(10000.0, 5000.0), 2);
        assert_eq!(occurrences_within(12000.0, 0.0), 0);
        assert_eq!(occurrences_within(0.0, 5000.0), 0);
    }

    #[test]
    fn test_tiny_interval_count_exceeds_u32() {
        let interval = 1.0 / 1_048_576.0;
        assert_eq!(occurrences_within(36000.0, interval), 37_748_736_000);

        let items = vec![routine(json!({"item": "Wiper check", "intervalMiles": interval, "cost": 1}))];
        let projected = calculate_projected_routine_costs(&items, 36.0, 12000.0, None);
        assert_eq!(projected.items[0].occurrences, 37_748_736_000);
        assert_eq!(projected.total, 37_748_736_000.0);
    }

    #[test]
    fn test_more_frequent_interval_wins() {
        // 24 months at 6,000 mi/yr: 12,000 miles
        let items = vec![routine(json!({
            "item": "Oil change",
            "intervalMiles": 5000,
            "intervalMonths": 12,
            "cost": 80
        }))];
        let projected = calculate_projected_routine_costs(&items, 24.0, 6000.0, Some(45000.0));

        assert_eq!(projected.items[0].occurrences, 3);
        assert_eq!(projected.total, 240.0);
        assert_eq!(projected.horizon_miles, 12000.0);
        assert_eq!(projected.horizon_end_mileage, Some(57000.0));
    }

    #[test]
    fn test_month_only_interval() {
        let items = vec![routine(json!({"item": "Brake fluid", "interval_months": "24", "cost_range": "$90-$110"}))];
        let projected = calculate_projected_routine_costs(&items, 36.0, 12000.0, None);

        assert_eq!(projected.items[0].occurrences, 2);
        assert_eq!(projected.total, 200.0);
        assert_eq!(projected.horizon_end_mileage, None);
    }

    #[test]
    fn test_items_without_interval_or_cost_skipped() {
        let items = vec![
            routine(json!({"item": "Detailing", "intervalMiles": "N/A", "cost": 150})),
            routine(json!({"item": "Rotation", "intervalMiles": 7500, "cost": "included"})),
        ];
        let projected = calculate_projected_routine_costs(&items, 12.0, 12000.0, None);
        assert!(projected.items.is_empty());
        assert_eq!(projected.total, 0.0);
    }
}
