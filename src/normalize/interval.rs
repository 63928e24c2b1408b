//! Mileage/month interval normalization.

use super::parse_optional;
use serde::Serialize;
use serde_json::Value;

/// Service interval in miles and months. Zero means "no interval of that kind".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Interval {
    pub miles: f64,
    pub months: f64,
}

impl Interval {
    pub fn is_empty(&self) -> bool {
        self.miles <= 0.0 && self.months <= 0.0
    }
}

/// The snake_case and camelCase spellings of one logical field.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantField<'a> {
    pub snake: Option<&'a Value>,
    pub camel: Option<&'a Value>,
}

impl<'a> VariantField<'a> {
    pub fn new(snake: Option<&'a Value>, camel: Option<&'a Value>) -> Self {
        Self { snake, camel }
    }
}

/// Resolve one field: snake_case wins when it parses to a positive number,
/// otherwise camelCase, otherwise `0.0`.
pub fn resolve_variant(field: VariantField<'_>) -> f64 {
    [field.snake, field.camel]
        .into_iter()
        .filter_map(parse_optional)
        .find(|value| *value > 0.0)
        .unwrap_or(0.0)
}

pub fn normalize_interval(miles: VariantField<'_>, months: VariantField<'_>) -> Interval {
    Interval {
        miles: resolve_variant(miles),
        months: resolve_variant(months),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comma_formatted_miles() {
        let miles = json!("7,500");
        let months = json!(6);
        let interval = normalize_interval(
            VariantField::new(None, Some(&miles)),
            VariantField::new(Some(&months), None),
        );
        assert_eq!(interval, Interval { miles: 7500.0, months: 6.0 });
    }

    #[test]
    fn test_not_applicable_is_absent() {
        let na = json!("N/A");
        let empty = json!("");
        let interval = normalize_interval(
            VariantField::new(Some(&na), None),
            VariantField::new(None, Some(&empty)),
        );
        assert!(interval.is_empty());
    }

    #[test]
    fn test_snake_case_preferred_when_non_zero() {
        let snake = json!(5000);
        let camel = json!(3000);
        assert_eq!(resolve_variant(VariantField::new(Some(&snake), Some(&camel))), 5000.0);

        let zero = json!(0);
        assert_eq!(resolve_variant(VariantField::new(Some(&zero), Some(&camel))), 3000.0);
    }

    #[test]
    fn test_negative_interval_is_ignored() {
        let negative = json!(-100);
        assert_eq!(resolve_variant(VariantField::new(Some(&negative), None)), 0.0);
    }
}
