//! Leaf normalizers shared by every calculator.
//!
//! Upstream analyses describe costs, intervals and probabilities in whatever
//! shape the producing model happened to emit: `"$1,200-$1,500"`, `{min, max}`
//! objects, bare numbers, `"N/A"`, percent strings. Everything in this module
//! is a total function over those shapes. Unparseable input becomes `0`, never
//! an error.

pub mod cost;
pub mod interval;
pub mod probability;

pub use cost::{first_positive_cost, normalize_cost, CostSpec};
pub use interval::{normalize_interval, resolve_variant, Interval, VariantField};
pub use probability::normalize_probability;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").expect("valid number pattern"));

/// Parse the numeric prefix of a string after dropping currency symbols,
/// thousands separators and surrounding whitespace.
///
/// `"$1,250.50 USD"` parses as `1250.5`; `"N/A"` and `""` parse as `None`.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    let cleaned = cleaned.trim_start();

    LEADING_NUMBER
        .find(cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Lenient scalar extraction from an arbitrary JSON value.
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) if is_absent_marker(s) => None,
        Value::String(s) => parse_leading_float(s),
        _ => None,
    }
}

/// `Option`-aware variant of [`parse_number`] for optional input fields.
pub fn parse_optional(value: Option<&Value>) -> Option<f64> {
    value.and_then(parse_number)
}

fn is_absent_marker(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_leading_float_strips_currency_and_commas() {
        assert_eq!(parse_leading_float("$1,250"), Some(1250.0));
        assert_eq!(parse_leading_float("  $99.95 "), Some(99.95));
        assert_eq!(parse_leading_float("450 USD"), Some(450.0));
    }

    #[test]
    fn test_parse_leading_float_rejects_text() {
        assert_eq!(parse_leading_float("unknown"), None);
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("$"), None);
    }

    #[test]
    fn test_parse_number_handles_json_shapes() {
        assert_eq!(parse_number(&json!(42)), Some(42.0));
        assert_eq!(parse_number(&json!("5,000")), Some(5000.0));
        assert_eq!(parse_number(&json!("N/A")), None);
        assert_eq!(parse_number(&json!("")), None);
        assert_eq!(parse_number(&json!(null)), None);
        assert_eq!(parse_number(&json!(true)), None);
        assert_eq!(parse_number(&json!({"min": 1})), None);
    }
}
