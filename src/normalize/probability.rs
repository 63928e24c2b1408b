//! Failure probability normalization to the unit interval.

use super::parse_number;
use serde_json::Value;

/// Normalize a probability to `[0, 1]`.
///
/// Percent strings (`"35%"`) and numbers above `1` are read as percentages.
/// Numbers already in `[0, 1]` are read as fractions.
pub fn normalize_probability(value: Option<&Value>) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };
    let Some(raw) = parse_number(value) else {
        return 0.0;
    };

    let is_percent_string = matches!(value, Value::String(s) if s.contains('%'));
    let fraction = if is_percent_string || raw > 1.0 {
        raw / 100.0
    } else {
        raw
    };

    fraction.clamp(0.0, 1.0)
}
