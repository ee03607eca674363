//! Rendering of evaluation results as text.

/// Largest magnitude still printed without a fractional part.
const INTEGRAL_LIMIT: f64 = 1e15;

/// Formats a result the way it appears in a document.
///
/// Integral values print without a fraction, everything else with up to
/// six fractional digits and no trailing zeros. Negative zero prints as `0`.
///
/// ```
/// use txtfmt_calc::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < INTEGRAL_LIMIT {
        return format!("{}", value as i64);
    }

    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
