//! Numeric parsing and formatting shared by every stage.

/// Parses a trimmed string as a finite `f64`.
///
/// Returns `None` for empty strings, non-numeric text, and the textual
/// infinities/NaN that `f64::from_str` would otherwise accept.
///
/// # Examples
///
/// ```
/// use cdd_model::parse_number;
///
/// assert_eq!(parse_number(" 12.5 "), Some(12.5));
/// assert_eq!(parse_number("NaN"), None);
/// assert_eq!(parse_number("<0.1"), None);
/// ```
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a number without a trailing fractional part when it is integral.
///
/// # Examples
///
/// ```
/// use cdd_model::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(12.50), "12.5");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v}");
    if s.contains('.') && !s.contains('e') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
