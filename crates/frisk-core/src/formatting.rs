//! Text formatting for report output.
//!
//! Undefined percentages (`NaN`, from an empty denominator) are rendered as
//! [`UNDEFINED`] rather than `"NaN"`.

use crate::calculations::is_defined;

/// Placeholder printed for a percentage whose denominator was zero.
pub const UNDEFINED: &str = "n/a";

/// Format a record count with thousands separators.
///
/// # Examples
///
/// ```
/// use frisk_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(685_724), "685,724");
/// ```
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

/// Format a percentage with two decimals and a trailing `%`.
///
/// # Examples
///
/// ```
/// use frisk_core::formatting::format_percent;
///
/// assert_eq!(format_percent(50.0), "50.00%");
/// assert_eq!(format_percent(f64::NAN), "n/a");
/// ```
pub fn format_percent(value: f64) -> String {
    if !is_defined(value) {
        return UNDEFINED.to_string();
    }
    format!("{:.2}%", value)
}

/// Format a signed percentage-point change, always with an explicit sign.
///
/// # Examples
///
/// ```
/// use frisk_core::formatting::format_delta;
///
/// assert_eq!(format_delta(30.0), "+30.00 pp");
/// assert_eq!(format_delta(-2.5), "-2.50 pp");
/// ```
pub fn format_delta(value: f64) -> String {
    if !is_defined(value) {
        return UNDEFINED.to_string();
    }
    // Avoid printing "-0.00" for tiny negative noise.
    let value = if value.abs() < 0.005 { 0.0 } else { value };
    format!("{:+.2} pp", value)
}

/// Describe the direction of a percentage-point change.
pub fn trend_label(value: f64) -> &'static str {
    if value.is_nan() {
        "undefined"
    } else if value > 0.0 {
        "increase"
    } else if value < 0.0 {
        "decrease"
    } else {
        "no change"
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
