//! Small numeric helpers shared by the query layer.
//!
//! Division by an empty denominator is not an error here: `0 / 0` yields
//! `f64::NAN`, and the NaN flows through to the caller unchanged.

/// `count` as a percentage of `total`.
///
/// Returns `NaN` when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64) * 100.0
}

/// Half of `count`'s share of `total`, scaled to percent (`share * 0.5 * 100`).
///
/// Used by the gender-bias table so that the two race columns of a row add
/// up towards 100 for balanced populations. Returns `NaN` when `total` is
/// zero.
pub fn half_share(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64) * 0.5 * 100.0
}

/// Whether a computed percentage is defined (the denominator was non-zero).
pub fn is_defined(value: f64) -> bool {
    !value.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_basic() {
        assert!((percentage(1, 4) - 25.0).abs() < 1e-9);
        assert!((percentage(4, 4) - 100.0).abs() < 1e-9);
        assert_eq!(percentage(0, 7), 0.0);
    }

    #[test]
    fn test_percentage_empty_total_is_nan() {
        assert!(percentage(0, 0).is_nan());
        assert!(!is_defined(percentage(0, 0)));
    }

    #[test]
    fn test_half_share() {
        assert!((half_share(6, 10) - 30.0).abs() < 1e-9);
        assert!((half_share(7, 10) - 35.0).abs() < 1e-9);
        assert!((half_share(10, 10) - 50.0).abs() < 1e-9);
        assert!(half_share(0, 0).is_nan());
    }
}
