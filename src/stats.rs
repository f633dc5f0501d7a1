//! Pure grade statistics.

/// Arithmetic mean of a sequence of grade values.
///
/// Undefined for an empty slice; callers are responsible for the empty check
/// and for substituting the "N/A" marker themselves. Standard floating-point
/// semantics, no rounding policy.
pub fn grade_point_average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_two_values() {
        assert_eq!(grade_point_average(&[80.0, 90.0]), 85.0);
    }

    #[test]
    fn single_value_is_its_own_average() {
        assert_eq!(grade_point_average(&[100.0]), 100.0);
    }

    #[test]
    fn preserves_fractional_means() {
        assert_eq!(grade_point_average(&[80.5, 90.5, 88.0]), 259.0 / 3.0);
    }
}
