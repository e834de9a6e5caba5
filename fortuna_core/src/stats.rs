//! Aggregate statistics over trial sequences.

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value of the sorted sequence, averaging the two middles on even
/// length; 0.0 for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Round to `decimals` places, for report precision.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_median_even_count() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(mean(&values), 2.5);
        assert_eq!(median(&values), 2.5);
    }

    #[test]
    fn test_mean_and_median_odd_count() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(mean(&values), 2.0);
        assert_eq!(median(&values), 2.0);
    }

    #[test]
    fn test_median_ignores_input_order() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_empty_sequences_aggregate_to_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_round_to_report_precisions() {
        assert_eq!(round_to(13.44, 1), 13.4);
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(0.10449, 3), 0.104);
        assert_eq!(round_to(517.6, 0), 518.0);
    }
}
