//! Descriptive statistics over raw observations ("simple data").
//!
//! Every function takes an observation slice and returns a plain numeric
//! result. Duplicates are meaningful (they drive the frequency counts) and
//! input order never affects the result. Empty input resolves to zero or an
//! empty collection, never an error.

use crate::frequency::{self, FrequencyRow};

/// Computes the arithmetic mean.
///
/// Returns 0.0 for empty input.
///
/// # Examples
///
/// ```
/// use sumstat_core::simple;
///
/// assert_eq!(simple::mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(simple::mean(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the median of the observations.
///
/// For an even count the two middle elements are averaged; for an odd count
/// the exact middle element is returned. Returns 0.0 for empty input.
///
/// # Examples
///
/// ```
/// use sumstat_core::simple;
///
/// assert_eq!(simple::median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert_eq!(simple::median(&[3.0, 1.0, 2.0]), 2.0);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Computes the mode set: every value tied at the maximum frequency.
///
/// The result is sorted ascending, so it is independent of input order.
/// Empty input yields an empty vector (no mode, not zero).
///
/// # Examples
///
/// ```
/// use sumstat_core::simple;
///
/// assert_eq!(simple::modes(&[1.0, 1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.0]);
/// assert!(simple::modes(&[]).is_empty());
/// ```
#[must_use]
pub fn modes(values: &[f64]) -> Vec<f64> {
    let counts = value_counts(values);
    let Some(max_count) = counts.iter().map(|(_, count)| *count).max() else {
        return vec![];
    };
    counts
        .into_iter()
        .filter(|(_, count)| *count == max_count)
        .map(|(value, _)| value)
        .collect()
}

/// Computes the sample variance (sum of squared deviations divided by n−1).
///
/// Defined as 0.0 for n ≤ 1: with a single observation the divisor would be
/// zero, and the engine resolves degenerate divisions to sentinels rather
/// than propagating NaN or infinity.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn variance(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 0.0;
    }
    let mean = mean(values);
    let sum_of_squares = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    sum_of_squares / (n - 1) as f64
}

/// Computes the sample standard deviation (square root of [`variance`]).
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Computes the range (maximum − minimum); 0.0 for empty input.
#[must_use]
pub fn range(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max - min
}

/// Computes the coefficient of variation: standard deviation as a percentage
/// of the mean.
///
/// Defined as 0.0 when the mean is exactly zero.
#[must_use]
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let mean = mean(values);
    if mean == 0.0 {
        return 0.0;
    }
    std_dev(values) / mean * 100.0
}

/// Builds the discrete frequency table: one row per distinct observed value,
/// sorted ascending.
///
/// Empty input yields an empty table.
///
/// # Examples
///
/// ```
/// use sumstat_core::simple;
///
/// let table = simple::frequency_table(&[2.0, 1.0, 2.0]);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[0].value, 1.0);
/// assert_eq!(table[1].absolute_frequency, 2);
/// assert_eq!(table[1].cumulative_frequency, 3);
/// ```
#[must_use]
pub fn frequency_table(values: &[f64]) -> Vec<FrequencyRow> {
    frequency::build_table(value_counts(values))
}

/// Counts occurrences of each distinct value, ascending by value.
fn value_counts(values: &[f64]) -> Vec<(f64, u64)> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut counts: Vec<(f64, u64)> = vec![];
    for value in sorted {
        match counts.last_mut() {
            Some((prev, count)) if *prev == value => *count += 1,
            _ => counts.push((value, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &[f64] = &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_mean_between_min_and_max() {
        let mean = mean(SCENARIO);
        assert!(mean >= 2.0);
        assert!(mean <= 9.0);
        assert_close(mean, 5.0);
    }

    #[test]
    fn test_empty_input_defaults() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(median(&[]), 0.0);
        assert_eq!(variance(&[]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(range(&[]), 0.0);
        assert_eq!(coefficient_of_variation(&[]), 0.0);
        assert!(modes(&[]).is_empty());
        assert!(frequency_table(&[]).is_empty());
    }

    #[test]
    fn test_median_even_count() {
        assert_close(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_median_odd_count() {
        assert_close(median(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_median_ignores_input_order() {
        assert_close(median(&[9.0, 1.0, 5.0, 3.0, 7.0]), 5.0);
    }

    #[test]
    fn test_modes_tie_at_max_frequency() {
        assert_eq!(modes(&[1.0, 1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.0]);
    }

    #[test]
    fn test_modes_single() {
        assert_eq!(modes(SCENARIO), vec![4.0]);
    }

    #[test]
    fn test_modes_all_distinct() {
        // Every value has frequency 1, so every value is tied at the max
        assert_eq!(modes(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_variance_single_observation_is_zero() {
        assert_eq!(variance(&[42.0]), 0.0);
        assert_eq!(std_dev(&[42.0]), 0.0);
    }

    #[test]
    fn test_variance_is_nonnegative() {
        assert!(variance(&[1.0, -5.0, 3.0]) >= 0.0);
        assert!(std_dev(&[1.0, -5.0, 3.0]) >= 0.0);
    }

    #[test]
    fn test_coefficient_of_variation_zero_mean() {
        assert_eq!(coefficient_of_variation(&[-1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_scenario_summary_measures() {
        // Sample variance: Σ(x − 5)² = 32, divided by n − 1 = 7
        assert_close(variance(SCENARIO), 32.0 / 7.0);
        assert_close(std_dev(SCENARIO), (32.0f64 / 7.0).sqrt());
        assert_close(range(SCENARIO), 7.0);
        assert_close(
            coefficient_of_variation(SCENARIO),
            (32.0f64 / 7.0).sqrt() / 5.0 * 100.0,
        );
    }

    #[test]
    fn test_frequency_table_columns() {
        let table = frequency_table(SCENARIO);
        assert_eq!(table.len(), 5);

        let total: u64 = table.iter().map(|row| row.absolute_frequency).sum();
        assert_eq!(total, SCENARIO.len() as u64);

        let last = table.last().unwrap();
        assert_eq!(last.cumulative_frequency, SCENARIO.len() as u64);
        assert_close(last.cumulative_relative_frequency, 1.0);

        // Rows ascend by value
        assert!(table.is_sorted_by(|a, b| a.value <= b.value));
        assert_eq!(table[0].value, 2.0);
        assert_eq!(table[1].value, 4.0);
        assert_eq!(table[1].absolute_frequency, 3);
        assert_close(table[1].relative_frequency, 3.0 / 8.0);
    }
}
