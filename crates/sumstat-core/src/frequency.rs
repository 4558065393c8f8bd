use serde::{Deserialize, Serialize};

/// One row of a frequency table.
///
/// A row describes a single distinct value (simple data) or a single class
/// interval (grouped data, keyed by class mark). Rows are produced in
/// ascending order of `value` for simple data and in interval order for
/// grouped data.
///
/// Invariants over a full table with total count `n`:
///
/// - `relative_frequency = absolute_frequency / n`
/// - `cumulative_frequency` is the running sum of `absolute_frequency`
/// - `cumulative_relative_frequency = cumulative_frequency / n`
/// - the last row's `cumulative_relative_frequency` is 1.0 (within floating
///   tolerance)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// The distinct observed value, or the interval's class mark.
    pub value: f64,
    /// Number of observations with this value / in this interval.
    pub absolute_frequency: u64,
    /// Share of the total count held by this row.
    pub relative_frequency: f64,
    /// Running sum of absolute frequencies up to and including this row.
    pub cumulative_frequency: u64,
    /// Running sum of relative frequencies up to and including this row.
    pub cumulative_relative_frequency: f64,
}

/// Builds a frequency table from `(value, count)` pairs in their given order.
///
/// Returns an empty table when the counts sum to zero, so the relative-column
/// divisions can never divide by zero.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn build_table<I>(counts: I) -> Vec<FrequencyRow>
where
    I: IntoIterator<Item = (f64, u64)>,
{
    let counts = counts.into_iter().collect::<Vec<_>>();
    let total = counts.iter().map(|(_, count)| *count).sum::<u64>();
    if total == 0 {
        return vec![];
    }

    let total_f = total as f64;
    let mut cumulative = 0;
    counts
        .into_iter()
        .map(|(value, absolute)| {
            cumulative += absolute;
            FrequencyRow {
                value,
                absolute_frequency: absolute,
                relative_frequency: absolute as f64 / total_f,
                cumulative_frequency: cumulative,
                cumulative_relative_frequency: cumulative as f64 / total_f,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_counts() {
        assert!(build_table([]).is_empty());
    }

    #[test]
    fn test_zero_total_yields_empty_table() {
        assert!(build_table([(1.0, 0), (2.0, 0)]).is_empty());
    }

    #[test]
    fn test_cumulative_columns() {
        let table = build_table([(1.0, 1), (2.0, 2), (3.0, 1)]);
        assert_eq!(table.len(), 3);

        assert_eq!(table[0].absolute_frequency, 1);
        assert_eq!(table[0].cumulative_frequency, 1);
        assert_eq!(table[1].cumulative_frequency, 3);
        assert_eq!(table[2].cumulative_frequency, 4);

        assert!((table[1].relative_frequency - 0.5).abs() < 1e-12);
        assert!((table[2].cumulative_relative_frequency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_preserves_input_order() {
        let table = build_table([(30.0, 1), (10.0, 1)]);
        assert_eq!(table[0].value, 30.0);
        assert_eq!(table[1].value, 10.0);
    }
}
