//! Class intervals, dataset validation, and equal-width binning.

use serde::{Deserialize, Serialize};

/// A class interval ("bin"): a bounded sub-range of a dataset's value range
/// with an associated frequency count.
///
/// Intervals are conventionally half-open `[lower_bound, upper_bound)`.
/// The engine requires `lower_bound < upper_bound` but does not validate it
/// on construction; use [`GroupedDataset::validate`] at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInterval {
    /// Inclusive lower bound.
    pub lower_bound: f64,
    /// Exclusive upper bound.
    pub upper_bound: f64,
    /// Representative value of the interval, typically the midpoint.
    pub class_mark: f64,
    /// Number of observations falling inside the interval.
    pub frequency: u64,
}

impl ClassInterval {
    /// Width of the interval (`upper_bound - lower_bound`).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// Data already summarized into class intervals with frequencies.
///
/// The intervals are expected to partition the data range in ascending order.
/// The engine trusts the caller's structure and does not enforce non-overlap
/// or contiguity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedDataset {
    /// Class intervals in ascending order.
    pub intervals: Vec<ClassInterval>,
    /// Common width of the intervals. Informational: the estimation formulas
    /// use each interval's own bounds, so unequal-width datasets still work.
    pub class_width: f64,
}

/// Structural problems in a [`GroupedDataset`], reported by
/// [`GroupedDataset::validate`] before the dataset reaches the engine.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("dataset has no intervals")]
    Empty,
    #[display("interval {index} has upper bound {upper} <= lower bound {lower}")]
    InvertedBounds { index: usize, lower: f64, upper: f64 },
}

impl GroupedDataset {
    /// Checks the dataset's structure: at least one interval, and every
    /// interval with `lower_bound < upper_bound`.
    ///
    /// The computation functions themselves never validate; callers that
    /// accept untrusted interval definitions should reject malformed input
    /// here instead of letting the engine produce nonsensical output.
    ///
    /// # Examples
    ///
    /// ```
    /// use sumstat_core::interval::{ClassInterval, GroupedDataset};
    ///
    /// let dataset = GroupedDataset {
    ///     intervals: vec![ClassInterval {
    ///         lower_bound: 10.0,
    ///         upper_bound: 0.0,
    ///         class_mark: 5.0,
    ///         frequency: 3,
    ///     }],
    ///     class_width: 10.0,
    /// };
    /// assert!(dataset.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.intervals.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (index, interval) in self.intervals.iter().enumerate() {
            if interval.upper_bound <= interval.lower_bound {
                return Err(DatasetError::InvertedBounds {
                    index,
                    lower: interval.lower_bound,
                    upper: interval.upper_bound,
                });
            }
        }
        Ok(())
    }

    /// Sum of the interval frequencies.
    #[must_use]
    pub fn total_frequency(&self) -> u64 {
        self.intervals.iter().map(|i| i.frequency).sum()
    }
}

/// Partitions raw observations into `bin_count` consecutive equal-width
/// intervals covering `[min, max]`.
///
/// Each interval is half-open `[lower, upper)` with the class mark at its
/// midpoint, except the final interval, which is closed so the global maximum
/// is counted (a purely half-open final bin would leave the maximum out of
/// every interval). Empty input or `bin_count == 0` yields an empty dataset.
///
/// # Examples
///
/// ```
/// use sumstat_core::interval::generate_intervals;
///
/// let values: Vec<f64> = (1..=10).map(f64::from).collect();
/// let dataset = generate_intervals(&values, 5);
///
/// assert_eq!(dataset.intervals.len(), 5);
/// assert_eq!(dataset.total_frequency(), 10);
/// // The maximum lands in the last interval
/// assert_eq!(dataset.intervals.last().unwrap().frequency, 2);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_intervals(values: &[f64], bin_count: usize) -> GroupedDataset {
    if values.is_empty() || bin_count == 0 {
        return GroupedDataset {
            intervals: vec![],
            class_width: 0.0,
        };
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bin_count as f64;

    let intervals = (0..bin_count)
        .map(|index| {
            let lower = min + index as f64 * width;
            let upper = min + (index + 1) as f64 * width;
            let is_last = index == bin_count - 1;
            let frequency = values
                .iter()
                .filter(|&&v| v >= lower && (v < upper || (is_last && v <= upper)))
                .count() as u64;
            ClassInterval {
                lower_bound: lower,
                upper_bound: upper,
                class_mark: (lower + upper) / 2.0,
                frequency,
            }
        })
        .collect();

    GroupedDataset {
        intervals,
        class_width: width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let dataset = generate_intervals(&[], 5);
        assert!(dataset.intervals.is_empty());
        assert_eq!(dataset.class_width, 0.0);
    }

    #[test]
    fn test_zero_bins() {
        assert!(generate_intervals(&[1.0, 2.0], 0).intervals.is_empty());
    }

    #[test]
    fn test_equal_width_partition() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let dataset = generate_intervals(&values, 5);

        assert_eq!(dataset.intervals.len(), 5);
        assert!((dataset.class_width - 1.8).abs() < 1e-12);
        for interval in &dataset.intervals {
            assert!((interval.width() - 1.8).abs() < 1e-12);
            let midpoint = (interval.lower_bound + interval.upper_bound) / 2.0;
            assert!((interval.class_mark - midpoint).abs() < 1e-12);
        }
        assert!((dataset.intervals[0].lower_bound - 1.0).abs() < 1e-12);
        assert!((dataset.intervals[4].upper_bound - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_maximum_lands_in_last_interval() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let dataset = generate_intervals(&values, 5);

        // Every observation is counted, including the global maximum
        assert_eq!(dataset.total_frequency(), 10);
        assert_eq!(dataset.intervals[4].frequency, 2);
    }

    #[test]
    fn test_degenerate_range() {
        // All observations equal: zero-width bins, everything in the last one
        let dataset = generate_intervals(&[3.0, 3.0, 3.0], 4);
        assert_eq!(dataset.class_width, 0.0);
        assert_eq!(dataset.total_frequency(), 3);
        assert_eq!(dataset.intervals[3].frequency, 3);
    }

    #[test]
    fn test_validate_rejects_empty() {
        let dataset = GroupedDataset {
            intervals: vec![],
            class_width: 0.0,
        };
        assert!(matches!(dataset.validate(), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let dataset = GroupedDataset {
            intervals: vec![
                ClassInterval {
                    lower_bound: 0.0,
                    upper_bound: 10.0,
                    class_mark: 5.0,
                    frequency: 1,
                },
                ClassInterval {
                    lower_bound: 10.0,
                    upper_bound: 10.0,
                    class_mark: 10.0,
                    frequency: 1,
                },
            ],
            class_width: 10.0,
        };
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::InvertedBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_accepts_generated_intervals() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        assert!(generate_intervals(&values, 5).validate().is_ok());
    }
}
