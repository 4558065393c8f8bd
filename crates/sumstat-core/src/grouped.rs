//! Descriptive statistics over class intervals ("grouped data").
//!
//! The raw observations are no longer available, so every measure is an
//! estimate built from the interval structure: the mean and variance weight
//! each class mark by its frequency, and the median and mode interpolate
//! linearly inside a located interval. The same sentinel conventions as the
//! simple-data module apply: empty datasets and degenerate divisions resolve
//! to 0.0 rather than NaN.

use crate::{
    frequency::{self, FrequencyRow},
    interval::GroupedDataset,
};

/// Computes the weighted mean: Σ(class mark × frequency) / Σfrequency.
///
/// Returns 0.0 when the total frequency is zero.
///
/// # Examples
///
/// ```
/// use sumstat_core::{grouped, interval::generate_intervals};
///
/// let values: Vec<f64> = (1..=10).map(f64::from).collect();
/// let dataset = generate_intervals(&values, 5);
/// assert!((grouped::mean(&dataset) - 5.5).abs() < 1e-9);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(dataset: &GroupedDataset) -> f64 {
    let total = dataset.total_frequency();
    if total == 0 {
        return 0.0;
    }
    let weighted_sum = dataset
        .intervals
        .iter()
        .map(|i| i.class_mark * i.frequency as f64)
        .sum::<f64>();
    weighted_sum / total as f64
}

/// Estimates the median by linear interpolation inside the median interval.
///
/// The median interval is the first interval (in given order) whose running
/// cumulative frequency reaches half the total. Within it:
///
/// `median = lower + ((total/2 − cumulative_before) / frequency) × width`
///
/// Returns 0.0 when the dataset is empty or all frequencies are zero.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn median(dataset: &GroupedDataset) -> f64 {
    let total = dataset.total_frequency();
    if total == 0 {
        return 0.0;
    }
    let target = total as f64 / 2.0;

    let mut cumulative = 0;
    for interval in &dataset.intervals {
        cumulative += interval.frequency;
        if cumulative as f64 >= target {
            // The qualifying interval always has frequency > 0: a zero-count
            // interval cannot be the first to reach the target.
            let before = (cumulative - interval.frequency) as f64;
            return interval.lower_bound
                + (target - before) / interval.frequency as f64 * interval.width();
        }
    }
    0.0
}

/// Estimates the mode by interpolation inside the modal interval.
///
/// The modal interval is the first interval with the greatest frequency.
/// With `delta1` the frequency excess over the previous interval and `delta2`
/// over the next (both 0 at the dataset's edges):
///
/// `mode = lower + delta1 / (delta1 + delta2) × width`
///
/// When the denominator is zero (both neighbors tie the modal frequency, or a
/// single zero-frequency interval) the modal interval's lower bound is
/// returned. Returns `None` for an empty dataset.
///
/// # Examples
///
/// ```
/// use sumstat_core::interval::{ClassInterval, GroupedDataset};
///
/// let interval = |lower: f64, frequency| ClassInterval {
///     lower_bound: lower,
///     upper_bound: lower + 10.0,
///     class_mark: lower + 5.0,
///     frequency,
/// };
/// let dataset = GroupedDataset {
///     intervals: vec![interval(0.0, 2), interval(10.0, 5), interval(20.0, 3)],
///     class_width: 10.0,
/// };
/// assert_eq!(sumstat_core::grouped::mode(&dataset), Some(16.0));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mode(dataset: &GroupedDataset) -> Option<f64> {
    let intervals = &dataset.intervals;
    if intervals.is_empty() {
        return None;
    }

    // Sequential scan keeps the first interval among ties
    let mut modal_index = 0;
    for (index, interval) in intervals.iter().enumerate().skip(1) {
        if interval.frequency > intervals[modal_index].frequency {
            modal_index = index;
        }
    }

    let modal = &intervals[modal_index];
    let previous_frequency = if modal_index > 0 {
        intervals[modal_index - 1].frequency
    } else {
        0
    };
    let next_frequency = intervals.get(modal_index + 1).map_or(0, |i| i.frequency);

    // Both deltas are >= 0 since the modal frequency is the maximum
    let delta1 = (modal.frequency - previous_frequency) as f64;
    let delta2 = (modal.frequency - next_frequency) as f64;
    if delta1 + delta2 == 0.0 {
        return Some(modal.lower_bound);
    }
    Some(modal.lower_bound + delta1 / (delta1 + delta2) * modal.width())
}

/// Computes the grouped sample variance:
/// Σ(frequency × (class mark − mean)²) / (total − 1).
///
/// Defined as 0.0 when the total frequency is ≤ 1.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn variance(dataset: &GroupedDataset) -> f64 {
    let total = dataset.total_frequency();
    if total <= 1 {
        return 0.0;
    }
    let mean = mean(dataset);
    let weighted_squares = dataset
        .intervals
        .iter()
        .map(|i| i.frequency as f64 * (i.class_mark - mean).powi(2))
        .sum::<f64>();
    weighted_squares / (total - 1) as f64
}

/// Computes the grouped standard deviation (square root of [`variance`]).
#[must_use]
pub fn std_dev(dataset: &GroupedDataset) -> f64 {
    variance(dataset).sqrt()
}

/// Computes the range: the greatest upper bound minus the smallest lower
/// bound over all intervals; 0.0 for an empty dataset.
#[must_use]
pub fn range(dataset: &GroupedDataset) -> f64 {
    if dataset.intervals.is_empty() {
        return 0.0;
    }
    let min_lower = dataset
        .intervals
        .iter()
        .map(|i| i.lower_bound)
        .fold(f64::INFINITY, f64::min);
    let max_upper = dataset
        .intervals
        .iter()
        .map(|i| i.upper_bound)
        .fold(f64::NEG_INFINITY, f64::max);
    max_upper - min_lower
}

/// Computes the coefficient of variation with the same zero-mean guard as
/// the simple-data module.
#[must_use]
pub fn coefficient_of_variation(dataset: &GroupedDataset) -> f64 {
    let mean = mean(dataset);
    if mean == 0.0 {
        return 0.0;
    }
    std_dev(dataset) / mean * 100.0
}

/// Builds the per-interval frequency table: one row per interval in given
/// order, keyed by class mark.
///
/// A dataset with zero total frequency yields an empty table.
#[must_use]
pub fn frequency_table(dataset: &GroupedDataset) -> Vec<FrequencyRow> {
    frequency::build_table(
        dataset
            .intervals
            .iter()
            .map(|i| (i.class_mark, i.frequency)),
    )
}
