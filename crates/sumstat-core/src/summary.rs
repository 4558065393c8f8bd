//! Bundled statistical summaries.
//!
//! Consumers of the engine almost always want every measure at once: the
//! central-tendency block, the dispersion block, and the frequency table.
//! [`StatisticalSummary`] computes all three in one call for either input
//! mode, so the presentation layer receives a single serializable document.

use serde::{Deserialize, Serialize};

use crate::{frequency::FrequencyRow, grouped, interval::GroupedDataset, simple};

/// Measures of central tendency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralTendency {
    pub mean: f64,
    pub median: f64,
    /// All values tied at the maximum frequency, ascending. Possibly empty
    /// (no observations), possibly multi-valued for simple data; at most a
    /// single interpolated value for grouped data.
    pub modes: Vec<f64>,
}

/// Measures of dispersion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispersion {
    pub variance: f64,
    pub std_dev: f64,
    pub range: f64,
    /// Standard deviation as a percentage of the mean.
    pub coefficient_of_variation: f64,
}

/// Complete descriptive summary of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalSummary {
    pub central_tendency: CentralTendency,
    pub dispersion: Dispersion,
    pub frequency_table: Vec<FrequencyRow>,
}

impl StatisticalSummary {
    /// Summarizes raw observations.
    ///
    /// # Examples
    ///
    /// ```
    /// use sumstat_core::summary::StatisticalSummary;
    ///
    /// let summary = StatisticalSummary::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    /// assert_eq!(summary.central_tendency.mean, 5.0);
    /// assert_eq!(summary.central_tendency.median, 4.5);
    /// assert_eq!(summary.central_tendency.modes, vec![4.0]);
    /// assert_eq!(summary.dispersion.range, 7.0);
    /// ```
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            central_tendency: CentralTendency {
                mean: simple::mean(values),
                median: simple::median(values),
                modes: simple::modes(values),
            },
            dispersion: Dispersion {
                variance: simple::variance(values),
                std_dev: simple::std_dev(values),
                range: simple::range(values),
                coefficient_of_variation: simple::coefficient_of_variation(values),
            },
            frequency_table: simple::frequency_table(values),
        }
    }

    /// Summarizes a pre-binned dataset with the grouped-data estimators.
    #[must_use]
    pub fn from_grouped(dataset: &GroupedDataset) -> Self {
        Self {
            central_tendency: CentralTendency {
                mean: grouped::mean(dataset),
                median: grouped::median(dataset),
                modes: grouped::mode(dataset).into_iter().collect(),
            },
            dispersion: Dispersion {
                variance: grouped::variance(dataset),
                std_dev: grouped::std_dev(dataset),
                range: grouped::range(dataset),
                coefficient_of_variation: grouped::coefficient_of_variation(dataset),
            },
            frequency_table: grouped::frequency_table(dataset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::generate_intervals;

    #[test]
    fn test_simple_summary_scenario() {
        let summary = StatisticalSummary::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert_eq!(summary.central_tendency.mean, 5.0);
        assert_eq!(summary.central_tendency.median, 4.5);
        assert_eq!(summary.central_tendency.modes, vec![4.0]);
        assert!((summary.dispersion.variance - 32.0 / 7.0).abs() < 1e-9);
        assert_eq!(summary.dispersion.range, 7.0);
        assert_eq!(summary.frequency_table.len(), 5);
    }

    #[test]
    fn test_empty_summary() {
        let summary = StatisticalSummary::from_values(&[]);
        assert_eq!(summary.central_tendency.mean, 0.0);
        assert!(summary.central_tendency.modes.is_empty());
        assert!(summary.frequency_table.is_empty());
    }

    #[test]
    fn test_grouped_summary() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let dataset = generate_intervals(&values, 5);
        let summary = StatisticalSummary::from_grouped(&dataset);

        assert!((summary.central_tendency.mean - 5.5).abs() < 1e-9);
        assert!((summary.central_tendency.median - 5.5).abs() < 1e-9);
        assert_eq!(summary.central_tendency.modes.len(), 1);
        assert_eq!(summary.frequency_table.len(), 5);
    }

    #[test]
    fn test_summary_round_trips_as_json() {
        let summary = StatisticalSummary::from_values(&[1.0, 2.0, 3.0]);
        let json = serde_json::to_string(&summary).unwrap();
        let decoded: StatisticalSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, summary);
    }
}
