//! Descriptive statistics engine for raw and pre-binned datasets.
//!
//! This crate computes central tendency, dispersion, and frequency
//! distributions for two input modes:
//!
//! - **Simple data**: raw numeric observations, summarized value by value
//! - **Grouped data**: class intervals with frequency counts, summarized with
//!   the grouped-data estimation formulas (weighted mean, interpolated median
//!   and mode)
//!
//! All functions are pure and total over their documented domain: empty input
//! and degenerate divisions (single observation, zero mean, zero interpolation
//! denominator) resolve to defined sentinel values rather than errors or NaN.
//! Callers are expected to filter out non-finite observations before handing
//! data to the engine.
//!
//! # Modules
//!
//! - [`simple`]: Statistics over raw observations
//! - [`grouped`]: Statistics over class intervals
//! - [`interval`]: Class interval types, validation, and equal-width binning
//! - [`frequency`]: Frequency table rows shared by both input modes
//! - [`summary`]: Bundled summary combining all measures with the table
//!
//! # Examples
//!
//! ## Summarizing raw observations
//!
//! ```
//! use sumstat_core::simple;
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(simple::mean(&values), 5.0);
//! assert_eq!(simple::median(&values), 4.5);
//! assert_eq!(simple::modes(&values), vec![4.0]);
//! ```
//!
//! ## Binning observations and summarizing the result
//!
//! ```
//! use sumstat_core::{grouped, interval};
//!
//! let values: Vec<f64> = (1..=10).map(f64::from).collect();
//! let dataset = interval::generate_intervals(&values, 5);
//! assert_eq!(dataset.intervals.len(), 5);
//! assert!((grouped::mean(&dataset) - 5.5).abs() < 1e-9);
//! ```
//!
//! ## Computing a full summary
//!
//! ```
//! use sumstat_core::summary::StatisticalSummary;
//!
//! let summary = StatisticalSummary::from_values(&[1.0, 2.0, 2.0, 3.0]);
//! assert_eq!(summary.central_tendency.mean, 2.0);
//! assert_eq!(summary.frequency_table.len(), 3);
//! ```

pub mod frequency;
pub mod grouped;
pub mod interval;
pub mod simple;
pub mod summary;
