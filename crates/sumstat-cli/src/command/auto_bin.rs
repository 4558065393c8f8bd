use std::path::PathBuf;

use anyhow::ensure;
use sumstat_core::interval;

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AutoBinArg {
    /// Observations to partition
    values: Vec<f64>,
    /// Read observations from a JSON array file instead
    #[arg(long, conflicts_with = "values")]
    input: Option<PathBuf>,
    /// Number of equal-width intervals to generate
    #[arg(long, default_value_t = 5)]
    bins: usize,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AutoBinArg) -> anyhow::Result<()> {
    ensure!(arg.bins >= 2, "at least 2 intervals are required");

    let values = util::load_values(&arg.values, arg.input.as_deref())?;
    let dataset = interval::generate_intervals(&values, arg.bins);
    Output::save_json(&dataset, arg.output.clone())?;

    Ok(())
}
