use std::path::PathBuf;

use sumstat_core::summary::StatisticalSummary;

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimpleArg {
    /// Observations to summarize
    values: Vec<f64>,
    /// Read observations from a JSON array file instead
    #[arg(long, conflicts_with = "values")]
    input: Option<PathBuf>,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Also print a human-readable frequency table to stderr
    #[arg(long)]
    table: bool,
}

pub(crate) fn run(arg: &SimpleArg) -> anyhow::Result<()> {
    let values = util::load_values(&arg.values, arg.input.as_deref())?;
    let summary = StatisticalSummary::from_values(&values);

    if arg.table {
        util::print_frequency_table(&summary.frequency_table);
    }
    Output::save_json(&summary, arg.output.clone())?;

    Ok(())
}
