use std::path::PathBuf;

use anyhow::Context;
use sumstat_core::{interval::GroupedDataset, summary::StatisticalSummary};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GroupedArg {
    /// JSON file holding the grouped dataset (intervals with frequencies)
    #[arg(long)]
    input: PathBuf,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Also print a human-readable frequency table to stderr
    #[arg(long)]
    table: bool,
}

pub(crate) fn run(arg: &GroupedArg) -> anyhow::Result<()> {
    let dataset: GroupedDataset = util::read_json_file("grouped dataset", &arg.input)?;
    dataset
        .validate()
        .with_context(|| format!("Invalid grouped dataset in {}", arg.input.display()))?;

    let summary = StatisticalSummary::from_grouped(&dataset);

    if arg.table {
        util::print_frequency_table(&summary.frequency_table);
    }
    Output::save_json(&summary, arg.output.clone())?;

    Ok(())
}
