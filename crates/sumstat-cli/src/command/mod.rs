use clap::{Parser, Subcommand};

use self::{auto_bin::AutoBinArg, grouped::GroupedArg, simple::SimpleArg};

mod auto_bin;
mod grouped;
mod simple;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What kind of dataset to summarize
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize raw observations
    Simple(#[clap(flatten)] SimpleArg),
    /// Summarize a pre-binned dataset read from a JSON file
    Grouped(#[clap(flatten)] GroupedArg),
    /// Partition raw observations into equal-width class intervals
    AutoBin(#[clap(flatten)] AutoBinArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Simple(arg) => simple::run(&arg)?,
        Mode::Grouped(arg) => grouped::run(&arg)?,
        Mode::AutoBin(arg) => auto_bin::run(&arg)?,
    }
    Ok(())
}
