mod catalog;
mod cli;
mod commands;
mod common;
mod corpus;
mod eutils;
mod medline;
mod report;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_fetch, run_pipeline, run_summarize};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch(args) => {
            run_fetch(args)?;
        }
        Commands::Summarize(args) => {
            run_summarize(args)?;
        }
        Commands::Pipeline(args) => {
            run_pipeline(args)?;
        }
    }

    Ok(())
}
