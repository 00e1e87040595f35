//! `flagtable` inspector: resolve dash flags and print typed lookups.

mod cli;
mod report;

use std::io;

use clap::Parser;
use flagtable::ArgTable;
use tracing_subscriber::EnvFilter;

use crate::cli::CommandLine;
use crate::report::{evaluate, write_report};

const LOG_ENV: &str = "FLAGTABLE_LOG";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = CommandLine::parse();
    let table = ArgTable::from_flags(&cli.flags);
    let report = evaluate(&cli, &table)?;
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &report, cli.format)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
