//! Typarg: Typed Argument Probe
//!
//! Declares arguments from its own command line, parses the tokens given
//! after `--` with the typarg registry, and prints what each argument received.

use anyhow::Result;
use clap::Parser;

use typarg::cli::{run_probe, write_report, Cli};
use typarg::utils::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = run_probe(&cli)?;
    write_report(&report, cli.format)?;

    Ok(())
}
