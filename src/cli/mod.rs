//! CLI module - probe binary arguments, registry construction, and output

mod args;
mod output;
mod probe;

pub use args::{Cli, DeclSpec, OutputFormat};
pub use output::{write_report, ArgumentOutput, ParseReport};
pub use probe::{build_registry, run_probe};
