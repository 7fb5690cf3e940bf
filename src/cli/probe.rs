//! Build a registry from the declared specs and run it over the trailing tokens

use anyhow::{Context, Result};

use super::args::{Cli, DeclSpec};
use super::output::ParseReport;
use crate::argument::ArgKind;
use crate::registry::{ArgId, Registry, RegistryError};

/// Declare every argument named on the command line.
///
/// Kinds are registered in a fixed order (flags, text, integer, floating,
/// input files, output files, lists), each in command-line order.
pub fn build_registry(cli: &Cli) -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();

    for spec in &cli.flags {
        declare(&mut registry, ArgKind::Flag, spec)?;
    }
    for spec in &cli.texts {
        declare(&mut registry, ArgKind::Text, spec)?;
    }
    for spec in &cli.integers {
        declare(&mut registry, ArgKind::Integer, spec)?;
    }
    for spec in &cli.floatings {
        declare(&mut registry, ArgKind::Floating, spec)?;
    }
    for spec in &cli.input_files {
        declare(&mut registry, ArgKind::input_file(&spec.constraints), spec)?;
    }
    for spec in &cli.output_files {
        declare(&mut registry, ArgKind::output_file(&spec.constraints), spec)?;
    }
    for spec in &cli.lists {
        declare(&mut registry, ArgKind::list(spec.constraints.iter().cloned()), spec)?;
    }

    Ok(registry)
}

fn declare(registry: &mut Registry, kind: ArgKind, spec: &DeclSpec) -> Result<ArgId, RegistryError> {
    registry.declare(kind, spec.short, spec.long.as_deref())
}

/// Declare, parse, and summarize.
pub fn run_probe(cli: &Cli) -> Result<ParseReport> {
    let mut registry = build_registry(cli).context("Failed to declare arguments")?;
    registry.parse(cli.token_vector());
    Ok(ParseReport::from_registry(&cli.program, &registry))
}
