//! Output formatting: styled table or JSON

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, Table};
use console::style;
use serde::Serialize;

use super::args::OutputFormat;
use crate::argument::{KindTag, Value};
use crate::registry::Registry;
use crate::utils::{print_banner, print_count, print_info, print_section_header};

/// One declared argument and its state after parsing.
#[derive(Debug, Clone, Serialize)]
pub struct ArgumentOutput {
    /// Short reference, e.g. `-x`.
    pub short: String,
    /// Long reference, e.g. `--x-axis`, or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    pub kind: KindTag,
    /// Extensions or accepted tokens; omitted when unconstrained.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
    /// Whether the value came from the token vector rather than the default.
    pub supplied: bool,
    pub value: Value,
}

/// Everything the probe learned from one parse.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub program: String,
    pub arguments: Vec<ArgumentOutput>,
    pub positional: Vec<String>,
}

impl ParseReport {
    pub fn from_registry(program: &str, registry: &Registry) -> Self {
        let arguments = registry
            .declarations()
            .filter_map(|(id, declaration)| {
                let value = registry.value(id)?.clone();
                let short = declaration.short_reference();
                Some(ArgumentOutput {
                    supplied: registry.is_supplied(&short),
                    short,
                    long: declaration.long_reference(),
                    kind: declaration.kind().tag(),
                    constraints: declaration.kind().constraints().to_vec(),
                    value,
                })
            })
            .collect();

        Self {
            program: program.to_string(),
            arguments,
            positional: registry.positional_tokens().to_vec(),
        }
    }

    /// Find a reported argument by its short or long reference.
    pub fn argument(&self, reference: &str) -> Option<&ArgumentOutput> {
        self.arguments
            .iter()
            .find(|a| a.short == reference || a.long.as_deref() == Some(reference))
    }
}

/// Write the report to stdout in the requested format.
pub fn write_report(report: &ParseReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .context("Failed to serialize parse report")?;
            println!("{}", json);
        }
        OutputFormat::Table => write_table(report),
    }
    Ok(())
}

fn write_table(report: &ParseReport) {
    print_banner(&report.program, env!("CARGO_PKG_VERSION"));

    print_section_header("Arguments");
    if report.arguments.is_empty() {
        print_info("No arguments declared");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec![
            Cell::new("REFERENCE"),
            Cell::new("KIND"),
            Cell::new("SUPPLIED"),
            Cell::new("VALUE"),
        ]);

        for argument in &report.arguments {
            let reference = match &argument.long {
                Some(long) => format!("{}, {}", argument.short, long),
                None => argument.short.clone(),
            };
            let kind = if argument.constraints.is_empty() {
                argument.kind.to_string()
            } else {
                format!("{} ({})", argument.kind, argument.constraints.join(","))
            };
            let supplied = if argument.supplied { "yes" } else { "no" };
            table.add_row(vec![
                Cell::new(reference),
                Cell::new(kind),
                Cell::new(supplied),
                Cell::new(argument.value.to_string()),
            ]);
        }
        println!("{}", table);
    }

    print_section_header("Positional tokens");
    print_count("positional token(s)", report.positional.len());
    for token in &report.positional {
        println!("      {} {}", style("›").dim(), token);
    }
    println!();
}
