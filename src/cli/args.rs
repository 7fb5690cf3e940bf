//! Command-line argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};

/// Typarg - declare typed arguments and see how a token vector parses
#[derive(Parser, Debug)]
#[command(name = "typarg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Declare a Flag argument: `c[:long]`
    #[arg(long = "flag", value_name = "DECL", value_parser = parse_plain_decl)]
    pub flags: Vec<DeclSpec>,

    /// Declare a Text argument: `c[:long]`
    #[arg(long = "text", value_name = "DECL", value_parser = parse_plain_decl)]
    pub texts: Vec<DeclSpec>,

    /// Declare an Integer argument: `c[:long]`
    #[arg(long = "integer", value_name = "DECL", value_parser = parse_plain_decl)]
    pub integers: Vec<DeclSpec>,

    /// Declare a Floating argument: `c[:long]`
    #[arg(long = "floating", value_name = "DECL", value_parser = parse_plain_decl)]
    pub floatings: Vec<DeclSpec>,

    /// Declare an InputFile argument: `c[:long[:ext,ext,...]]`.
    /// The path must exist and be a regular file.
    #[arg(long = "input-file", value_name = "DECL", value_parser = parse_constrained_decl)]
    pub input_files: Vec<DeclSpec>,

    /// Declare an OutputFile argument: `c[:long[:ext,ext,...]]`.
    /// The path does not need to exist.
    #[arg(long = "output-file", value_name = "DECL", value_parser = parse_constrained_decl)]
    pub output_files: Vec<DeclSpec>,

    /// Declare a List argument: `c[:long[:token,token,...]]`.
    /// Without tokens any value is accepted.
    #[arg(long = "list", value_name = "DECL", value_parser = parse_constrained_decl)]
    pub lists: Vec<DeclSpec>,

    /// Output format for the parse results
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Program name placed at index 0 of the token vector
    #[arg(long, default_value = "typarg")]
    pub program: String,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Tokens to parse, given after `--`
    #[arg(last = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,
}

/// How parse results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled table.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// One declaration as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclSpec {
    pub short: char,
    pub long: Option<String>,
    /// Extensions for file kinds, accepted tokens for lists.
    pub constraints: Vec<String>,
}

impl Cli {
    /// Token vector handed to the registry: program name followed by the trailing tokens.
    pub fn token_vector(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.tokens.iter().cloned())
            .collect()
    }
}

/// Value parser for kinds without constraints
fn parse_plain_decl(s: &str) -> Result<DeclSpec, String> {
    let spec = parse_constrained_decl(s)?;
    if spec.constraints.is_empty() && s.matches(':').count() <= 1 {
        Ok(spec)
    } else {
        Err(format!("'{}' takes no constraint list (expected c[:long])", s))
    }
}

/// Value parser for `c[:long[:a,b,...]]`
fn parse_constrained_decl(s: &str) -> Result<DeclSpec, String> {
    let mut parts = s.splitn(3, ':');

    let short_part = parts.next().unwrap_or_default();
    let mut chars = short_part.chars();
    let short = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(format!(
                "'{}' must start with a single-character reference",
                s
            ))
        }
    };

    let long = parts
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    let constraints = parts
        .next()
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(DeclSpec {
        short,
        long,
        constraints,
    })
}
