//! Argument kinds and their value acceptance rules

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Value;
use crate::utils::fs::{has_accepted_extension, is_directory, is_regular_file, normalize_extension};

/// The closed set of argument kinds, each carrying its own constraints.
///
/// An empty constraint set means unconstrained: any extension for the file
/// kinds, any token for lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgKind {
    /// Boolean switch set by the presence of its reference alone.
    Flag,
    /// Any single token.
    Text,
    /// A base-10 signed integer.
    Integer,
    /// A finite decimal or scientific floating-point number.
    Floating,
    /// Path to an existing regular file.
    InputFile {
        /// Accepted extensions, stored with a leading dot.
        extensions: Vec<String>,
    },
    /// Path to a file that may not exist yet.
    OutputFile {
        /// Accepted extensions, stored with a leading dot.
        extensions: Vec<String>,
    },
    /// Consecutive tokens appended in order.
    List {
        /// Accepted tokens.
        accepted: Vec<String>,
    },
}

impl ArgKind {
    /// InputFile kind accepting the given extensions (`"txt"` and `".txt"` are equivalent).
    pub fn input_file<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ArgKind::InputFile {
            extensions: normalize_all(extensions),
        }
    }

    /// OutputFile kind accepting the given extensions.
    pub fn output_file<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ArgKind::OutputFile {
            extensions: normalize_all(extensions),
        }
    }

    /// List kind accepting the given tokens.
    pub fn list<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgKind::List {
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tag(&self) -> KindTag {
        match self {
            ArgKind::Flag => KindTag::Flag,
            ArgKind::Text => KindTag::Text,
            ArgKind::Integer => KindTag::Integer,
            ArgKind::Floating => KindTag::Floating,
            ArgKind::InputFile { .. } => KindTag::InputFile,
            ArgKind::OutputFile { .. } => KindTag::OutputFile,
            ArgKind::List { .. } => KindTag::List,
        }
    }

    /// Value stored before (or absent) a successful parse.
    pub fn zero_value(&self) -> Value {
        match self {
            ArgKind::Flag => Value::Flag(false),
            ArgKind::Text => Value::Text(String::new()),
            ArgKind::Integer => Value::Integer(0),
            ArgKind::Floating => Value::Floating(0.0),
            ArgKind::InputFile { .. } => Value::InputFile(PathBuf::new()),
            ArgKind::OutputFile { .. } => Value::OutputFile(PathBuf::new()),
            ArgKind::List { .. } => Value::List(Vec::new()),
        }
    }

    /// Validate `candidate` and convert it in one step.
    ///
    /// Returns `None` when the candidate is rejected. A Flag rejects every
    /// candidate since it never consumes a value token. For a List the
    /// returned value holds the single accepted element.
    pub fn accept(&self, candidate: &str) -> Option<Value> {
        match self {
            ArgKind::Flag => None,
            ArgKind::Text => Some(Value::Text(candidate.to_string())),
            ArgKind::Integer => candidate.parse::<i64>().ok().map(Value::Integer),
            ArgKind::Floating => candidate
                .parse::<f64>()
                .ok()
                .filter(|x| x.is_finite())
                .map(Value::Floating),
            ArgKind::InputFile { extensions } => {
                let path = Path::new(candidate);
                let admissible = !candidate.is_empty()
                    && has_accepted_extension(path, extensions)
                    && is_regular_file(path);
                admissible.then(|| Value::InputFile(path.to_path_buf()))
            }
            ArgKind::OutputFile { extensions } => {
                let path = Path::new(candidate);
                let admissible = !candidate.is_empty()
                    && has_accepted_extension(path, extensions)
                    && !is_directory(path);
                admissible.then(|| Value::OutputFile(path.to_path_buf()))
            }
            ArgKind::List { accepted } => {
                let admissible = accepted.is_empty() || accepted.iter().any(|a| a == candidate);
                admissible.then(|| Value::List(vec![candidate.to_string()]))
            }
        }
    }

    /// Constraint set of the kind; empty for kinds without constraints.
    pub fn constraints(&self) -> &[String] {
        match self {
            ArgKind::InputFile { extensions } | ArgKind::OutputFile { extensions } => extensions,
            ArgKind::List { accepted } => accepted,
            ArgKind::Flag | ArgKind::Text | ArgKind::Integer | ArgKind::Floating => &[],
        }
    }
}

fn normalize_all<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .filter_map(|e| normalize_extension(e.as_ref()))
        .collect()
}

/// Constraint-free discriminant of [`ArgKind`], used for kind-filtered lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindTag {
    Flag,
    Text,
    Integer,
    Floating,
    InputFile,
    OutputFile,
    List,
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KindTag::Flag => "flag",
            KindTag::Text => "text",
            KindTag::Integer => "integer",
            KindTag::Floating => "floating",
            KindTag::InputFile => "input-file",
            KindTag::OutputFile => "output-file",
            KindTag::List => "list",
        };
        f.write_str(name)
    }
}
