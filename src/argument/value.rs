//! Typed values stored for declared arguments

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::KindTag;

/// A parsed argument value, one case per argument kind.
///
/// Serializes untagged so JSON output shows the bare value
/// (`true`, `"title"`, `42`, `["a", "b"]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Flag(bool),
    Text(String),
    Integer(i64),
    Floating(f64),
    InputFile(PathBuf),
    OutputFile(PathBuf),
    List(Vec<String>),
}

impl Value {
    /// The kind this value belongs to.
    pub fn tag(&self) -> KindTag {
        match self {
            Value::Flag(_) => KindTag::Flag,
            Value::Text(_) => KindTag::Text,
            Value::Integer(_) => KindTag::Integer,
            Value::Floating(_) => KindTag::Floating,
            Value::InputFile(_) => KindTag::InputFile,
            Value::OutputFile(_) => KindTag::OutputFile,
            Value::List(_) => KindTag::List,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(set) => Some(*set),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_floating(&self) -> Option<f64> {
        match self {
            Value::Floating(x) => Some(*x),
            _ => None,
        }
    }

    /// Path held by an InputFile or OutputFile value.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Value::InputFile(path) | Value::OutputFile(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Flag(set) => write!(f, "{}", set),
            Value::Text(text) => write!(f, "{}", text),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Floating(x) => write!(f, "{}", x),
            Value::InputFile(path) | Value::OutputFile(path) => write!(f, "{}", path.display()),
            Value::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}
