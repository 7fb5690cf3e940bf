//! Immutable per-argument metadata and reference matching

use std::fmt;

use super::{ArgKind, Value};

/// One declared argument: a short reference (`-c`), an optional long
/// reference (`--name`), and its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    short: char,
    long: Option<String>,
    kind: ArgKind,
}

impl Declaration {
    pub fn new(kind: ArgKind, short: char, long: Option<&str>) -> Self {
        Self {
            short,
            long: long.map(str::to_string),
            kind,
        }
    }

    pub fn short(&self) -> char {
        self.short
    }

    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn kind(&self) -> &ArgKind {
        &self.kind
    }

    /// The `-c` form of the short reference.
    pub fn short_reference(&self) -> String {
        format!("-{}", self.short)
    }

    /// The `--name` form of the long reference, if declared.
    pub fn long_reference(&self) -> Option<String> {
        self.long.as_ref().map(|name| format!("--{}", name))
    }

    /// True iff `token` is exactly `-<short>` or `--<long>`.
    pub fn matches(&self, token: &str) -> bool {
        let short_hit = token.strip_prefix('-').is_some_and(|rest| {
            let mut chars = rest.chars();
            chars.next() == Some(self.short) && chars.next().is_none()
        });
        let long_hit = match (&self.long, token.strip_prefix("--")) {
            (Some(long), Some(name)) => long == name,
            _ => false,
        };
        short_hit || long_hit
    }

    /// Whether `candidate` would be accepted as this argument's value.
    pub fn validate(&self, candidate: &str) -> bool {
        self.accept(candidate).is_some()
    }

    /// Validate and convert `candidate`; see [`ArgKind::accept`].
    pub fn accept(&self, candidate: &str) -> Option<Value> {
        self.kind.accept(candidate)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.long_reference() {
            Some(long) => write!(f, "{}, {}", self.short_reference(), long),
            None => f.write_str(&self.short_reference()),
        }
    }
}
