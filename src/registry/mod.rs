//! Argument registry - declarations, value store, and typed lookups

mod error;
mod parser;
mod store;

use std::path::Path;

use tracing::debug;

use crate::argument::{ArgKind, Declaration, KindTag, Value};

pub use error::RegistryError;
pub use store::ArgId;
use store::ValueStore;

/// Owns declared arguments, their values, and the positional buffer.
///
/// The registry is *unparsed* until [`Registry::parse`] runs. Parsing does
/// not reset anything: a second call appends to lists and to the positional
/// buffer and overwrites scalars that are supplied again. Use
/// [`Registry::reset`] to return to the unparsed state.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    declarations: Vec<Declaration>,
    store: ValueStore,
    positional: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new argument and initialize its value to the kind's zero value.
    ///
    /// Fails if either reference is malformed or already taken.
    pub fn declare(
        &mut self,
        kind: ArgKind,
        short: char,
        long: Option<&str>,
    ) -> Result<ArgId, RegistryError> {
        check_short(short)?;
        if let Some(name) = long {
            check_long(name)?;
        }

        let declaration = Declaration::new(kind, short, long);
        let mut references = vec![declaration.short_reference()];
        references.extend(declaration.long_reference());
        if let Some(taken) = references.into_iter().find(|r| self.find(r).is_some()) {
            return Err(RegistryError::DuplicateReference { reference: taken });
        }

        let id = self.store.push(declaration.kind().zero_value());
        debug!(
            argument = %declaration,
            kind = %declaration.kind().tag(),
            "declared argument"
        );
        self.declarations.push(declaration);
        Ok(id)
    }

    pub fn flag(&mut self, short: char, long: Option<&str>) -> Result<ArgId, RegistryError> {
        self.declare(ArgKind::Flag, short, long)
    }

    pub fn text(&mut self, short: char, long: Option<&str>) -> Result<ArgId, RegistryError> {
        self.declare(ArgKind::Text, short, long)
    }

    pub fn integer(&mut self, short: char, long: Option<&str>) -> Result<ArgId, RegistryError> {
        self.declare(ArgKind::Integer, short, long)
    }

    pub fn floating(&mut self, short: char, long: Option<&str>) -> Result<ArgId, RegistryError> {
        self.declare(ArgKind::Floating, short, long)
    }

    /// Declare an InputFile argument; an empty `extensions` accepts any extension.
    pub fn input_file<I, S>(
        &mut self,
        short: char,
        long: Option<&str>,
        extensions: I,
    ) -> Result<ArgId, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.declare(ArgKind::input_file(extensions), short, long)
    }

    /// Declare an OutputFile argument; an empty `extensions` accepts any extension.
    pub fn output_file<I, S>(
        &mut self,
        short: char,
        long: Option<&str>,
        extensions: I,
    ) -> Result<ArgId, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.declare(ArgKind::output_file(extensions), short, long)
    }

    /// Declare a List argument; an empty `accepted` accepts any token.
    pub fn list<I, S>(
        &mut self,
        short: char,
        long: Option<&str>,
        accepted: I,
    ) -> Result<ArgId, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declare(ArgKind::list(accepted), short, long)
    }

    /// Declarations in registration order.
    pub fn declarations(&self) -> impl Iterator<Item = (ArgId, &Declaration)> {
        self.declarations
            .iter()
            .enumerate()
            .map(|(index, declaration)| (ArgId(index), declaration))
    }

    pub fn declaration(&self, id: ArgId) -> Option<&Declaration> {
        self.declarations.get(id.index())
    }

    /// Current value of a declaration, zero value included.
    pub fn value(&self, id: ArgId) -> Option<&Value> {
        self.store.get(id)
    }

    /// Handle of the first declaration matching `reference`, of any kind.
    pub fn find(&self, reference: &str) -> Option<ArgId> {
        self.declarations
            .iter()
            .position(|d| d.matches(reference))
            .map(ArgId)
    }

    fn find_kind(&self, tag: KindTag, reference: &str) -> Option<&Value> {
        let index = self
            .declarations
            .iter()
            .position(|d| d.kind().tag() == tag && d.matches(reference))?;
        self.store.get(ArgId(index))
    }

    /// Whether the argument behind `reference` received a value during parsing.
    ///
    /// Distinguishes "supplied as 0" from "not supplied or rejected", which the
    /// zero-valued getters cannot.
    pub fn is_supplied(&self, reference: &str) -> bool {
        self.find(reference)
            .is_some_and(|id| self.store.is_supplied(id))
    }

    /// The parsed value behind `reference`, or `None` when it was not supplied.
    pub fn supplied(&self, reference: &str) -> Option<&Value> {
        let id = self.find(reference)?;
        if self.store.is_supplied(id) {
            self.store.get(id)
        } else {
            None
        }
    }

    pub fn get_flag(&self, reference: &str) -> bool {
        self.find_kind(KindTag::Flag, reference)
            .and_then(Value::as_flag)
            .unwrap_or(false)
    }

    pub fn get_text(&self, reference: &str) -> &str {
        self.find_kind(KindTag::Text, reference)
            .and_then(Value::as_text)
            .unwrap_or("")
    }

    pub fn get_integer(&self, reference: &str) -> i64 {
        self.find_kind(KindTag::Integer, reference)
            .and_then(Value::as_integer)
            .unwrap_or(0)
    }

    pub fn get_floating(&self, reference: &str) -> f64 {
        self.find_kind(KindTag::Floating, reference)
            .and_then(Value::as_floating)
            .unwrap_or(0.0)
    }

    /// Validated input path, or an empty path when unset.
    pub fn get_input_file(&self, reference: &str) -> &Path {
        self.find_kind(KindTag::InputFile, reference)
            .and_then(Value::as_path)
            .unwrap_or_else(|| Path::new(""))
    }

    /// Validated output path, or an empty path when unset.
    pub fn get_output_file(&self, reference: &str) -> &Path {
        self.find_kind(KindTag::OutputFile, reference)
            .and_then(Value::as_path)
            .unwrap_or_else(|| Path::new(""))
    }

    pub fn get_list(&self, reference: &str) -> &[String] {
        self.find_kind(KindTag::List, reference)
            .and_then(Value::as_list)
            .unwrap_or(&[])
    }

    /// Tokens that matched no declaration, in first-seen order.
    pub fn positional_tokens(&self) -> &[String] {
        &self.positional
    }

    /// Return every value to its zero value and clear the positional buffer.
    pub fn reset(&mut self) {
        for (index, declaration) in self.declarations.iter().enumerate() {
            self.store.reset(ArgId(index), declaration.kind().zero_value());
        }
        self.positional.clear();
    }
}

fn check_short(short: char) -> Result<(), RegistryError> {
    let reason = if short == '-' {
        "short reference must not be '-'"
    } else if short.is_whitespace() || short.is_control() {
        "short reference must be a visible character"
    } else {
        return Ok(());
    };
    Err(RegistryError::InvalidReference {
        reference: format!("-{}", short),
        reason,
    })
}

fn check_long(name: &str) -> Result<(), RegistryError> {
    let reason = if name.is_empty() {
        "long reference must not be empty"
    } else if name.starts_with('-') {
        "long reference must not start with '-'"
    } else if name.contains('=') {
        "long reference must not contain '='"
    } else if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        "long reference must not contain whitespace"
    } else {
        return Ok(());
    };
    Err(RegistryError::InvalidReference {
        reference: format!("--{}", name),
        reason,
    })
}
