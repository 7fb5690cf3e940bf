//! Single-pass token consumption

use std::ffi::OsString;

use tracing::{debug, trace};

use super::{ArgId, Registry};
use crate::argument::{ArgKind, Value};

impl Registry {
    /// Parse a raw token vector. Index 0 is the program name and is skipped.
    ///
    /// Tokens are walked left to right. A token matching a declaration
    /// consumes the value tokens its kind accepts; a rejected value token is
    /// left in place and examined on its own next. Lists also stop at a token
    /// that is itself a declared reference. Tokens matching nothing
    /// go to the positional buffer. Parsing never fails: rejected or missing
    /// values leave the argument at its current value.
    pub fn parse<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();
        let mut index = 1;

        while index < tokens.len() {
            let token = tokens[index].as_ref();
            index += match self.find(token) {
                Some(id) => 1 + self.consume(id, token, &tokens[index + 1..]),
                None => {
                    debug!(token, "positional token");
                    self.positional.push(token.to_string());
                    1
                }
            };
        }
    }

    /// Parse the current process's arguments, converting non-UTF-8 lossily.
    pub fn parse_env(&mut self) {
        self.parse_os(std::env::args_os());
    }

    /// Parse OS strings, replacing invalid UTF-8 with `U+FFFD`.
    pub fn parse_os<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = OsString>,
    {
        self.parse(lossy_tokens(tokens));
    }

    /// Apply the declaration behind `id` to the tokens following its
    /// reference. Returns how many of them were consumed.
    fn consume<S: AsRef<str>>(&mut self, id: ArgId, reference: &str, rest: &[S]) -> usize {
        let declaration = &self.declarations[id.index()];

        match declaration.kind() {
            ArgKind::Flag => {
                debug!(reference, "flag set");
                self.store.store(id, Value::Flag(true));
                0
            }
            ArgKind::List { .. } => {
                let mut taken = 0;
                for candidate in rest.iter().map(|c| c.as_ref()) {
                    if self.find(candidate).is_some() {
                        trace!(reference, candidate, "list stopped at declared reference");
                        break;
                    }
                    match declaration.accept(candidate) {
                        Some(value) => {
                            self.store.store(id, value);
                            taken += 1;
                        }
                        None => {
                            // End of list and a malformed element look the same here.
                            trace!(reference, candidate, "list stopped at rejected token");
                            break;
                        }
                    }
                }
                debug!(reference, taken, "list elements stored");
                taken
            }
            ArgKind::Text
            | ArgKind::Integer
            | ArgKind::Floating
            | ArgKind::InputFile { .. }
            | ArgKind::OutputFile { .. } => {
                let candidate = rest.first().map(|c| c.as_ref());
                match candidate.and_then(|c| declaration.accept(c)) {
                    Some(value) => {
                        debug!(reference, value = %value, "value stored");
                        self.store.store(id, value);
                        1
                    }
                    None => {
                        trace!(reference, ?candidate, "value token missing or rejected");
                        0
                    }
                }
            }
        }
    }
}

fn lossy_tokens<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    tokens
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
