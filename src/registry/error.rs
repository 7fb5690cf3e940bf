//! Errors raised while declaring arguments

use thiserror::Error;

/// Errors that can occur when declaring an argument on a [`Registry`](super::Registry).
///
/// Parsing itself never fails; these only guard the declaration contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A `-c` or `--name` reference is already taken by an earlier declaration.
    #[error("Reference '{reference}' is already declared")]
    DuplicateReference {
        /// The colliding reference in its dashed form.
        reference: String,
    },

    /// The reference can never be matched as a single token.
    #[error("Invalid reference '{reference}': {reason}")]
    InvalidReference {
        /// The rejected reference in its dashed form.
        reference: String,
        /// Why the reference was rejected.
        reason: &'static str,
    },
}
