//! Argument declarations - kinds, values, and reference matching

mod declaration;
mod kind;
mod value;

pub use declaration::Declaration;
pub use kind::{ArgKind, KindTag};
pub use value::Value;
