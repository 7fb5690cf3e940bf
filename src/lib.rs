//! Typarg: Typed Argument Registry
//!
//! A library for declaring named command-line arguments of distinct kinds
//! and parsing a raw token vector into validated, strongly-typed values.
//!
//! ```
//! use typarg::Registry;
//!
//! let mut registry = Registry::new();
//! registry.flag('h', Some("help")).unwrap();
//! registry.integer('x', Some("x-axis")).unwrap();
//!
//! registry.parse(["prog", "-x", "42", "extra", "--help"]);
//!
//! assert!(registry.get_flag("-h"));
//! assert_eq!(registry.get_integer("--x-axis"), 42);
//! assert_eq!(registry.positional_tokens(), ["extra"]);
//! ```

pub mod argument;
pub mod cli;
pub mod registry;
pub mod utils;

pub use argument::{ArgKind, Declaration, KindTag, Value};
pub use registry::{ArgId, Registry, RegistryError};
