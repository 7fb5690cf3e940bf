//! Utility helpers - filesystem checks, logging, and terminal styling

pub mod fs;
mod logging;
mod styling;

pub use logging::init_tracing;
pub use styling::*;
