pub mod application;
pub mod commands;
pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod manifest;
pub mod runtime;
pub mod watch;

pub use error::{Error, Result};
