//! Application layer - use cases that coordinate the loader and the graph builder.

mod setup;

pub use setup::{SetupOptions, setup_state};
