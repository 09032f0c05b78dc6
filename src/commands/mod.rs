pub mod config;
mod watch;

pub use config::{Config, WatchOptions};
pub use watch::{run, watch};
