//! Manifest loading
//!
//! Reads the manifest of every local package, parses it into a [`Descriptor`],
//! and snapshots it next to the original before anything else uses it.

mod descriptor;
mod layout;
mod loader;

pub use descriptor::Descriptor;
pub use layout::{DEFAULT_MANIFEST_FILE, ManifestLayout};
pub use loader::ManifestLoader;
