//! Error kinds raised while loading manifests and building the dependency graph.
//!
//! Every variant is fatal for the run: there is no partial graph.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please supply a root package location as the first argument")]
    MissingRootArgument,

    #[error("Failed to read manifest {path:?}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to parse manifest {path:?}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to back up manifest {path:?} to {backup:?}")]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Package name '{name}' is declared by both {first:?} and {second:?}")]
    DuplicateLocalName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Cyclic local dependency: {}", .cycle.join(" -> "))]
    CyclicLocalDependency { cycle: Vec<String> },

    #[error("Root package '{name}' is not one of the loaded packages")]
    UnknownRoot { name: String },

    #[error("Got {locations} package location(s) but {descriptors} manifest(s)")]
    MisalignedInputs { locations: usize, descriptors: usize },
}
