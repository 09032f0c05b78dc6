use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Parsed manifest of one local package.
///
/// Version specifiers are kept verbatim and never interpreted; only the
/// dependency names take part in graph construction. Declaration order is
/// preserved so the traversal follows the manifest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub name: String,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl Descriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Descriptor {
            name: name.into(),
            dependencies: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
        }
    }

    /// Parse manifest `content` read from `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| Error::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Names of all declared dependencies, runtime ones first.
    ///
    /// With `include_dev`, dev dependencies not already declared as runtime
    /// dependencies follow. Each name is yielded once.
    pub fn declared_dependencies(&self, include_dev: bool) -> impl Iterator<Item = &str> {
        let dev = self
            .dev_dependencies
            .keys()
            .filter(move |name| include_dev && !self.dependencies.contains_key(*name));
        self.dependencies.keys().chain(dev).map(String::as_str)
    }
}
