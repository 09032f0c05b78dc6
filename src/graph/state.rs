use serde::Serialize;

use super::{DependencyGraph, Package, PackageIndex};

/// Everything the analysis phase hands to the watch phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunState {
    pub root: Package,
    pub graph: DependencyGraph,
    pub package_map: PackageIndex,
}

impl RunState {
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.package_map.get(name)
    }

    /// Packages to rebuild when `name` changes. Empty if nothing depends on it.
    pub fn dependents_of(&self, name: &str) -> &[String] {
        self.graph.dependents(name).unwrap_or_default()
    }

    /// Local packages that are neither the root nor depended upon from it.
    pub fn orphans(&self) -> Vec<&str> {
        self.package_map
            .names()
            .filter(|name| *name != self.root.name() && !self.graph.contains(name))
            .collect()
    }
}
