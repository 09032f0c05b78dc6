use indexmap::IndexMap;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Bfs;
use serde::Serialize;

/// Reverse dependency graph: package name to the names of the packages that
/// depend on it.
///
/// Only packages something depends on are keys. Keys keep the order in which
/// the traversal first depended on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    /// Direct and transitive dependents, nearest first.
    dependents: IndexMap<String, Vec<String>>,
    /// One-hop dependents in the order the edges were recorded.
    direct: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Expand one-hop reverse edges into full dependent lists.
    ///
    /// Each list is a breadth-first search over the reversed edges: a
    /// package's own dependents first, then theirs, every name once.
    pub fn from_direct(direct: IndexMap<String, Vec<String>>) -> Self {
        let dependents: IndexMap<String, Vec<String>> = {
            let mut reverse: DiGraphMap<&str, ()> = DiGraphMap::new();
            for (dependency, dependents) in &direct {
                reverse.add_node(dependency.as_str());
                for dependent in dependents {
                    reverse.add_edge(dependency.as_str(), dependent.as_str(), ());
                }
            }

            direct
                .keys()
                .map(|name| (name.clone(), transitive_dependents(&reverse, name)))
                .collect()
        };

        Self { dependents, direct }
    }

    /// All packages that depend on `name`, directly or transitively.
    pub fn dependents(&self, name: &str) -> Option<&[String]> {
        self.dependents.get(name).map(Vec::as_slice)
    }

    /// Packages that declare `name` as a dependency themselves.
    pub fn direct_dependents(&self, name: &str) -> Option<&[String]> {
        self.direct.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dependents.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }

    /// Number of direct dependency edges between local packages.
    pub fn edge_count(&self) -> usize {
        self.direct.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.dependents
            .iter()
            .map(|(name, dependents)| (name.as_str(), dependents.as_slice()))
    }
}

fn transitive_dependents<'a>(reverse: &DiGraphMap<&'a str, ()>, name: &'a str) -> Vec<String> {
    let mut bfs = Bfs::new(reverse, name);
    let mut dependents = Vec::new();

    while let Some(dependent) = bfs.next(reverse) {
        if dependent != name {
            dependents.push(dependent.to_string());
        }
    }

    dependents
}
