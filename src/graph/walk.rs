use indexmap::IndexMap;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{Control, DfsEvent, depth_first_search};

use super::{GraphOptions, Package, PackageIndex};
use crate::diagnostics::{DiagnosticSink, GraphEvent};
use crate::error::{Error, Result};

/// Local dependency edges (dependent -> dependency) of every indexed package.
///
/// Each package's edges keep its declaration order, which is the order the
/// walk follows them in.
fn local_graph<'a>(index: &'a PackageIndex, options: GraphOptions) -> DiGraphMap<&'a str, ()> {
    let mut graph = DiGraphMap::new();

    for package in index.iter() {
        graph.add_node(package.name());
        for dependency in package.descriptor.declared_dependencies(options.include_dev) {
            if let Some(local) = index.get(dependency) {
                graph.add_edge(package.name(), local.name(), ());
            }
        }
    }

    graph
}

/// Walk everything reachable from `root`, returning the one-hop reverse edges
/// (dependency -> dependents) in the order they were met.
///
/// Every package is discovered once, so diamonds are not re-walked. Local
/// dependencies that loop back are reported as
/// [`Error::CyclicLocalDependency`].
pub(crate) fn walk<S: DiagnosticSink + ?Sized>(
    index: &PackageIndex,
    root: &Package,
    options: GraphOptions,
    sink: &S,
) -> Result<IndexMap<String, Vec<String>>> {
    let local = local_graph(index, options);

    let mut reached: DiGraphMap<&str, ()> = DiGraphMap::new();
    let mut direct: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut path: Vec<&str> = Vec::new();
    let mut first_cycle: Option<Vec<String>> = None;

    reached.add_node(root.name());
    depth_first_search(&local, Some(root.name()), |event| {
        match event {
            DfsEvent::Discover(name, _) => {
                path.push(name);
                report_external(index, name, options, sink);
            }
            DfsEvent::TreeEdge(dependent, dependency)
            | DfsEvent::BackEdge(dependent, dependency)
            | DfsEvent::CrossForwardEdge(dependent, dependency) => {
                sink.emit(&GraphEvent::DependentAdded {
                    dependency: dependency.to_string(),
                    dependent: dependent.to_string(),
                });
                direct
                    .entry(dependency.to_string())
                    .or_default()
                    .push(dependent.to_string());
                reached.add_edge(dependent, dependency, ());

                if let DfsEvent::BackEdge(..) = event {
                    first_cycle.get_or_insert_with(|| extract_cycle_path(&path, dependency));
                }
            }
            DfsEvent::Finish(..) => {
                path.pop();
            }
        }
        Control::<()>::Continue
    });

    if let Err(cycle) = toposort(&reached, None) {
        let cycle = first_cycle.unwrap_or_else(|| {
            let name = cycle.node_id().to_string();
            vec![name.clone(), name]
        });
        return Err(Error::CyclicLocalDependency { cycle });
    }

    Ok(direct)
}

fn report_external<S: DiagnosticSink + ?Sized>(
    index: &PackageIndex,
    name: &str,
    options: GraphOptions,
    sink: &S,
) {
    let Some(package) = index.get(name) else {
        return;
    };
    for dependency in package.descriptor.declared_dependencies(options.include_dev) {
        if !index.contains(dependency) {
            sink.emit(&GraphEvent::ExternalDependencySkipped {
                package: name.to_string(),
                dependency: dependency.to_string(),
            });
        }
    }
}

/// `target` is on the current DFS path; the cycle runs from it back to itself.
fn extract_cycle_path(path: &[&str], target: &str) -> Vec<String> {
    let start = path.iter().position(|name| *name == target).unwrap_or(0);

    let mut cycle: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
    cycle.push(target.to_string());
    cycle
}
