//! Reverse dependency graph over the local packages of a run.
//!
//! # Construction
//!
//! 1. Pair each loaded [`Descriptor`] with its location in a [`PackageIndex`].
//! 2. Walk from the root through *local* dependencies only: declared names
//!    that are not in the index are external and ignored.
//! 3. Record every local edge reversed (dependency -> dependent), then expand
//!    the one-hop edges into transitive dependent lists.
//!
//! Both directions are `petgraph` graph maps: the walk is a
//! `depth_first_search` over the local edges, so each package is discovered
//! once, and a failed `toposort` of the reached edges is reported as
//! [`Error::CyclicLocalDependency`]. Dependent lists are a `Bfs` over the
//! reversed edges.

mod index;
mod reverse;
mod state;
mod walk;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use index::PackageIndex;
pub use reverse::DependencyGraph;
pub use state::RunState;

use crate::diagnostics::{DiagnosticSink, GraphEvent};
use crate::error::{Error, Result};
use crate::manifest::Descriptor;

/// A local package: its manifest and the directory it was loaded from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub descriptor: Descriptor,
    pub location: PathBuf,
}

impl Package {
    pub fn new(descriptor: Descriptor, location: PathBuf) -> Self {
        Self {
            descriptor,
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Follow `devDependencies` as well as `dependencies`.
    pub include_dev: bool,
}

/// Build the run state for the packages loaded from `locations`.
///
/// `descriptors` must be aligned with `locations`; `root` names the package
/// the traversal starts from.
#[tracing::instrument(skip(descriptors, locations, options, sink))]
pub fn build_run_state<S: DiagnosticSink + ?Sized>(
    descriptors: Vec<Descriptor>,
    locations: &[PathBuf],
    root: &str,
    options: GraphOptions,
    sink: &S,
) -> Result<RunState> {
    let index = PackageIndex::from_parts(locations, descriptors)?;
    sink.emit(&GraphEvent::IndexBuilt {
        packages: index.len(),
    });

    let root_package = index.get(root).ok_or_else(|| Error::UnknownRoot {
        name: root.to_string(),
    })?;

    let direct = walk::walk(&index, root_package, options, sink)?;
    let graph = DependencyGraph::from_direct(direct);

    let state = RunState {
        root: root_package.clone(),
        graph,
        package_map: index,
    };

    for name in state.orphans() {
        sink.emit(&GraphEvent::UnreachablePackage {
            name: name.to_string(),
        });
    }
    sink.emit(&GraphEvent::GraphBuilt {
        packages: state.graph.len(),
        edges: state.graph.edge_count(),
    });

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{MockDiagnosticSink, NullSink};
    use crate::test_utils::{RecordingSink, descriptor, locations_for};

    fn build(descriptors: Vec<Descriptor>) -> Result<RunState> {
        let locations = locations_for(&descriptors);
        let root = descriptors[0].name.clone();
        build_run_state(
            descriptors,
            &locations,
            &root,
            GraphOptions::default(),
            &NullSink,
        )
    }

    #[test]
    fn test_no_local_dependencies_gives_empty_graph() {
        let state = build(vec![
            descriptor("root", &["react", "lodash"]),
            descriptor("a", &["left-pad"]),
        ])
        .unwrap();

        assert!(state.graph.is_empty());
        assert_eq!(state.root.name(), "root");
        assert_eq!(state.package("root"), Some(&state.root));
    }

    #[test]
    fn test_chain() {
        // root -> a -> b
        let state = build(vec![
            descriptor("root", &["a"]),
            descriptor("a", &["b"]),
            descriptor("b", &[]),
        ])
        .unwrap();

        assert_eq!(state.dependents_of("a"), ["root"]);
        assert_eq!(state.dependents_of("b"), ["a", "root"]);
        assert_eq!(state.graph.direct_dependents("b").unwrap(), ["a"]);
        assert!(!state.graph.contains("root"));
    }

    #[test]
    fn test_diamond() {
        // root -> {a, b} -> c
        let state = build(vec![
            descriptor("root", &["a", "b"]),
            descriptor("a", &["c"]),
            descriptor("b", &["c"]),
            descriptor("c", &[]),
        ])
        .unwrap();

        let c = state.dependents_of("c");
        assert!(c.contains(&"a".to_string()));
        assert!(c.contains(&"b".to_string()));
        assert!(c.contains(&"root".to_string()));

        let keys: Vec<_> = state.graph.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, vec!["a", "c", "b"]);
        assert_eq!(state.graph.edge_count(), 4);
    }

    #[test]
    fn test_diamond_walks_shared_package_once() {
        let sink = RecordingSink::default();
        let descriptors = vec![
            descriptor("root", &["a", "b"]),
            descriptor("a", &["c"]),
            descriptor("b", &["c"]),
            descriptor("c", &["d"]),
            descriptor("d", &[]),
        ];
        let locations = locations_for(&descriptors);

        let state =
            build_run_state(descriptors, &locations, "root", GraphOptions::default(), &sink)
                .unwrap();

        // c -> d is recorded once even though c is reached twice
        assert_eq!(state.graph.direct_dependents("d").unwrap(), ["c"]);
        assert_eq!(sink.dependents_added(), 5);
        assert_eq!(state.dependents_of("d"), ["c", "a", "b", "root"]);
    }

    #[test]
    fn test_cycle_is_reported() {
        let err = build(vec![
            descriptor("root", &["a"]),
            descriptor("a", &["b"]),
            descriptor("b", &["a"]),
        ])
        .unwrap_err();

        match err {
            Error::CyclicLocalDependency { cycle } => assert_eq!(cycle, ["a", "b", "a"]),
            other => panic!("Expected CyclicLocalDependency, got {:?}", other),
        }
    }

    #[test]
    fn test_cycle_through_root() {
        let err = build(vec![descriptor("a", &["b"]), descriptor("b", &["a"])]).unwrap_err();
        assert_eq!(err.to_string(), "Cyclic local dependency: a -> b -> a");
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let err = build(vec![descriptor("root", &["root"])]).unwrap_err();
        match err {
            Error::CyclicLocalDependency { cycle } => assert_eq!(cycle, ["root", "root"]),
            other => panic!("Expected CyclicLocalDependency, got {:?}", other),
        }
    }

    #[test]
    fn test_deep_chain() {
        let mut descriptors = Vec::new();
        for i in 0..300 {
            let next = format!("pkg-{}", i + 1);
            descriptors.push(descriptor(&format!("pkg-{}", i), &[next.as_str()]));
        }
        descriptors.push(descriptor("pkg-300", &[]));

        let state = build(descriptors).unwrap();
        assert_eq!(state.graph.len(), 300);
        assert_eq!(state.dependents_of("pkg-300").len(), 300);
        assert_eq!(state.dependents_of("pkg-1"), ["pkg-0"]);
    }

    #[test]
    fn test_external_dependencies_are_filtered() {
        let sink = RecordingSink::default();
        let descriptors = vec![descriptor("root", &["react", "a"]), descriptor("a", &[])];
        let locations = locations_for(&descriptors);

        let state =
            build_run_state(descriptors, &locations, "root", GraphOptions::default(), &sink)
                .unwrap();

        assert!(!state.graph.contains("react"));
        assert!(state.package("react").is_none());
        assert_eq!(state.dependents_of("a"), ["root"]);
        assert!(sink.events().contains(&GraphEvent::ExternalDependencySkipped {
            package: "root".into(),
            dependency: "react".into(),
        }));
    }

    #[test]
    fn test_dev_dependencies_only_when_enabled() {
        let mut root = descriptor("root", &[]);
        root.dev_dependencies.insert("tooling".into(), "*".into());
        let descriptors = vec![root, descriptor("tooling", &[])];
        let locations = locations_for(&descriptors);

        let without = build_run_state(
            descriptors.clone(),
            &locations,
            "root",
            GraphOptions::default(),
            &NullSink,
        )
        .unwrap();
        assert!(without.graph.is_empty());

        let with = build_run_state(
            descriptors,
            &locations,
            "root",
            GraphOptions { include_dev: true },
            &NullSink,
        )
        .unwrap();
        assert_eq!(with.dependents_of("tooling"), ["root"]);
    }

    #[test]
    fn test_orphans_stay_indexed_and_are_reported() {
        let sink = RecordingSink::default();
        let descriptors = vec![
            descriptor("root", &["a"]),
            descriptor("a", &[]),
            descriptor("orphan", &["a"]),
        ];
        let locations = locations_for(&descriptors);

        let state =
            build_run_state(descriptors, &locations, "root", GraphOptions::default(), &sink)
                .unwrap();

        assert!(state.package("orphan").is_some());
        assert_eq!(state.orphans(), vec!["orphan"]);
        // Edges from unreachable packages are not walked
        assert_eq!(state.dependents_of("a"), ["root"]);
        assert!(sink.events().contains(&GraphEvent::UnreachablePackage {
            name: "orphan".into()
        }));
    }

    #[test]
    fn test_cycle_outside_reach_of_root_is_ignored() {
        let state = build(vec![
            descriptor("root", &["a"]),
            descriptor("a", &[]),
            descriptor("x", &["y"]),
            descriptor("y", &["x"]),
        ])
        .unwrap();

        assert_eq!(state.orphans(), vec!["x", "y"]);
        assert!(!state.graph.contains("x"));
    }

    #[test]
    fn test_cycle_below_diamond() {
        // root -> {a, b} -> c -> d -> c
        let err = build(vec![
            descriptor("root", &["a", "b"]),
            descriptor("a", &["c"]),
            descriptor("b", &["c"]),
            descriptor("c", &["d"]),
            descriptor("d", &["c"]),
        ])
        .unwrap_err();

        match err {
            Error::CyclicLocalDependency { cycle } => assert_eq!(cycle, ["c", "d", "c"]),
            other => panic!("Expected CyclicLocalDependency, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_names_fail() {
        let result = build(vec![descriptor("root", &[]), descriptor("root", &[])]);
        assert!(matches!(result, Err(Error::DuplicateLocalName { .. })));
    }

    #[test]
    fn test_unknown_root() {
        let descriptors = vec![descriptor("a", &[])];
        let locations = locations_for(&descriptors);

        let result = build_run_state(
            descriptors,
            &locations,
            "missing",
            GraphOptions::default(),
            &NullSink,
        );
        assert!(matches!(result, Err(Error::UnknownRoot { name }) if name == "missing"));
    }

    #[test]
    fn test_events_in_order() {
        let mut sink = MockDiagnosticSink::new();
        let mut seq = mockall::Sequence::new();

        sink.expect_emit()
            .withf(|e| *e == GraphEvent::IndexBuilt { packages: 2 })
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_emit()
            .withf(|e| {
                *e == GraphEvent::DependentAdded {
                    dependency: "a".into(),
                    dependent: "root".into(),
                }
            })
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_emit()
            .withf(|e| *e == GraphEvent::GraphBuilt { packages: 1, edges: 1 })
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let descriptors = vec![descriptor("root", &["a"]), descriptor("a", &[])];
        let locations = locations_for(&descriptors);
        build_run_state(descriptors, &locations, "root", GraphOptions::default(), &sink)
            .unwrap();
    }
}
