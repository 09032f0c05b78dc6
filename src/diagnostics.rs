//! Diagnostic events emitted while the dependency graph is built.
//!
//! The graph builder reports what it does through a [`DiagnosticSink`] rather
//! than writing to the console, so callers decide where events go. The binary
//! uses [`LogSink`]; tests record the events and assert on them.

use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent {
    /// The package index was built from all loaded packages.
    IndexBuilt { packages: usize },
    /// `dependent` declares a local dependency on `dependency`.
    DependentAdded { dependency: String, dependent: String },
    /// `package` declares `dependency`, which is not part of the local set.
    ExternalDependencySkipped { package: String, dependency: String },
    /// A local package that nothing reachable from the root depends on.
    UnreachablePackage { name: String },
    /// Traversal finished.
    GraphBuilt { packages: usize, edges: usize },
}

#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: &GraphEvent);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, event: &GraphEvent) {
        match event {
            GraphEvent::IndexBuilt { packages } => {
                debug!("Indexed {} local package(s)", packages)
            }
            GraphEvent::DependentAdded {
                dependency,
                dependent,
            } => debug!("Adding {} as a dependent of {}", dependent, dependency),
            GraphEvent::ExternalDependencySkipped {
                package,
                dependency,
            } => debug!("Skipping non-local dependency {} of {}", dependency, package),
            GraphEvent::UnreachablePackage { name } => warn!(
                "Local package {} is not reachable from the root package",
                name
            ),
            GraphEvent::GraphBuilt { packages, edges } => info!(
                "Built dependency graph: {} depended-upon package(s), {} edge(s)",
                packages, edges
            ),
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _event: &GraphEvent) {}
}
