//! Setup use case - turns package locations into a [`RunState`].
//!
//! This use case coordinates:
//! - Manifest reads (concurrent, all-or-nothing)
//! - Manifest backups (after every read succeeded)
//! - Graph construction rooted at the first location

use log::info;
use std::path::PathBuf;

use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::graph::{GraphOptions, RunState, build_run_state};
use crate::manifest::{ManifestLayout, ManifestLoader};
use crate::runtime::Runtime;

#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    pub layout: ManifestLayout,
    pub graph: GraphOptions,
}

/// Load, back up and analyse the packages at `locations`.
///
/// The first location is the root package; the rest are its local
/// dependencies. No location at all is [`Error::MissingRootArgument`].
#[tracing::instrument(skip(runtime, options, sink))]
pub async fn setup_state<R: Runtime, S: DiagnosticSink + ?Sized>(
    runtime: &R,
    locations: &[PathBuf],
    options: &SetupOptions,
    sink: &S,
) -> Result<RunState> {
    if locations.is_empty() {
        return Err(Error::MissingRootArgument);
    }

    let loader = ManifestLoader::new(runtime, &options.layout);
    let descriptors = loader.load_all(locations).await?;
    let root = descriptors
        .first()
        .map(|descriptor| descriptor.name.clone())
        .ok_or(Error::MissingRootArgument)?;

    let backups = loader.backup_all(locations).await?;
    info!("Backed up {} manifest(s)", backups.len());

    build_run_state(descriptors, locations, &root, options.graph, sink)
}
