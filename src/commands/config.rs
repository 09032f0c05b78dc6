use log::debug;

use crate::{
    application::SetupOptions,
    graph::GraphOptions,
    manifest::{DEFAULT_MANIFEST_FILE, ManifestLayout},
    runtime::Runtime,
    watch::{InertWatcher, PackageWatcher},
};

/// Settings coming from the command line and the environment.
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Manifest file name inside each package directory
    pub manifest: Option<String>,
    /// Follow devDependencies too
    pub include_dev: bool,
    /// Print the run state as JSON on stdout
    pub json: bool,
}

pub struct Config<R: Runtime, W: PackageWatcher> {
    pub runtime: R,
    pub watcher: W,
    pub setup: SetupOptions,
    pub json: bool,
}

impl<R: Runtime> Config<R, InertWatcher> {
    pub fn new(runtime: R, options: WatchOptions) -> Self {
        Self::with_watcher(runtime, InertWatcher, options)
    }
}

impl<R: Runtime, W: PackageWatcher> Config<R, W> {
    pub fn with_watcher(runtime: R, watcher: W, options: WatchOptions) -> Self {
        let manifest = options
            .manifest
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MANIFEST_FILE.to_string());
        debug!(
            "Using manifest file {:?} (include dev dependencies: {})",
            manifest, options.include_dev
        );

        Self {
            runtime,
            watcher,
            setup: SetupOptions {
                layout: ManifestLayout::new(manifest),
                graph: GraphOptions {
                    include_dev: options.include_dev,
                },
            },
            json: options.json,
        }
    }
}
