use futures_util::future::try_join_all;
use log::debug;
use std::path::{Path, PathBuf};

use super::{Descriptor, ManifestLayout};
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// Reads and snapshots the manifests of a set of local packages.
pub struct ManifestLoader<'a, R: Runtime> {
    runtime: &'a R,
    layout: &'a ManifestLayout,
}

impl<'a, R: Runtime> ManifestLoader<'a, R> {
    pub fn new(runtime: &'a R, layout: &'a ManifestLayout) -> Self {
        Self { runtime, layout }
    }

    /// Load every manifest concurrently.
    ///
    /// The result is in the same order as `locations`. The first failure
    /// aborts the whole load.
    #[tracing::instrument(skip(self))]
    pub async fn load_all(&self, locations: &[PathBuf]) -> Result<Vec<Descriptor>> {
        try_join_all(locations.iter().map(|location| self.load(location))).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn load(&self, location: &Path) -> Result<Descriptor> {
        let path = self.layout.manifest_path(location);
        debug!("Reading manifest {:?}", path);

        let content = self
            .runtime
            .read_to_string(&path)
            .await
            .map_err(|source| Error::ManifestRead {
                path: path.clone(),
                source,
            })?;

        Descriptor::parse(&path, &content)
    }

    /// Copy every manifest to its backup location concurrently.
    ///
    /// Returns the backup paths in the same order as `locations`.
    #[tracing::instrument(skip(self))]
    pub async fn backup_all(&self, locations: &[PathBuf]) -> Result<Vec<PathBuf>> {
        try_join_all(locations.iter().map(|location| self.backup(location))).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn backup(&self, location: &Path) -> Result<PathBuf> {
        let path = self.layout.manifest_path(location);
        let backup = self.layout.backup_path(location);
        debug!("Backing up {:?} to {:?}", path, backup);

        self.runtime
            .copy(&path, &backup)
            .await
            .map_err(|source| Error::Backup {
                path,
                backup: backup.clone(),
                source,
            })?;

        Ok(backup)
    }
}
