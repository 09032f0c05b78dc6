//! File system operations backed by `tokio::fs`.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) async fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file {:?}", path))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) async fn copy_impl(&self, from: &Path, to: &Path) -> Result<u64> {
        fs::copy(from, to)
            .await
            .with_context(|| format!("Failed to copy {:?} to {:?}", from, to))
    }
}
