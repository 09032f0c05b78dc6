use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

/// Where a package keeps its manifest and the manifest's backup.
///
/// For a package at `<location>` with manifest file `package.json`:
/// - manifest: `<location>/package.json`
/// - backup: `<location>/.package.json.bak`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLayout {
    manifest_file: String,
}

impl ManifestLayout {
    pub fn new(manifest_file: impl Into<String>) -> Self {
        Self {
            manifest_file: manifest_file.into(),
        }
    }

    pub fn manifest_file(&self) -> &str {
        &self.manifest_file
    }

    pub fn manifest_path(&self, location: &Path) -> PathBuf {
        location.join(&self.manifest_file)
    }

    pub fn backup_path(&self, location: &Path) -> PathBuf {
        location.join(format!(".{}.bak", self.manifest_file))
    }
}

impl Default for ManifestLayout {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_FILE)
    }
}
