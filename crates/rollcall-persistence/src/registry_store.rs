//! Persistent store for the user registry.

use std::path::{Path, PathBuf};

use rollcall_models::UserRecord;

use crate::atomic::{atomic_write_json, read_json_optional};
use crate::error::Result;

/// JSON-backed store for the user registry.
///
/// Reads happen once at startup; every save rewrites the whole file (there
/// is no append path). A missing file loads as an empty registry rather
/// than an error.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the registry, or an empty one if the file does not exist yet.
    pub fn load(&self) -> Result<Vec<UserRecord>> {
        Ok(read_json_optional(&self.path)?.unwrap_or_default())
    }

    /// Overwrites the registry file with the full contents.
    pub fn save(&self, users: &[UserRecord]) -> Result<()> {
        atomic_write_json(&self.path, &users)
    }
}
