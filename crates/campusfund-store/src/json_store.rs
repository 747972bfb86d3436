//! Whole-file JSON persistence.
//!
//! `load()` tolerates an absent file (a fresh install) by returning an
//! empty snapshot. A file that exists but cannot be parsed is an error —
//! resetting to empty state would silently destroy data.

use std::fs;
use std::path::{Path, PathBuf};

use campusfund_types::{FundError, Result};

use crate::Snapshot;

/// A JSON file holding the full workflow state.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not touched until the first `save`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state.
    ///
    /// # Errors
    /// - [`FundError::Io`] if the file exists but cannot be read
    /// - [`FundError::Serialization`] if the file cannot be parsed
    pub fn load(&self) -> Result<Snapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no state file, starting empty");
                return Ok(Snapshot::default());
            }
            Err(err) => return Err(FundError::from(err)),
        };

        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %self.path.display(),
            users = snapshot.users.len(),
            requests = snapshot.requests.len(),
            "loaded state"
        );
        Ok(snapshot)
    }

    /// Serialize the full state, overwriting any prior content.
    ///
    /// # Errors
    /// Returns [`FundError::Io`] on write failure (disk full, permission
    /// denied, missing parent directory).
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw)?;
        tracing::debug!(
            path = %self.path.display(),
            users = snapshot.users.len(),
            requests = snapshot.requests.len(),
            "saved state"
        );
        Ok(())
    }
}
