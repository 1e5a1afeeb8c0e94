//! Store backend over a single pretty-printed JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use payflow_core::{StoreBackend, StoreError, StoreState};
use tracing::{debug, error};

/// Persists the whole store document as one JSON file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so readers never see a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<StoreState>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file not found");
                return Ok(None);
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read store file");
                return Err(e.into());
            }
        };

        let state: StoreState = serde_json::from_str(&raw).inspect_err(|e| {
            error!(path = %self.path.display(), error = %e, "Store file is not a valid document");
        })?;
        debug!(
            path = %self.path.display(),
            payments = state.payments.len(),
            approvals = state.approvals.len(),
            "Loaded store file"
        );
        Ok(Some(state))
    }

    fn persist(&self, state: &StoreState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(state)?;
        let temp = self.temp_path();
        fs::write(&temp, json)
            .and_then(|()| fs::rename(&temp, &self.path))
            .inspect_err(|e| {
                error!(path = %self.path.display(), error = %e, "Failed to write store file");
            })?;

        debug!(path = %self.path.display(), "Persisted store file");
        Ok(())
    }
}
