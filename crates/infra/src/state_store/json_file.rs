//! File-backed snapshot store (pretty JSON).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use catering_registry::RegistrySnapshot;

use super::r#trait::{StateStore, StoreError};

/// Stores the snapshot as a single JSON document at a fixed path.
///
/// Writes go to a sibling temp file that is then renamed over the target, so
/// an interrupted save leaves the previous file in place.
#[derive(Debug, Clone)]
pub struct JsonFileStateStore {
    path: PathBuf,
}

impl JsonFileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

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

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StateStore for JsonFileStateStore {
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), StoreError> {
        let span = tracing::debug_span!("state_store.save", path = %self.path.display());
        let _guard = span.enter();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let encoded = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        let tmp = self.temp_path();
        fs::write(&tmp, &encoded).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            self.io_error(e)
        })?;

        tracing::info!(
            menus = snapshot.menus.len(),
            guests = snapshot.guests.len(),
            bytes = encoded.len(),
            "registry state saved"
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<RegistrySnapshot>, StoreError> {
        let span = tracing::debug_span!("state_store.load", path = %self.path.display());
        let _guard = span.enter();

        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("no saved registry state");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot: RegistrySnapshot =
            serde_json::from_slice(&raw).map_err(|e| StoreError::Corrupt {
                location: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::info!(
            menus = snapshot.menus.len(),
            guests = snapshot.guests.len(),
            "registry state loaded"
        );
        Ok(Some(snapshot))
    }
}
