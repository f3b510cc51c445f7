use std::path::PathBuf;

use thiserror::Error;

use catering_registry::RegistrySnapshot;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("state store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored bytes exist but are not a valid snapshot.
    #[error("stored state at {location} is corrupt: {reason}")]
    Corrupt { location: String, reason: String },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(String),
}

/// Saves and loads whole-registry snapshots.
///
/// The storage location is fixed when the store is built. `load` returns
/// `Ok(None)` when nothing has been saved yet; that is a fresh start, not a
/// failure.
///
/// ## Contract
///
/// `load` after a successful `save(s)` returns a snapshot equal to `s`.
pub trait StateStore: Send + Sync {
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), StoreError>;

    fn load(&self) -> Result<Option<RegistrySnapshot>, StoreError>;
}
