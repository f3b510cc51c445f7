use std::sync::RwLock;

use catering_registry::RegistrySnapshot;

use super::r#trait::{StateStore, StoreError};

/// In-memory snapshot store.
///
/// Intended for tests/dev. Holds the serialized JSON so a round trip goes
/// through the same encoding as the file store.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    blob: RwLock<Option<String>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw bytes (e.g. to simulate a corrupt save).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            blob: RwLock::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.blob.read().ok().and_then(|b| b.clone())
    }
}

impl StateStore for InMemoryStateStore {
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_string(snapshot).map_err(|e| StoreError::Serialize(e.to_string()))?;

        let mut blob = self
            .blob
            .write()
            .map_err(|_| StoreError::Serialize("state lock poisoned".to_string()))?;
        *blob = Some(encoded);
        Ok(())
    }

    fn load(&self) -> Result<Option<RegistrySnapshot>, StoreError> {
        let Some(raw) = self.raw() else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                location: "memory".to_string(),
                reason: e.to_string(),
            })
    }
}
