//! Storage configuration.

use std::path::PathBuf;

use crate::error::StorageError;
use crate::event_registry::JsonEventRegistry;

/// Configuration for the JSON file storage adapter.
pub struct Config {
    /// Location of the event document (e.g. `events.json`).
    pub path: PathBuf,
}

impl Config {
    /// Build a [`JsonEventRegistry`] from this configuration.
    ///
    /// Creates the parent directory of the document when it is missing. The
    /// document itself is only created by the first append.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Prepare`] if the directory cannot be created.
    pub async fn build(self) -> Result<JsonEventRegistry, StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StorageError::Prepare)?;
        }
        tracing::debug!(path = %self.path.display(), "event registry ready");
        Ok(JsonEventRegistry::new(self.path))
    }
}
