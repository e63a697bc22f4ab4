//! JSON file implementation of [`EventRegistry`].

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use mycommunity_app::ports::EventRegistry;
use mycommunity_domain::error::MyCommunityError;
use mycommunity_domain::event::Event;

use crate::error::StorageError;

/// Event registry stored as a single pretty-printed JSON array.
///
/// Appends hold the write side of an internal lock across the whole
/// read-modify-write cycle; lists hold the read side. The document is only
/// ever replaced by renaming a fully written temporary file over it.
pub struct JsonEventRegistry {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonEventRegistry {
    /// Create a registry backed by the document at `path`.
    ///
    /// The file does not need to exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("events.json"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_document(&self) -> Result<Vec<Event>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::Read(err)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "event document is corrupted");
            StorageError::Parse(err)
        })
    }

    async fn write_document(&self, events: &[Event]) -> Result<(), StorageError> {
        let mut body = serde_json::to_vec_pretty(events).map_err(StorageError::Serialize)?;
        body.push(b'\n');

        let temp = self.temp_path();
        let result = match write_synced(&temp, &body).await {
            Ok(()) => fs::rename(&temp, &self.path).await,
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            if let Err(cleanup) = fs::remove_file(&temp).await {
                tracing::debug!(path = %temp.display(), error = %cleanup, "temporary document not removed");
            }
            return Err(StorageError::Write(err));
        }
        Ok(())
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

impl EventRegistry for JsonEventRegistry {
    async fn list(&self) -> Result<Vec<Event>, MyCommunityError> {
        let _guard = self.lock.read().await;
        Ok(self.read_document().await?)
    }

    async fn append(&self, event: Event) -> Result<(), MyCommunityError> {
        let _guard = self.lock.write().await;

        let mut events = self.read_document().await?;
        events.push(event);
        self.write_document(&events).await?;

        tracing::debug!(path = %self.path.display(), total = events.len(), "event document updated");
        Ok(())
    }
}
