//! Storage-specific error type wrapping IO and JSON errors.

use mycommunity_domain::error::MyCommunityError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The document exists but could not be read.
    #[error("failed to read event document")]
    Read(#[source] std::io::Error),

    /// The document content is not a JSON array of events.
    #[error("failed to parse event document")]
    Parse(#[source] serde_json::Error),

    /// The updated document could not be encoded.
    #[error("failed to encode event document")]
    Serialize(#[source] serde_json::Error),

    /// The updated document could not be written or moved into place.
    #[error("failed to write event document")]
    Write(#[source] std::io::Error),

    /// The directory holding the document could not be created.
    #[error("failed to prepare storage directory")]
    Prepare(#[source] std::io::Error),
}

impl From<StorageError> for MyCommunityError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Read(_) | StorageError::Prepare(_) => {
                Self::StoreUnavailable(Box::new(err))
            }
            StorageError::Parse(_) => Self::StoreCorrupted(Box::new(err)),
            StorageError::Serialize(_) | StorageError::Write(_) => {
                Self::StoreWriteFailed(Box::new(err))
            }
        }
    }
}
