//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MyCommunityError`] via `From`. Storage failures are carried as boxed
//! sources so the domain never depends on IO or serialization crates.

use std::fmt;

use serde::Serialize;

/// Boxed error source produced by an adapter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for every registry operation.
#[derive(Debug, thiserror::Error)]
pub enum MyCommunityError {
    /// The submission violated one or more field constraints.
    #[error("submission failed validation")]
    Validation(#[from] ValidationErrors),

    /// The event document exists but could not be read.
    #[error("event store unavailable")]
    StoreUnavailable(#[source] BoxError),

    /// The event document could not be parsed.
    #[error("event store is corrupted")]
    StoreCorrupted(#[source] BoxError),

    /// Writing the updated event document failed.
    #[error("failed to write event store")]
    StoreWriteFailed(#[source] BoxError),
}

/// Submission fields, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Description,
    Date,
    Time,
    Location,
    Address,
    Organizer,
    ContactEmail,
    ContactPhone,
    Category,
    Capacity,
    Free,
    Featured,
}

impl Field {
    /// Wire name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Date => "date",
            Self::Time => "time",
            Self::Location => "location",
            Self::Address => "address",
            Self::Organizer => "organizer",
            Self::ContactEmail => "contactEmail",
            Self::ContactPhone => "contactPhone",
            Self::Category => "category",
            Self::Capacity => "capacity",
            Self::Free => "free",
            Self::Featured => "featured",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every constraint violation found in one submission.
///
/// Only ever constructed non-empty by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub(crate) fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the individual violations, in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Whether any violation concerns `field`.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.iter().any(|err| err.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
