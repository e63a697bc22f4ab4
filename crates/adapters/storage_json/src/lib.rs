//! # mycommunity-adapter-storage-json
//!
//! Flat-file persistence adapter: the whole event registry is one JSON
//! document on local disk.
//!
//! ## Responsibilities
//! - Implement the `EventRegistry` port defined in `mycommunity-app::ports`
//! - Serialize writers through a single read-modify-write critical section
//! - Replace the document atomically (temp file + rename) so a failed write
//!   never leaves a half-written file behind
//! - Distinguish a missing store (empty), an unreadable store and a corrupted one
//!
//! ## Dependency rule
//! Depends on `mycommunity-app` (for port traits) and `mycommunity-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod config;
pub mod error;
pub mod event_registry;

pub use config::Config;
pub use error::StorageError;
pub use event_registry::JsonEventRegistry;
