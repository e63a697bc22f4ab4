//! # mycommunity-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter implements:
//!   - `EventRegistry` — list & append events
//! - Define the **driving/inbound** use-case:
//!   - `EventService` — list events, submit a raw submission
//! - Guarantee that nothing reaches the registry without passing the validator
//!
//! ## Dependency rule
//! Depends on `mycommunity-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
