//! # mycommunity-domain
//!
//! Pure domain model for the mycommunity event registry.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, UTC date helpers
//! - Define the **Event** record (the sole persisted entity) and its
//!   **Category** set
//! - Define the **raw submission** boundary type and the validator that
//!   converts it into an `Event` or a complete list of field errors
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod event;
pub mod submission;
