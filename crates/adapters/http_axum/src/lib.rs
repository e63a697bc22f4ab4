//! # mycommunity-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **event registry JSON API** consumed by the community web
//!   front-end (`GET /registros`, `POST /registros`)
//! - Restrict cross-origin access to a single trusted origin
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `mycommunity-app` (for port traits and services) and
//! `mycommunity-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
