//! Shared application state for axum handlers.

use std::sync::Arc;

use mycommunity_app::ports::EventRegistry;
use mycommunity_app::services::event_service::EventService;

/// Application state shared across all axum handlers.
///
/// Generic over the registry type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the registry itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Event listing and submission service.
    pub event_service: Arc<EventService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            event_service: Arc::clone(&self.event_service),
        }
    }
}

impl<R> AppState<R>
where
    R: EventRegistry + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(event_service: EventService<R>) -> Self {
        Self {
            event_service: Arc::new(event_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(event_service: Arc<EventService<R>>) -> Self {
        Self { event_service }
    }
}
