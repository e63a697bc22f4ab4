//! Event registry port — append-only persistence for events.

use std::future::Future;

use mycommunity_domain::error::MyCommunityError;
use mycommunity_domain::event::Event;

/// Ordered, append-only collection of [`Event`]s.
///
/// Implementations must serialize concurrent [`append`](Self::append) calls
/// so that none is lost, and must never expose a partially written state to
/// [`list`](Self::list).
pub trait EventRegistry {
    /// Return every stored event, in insertion order.
    ///
    /// An empty registry yields an empty vector, not an error.
    fn list(&self) -> impl Future<Output = Result<Vec<Event>, MyCommunityError>> + Send;

    /// Append a validated event at the end of the registry.
    fn append(&self, event: Event) -> impl Future<Output = Result<(), MyCommunityError>> + Send;
}
