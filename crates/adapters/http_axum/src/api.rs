//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod events;

use axum::Router;
use axum::routing::get;

use mycommunity_app::ports::EventRegistry;

use crate::state::AppState;

/// Build the event registry sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: EventRegistry + Send + Sync + 'static,
{
    Router::new().route("/registros", get(events::list::<R>).post(events::submit::<R>))
}
