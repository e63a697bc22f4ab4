//! Axum router assembly.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use mycommunity_app::ports::EventRegistry;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the event registry routes with a `/health` probe, restricts
/// cross-origin access to `allowed_origin` and includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<R>(state: AppState<R>, allowed_origin: HeaderValue) -> Router
where
    R: EventRegistry + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(cors_layer(allowed_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the single trusted front-end origin.
///
/// Requests from any other origin get no `Access-Control-Allow-Origin` header.
/// `PUT` and `DELETE` are allowed ahead of edit/delete routes, which do not
/// exist yet.
#[must_use]
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn health_check() -> &'static str {
    "OK"
}
