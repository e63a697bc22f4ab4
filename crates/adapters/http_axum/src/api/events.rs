//! JSON handlers for the event registry.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mycommunity_app::ports::EventRegistry;
use mycommunity_domain::event::Event;
use mycommunity_domain::submission::RawSubmission;

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation body for a successful submission.
#[derive(Serialize)]
pub struct SubmitBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Event>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the submit endpoint.
pub enum SubmitResponse {
    Registered,
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Registered => Json(SubmitBody {
                message: "Event registered successfully.",
            })
            .into_response(),
        }
    }
}

/// `GET /registros`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: EventRegistry + Send + Sync + 'static,
{
    let events = state.event_service.list_events().await?;
    Ok(ListResponse::Ok(Json(events)))
}

/// `POST /registros`
pub async fn submit<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<RawSubmission>, JsonRejection>,
) -> Result<SubmitResponse, ApiError>
where
    R: EventRegistry + Send + Sync + 'static,
{
    let Json(raw) = payload?;
    state.event_service.submit(raw).await?;
    Ok(SubmitResponse::Registered)
}
