//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mycommunity_domain::error::{MyCommunityError, ValidationErrors};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationErrors>,
}

/// Maps handler failures to an HTTP response with appropriate status code.
pub enum ApiError {
    /// A use-case failed.
    Domain(MyCommunityError),
    /// The request body was not a JSON submission.
    Body(JsonRejection),
}

impl From<MyCommunityError> for ApiError {
    fn from(err: MyCommunityError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Body(rejection) => (
                rejection.status(),
                ErrorBody {
                    message: rejection.body_text(),
                    errors: None,
                },
            ),
            Self::Domain(MyCommunityError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "The submitted event is invalid.".to_string(),
                    errors: Some(errors),
                },
            ),
            Self::Domain(err) => {
                tracing::error!(error = ?err, "storage error");
                let message = match err {
                    MyCommunityError::StoreCorrupted(_) => "Failed to process stored event data.",
                    MyCommunityError::StoreWriteFailed(_) => {
                        "Failed to save event data; the event was not registered."
                    }
                    _ => "Failed to read event data.",
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: message.to_string(),
                        errors: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
